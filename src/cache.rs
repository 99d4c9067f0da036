//! Per-session analysis caches
//!
//! One [`AnalysisCache`] backs one analysis session. It is created empty,
//! passed by mutable reference into every operation, and discarded (or
//! [`clear`](AnalysisCache::clear)ed) at session end. Nothing in here is
//! global; independent sessions can coexist in one process as long as each
//! cache has a single logical writer.
//!
//! Two invalidation policies live side by side on purpose:
//!
//! - the existence map is a stable snapshot: once a path has been checked it
//!   is never re-checked for the rest of the session, even if the file is
//!   created or deleted afterward (assumption: the workspace does not mutate
//!   mid-session);
//! - the dependency map is fingerprint-validated: an entry is only served
//!   while the file's live fingerprint still matches the stored one.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::UNIX_EPOCH;

use crate::core::ImportEdge;

/// Cheap change detector for a file: last-modified time plus byte size.
///
/// Only ever compared for equality; equal fingerprints mean the file is
/// assumed unchanged since last observation. This is not a content hash.
pub type Fingerprint = String;

/// Fingerprint of a file, or `None` if the file cannot be stat'd
/// (missing, permission error). Never fails.
pub fn fingerprint_of(file: &Path) -> Option<Fingerprint> {
    let metadata = std::fs::metadata(file).ok()?;
    let modified = metadata.modified().ok()?;
    let nanos = modified
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();
    Some(format!("{nanos}-{}", metadata.len()))
}

/// Fingerprint-stamped import list for one file
#[derive(Debug, Clone)]
pub struct CachedImports {
    fingerprint: Fingerprint,
    edges: Arc<Vec<ImportEdge>>,
}

/// Session-scoped cache shared by resolution, extraction and detection
#[derive(Debug, Default)]
pub struct AnalysisCache {
    existence: HashMap<PathBuf, bool>,
    dependencies: HashMap<PathBuf, CachedImports>,
    patterns: HashMap<String, Option<glob::Pattern>>,
    reported: HashSet<String>,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `file` exists, answered from the stable snapshot
    ///
    /// The first call per path performs one filesystem check and stores the
    /// answer permanently; later calls never touch the filesystem again for
    /// the remainder of the session.
    pub fn exists(&mut self, file: &Path) -> bool {
        if let Some(&known) = self.existence.get(file) {
            return known;
        }
        let found = std::fs::metadata(file).is_ok();
        self.existence.insert(file.to_path_buf(), found);
        found
    }

    /// True iff `file` has a cached import list whose stored fingerprint
    /// matches the file's live fingerprint
    ///
    /// False when there is no entry, the file is no longer readable, or the
    /// fingerprint differs.
    pub fn is_fresh(&self, file: &Path) -> bool {
        match (self.dependencies.get(file), fingerprint_of(file)) {
            (Some(cached), Some(live)) => cached.fingerprint == live,
            _ => false,
        }
    }

    /// The cached import list for `file`, regardless of freshness
    ///
    /// The returned list is the shared backing collection, not a copy;
    /// callers must treat it as read-only.
    pub fn cached_imports(&self, file: &Path) -> Option<Arc<Vec<ImportEdge>>> {
        self.dependencies
            .get(file)
            .map(|cached| Arc::clone(&cached.edges))
    }

    /// Replace the import entry for `file` atomically
    ///
    /// Fingerprint and edge list are always updated together so the entry is
    /// never left half-consistent.
    pub fn store_imports(
        &mut self,
        file: &Path,
        fingerprint: Fingerprint,
        edges: Vec<ImportEdge>,
    ) -> Arc<Vec<ImportEdge>> {
        let edges = Arc::new(edges);
        self.dependencies.insert(
            file.to_path_buf(),
            CachedImports {
                fingerprint,
                edges: Arc::clone(&edges),
            },
        );
        edges
    }

    /// Compiled matcher for a glob pattern, memoized for the session
    ///
    /// Pattern strings are immutable per session, so entries never need
    /// invalidation. Invalid patterns memoize to `None` and simply never
    /// match.
    pub fn pattern(&mut self, raw: &str) -> Option<&glob::Pattern> {
        self.patterns
            .entry(raw.to_string())
            .or_insert_with(|| glob::Pattern::new(raw).ok())
            .as_ref()
    }

    /// Record a cycle signature; true iff it had not been reported yet in
    /// this session
    pub fn mark_reported(&mut self, signature: String) -> bool {
        self.reported.insert(signature)
    }

    /// Number of distinct cycle signatures reported so far
    pub fn reported_count(&self) -> usize {
        self.reported.len()
    }

    /// Empty every map and set, leaving the cache immediately usable
    pub fn clear(&mut self) {
        self.existence.clear();
        self.dependencies.clear();
        self.patterns.clear();
        self.reported.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_fingerprint_stable_for_unmodified_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.ts");
        fs::write(&file, "export const a = 1;").unwrap();

        let first = fingerprint_of(&file).unwrap();
        let second = fingerprint_of(&file).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fingerprint_changes_with_byte_length() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.ts");
        fs::write(&file, "export const a = 1;").unwrap();
        let before = fingerprint_of(&file).unwrap();

        fs::write(&file, "export const a = 1;\nexport const b = 2;").unwrap();
        let after = fingerprint_of(&file).unwrap();

        assert_ne!(before, after);
    }

    #[test]
    fn test_fingerprint_missing_file() {
        let temp = TempDir::new().unwrap();
        assert_eq!(fingerprint_of(&temp.path().join("missing.ts")), None);
    }

    #[test]
    fn test_existence_is_sticky() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.ts");
        fs::write(&file, "").unwrap();

        let mut cache = AnalysisCache::new();
        assert!(cache.exists(&file));

        // The snapshot outlives the file on disk.
        fs::remove_file(&file).unwrap();
        assert!(cache.exists(&file));

        // And a fresh cache sees the real state again.
        let mut fresh = AnalysisCache::new();
        assert!(!fresh.exists(&file));
    }

    #[test]
    fn test_is_fresh_requires_matching_fingerprint() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.ts");
        fs::write(&file, "import './b';").unwrap();

        let mut cache = AnalysisCache::new();
        assert!(!cache.is_fresh(&file));

        let fingerprint = fingerprint_of(&file).unwrap();
        cache.store_imports(&file, fingerprint, Vec::new());
        assert!(cache.is_fresh(&file));

        fs::write(&file, "import './b';\nimport './c';").unwrap();
        assert!(!cache.is_fresh(&file));
    }

    #[test]
    fn test_store_imports_returns_shared_backing_list() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.ts");
        fs::write(&file, "").unwrap();

        let mut cache = AnalysisCache::new();
        let stored = cache.store_imports(&file, "fp".to_string(), Vec::new());
        let fetched = cache.cached_imports(&file).unwrap();

        assert!(Arc::ptr_eq(&stored, &fetched));
    }

    #[test]
    fn test_pattern_memoization() {
        let mut cache = AnalysisCache::new();

        assert!(cache.pattern("*.generated").is_some());
        assert!(cache.pattern("*.generated").unwrap().matches("api.generated"));

        // Invalid patterns memoize to None instead of erroring on every call.
        assert!(cache.pattern("[").is_none());
        assert!(cache.pattern("[").is_none());
    }

    #[test]
    fn test_mark_reported_dedups() {
        let mut cache = AnalysisCache::new();

        assert!(cache.mark_reported("a -> b -> a".to_string()));
        assert!(!cache.mark_reported("a -> b -> a".to_string()));
        assert_eq!(cache.reported_count(), 1);
    }

    #[test]
    fn test_clear_leaves_cache_usable() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.ts");
        fs::write(&file, "").unwrap();

        let mut cache = AnalysisCache::new();
        cache.exists(&file);
        cache.store_imports(&file, "fp".to_string(), Vec::new());
        cache.mark_reported("sig".to_string());
        cache.pattern("*.ts");

        cache.clear();

        assert_eq!(cache.reported_count(), 0);
        assert!(cache.cached_imports(&file).is_none());
        // Existence is re-checked after a clear.
        fs::remove_file(&file).unwrap();
        assert!(!cache.exists(&file));
    }
}
