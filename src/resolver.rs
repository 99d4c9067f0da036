//! Module specifier resolution
//!
//! Turns a raw specifier plus the location of the file containing it into an
//! absolute, normalized file identity, or `None` when the reference leaves
//! the analyzable workspace (external package, built-in module, unresolvable
//! path). Resolution is a pure function of its inputs and the filesystem
//! state at call time; every existence probe goes through the session
//! cache's stable snapshot.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::cache::AnalysisCache;
use crate::core::AnalysisOptions;

/// Resolves specifiers against one workspace's options
pub struct ModuleResolver<'a> {
    options: &'a AnalysisOptions,
}

impl<'a> ModuleResolver<'a> {
    pub fn new(options: &'a AnalysisOptions) -> Self {
        Self { options }
    }

    /// Resolve `specifier` as written in `from_file`
    ///
    /// Resolution order, first success wins:
    ///
    /// 1. Relative (`./`, `../`): resolved against the directory of
    ///    `from_file`. If the exact computed path exists it is returned
    ///    as-is - including when that path is a directory, in which case no
    ///    barrel probe happens even if a barrel file exists inside it (kept
    ///    as observable behavior; whether that is desirable is an open
    ///    product question). Otherwise the configured extensions are probed
    ///    in order, then the configured barrel names inside the path.
    /// 2. Aliased: a privileged alias prefix maps to the workspace's source
    ///    subdirectory; any other `@scope/...` specifier maps to the
    ///    workspace root with the scope segment stripped. Both get the same
    ///    probe sequence as relative paths.
    /// 3. Everything else is a bare specifier (external package or built-in
    ///    module) and terminates the graph: `None`.
    pub fn resolve(
        &self,
        specifier: &str,
        from_file: &Path,
        cache: &mut AnalysisCache,
    ) -> Option<PathBuf> {
        if specifier.starts_with("./") || specifier.starts_with("../") {
            let base = from_file.parent()?.join(specifier);
            return self.probe(normalize_path(&base), cache);
        }

        if let Some(rest) = self
            .options
            .alias_prefixes
            .iter()
            .find_map(|prefix| specifier.strip_prefix(prefix.as_str()))
        {
            let base = self
                .options
                .workspace_root
                .join(&self.options.source_dir)
                .join(rest);
            return self.probe(normalize_path(&base), cache);
        }

        if let Some(rest) = scoped_remainder(specifier) {
            let base = self.options.workspace_root.join(rest);
            return self.probe(normalize_path(&base), cache);
        }

        None
    }

    /// Exact path, then the extension probe, then barrels inside the path
    ///
    /// At most one existence check per candidate, short-circuiting on the
    /// first hit.
    fn probe(&self, base: PathBuf, cache: &mut AnalysisCache) -> Option<PathBuf> {
        if cache.exists(&base) {
            return Some(base);
        }

        for extension in &self.options.extensions {
            let candidate = append_extension(&base, extension);
            if cache.exists(&candidate) {
                return Some(candidate);
            }
        }

        for barrel in &self.options.barrel_names {
            let candidate = base.join(barrel);
            if cache.exists(&candidate) {
                return Some(candidate);
            }
        }

        None
    }
}

/// Absolute, normalized identity for a file
///
/// Relative inputs are anchored at the workspace root. Two spellings of the
/// same path normalize to one identity; symlinks are out of scope.
pub fn file_id(path: &Path, workspace_root: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&workspace_root.join(path))
    }
}

/// Lexically collapse `.` and `..` components without touching the
/// filesystem
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` above the root is dropped rather than kept dangling
                if !normalized.pop() && !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Suffix an extension onto a path without replacing an existing one
///
/// `./api.service` probed with `ts` must become `api.service.ts`, which
/// rules out `Path::with_extension`.
fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut raw = OsString::from(path.as_os_str());
    raw.push(".");
    raw.push(extension);
    PathBuf::from(raw)
}

/// Remainder of an `@scope/...` specifier, with the scope segment stripped
fn scoped_remainder(specifier: &str) -> Option<&str> {
    let rest = specifier.strip_prefix('@')?;
    let slash = rest.find('/')?;
    let remainder = &rest[slash + 1..];
    if remainder.is_empty() {
        None
    } else {
        Some(remainder)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn workspace() -> (TempDir, AnalysisOptions) {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir_all(root.join("src/components")).unwrap();
        fs::create_dir_all(root.join("src/utils")).unwrap();
        fs::create_dir_all(root.join("shared/models")).unwrap();
        fs::write(root.join("src/app.ts"), "").unwrap();
        fs::write(root.join("src/api.service.ts"), "").unwrap();
        fs::write(root.join("src/components/button.tsx"), "").unwrap();
        fs::write(root.join("src/utils/index.ts"), "").unwrap();
        fs::write(root.join("shared/models/user.ts"), "").unwrap();

        let options = AnalysisOptions::new(root);
        (temp, options)
    }

    #[test]
    fn test_relative_extension_probe() {
        let (temp, options) = workspace();
        let resolver = ModuleResolver::new(&options);
        let mut cache = AnalysisCache::new();
        let from = temp.path().join("src/app.ts");

        let resolved = resolver.resolve("./api.service", &from, &mut cache).unwrap();
        assert_eq!(resolved, temp.path().join("src/api.service.ts"));

        let resolved = resolver
            .resolve("./components/button", &from, &mut cache)
            .unwrap();
        assert_eq!(resolved, temp.path().join("src/components/button.tsx"));
    }

    #[test]
    fn test_relative_exact_path_wins() {
        let (temp, options) = workspace();
        let resolver = ModuleResolver::new(&options);
        let mut cache = AnalysisCache::new();
        let from = temp.path().join("src/app.ts");

        let resolved = resolver
            .resolve("./api.service.ts", &from, &mut cache)
            .unwrap();
        assert_eq!(resolved, temp.path().join("src/api.service.ts"));
    }

    #[test]
    fn test_barrel_fallback_behind_stable_snapshot() {
        // The exact-path check answers true for directories, so with a live
        // filesystem a directory specifier never reaches the barrel probe
        // (see test_directory_shadowing_barrel). The probe fires when the
        // session's existence snapshot predates the directory: the stale
        // false is served for the directory itself while the barrel file
        // gets a fresh check.
        let (temp, options) = workspace();
        let resolver = ModuleResolver::new(&options);
        let mut cache = AnalysisCache::new();
        let from = temp.path().join("src/app.ts");

        let feature_dir = temp.path().join("src/feature");
        assert!(!cache.exists(&feature_dir));
        for extension in &options.extensions {
            cache.exists(&temp.path().join(format!("src/feature.{extension}")));
        }

        fs::create_dir_all(&feature_dir).unwrap();
        fs::write(feature_dir.join("index.ts"), "").unwrap();

        let resolved = resolver.resolve("./feature", &from, &mut cache).unwrap();
        assert_eq!(resolved, feature_dir.join("index.ts"));
    }

    #[test]
    fn test_directory_shadowing_barrel() {
        // A relative specifier whose exact path is an existing directory
        // resolves to that directory, not to the barrel inside it.
        let (temp, options) = workspace();
        let resolver = ModuleResolver::new(&options);
        let mut cache = AnalysisCache::new();
        let from = temp.path().join("src/app.ts");

        let resolved = resolver.resolve("./utils", &from, &mut cache).unwrap();
        assert_eq!(resolved, temp.path().join("src/utils"));
    }

    #[test]
    fn test_alias_prefix_resolves_into_source_dir() {
        let (temp, options) = workspace();
        let resolver = ModuleResolver::new(&options);
        let mut cache = AnalysisCache::new();
        let from = temp.path().join("src/components/button.tsx");

        let resolved = resolver.resolve("@/api.service", &from, &mut cache).unwrap();
        assert_eq!(resolved, temp.path().join("src/api.service.ts"));

        let resolved = resolver.resolve("~/app", &from, &mut cache).unwrap();
        assert_eq!(resolved, temp.path().join("src/app.ts"));
    }

    #[test]
    fn test_scoped_specifier_resolves_from_root() {
        let (temp, options) = workspace();
        let resolver = ModuleResolver::new(&options);
        let mut cache = AnalysisCache::new();
        let from = temp.path().join("src/app.ts");

        let resolved = resolver
            .resolve("@acme/shared/models/user", &from, &mut cache)
            .unwrap();
        assert_eq!(resolved, temp.path().join("shared/models/user.ts"));
    }

    #[test]
    fn test_bare_specifiers_terminate_the_graph() {
        let (temp, options) = workspace();
        let resolver = ModuleResolver::new(&options);
        let mut cache = AnalysisCache::new();
        let from = temp.path().join("src/app.ts");

        assert_eq!(resolver.resolve("react", &from, &mut cache), None);
        assert_eq!(resolver.resolve("node:fs", &from, &mut cache), None);
        assert_eq!(resolver.resolve("@angular", &from, &mut cache), None);
    }

    #[test]
    fn test_unresolvable_relative_path() {
        let (temp, options) = workspace();
        let resolver = ModuleResolver::new(&options);
        let mut cache = AnalysisCache::new();
        let from = temp.path().join("src/app.ts");

        assert_eq!(resolver.resolve("./does-not-exist", &from, &mut cache), None);
    }

    #[test]
    fn test_resolution_idempotent() {
        let (temp, options) = workspace();
        let resolver = ModuleResolver::new(&options);
        let mut cache = AnalysisCache::new();
        let from = temp.path().join("src/app.ts");

        let first = resolver.resolve("./api.service", &from, &mut cache);
        let second = resolver.resolve("./api.service", &from, &mut cache);
        assert_eq!(first, second);
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(Path::new("/ws/src/./a/../b.ts")),
            PathBuf::from("/ws/src/b.ts")
        );
        assert_eq!(
            normalize_path(Path::new("/ws/src/../../..")),
            PathBuf::from("/")
        );
        assert_eq!(normalize_path(Path::new("a/../../b")), PathBuf::from("../b"));
    }

    #[test]
    fn test_file_id_anchors_relative_paths() {
        let root = Path::new("/ws");
        assert_eq!(
            file_id(Path::new("src/./a.ts"), root),
            PathBuf::from("/ws/src/a.ts")
        );
        assert_eq!(
            file_id(Path::new("/elsewhere/a.ts"), root),
            PathBuf::from("/elsewhere/a.ts")
        );
    }
}
