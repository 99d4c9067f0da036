//! Import extraction
//!
//! Scans one file's content for outgoing module references and resolves each
//! through [`ModuleResolver`]. The scan is a lightweight lexical pass over
//! the source, not a grammar: it tolerates any input without failing, at the
//! cost of missing exotic syntax (a documented limitation of this analysis,
//! not a defect to patch around). Results are memoized in the session cache
//! against the file's fingerprint.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::cache::{AnalysisCache, fingerprint_of};
use crate::core::{AnalysisOptions, ImportEdge};
use crate::resolver::ModuleResolver;

// The character classes deliberately admit newlines so multi-line import
// statements match; line numbers are derived from the match offset.
static STATIC_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^[ \t]*import\s+(type\s+)?[^'"()]*?\bfrom\s*['"]([^'"]+)['"]"#)
        .expect("static import pattern should be valid")
});

static SIDE_EFFECT_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^[ \t]*import\s*['"]([^'"]+)['"]"#)
        .expect("side-effect import pattern should be valid")
});

static EXPORT_FROM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^[ \t]*export\s+(type\s+)?(?:\*(?:\s+as\s+\w+)?|\{[^}]*\})\s*from\s*['"]([^'"]+)['"]"#)
        .expect("export-from pattern should be valid")
});

static DYNAMIC_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\bimport\s*\(\s*['"]([^'"]+)['"]\s*\)"#)
        .expect("dynamic import pattern should be valid")
});

/// One raw reference found by the lexical scan, before resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedImport {
    pub specifier: String,
    pub line: usize,
    pub dynamic: bool,
    pub type_only: bool,
}

/// Scan source text for module references, in order of appearance
pub fn scan_source(content: &str) -> Vec<ScannedImport> {
    let mut found: Vec<(usize, ScannedImport)> = Vec::new();

    for captures in STATIC_IMPORT.captures_iter(content) {
        let whole = captures.get(0).expect("match group 0 always present");
        found.push((
            whole.start(),
            ScannedImport {
                specifier: captures[2].to_string(),
                line: line_of(content, whole.start()),
                dynamic: false,
                type_only: captures.get(1).is_some(),
            },
        ));
    }

    for captures in SIDE_EFFECT_IMPORT.captures_iter(content) {
        let whole = captures.get(0).expect("match group 0 always present");
        found.push((
            whole.start(),
            ScannedImport {
                specifier: captures[1].to_string(),
                line: line_of(content, whole.start()),
                dynamic: false,
                type_only: false,
            },
        ));
    }

    for captures in EXPORT_FROM.captures_iter(content) {
        let whole = captures.get(0).expect("match group 0 always present");
        found.push((
            whole.start(),
            ScannedImport {
                specifier: captures[2].to_string(),
                line: line_of(content, whole.start()),
                dynamic: false,
                type_only: captures.get(1).is_some(),
            },
        ));
    }

    for captures in DYNAMIC_IMPORT.captures_iter(content) {
        let whole = captures.get(0).expect("match group 0 always present");
        found.push((
            whole.start(),
            ScannedImport {
                specifier: captures[1].to_string(),
                line: line_of(content, whole.start()),
                dynamic: true,
                type_only: false,
            },
        ));
    }

    found.sort_by_key(|(offset, _)| *offset);
    found.into_iter().map(|(_, import)| import).collect()
}

fn line_of(content: &str, offset: usize) -> usize {
    content[..offset].matches('\n').count() + 1
}

/// Extracts resolved import edges for files of one workspace
pub struct ImportExtractor<'a> {
    options: &'a AnalysisOptions,
    resolver: ModuleResolver<'a>,
}

impl<'a> ImportExtractor<'a> {
    pub fn new(options: &'a AnalysisOptions) -> Self {
        Self {
            options,
            resolver: ModuleResolver::new(options),
        }
    }

    /// Ordered, resolved outgoing references of `file`
    ///
    /// Served from the cache while the file's fingerprint is unchanged; the
    /// returned list is the shared backing collection, to be treated as
    /// read-only. Unreadable files (missing, directory, permission denied)
    /// degrade to an empty list rather than an error, and references that do
    /// not resolve to a workspace file are dropped - they cannot participate
    /// in cycles.
    pub fn imports_of(&self, file: &Path, cache: &mut AnalysisCache) -> Arc<Vec<ImportEdge>> {
        if cache.is_fresh(file)
            && let Some(edges) = cache.cached_imports(file)
        {
            return edges;
        }

        let fingerprint = fingerprint_of(file).unwrap_or_default();
        let Ok(content) = std::fs::read_to_string(file) else {
            return cache.store_imports(file, fingerprint, Vec::new());
        };

        let mut edges = Vec::new();
        for scanned in scan_source(&content) {
            if self.is_ignored(&scanned.specifier, cache) {
                continue;
            }
            let Some(resolved) = self.resolver.resolve(&scanned.specifier, file, cache) else {
                continue;
            };
            edges.push(ImportEdge {
                specifier: scanned.specifier,
                resolved: Some(resolved),
                dynamic: scanned.dynamic,
                type_only: scanned.type_only,
                line: scanned.line,
            });
        }

        cache.store_imports(file, fingerprint, edges)
    }

    /// True iff every edge between consecutive files in `files` is
    /// type-only
    ///
    /// Walking a cycle's file list (closing element included) this tells
    /// apart cycles that exist purely at the type level from cycles with at
    /// least one runtime-binding edge. An empty list is vacuously true.
    pub fn has_only_type_imports(&self, files: &[PathBuf], cache: &mut AnalysisCache) -> bool {
        files.windows(2).all(|pair| {
            let edges = self.imports_of(&pair[0], cache);
            edges
                .iter()
                .filter(|edge| edge.resolved.as_deref() == Some(pair[1].as_path()))
                .all(|edge| edge.type_only)
        })
    }

    fn is_ignored(&self, specifier: &str, cache: &mut AnalysisCache) -> bool {
        self.options
            .ignore_specifiers
            .iter()
            .any(|raw| cache.pattern(raw).is_some_and(|pattern| pattern.matches(specifier)))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_scan_static_imports() {
        let source = r#"
import { Component } from './component';
import * as utils from '../utils';
import Default, { named } from "./mixed";
"#;

        let imports = scan_source(source);
        assert_eq!(imports.len(), 3);
        assert_eq!(imports[0].specifier, "./component");
        assert_eq!(imports[0].line, 2);
        assert!(!imports[0].dynamic);
        assert!(!imports[0].type_only);
        assert_eq!(imports[1].specifier, "../utils");
        assert_eq!(imports[2].specifier, "./mixed");
    }

    #[test]
    fn test_scan_type_only_imports() {
        let source = "import type { User } from './user';\nexport type { Role } from './role';\n";

        let imports = scan_source(source);
        assert_eq!(imports.len(), 2);
        assert!(imports[0].type_only);
        assert!(imports[1].type_only);
    }

    #[test]
    fn test_scan_side_effect_and_export_from() {
        let source = "import './polyfills';\nexport * from './api';\nexport { a, b } from './ab';\n";

        let imports = scan_source(source);
        assert_eq!(imports.len(), 3);
        assert_eq!(imports[0].specifier, "./polyfills");
        assert_eq!(imports[1].specifier, "./api");
        assert_eq!(imports[2].specifier, "./ab");
        assert!(imports.iter().all(|import| !import.dynamic));
    }

    #[test]
    fn test_scan_dynamic_imports() {
        let source = "const page = () => import('./page');\nimport { eager } from './eager';\n";

        let imports = scan_source(source);
        assert_eq!(imports.len(), 2);
        assert_eq!(imports[0].specifier, "./page");
        assert!(imports[0].dynamic);
        assert_eq!(imports[1].specifier, "./eager");
        assert!(!imports[1].dynamic);
    }

    #[test]
    fn test_scan_multiline_import() {
        let source = "import {\n  first,\n  second,\n} from './many';\n";

        let imports = scan_source(source);
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].specifier, "./many");
        assert_eq!(imports[0].line, 1);
    }

    #[test]
    fn test_scan_tolerates_arbitrary_source() {
        let source = "const x = 'import from nowhere'; }{ ]] not valid js at all";
        assert!(scan_source(source).is_empty());
    }

    fn workspace() -> (TempDir, AnalysisOptions) {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        let options = AnalysisOptions::new(temp.path());
        (temp, options)
    }

    #[test]
    fn test_imports_of_resolves_and_drops_external() {
        let (temp, options) = workspace();
        fs::write(
            temp.path().join("src/a.ts"),
            "import { b } from './b';\nimport React from 'react';\n",
        )
        .unwrap();
        fs::write(temp.path().join("src/b.ts"), "").unwrap();

        let extractor = ImportExtractor::new(&options);
        let mut cache = AnalysisCache::new();

        let edges = extractor.imports_of(&temp.path().join("src/a.ts"), &mut cache);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].specifier, "./b");
        assert_eq!(edges[0].resolved.as_deref(), Some(temp.path().join("src/b.ts").as_path()));
        assert_eq!(edges[0].line, 1);
    }

    #[test]
    fn test_imports_of_is_memoized_until_file_changes() {
        let (temp, options) = workspace();
        let file = temp.path().join("src/a.ts");
        fs::write(&file, "import { b } from './b';\n").unwrap();
        fs::write(temp.path().join("src/b.ts"), "").unwrap();

        let extractor = ImportExtractor::new(&options);
        let mut cache = AnalysisCache::new();

        let first = extractor.imports_of(&file, &mut cache);
        let second = extractor.imports_of(&file, &mut cache);
        assert!(Arc::ptr_eq(&first, &second));

        // A rewrite with a different byte length invalidates the entry.
        fs::write(&file, "import { b } from './b';\nimport './b';\n").unwrap();
        let third = extractor.imports_of(&file, &mut cache);
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(third.len(), 2);
    }

    #[test]
    fn test_unreadable_file_has_no_edges() {
        let (temp, options) = workspace();
        let extractor = ImportExtractor::new(&options);
        let mut cache = AnalysisCache::new();

        let missing = extractor.imports_of(&temp.path().join("src/missing.ts"), &mut cache);
        assert!(missing.is_empty());

        // A directory reads like a missing file: zero edges, no error.
        let directory = extractor.imports_of(&temp.path().join("src"), &mut cache);
        assert!(directory.is_empty());
    }

    #[test]
    fn test_ignored_specifiers_are_dropped() {
        let (temp, options) = workspace();
        let options = options.with_ignore_specifiers(vec!["./generated/*".to_string()]);
        fs::create_dir_all(temp.path().join("src/generated")).unwrap();
        fs::write(temp.path().join("src/generated/api.ts"), "").unwrap();
        fs::write(
            temp.path().join("src/a.ts"),
            "import { api } from './generated/api';\nimport { b } from './b';\n",
        )
        .unwrap();
        fs::write(temp.path().join("src/b.ts"), "").unwrap();

        let extractor = ImportExtractor::new(&options);
        let mut cache = AnalysisCache::new();

        let edges = extractor.imports_of(&temp.path().join("src/a.ts"), &mut cache);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].specifier, "./b");
    }

    #[test]
    fn test_has_only_type_imports() {
        let (temp, options) = workspace();
        fs::write(
            temp.path().join("src/a.ts"),
            "import type { B } from './b';\n",
        )
        .unwrap();
        fs::write(temp.path().join("src/b.ts"), "import { a } from './a';\n").unwrap();

        let extractor = ImportExtractor::new(&options);
        let mut cache = AnalysisCache::new();

        let a = temp.path().join("src/a.ts");
        let b = temp.path().join("src/b.ts");

        assert!(extractor.has_only_type_imports(&[a.clone(), b.clone()], &mut cache));
        assert!(!extractor.has_only_type_imports(&[b.clone(), a.clone()], &mut cache));
        // A full cycle listing mixes both directions.
        assert!(!extractor.has_only_type_imports(&[a.clone(), b, a], &mut cache));
        // Vacuously true for empty and single-file lists.
        assert!(extractor.has_only_type_imports(&[], &mut cache));
    }
}
