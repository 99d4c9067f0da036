//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use std::fmt;
use std::path::PathBuf;

use crate::constants;

/// A single outgoing module reference discovered in a source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEdge {
    /// The raw specifier string as written in the source
    pub specifier: String,
    /// Workspace file the specifier resolves to; `None` when the reference
    /// points outside the analyzable workspace
    pub resolved: Option<PathBuf>,
    /// True for call-style `import(...)` references bound at runtime
    pub dynamic: bool,
    /// True when the reference is annotated as type-only
    pub type_only: bool,
    /// 1-based line of the reference in the source file
    pub line: usize,
}

/// A circular chain of imports
///
/// The file list starts and ends at the same file, so the closing edge is
/// included and the chain can be printed directly as `a -> b -> c -> a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportCycle {
    files: Vec<PathBuf>,
}

impl ImportCycle {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    /// Files on the cycle, closing element included
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Number of distinct files participating in the cycle
    pub fn len(&self) -> usize {
        self.files.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for ImportCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .files
            .iter()
            .map(|file| file.display().to_string())
            .collect::<Vec<_>>()
            .join(crate::detector::CYCLE_ARROW);
        write!(f, "{joined}")
    }
}

/// Options steering specifier resolution and cycle traversal
///
/// One instance describes one workspace; the same options value is expected
/// for every call sharing a cache, since resolution results are cached by
/// file identity only.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Root directory of the analyzed workspace
    pub workspace_root: PathBuf,
    /// Subdirectory of the root that alias prefixes resolve against
    pub source_dir: String,
    /// Privileged alias prefixes (e.g. `@/`, `~/`)
    pub alias_prefixes: Vec<String>,
    /// Extension probe order for extensionless specifiers
    pub extensions: Vec<String>,
    /// Barrel file names probed inside directory specifiers, in order
    pub barrel_names: Vec<String>,
    /// Glob patterns for specifiers to drop from the import graph
    pub ignore_specifiers: Vec<String>,
    /// Traversal depth ceiling; branches beyond it are silently truncated
    pub max_depth: usize,
    /// Collect every reachable cycle instead of stopping at the first
    pub report_all_cycles: bool,
}

impl AnalysisOptions {
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            source_dir: constants::resolve::SOURCE_DIR.to_string(),
            alias_prefixes: to_strings(constants::resolve::ALIAS_PREFIXES),
            extensions: to_strings(constants::resolve::EXTENSIONS),
            barrel_names: to_strings(constants::resolve::BARREL_NAMES),
            ignore_specifiers: Vec::new(),
            max_depth: constants::detect::MAX_DEPTH,
            report_all_cycles: true,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_report_all_cycles(mut self, report_all_cycles: bool) -> Self {
        self.report_all_cycles = report_all_cycles;
        self
    }

    pub fn with_barrel_names(mut self, barrel_names: Vec<String>) -> Self {
        self.barrel_names = barrel_names;
        self
    }

    pub fn with_ignore_specifiers(mut self, ignore_specifiers: Vec<String>) -> Self {
        self.ignore_specifiers = ignore_specifiers;
        self
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_display() {
        let cycle = ImportCycle::new(vec![
            PathBuf::from("/ws/src/a.ts"),
            PathBuf::from("/ws/src/b.ts"),
            PathBuf::from("/ws/src/a.ts"),
        ]);

        assert_eq!(cycle.to_string(), "/ws/src/a.ts -> /ws/src/b.ts -> /ws/src/a.ts");
        assert_eq!(cycle.len(), 2);
        assert!(!cycle.is_empty());
    }

    #[test]
    fn test_options_defaults() {
        let options = AnalysisOptions::new("/ws");

        assert_eq!(options.source_dir, "src");
        assert_eq!(options.alias_prefixes, vec!["@/", "~/"]);
        assert_eq!(options.extensions, vec!["ts", "tsx", "js", "jsx"]);
        assert!(options.report_all_cycles);
    }

    #[test]
    fn test_options_setters() {
        let options = AnalysisOptions::new("/ws")
            .with_max_depth(5)
            .with_report_all_cycles(false)
            .with_barrel_names(vec!["main.ts".to_string()]);

        assert_eq!(options.max_depth, 5);
        assert!(!options.report_all_cycles);
        assert_eq!(options.barrel_names, vec!["main.ts"]);
    }
}
