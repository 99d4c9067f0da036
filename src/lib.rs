//! # Roundabout - Detect Circular Imports in JS/TS Source Trees
//!
//! Roundabout follows import specifiers from file to file to find circular
//! import chains. It resolves specifiers the way a bundler does (relative
//! paths, alias prefixes, extension probing, barrel files), caches per-file
//! results within an analysis session, and reports each structural cycle
//! exactly once however many entry points reach it.
//!
//! ## Main Components
//!
//! - **Cache**: session-scoped existence, fingerprint, pattern and
//!   reported-cycle caches, passed explicitly into every operation
//! - **Resolver**: maps a raw specifier plus its containing file to an
//!   absolute file identity, or nothing for external references
//! - **Extractor**: lexically scans a file for outgoing references,
//!   memoized against the file's fingerprint
//! - **Detector**: bounded depth-first traversal reporting deduplicated
//!   cycles
//! - **Graph / Reports**: materialized graph rendering and human-, JSON- and
//!   GitHub-format reporting for the CLI
//!
//! ## Usage
//!
//! ### Real-World Example: Checking a Workspace
//!
//! ```no_run
//! use std::path::Path;
//!
//! use roundabout::cache::AnalysisCache;
//! use roundabout::core::AnalysisOptions;
//! use roundabout::{find_circular_dependencies, has_only_type_imports};
//!
//! // One options value and one cache per analysis session.
//! let options = AnalysisOptions::new("/path/to/workspace").with_max_depth(30);
//! let mut cache = AnalysisCache::new();
//!
//! // Detection from several entry points shares the cache, so a cycle
//! // reachable from more than one entry is reported a single time.
//! for entry in ["src/main.ts", "src/admin.ts"] {
//!     let cycles = find_circular_dependencies(Path::new(entry), &options, &mut cache);
//!     for cycle in &cycles {
//!         let type_only = has_only_type_imports(cycle.files(), &options, &mut cache);
//!         if type_only {
//!             println!("type-only cycle: {cycle}");
//!         } else {
//!             println!("circular import: {cycle}");
//!         }
//!     }
//! }
//! ```
//!
//! ### Example: Rendering the Import Graph
//!
//! ```no_run
//! use miette::IntoDiagnostic;
//! use roundabout::cache::AnalysisCache;
//! use roundabout::core::AnalysisOptions;
//! use roundabout::graph::{GraphRenderer, ImportGraphBuilder};
//!
//! # fn main() -> miette::Result<()> {
//! let options = AnalysisOptions::new("/path/to/workspace");
//! let mut cache = AnalysisCache::new();
//!
//! let mut builder = ImportGraphBuilder::new(&options);
//! builder.build_from(&["src/main.ts".into()], &mut cache, None)?;
//!
//! let renderer = GraphRenderer::new(true, false);
//! let mut mermaid = Vec::new();
//! renderer.render_mermaid(builder.graph(), &[], &mut mermaid)?;
//! std::fs::write("imports.mmd", mermaid).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod manifest;
mod progress;
mod source_discovery;
mod utils;

// Public modules
pub mod cache;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod extractor;
pub mod graph;
pub mod reports;
pub mod resolver;

use std::path::{Path, PathBuf};

pub use cache::AnalysisCache;
pub use core::{AnalysisOptions, ImportCycle, ImportEdge};

/// Find circular import chains reachable from `start_file`
///
/// Each returned cycle starts and ends at the same file, ready for direct
/// inclusion in a message (`a -> b -> c -> a`). Cycles already recorded in
/// `cache` by earlier calls of the session are not returned again, so
/// iterating entry points over one cache yields a deduplicated report.
pub fn find_circular_dependencies(
    start_file: &Path,
    options: &AnalysisOptions,
    cache: &mut AnalysisCache,
) -> Vec<ImportCycle> {
    detector::CycleDetector::new(options).find_cycles(start_file, cache)
}

/// True iff every edge between consecutive files in `files` is type-only
///
/// Passing a cycle's file list (closing element included) distinguishes
/// cycles that exist purely at the type level from cycles with at least one
/// runtime-binding edge. An empty list is vacuously true.
pub fn has_only_type_imports(
    files: &[PathBuf],
    options: &AnalysisOptions,
    cache: &mut AnalysisCache,
) -> bool {
    extractor::ImportExtractor::new(options).has_only_type_imports(files, cache)
}

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
