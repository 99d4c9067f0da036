//! # Graph Construction and Rendering Module
//!
//! This module builds a materialized view of the resolved import graph and
//! renders it for humans. The cycle detector itself never needs this view -
//! it walks edges lazily - but a whole-graph picture is what you want for
//! documentation and for untangling a cycle once it has been found.
//!
//! ## Components
//!
//! - **ImportGraphBuilder**: expands the reachable import graph from a set
//!   of seed files, through the same cached extractor the detector uses
//! - **GraphRenderer**: renders ASCII, Mermaid and Graphviz DOT output with
//!   optional cycle highlighting
//!
//! ## Example
//!
//! ```no_run
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
//! let mut output = Vec::new();
//! renderer.render_dot(builder.graph(), &[], &mut output)?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

pub use builder::ImportGraphBuilder;
pub use renderer::GraphRenderer;
pub use types::{ImportKind, ImportLink, ModuleNode};
