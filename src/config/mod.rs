//! # Configuration Module
//!
//! This module provides configuration structures for all roundabout
//! commands. Each command has its own config module with builder patterns
//! for easy construction.
//!
//! ## Command Configurations
//!
//! - **CheckImportsConfig**: Configuration for the `check` command to detect
//!   circular imports
//! - **GraphOptions**: Configuration for the `graph` command to visualize
//!   the import graph
//! - **ImportsConfig**: Configuration for the `imports` command to inspect
//!   one file's references
//!
//! ## Example
//!
//! ```
//! use roundabout::cli::OutputFormat;
//! use roundabout::common::{ConfigBuilder, ResolveArgs};
//! use roundabout::config::CheckImportsConfig;
//!
//! let config = CheckImportsConfig::builder()
//!     .with_paths(vec!["src".into()])
//!     .with_resolve(ResolveArgs::default())
//!     .with_format(OutputFormat::Human)
//!     .with_error_on_cycles(true)
//!     .with_first_only(false)
//!     .with_ignore_type_cycles(false)
//!     .with_max_cycles(None)
//!     .build()
//!     .unwrap();
//! assert!(config.error_on_cycles);
//! ```

pub mod check;
pub mod graph;
pub mod imports;

pub use check::CheckImportsConfig;
pub use graph::GraphOptions;
pub use imports::ImportsConfig;
