//! # Cycle Detection Module
//!
//! This module implements the traversal that finds circular imports in the
//! reference graph of a source tree.
//!
//! ## Algorithm
//!
//! A bounded depth-first search starts from one file and follows resolved
//! static import edges, fetching each file's edges lazily through the
//! session cache. An ordered path stack plus an O(1) membership set over the
//! same stack detect when an edge closes back onto the current path; the
//! closed path is canonicalized and deduplicated by signature across every
//! entry point sharing the cache.
//!
//! ## Key Components
//!
//! - **CycleDetector**: runs the traversal for one options set
//! - **minimal_cycle / cycle_signature**: canonicalization helpers
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use roundabout::cache::AnalysisCache;
//! use roundabout::core::AnalysisOptions;
//! use roundabout::detector::CycleDetector;
//!
//! let options = AnalysisOptions::new("/path/to/workspace");
//! let mut cache = AnalysisCache::new();
//!
//! let detector = CycleDetector::new(&options);
//! let cycles = detector.find_cycles(Path::new("src/main.ts"), &mut cache);
//!
//! for cycle in &cycles {
//!     println!("circular import: {cycle}");
//! }
//! ```

mod canonical;
mod detector_impl;

pub use canonical::{CYCLE_ARROW, cycle_signature, minimal_cycle};
pub use detector_impl::CycleDetector;
