//! Configuration constants for roundabout
//!
//! This module contains all configurable constants used throughout the
//! application. These values can be overridden through command-line flags or
//! a `roundabout.toml` manifest at the workspace root.

use std::time::Duration;

/// Module resolution defaults
pub mod resolve {
    /// Extension probe order for extensionless specifiers
    pub const EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

    /// Barrel file names probed, in order, when a specifier points at a
    /// directory with no directly matching file
    pub const BARREL_NAMES: &[&str] = &["index.ts", "index.tsx", "index.js"];

    /// The two privileged alias prefixes resolved against the source
    /// subdirectory of the workspace
    pub const ALIAS_PREFIXES: &[&str] = &["@/", "~/"];

    /// Source subdirectory that alias prefixes resolve against
    pub const SOURCE_DIR: &str = "src";
}

/// Cycle detection defaults
pub mod detect {
    /// Default traversal depth ceiling
    pub const MAX_DEPTH: usize = 50;
}

/// Source discovery configuration
pub mod discovery {
    /// Directory names never descended into during source discovery
    pub const SKIP_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", "coverage"];
}

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the roundabout animation
    pub const SPINNER_FRAMES: &[&str] = &[
        "🔄 ", // Standard roundabout
        "🔄·", // With center dot
        "🔄◐", // Quarter filled
        "🔄◓", // Half filled
        "🔄◑", // Three quarters
        "🔄◒", // Another quarter
        "🔄○", // Empty circle
        "🔄●", // Full circle
    ];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}
