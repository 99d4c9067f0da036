//! Check command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::ResolveArgs;

/// Configuration for the check command
///
/// This struct contains all options for detecting and reporting circular
/// imports in a source tree.
#[derive(Debug, Clone)]
pub struct CheckImportsConfig {
    /// Paths to discover source files under
    pub paths: Vec<PathBuf>,
    /// Resolution knobs layered over the workspace manifest
    pub resolve: ResolveArgs,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
    /// Stop at the first cycle instead of collecting all of them
    pub first_only: bool,
    /// Suppress cycles made up exclusively of type-only imports
    pub ignore_type_cycles: bool,
    /// Maximum number of cycles to report (None = all)
    pub max_cycles: Option<usize>,
}

impl CheckImportsConfig {
    pub fn builder() -> CheckImportsConfigBuilder {
        CheckImportsConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckImportsConfigBuilder {
    paths: Option<Vec<PathBuf>>,
    resolve: Option<ResolveArgs>,
    format: Option<OutputFormat>,
    error_on_cycles: Option<bool>,
    first_only: Option<bool>,
    ignore_type_cycles: Option<bool>,
    max_cycles: Option<Option<usize>>,
}

impl CheckImportsConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_resolve(mut self, resolve: ResolveArgs) -> Self {
        self.resolve = Some(resolve);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }

    pub fn with_first_only(mut self, first_only: bool) -> Self {
        self.first_only = Some(first_only);
        self
    }

    pub fn with_ignore_type_cycles(mut self, ignore_type_cycles: bool) -> Self {
        self.ignore_type_cycles = Some(ignore_type_cycles);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for CheckImportsConfigBuilder {
    type Config = CheckImportsConfig;

    fn build(self) -> Result<Self::Config, crate::error::RoundaboutError> {
        Ok(CheckImportsConfig {
            paths: self.paths.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: paths".to_string(),
                }
            })?,
            resolve: self.resolve.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: resolve".to_string(),
                }
            })?,
            format: self.format.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
            error_on_cycles: self.error_on_cycles.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: error_on_cycles".to_string(),
                }
            })?,
            first_only: self.first_only.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: first_only".to_string(),
                }
            })?,
            ignore_type_cycles: self.ignore_type_cycles.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: ignore_type_cycles".to_string(),
                }
            })?,
            max_cycles: self.max_cycles.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: max_cycles".to_string(),
                }
            })?,
        })
    }
}
