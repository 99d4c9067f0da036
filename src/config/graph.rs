//! Graph command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::ResolveArgs;

/// Configuration for the graph command
#[derive(Debug, Clone)]
pub struct GraphOptions {
    /// Paths to discover source files under
    pub paths: Vec<PathBuf>,
    /// Resolution knobs layered over the workspace manifest
    pub resolve: ResolveArgs,
    /// Rendering format
    pub format: GraphFormat,
    /// Output file; stdout when absent
    pub output: Option<PathBuf>,
    /// Mark files and edges participating in cycles
    pub highlight_cycles: bool,
    /// Label edges with the raw import specifiers
    pub show_specifiers: bool,
}

impl GraphOptions {
    pub fn builder() -> GraphOptionsBuilder {
        GraphOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct GraphOptionsBuilder {
    paths: Option<Vec<PathBuf>>,
    resolve: Option<ResolveArgs>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
    highlight_cycles: Option<bool>,
    show_specifiers: Option<bool>,
}

impl GraphOptionsBuilder {
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

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_highlight_cycles(mut self, highlight_cycles: bool) -> Self {
        self.highlight_cycles = Some(highlight_cycles);
        self
    }

    pub fn with_show_specifiers(mut self, show_specifiers: bool) -> Self {
        self.show_specifiers = Some(show_specifiers);
        self
    }
}

impl crate::common::ConfigBuilder for GraphOptionsBuilder {
    type Config = GraphOptions;

    fn build(self) -> Result<Self::Config, crate::error::RoundaboutError> {
        Ok(GraphOptions {
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
            output: self.output.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: output".to_string(),
                }
            })?,
            highlight_cycles: self.highlight_cycles.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: highlight_cycles".to_string(),
                }
            })?,
            show_specifiers: self.show_specifiers.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: show_specifiers".to_string(),
                }
            })?,
        })
    }
}
