//! Imports command configuration

use std::path::PathBuf;

use crate::common::ResolveArgs;

/// Configuration for the imports command
#[derive(Debug, Clone)]
pub struct ImportsConfig {
    /// File whose references are listed
    pub file: PathBuf,
    /// Resolution knobs layered over the workspace manifest
    pub resolve: ResolveArgs,
    /// Emit JSON instead of the human listing
    pub json: bool,
}

impl ImportsConfig {
    pub fn builder() -> ImportsConfigBuilder {
        ImportsConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ImportsConfigBuilder {
    file: Option<PathBuf>,
    resolve: Option<ResolveArgs>,
    json: Option<bool>,
}

impl ImportsConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_resolve(mut self, resolve: ResolveArgs) -> Self {
        self.resolve = Some(resolve);
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = Some(json);
        self
    }
}

impl crate::common::ConfigBuilder for ImportsConfigBuilder {
    type Config = ImportsConfig;

    fn build(self) -> Result<Self::Config, crate::error::RoundaboutError> {
        Ok(ImportsConfig {
            file: self.file.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: file".to_string(),
                }
            })?,
            resolve: self.resolve.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: resolve".to_string(),
                }
            })?,
            json: self.json.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: json".to_string(),
                }
            })?,
        })
    }
}
