//! Imports command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ImportsConfig;
use crate::error::RoundaboutError;

impl FromCommand for ImportsConfig {
    fn from_command(command: Commands) -> Result<Self, RoundaboutError> {
        match command {
            Commands::Imports { file, resolve, json } => ImportsConfig::builder()
                .with_file(file)
                .with_resolve(resolve)
                .with_json(json)
                .build(),
            _ => Err(RoundaboutError::ConfigurationError {
                message: "Invalid command type for ImportsConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ImportsConfig);

/// Execute the imports command for inspecting one file's references
pub fn execute_imports_command(command: Commands) -> Result<()> {
    let config = ImportsConfig::from_command(command)
        .wrap_err("Failed to parse imports command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::imports::ImportsExecutor;
    ImportsExecutor::execute(config)
}
