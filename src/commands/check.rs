//! Check command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CheckImportsConfig;
use crate::error::RoundaboutError;

impl FromCommand for CheckImportsConfig {
    fn from_command(command: Commands) -> Result<Self, RoundaboutError> {
        match command {
            Commands::Check {
                common,
                format,
                cycle_display,
                error_on_cycles,
                first_only,
                ignore_type_cycles,
            } => CheckImportsConfig::builder()
                .with_paths(common.get_paths())
                .with_resolve(common.resolve)
                .with_format(format.format)
                .with_error_on_cycles(error_on_cycles)
                .with_first_only(first_only)
                .with_ignore_type_cycles(ignore_type_cycles)
                .with_max_cycles(cycle_display.max_cycles)
                .build(),
            _ => Err(RoundaboutError::ConfigurationError {
                message: "Invalid command type for CheckImportsConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CheckImportsConfig);

/// Execute the check command for detecting circular imports
pub fn execute_check_command(command: Commands) -> Result<()> {
    let config = CheckImportsConfig::from_command(command)
        .wrap_err("Failed to parse check command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}
