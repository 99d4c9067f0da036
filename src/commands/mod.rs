//! Command implementations for the roundabout CLI
//!
//! This module contains the implementations for each CLI command:
//! - check: Check a source tree for circular imports
//! - graph: Render the resolved import graph
//! - imports: Show the resolved imports of a single file

pub mod check;
pub mod graph;
pub mod imports;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Check { .. } => check::execute_check_command(command),
        Commands::Graph { .. } => graph::execute_graph_command(command),
        Commands::Imports { .. } => imports::execute_imports_command(command),
    }
}
