//! Command implementations for ACE processor CLI
//!
//! Contains the command execution logic and error handling for the CLI
//! interface. Each command is implemented in its own module.

pub mod process;
pub mod shared;
pub mod types;

pub use crate::app::services::pipeline::RunStats;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for the ACE processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `process`: the conversion workflow with CSV output
/// - `types`: file-type registry report
pub fn run(args: Args) -> Result<RunStats> {
    match args.get_command() {
        Commands::Process(process_args) => process::run_process(process_args),
        Commands::Types(types_args) => types::run_types(types_args),
    }
}
