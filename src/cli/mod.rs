//! Command-line interface.
//!
//! The dispatcher runs early in `main()` so `--version` and `--help` never
//! touch the terminal:
//!
//! ```ignore
//! use listick::cli::{parse_args, run_cli_command};
//! use listick::startup::StartupConfig;
//!
//! let command = parse_args(std::env::args(), StartupConfig::from_env());
//! let startup = match run_cli_command(command) {
//!     Some(config) => config,
//!     None => std::process::exit(2),
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{handle_help_command, handle_version_command, help_text, VERSION};

use crate::startup::StartupConfig;

/// Handle informational commands.
///
/// Returns the startup configuration for `RunTui`, `None` after printing an
/// argument error. `Version` and `Help` exit the process.
pub fn run_cli_command(command: CliCommand) -> Option<StartupConfig> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::RunTui(config) => Some(config),
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, help_text());
            None
        }
    }
}
