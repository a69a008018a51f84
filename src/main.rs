//! Command-line entry point.
//!
//! Parses the arguments, applies the process-wide settings (custom config
//! directory, debug output) and hands over to the matching command. Errors
//! are reported through the logger and exit with a failure status.

use anyhow::Result;

use suntable::args::{self, CliAction, ParsedArgs};
use suntable::commands;
use suntable::common::constants::EXIT_FAILURE;
use suntable::config;
use suntable::logger::Log;
use suntable::log_error_exit;

fn main() {
    let parsed_args = ParsedArgs::from_env();

    if let Err(e) = run(parsed_args.action) {
        log_error_exit!("{:#}", e);
        std::process::exit(EXIT_FAILURE);
    }
}

fn run(action: CliAction) -> Result<()> {
    match action {
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            args::display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Table {
            debug_enabled,
            config_dir,
        } => {
            apply_settings(debug_enabled, config_dir)?;
            commands::table::handle_table_command(debug_enabled)
        }
        CliAction::Day {
            debug_enabled,
            config_dir,
            date,
        } => {
            apply_settings(debug_enabled, config_dir)?;
            commands::day::handle_day_command(debug_enabled, date)
        }
    }
}

fn apply_settings(debug_enabled: bool, config_dir: Option<String>) -> Result<()> {
    Log::set_debug(debug_enabled);
    config::set_config_dir(config_dir)
}
