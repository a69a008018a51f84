//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a clean
//! interface for the main application logic. It supports the `day` subcommand,
//! the standard help, version and debug flags, and a custom configuration
//! directory, while rejecting unknown options with a warning.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Print the calendar table around today
    Table {
        debug_enabled: bool,
        config_dir: Option<String>,
    },
    /// Print the detailed events of one day
    Day {
        debug_enabled: bool,
        config_dir: Option<String>,
        date: Option<String>,
    },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit with an error status
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first element is the program name and is skipped. Flags may appear
    /// before or after the subcommand. Help and version take precedence over
    /// everything else; any unrecognised argument turns the result into
    /// [`CliAction::ShowHelpDueToError`].
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut unknown_arg_found = false;
        let mut config_dir: Option<String> = None;
        let mut command: Option<String> = None;
        let mut positionals: Vec<String> = Vec::new();

        // Convert to vector for easier indexed access
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut i = 0;
        while i < args_vec.len() {
            let arg_str = &args_vec[i];
            match arg_str.as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => debug_enabled = true,
                "--config" | "-c" => {
                    // Parse: --config <directory>
                    if i + 1 < args_vec.len() && !args_vec[i + 1].starts_with('-') {
                        config_dir = Some(args_vec[i + 1].clone());
                        i += 1; // Skip the parsed argument
                    } else {
                        log_warning!("Missing directory for --config. Usage: --config <directory>");
                        unknown_arg_found = true;
                    }
                }
                _ if arg_str.starts_with('-') => {
                    log_warning!("Unknown argument: {}", arg_str);
                    unknown_arg_found = true;
                }
                _ if command.is_none() => command = Some(arg_str.clone()),
                _ => positionals.push(arg_str.clone()),
            }
            i += 1;
        }

        if display_version {
            return ParsedArgs {
                action: CliAction::ShowVersion,
            };
        }
        if display_help {
            return ParsedArgs {
                action: CliAction::ShowHelp,
            };
        }
        if unknown_arg_found {
            return ParsedArgs {
                action: CliAction::ShowHelpDueToError,
            };
        }

        let action = match command.as_deref() {
            None => CliAction::Table {
                debug_enabled,
                config_dir,
            },
            Some("day" | "d") => {
                if positionals.len() > 1 {
                    log_warning!("Too many arguments for day. Usage: suntable day [YYYY-MM-DD]");
                    CliAction::ShowHelpDueToError
                } else {
                    CliAction::Day {
                        debug_enabled,
                        config_dir,
                        date: positionals.pop(),
                    }
                }
            }
            Some(other) => {
                log_warning!("Unknown command: {}", other);
                CliAction::ShowHelpDueToError
            }
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    log_decorated!(env!("CARGO_PKG_DESCRIPTION"));
    log_end!();
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("suntable [OPTIONS] [COMMAND]");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Show configuration and epoch values");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Commands:");
    log_indented!("(none)                 Calendar of the days around today");
    log_indented!("day, d [YYYY-MM-DD]    Solar events of one day (default: today)");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let args = vec!["suntable"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(
            parsed.action,
            CliAction::Table {
                debug_enabled: false,
                config_dir: None,
            }
        );
    }

    #[test]
    fn test_parse_debug_flag() {
        let args = vec!["suntable", "--debug"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(
            parsed.action,
            CliAction::Table {
                debug_enabled: true,
                config_dir: None,
            }
        );
    }

    #[test]
    fn test_parse_debug_short_flag() {
        let args = vec!["suntable", "-d"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(
            parsed.action,
            CliAction::Table {
                debug_enabled: true,
                config_dir: None,
            }
        );
    }

    #[test]
    fn test_parse_help_flag() {
        let args = vec!["suntable", "--help"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(parsed.action, CliAction::ShowHelp);
    }

    #[test]
    fn test_parse_help_short_flag() {
        let args = vec!["suntable", "-h"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(parsed.action, CliAction::ShowHelp);
    }

    #[test]
    fn test_parse_version_flags() {
        for flag in ["--version", "-V", "-v"] {
            let parsed = ParsedArgs::parse(vec!["suntable", flag]);
            assert_eq!(parsed.action, CliAction::ShowVersion);
        }
    }

    #[test]
    fn test_version_takes_precedence_over_help() {
        let parsed = ParsedArgs::parse(vec!["suntable", "--help", "--version"]);
        assert_eq!(parsed.action, CliAction::ShowVersion);
    }

    #[test]
    fn test_help_takes_precedence_over_command() {
        let parsed = ParsedArgs::parse(vec!["suntable", "day", "--help"]);
        assert_eq!(parsed.action, CliAction::ShowHelp);
    }

    #[test]
    fn test_parse_config_dir() {
        let parsed = ParsedArgs::parse(vec!["suntable", "--config", "/tmp/suntable"]);
        assert_eq!(
            parsed.action,
            CliAction::Table {
                debug_enabled: false,
                config_dir: Some("/tmp/suntable".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_config_dir_missing_value() {
        let parsed = ParsedArgs::parse(vec!["suntable", "--config"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);

        let parsed = ParsedArgs::parse(vec!["suntable", "-c", "--debug"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_day_without_date() {
        let parsed = ParsedArgs::parse(vec!["suntable", "day"]);
        assert_eq!(
            parsed.action,
            CliAction::Day {
                debug_enabled: false,
                config_dir: None,
                date: None,
            }
        );
    }

    #[test]
    fn test_parse_day_alias_with_date_and_flags() {
        let parsed = ParsedArgs::parse(vec![
            "suntable",
            "-c",
            "/tmp/cfg",
            "d",
            "2024-06-21",
            "--debug",
        ]);
        assert_eq!(
            parsed.action,
            CliAction::Day {
                debug_enabled: true,
                config_dir: Some("/tmp/cfg".to_string()),
                date: Some("2024-06-21".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_day_too_many_arguments() {
        let parsed = ParsedArgs::parse(vec!["suntable", "day", "2024-06-21", "2024-06-22"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_unknown_flag() {
        let parsed = ParsedArgs::parse(vec!["suntable", "--geo"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_unknown_command() {
        let parsed = ParsedArgs::parse(vec!["suntable", "reload"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_table_rejects_positional_arguments() {
        let parsed = ParsedArgs::parse(vec!["suntable", "2024-06-21"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }
}
