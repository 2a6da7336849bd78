//! Command-line argument parsing.

use crate::app::Page;
use crate::startup::StartupConfig;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Version,
    Help,
    /// Run the TUI with these options (default).
    RunTui(StartupConfig),
    /// Unusable arguments, with the message to print.
    Invalid(String),
}

/// Parse command-line arguments, starting from `base` for anything not given.
///
/// Unknown flags are ignored.
///
/// # Examples
///
/// ```
/// use listick::cli::args::{parse_args, CliCommand};
/// use listick::startup::StartupConfig;
///
/// let args = vec!["listick".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter(), StartupConfig::default()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I, base: StartupConfig) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut config = base;
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--offline" => config.offline = true,
            "--no-log" => config.enable_logging = false,
            "--page" => {
                let Some(name) = args.next() else {
                    return CliCommand::Invalid("--page needs a page name".to_string());
                };
                match Page::from_name(&name) {
                    Some(page) => config.initial_page = page,
                    None => return CliCommand::Invalid(format!("unknown page '{}'", name)),
                }
            }
            "--config" => {
                let Some(path) = args.next() else {
                    return CliCommand::Invalid("--config needs a file path".to_string());
                };
                config.config_path = Some(path.into());
            }
            _ => {}
        }
    }
    CliCommand::RunTui(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let args: Vec<String> = std::iter::once("listick")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter(), StartupConfig::default())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::RunTui(StartupConfig::default()));
    }

    #[test]
    fn test_parse_run_options() {
        let CliCommand::RunTui(config) = parse(&["--offline", "--page", "contact", "--no-log"])
        else {
            panic!("expected RunTui");
        };
        assert!(config.offline);
        assert!(!config.enable_logging);
        assert_eq!(config.initial_page, Page::Contact);
    }

    #[test]
    fn test_parse_config_path() {
        let CliCommand::RunTui(config) = parse(&["--config", "/tmp/site.json"]) else {
            panic!("expected RunTui");
        };
        assert_eq!(config.config_path, Some("/tmp/site.json".into()));
    }

    #[test]
    fn test_parse_bad_page() {
        assert!(matches!(parse(&["--page", "blog"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--page"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--unknown"]),
            CliCommand::RunTui(StartupConfig::default())
        );
    }
}
