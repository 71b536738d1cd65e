//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use miette::Report;
use weft_config::ConfigError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::Paths(e) => miette::miette!("{}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report, with a hint where one helps
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::NotFound(path) => miette::miette!(
            "Configuration file not found: {}\n\nHint: run weft from inside a project containing weft.toml",
            path.display()
        ),
        ConfigError::InvalidPattern { pattern, message } => miette::miette!(
            "Invalid pattern `{}` in weft.toml\n{}\n\nHint: patterns are regular expressions; escape `.` and `/` as needed",
            pattern,
            message
        ),
        _ => miette::miette!("Configuration error: {}", err),
    }
}
