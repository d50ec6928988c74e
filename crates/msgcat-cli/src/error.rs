//! Application-wide error types using thiserror.

use msgcat_common::MsgcatError;
use msgcat_config::ConfigError;
use msgcat_i18n::CatalogError;
use std::io::Write;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The locale file could not be loaded.
    #[error("Message catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Error raised by shared infrastructure such as logging.
    #[error(transparent)]
    Common(#[from] MsgcatError),

    /// The key path does not name a message.
    #[error("Unknown message key '{0}'")]
    UnknownKey(String),
}

/// Result type for the CLI application.
pub type CliResult<T> = Result<T, CliError>;

/// Writes a failed run's error chain to `out` as a single line.
///
/// Logging may not be initialized when this runs, so the error goes to the
/// writer only and not through `tracing`.
pub fn report_failure<W: Write>(out: &mut W, error: &anyhow::Error) {
    // Nothing left to report to if the writer itself fails.
    let _ = writeln!(out, "Error: {error:#}");
}
