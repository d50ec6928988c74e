//! Command line arguments.

use clap::{Parser, Subcommand};
use msgcat_i18n::TimeUnit;
use std::path::PathBuf;

/// Render and inspect msgcat message files.
#[derive(Debug, Parser)]
#[command(name = "msgcat", version, about)]
pub struct Cli {
    /// Settings file (defaults to $MSGCAT_CONFIG_PATH, msgcat.yaml or msgcat.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print a message, one line per message line
    Show {
        /// Dotted key path, e.g. captcha.wrong_captcha
        key: String,
        /// Values for the key's tags, in order
        replacements: Vec<String>,
    },
    /// List every message key with its tags
    Keys,
    /// List keys missing from the configured locale file
    Check,
    /// Format a duration with the catalog's unit labels
    Duration {
        /// Signed amount
        #[arg(allow_negative_numbers = true)]
        amount: i64,
        /// seconds, minutes, hours or days
        unit: TimeUnit,
    },
}
