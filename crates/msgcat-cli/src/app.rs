//! Runs a parsed [`Command`] against a message catalog.

use crate::cli::Command;
use crate::error::{CliError, CliResult};
use msgcat_config::Config;
use msgcat_i18n::{CatalogOptions, Duration, MessageCatalog, MessageKey, Recipient};
use tracing::{debug, info, instrument};

/// A catalog built from settings, ready to serve commands.
#[derive(Debug)]
pub struct App {
    catalog: MessageCatalog,
}

impl App {
    /// Loads the locale file named by `config` on top of the bundled default.
    pub fn new(config: &Config) -> CliResult<Self> {
        let path = config.messages.primary_file();
        info!("Loading messages from {}", path.display());

        let catalog = MessageCatalog::from_path(&path)?.with_options(CatalogOptions {
            translate_color_codes: config.messages.translate_color_codes,
        });
        debug!("Catalog options: {:?}", catalog.options());
        Ok(Self::from_catalog(catalog))
    }

    /// Wraps an existing catalog.
    #[must_use]
    pub const fn from_catalog(catalog: MessageCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog commands are served from.
    #[must_use]
    pub const fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Executes `command`, writing its output to `out`.
    ///
    /// Returns `Ok(false)` when the command ran but found a problem the exit
    /// status should report, which is currently only `check` finding missing
    /// keys.
    #[instrument(skip(self, out))]
    pub fn run<R: Recipient + ?Sized>(&self, command: &Command, out: &R) -> CliResult<bool> {
        match command {
            Command::Show { key, replacements } => {
                let key = MessageKey::from_path(key).ok_or_else(|| CliError::UnknownKey(key.clone()))?;
                if replacements.is_empty() {
                    self.catalog.send(out, key);
                } else {
                    self.catalog.send_with(out, key, replacements);
                }
                Ok(true)
            }
            Command::Keys => {
                for key in MessageKey::all() {
                    out.send_message(&describe_key(*key));
                }
                Ok(true)
            }
            Command::Check => {
                let missing = self.catalog.missing_keys();
                for key in &missing {
                    out.send_message(&format!("Missing: {key}"));
                }
                debug!("{} of {} keys missing", missing.len(), MessageKey::all().len());
                Ok(missing.is_empty())
            }
            Command::Duration { amount, unit } => {
                out.send_message(&self.catalog.format_duration(Duration::new(*amount, *unit)));
                Ok(true)
            }
        }
    }
}

fn describe_key(key: MessageKey) -> String {
    let tags = key.tags();
    if tags.is_empty() {
        key.path().to_string()
    } else {
        format!("{} {}", key.path(), tags.join(" "))
    }
}
