//! Two-layer lookup: the active locale file first, then the bundled default.

use crate::error::CatalogResult;
use crate::keys::MessageKey;
use crate::source::MessageSource;
use std::path::Path;
use tracing::{debug, warn};

/// Name of the default resource compiled into the crate.
pub const BUNDLED_DEFAULT_NAME: &str = "messages/messages_en.yml";

const BUNDLED_DEFAULT: &str = include_str!("../messages/messages_en.yml");

/// Looks up `path` in `primary`, falling back to `fallback`.
///
/// A value present in `primary` wins even when it is empty.
pub fn resolve<'a>(primary: &'a MessageSource, fallback: &'a MessageSource, path: &str) -> Option<&'a str> {
    primary.get(path).or_else(|| fallback.get(path))
}

/// Immutable pair of message sources.
#[derive(Debug, Clone)]
pub struct FileHandler {
    primary: MessageSource,
    fallback: MessageSource,
}

impl FileHandler {
    /// Combines a locale source with an explicit default source.
    pub const fn new(primary: MessageSource, fallback: MessageSource) -> Self {
        Self { primary, fallback }
    }

    /// Combines a locale source with the bundled default.
    pub fn with_bundled_default(primary: MessageSource) -> CatalogResult<Self> {
        Ok(Self::new(primary, Self::bundled_default()?))
    }

    /// Reads the locale file at `primary_path` and pairs it with the bundled
    /// default. A missing locale file leaves only the default in effect.
    pub fn load(primary_path: &Path) -> CatalogResult<Self> {
        let primary = if primary_path.exists() {
            MessageSource::from_path(primary_path)?
        } else {
            warn!(
                "Message file {} does not exist, using bundled defaults only",
                primary_path.display()
            );
            MessageSource::empty(primary_path.display().to_string())
        };

        debug!("Loaded message file handler for {}", primary.origin());
        Self::with_bundled_default(primary)
    }

    /// Parses the bundled default resource.
    pub fn bundled_default() -> CatalogResult<MessageSource> {
        MessageSource::from_yaml_str(BUNDLED_DEFAULT_NAME, BUNDLED_DEFAULT)
    }

    /// Raw text for `key`, or `None` when neither source has it.
    #[must_use]
    pub fn lookup(&self, key: MessageKey) -> Option<&str> {
        resolve(&self.primary, &self.fallback, key.path())
    }

    /// Keys the locale source does not define.
    #[must_use]
    pub fn missing_keys(&self) -> Vec<MessageKey> {
        MessageKey::all()
            .iter()
            .copied()
            .filter(|key| !self.primary.contains(key.path()))
            .collect()
    }

    /// The locale source.
    #[must_use]
    pub const fn primary(&self) -> &MessageSource {
        &self.primary
    }

    /// The default source.
    #[must_use]
    pub const fn fallback(&self) -> &MessageSource {
        &self.fallback
    }
}
