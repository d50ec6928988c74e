//! The message catalog: lookup, line splitting, substitution and delivery.

use crate::diagnostics::{Diagnostic, Diagnostics, TracingDiagnostics};
use crate::duration::{Duration, DurationFormatter, TimeUnit, UnitLabels};
use crate::error::CatalogResult;
use crate::file_handler::FileHandler;
use crate::keys::MessageKey;
use crate::recipient::Recipient;
use crate::template;
use arc_swap::ArcSwap;
use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Rendering switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Translate `&c` style color codes before substitution.
    pub translate_color_codes: bool,
}

/// Resolves [`MessageKey`]s to rendered lines.
///
/// Retrieval never fails: a missing message renders as a visible error
/// line and a replacement count mismatch renders best-effort, each with a
/// [`Diagnostic`] sent to the configured [`Diagnostics`] sink.
pub struct MessageCatalog {
    handler: ArcSwap<FileHandler>,
    options: CatalogOptions,
    diagnostics: Arc<dyn Diagnostics>,
}

impl fmt::Debug for MessageCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageCatalog")
            .field("primary", &self.handler.load().primary().origin())
            .field("fallback", &self.handler.load().fallback().origin())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl MessageCatalog {
    /// Creates a catalog reporting diagnostics through `tracing`.
    pub fn new(handler: FileHandler) -> Self {
        Self {
            handler: ArcSwap::from_pointee(handler),
            options: CatalogOptions::default(),
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    /// Creates a catalog from a locale file backed by the bundled default.
    pub fn from_path(primary_path: &Path) -> CatalogResult<Self> {
        Ok(Self::new(FileHandler::load(primary_path)?))
    }

    /// Replaces the rendering options.
    #[must_use]
    pub fn with_options(mut self, options: CatalogOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the diagnostics sink.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Current rendering options.
    #[must_use]
    pub const fn options(&self) -> CatalogOptions {
        self.options
    }

    /// Snapshot of the sources currently in use.
    #[must_use]
    pub fn handler(&self) -> Arc<FileHandler> {
        self.handler.load_full()
    }

    /// Swaps in new sources. Calls already in flight finish on the old ones.
    pub fn reload(&self, handler: FileHandler) {
        let origin = handler.primary().origin().to_string();
        self.handler.store(Arc::new(handler));
        info!("Reloaded messages from {}", origin);
    }

    /// Re-reads the locale file at `primary_path` and swaps it in. On error
    /// the previous sources stay active.
    pub fn reload_from(&self, primary_path: &Path) -> CatalogResult<()> {
        self.reload(FileHandler::load(primary_path)?);
        Ok(())
    }

    /// Keys the locale file does not define.
    #[must_use]
    pub fn missing_keys(&self) -> Vec<MessageKey> {
        self.handler.load().missing_keys()
    }

    /// Lines of `key` with its tags left as written.
    #[must_use]
    pub fn retrieve(&self, key: MessageKey) -> Vec<String> {
        self.render::<&str>(key, None)
    }

    /// Lines of `key` with `replacements[i]` in place of the key's `i`th tag.
    #[must_use]
    pub fn retrieve_with<S: AsRef<str>>(&self, key: MessageKey, replacements: &[S]) -> Vec<String> {
        self.render(key, Some(replacements))
    }

    /// [`retrieve`](Self::retrieve) joined with newlines.
    #[must_use]
    pub fn retrieve_single(&self, key: MessageKey) -> String {
        self.retrieve(key).join("\n")
    }

    /// [`retrieve_with`](Self::retrieve_with) joined with newlines.
    #[must_use]
    pub fn retrieve_single_with<S: AsRef<str>>(&self, key: MessageKey, replacements: &[S]) -> String {
        self.retrieve_with(key, replacements).join("\n")
    }

    /// Sends `key` to `recipient` one line at a time.
    pub fn send<R: Recipient + ?Sized>(&self, recipient: &R, key: MessageKey) {
        deliver(recipient, key, &self.retrieve(key));
    }

    /// Sends `key` with replacements to `recipient` one line at a time.
    pub fn send_with<R, S>(&self, recipient: &R, key: MessageKey, replacements: &[S])
    where
        R: Recipient + ?Sized,
        S: AsRef<str>,
    {
        deliver(recipient, key, &self.retrieve_with(key, replacements));
    }

    /// Formats `duration` with unit labels from this catalog.
    #[must_use]
    pub fn format_duration(&self, duration: Duration) -> String {
        DurationFormatter::new(self).format(duration)
    }

    fn render<S: AsRef<str>>(&self, key: MessageKey, replacements: Option<&[S]>) -> Vec<String> {
        let handler = self.handler.load();
        let Some(raw) = handler.lookup(key) else {
            self.diagnostics.report(&Diagnostic::MissingMessage { key });
            return vec![missing_message_text(key)];
        };

        let mut text = template::normalize_line_endings(raw);
        if self.options.translate_color_codes {
            text = Cow::Owned(template::translate_color_codes(&text));
        }
        let lines = template::split_lines(&text);

        let Some(replacements) = replacements else {
            return lines.into_iter().map(str::to_string).collect();
        };

        let tags = key.tags();
        if replacements.len() != tags.len() {
            self.diagnostics.report(&Diagnostic::InvalidReplacementCount {
                key,
                expected: tags.len(),
                supplied: replacements.len(),
            });
        }

        lines
            .into_iter()
            .map(|line| template::substitute(line, tags, replacements))
            .collect()
    }
}

impl UnitLabels for MessageCatalog {
    fn label(&self, unit: TimeUnit, singular: bool) -> Cow<'_, str> {
        Cow::Owned(self.retrieve_single(MessageKey::for_time_unit(unit, singular)))
    }
}

fn missing_message_text(key: MessageKey) -> String {
    format!("Error retrieving message '{}'", key.path())
}

fn deliver<R: Recipient + ?Sized>(recipient: &R, key: MessageKey, lines: &[String]) {
    if let [only] = lines {
        if only.is_empty() {
            debug!("Message '{}' is empty, nothing sent", key);
            return;
        }
    }
    for line in lines {
        recipient.send_message(line);
    }
}
