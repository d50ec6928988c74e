//! Channel through which the catalog reports recoverable problems.

use crate::keys::MessageKey;
use std::fmt;
use tracing::{error, warn};

/// How serious a [`Diagnostic`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Degraded output, the call still did something useful.
    Warning,
    /// The message could not be produced at all.
    Error,
}

/// A problem detected while rendering a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Neither the locale file nor the default has the key.
    MissingMessage {
        /// Offending key.
        key: MessageKey,
    },
    /// The caller passed a different number of replacements than the key has tags.
    InvalidReplacementCount {
        /// Offending key.
        key: MessageKey,
        /// Number of tags the key declares.
        expected: usize,
        /// Number of replacements supplied.
        supplied: usize,
    },
}

impl Diagnostic {
    /// Severity of this diagnostic.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::MissingMessage { .. } => Severity::Error,
            Self::InvalidReplacementCount { .. } => Severity::Warning,
        }
    }

    /// Key the diagnostic is about.
    #[must_use]
    pub const fn key(&self) -> MessageKey {
        match self {
            Self::MissingMessage { key } | Self::InvalidReplacementCount { key, .. } => *key,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMessage { key } => write!(
                f,
                "Error retrieving message '{key}': not present in the message file nor in the default file"
            ),
            Self::InvalidReplacementCount {
                key,
                expected,
                supplied,
            } => write!(
                f,
                "Invalid number of replacements for message key '{key}': expected {expected}, got {supplied}"
            ),
        }
    }
}

/// Receives diagnostics. Implementations must not panic.
pub trait Diagnostics: Send + Sync {
    /// Records one diagnostic.
    fn report(&self, diagnostic: &Diagnostic);
}

impl<F> Diagnostics for F
where
    F: Fn(&Diagnostic) + Send + Sync,
{
    fn report(&self, diagnostic: &Diagnostic) {
        self(diagnostic);
    }
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, diagnostic: &Diagnostic) {
        let key = diagnostic.key().path();
        match diagnostic.severity() {
            Severity::Warning => warn!(key, "{}", diagnostic),
            Severity::Error => error!(key, "{}", diagnostic),
        }
    }
}
