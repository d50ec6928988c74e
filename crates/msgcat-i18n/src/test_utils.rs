//! Recording sinks for tests.

use crate::diagnostics::{Diagnostic, Diagnostics, Severity};
use crate::recipient::Recipient;
use parking_lot::Mutex;

/// Recipient that remembers every line it was sent.
#[derive(Debug, Default)]
pub struct RecordingRecipient {
    lines: Mutex<Vec<String>>,
}

impl RecordingRecipient {
    /// Lines received so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Number of `send_message` calls.
    pub fn call_count(&self) -> usize {
        self.lines.lock().len()
    }
}

impl Recipient for RecordingRecipient {
    fn send_message(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

/// Diagnostics sink that keeps every report.
#[derive(Debug, Default)]
pub struct CapturingDiagnostics {
    reports: Mutex<Vec<Diagnostic>>,
}

impl CapturingDiagnostics {
    /// All reports, in order.
    pub fn reports(&self) -> Vec<Diagnostic> {
        self.reports.lock().clone()
    }

    /// Rendered text of the warning-level reports.
    pub fn warnings(&self) -> Vec<String> {
        self.reports
            .lock()
            .iter()
            .filter(|d| d.severity() == Severity::Warning)
            .map(ToString::to_string)
            .collect()
    }
}

impl Diagnostics for CapturingDiagnostics {
    fn report(&self, diagnostic: &Diagnostic) {
        self.reports.lock().push(diagnostic.clone());
    }
}
