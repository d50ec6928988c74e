//! Line-oriented message sinks.

use parking_lot::Mutex;
use std::io::{self, Stdout, Write};
use tracing::warn;

/// Anything that accepts one line of text at a time.
pub trait Recipient {
    /// Delivers a single line.
    fn send_message(&self, line: &str);
}

impl<F> Recipient for F
where
    F: Fn(&str),
{
    fn send_message(&self, line: &str) {
        self(line);
    }
}

/// Writes each line, newline-terminated, to a [`Write`] implementation.
#[derive(Debug)]
pub struct WriterRecipient<W: Write> {
    writer: Mutex<W>,
}

impl WriterRecipient<Stdout> {
    /// Console recipient on standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WriterRecipient<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write> Recipient for WriterRecipient<W> {
    fn send_message(&self, line: &str) {
        let mut writer = self.writer.lock();
        if let Err(e) = writeln!(writer, "{line}").and_then(|()| writer.flush()) {
            warn!("Failed to deliver message line: {}", e);
        }
    }
}
