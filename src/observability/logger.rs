//! Structured one-line JSON logger
//!
//! One log line is one event: event name first, severity second, then
//! fields sorted by key so identical events serialize identically.
//! Writes are synchronous and unbuffered.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Rejected requests, recoverable issues
    Warn,
    /// Operation failures
    Error,
    /// Unrecoverable, process exits
    Fatal,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

/// One log line. Struct fields keep event and severity at the front;
/// the flattened map sorts everything else by key.
#[derive(Serialize)]
struct LogLine<'a> {
    event: &'a str,
    severity: &'a str,
    #[serde(flatten)]
    fields: BTreeMap<&'a str, &'a str>,
}

/// Structured logger. Info and warn go to stdout, error and fatal to
/// stderr.
pub struct Logger;

impl Logger {
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Info, event, fields, &mut io::stdout());
    }

    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Warn, event, fields, &mut io::stdout());
    }

    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Error, event, fields, &mut io::stderr());
    }

    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Fatal, event, fields, &mut io::stderr());
    }

    fn emit<W: Write>(severity: Severity, event: &str, fields: &[(&str, &str)], writer: &mut W) {
        let line = LogLine {
            event,
            severity: severity.as_str(),
            fields: fields.iter().copied().collect(),
        };

        // A line that fails to serialize is dropped, never a panic
        if let Ok(mut buf) = serde_json::to_vec(&line) {
            buf.push(b'\n');
            let _ = writer.write_all(&buf);
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
fn capture(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::emit(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}
