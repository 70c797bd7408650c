//! Append-only audit sink for human-readable processing traces.
//!
//! The sink is supplied by the caller and is not part of the engine's data
//! contract; the engine only ever appends to it.

use std::io::Write;

/// Append-only text sink receiving one line per processing step.
pub trait AuditSink {
    fn append(&mut self, line: &str);
}

/// Sink writing each line to any [`io::Write`](std::io::Write) (log file,
/// stderr, ...). Write failures are ignored; the audit trail never fails an
/// order.
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> AuditSink for WriterSink<W> {
    fn append(&mut self, line: &str) {
        let _ = writeln!(self.inner, "{line}");
    }
}

/// In-memory sink collecting lines; used in tests and single-order reports.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl AuditSink for MemorySink {
    fn append(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
