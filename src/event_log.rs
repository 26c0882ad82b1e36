//! Player-facing notice log.
//!
//! Append-only and ordered by reveal time, not by network arrival. Distinct
//! from the `log` crate diagnostics, which go to stderr for operators.

use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Hit,
    Miss,
    Sunk,
    /// Rejected intent, recovered locally.
    Advisory,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub kind: LogKind,
    pub text: String,
}

impl LogEntry {
    pub fn line(&self) -> String {
        format!("{}: {}", self.at.format("%H:%M:%S"), self.text)
    }
}

#[derive(Debug, Default)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: LogKind, text: impl Into<String>) {
        self.entries.push(LogEntry {
            at: Local::now(),
            kind,
            text: text.into(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent `n` entries, oldest first.
    pub fn tail(&self, n: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_append_order() {
        let mut log = EventLog::new();
        log.push(LogKind::Info, "first");
        log.push(LogKind::Miss, "second");
        log.push(LogKind::Hit, "third");
        let texts: Vec<_> = log.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn tail_returns_most_recent() {
        let mut log = EventLog::new();
        for i in 0..5 {
            log.push(LogKind::Info, format!("entry {}", i));
        }
        let tail: Vec<_> = log.tail(2).iter().map(|e| e.text.as_str()).collect();
        assert_eq!(tail, ["entry 3", "entry 4"]);
        assert_eq!(log.tail(100).len(), 5);
    }
}
