//! In-memory log sink
//!
//! The terminal is in raw mode while the viewer runs, so log records are
//! kept in a bounded buffer and drawn by the messages panel instead of
//! being written to stderr.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 200;

/// A formatted log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: Level,
    pub text: String,
}

/// Shared handle to the buffered log lines. Clones see the same buffer.
#[derive(Debug, Clone)]
pub struct MessageLog {
    lines: Arc<Mutex<VecDeque<LogLine>>>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Append a line, dropping the oldest one when full
    pub fn push(&self, level: Level, text: impl Into<String>) {
        if let Ok(mut lines) = self.lines.lock() {
            while lines.len() >= self.capacity {
                lines.pop_front();
            }
            lines.push_back(LogLine {
                level,
                text: text.into(),
            });
        }
    }

    /// The newest `n` lines, oldest first
    pub fn tail(&self, n: usize) -> Vec<LogLine> {
        match self.lines.lock() {
            Ok(lines) => {
                let skip = lines.len().saturating_sub(n);
                lines.iter().skip(skip).cloned().collect()
            }
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }

    /// Install a clone of this log as the global logger
    pub fn install(&self, level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self.clone()))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Log for MessageLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.push(record.level(), record.args().to_string());
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_newest_lines() {
        let log = MessageLog::new(3);
        for i in 0..5 {
            log.push(Level::Info, format!("line {i}"));
        }

        assert_eq!(log.len(), 3);
        let texts: Vec<_> = log.tail(10).into_iter().map(|l| l.text).collect();
        assert_eq!(texts, ["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_tail_is_oldest_first() {
        let log = MessageLog::new(10);
        log.push(Level::Debug, "a");
        log.push(Level::Warn, "b");
        log.push(Level::Error, "c");

        let tail = log.tail(2);
        assert_eq!(tail[0].text, "b");
        assert_eq!(tail[1].level, Level::Error);
    }

    #[test]
    fn test_clones_share_buffer() {
        let log = MessageLog::default();
        let other = log.clone();
        other.push(Level::Info, "shared");

        assert_eq!(log.len(), 1);
        log.clear();
        assert!(other.is_empty());
    }

    #[test]
    fn test_log_record() {
        let log = MessageLog::new(4);
        log::set_max_level(LevelFilter::Trace);
        log.log(
            &Record::builder()
                .args(format_args!("door at {},{}", 3, 4))
                .level(Level::Debug)
                .build(),
        );

        assert_eq!(log.tail(1)[0].text, "door at 3,4");
    }
}
