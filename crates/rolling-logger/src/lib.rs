//! Rolling Logger
//!
//! `tracing` subscriber that keeps the most recent formatted lines in a
//! bounded buffer. On wasm32 every line is also forwarded to the browser
//! console at the matching level.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("invalid log level: {0}")]
    InvalidLevel(String),
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Shared ring of recent log lines
#[derive(Clone, Debug)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    fn guard(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append a line, evicting the oldest once full
    pub fn push(&self, line: String) {
        let mut lines = self.guard();
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Oldest first
    pub fn lines(&self) -> Vec<String> {
        self.guard().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        self.guard().clear();
    }
}

/// Writer for one formatted event; the line is committed on drop
pub struct LineWriter {
    buffer: LogBuffer,
    level: Level,
    bytes: Vec<u8>,
}

impl io::Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.bytes).trim_end().to_string();
        if line.is_empty() {
            return;
        }
        forward(self.level, &line);
        self.buffer.push(line);
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter {
            buffer: self.clone(),
            level: Level::INFO,
            bytes: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        LineWriter {
            buffer: self.clone(),
            level: *meta.level(),
            bytes: Vec::new(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn forward(level: Level, line: &str) {
    let msg = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&msg),
        Level::WARN => web_sys::console::warn_1(&msg),
        Level::DEBUG | Level::TRACE => web_sys::console::debug_1(&msg),
        _ => web_sys::console::log_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn forward(_level: Level, _line: &str) {}

pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| LoggerError::InvalidLevel(level.to_string()))
}

/// Subscriber writing into `buffer`. Timestamps are left out because the
/// system clock is unavailable on wasm32-unknown-unknown.
pub fn subscriber(level: LevelFilter, buffer: LogBuffer) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_writer(buffer)
        .finish()
}

/// Install the global subscriber and return the buffer it writes to
pub fn init(level: &str, capacity: usize) -> Result<LogBuffer, LoggerError> {
    let filter = parse_level(level)?;
    let buffer = LogBuffer::new(capacity);
    tracing::subscriber::set_global_default(subscriber(filter, buffer.clone()))
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_keeps_last_lines() {
        let buffer = LogBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.lines(), vec!["line 2", "line 3", "line 4"]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let buffer = LogBuffer::new(0);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.lines(), vec!["b"]);
    }

    #[test]
    fn test_subscriber_captures_events_at_level() {
        let buffer = LogBuffer::new(10);
        let sub = subscriber(LevelFilter::INFO, buffer.clone());
        tracing::subscriber::with_default(sub, || {
            tracing::debug!("hidden");
            tracing::info!(column = 3, "created");
            tracing::warn!("careful");
        });

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("created"));
        assert!(lines[0].contains("column=3"));
        assert!(lines[1].contains("WARN"));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level(" WARN ").unwrap(), LevelFilter::WARN);
        assert!(matches!(parse_level("loud"), Err(LoggerError::InvalidLevel(_))));
    }
}
