//! Print handler for the `Print` output channel.
//!
//! `Print` emits exactly one integer per call, newline terminated, in
//! evaluation order. Output can go to:
//! - stdout (default)
//! - a buffer, for tests and embedding
//! - nowhere (silent)
//!
//! Uses enum dispatch instead of trait objects; the set of destinations is
//! fixed.

use parking_lot::Mutex;

/// Default print handler that writes to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }
}

/// Print handler that captures output to a buffer.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    /// Create a new buffer print handler.
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Get all captured output.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Clear captured output.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to stdout (default).
    Stdout(StdoutPrintHandler),
    /// Captures to buffer.
    Buffer(BufferPrintHandler),
    /// Discards all output silently.
    Silent,
}

impl PrintHandlerImpl {
    /// Emit one integer as a line.
    pub fn emit(&self, value: i64) {
        tracing::trace!(value, "print");
        self.println(&value.to_string());
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    /// Get all captured output.
    ///
    /// Returns empty string for handlers that don't capture (stdout, silent).
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Captured output split into emitted values.
    ///
    /// Lines that are not integers (written through `println` directly) are
    /// skipped.
    pub fn emitted(&self) -> Vec<i64> {
        self.get_output()
            .lines()
            .filter_map(|line| line.parse().ok())
            .collect()
    }

    /// Clear captured output.
    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Shared print handler that can be passed around.
#[expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedPrintHandler shared with the embedder"
)]
pub type SharedPrintHandler = std::sync::Arc<PrintHandlerImpl>;

/// Create a default stdout print handler.
#[expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedPrintHandler"
)]
pub fn stdout_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Create a buffer print handler for capturing output.
#[expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedPrintHandler"
)]
pub fn buffer_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// Create a silent print handler that discards all output.
#[expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedPrintHandler"
)]
pub fn silent_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_handler_emit_one_line_per_value() {
        let handler = buffer_handler();
        handler.emit(2);
        handler.emit(-15);
        assert_eq!(handler.get_output(), "2\n-15\n");
        assert_eq!(handler.emitted(), vec![2, -15]);
    }

    #[test]
    fn buffer_handler_clear() {
        let handler = BufferPrintHandler::new();
        handler.println("hello");
        handler.clear();
        assert_eq!(handler.get_output(), "");
    }

    #[test]
    fn emitted_skips_text_lines() {
        let handler = buffer_handler();
        handler.println("header");
        handler.emit(7);
        assert_eq!(handler.emitted(), vec![7]);
    }

    #[test]
    fn silent_handler_discards() {
        let handler = silent_handler();
        handler.emit(1);
        assert_eq!(handler.get_output(), "");
        assert!(handler.emitted().is_empty());
    }

    #[test]
    fn stdout_handler_does_not_capture() {
        let handler = stdout_handler();
        assert_eq!(handler.get_output(), "");
    }

    #[test]
    fn shared_handler_sees_writes_through_clones() {
        let handler = buffer_handler();
        let clone = SharedPrintHandler::clone(&handler);
        clone.emit(3);
        assert_eq!(handler.get_output(), "3\n");
    }
}
