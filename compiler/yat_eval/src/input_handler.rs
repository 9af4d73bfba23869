//! Input handler for the `Read` input channel.
//!
//! `Read` consumes one line per call; the evaluator parses it as an integer.
//! Blocking is left to the underlying source.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use parking_lot::Mutex;

/// Default input handler that reads lines from stdin.
#[derive(Default)]
pub struct StdinInputHandler;

impl StdinInputHandler {
    /// Read one line. `Ok(None)` at end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

/// Input handler that serves pre-supplied lines in order.
pub struct BufferInputHandler {
    lines: Mutex<VecDeque<String>>,
}

impl BufferInputHandler {
    /// Create a handler that will serve `lines` front to back.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BufferInputHandler {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    /// Take the next line, `None` once the buffer is empty.
    pub fn read_line(&self) -> Option<String> {
        self.lines.lock().pop_front()
    }

    /// Append a line to the end of the buffer.
    pub fn push_line(&self, line: impl Into<String>) {
        self.lines.lock().push_back(line.into());
    }

    /// Number of lines not yet read.
    pub fn remaining(&self) -> usize {
        self.lines.lock().len()
    }
}

impl Default for BufferInputHandler {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

/// Input handler implementation using enum dispatch.
pub enum InputHandlerImpl {
    /// Reads from stdin (default).
    Stdin(StdinInputHandler),
    /// Serves buffered lines.
    Buffer(BufferInputHandler),
}

impl InputHandlerImpl {
    /// Read one line. `Ok(None)` at end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let line = match self {
            Self::Stdin(h) => h.read_line()?,
            Self::Buffer(h) => h.read_line(),
        };
        tracing::trace!(?line, "read");
        Ok(line)
    }

    /// Append a line for later reads. No-op for stdin.
    pub fn push_line(&self, line: impl Into<String>) {
        if let Self::Buffer(h) = self {
            h.push_line(line);
        }
    }

    /// Lines still buffered. Always 0 for stdin.
    pub fn remaining(&self) -> usize {
        match self {
            Self::Buffer(h) => h.remaining(),
            Self::Stdin(_) => 0,
        }
    }
}

/// Shared input handler that can be passed around.
#[expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedInputHandler shared with the embedder"
)]
pub type SharedInputHandler = std::sync::Arc<InputHandlerImpl>;

/// Create a default stdin input handler.
#[expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedInputHandler"
)]
pub fn stdin_handler() -> SharedInputHandler {
    std::sync::Arc::new(InputHandlerImpl::Stdin(StdinInputHandler))
}

/// Create an input handler serving `lines` in order.
#[expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedInputHandler"
)]
pub fn buffer_input<I, S>(lines: I) -> SharedInputHandler
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    std::sync::Arc::new(InputHandlerImpl::Buffer(BufferInputHandler::new(lines)))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_serves_lines_in_order() {
        let handler = buffer_input(["1", "2"]);
        assert_eq!(handler.remaining(), 2);
        assert_eq!(handler.read_line().unwrap(), Some("1".to_string()));
        assert_eq!(handler.read_line().unwrap(), Some("2".to_string()));
        assert_eq!(handler.read_line().unwrap(), None);
    }

    #[test]
    fn push_line_appends() {
        let handler = buffer_input(["1"]);
        handler.push_line("9");
        assert_eq!(handler.remaining(), 2);
        handler.read_line().unwrap();
        assert_eq!(handler.read_line().unwrap(), Some("9".to_string()));
    }

    #[test]
    fn default_buffer_is_empty() {
        let handler = BufferInputHandler::default();
        assert_eq!(handler.remaining(), 0);
        assert_eq!(handler.read_line(), None);
    }
}
