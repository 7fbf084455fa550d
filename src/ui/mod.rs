//! Terminal output
//!
//! All user-facing text goes through a [`Terminal`], which owns the
//! stdout/stderr writers behind mutexes and hands out the progress draw
//! target, so frames and messages never interleave mid-line.

pub mod progress;
pub mod render;

use colored::Colorize as _;
use indicatif::{MultiProgress, ProgressDrawTarget};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

type Writer = Box<dyn Write + Send>;

/// Single-writer sink for rendered output
pub struct Terminal {
    out: Mutex<Writer>,
    err: Mutex<Writer>,
    animate: bool,
}

impl Terminal {
    /// Terminal bound to the process stdout and stderr
    #[must_use]
    pub fn stdio() -> Self {
        Self {
            out: Mutex::new(Box::new(io::stdout())),
            err: Mutex::new(Box::new(io::stderr())),
            animate: true,
        }
    }

    /// Terminal writing into in-memory buffers; progress bars are hidden
    #[must_use]
    pub fn buffered() -> (Self, Capture) {
        let capture = Capture::default();
        let terminal = Self {
            out: Mutex::new(Box::new(SharedBuffer(Arc::clone(&capture.out)))),
            err: Mutex::new(Box::new(SharedBuffer(Arc::clone(&capture.err)))),
            animate: false,
        };
        (terminal, capture)
    }

    /// Write already-rendered text to stdout as-is
    ///
    /// # Errors
    ///
    /// Returns an error if stdout cannot be written
    pub fn write_block(&self, text: &str) -> io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    /// Write one line to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if stdout cannot be written
    pub fn line(&self, text: &str) -> io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{text}")?;
        out.flush()
    }

    /// Print an error message in red on stderr
    pub fn error(&self, msg: &(impl std::fmt::Display + ?Sized)) {
        self.to_stderr(&msg.to_string().red().to_string());
    }

    /// Print a warning message in yellow on stderr
    pub fn warning(&self, msg: &(impl std::fmt::Display + ?Sized)) {
        self.to_stderr(&msg.to_string().yellow().to_string());
    }

    /// Print a plain message on stderr
    pub fn note(&self, msg: &(impl std::fmt::Display + ?Sized)) {
        self.to_stderr(&msg.to_string());
    }

    /// Fresh progress container drawing to stderr, or hidden when buffered
    #[must_use]
    pub fn progress(&self) -> MultiProgress {
        let target = if self.animate {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        MultiProgress::with_draw_target(target)
    }

    fn to_stderr(&self, text: &str) {
        let mut err = self.err.lock().unwrap_or_else(PoisonError::into_inner);
        // Nothing sensible remains to report a failed stderr write to.
        let _ = writeln!(err, "{text}").and_then(|()| err.flush());
    }
}

/// Handles onto the buffers behind [`Terminal::buffered`]
#[derive(Clone, Default)]
pub struct Capture {
    out: Arc<Mutex<Vec<u8>>>,
    err: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    /// Everything written to stdout so far
    #[must_use]
    pub fn stdout(&self) -> String {
        Self::contents(&self.out)
    }

    /// Everything written to stderr so far
    #[must_use]
    pub fn stderr(&self) -> String {
        Self::contents(&self.err)
    }

    fn contents(buffer: &Mutex<Vec<u8>>) -> String {
        let bytes = buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffered_terminal_separates_streams() {
        colored::control::set_override(false);
        let (terminal, capture) = Terminal::buffered();

        terminal.line("hello").ok();
        terminal.write_block("block\n").ok();
        terminal.error("broken");
        terminal.warning("careful");

        assert_eq!(capture.stdout(), "hello\nblock\n");
        assert_eq!(capture.stderr(), "broken\ncareful\n");
    }

    #[test]
    fn buffered_terminal_hides_progress() {
        let (terminal, _capture) = Terminal::buffered();
        assert!(terminal.progress().is_hidden());
    }
}
