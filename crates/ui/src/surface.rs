//! Drawing targets.

use std::io::{self, Write};

use crate::error::UiError;

/// Somewhere frames are drawn.
pub trait Surface {
    /// Replaces the previously drawn frame with `frame`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying output fails.
    fn draw(&mut self, frame: &str) -> Result<(), UiError>;

    /// Leaves the output in a clean state after the last frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying output fails.
    fn finish(&mut self) -> Result<(), UiError>;
}

/// Redraws frames in place on an ANSI terminal.
///
/// A frame may span several lines; the cursor is moved back to the first
/// line before the next frame is written over it.
#[derive(Debug)]
pub struct TerminalSurface<W: Write> {
    out: W,
    drawn_lines: usize,
}

impl<W: Write> TerminalSurface<W> {
    /// Wraps a writer.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self {
            out,
            drawn_lines: 0,
        }
    }

    /// Returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalSurface<io::Stdout> {
    /// Surface on standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn draw(&mut self, frame: &str) -> Result<(), UiError> {
        if self.drawn_lines > 0 {
            write!(self.out, "\r")?;
            if self.drawn_lines > 1 {
                write!(self.out, "\x1b[{}A", self.drawn_lines - 1)?;
            }
        }
        write!(self.out, "{frame}")?;
        self.out.flush()?;
        self.drawn_lines = frame.lines().count().max(1);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), UiError> {
        if self.drawn_lines > 0 {
            writeln!(self.out)?;
            self.drawn_lines = 0;
        }
        self.out.flush()?;
        Ok(())
    }
}
