//! Confirmation gate between the printed report and the plots

use std::io::{self, BufRead, Write};

/// Prompt shown before the figures are rendered
pub const PROMPT: &str = "\nPress Enter to view graphs. . .";

/// Whether the run stops for user confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Print the prompt and wait for a line of input
    Interactive,
    /// Continue immediately (headless runs, tests)
    Skip,
}

impl Gate {
    pub fn from_pause(pause: bool) -> Self {
        if pause {
            Gate::Interactive
        } else {
            Gate::Skip
        }
    }

    /// Block until a line (or end of input) arrives on `input`.
    ///
    /// Returns the number of bytes consumed; zero means end of input or a
    /// skipped gate.
    pub fn wait<R, W>(&self, input: &mut R, output: &mut W) -> io::Result<usize>
    where
        R: BufRead,
        W: Write + ?Sized,
    {
        match self {
            Gate::Skip => Ok(0),
            Gate::Interactive => {
                write!(output, "{}", PROMPT)?;
                output.flush()?;
                let mut line = String::new();
                input.read_line(&mut line)
            }
        }
    }
}
