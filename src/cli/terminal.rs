//! Line-oriented terminal I/O.
//!
//! [`Terminal`] is generic over its streams so the whole shell can be driven
//! from an in-memory buffer in tests.

use crate::cli::style::{self, Color};
use crate::config::AppConfig;
use crate::errors::{Error, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, trace};

/// Message shown when a numeric prompt receives something unparsable
pub const INVALID_NUMBER: &str = "Invalid number, try again.";

/// Input and output streams plus the display settings that apply to them.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    config: AppConfig,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Wraps the given streams.
    #[must_use]
    pub const fn new(input: R, output: W, config: AppConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Gives the streams back, e.g. to inspect captured output.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Reads one line without its line terminator. `None` at end of input.
    ///
    /// # Errors
    /// Returns an error if reading from the input stream fails.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            debug!("Input reached end of stream");
            return Ok(None);
        }
        let line = buf.trim_end_matches(['\n', '\r']).to_string();
        trace!(line = %line, "Read input line");
        Ok(Some(line))
    }

    /// Prints `prompt` without a line break and flushes it.
    ///
    /// # Errors
    /// Returns an error if writing to the output stream fails.
    pub fn print_prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints `prompt` and reads the answer.
    ///
    /// # Errors
    /// Returns [`Error::InputClosed`] at end of input, or an I/O error.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        self.print_prompt(prompt)?;
        self.read_line()?.ok_or(Error::InputClosed)
    }

    /// Prompts until the answer parses as `T`.
    ///
    /// # Errors
    /// Returns [`Error::InputClosed`] at end of input, or an I/O error.
    pub fn prompt_parsed<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        loop {
            let answer = self.prompt_line(prompt)?;
            if let Ok(value) = answer.trim().parse() {
                return Ok(value);
            }
            debug!(answer = %answer, "Rejected malformed number");
            self.say_colored(INVALID_NUMBER, Color::Red)?;
        }
    }

    /// Writes a line.
    ///
    /// # Errors
    /// Returns an error if writing to the output stream fails.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes a line in `color` when colors are enabled.
    ///
    /// # Errors
    /// Returns an error if writing to the output stream fails.
    pub fn say_colored(&mut self, text: &str, color: Color) -> Result<()> {
        let painted = style::paint(text, color, self.config.use_color);
        self.say(&painted)
    }

    /// Clears the screen when enabled in the configuration.
    ///
    /// # Errors
    /// Returns an error if writing to the output stream fails.
    pub fn clear_screen(&mut self) -> Result<()> {
        if self.config.clear_screen {
            write!(self.output, "{}", style::CLEAR_SCREEN)?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Waits for Enter when enabled in the configuration. End of input counts as Enter.
    ///
    /// # Errors
    /// Returns an error if the streams fail.
    pub fn pause(&mut self) -> Result<()> {
        if !self.config.pause_after_action {
            return Ok(());
        }
        write!(self.output, "\nPress Enter to continue...")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }
}
