//! Line-oriented prompts over any reader/writer pair.
//!
//! The dispatcher talks to `Console` instead of stdin/stdout directly, so a
//! whole session can be driven from an in-memory buffer in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::trace;

/// Message shown when a numeric field cannot be parsed.
pub const INVALID_NUMBER: &str = "Please enter a valid number.";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{}", line).context("write console output")
    }

    /// Show `prompt` (no newline) and read one line of input.
    ///
    /// Only the line terminator is stripped; invalid UTF-8 is replaced with
    /// U+FFFD. Returns `None` at end of input.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).context("write prompt")?;
        self.output.flush().context("flush prompt")?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("read console input")?;
        if read == 0 {
            trace!(prompt, "end of input");
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        let line = String::from_utf8_lossy(&buf).into_owned();
        Ok(Some(line))
    }

    /// Prompt until the trimmed input parses as `T`.
    pub fn prompt_number<T: FromStr>(&mut self, prompt: &str) -> Result<Option<T>> {
        self.prompt_parsed(prompt, |_| true)
    }

    /// Prompt until the input parses as a finite floating-point number.
    pub fn prompt_amount(&mut self, prompt: &str) -> Result<Option<f64>> {
        self.prompt_parsed(prompt, |value: &f64| value.is_finite())
    }

    fn prompt_parsed<T: FromStr>(
        &mut self,
        prompt: &str,
        accept: impl Fn(&T) -> bool,
    ) -> Result<Option<T>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<T>() {
                Ok(value) if accept(&value) => return Ok(Some(value)),
                _ => {
                    trace!(input = %line, "rejected numeric input");
                    self.say(INVALID_NUMBER)?;
                }
            }
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}
