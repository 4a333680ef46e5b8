//! Line-oriented terminal input and output.

use crate::error::{CliError, InvalidInput, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Reads answers line by line and writes prompts and messages.
///
/// Generic over the streams so sessions can be driven from memory.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of output.
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Show `text` without a newline and read the reply.
    ///
    /// The trailing line break is stripped. End of input is [`CliError::InputClosed`].
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Like [`Console::prompt`] but reports end of input as `None`.
    pub fn try_prompt(&mut self, text: &str) -> Result<Option<String>> {
        match self.prompt(text) {
            Ok(line) => Ok(Some(line)),
            Err(CliError::InputClosed) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Prompt until `parse` accepts the trimmed reply.
    ///
    /// Each rejection prints its message and asks again.
    pub fn prompt_until<T>(
        &mut self,
        text: &str,
        mut parse: impl FnMut(&str) -> std::result::Result<T, InvalidInput>,
    ) -> Result<T> {
        loop {
            let line = self.prompt(text)?;
            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(InvalidInput(message)) => {
                    tracing::debug!(input = %line, "rejected input");
                    self.say(message)?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
