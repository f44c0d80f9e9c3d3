//! Line-oriented prompting over any reader/writer pair.
//!
//! Numeric fields are asked for in a loop until the answer parses; the
//! core log only ever sees typed values.

use std::io::{self, BufRead, Write};

use log::debug;

/// Reads answers from `input` after writing prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer used for prompts and any other session output.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Writes `label` and returns the next line without its line ending.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns `io::ErrorKind::UnexpectedEof` once the input is exhausted.
    pub fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Asks repeatedly until `parse` accepts the answer, printing
    /// `retry_message` after each rejected one.
    pub fn ask_until<T, F>(&mut self, label: &str, retry_message: &str, parse: F) -> io::Result<T>
    where
        F: Fn(&str) -> gymlog_core::Result<T>,
    {
        loop {
            let answer = self.ask(label)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("Rejected answer: {e}");
                    writeln!(self.output, "{retry_message}")?;
                }
            }
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
