//! Sources of command lines for the read-eval loop.

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, ErrorKind, Write};

/// What one read from a [`LineSource`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line with its terminator removed.
    Line(String),
    /// A line arrived but was not valid UTF-8; it has been consumed whole.
    InvalidUtf8,
    /// The user interrupted the read (Ctrl-C).
    Interrupted,
    /// No more input will arrive.
    Eof,
}

/// Shows a prompt and reads one line.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Input>;

    /// Offers a line that was dispatched for later recall. Most sources drop it.
    fn remember(&mut self, _line: &str) -> Result<()> {
        Ok(())
    }
}

/// Line editor backed by [`rustyline`], with in-memory history.
pub struct Editor {
    editor: DefaultEditor,
    record_history: bool,
}

impl Editor {
    pub fn new(record_history: bool) -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            record_history,
        })
    }
}

impl LineSource for Editor {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Input::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(ReadlineError::Io(err)) if err.kind() == ErrorKind::InvalidData => {
                Ok(Input::InvalidUtf8)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn remember(&mut self, line: &str) -> Result<()> {
        if self.record_history {
            self.editor.add_history_entry(line)?;
        }
        Ok(())
    }
}

/// Plain reader for piped input: writes the prompt to `out` and reads from `input`.
pub struct BufReadSource<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> BufReadSource<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Give back the reader and the prompt writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.out)
    }
}

impl<R: BufRead, W: Write> LineSource for BufReadSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        self.out.write_all(prompt.as_bytes())?;
        self.out.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(Input::Eof);
        }
        if line.ends_with(b"\n") {
            line.pop();
            if line.ends_with(b"\r") {
                line.pop();
            }
        }
        match String::from_utf8(line) {
            Ok(line) => Ok(Input::Line(line)),
            Err(_) => Ok(Input::InvalidUtf8),
        }
    }
}
