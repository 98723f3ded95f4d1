use crate::builtin::BuiltinTable;
use crate::env::Environment;
use anyhow::Result;
use std::io::Write;

/// Outcome of a dispatched command: whether the read-eval loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Keep reading command lines.
    Continue,
    /// Leave the loop.
    Terminate,
}

impl Signal {
    /// Whether the loop should read another line.
    pub fn should_continue(self) -> bool {
        self == Signal::Continue
    }
}

/// Output streams a command writes to.
///
/// External commands inherit the real process streams instead, so these are
/// only flushed before a child is spawned.
pub struct Streams<'a> {
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
}

impl<'a> Streams<'a> {
    pub fn new(stdout: &'a mut dyn Write, stderr: &'a mut dyn Write) -> Self {
        Self { stdout, stderr }
    }
}

/// Everything a command may touch while it runs.
pub struct Context<'a, 's> {
    pub env: &'a mut Environment,
    pub streams: &'a mut Streams<'s>,
    pub builtins: &'a BuiltinTable,
    /// Longest accepted command line, in characters.
    pub max_line_length: usize,
}

/// Common capability of everything the dispatcher can run.
///
/// `argv` is the full argument vector, command name included.
pub trait ExecutableCommand {
    fn execute(&self, argv: &[&str], ctx: &mut Context<'_, '_>) -> Result<Signal>;
}
