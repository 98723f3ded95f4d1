use crate::command::{Context, ExecutableCommand, Signal};
use anyhow::{Context as _, Result, bail};
use std::env;
use std::io::Write;
use tracing::debug;

/// Commands implemented in-process rather than by launching a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `cd <path>`
    ChangeDirectory,
    /// `help`
    Help,
    /// `exit`
    Exit,
}

impl Builtin {
    /// Name the command is invoked by.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::ChangeDirectory => "cd",
            Builtin::Help => "help",
            Builtin::Exit => "exit",
        }
    }
}

impl ExecutableCommand for Builtin {
    fn execute(&self, argv: &[&str], ctx: &mut Context<'_, '_>) -> Result<Signal> {
        match self {
            Builtin::ChangeDirectory => change_directory(argv, ctx),
            Builtin::Help => help(ctx),
            Builtin::Exit => Ok(Signal::Terminate),
        }
    }
}

/// Immutable name-to-builtin mapping, built once when the shell starts.
///
/// Iteration order is the order `help` lists the commands in.
#[derive(Debug, Clone)]
pub struct BuiltinTable {
    entries: Vec<Builtin>,
}

impl BuiltinTable {
    /// Builds a table from `entries`.
    ///
    /// Panics if two entries share a name.
    pub fn new(entries: Vec<Builtin>) -> Self {
        for (i, builtin) in entries.iter().enumerate() {
            assert!(
                !entries[..i].iter().any(|b| b.name() == builtin.name()),
                "duplicate builtin `{}`",
                builtin.name()
            );
        }
        Self { entries }
    }

    pub fn lookup(&self, name: &str) -> Option<Builtin> {
        self.entries.iter().copied().find(|b| b.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|b| b.name())
    }
}

impl Default for BuiltinTable {
    /// `cd`, `help` and `exit`, in that order.
    fn default() -> Self {
        Self::new(vec![Builtin::ChangeDirectory, Builtin::Help, Builtin::Exit])
    }
}

fn change_directory(argv: &[&str], ctx: &mut Context<'_, '_>) -> Result<Signal> {
    let Some(target) = argv.get(1) else {
        bail!("expected argument to \"cd\"");
    };

    env::set_current_dir(target).with_context(|| format!("cd: {target}"))?;
    let new_dir = env::current_dir().context("cd: can't read the new working directory")?;
    debug!(dir = %new_dir.display(), "changed working directory");
    ctx.env.record_dir_change(&new_dir);
    Ok(Signal::Continue)
}

fn help(ctx: &mut Context<'_, '_>) -> Result<Signal> {
    let out = &mut *ctx.streams.stdout;
    writeln!(out, "pep8sh: The shell that respects PEP8 even for commands")?;
    writeln!(
        out,
        "Type program names and arguments, and hit enter, as long as they are shorter than {} chars.",
        ctx.max_line_length
    )?;
    writeln!(out, "The following are builtins:")?;
    for name in ctx.builtins.names() {
        writeln!(out, "  {name}")?;
    }
    writeln!(out, "Use the man command for information on other programs.")?;
    Ok(Signal::Continue)
}
