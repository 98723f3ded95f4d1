use crate::builtin::BuiltinTable;
use crate::command::{Context, ExecutableCommand, Signal, Streams};
use crate::config::Config;
use crate::env::Environment;
use crate::external::ExternalCommand;
use crate::io_adapters::{Input, LineSource};
use crate::{lexer, prompt};
use anyhow::Result;
use std::io::Write;
use tracing::{debug, warn};

/// Printed to stderr when a command line is over the length limit.
fn line_too_long(limit: usize) -> String {
    format!("OMFG, you are violating the PEP8! No more than {limit} chars, please!")
}

/// A minimal interactive shell: built-in commands plus external programs.
///
/// Each loop iteration renders a prompt, reads one line, checks it, splits it
/// into arguments and [dispatches](Interpreter::dispatch) them, until a
/// command asks to terminate or the input runs out.
///
/// Example
/// ```
/// use pep8sh::Interpreter;
/// use pep8sh::command::{Signal, Streams};
/// use pep8sh::config::Config;
///
/// let mut sh = Interpreter::new(Config::default());
/// let (mut out, mut err) = (Vec::<u8>::new(), Vec::<u8>::new());
/// let mut streams = Streams::new(&mut out, &mut err);
/// assert_eq!(sh.dispatch(&["exit"], &mut streams), Signal::Terminate);
/// ```
pub struct Interpreter {
    env: Environment,
    builtins: BuiltinTable,
    config: Config,
}

impl Interpreter {
    /// Create a shell over the current process environment with the default builtins.
    pub fn new(config: Config) -> Self {
        Self {
            env: Environment::new(),
            builtins: BuiltinTable::default(),
            config,
        }
    }

    /// The shell's current environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Run one argument vector: a builtin if `argv[0]` names one, otherwise an
    /// external program.
    ///
    /// An empty vector does nothing. Errors are reported on `streams.stderr`
    /// and never stop the shell; only a command returning
    /// [`Signal::Terminate`] does.
    pub fn dispatch(&mut self, argv: &[&str], streams: &mut Streams<'_>) -> Signal {
        let Some(name) = argv.first() else {
            return Signal::Continue;
        };
        let builtin = self.builtins.lookup(name);
        let mut ctx = Context {
            env: &mut self.env,
            streams,
            builtins: &self.builtins,
            max_line_length: self.config.max_line_length,
        };

        let result = match builtin {
            Some(builtin) => {
                debug!(builtin = builtin.name(), "dispatching builtin");
                builtin.execute(argv, &mut ctx)
            }
            None => {
                debug!(program = *name, "dispatching external command");
                ExternalCommand.execute(argv, &mut ctx)
            }
        };

        match result {
            Ok(signal) => signal,
            Err(err) => {
                if let Err(write_err) = writeln!(ctx.streams.stderr, "pep8sh: {err:#}") {
                    warn!(error = %write_err, "failed to report command error");
                }
                Signal::Continue
            }
        }
    }

    /// Read and run command lines from `source` until `exit` or end of input.
    ///
    /// Returns an error only if `source` itself fails.
    pub fn repl(&mut self, source: &mut dyn LineSource, streams: &mut Streams<'_>) -> Result<()> {
        let mut signal = Signal::Continue;
        while signal.should_continue() {
            signal = self.step(source, streams)?;
        }
        Ok(())
    }

    /// One prompt-read-validate-dispatch round.
    fn step(&mut self, source: &mut dyn LineSource, streams: &mut Streams<'_>) -> Result<Signal> {
        let prompt = prompt::render(&self.env);
        let line = match source.read_line(&prompt)? {
            Input::Line(line) => line,
            Input::Interrupted => return Ok(Signal::Continue),
            Input::InvalidUtf8 => {
                debug!("rejected undecodable line");
                writeln!(streams.stderr, "pep8sh: input line is not valid UTF-8, ignored")?;
                return Ok(Signal::Continue);
            }
            Input::Eof => {
                debug!("end of input");
                writeln!(streams.stdout)?;
                return Ok(Signal::Terminate);
            }
        };

        if !self.validate(&line, streams)? {
            return Ok(Signal::Continue);
        }
        let argv = lexer::split_line(&line);
        if argv.is_empty() {
            return Ok(Signal::Continue);
        }
        if let Err(err) = source.remember(&line) {
            warn!(error = %err, "failed to record history entry");
        }

        Ok(self.dispatch(&argv, streams))
    }

    /// Whether `line` should be dispatched at all.
    ///
    /// A line over the length limit is reported and dropped whole; an empty
    /// line is silently skipped.
    fn validate(&self, line: &str, streams: &mut Streams<'_>) -> Result<bool> {
        let length = line.chars().count();
        if length > self.config.max_line_length {
            debug!(length, limit = self.config.max_line_length, "rejected long line");
            writeln!(streams.stderr, "{}", line_too_long(self.config.max_line_length))?;
            return Ok(false);
        }
        Ok(!line.is_empty())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
