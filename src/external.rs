use crate::command::{Context, ExecutableCommand, Signal};
use anyhow::{Context as _, Result, bail};
use std::process::{Command, ExitStatus};
use tracing::{debug, warn};

/// Runs anything that is not a builtin as a foreground child process.
///
/// The child inherits stdin, stdout, stderr and the process environment, with
/// the shell's environment map applied on top. The program is looked up on
/// `PATH` the way `execvp` does.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalCommand;

impl ExecutableCommand for ExternalCommand {
    fn execute(&self, argv: &[&str], ctx: &mut Context<'_, '_>) -> Result<Signal> {
        let Some((name, args)) = argv.split_first() else {
            bail!("no program to run");
        };

        // The child writes to the real descriptors; anything still buffered on
        // our side has to go out first.
        if let Err(err) = ctx.streams.stdout.flush() {
            warn!(error = %err, "failed to flush stdout before spawning");
        }
        if let Err(err) = ctx.streams.stderr.flush() {
            warn!(error = %err, "failed to flush stderr before spawning");
        }

        let mut child = Command::new(name)
            .args(args)
            .envs(&ctx.env.vars)
            .spawn()
            .with_context(|| (*name).to_owned())?;
        debug!(pid = child.id(), program = *name, "spawned child");

        // `wait` only returns once the child has exited or was killed, so a
        // stopped child keeps the shell blocked, and the child is reaped here.
        let status = child
            .wait()
            .with_context(|| format!("{name}: failed to wait for child"))?;
        debug!(program = *name, status = %describe_status(status), "child finished");
        Ok(Signal::Continue)
    }
}

#[cfg(unix)]
fn describe_status(status: ExitStatus) -> String {
    use std::os::unix::process::ExitStatusExt;
    match (status.code(), status.signal()) {
        (Some(code), _) => format!("exit code {code}"),
        (None, Some(signal)) if status.core_dumped() => {
            format!("killed by signal {signal} (core dumped)")
        }
        (None, Some(signal)) => format!("killed by signal {signal}"),
        (None, None) => "unknown".to_owned(),
    }
}

#[cfg(not(unix))]
fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit code {code}"),
        None => "unknown".to_owned(),
    }
}
