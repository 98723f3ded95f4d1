use argh::FromArgs;
use pep8sh::Interpreter;
use pep8sh::command::Streams;
use pep8sh::config::Config;
use pep8sh::io_adapters::{BufReadSource, Editor, LineSource};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `PEP8SH_LOG=debug`.
const LOG_ENV: &str = "PEP8SH_LOG";

#[derive(FromArgs)]
/// pep8sh: the shell that respects PEP8 even for commands.
struct Args {
    #[argh(switch)]
    /// read commands with a plain line reader instead of the line editor.
    plain: bool,

    #[argh(switch)]
    /// don't keep a history of entered lines.
    no_history: bool,

    #[argh(switch, short = 'v')]
    /// log dispatch and process events to stderr.
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    init_logging(args.verbose);

    let config = Config {
        record_history: !args.no_history,
        ..Config::default()
    };
    let mut shell = Interpreter::new(config.clone());

    let mut source: Box<dyn LineSource> = if args.plain {
        Box::new(BufReadSource::new(io::stdin().lock(), io::stdout()))
    } else {
        match Editor::new(config.record_history) {
            Ok(editor) => Box::new(editor),
            Err(err) => {
                eprintln!("pep8sh: can't start the line editor: {err:#}");
                return ExitCode::FAILURE;
            }
        }
    };

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut streams = Streams::new(&mut stdout, &mut stderr);
    match shell.repl(source.as_mut(), &mut streams) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pep8sh: {err:#}");
            ExitCode::FAILURE
        }
    }
}
