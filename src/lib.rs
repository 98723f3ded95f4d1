//! A tiny interactive shell that keeps every command line under 79 characters.
//!
//! The crate is split along the path a command line takes: [`lexer`] splits it
//! into arguments, [`builtin`] holds the commands implemented in-process, the
//! launcher in `external` runs everything else as a child process, and the
//! [`Interpreter`] ties those together into a read-eval loop fed by one of the
//! line sources in [`io_adapters`].

pub mod builtin;
pub mod command;
pub mod config;
pub mod env;
mod external;
mod interpreter;
pub mod io_adapters;
pub mod lexer;
pub mod prompt;

/// Re-export of the command dispatcher and read-eval loop.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;
