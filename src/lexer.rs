//! Splitting a command line into its argument vector.
//!
//! There is no quoting or escaping: a token is a maximal run of characters that
//! are not in [`DELIMITERS`], so a delimiter can never appear inside a token.

/// Characters that separate arguments: space, tab, carriage return, newline, bell.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

/// Number of token slots reserved up front; the vector grows past it on demand.
const TOKEN_CAPACITY: usize = 64;

/// Splits `line` into its arguments.
///
/// Consecutive delimiters collapse, so the result never contains empty
/// strings, and a line made only of delimiters yields an empty vector. The
/// tokens borrow from `line`.
///
/// ```
/// use pep8sh::lexer::split_line;
/// assert_eq!(split_line("  ls   -la  /tmp "), ["ls", "-la", "/tmp"]);
/// ```
pub fn split_line(line: &str) -> Vec<&str> {
    let mut tokens = Vec::with_capacity(TOKEN_CAPACITY);
    tokens.extend(line.split(DELIMITERS).filter(|token| !token.is_empty()));
    tokens
}
