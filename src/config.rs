/// Longest command line the shell accepts, terminator excluded.
pub const MAX_LINE_LENGTH: usize = 79;

/// Tunables of one shell instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Lines longer than this many characters are rejected without being run.
    pub max_line_length: usize,
    /// Whether the line editor remembers dispatched lines for recall.
    pub record_history: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_line_length: MAX_LINE_LENGTH,
            record_history: true,
        }
    }
}
