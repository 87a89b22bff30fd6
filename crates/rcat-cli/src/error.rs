//! Error types for the interactive console.

/// Errors that end an interactive step.
///
/// Malformed input is never an error: prompts re-ask until they get a usable
/// answer. Only a closed input stream or a broken console stops them.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The input stream reached end of file.
    #[error("input closed")]
    Closed,

    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl PromptError {
    /// Returns `true` if the input stream was closed.
    #[inline]
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}
