use thiserror::Error;
use tsgen_common::TextLocation;

/// A malformed literal, escape sequence or character in the source text.
///
/// Lexing stops at the first error; there is no recovery.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{location}: {message}")]
pub struct LexError {
    pub message: String,
    pub location: TextLocation,
}

impl LexError {
    pub fn new(message: impl Into<String>, location: TextLocation) -> Self {
        LexError {
            message: message.into(),
            location,
        }
    }
}
