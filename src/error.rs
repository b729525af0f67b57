//! The error type of the text-level entry points.

use thiserror::Error;
use tsgen_parser::{ConstructionError, ParseError};
use tsgen_scanner::LexError;

/// Any failure of the lex -> parse pipeline or of building a node.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("lex error at {0}")]
    Lex(#[from] LexError),
    #[error("parse error at {0}")]
    Parse(#[from] ParseError),
    #[error("invalid node: {0}")]
    Construction(#[from] ConstructionError),
}

impl Error {
    /// Whether the input reached a grammar production that is not supported
    /// yet, as opposed to being invalid.
    pub fn is_not_yet_implemented(&self) -> bool {
        matches!(self, Error::Parse(error) if error.is_not_yet_implemented())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
