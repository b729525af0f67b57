use crate::ConstructionError;
use thiserror::Error;
use tsgen_common::TextLocation;

#[derive(Clone, Debug, PartialEq)]
pub enum ParseErrorKind {
    /// The input is not valid in the accepted grammar.
    Syntax,
    /// The input reached a production the parser does not support yet.
    NotYetImplemented,
    /// A node could not be built from otherwise well-formed syntax, e.g. a
    /// hex literal above the safe integer range.
    InvalidNode(ConstructionError),
}

/// The first error of a parse call; parsing does not recover.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{location}: {message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub location: TextLocation,
}

impl ParseError {
    pub fn syntax(message: impl Into<String>, location: TextLocation) -> Self {
        ParseError {
            kind: ParseErrorKind::Syntax,
            message: message.into(),
            location,
        }
    }

    pub fn not_yet_implemented(feature: &str, location: TextLocation) -> Self {
        ParseError {
            kind: ParseErrorKind::NotYetImplemented,
            message: format!("{feature} are not supported yet"),
            location,
        }
    }

    pub fn invalid_node(error: ConstructionError, location: TextLocation) -> Self {
        ParseError {
            message: error.to_string(),
            kind: ParseErrorKind::InvalidNode(error),
            location,
        }
    }

    pub fn is_not_yet_implemented(&self) -> bool {
        self.kind == ParseErrorKind::NotYetImplemented
    }
}
