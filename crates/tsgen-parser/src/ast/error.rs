use super::NumericLiteralKind;
use thiserror::Error;

/// A node constructor was given a value it cannot represent.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConstructionError {
    #[error("'{0}' is not a valid identifier")]
    InvalidIdentifier(String),

    #[error("numeric literal value {0} must be finite and non-negative")]
    InvalidNumericValue(f64),

    #[error("{kind} literal value {value} is not an integer")]
    NonIntegerLiteral { kind: NumericLiteralKind, value: f64 },

    #[error("{kind} literal value {value} exceeds the maximum safe integer")]
    IntegerOutOfRange { kind: NumericLiteralKind, value: f64 },

    #[error("a required parameter '{name}' cannot follow an optional parameter")]
    RequiredAfterOptional { name: String },

    #[error("parameter '{name}' is optional but was placed among the required parameters")]
    OptionalInRequiredPosition { name: String },

    #[error("a call to 'super' must use the super call kind and vice versa")]
    MismatchedSuperCall,

    #[error("{what} needs at least {min} elements")]
    TooFewElements { what: &'static str, min: usize },

    #[error("a try statement needs a catch or finally clause")]
    TryWithoutHandler,

    #[error("an import clause needs a default binding or named bindings")]
    EmptyImportClause,

    #[error("comments can only be attached to declarations and variable statements")]
    TriviaNotSupported,

    #[error("invalid {what}: {text:?}")]
    InvalidText { what: &'static str, text: String },
}
