//! The AST node model.
//!
//! Every syntactic family is a closed enum. Visitors dispatch over these
//! enums with exhaustive matches (see [`visit`]).

mod error;
pub use error::ConstructionError;

mod names;
pub use names::{EntityName, Identifier, PropertyName};

mod literals;
pub use literals::{
    NumericLiteral, NumericLiteralKind, QuoteKind, RegularExpressionLiteral, StringLiteral,
    TemplateLiteral, TemplateSpan, escape_string,
};

mod operators;
pub use operators::{
    AssignmentOperator, BinaryOperator, PostfixUnaryOperator, Precedence, PrefixUnaryOperator,
};

mod modifiers;
pub use modifiers::{Accessibility, ModifierFlags};

mod expressions;
pub use expressions::*;

mod types;
pub use types::*;

mod parameters;
pub use parameters::{
    CallSignature, Parameter, ParameterAnnotation, ParameterList, RestParameter, TypeParameter,
};

mod statements;
pub use statements::*;

mod declarations;
pub use declarations::*;

mod trivia;
pub use trivia::{
    JsDocComment, JsDocCommentBuilder, JsDocParam, MultiLineComment, SingleLineComment, Trivia,
    TriviaNode,
};

pub mod factory;
pub mod visit;
