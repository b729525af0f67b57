//! tsgen: a TypeScript-shaped lexer, parser, AST and pretty-printer for
//! source-to-source translation.
//!
//! The pipeline lives in the workspace crates and is re-exported here:
//! - [`scanner`] - `lex` turns text into a token buffer, `TokenReader` walks it
//! - [`parser`] - the AST node model, factory, visitor and recursive-descent
//!   parser
//! - [`emitter`] - `emit` renders any node back to source text
//!
//! This crate adds text-level entry points that run the whole pipeline with
//! a single [`Error`] type, tracing setup and `rayon` batch helpers.
//!
//! ```
//! let expression = tsgen::parse_expression_text("a+b*c")?;
//! assert_eq!(tsgen::emit(&expression, &tsgen::EmitOptions::default()), "a + b * c");
//! # Ok::<(), tsgen::Error>(())
//! ```

pub use tsgen_common as common;
pub use tsgen_emitter as emitter;
pub use tsgen_parser as parser;
pub use tsgen_scanner as scanner;

pub use tsgen_common::{NewLineKind, TextLocation};
pub use tsgen_emitter::{CodeDisplay, Emit, EmitOptions, Printer, emit};
pub use tsgen_parser::ast;
pub use tsgen_parser::{ConstructionError, ParseError, ParseErrorKind};
pub use tsgen_scanner::{LexError, Token, TokenKind, lex};

mod error;
pub use error::{Error, Result};

pub mod parallel;
pub use parallel::{BatchStats, emit_parallel, parse_expressions_parallel};

pub mod tracing_config;
pub use tracing_config::init_tracing;

use tracing::debug;
use tsgen_parser::ast::{Expression, Statement, Type};

/// Lex and parse one expression.
pub fn parse_expression_text(source: &str) -> Result<Expression> {
    let tokens = lex(source)?;
    Ok(tsgen_parser::parse_expression(tokens)?)
}

/// Lex and parse one type.
pub fn parse_type_text(source: &str) -> Result<Type> {
    let tokens = lex(source)?;
    Ok(tsgen_parser::parse_type(tokens)?)
}

/// Lex and parse one statement or declaration.
pub fn parse_statement_text(source: &str) -> Result<Statement> {
    let tokens = lex(source)?;
    Ok(tsgen_parser::parse_statement(tokens)?)
}

/// Parse a statement and print it back in canonical layout.
pub fn reformat_statement(source: &str, options: &EmitOptions) -> Result<String> {
    let statement = parse_statement_text(source)?;
    let output = emit(&statement, options);
    debug!(input = source.len(), output = output.len(), "reformatted statement");
    Ok(output)
}

/// Parse an expression and print it back in canonical layout.
pub fn reformat_expression(source: &str, options: &EmitOptions) -> Result<String> {
    let expression = parse_expression_text(source)?;
    Ok(emit(&expression, options))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
