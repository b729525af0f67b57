//! AST and parser for the tsgen TypeScript front-end.
//!
//! This crate provides:
//! - `ast` - The closed node model (expressions, types, statements,
//!   declarations, trivia), its validating constructors, the `factory`
//!   helpers and the `Visitor` traversal contract
//! - `parser` - A recursive-descent parser over a `TokenReader` with
//!   speculative look-ahead for ambiguous prefixes
//!
//! Nodes are immutable values that own their children. Anything that can be
//! constructed in an invalid shape goes through a fallible constructor
//! returning [`ConstructionError`].

pub mod ast;
pub use ast::ConstructionError;

pub mod parser;
pub use parser::{ParseError, ParseErrorKind, Parser, parse_expression, parse_statement, parse_type};
