//! Recursive-descent parser.
//!
//! One method per nonterminal, split by family:
//! - `state_expressions` - precedence climbing, unary/postfix, calls, literals
//! - `state_types` - type grammar and the function-type disambiguation
//! - `state_parameters` - parameter lists, type parameters, call signatures
//! - `state_statements` - statements and automatic semicolon insertion
//! - `state_declarations` - functions, classes, interfaces, enums, namespaces,
//!   imports
//!
//! The token buffer is fully materialized, so speculative parses
//! (`look_ahead`) only save and restore an index.

mod error;
pub use error::{ParseError, ParseErrorKind};

mod state_declarations;
mod state_expressions;
mod state_parameters;
mod state_statements;
mod state_types;

use crate::ast::{ConstructionError, Expression, Identifier, Statement, Type};
use tsgen_common::TextLocation;
use tsgen_common::limits::MAX_PARSER_DEPTH;
use tsgen_scanner::{Token, TokenKind, TokenReader};

pub(crate) type ParseResult<T> = Result<T, ParseError>;

/// Parse `tokens` as exactly one expression.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse_expression(tokens: Vec<Token>) -> Result<Expression, ParseError> {
    let mut parser = Parser::new(tokens);
    let expression = parser.parse_expression()?;
    parser.expect_end()?;
    Ok(expression)
}

/// Parse `tokens` as exactly one type.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse_type(tokens: Vec<Token>) -> Result<Type, ParseError> {
    let mut parser = Parser::new(tokens);
    let ty = parser.parse_type()?;
    parser.expect_end()?;
    Ok(ty)
}

/// Parse `tokens` as exactly one statement.
///
/// Input holding more than one top-level statement is a statement list,
/// which is reported as not yet implemented.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse_statement(tokens: Vec<Token>) -> Result<Statement, ParseError> {
    let mut parser = Parser::new(tokens);
    let statement = parser.parse_statement()?;
    if !parser.reader.is_at_end() {
        return Err(ParseError::not_yet_implemented(
            "Statement lists",
            parser.location(),
        ));
    }
    Ok(statement)
}

/// Parser state over one token buffer.
pub struct Parser {
    reader: TokenReader,
    depth: u32,
    /// Set while parsing a `for` head initializer, where `in` ends the
    /// expression instead of being a binary operator.
    disallow_in: bool,
    /// Set for the first assignment expression of a conditional's true
    /// branch, where `(a): T => b` only counts as an arrow if a `:` follows.
    in_conditional_when_true: bool,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            reader: TokenReader::new(tokens),
            depth: 0,
            disallow_in: false,
            in_conditional_when_true: false,
        }
    }

    /// Fail unless every token has been consumed.
    pub fn expect_end(&self) -> ParseResult<()> {
        if self.reader.is_at_end() {
            Ok(())
        } else {
            Err(self.unexpected_token())
        }
    }

    // =========================================================================
    // Token access
    // =========================================================================

    pub(crate) fn token(&self) -> TokenKind {
        self.reader.peek().kind()
    }

    pub(crate) fn token_at(&self, n: usize) -> TokenKind {
        self.reader.peek_at(n).kind()
    }

    pub(crate) fn is_token(&self, kind: TokenKind) -> bool {
        self.reader.is_next(kind)
    }

    pub(crate) fn location(&self) -> TextLocation {
        self.reader.peek().location()
    }

    pub(crate) fn next_token(&mut self) {
        self.reader.skip();
    }

    /// Consume the current token if it has the given kind.
    pub(crate) fn parse_optional(&mut self, kind: TokenKind) -> bool {
        self.reader.read_if(kind).is_some()
    }

    pub(crate) fn parse_expected(&mut self, kind: TokenKind) -> ParseResult<Token> {
        match self.reader.read_if(kind) {
            Some(token) => Ok(token),
            None => Err(ParseError::syntax(
                format!("{kind} expected, found {}", self.reader.peek()),
                self.location(),
            )),
        }
    }

    /// Whether the token `n` ahead starts exactly where the one before it
    /// ends, with nothing in between.
    pub(crate) fn is_adjacent_to_previous(&self, n: usize) -> bool {
        n > 0 && self.reader.peek_at(n - 1).end_location() == self.reader.peek_at(n).location()
    }

    pub(crate) fn has_preceding_line_break(&self) -> bool {
        self.reader.has_preceding_line_break()
    }

    // =========================================================================
    // Errors
    // =========================================================================

    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::syntax(message, self.location())
    }

    pub(crate) fn unexpected_token(&self) -> ParseError {
        let token = self.reader.peek();
        if token.kind() == TokenKind::EndOfFile {
            self.error("Unexpected end of input")
        } else {
            self.error(format!("Unexpected token {token}"))
        }
    }

    pub(crate) fn not_yet_implemented(&self, feature: &str) -> ParseError {
        tracing::debug!(feature, location = %self.location(), "unsupported production");
        ParseError::not_yet_implemented(feature, self.location())
    }

    /// Lift a node construction failure into a parse error at `location`.
    pub(crate) fn build<T>(
        &self,
        result: Result<T, ConstructionError>,
        location: TextLocation,
    ) -> ParseResult<T> {
        result.map_err(|error| ParseError::invalid_node(error, location))
    }

    // =========================================================================
    // Speculation and recursion control
    // =========================================================================

    /// Run `f` speculatively; the token position is always restored.
    pub(crate) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.reader.save_state();
        let disallow_in = self.disallow_in;
        let result = f(self);
        self.reader.restore_state(snapshot);
        self.disallow_in = disallow_in;
        result
    }

    pub(crate) fn with_depth<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.depth >= MAX_PARSER_DEPTH {
            return Err(self.error("Maximum nesting depth exceeded"));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Run `f` with `in` treated as a binary operator or not.
    pub(crate) fn with_in_allowed<T>(
        &mut self,
        allowed: bool,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let saved = self.disallow_in;
        self.disallow_in = !allowed;
        let result = f(self);
        self.disallow_in = saved;
        result
    }

    // =========================================================================
    // Identifiers
    // =========================================================================

    /// An identifier or contextual keyword.
    pub(crate) fn is_identifier(&self) -> bool {
        self.token().is_identifier_like()
    }

    pub(crate) fn parse_identifier(&mut self) -> ParseResult<Identifier> {
        if !self.is_identifier() {
            return Err(if self.token().is_reserved_word() {
                self.error(format!(
                    "Identifier expected. {} is a reserved word",
                    self.reader.peek()
                ))
            } else {
                self.error("Identifier expected")
            });
        }
        self.identifier_from_current()
    }

    /// Any identifier name, reserved words included (after `.`, in property
    /// names, in import specifiers).
    pub(crate) fn parse_identifier_name(&mut self) -> ParseResult<Identifier> {
        if !self.token().is_identifier_name() {
            return Err(self.error("Identifier expected"));
        }
        self.identifier_from_current()
    }

    fn identifier_from_current(&mut self) -> ParseResult<Identifier> {
        let token = self.reader.read();
        self.build(Identifier::new(token.text()), token.location())
    }

    // =========================================================================
    // Automatic semicolon insertion
    // =========================================================================

    pub(crate) fn can_parse_semicolon(&self) -> bool {
        self.is_token(TokenKind::Semicolon)
            || self.is_token(TokenKind::CloseBrace)
            || self.is_token(TokenKind::EndOfFile)
            || self.has_preceding_line_break()
    }

    pub(crate) fn parse_semicolon(&mut self) -> ParseResult<()> {
        if self.parse_optional(TokenKind::Semicolon) || self.can_parse_semicolon() {
            Ok(())
        } else {
            Err(self.error(format!("';' expected, found {}", self.reader.peek())))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/parser_tests.rs"]
mod tests;
