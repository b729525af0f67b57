//! Cursor over a lexed token buffer.
//!
//! The reader never mutates the tokens it was built from, so a saved position
//! is all that is needed to backtrack after a speculative parse.

use crate::{Token, TokenKind};
use tsgen_common::TextLocation;

/// A saved reader position, returned by [`TokenReader::save_state`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReaderState {
    position: usize,
}

/// Sequential reader over a token buffer with O(1) save/restore.
///
/// Reading past the end keeps yielding a synthesized end-of-file token located
/// just after the last real token.
#[derive(Clone, Debug)]
pub struct TokenReader {
    tokens: Vec<Token>,
    position: usize,
    eof: Token,
}

impl TokenReader {
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof_location = tokens
            .last()
            .map(Token::end_location)
            .unwrap_or(TextLocation::START);
        TokenReader {
            tokens,
            position: 0,
            eof: Token::new(TokenKind::EndOfFile, "", eof_location),
        }
    }

    /// The next token, without consuming it.
    pub fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    /// The token `n` positions ahead of the cursor.
    pub fn peek_at(&self, n: usize) -> &Token {
        self.tokens.get(self.position + n).unwrap_or(&self.eof)
    }

    pub fn is_next(&self, kind: TokenKind) -> bool {
        self.peek().kind() == kind
    }

    pub fn is_next_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.peek().kind())
    }

    /// Check whether the upcoming tokens have exactly these kinds.
    pub fn is_next_sequence(&self, kinds: &[TokenKind]) -> bool {
        kinds
            .iter()
            .enumerate()
            .all(|(i, &kind)| self.peek_at(i).kind() == kind)
    }

    /// Consume and return the next token.
    pub fn read(&mut self) -> Token {
        let token = self.peek().clone();
        self.skip();
        token
    }

    pub fn skip(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Consume the next token if it has the given kind.
    pub fn read_if(&mut self, kind: TokenKind) -> Option<Token> {
        if self.is_next(kind) {
            Some(self.read())
        } else {
            None
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The most recently consumed token, if any.
    pub fn previous(&self) -> Option<&Token> {
        self.position
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
    }

    /// Whether a line terminator separates the previous token from the next one.
    pub fn has_preceding_line_break(&self) -> bool {
        match self.previous() {
            Some(previous) => previous.end_location().line < self.peek().location().line,
            None => false,
        }
    }

    pub fn save_state(&self) -> ReaderState {
        ReaderState {
            position: self.position,
        }
    }

    pub fn restore_state(&mut self, state: ReaderState) {
        self.position = state.position;
    }

    /// Run `f` and then put the cursor back where it was, whatever `f` consumed.
    pub fn with_saved_state<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let state = self.save_state();
        let result = f(self);
        self.restore_state(state);
        result
    }
}

#[cfg(test)]
#[path = "../tests/token_reader_tests.rs"]
mod tests;
