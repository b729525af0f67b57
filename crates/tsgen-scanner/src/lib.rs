//! TypeScript lexer and token model for the tsgen front-end.
//!
//! This crate provides the lexical analysis phase:
//! - `TokenKind` - Token types (identifiers, keywords, punctuators, literals)
//! - `Token` - An immutable, located token with its raw text and literal value
//! - `Lexer` - Turns source text into a fully materialized token buffer
//! - `TokenReader` - Cursor over that buffer with O(1) save/restore for
//!   speculative parsing

pub mod char_codes;

mod error;
pub use error::LexError;

mod token;
pub use token::{Token, TokenKind, TokenValue};

mod lexer;
pub use lexer::{Lexer, lex};

mod token_reader;
pub use token_reader::{ReaderState, TokenReader};
