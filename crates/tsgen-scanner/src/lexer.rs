//! The lexer that turns source text into a token buffer.
//!
//! The whole input is tokenized eagerly. Comments and whitespace are skipped;
//! they never reach the parser. The first malformed literal aborts lexing with
//! a [`LexError`] carrying the location of the offending construct.

use crate::char_codes::{
    digit_value, is_decimal_digit, is_identifier_part, is_identifier_start, is_line_break,
    is_whitespace_single_line,
};
use crate::{LexError, Token, TokenKind};
use memchr::{memchr, memchr3};
use tsgen_common::TextLocation;

/// Tokenize `source` in one call.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// A lexer over a single source text.
pub struct Lexer<'a> {
    source: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
    location: TextLocation,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            pos: 0,
            location: TextLocation::START,
        }
    }

    /// Consume the whole source and return its tokens in order.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_trivia()?;
            if self.is_at_end() {
                break;
            }
            tokens.push(self.next_token()?);
        }
        tracing::debug!(
            token_count = tokens.len(),
            bytes = self.source.len(),
            "lexed source"
        );
        Ok(tokens)
    }

    /// The location of the next unread character.
    pub fn location(&self) -> TextLocation {
        self.location
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.source[self.pos..].chars().nth(n)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        // `\r\n` counts as one line break, taken at the `\n`.
        self.location = if ch == '\r' && self.peek() == Some('\n') {
            self.location
        } else if is_line_break(ch) {
            self.location.next_line()
        } else {
            self.location.next_column()
        };
        Some(ch)
    }

    /// Advance over `len` bytes known to contain no line terminators.
    fn advance_run(&mut self, len: usize) {
        let run = &self.source[self.pos..self.pos + len];
        self.location.column += run.chars().count() as u32;
        self.pos += len;
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn error(&self, message: impl Into<String>, location: TextLocation) -> LexError {
        LexError::new(message, location)
    }

    // =========================================================================
    // Trivia
    // =========================================================================

    fn skip_trivia(&mut self) -> Result<(), LexError> {
        while let Some(ch) = self.peek() {
            if is_whitespace_single_line(ch) || is_line_break(ch) {
                self.advance();
                continue;
            }

            if ch != '/' {
                break;
            }

            match self.peek_at(1) {
                Some('/') => {
                    let rest = &self.source.as_bytes()[self.pos..];
                    let end = memchr3(b'\n', b'\r', 0xE2, rest).unwrap_or(rest.len());
                    // 0xE2 is the lead byte of U+2028/U+2029; step over the run
                    // character by character from there.
                    self.advance_run(end);
                    while let Some(c) = self.peek() {
                        if is_line_break(c) {
                            break;
                        }
                        self.advance();
                    }
                }
                Some('*') => {
                    let start = self.location;
                    self.advance();
                    self.advance();
                    loop {
                        match self.advance() {
                            Some('*') if self.peek() == Some('/') => {
                                self.advance();
                                break;
                            }
                            Some(_) => {}
                            None => return Err(self.error("Unterminated multi-line comment", start)),
                        }
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    // =========================================================================
    // Tokens
    // =========================================================================

    fn next_token(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let start_loc = self.location;
        let Some(ch) = self.peek() else {
            return Ok(Token::new(TokenKind::EndOfFile, "", start_loc));
        };

        if ch == '"' || ch == '\'' {
            return self.scan_string(ch);
        }
        if is_decimal_digit(ch) || (ch == '.' && self.peek_at(1).is_some_and(is_decimal_digit)) {
            return self.scan_number();
        }
        if is_identifier_start(ch) {
            return Ok(self.scan_identifier());
        }

        self.advance();
        let kind = match ch {
            '{' => TokenKind::OpenBrace,
            '}' => TokenKind::CloseBrace,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '[' => TokenKind::OpenBracket,
            ']' => TokenKind::CloseBracket,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '~' => TokenKind::Tilde,
            '?' => TokenKind::Question,
            '`' => TokenKind::Backtick,
            '>' => TokenKind::GreaterThan,
            '.' => self.scan_dot(),
            '<' => self.scan_less_than(),
            '=' => self.scan_equals(),
            '!' => self.scan_exclamation(),
            '+' => self.scan_doubled_or_assign('+', TokenKind::Plus, TokenKind::PlusPlus, TokenKind::PlusEquals),
            '-' => self.scan_doubled_or_assign('-', TokenKind::Minus, TokenKind::MinusMinus, TokenKind::MinusEquals),
            '&' => self.scan_doubled_or_assign(
                '&',
                TokenKind::Ampersand,
                TokenKind::AmpersandAmpersand,
                TokenKind::AmpersandEquals,
            ),
            '|' => self.scan_doubled_or_assign('|', TokenKind::Bar, TokenKind::BarBar, TokenKind::BarEquals),
            '*' => self.scan_asterisk(),
            '/' => self.scan_assign_suffix(TokenKind::Slash, TokenKind::SlashEquals),
            '%' => self.scan_assign_suffix(TokenKind::Percent, TokenKind::PercentEquals),
            '^' => self.scan_assign_suffix(TokenKind::Caret, TokenKind::CaretEquals),
            _ => {
                return Err(self.error(format!("Invalid character '{ch}'"), start_loc));
            }
        };

        Ok(Token::new(kind, &self.source[start..self.pos], start_loc))
    }

    fn scan_dot(&mut self) -> TokenKind {
        if self.peek() == Some('.') && self.peek_at(1) == Some('.') {
            self.advance();
            self.advance();
            TokenKind::DotDotDot
        } else {
            TokenKind::Dot
        }
    }

    fn scan_less_than(&mut self) -> TokenKind {
        if self.eat('<') {
            self.scan_assign_suffix(TokenKind::LessThanLessThan, TokenKind::LessThanLessThanEquals)
        } else if self.eat('=') {
            TokenKind::LessThanEquals
        } else {
            TokenKind::LessThan
        }
    }

    fn scan_equals(&mut self) -> TokenKind {
        if self.eat('>') {
            TokenKind::EqualsGreaterThan
        } else if self.eat('=') {
            if self.eat('=') {
                TokenKind::EqualsEqualsEquals
            } else {
                TokenKind::EqualsEquals
            }
        } else {
            TokenKind::Equals
        }
    }

    fn scan_exclamation(&mut self) -> TokenKind {
        if self.eat('=') {
            if self.eat('=') {
                TokenKind::ExclamationEqualsEquals
            } else {
                TokenKind::ExclamationEquals
            }
        } else {
            TokenKind::Exclamation
        }
    }

    fn scan_asterisk(&mut self) -> TokenKind {
        if self.eat('*') {
            self.scan_assign_suffix(TokenKind::AsteriskAsterisk, TokenKind::AsteriskAsteriskEquals)
        } else {
            self.scan_assign_suffix(TokenKind::Asterisk, TokenKind::AsteriskEquals)
        }
    }

    fn scan_doubled_or_assign(
        &mut self,
        ch: char,
        single: TokenKind,
        doubled: TokenKind,
        assign: TokenKind,
    ) -> TokenKind {
        if self.eat(ch) {
            doubled
        } else if self.eat('=') {
            assign
        } else {
            single
        }
    }

    fn scan_assign_suffix(&mut self, plain: TokenKind, assign: TokenKind) -> TokenKind {
        if self.eat('=') { assign } else { plain }
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.pos;
        let start_loc = self.location;
        while self.peek().is_some_and(is_identifier_part) {
            self.advance();
        }
        let text = &self.source[start..self.pos];
        let kind = TokenKind::from_keyword(text).unwrap_or(TokenKind::Identifier);
        Token::new(kind, text, start_loc)
    }

    // =========================================================================
    // Numeric literals
    // =========================================================================

    fn scan_number(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let start_loc = self.location;

        let radix = if self.peek() == Some('0') {
            match self.peek_at(1) {
                Some('b' | 'B') => Some((2, TokenKind::BinaryIntegerLiteral, "Binary")),
                Some('o' | 'O') => Some((8, TokenKind::OctalIntegerLiteral, "Octal")),
                Some('x' | 'X') => Some((16, TokenKind::HexIntegerLiteral, "Hexadecimal")),
                _ => None,
            }
        } else {
            None
        };

        let (kind, value) = match radix {
            Some((radix, kind, name)) => {
                self.advance();
                self.advance();
                let mut value = 0f64;
                let mut digits = 0;
                while let Some(d) = self.peek().and_then(|c| digit_value(c, radix)) {
                    value = value * f64::from(radix) + f64::from(d);
                    digits += 1;
                    self.advance();
                }
                if digits == 0 {
                    return Err(self.error(format!("{name} digit expected"), self.location));
                }
                (kind, value)
            }
            None => (TokenKind::DecimalLiteral, self.scan_decimal(start, start_loc)?),
        };

        if self.peek().is_some_and(|c| is_identifier_start(c) || is_decimal_digit(c)) {
            return Err(self.error(
                "An identifier or keyword cannot immediately follow a numeric literal",
                self.location,
            ));
        }

        Ok(Token::numeric_literal(kind, &self.source[start..self.pos], value, start_loc))
    }

    fn scan_decimal(&mut self, start: usize, start_loc: TextLocation) -> Result<f64, LexError> {
        self.skip_decimal_digits();
        if self.eat('.') {
            self.skip_decimal_digits();
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            self.advance();
            if matches!(self.peek(), Some('+' | '-')) {
                self.advance();
            }
            if !self.peek().is_some_and(is_decimal_digit) {
                return Err(self.error("Digit expected", self.location));
            }
            self.skip_decimal_digits();
        }

        let text = &self.source[start..self.pos];
        text.parse::<f64>()
            .map_err(|_| self.error(format!("Invalid numeric literal '{text}'"), start_loc))
    }

    fn skip_decimal_digits(&mut self) {
        while self.peek().is_some_and(is_decimal_digit) {
            self.advance();
        }
    }

    // =========================================================================
    // String literals
    // =========================================================================

    fn scan_string(&mut self, quote: char) -> Result<Token, LexError> {
        let start = self.pos;
        let start_loc = self.location;
        self.advance();

        let mut value = String::new();
        loop {
            let rest = &self.source.as_bytes()[self.pos..];
            let Some(run_len) = memchr3(quote as u8, b'\\', b'\n', rest) else {
                return Err(self.error("Unterminated string literal", start_loc));
            };
            if memchr(b'\r', &rest[..run_len]).is_some() {
                return Err(self.error("Unterminated string literal", start_loc));
            }

            value.push_str(&self.source[self.pos..self.pos + run_len]);
            self.advance_run(run_len);

            match self.peek() {
                Some('\\') => self.scan_escape_sequence(&mut value)?,
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                _ => return Err(self.error("Unterminated string literal", start_loc)),
            }
        }

        Ok(Token::string_literal(&self.source[start..self.pos], value, start_loc))
    }

    fn scan_escape_sequence(&mut self, value: &mut String) -> Result<(), LexError> {
        let escape_loc = self.location;
        self.advance();
        let Some(ch) = self.advance() else {
            return Err(self.error("Unterminated string literal", escape_loc));
        };

        match ch {
            'b' => value.push('\u{0008}'),
            'f' => value.push('\u{000C}'),
            'n' => value.push('\n'),
            'r' => value.push('\r'),
            't' => value.push('\t'),
            'v' => value.push('\u{000B}'),
            '0' if !self.peek().is_some_and(is_decimal_digit) => value.push('\0'),
            '0'..='9' => {
                return Err(self.error("Octal escape sequences are not allowed", escape_loc));
            }
            'x' => {
                let code = self.scan_exact_hex_digits(2, escape_loc, "Hexadecimal digit expected")?;
                value.push(self.code_point_to_char(code, escape_loc)?);
            }
            'u' => {
                let decoded = self.scan_unicode_escape(escape_loc)?;
                value.push(decoded);
            }
            // Line continuation
            '\r' => {
                self.eat('\n');
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => value.push(other),
        }
        Ok(())
    }

    /// Decode the part of a `\u` escape after the `u`.
    fn scan_unicode_escape(&mut self, escape_loc: TextLocation) -> Result<char, LexError> {
        if self.eat('{') {
            let mut code: u32 = 0;
            let mut digits = 0;
            while let Some(d) = self.peek().and_then(|c| digit_value(c, 16)) {
                code = code.saturating_mul(16).saturating_add(d);
                digits += 1;
                self.advance();
            }
            if digits == 0 {
                return Err(self.error("Hexadecimal digit expected", self.location));
            }
            if !self.eat('}') {
                return Err(self.error("Unterminated Unicode escape sequence", escape_loc));
            }
            if code > 0x10FFFF {
                return Err(self.error(
                    "An extended Unicode escape value must be between 0x0 and 0x10FFFF inclusive",
                    escape_loc,
                ));
            }
            return self.code_point_to_char(code, escape_loc);
        }

        let code = self.scan_exact_hex_digits(4, escape_loc, "Hexadecimal digit expected")?;
        if (0xD800..=0xDBFF).contains(&code) && self.peek() == Some('\\') && self.peek_at(1) == Some('u')
        {
            let low_loc = self.location;
            let snapshot = (self.pos, self.location);
            self.advance();
            self.advance();
            if let Ok(low) = self.scan_exact_hex_digits(4, low_loc, "Hexadecimal digit expected") {
                if (0xDC00..=0xDFFF).contains(&low) {
                    let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                    return self.code_point_to_char(combined, escape_loc);
                }
            }
            (self.pos, self.location) = snapshot;
        }
        self.code_point_to_char(code, escape_loc)
    }

    fn scan_exact_hex_digits(
        &mut self,
        count: usize,
        escape_loc: TextLocation,
        message: &str,
    ) -> Result<u32, LexError> {
        let mut code = 0;
        for _ in 0..count {
            let Some(d) = self.peek().and_then(|c| digit_value(c, 16)) else {
                return Err(self.error(message, escape_loc));
            };
            code = code * 16 + d;
            self.advance();
        }
        Ok(code)
    }

    fn code_point_to_char(&self, code: u32, escape_loc: TextLocation) -> Result<char, LexError> {
        char::from_u32(code).ok_or_else(|| {
            self.error(
                format!("Unicode escape \\u{{{code:X}}} is a lone surrogate and cannot be represented"),
                escape_loc,
            )
        })
    }
}

#[cfg(test)]
#[path = "../tests/lexer_tests.rs"]
mod tests;
