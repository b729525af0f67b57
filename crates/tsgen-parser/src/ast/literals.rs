use super::{ConstructionError, Expression};
use std::fmt::{self, Write as _};
use tsgen_common::limits::MAX_SAFE_INTEGER;
use tsgen_scanner::char_codes::is_line_break;

// =============================================================================
// Numeric literals
// =============================================================================

/// The source form a numeric literal is written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericLiteralKind {
    Decimal,
    BinaryInteger,
    OctalInteger,
    HexInteger,
}

impl fmt::Display for NumericLiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NumericLiteralKind::Decimal => "decimal",
            NumericLiteralKind::BinaryInteger => "binary integer",
            NumericLiteralKind::OctalInteger => "octal integer",
            NumericLiteralKind::HexInteger => "hexadecimal integer",
        })
    }
}

/// A non-negative numeric literal. Negative numbers are a unary minus applied
/// to a literal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericLiteral {
    kind: NumericLiteralKind,
    value: f64,
}

impl NumericLiteral {
    /// Binary, octal and hex literals must hold integers no larger than
    /// `2^53 - 1`; every kind rejects negative, NaN and infinite values.
    pub fn new(kind: NumericLiteralKind, value: f64) -> Result<Self, ConstructionError> {
        if !value.is_finite() || value.is_sign_negative() {
            return Err(ConstructionError::InvalidNumericValue(value));
        }
        if kind != NumericLiteralKind::Decimal {
            if value.fract() != 0.0 {
                return Err(ConstructionError::NonIntegerLiteral { kind, value });
            }
            if value > MAX_SAFE_INTEGER {
                return Err(ConstructionError::IntegerOutOfRange { kind, value });
            }
        }
        Ok(NumericLiteral { kind, value })
    }

    pub fn decimal(value: f64) -> Result<Self, ConstructionError> {
        Self::new(NumericLiteralKind::Decimal, value)
    }

    pub fn kind(&self) -> NumericLiteralKind {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whether the decimal rendering has no `.` or exponent, so that a
    /// following `.` would be read as a decimal point.
    pub fn is_integer_decimal(&self) -> bool {
        self.kind == NumericLiteralKind::Decimal && !self.to_string().contains(['.', 'e'])
    }
}

impl fmt::Display for NumericLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Non-decimal values are integers within the safe range.
        let integer = self.value as u64;
        match self.kind {
            NumericLiteralKind::Decimal => write!(f, "{}", self.value),
            NumericLiteralKind::BinaryInteger => write!(f, "0b{integer:b}"),
            NumericLiteralKind::OctalInteger => write!(f, "0o{integer:o}"),
            NumericLiteralKind::HexInteger => write!(f, "0x{integer:x}"),
        }
    }
}

// =============================================================================
// String literals
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QuoteKind {
    Single,
    #[default]
    Double,
}

impl QuoteKind {
    pub fn as_char(self) -> char {
        match self {
            QuoteKind::Single => '\'',
            QuoteKind::Double => '"',
        }
    }
}

/// A string literal. The value is the decoded text; escaping happens when the
/// literal is rendered.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StringLiteral {
    pub value: String,
    pub quote: QuoteKind,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        StringLiteral {
            value: value.into(),
            quote: QuoteKind::default(),
        }
    }

    pub fn with_quote(value: impl Into<String>, quote: QuoteKind) -> Self {
        StringLiteral {
            value: value.into(),
            quote,
        }
    }
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quote = self.quote.as_char();
        write!(f, "{quote}{}{quote}", escape_string(&self.value, self.quote))
    }
}

/// Escape `value` for use between `quote` characters.
pub fn escape_string(value: &str, quote: QuoteKind) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000B}' => out.push_str("\\v"),
            '\u{000C}' => out.push_str("\\f"),
            '\0' => {
                if chars.peek().is_some_and(|c| c.is_ascii_digit()) {
                    out.push_str("\\x00");
                } else {
                    out.push_str("\\0");
                }
            }
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c == quote.as_char() => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    let _ = write!(out, "\\x{code:02X}");
                } else {
                    let _ = write!(out, "\\u{code:04X}");
                }
            }
            c => out.push(c),
        }
    }
    out
}

// =============================================================================
// Template literals
// =============================================================================

/// `` `head${expression}literal...` ``. Text parts hold cooked text.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateLiteral {
    pub head: String,
    pub spans: Vec<TemplateSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TemplateSpan {
    pub expression: Expression,
    pub literal: String,
}

impl TemplateLiteral {
    pub fn no_substitution(text: impl Into<String>) -> Self {
        TemplateLiteral {
            head: text.into(),
            spans: Vec::new(),
        }
    }

    /// Escape a text part so it can be written between backticks.
    pub fn escape_text(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\\' => out.push_str("\\\\"),
                '`' => out.push_str("\\`"),
                '\r' => out.push_str("\\r"),
                '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
                c => out.push(c),
            }
        }
        out
    }
}

// =============================================================================
// Regular expression literals
// =============================================================================

const REGEX_FLAGS: &str = "dgimsuvy";

/// `/pattern/flags`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegularExpressionLiteral {
    pattern: String,
    flags: String,
}

impl RegularExpressionLiteral {
    pub fn new(
        pattern: impl Into<String>,
        flags: impl Into<String>,
    ) -> Result<Self, ConstructionError> {
        let pattern = pattern.into();
        let flags = flags.into();

        let trailing_backslashes = pattern.chars().rev().take_while(|&c| c == '\\').count();
        if pattern.is_empty()
            || pattern.starts_with(['*', '/'])
            || pattern.chars().any(is_line_break)
            || trailing_backslashes % 2 == 1
        {
            return Err(ConstructionError::InvalidText {
                what: "regular expression pattern",
                text: pattern,
            });
        }

        let mut seen = String::new();
        for flag in flags.chars() {
            if !REGEX_FLAGS.contains(flag) || seen.contains(flag) {
                return Err(ConstructionError::InvalidText {
                    what: "regular expression flags",
                    text: flags,
                });
            }
            seen.push(flag);
        }

        Ok(RegularExpressionLiteral { pattern, flags })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }
}

impl fmt::Display for RegularExpressionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.pattern, self.flags)
    }
}

#[cfg(test)]
#[path = "../../tests/literal_tests.rs"]
mod tests;
