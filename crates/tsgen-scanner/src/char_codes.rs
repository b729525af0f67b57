//! Character classification helpers used by the lexer.

/// Check if a character is a line terminator.
pub fn is_line_break(ch: char) -> bool {
    ch == '\n' || ch == '\r' || ch == '\u{2028}' || ch == '\u{2029}'
}

/// Check if a character is whitespace (but not a line break).
pub fn is_whitespace_single_line(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t' | '\u{000B}' | '\u{000C}' | '\u{00A0}' | '\u{FEFF}'
    ) || (ch > '\u{007F}' && ch.is_whitespace() && !is_line_break(ch))
}

pub fn is_identifier_start(ch: char) -> bool {
    ch == '$' || ch == '_' || ch.is_ascii_alphabetic() || (!ch.is_ascii() && ch.is_alphabetic())
}

pub fn is_identifier_part(ch: char) -> bool {
    is_identifier_start(ch)
        || ch.is_ascii_digit()
        || (!ch.is_ascii() && ch.is_alphanumeric())
        || ch == '\u{200C}'
        || ch == '\u{200D}'
}

/// Check whether `text` is a syntactically valid identifier name.
pub fn is_identifier_text(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_part),
        _ => false,
    }
}

pub fn is_decimal_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Numeric value of a digit in the given radix, if it is one.
pub fn digit_value(ch: char, radix: u32) -> Option<u32> {
    ch.to_digit(radix)
}
