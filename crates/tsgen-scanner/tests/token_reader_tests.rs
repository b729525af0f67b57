use super::*;
use crate::lex;

fn reader(source: &str) -> TokenReader {
    TokenReader::new(lex(source).expect("source should lex"))
}

#[test]
fn peek_does_not_consume() {
    let r = reader("a b");
    assert_eq!(r.peek().text(), "a");
    assert_eq!(r.peek().text(), "a");
    assert_eq!(r.peek_at(1).text(), "b");
    assert_eq!(r.peek_at(2).kind(), TokenKind::EndOfFile);
    assert_eq!(r.position(), 0);
}

#[test]
fn read_advances_and_stops_at_end() {
    let mut r = reader("x;");
    assert_eq!(r.read().text(), "x");
    assert_eq!(r.read().kind(), TokenKind::Semicolon);
    assert!(r.is_at_end());
    assert_eq!(r.read().kind(), TokenKind::EndOfFile);
    assert_eq!(r.read().kind(), TokenKind::EndOfFile);
    assert_eq!(r.position(), 2);
}

#[test]
fn eof_token_is_located_after_last_token() {
    let r = reader("abc");
    assert_eq!(r.peek_at(1).location(), TextLocation::new(1, 4));

    let empty = TokenReader::new(Vec::new());
    assert!(empty.is_at_end());
    assert_eq!(empty.peek().location(), TextLocation::START);
}

#[test]
fn kind_predicates() {
    let mut r = reader("( ) =>");
    assert!(r.is_next(TokenKind::OpenParen));
    assert!(r.is_next_any(&[TokenKind::OpenBracket, TokenKind::OpenParen]));
    assert!(r.is_next_sequence(&[
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::EqualsGreaterThan,
    ]));
    assert!(!r.is_next_sequence(&[TokenKind::OpenParen, TokenKind::Identifier]));

    assert!(r.read_if(TokenKind::CloseParen).is_none());
    assert!(r.read_if(TokenKind::OpenParen).is_some());
    assert!(r.is_next(TokenKind::CloseParen));
}

#[test]
fn save_and_restore_backtrack() {
    let mut r = reader("a b c d");
    r.skip();
    let saved = r.save_state();
    r.skip();
    r.skip();
    assert_eq!(r.peek().text(), "d");
    r.restore_state(saved);
    assert_eq!(r.peek().text(), "b");
}

#[test]
fn with_saved_state_always_rewinds() {
    let mut r = reader("a b c");
    let seen = r.with_saved_state(|r| {
        r.skip();
        r.skip();
        r.read().text().to_string()
    });
    assert_eq!(seen, "c");
    assert_eq!(r.position(), 0);
}

#[test]
fn preceding_line_break() {
    let mut r = reader("a\nb c");
    assert!(!r.has_preceding_line_break());
    r.skip();
    assert!(r.has_preceding_line_break());
    r.skip();
    assert!(!r.has_preceding_line_break());
    assert_eq!(r.previous().map(Token::text), Some("b"));
}
