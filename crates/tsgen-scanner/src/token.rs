//! Token definitions for the lexer.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;
use tsgen_common::TextLocation;

/// The different kinds of tokens.
///
/// The declaration order is significant: every kind between
/// [`TokenKind::FIRST_RESERVED_WORD`] and [`TokenKind::LAST_RESERVED_WORD`] is a
/// reserved word, and every kind after the last reserved word is a contextual
/// keyword that the parser may reinterpret as an identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u16)]
pub enum TokenKind {
    EndOfFile,
    Identifier,

    // Literals
    DecimalLiteral,
    BinaryIntegerLiteral,
    OctalIntegerLiteral,
    HexIntegerLiteral,
    StringLiteral,

    // Punctuation
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Dot,
    DotDotDot,
    Semicolon,
    Comma,
    LessThan,
    /// Always a single `>`; the parser recombines `>>`, `>>>` and `>=`.
    GreaterThan,
    LessThanEquals,
    EqualsEquals,
    ExclamationEquals,
    EqualsEqualsEquals,
    ExclamationEqualsEquals,
    Plus,
    Minus,
    Asterisk,
    AsteriskAsterisk,
    Slash,
    Percent,
    PlusPlus,
    MinusMinus,
    LessThanLessThan,
    Ampersand,
    Bar,
    Caret,
    Exclamation,
    Tilde,
    AmpersandAmpersand,
    BarBar,
    Question,
    Colon,
    Equals,
    PlusEquals,
    MinusEquals,
    AsteriskEquals,
    AsteriskAsteriskEquals,
    SlashEquals,
    PercentEquals,
    LessThanLessThanEquals,
    AmpersandEquals,
    BarEquals,
    CaretEquals,
    EqualsGreaterThan,
    Backtick,

    // Reserved words
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Enum,
    Export,
    Extends,
    False,
    Finally,
    For,
    Function,
    If,
    Import,
    In,
    Instanceof,
    New,
    Null,
    Return,
    Super,
    Switch,
    This,
    Throw,
    True,
    Try,
    Typeof,
    Var,
    Void,
    While,
    With,

    // Contextual keywords (strict-mode reserved words and TypeScript keywords)
    Abstract,
    Any,
    As,
    Async,
    Await,
    Boolean,
    Constructor,
    Declare,
    From,
    Get,
    Implements,
    Interface,
    Is,
    Keyof,
    Let,
    Module,
    Namespace,
    Never,
    Number,
    Object,
    Of,
    Package,
    Private,
    Protected,
    Public,
    Readonly,
    Require,
    Set,
    Static,
    String,
    Symbol,
    Type,
    Undefined,
    Unique,
    Unknown,
    Yield,
}

const KEYWORDS: &[TokenKind] = &[
    TokenKind::Break,
    TokenKind::Case,
    TokenKind::Catch,
    TokenKind::Class,
    TokenKind::Const,
    TokenKind::Continue,
    TokenKind::Debugger,
    TokenKind::Default,
    TokenKind::Delete,
    TokenKind::Do,
    TokenKind::Else,
    TokenKind::Enum,
    TokenKind::Export,
    TokenKind::Extends,
    TokenKind::False,
    TokenKind::Finally,
    TokenKind::For,
    TokenKind::Function,
    TokenKind::If,
    TokenKind::Import,
    TokenKind::In,
    TokenKind::Instanceof,
    TokenKind::New,
    TokenKind::Null,
    TokenKind::Return,
    TokenKind::Super,
    TokenKind::Switch,
    TokenKind::This,
    TokenKind::Throw,
    TokenKind::True,
    TokenKind::Try,
    TokenKind::Typeof,
    TokenKind::Var,
    TokenKind::Void,
    TokenKind::While,
    TokenKind::With,
    TokenKind::Abstract,
    TokenKind::Any,
    TokenKind::As,
    TokenKind::Async,
    TokenKind::Await,
    TokenKind::Boolean,
    TokenKind::Constructor,
    TokenKind::Declare,
    TokenKind::From,
    TokenKind::Get,
    TokenKind::Implements,
    TokenKind::Interface,
    TokenKind::Is,
    TokenKind::Keyof,
    TokenKind::Let,
    TokenKind::Module,
    TokenKind::Namespace,
    TokenKind::Never,
    TokenKind::Number,
    TokenKind::Object,
    TokenKind::Of,
    TokenKind::Package,
    TokenKind::Private,
    TokenKind::Protected,
    TokenKind::Public,
    TokenKind::Readonly,
    TokenKind::Require,
    TokenKind::Set,
    TokenKind::Static,
    TokenKind::String,
    TokenKind::Symbol,
    TokenKind::Type,
    TokenKind::Undefined,
    TokenKind::Unique,
    TokenKind::Unknown,
    TokenKind::Yield,
];

static KEYWORD_MAP: Lazy<FxHashMap<&'static str, TokenKind>> = Lazy::new(|| {
    KEYWORDS
        .iter()
        .filter_map(|&kind| kind.fixed_text().map(|text| (text, kind)))
        .collect()
});

impl TokenKind {
    pub const FIRST_RESERVED_WORD: TokenKind = TokenKind::Break;
    pub const LAST_RESERVED_WORD: TokenKind = TokenKind::With;

    /// Look up the keyword spelled exactly `text`.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        KEYWORD_MAP.get(text).copied()
    }

    pub fn is_keyword(self) -> bool {
        self >= Self::FIRST_RESERVED_WORD
    }

    pub fn is_reserved_word(self) -> bool {
        self >= Self::FIRST_RESERVED_WORD && self <= Self::LAST_RESERVED_WORD
    }

    /// Keywords past the last reserved word can be used as identifiers.
    pub fn is_contextual_keyword(self) -> bool {
        self > Self::LAST_RESERVED_WORD
    }

    /// Identifiers and contextual keywords.
    pub fn is_identifier_like(self) -> bool {
        self == TokenKind::Identifier || self.is_contextual_keyword()
    }

    /// Anything usable as an `IdentifierName` (property names after `.`,
    /// object literal keys): identifiers and every keyword.
    pub fn is_identifier_name(self) -> bool {
        self == TokenKind::Identifier || self.is_keyword()
    }

    pub fn is_numeric_literal(self) -> bool {
        matches!(
            self,
            TokenKind::DecimalLiteral
                | TokenKind::BinaryIntegerLiteral
                | TokenKind::OctalIntegerLiteral
                | TokenKind::HexIntegerLiteral
        )
    }

    pub fn is_literal(self) -> bool {
        self.is_numeric_literal() || self == TokenKind::StringLiteral
    }

    /// Accessibility and `readonly`, which may prefix a constructor
    /// parameter.
    pub fn is_parameter_modifier(self) -> bool {
        matches!(
            self,
            TokenKind::Public | TokenKind::Private | TokenKind::Protected | TokenKind::Readonly
        )
    }

    /// The exact source text of punctuators and keywords.
    pub const fn fixed_text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::EndOfFile
            | TokenKind::Identifier
            | TokenKind::DecimalLiteral
            | TokenKind::BinaryIntegerLiteral
            | TokenKind::OctalIntegerLiteral
            | TokenKind::HexIntegerLiteral
            | TokenKind::StringLiteral => return None,
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::Dot => ".",
            TokenKind::DotDotDot => "...",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::LessThanEquals => "<=",
            TokenKind::EqualsEquals => "==",
            TokenKind::ExclamationEquals => "!=",
            TokenKind::EqualsEqualsEquals => "===",
            TokenKind::ExclamationEqualsEquals => "!==",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::AsteriskAsterisk => "**",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::LessThanLessThan => "<<",
            TokenKind::Ampersand => "&",
            TokenKind::Bar => "|",
            TokenKind::Caret => "^",
            TokenKind::Exclamation => "!",
            TokenKind::Tilde => "~",
            TokenKind::AmpersandAmpersand => "&&",
            TokenKind::BarBar => "||",
            TokenKind::Question => "?",
            TokenKind::Colon => ":",
            TokenKind::Equals => "=",
            TokenKind::PlusEquals => "+=",
            TokenKind::MinusEquals => "-=",
            TokenKind::AsteriskEquals => "*=",
            TokenKind::AsteriskAsteriskEquals => "**=",
            TokenKind::SlashEquals => "/=",
            TokenKind::PercentEquals => "%=",
            TokenKind::LessThanLessThanEquals => "<<=",
            TokenKind::AmpersandEquals => "&=",
            TokenKind::BarEquals => "|=",
            TokenKind::CaretEquals => "^=",
            TokenKind::EqualsGreaterThan => "=>",
            TokenKind::Backtick => "`",
            TokenKind::Break => "break",
            TokenKind::Case => "case",
            TokenKind::Catch => "catch",
            TokenKind::Class => "class",
            TokenKind::Const => "const",
            TokenKind::Continue => "continue",
            TokenKind::Debugger => "debugger",
            TokenKind::Default => "default",
            TokenKind::Delete => "delete",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::Enum => "enum",
            TokenKind::Export => "export",
            TokenKind::Extends => "extends",
            TokenKind::False => "false",
            TokenKind::Finally => "finally",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::If => "if",
            TokenKind::Import => "import",
            TokenKind::In => "in",
            TokenKind::Instanceof => "instanceof",
            TokenKind::New => "new",
            TokenKind::Null => "null",
            TokenKind::Return => "return",
            TokenKind::Super => "super",
            TokenKind::Switch => "switch",
            TokenKind::This => "this",
            TokenKind::Throw => "throw",
            TokenKind::True => "true",
            TokenKind::Try => "try",
            TokenKind::Typeof => "typeof",
            TokenKind::Var => "var",
            TokenKind::Void => "void",
            TokenKind::While => "while",
            TokenKind::With => "with",
            TokenKind::Abstract => "abstract",
            TokenKind::Any => "any",
            TokenKind::As => "as",
            TokenKind::Async => "async",
            TokenKind::Await => "await",
            TokenKind::Boolean => "boolean",
            TokenKind::Constructor => "constructor",
            TokenKind::Declare => "declare",
            TokenKind::From => "from",
            TokenKind::Get => "get",
            TokenKind::Implements => "implements",
            TokenKind::Interface => "interface",
            TokenKind::Is => "is",
            TokenKind::Keyof => "keyof",
            TokenKind::Let => "let",
            TokenKind::Module => "module",
            TokenKind::Namespace => "namespace",
            TokenKind::Never => "never",
            TokenKind::Number => "number",
            TokenKind::Object => "object",
            TokenKind::Of => "of",
            TokenKind::Package => "package",
            TokenKind::Private => "private",
            TokenKind::Protected => "protected",
            TokenKind::Public => "public",
            TokenKind::Readonly => "readonly",
            TokenKind::Require => "require",
            TokenKind::Set => "set",
            TokenKind::Static => "static",
            TokenKind::String => "string",
            TokenKind::Symbol => "symbol",
            TokenKind::Type => "type",
            TokenKind::Undefined => "undefined",
            TokenKind::Unique => "unique",
            TokenKind::Unknown => "unknown",
            TokenKind::Yield => "yield",
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fixed_text() {
            Some(text) => write!(f, "'{text}'"),
            None => f.write_str(match self {
                TokenKind::EndOfFile => "end of input",
                TokenKind::Identifier => "identifier",
                TokenKind::StringLiteral => "string literal",
                _ => "numeric literal",
            }),
        }
    }
}

/// The decoded value of a literal token.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TokenValue {
    String(String),
    Number(f64),
}

/// A token produced by the lexer.
///
/// Tokens are immutable once produced. The kind fully determines the value:
/// string literals carry a [`TokenValue::String`], numeric literals a
/// [`TokenValue::Number`], and every other kind carries no value. Only the
/// lexer creates tokens, so the pairing cannot be broken from outside.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
    value: Option<TokenValue>,
    location: TextLocation,
}

impl Token {
    /// Create a token without a literal value (identifiers, keywords, punctuators).
    pub(crate) fn new(kind: TokenKind, text: impl Into<String>, location: TextLocation) -> Self {
        debug_assert!(!kind.is_literal(), "literal tokens must carry a value");
        Token {
            kind,
            text: text.into(),
            value: None,
            location,
        }
    }

    pub(crate) fn string_literal(text: impl Into<String>, value: String, location: TextLocation) -> Self {
        Token {
            kind: TokenKind::StringLiteral,
            text: text.into(),
            value: Some(TokenValue::String(value)),
            location,
        }
    }

    pub(crate) fn numeric_literal(
        kind: TokenKind,
        text: impl Into<String>,
        value: f64,
        location: TextLocation,
    ) -> Self {
        debug_assert!(kind.is_numeric_literal());
        Token {
            kind,
            text: text.into(),
            value: Some(TokenValue::Number(value)),
            location,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The raw source text of the token.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> Option<&TokenValue> {
        self.value.as_ref()
    }

    pub fn location(&self) -> TextLocation {
        self.location
    }

    /// The decoded value of a string literal token.
    pub fn string_value(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::String(s)) => Some(s),
            _ => None,
        }
    }

    /// The parsed value of a numeric literal token.
    pub fn number_value(&self) -> Option<f64> {
        match self.value {
            Some(TokenValue::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// The location just past the last character of the token.
    pub fn end_location(&self) -> TextLocation {
        let mut loc = self.location;
        let mut chars = self.text.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch == '\r' && chars.peek() == Some(&'\n') {
                continue;
            }
            loc = if crate::char_codes::is_line_break(ch) {
                loc.next_line()
            } else {
                loc.next_column()
            };
        }
        loc
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::EndOfFile {
            f.write_str("end of input")
        } else {
            write!(f, "'{}'", self.text)
        }
    }
}

#[cfg(test)]
#[path = "../tests/token_tests.rs"]
mod tests;
