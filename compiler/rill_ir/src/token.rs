//! Tokens and token kinds.
//!
//! A token is an immutable `{kind, spelling, range}` triple produced by the
//! lexer and consumed by the (future) parser. Error kinds are ordinary token
//! kinds: a malformed lexeme still yields a token so scanning can continue.

use crate::coordinate::{SourceCoordinate, SourceRange};
use std::fmt;

/// Classification of a lexeme.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // arithmetic
    Plus,
    Minus,
    Times,
    Divide,
    Modulo,
    Increment,
    Decrement,
    // assignment
    Assign,
    PlusEq,
    MinusEq,
    TimesEq,
    DivideEq,
    ModuloEq,
    // separators
    Dot,
    Comma,
    Colon,
    Semicolon,
    BraceOpen,
    BraceClose,
    ParenOpen,
    ParenClose,
    SquareOpen,
    SquareClose,
    Arrow,
    // comparison
    EqualTo,
    NotEqualTo,
    Less,
    LessEqual,
    GreaterEqual,
    Greater,
    // logical operators
    And,
    Or,
    Not,
    // literals
    IntegralLiteral,
    BooleanLiteral,
    FloatingLiteral,
    StringLiteral,
    // type specifiers
    Bool,
    Char8,
    Float16,
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    Void,
    // keywords
    Assert,
    Break,
    Continue,
    For,
    Fun,
    If,
    Import,
    Let,
    Module,
    Mutable,
    Readable,
    Ref,
    Return,
    While,
    Writable,
    // other
    Identifier,
    Eof,
    // errors
    UnknownToken,
    UnterminatedStringLiteral,
    UnterminatedComment,
    InvalidEscapeSequence,
    TooManyRadixPoints,
    ExponentLackingDigit,
}

impl TokenKind {
    /// Whether this kind represents a lexical malformation.
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(
            self,
            TokenKind::UnknownToken
                | TokenKind::UnterminatedStringLiteral
                | TokenKind::UnterminatedComment
                | TokenKind::InvalidEscapeSequence
                | TokenKind::TooManyRadixPoints
                | TokenKind::ExponentLackingDigit
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Times => "*",
            TokenKind::Divide => "/",
            TokenKind::Modulo => "%",
            TokenKind::Increment => "++",
            TokenKind::Decrement => "--",
            TokenKind::Assign => "<-",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::TimesEq => "*=",
            TokenKind::DivideEq => "/=",
            TokenKind::ModuloEq => "%=",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::BraceOpen => "{",
            TokenKind::BraceClose => "}",
            TokenKind::ParenOpen => "(",
            TokenKind::ParenClose => ")",
            TokenKind::SquareOpen => "[",
            TokenKind::SquareClose => "]",
            TokenKind::Arrow => "->",
            TokenKind::EqualTo => "==",
            TokenKind::NotEqualTo => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Greater => ">",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::IntegralLiteral => "integral literal",
            TokenKind::BooleanLiteral => "boolean literal",
            TokenKind::FloatingLiteral => "floating-point literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::Bool => "bool",
            TokenKind::Char8 => "char8",
            TokenKind::Float16 => "float16",
            TokenKind::Float32 => "float32",
            TokenKind::Float64 => "float64",
            TokenKind::Int8 => "int8",
            TokenKind::Int16 => "int16",
            TokenKind::Int32 => "int32",
            TokenKind::Int64 => "int64",
            TokenKind::Void => "void",
            TokenKind::Assert => "assert",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::For => "for",
            TokenKind::Fun => "fun",
            TokenKind::If => "if",
            TokenKind::Import => "import",
            TokenKind::Let => "let",
            TokenKind::Module => "module",
            TokenKind::Mutable => "mutable",
            TokenKind::Readable => "readable",
            TokenKind::Ref => "ref",
            TokenKind::Return => "return",
            TokenKind::While => "while",
            TokenKind::Writable => "writable",
            TokenKind::Identifier => "identifier",
            TokenKind::Eof => "(end-of-file)",
            TokenKind::UnknownToken => "(unknown-token error)",
            TokenKind::UnterminatedStringLiteral => "(unterminated-string-literal error)",
            TokenKind::UnterminatedComment => "(unterminated-comment error)",
            TokenKind::InvalidEscapeSequence => "(invalid-escape-sequence error)",
            TokenKind::TooManyRadixPoints => "(too-many-radix-points error)",
            TokenKind::ExponentLackingDigit => "(exponent-lacking-digit error)",
        };
        f.write_str(text)
    }
}

/// One classified lexeme with its source extent.
///
/// For string literals the spelling is the escape-transformed text, still
/// including the surrounding quotes; for every other kind it is the exact
/// source text consumed.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    kind: TokenKind,
    spelling: String,
    range: SourceRange,
}

impl Token {
    /// The reserved end-of-stream marker; no scanner can produce it as a
    /// lexeme of any other kind.
    pub const EOF_SPELLING: &'static str = "$";

    pub fn new(
        kind: TokenKind,
        spelling: impl Into<String>,
        begin: SourceCoordinate,
        end: SourceCoordinate,
    ) -> Self {
        Self {
            kind,
            spelling: spelling.into(),
            range: SourceRange::new(begin, end),
        }
    }

    /// Synthesize the end-of-stream token at a single coordinate.
    pub fn eof(at: SourceCoordinate) -> Self {
        Self {
            kind: TokenKind::Eof,
            spelling: Self::EOF_SPELLING.to_owned(),
            range: SourceRange::point(at),
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    #[inline]
    pub fn range(&self) -> SourceRange {
        self.range
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, \"{}\", {}..{}]",
            self.kind,
            self.spelling,
            self.range.begin(),
            self.range.end()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::{Column, Line};
    use pretty_assertions::assert_eq;

    fn at(line: u32, column: u32) -> SourceCoordinate {
        SourceCoordinate::new(Line(line), Column(column))
    }

    #[test]
    fn equality_is_structural() {
        let a = Token::new(TokenKind::Identifier, "abacus", at(1, 1), at(1, 7));
        let b = Token::new(TokenKind::Identifier, "abacus", at(1, 1), at(1, 7));
        assert_eq!(a, b);

        let c = Token::new(TokenKind::Identifier, "abacus", at(1, 2), at(1, 8));
        assert_ne!(a, c);
    }

    #[test]
    fn eof_collapses_to_a_point() {
        let eof = Token::eof(at(5, 1));
        assert_eq!(eof.kind(), TokenKind::Eof);
        assert_eq!(eof.spelling(), "$");
        assert_eq!(eof.range().begin(), eof.range().end());
    }

    #[test]
    fn error_kinds_are_errors() {
        assert!(TokenKind::TooManyRadixPoints.is_error());
        assert!(TokenKind::UnknownToken.is_error());
        assert!(!TokenKind::FloatingLiteral.is_error());
        assert!(!TokenKind::Eof.is_error());
    }

    #[test]
    fn display_renders_kind_spelling_and_extent() {
        let token = Token::new(TokenKind::Fun, "fun", at(1, 1), at(1, 4));
        assert_eq!(token.to_string(), "[fun, \"fun\", {1:1}..{1:4}]");
    }
}
