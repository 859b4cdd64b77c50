//! The keyword/operator classification table.
//!
//! The table owns classification; scanners own extraction. Every key is the
//! literal spelling a scanner can produce for that lexeme. The map is built
//! once, on first use, and never mutated, so independent scans share it
//! without synchronization.
//!
//! Equality is spelled `=` or `==` (both map to [`TokenKind::EqualTo`]);
//! assignment is `<-`. A lone `!` is not a token of the language (`not` is
//! the negation operator), so it falls through to `UnknownToken`.

use crate::number::deduce_number_kind;
use rill_ir::TokenKind;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

static LEXEME_TABLE: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    FxHashMap::from_iter([
        // arithmetic
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("*", TokenKind::Times),
        ("/", TokenKind::Divide),
        ("%", TokenKind::Modulo),
        ("++", TokenKind::Increment),
        ("--", TokenKind::Decrement),
        // assignment
        ("<-", TokenKind::Assign),
        ("+=", TokenKind::PlusEq),
        ("-=", TokenKind::MinusEq),
        ("*=", TokenKind::TimesEq),
        ("/=", TokenKind::DivideEq),
        ("%=", TokenKind::ModuloEq),
        // separators
        (".", TokenKind::Dot),
        (",", TokenKind::Comma),
        (":", TokenKind::Colon),
        (";", TokenKind::Semicolon),
        ("{", TokenKind::BraceOpen),
        ("}", TokenKind::BraceClose),
        ("(", TokenKind::ParenOpen),
        (")", TokenKind::ParenClose),
        ("[", TokenKind::SquareOpen),
        ("]", TokenKind::SquareClose),
        ("->", TokenKind::Arrow),
        // comparison
        ("=", TokenKind::EqualTo),
        ("==", TokenKind::EqualTo),
        ("!=", TokenKind::NotEqualTo),
        ("<", TokenKind::Less),
        ("<=", TokenKind::LessEqual),
        (">=", TokenKind::GreaterEqual),
        (">", TokenKind::Greater),
        // logical operators
        ("and", TokenKind::And),
        ("or", TokenKind::Or),
        ("not", TokenKind::Not),
        // boolean literals
        ("false", TokenKind::BooleanLiteral),
        ("true", TokenKind::BooleanLiteral),
        // type specifiers
        ("bool", TokenKind::Bool),
        ("char8", TokenKind::Char8),
        ("float16", TokenKind::Float16),
        ("float32", TokenKind::Float32),
        ("float64", TokenKind::Float64),
        ("int8", TokenKind::Int8),
        ("int16", TokenKind::Int16),
        ("int32", TokenKind::Int32),
        ("int64", TokenKind::Int64),
        ("void", TokenKind::Void),
        // keywords
        ("assert", TokenKind::Assert),
        ("break", TokenKind::Break),
        ("continue", TokenKind::Continue),
        ("for", TokenKind::For),
        ("fun", TokenKind::Fun),
        ("if", TokenKind::If),
        ("import", TokenKind::Import),
        ("let", TokenKind::Let),
        ("module", TokenKind::Module),
        ("mutable", TokenKind::Mutable),
        ("readable", TokenKind::Readable),
        ("ref", TokenKind::Ref),
        ("return", TokenKind::Return),
        ("while", TokenKind::While),
        ("writable", TokenKind::Writable),
    ])
});

/// Classify a complete lexeme.
///
/// Table hit wins; otherwise letter/underscore starts are identifiers,
/// digit or `.` starts go through numeric deduction, and anything left is
/// an unknown token.
pub(crate) fn classify(lexeme: &str) -> TokenKind {
    if let Some(&kind) = LEXEME_TABLE.get(lexeme) {
        return kind;
    }
    match lexeme.chars().next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => TokenKind::Identifier,
        Some(c) if c.is_ascii_digit() || c == '.' => deduce_number_kind(lexeme),
        _ => TokenKind::UnknownToken,
    }
}
