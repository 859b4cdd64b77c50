//! Token construction from a lexeme and its starting coordinate.

use crate::keywords::classify;
use rill_ir::{Column, Line, SourceCoordinate, Token, TokenKind};

/// Build a token, classifying the lexeme through the table.
pub(crate) fn make_token(lexeme: String, begin: SourceCoordinate) -> Token {
    let kind = classify(&lexeme);
    make_token_with_kind(lexeme, begin, kind)
}

/// Build a token with a pre-determined kind.
///
/// The end coordinate is the begin shifted by a zero-line delta whose column
/// is the spelling's character count: lexemes never span lines, and for
/// string literals the count is taken over the escape-transformed spelling.
pub(crate) fn make_token_with_kind(
    lexeme: String,
    begin: SourceCoordinate,
    kind: TokenKind,
) -> Token {
    let length = u32::try_from(lexeme.chars().count()).unwrap_or(u32::MAX);
    let end = SourceCoordinate::shift(begin, SourceCoordinate::new(Line(0), Column(length)));
    Token::new(kind, lexeme, begin, end)
}
