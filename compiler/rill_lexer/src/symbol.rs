//! Operator and separator scanning.
//!
//! Symbols are at most two characters. The first character fixes the set of
//! followers that may extend it; anything else ends the lexeme. Spellings
//! missing from the classification table come out as unknown tokens, which
//! keeps recovery local to a single character.

use crate::token_builder::make_token;
use rill_ir::{SourceCoordinate, Token};
use rill_lexer_core::CharCursor;

fn followers(first: char) -> &'static [char] {
    match first {
        '+' => &['+', '='],
        '-' => &['-', '=', '>'],
        '<' => &['-', '='],
        '*' | '/' | '%' | '>' | '!' | '=' => &['='],
        _ => &[],
    }
}

/// Scan the symbol starting at the cursor. The caller guarantees at least
/// one character remains.
pub(crate) fn scan_symbol(cursor: &mut CharCursor<'_>, begin: SourceCoordinate) -> Token {
    let mut lexeme = String::new();
    if let Some(first) = cursor.bump() {
        lexeme.push(first);
        if let Some(next) = cursor.peek() {
            if followers(first).contains(&next) {
                cursor.bump();
                lexeme.push(next);
            }
        }
    }
    make_token(lexeme, begin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rill_ir::{Column, Line, TokenKind};
    use rill_lexer_core::SourceBuffer;

    fn at(line: u32, column: u32) -> SourceCoordinate {
        SourceCoordinate::new(Line(line), Column(column))
    }

    fn scan(source: &str) -> (Token, Option<char>) {
        let buf = SourceBuffer::new(source);
        let mut cursor = buf.cursor();
        let token = scan_symbol(&mut cursor, at(1, 1));
        (token, cursor.peek())
    }

    #[test]
    fn single_character_symbols() {
        for (source, kind) in [
            ("+", TokenKind::Plus),
            (";", TokenKind::Semicolon),
            ("{", TokenKind::BraceOpen),
            ("=", TokenKind::EqualTo),
            ("<", TokenKind::Less),
        ] {
            let (token, _) = scan(source);
            assert_eq!(token.kind(), kind, "{source}");
        }
    }

    #[test]
    fn two_character_symbols() {
        for (source, kind) in [
            ("<-", TokenKind::Assign),
            ("->", TokenKind::Arrow),
            ("==", TokenKind::EqualTo),
            ("!=", TokenKind::NotEqualTo),
            ("++", TokenKind::Increment),
            ("--", TokenKind::Decrement),
            ("+=", TokenKind::PlusEq),
            ("%=", TokenKind::ModuloEq),
            ("<=", TokenKind::LessEqual),
            (">=", TokenKind::GreaterEqual),
        ] {
            let (token, next) = scan(source);
            assert_eq!(token.kind(), kind, "{source}");
            assert_eq!(token.spelling(), source);
            assert_eq!(token.range().end(), at(1, 3));
            assert_eq!(next, None);
        }
    }

    #[test]
    fn follower_outside_the_set_ends_the_lexeme() {
        let (token, next) = scan("-x");
        assert_eq!(token.kind(), TokenKind::Minus);
        assert_eq!(next, Some('x'));
    }

    #[test]
    fn greedy_pairing_wins() {
        // `<--` reads as `<-` then `-`.
        let (token, next) = scan("<--");
        assert_eq!(token.kind(), TokenKind::Assign);
        assert_eq!(next, Some('-'));
    }

    #[test]
    fn bang_without_equals_is_unknown() {
        let (token, next) = scan("!x");
        assert_eq!(token.kind(), TokenKind::UnknownToken);
        assert_eq!(token.spelling(), "!");
        assert_eq!(next, Some('x'));
    }

    #[test]
    fn unrecognized_punctuation_is_unknown() {
        let (token, _) = scan("?");
        assert_eq!(token.kind(), TokenKind::UnknownToken);
        assert_eq!(token.spelling(), "?");
    }
}
