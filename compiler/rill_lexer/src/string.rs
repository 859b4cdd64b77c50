//! String literal scanning.
//!
//! Extraction tracks a single escaped/unescaped state: a character consumed
//! in the escaped state never terminates the literal, so `\"` continues it
//! while `\\"` ends it. A well-terminated literal has its escape sequences
//! transformed in the spelling (so `\n` becomes a real line feed); error
//! spellings keep the raw source text.

use crate::delta::is_line_terminator;
use crate::token_builder::make_token_with_kind;
use rill_ir::{SourceCoordinate, Token, TokenKind};
use rill_lexer_core::CharCursor;

/// The escape characters the language accepts after a backslash.
const LEGAL_ESCAPES: &str = "bfnrt\\'\"";

/// Scan the string literal starting at the cursor. The caller guarantees the
/// first character is `"`.
pub(crate) fn scan_string(cursor: &mut CharCursor<'_>, begin: SourceCoordinate) -> Token {
    let (body, terminated) = extract(cursor);
    if !terminated {
        return make_token_with_kind(body, begin, TokenKind::UnterminatedStringLiteral);
    }
    if has_illegal_escape(&body) {
        return make_token_with_kind(body, begin, TokenKind::InvalidEscapeSequence);
    }
    make_token_with_kind(generate_escapes(&body), begin, TokenKind::StringLiteral)
}

/// Consume up to and including the closing quote. Returns the raw spelling
/// and whether the literal actually terminated. An unescaped line terminator
/// or exhaustion cuts the literal short.
fn extract(cursor: &mut CharCursor<'_>) -> (String, bool) {
    let mut body = String::new();
    if let Some(quote) = cursor.bump() {
        body.push(quote);
    }
    let mut escaped = false;
    loop {
        match cursor.peek() {
            None => return (body, false),
            Some(c) if !escaped && is_line_terminator(c) => return (body, false),
            Some(c) => {
                cursor.bump();
                body.push(c);
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == '"' {
                    return (body, true);
                }
            }
        }
    }
}

fn has_illegal_escape(body: &str) -> bool {
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(follower) if LEGAL_ESCAPES.contains(follower) => {}
                Some(_) => return true,
                None => {}
            }
        }
    }
    false
}

/// Rewrite each escape sequence as the character it denotes. The surrounding
/// quotes stay, so the transformed spelling is two characters longer than
/// the denoted text.
fn generate_escapes(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push(c),
        }
    }
    out
}
