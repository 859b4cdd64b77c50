//! Whitespace and comment skipping.
//!
//! Consumes every insignificant character in front of the next lexeme and
//! reports how far the cursor moved. A `/` is consumed speculatively: when
//! the follower is neither `/` nor `*` the slash is pushed back and the
//! dispatcher classifies it as an operator. Multi-line comments do not nest.

use crate::delta::{cursor_delta, is_line_terminator};
use rill_ir::{SourceCoordinate, SourceRange};
use rill_lexer_core::CharCursor;

/// Outcome of skipping whitespace and comments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum WhitespaceResult {
    /// The cursor after the last insignificant character.
    Advanced(SourceCoordinate),
    /// The source ran out inside a multi-line comment. The range spans the
    /// opening `/*` to the point of exhaustion; its end doubles as the
    /// best-effort cursor for end-of-stream synthesis.
    UnterminatedComment(SourceRange),
}

/// Outcome of the speculative `/` consumption.
#[derive(Clone, Debug, PartialEq, Eq)]
enum CommentAttempt {
    /// The `/` was an operator; it has been pushed back.
    NotAComment,
    /// A complete comment, with the delta it moved the cursor by.
    Comment(SourceCoordinate),
    /// A multi-line comment cut off by exhaustion; delta up to that point.
    Unterminated(SourceCoordinate),
}

/// The five whitespace characters, each classified individually.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\u{c}')
}

/// Skip all leading whitespace and comments, stopping exactly before the
/// first significant character (or at exhaustion).
pub(crate) fn skip_whitespace_like(
    cursor: &mut CharCursor<'_>,
    mut at: SourceCoordinate,
) -> WhitespaceResult {
    loop {
        match cursor.peek() {
            Some(c) if is_space(c) => {
                let run = cursor.eat_while(is_space);
                at = SourceCoordinate::shift(at, cursor_delta(&run));
            }
            Some('/') => match skip_comment(cursor) {
                CommentAttempt::NotAComment => break,
                CommentAttempt::Comment(delta) => {
                    at = SourceCoordinate::shift(at, delta);
                }
                CommentAttempt::Unterminated(delta) => {
                    let end = SourceCoordinate::shift(at, delta);
                    return WhitespaceResult::UnterminatedComment(SourceRange::new(at, end));
                }
            },
            _ => break,
        }
    }
    WhitespaceResult::Advanced(at)
}

/// Consume one comment, or push the `/` back if it wasn't one.
fn skip_comment(cursor: &mut CharCursor<'_>) -> CommentAttempt {
    cursor.bump(); // the speculative '/'
    match cursor.peek() {
        Some('/') => {
            cursor.bump();
            // Runs to, but excludes, the next line terminator.
            let body = cursor.eat_while(|c| !is_line_terminator(c));
            CommentAttempt::Comment(cursor_delta(&format!("//{body}")))
        }
        Some('*') => {
            cursor.bump();
            skip_multiline_comment(cursor)
        }
        _ => {
            cursor.retreat();
            CommentAttempt::NotAComment
        }
    }
}

/// Consume a multi-line comment body up to `*/` or exhaustion. The opening
/// `/*` has already been consumed.
fn skip_multiline_comment(cursor: &mut CharCursor<'_>) -> CommentAttempt {
    let mut text = String::from("/*");
    loop {
        match cursor.bump() {
            None => return CommentAttempt::Unterminated(cursor_delta(&text)),
            Some('*') if cursor.peek() == Some('/') => {
                cursor.bump();
                text.push_str("*/");
                return CommentAttempt::Comment(cursor_delta(&text));
            }
            Some(c) => text.push(c),
        }
    }
}
