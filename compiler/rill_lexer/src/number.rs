//! Numeric literal scanning.
//!
//! Extraction is deliberately greedy: a run of digits and radix points is
//! consumed whole, and malformed shapes such as `10.10.10` or `543e` become
//! single error tokens rather than splitting into smaller valid ones. The
//! split keeps recovery simple and the diagnostics readable.

use crate::token_builder::make_token;
use rill_ir::{SourceCoordinate, Token, TokenKind};
use rill_lexer_core::CharCursor;

/// Decide the kind of a fully extracted numeric lexeme.
///
/// More than one radix point outranks the exponent check. Whatever the shape
/// so far, a lexeme ending in anything other than a digit or a radix point
/// can only have come from a dangling exponent.
pub(crate) fn deduce_number_kind(lexeme: &str) -> TokenKind {
    let radix_points = lexeme.chars().filter(|&c| c == '.').count();
    let kind = if radix_points > 1 {
        TokenKind::TooManyRadixPoints
    } else if radix_points == 1 || lexeme.contains(['e', 'E']) {
        TokenKind::FloatingLiteral
    } else {
        TokenKind::IntegralLiteral
    };
    match lexeme.chars().last() {
        Some(c) if c.is_ascii_digit() || c == '.' => kind,
        _ => TokenKind::ExponentLackingDigit,
    }
}

/// Scan the number starting at the cursor. The caller guarantees the first
/// character is a digit.
pub(crate) fn scan_number(cursor: &mut CharCursor<'_>, begin: SourceCoordinate) -> Token {
    let digits = cursor.eat_while(|c| c.is_ascii_digit());
    match cursor.peek() {
        Some('.' | 'e' | 'E') => scan_floating(cursor, digits, begin),
        _ => make_token(digits, begin),
    }
}

/// A leading `.` is a radix point only when a digit follows; otherwise it is
/// the member-access separator.
pub(crate) fn possibly_float(cursor: &mut CharCursor<'_>, begin: SourceCoordinate) -> Token {
    cursor.bump();
    match cursor.peek() {
        Some(c) if c.is_ascii_digit() => scan_floating(cursor, String::from("."), begin),
        _ => make_token(String::from("."), begin),
    }
}

fn scan_floating(cursor: &mut CharCursor<'_>, mut lexeme: String, begin: SourceCoordinate) -> Token {
    lexeme.push_str(&cursor.eat_while(|c| c.is_ascii_digit() || c == '.'));
    scan_floating_exponent(cursor, lexeme, begin)
}

/// Consume an optional exponent part: `e` or `E`, at most one sign, then the
/// digit run (possibly empty, which deduction flags).
fn scan_floating_exponent(
    cursor: &mut CharCursor<'_>,
    mut lexeme: String,
    begin: SourceCoordinate,
) -> Token {
    if matches!(cursor.peek(), Some('e' | 'E')) {
        if let Some(e) = cursor.bump() {
            lexeme.push(e);
        }
        if matches!(cursor.peek(), Some('+' | '-')) {
            if let Some(sign) = cursor.bump() {
                lexeme.push(sign);
            }
        }
        lexeme.push_str(&cursor.eat_while(|c| c.is_ascii_digit()));
    }
    make_token(lexeme, begin)
}
