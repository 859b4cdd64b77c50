//! Identifier and word scanning.
//!
//! Extracts a maximal run of word characters; the classification table then
//! decides whether the spelling is a keyword, a type specifier, a boolean
//! literal, a word operator, or an identifier.

use crate::token_builder::make_token;
use rill_ir::{SourceCoordinate, Token};
use rill_lexer_core::CharCursor;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scan the word starting at the cursor. The caller guarantees the first
/// character is a letter or underscore.
pub(crate) fn scan_identifier(cursor: &mut CharCursor<'_>, begin: SourceCoordinate) -> Token {
    make_token(cursor.eat_while(is_word_char), begin)
}
