//! Coordinate delta computation for consumed chunks of text.

use rill_ir::{Column, Line, SourceCoordinate};

/// Is `c` one of the characters that starts a new line?
///
/// Only LF and FF advance the line counter. CR advances the column, which
/// makes CRLF a single line break without special casing.
pub(crate) fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\u{c}')
}

/// Compute the coordinate delta for a chunk of consumed text.
///
/// The line component counts line terminators. The column component is the
/// character distance from the last line terminator (inclusive) to the
/// chunk's end, or the whole chunk length when no terminator occurs; shifted
/// onto a base coordinate this yields the 1-based column of the first
/// character after the chunk. Single linear pass.
pub(crate) fn cursor_delta(text: &str) -> SourceCoordinate {
    let mut lines = 0u32;
    let mut column = 0u32;
    for c in text.chars() {
        if is_line_terminator(c) {
            lines += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    SourceCoordinate::new(Line(lines), Column(column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn delta(line: u32, column: u32) -> SourceCoordinate {
        SourceCoordinate::new(Line(line), Column(column))
    }

    #[test]
    fn empty_chunk_is_zero_delta() {
        assert_eq!(cursor_delta(""), delta(0, 0));
    }

    #[test]
    fn single_line_chunk_counts_columns() {
        assert_eq!(cursor_delta("// a comment"), delta(0, 12));
    }

    #[test]
    fn linefeed_advances_line_and_resets_column() {
        assert_eq!(cursor_delta("ab\ncd"), delta(1, 3));
    }

    #[test]
    fn formfeed_is_a_line_terminator() {
        assert_eq!(cursor_delta("ab\u{c}c"), delta(1, 2));
    }

    #[test]
    fn crlf_is_one_line_break() {
        assert_eq!(cursor_delta("\r\n"), delta(1, 1));
    }

    #[test]
    fn lone_cr_advances_the_column() {
        assert_eq!(cursor_delta("\r"), delta(0, 1));
        assert_eq!(cursor_delta("a\rb"), delta(0, 3));
    }

    #[test]
    fn trailing_text_after_last_break_sets_column() {
        assert_eq!(cursor_delta("/* x\n * y\n */"), delta(2, 4));
    }

    /// Reference implementation: split on terminators and measure the tail.
    fn split_based_delta(text: &str) -> SourceCoordinate {
        let chars: Vec<char> = text.chars().collect();
        let lines = chars.iter().filter(|&&c| is_line_terminator(c)).count();
        let tail = chars
            .iter()
            .rev()
            .take_while(|&&c| !is_line_terminator(c))
            .count();
        let column = if lines > 0 { tail + 1 } else { tail };
        delta(
            u32::try_from(lines).unwrap_or(u32::MAX),
            u32::try_from(column).unwrap_or(u32::MAX),
        )
    }

    proptest! {
        #[test]
        fn fold_matches_split_reference(text in "[a-z \t\r\n\u{c}]{0,200}") {
            prop_assert_eq!(cursor_delta(&text), split_based_delta(&text));
        }
    }
}
