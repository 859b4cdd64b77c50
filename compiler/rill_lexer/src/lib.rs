//! Lexical analysis for the Rill compiler.
//!
//! The lexer turns a [`SourceBuffer`] into a stream of [`Token`]s. Tokens
//! are produced lazily: [`Lexer`] implements [`Iterator`] and scans one
//! token per `next` call, so a parser can drive it on demand, while
//! [`tokenize`] and [`tokenize_reader`] collect the whole stream up front.
//!
//! Scanning never aborts on malformed input. Each recoverable problem
//! becomes an error token whose spelling is the offending text, a matching
//! diagnostic lands in the [`Reporter`], and scanning resumes at the next
//! character. The stream always ends with a single end-of-input token whose
//! spelling is `$`. The only fatal error is failing to read the source in
//! the first place, which yields no tokens at all.
//!
//! ```
//! use rill_diagnostic::Reporter;
//! use rill_ir::TokenKind;
//!
//! let mut report = Reporter::default();
//! let tokens = rill_lexer::tokenize("let x <- 42;", &mut report);
//! assert_eq!(tokens[2].kind(), TokenKind::Assign);
//! assert_eq!(report.errors(), 0);
//! ```

mod delta;
mod identifier;
mod keywords;
mod number;
mod string;
mod symbol;
mod token_builder;
mod whitespace;

use crate::identifier::scan_identifier;
use crate::number::{possibly_float, scan_number};
use crate::string::scan_string;
use crate::symbol::scan_symbol;
use crate::whitespace::{skip_whitespace_like, WhitespaceResult};
use rill_diagnostic::Reporter;
use rill_ir::{Pass, SourceCoordinate, Token, TokenKind};
use std::io;
use thiserror::Error;

pub use rill_lexer_core::{CharCursor, SourceBuffer};

/// A failure that prevents scanning from starting. No tokens are produced
/// when this occurs, not even end-of-input.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("unable to read character from stream: {0}")]
    Read(#[from] io::Error),
}

/// Scan one token, skipping any whitespace and comments in front of it.
///
/// `at` is the coordinate of the first unconsumed character. The returned
/// token's end coordinate is the `at` for the next call. Error tokens are
/// reported here; an exhausted cursor yields the end-of-input token.
pub fn generate_token(
    cursor: &mut CharCursor<'_>,
    report: &mut Reporter,
    at: SourceCoordinate,
) -> Token {
    let at = match skip_whitespace_like(cursor, at) {
        WhitespaceResult::Advanced(at) => at,
        WhitespaceResult::UnterminatedComment(range) => {
            report.error(
                Pass::Lexical,
                range.begin(),
                "unterminated multi-line comment.",
            );
            return Token::eof(range.end());
        }
    };
    let token = match cursor.peek() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => scan_identifier(cursor, at),
        Some(c) if c.is_ascii_digit() => scan_number(cursor, at),
        Some('.') => possibly_float(cursor, at),
        Some('"') => scan_string(cursor, at),
        Some(_) => scan_symbol(cursor, at),
        None => Token::eof(at),
    };
    check_for_error(report, &token);
    token
}

/// Report the diagnostic a freshly scanned error token calls for.
///
/// Numeric and unknown-token errors point at the token's begin; an
/// unterminated string points at its end, where the closing quote should
/// have been. Invalid escape sequences are left to [`Lexer`] policy.
fn check_for_error(report: &mut Reporter, token: &Token) {
    let (location, message) = match token.kind() {
        TokenKind::TooManyRadixPoints => (
            token.range().begin(),
            format!(
                "too many radix points in floating-point literal: \"{}\".",
                token.spelling()
            ),
        ),
        TokenKind::ExponentLackingDigit => (
            token.range().begin(),
            format!(
                "floating-point exponent lacking digits: \"{}\".",
                token.spelling()
            ),
        ),
        TokenKind::UnknownToken => (
            token.range().begin(),
            format!("unknown token: \"{}\".", token.spelling()),
        ),
        TokenKind::UnterminatedStringLiteral => (
            token.range().end(),
            format!("unterminated string literal: \"{}\".", token.spelling()),
        ),
        _ => return,
    };
    tracing::debug!(kind = %token.kind(), %location, "lexical error");
    report.error(Pass::Lexical, location, message);
}

/// A lazy token stream over a [`SourceBuffer`].
///
/// Yields every token in the source, including error tokens, and fuses
/// after the end-of-input token.
pub struct Lexer<'src, 'rep> {
    cursor: CharCursor<'src>,
    report: &'rep mut Reporter,
    at: SourceCoordinate,
    fused: bool,
    report_invalid_escapes: bool,
}

impl<'src, 'rep> Lexer<'src, 'rep> {
    pub fn new(buffer: &'src SourceBuffer, report: &'rep mut Reporter) -> Self {
        Self {
            cursor: buffer.cursor(),
            report,
            at: SourceCoordinate::default(),
            fused: false,
            report_invalid_escapes: false,
        }
    }

    /// Whether a [`TokenKind::InvalidEscapeSequence`] token also reports a
    /// diagnostic. Off by default: the token alone is usually enough, since
    /// a later pass rejects the literal anyway.
    #[must_use]
    pub fn report_invalid_escapes(mut self, enabled: bool) -> Self {
        self.report_invalid_escapes = enabled;
        self
    }
}

impl Iterator for Lexer<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.fused {
            return None;
        }
        let token = generate_token(&mut self.cursor, self.report, self.at);
        self.at = token.range().end();
        if token.kind() == TokenKind::Eof {
            self.fused = true;
        }
        if self.report_invalid_escapes && token.kind() == TokenKind::InvalidEscapeSequence {
            self.report.error(
                Pass::Lexical,
                token.range().begin(),
                format!(
                    "invalid escape sequence in string literal: \"{}\".",
                    token.spelling()
                ),
            );
        }
        Some(token)
    }
}

/// Scan an in-memory source to completion.
pub fn tokenize(source: &str, report: &mut Reporter) -> Vec<Token> {
    let buffer = SourceBuffer::new(source);
    Lexer::new(&buffer, report).collect()
}

/// Read a source to exhaustion, then scan it to completion.
///
/// # Errors
///
/// Returns [`ScanError::Read`] when the reader fails or its contents are
/// not valid UTF-8. No tokens are produced in that case.
pub fn tokenize_reader(
    reader: impl io::Read,
    report: &mut Reporter,
) -> Result<Vec<Token>, ScanError> {
    let buffer = SourceBuffer::from_reader(reader)?;
    Ok(Lexer::new(&buffer, report).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rill_ir::{Column, Line};

    fn at(line: u32, column: u32) -> SourceCoordinate {
        SourceCoordinate::new(Line(line), Column(column))
    }

    #[test]
    fn empty_source_yields_end_of_input_only() {
        let mut report = Reporter::default();
        let tokens = tokenize("", &mut report);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind(), TokenKind::Eof);
        assert_eq!(tokens[0].spelling(), Token::EOF_SPELLING);
        assert_eq!(tokens[0].range().begin(), at(1, 1));
        assert_eq!(report.errors(), 0);
    }

    #[test]
    fn the_stream_fuses_after_end_of_input() {
        let mut report = Reporter::default();
        let buffer = SourceBuffer::new("x");
        let mut lexer = Lexer::new(&buffer, &mut report);
        assert_eq!(lexer.next().map(|t| t.kind()), Some(TokenKind::Identifier));
        assert_eq!(lexer.next().map(|t| t.kind()), Some(TokenKind::Eof));
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn error_tokens_are_reported_where_they_occur() {
        let mut report = Reporter::default();
        let tokens = tokenize("x <- 10.10.10;", &mut report);
        assert_eq!(tokens[2].kind(), TokenKind::TooManyRadixPoints);
        assert_eq!(report.errors(), 1);
        assert_eq!(
            report.diagnostics()[0].to_string(),
            "lexical error at {1:6}: too many radix points in floating-point literal: \"10.10.10\"."
        );
    }

    #[test]
    fn invalid_escapes_stay_silent_by_default() {
        let mut report = Reporter::default();
        let buffer = SourceBuffer::new("\"bad\\q\"");
        let tokens: Vec<Token> = Lexer::new(&buffer, &mut report).collect();
        assert_eq!(tokens[0].kind(), TokenKind::InvalidEscapeSequence);
        assert_eq!(report.errors(), 0);
    }

    #[test]
    fn invalid_escapes_report_when_asked() {
        let mut report = Reporter::default();
        let buffer = SourceBuffer::new("\"bad\\q\"");
        let tokens: Vec<Token> = Lexer::new(&buffer, &mut report)
            .report_invalid_escapes(true)
            .collect();
        assert_eq!(tokens[0].kind(), TokenKind::InvalidEscapeSequence);
        assert_eq!(report.errors(), 1);
        assert_eq!(
            report.diagnostics()[0].to_string(),
            "lexical error at {1:1}: invalid escape sequence in string literal: \"\"bad\\q\"\"."
        );
    }

    #[test]
    fn broken_readers_are_fatal_and_token_free() {
        struct Broken;
        impl io::Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("wire cut"))
            }
        }

        let mut report = Reporter::default();
        let result = tokenize_reader(Broken, &mut report);
        assert!(matches!(result, Err(ScanError::Read(_))));
        assert_eq!(report.errors(), 0);
    }
}
