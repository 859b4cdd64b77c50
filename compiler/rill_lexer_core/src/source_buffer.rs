//! Decoded source buffer.
//!
//! The whole input is decoded into a `Vec<char>` before scanning begins.
//! That makes pushback a pure index decrement and concentrates every
//! genuine read failure at construction time: once a buffer exists, the
//! cursor over it cannot fail, only run out. Coordinates count characters,
//! not bytes, which is why the buffer is char-indexed.

use std::io::{self, Read};

/// An immutable, fully decoded input.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    chars: Vec<char>,
}

impl SourceBuffer {
    /// Build a buffer from in-memory text.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
        }
    }

    /// Build a buffer by draining a reader.
    ///
    /// An I/O failure or invalid UTF-8 surfaces here as `Err`; this is the
    /// only point in a scan where reading can fail, and it produces no
    /// tokens at all.
    pub fn from_reader(mut reader: impl Read) -> io::Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::new(&text))
    }

    /// Number of characters in the input.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// A cursor positioned at the start of the buffer.
    #[inline]
    pub fn cursor(&self) -> crate::CharCursor<'_> {
        crate::CharCursor::new(&self.chars)
    }
}
