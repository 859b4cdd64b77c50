//! Cursor over a decoded character buffer.
//!
//! The cursor supports peek-without-consume, consume-one, bulk consumption,
//! and single-step pushback. Exhaustion is the `None` return of `peek` and
//! `bump`; there is no other failure mode once a buffer exists. Exactly one
//! cursor owns advancement during a scan.

/// Forward cursor with one-step pushback.
///
/// `Copy`, so callers can snapshot the position for speculative scans.
#[derive(Copy, Clone, Debug)]
pub struct CharCursor<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> CharCursor<'a> {
    pub(crate) fn new(chars: &'a [char]) -> Self {
        Self { chars, pos: 0 }
    }

    /// The next character, without consuming it. `None` means exhausted.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// The character after next, without consuming anything.
    #[inline]
    pub fn peek2(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    /// Consume and return the next character. `None` means exhausted.
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Push the most recently consumed character back.
    ///
    /// A pure index decrement; the speculative-`/` path in the comment
    /// skipper relies on this being loss-free.
    #[inline]
    pub fn retreat(&mut self) {
        debug_assert!(self.pos > 0, "retreat at start of buffer");
        self.pos = self.pos.saturating_sub(1);
    }

    /// Consume characters while `pred` holds, returning them as a `String`.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    /// `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Current character index (not a source coordinate).
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }
}
