//! Source coordinates and coordinate ranges.
//!
//! A coordinate is a 1-based `(line, column)` pair. Lines and columns are
//! distinct nominal types so they cannot be swapped at a call site. The
//! [`SourceCoordinate::shift`] combinator is the single arithmetic primitive
//! every scanner uses to advance position; its behavior at line boundaries
//! is load-bearing and pinned by tests.

use std::fmt;

/// A 1-based line number (or a line *delta* when used inside a shift).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Line(pub u32);

/// A 1-based column number (or a column *delta* when used inside a shift).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Column(pub u32);

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A position in a source file.
///
/// Rendered as `{line:column}`. The default coordinate is line 1, column 1,
/// the start of any input.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SourceCoordinate {
    line: Line,
    column: Column,
}

impl Default for SourceCoordinate {
    fn default() -> Self {
        Self::new(Line(1), Column(1))
    }
}

impl SourceCoordinate {
    /// Create a coordinate from a line and column.
    #[inline]
    pub const fn new(line: Line, column: Column) -> Self {
        Self { line, column }
    }

    #[inline]
    pub const fn line(self) -> Line {
        self.line
    }

    #[inline]
    pub const fn column(self) -> Column {
        self.column
    }

    /// Combine a base coordinate with a delta coordinate.
    ///
    /// When the delta's line component is zero the motion is intra-line and
    /// the columns add. Otherwise the lines add and the column becomes the
    /// delta's column when positive, else 1: a line break resets the column
    /// unless the delta supplies an explicit ending column (as deltas for
    /// multi-line comments and whitespace runs do).
    #[inline]
    pub const fn shift(base: Self, delta: Self) -> Self {
        if delta.line.0 == 0 {
            Self::new(base.line, Column(base.column.0 + delta.column.0))
        } else {
            let column = if delta.column.0 > 0 { delta.column.0 } else { 1 };
            Self::new(Line(base.line.0 + delta.line.0), Column(column))
        }
    }
}

impl fmt::Display for SourceCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}:{}}}", self.line, self.column)
    }
}

/// An immutable `(begin, end)` coordinate pair.
///
/// `begin <= end` is expected but not enforced. Used both for token spans
/// and for error extents such as the full reach of an unterminated comment.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SourceRange {
    begin: SourceCoordinate,
    end: SourceCoordinate,
}

impl SourceRange {
    #[inline]
    pub const fn new(begin: SourceCoordinate, end: SourceCoordinate) -> Self {
        Self { begin, end }
    }

    /// A range collapsed to a single coordinate.
    #[inline]
    pub const fn point(at: SourceCoordinate) -> Self {
        Self { begin: at, end: at }
    }

    #[inline]
    pub const fn begin(self) -> SourceCoordinate {
        self.begin
    }

    #[inline]
    pub const fn end(self) -> SourceCoordinate {
        self.end
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from {} to {}", self.begin, self.end)
    }
}
