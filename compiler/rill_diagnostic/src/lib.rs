//! Diagnostic sink for the Rill compiler.
//!
//! The [`Reporter`] accumulates [`Diagnostic`]s and keeps running error and
//! warning counts. It has no knowledge of scanning or parsing; passes hand
//! it a phase tag, a position (or position range) and a rendered message.
//! Rendering to a terminal-style stream is a separate step so tests can
//! inspect the queue without capturing output.

use rill_ir::{Pass, SourceCoordinate, SourceRange};
use std::fmt;
use std::io;

/// Where a diagnostic points: a single coordinate or a coordinate range.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DiagnosticLocation {
    Point(SourceCoordinate),
    Extent(SourceRange),
}

impl From<SourceCoordinate> for DiagnosticLocation {
    fn from(at: SourceCoordinate) -> Self {
        DiagnosticLocation::Point(at)
    }
}

impl From<SourceRange> for DiagnosticLocation {
    fn from(range: SourceRange) -> Self {
        DiagnosticLocation::Extent(range)
    }
}

impl fmt::Display for DiagnosticLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLocation::Point(at) => write!(f, "at {at}"),
            DiagnosticLocation::Extent(range) => write!(f, "{range}"),
        }
    }
}

/// Diagnostic severity.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// One reported problem.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    pub pass: Pass,
    pub severity: Severity,
    pub location: DiagnosticLocation,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}: {}",
            self.pass, self.severity, self.location, self.message
        )
    }
}

/// Accumulating diagnostic sink with monotonically increasing counters.
#[derive(Debug, Default)]
pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
    errors: usize,
    warnings: usize,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error at a point or across a range.
    pub fn error(
        &mut self,
        pass: Pass,
        location: impl Into<DiagnosticLocation>,
        message: impl Into<String>,
    ) {
        self.errors += 1;
        self.diagnostics.push(Diagnostic {
            pass,
            severity: Severity::Error,
            location: location.into(),
            message: message.into(),
        });
    }

    /// Record a warning at a point or across a range.
    pub fn warning(
        &mut self,
        pass: Pass,
        location: impl Into<DiagnosticLocation>,
        message: impl Into<String>,
    ) {
        self.warnings += 1;
        self.diagnostics.push(Diagnostic {
            pass,
            severity: Severity::Warning,
            location: location.into(),
            message: message.into(),
        });
    }

    /// Number of errors reported so far.
    #[inline]
    pub fn errors(&self) -> usize {
        self.errors
    }

    /// Number of warnings reported so far.
    #[inline]
    pub fn warnings(&self) -> usize {
        self.warnings
    }

    /// Every diagnostic reported so far, in report order.
    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Render all diagnostics, one per line, to a terminal-style stream.
    pub fn write_to(&self, out: &mut impl io::Write) -> io::Result<()> {
        for diagnostic in &self.diagnostics {
            writeln!(out, "{diagnostic}")?;
        }
        Ok(())
    }
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
    fn counts_are_monotonic_and_separate() {
        let mut report = Reporter::new();
        assert_eq!(report.errors(), 0);
        assert_eq!(report.warnings(), 0);

        report.error(Pass::Lexical, at(1, 2), "unknown token: \"?\".");
        report.warning(Pass::Lexical, at(1, 9), "suspicious spacing.");
        report.error(Pass::Lexical, at(2, 1), "unterminated multi-line comment.");

        assert_eq!(report.errors(), 2);
        assert_eq!(report.warnings(), 1);
        assert_eq!(report.diagnostics().len(), 3);
    }

    #[test]
    fn point_rendering() {
        let mut report = Reporter::new();
        report.error(Pass::Lexical, at(3, 4), "unknown token: \"?\".");

        let mut out = Vec::new();
        report
            .write_to(&mut out)
            .unwrap_or_else(|_| panic!("write to Vec cannot fail"));
        assert_eq!(
            String::from_utf8_lossy(&out),
            "lexical error at {3:4}: unknown token: \"?\".\n"
        );
    }

    #[test]
    fn range_rendering() {
        let mut report = Reporter::new();
        let range = SourceRange::new(at(1, 9), at(5, 1));
        report.error(Pass::Lexical, range, "unterminated multi-line comment.");

        let mut out = Vec::new();
        report
            .write_to(&mut out)
            .unwrap_or_else(|_| panic!("write to Vec cannot fail"));
        assert_eq!(
            String::from_utf8_lossy(&out),
            "lexical error from {1:9} to {5:1}: unterminated multi-line comment.\n"
        );
    }

    #[test]
    fn diagnostics_keep_report_order() {
        let mut report = Reporter::new();
        report.error(Pass::Lexical, at(1, 1), "first");
        report.warning(Pass::Syntax, at(2, 2), "second");

        let kinds: Vec<_> = report
            .diagnostics()
            .iter()
            .map(|d| (d.pass, d.severity))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (Pass::Lexical, Severity::Error),
                (Pass::Syntax, Severity::Warning)
            ]
        );
    }
}
