//! Error adapter for converting PlanboardError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Gesture script
//! and plan file errors point into their TOML source and are rendered with a
//! labelled snippet; everything else is rendered as a plain report.

use std::{fmt, ops::Range};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use planboard::PlanboardError;

/// Adapter for errors that point into a TOML source file.
pub struct SourceAdapter<'a> {
    err: &'a PlanboardError,
    src: &'a str,
    span: Option<Range<usize>>,
}

impl<'a> SourceAdapter<'a> {
    /// Create an adapter; returns `None` for errors without source text.
    pub fn new(err: &'a PlanboardError) -> Option<Self> {
        let (src, span) = err.source_span()?;
        Some(Self { err, src, span })
    }
}

impl fmt::Debug for SourceAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceAdapter")
            .field("err", &self.err)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for SourceAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.err, f)
    }
}

impl std::error::Error for SourceAdapter<'_> {}

impl MietteDiagnostic for SourceAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err {
            PlanboardError::Plan { .. } => "planboard::plan",
            _ => "planboard::script",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.err {
            PlanboardError::Plan { .. } => {
                "each [[item]] needs title, start, end (YYYY-MM-DD) and color"
            }
            _ => "each [[gesture]] needs an action, see `planboard canvas --help`",
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        if self.src.is_empty() {
            return None;
        }
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span.clone().filter(|_| !self.src.is_empty())?;
        let label =
            LabeledSpan::new_primary_with_span(Some("here".to_string()), SourceSpan::from(span));
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for [`PlanboardError`] variants without source information.
pub struct ErrorAdapter<'a>(pub &'a PlanboardError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PlanboardError::Io(_) => "planboard::io",
            PlanboardError::Config(_) => "planboard::config",
            PlanboardError::Script { .. } => "planboard::script",
            PlanboardError::Plan { .. } => "planboard::plan",
            PlanboardError::Timeline(_) => "planboard::timeline",
            PlanboardError::Session(_) => "planboard::session",
            PlanboardError::Export(_) => "planboard::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        None
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// An error with a labelled source snippet.
    Source(SourceAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Source(s) => fmt::Display::fmt(s, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Source(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Source(s) => s.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Source(s) => s.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Source(s) => s.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Source(s) => s.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`PlanboardError`] into a reportable error.
///
/// Script and plan errors become [`Reportable::Source`]; every other variant
/// becomes [`Reportable::Error`].
pub fn to_reportable(err: &PlanboardError) -> Reportable<'_> {
    match SourceAdapter::new(err) {
        Some(adapter) => Reportable::Source(adapter),
        None => Reportable::Error(ErrorAdapter(err)),
    }
}

#[cfg(test)]
mod tests {
    use planboard::{gesture::Script, plan::PlanFile};

    use super::*;

    #[test]
    fn test_script_error_has_label() {
        let source = "origin = \"nowhere\"\n";
        let err = Script::from_toml(source).unwrap_err();

        let reportable = to_reportable(&err);
        assert!(matches!(reportable, Reportable::Source(_)));
        assert_eq!(
            reportable.code().map(|c| c.to_string()),
            Some("planboard::script".to_string())
        );

        let labels: Vec<_> = reportable.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
        assert_eq!(labels[0].label(), Some("here"));
    }

    #[test]
    fn test_plan_color_error_labels_value() {
        let source = "[[item]]\ntitle = \"Broken\"\nstart = \"2024-03-01\"\nend = \"2024-03-02\"\ncolor = \"blurple\"\n";
        let err = PlanFile::from_toml(source)
            .unwrap()
            .work_items()
            .unwrap_err();

        let reportable = to_reportable(&err);
        assert!(reportable.source_code().is_some());
        assert_eq!(
            reportable.code().map(|c| c.to_string()),
            Some("planboard::plan".to_string())
        );

        let labels: Vec<_> = reportable.labels().unwrap().collect();
        let span = labels[0].inner();
        assert!(source[span.offset()..span.offset() + span.len()].contains("blurple"));
    }

    #[test]
    fn test_plan_error_without_source() {
        let err = PlanboardError::Plan {
            message: "item `x`: invalid color".to_string(),
            span: None,
            src: String::new(),
        };

        let reportable = to_reportable(&err);
        assert!(reportable.source_code().is_none());
        assert!(reportable.labels().is_none());
        assert!(reportable.to_string().contains("invalid color"));
    }

    #[test]
    fn test_non_source_error() {
        let err = PlanboardError::Config("bad color".to_string());

        match to_reportable(&err) {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Configuration error: bad color");
                assert_eq!(
                    e.code().map(|c| c.to_string()),
                    Some("planboard::config".to_string())
                );
            }
            Reportable::Source(_) => panic!("Expected Error"),
        }
    }
}
