//! Error adapter for converting FloorPlanError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! Scene-decoding errors carry the JSON source and a line/column location, so
//! they are rendered with a labelled snippet. Every other variant is reported
//! as a plain error with a code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use floorplan::{FloorPlanError, scene::SceneError};

/// Adapter for a scene-decoding error and its JSON source.
pub struct SceneAdapter<'a> {
    err: &'a SceneError,
    src: &'a str,
}

impl<'a> SceneAdapter<'a> {
    pub fn new(err: &'a SceneError, src: &'a str) -> Self {
        Self { err, src }
    }

    /// Byte span of the failure inside the source.
    pub fn span(&self) -> SourceSpan {
        let (line, column) = self.err.location();
        let offset = byte_offset(self.src, line, column);
        let len = usize::from(offset < self.src.len());
        SourceSpan::new(offset.into(), len)
    }
}

impl fmt::Debug for SceneAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for SceneAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.err, f)
    }
}

impl std::error::Error for SceneAdapter<'_> {}

impl MietteDiagnostic for SceneAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("floorplan::scene"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "the input must be a scene snapshot with `layers` and an optional `selectedLayer`",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_primary_with_span(Some("here".to_string()), self.span());
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for [`FloorPlanError`] variants without a source location.
pub struct ErrorAdapter<'a>(pub &'a FloorPlanError);

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
            FloorPlanError::Io(_) => "floorplan::io",
            FloorPlanError::Scene { .. } => "floorplan::scene",
            FloorPlanError::Export(_) => "floorplan::export",
            FloorPlanError::Config(_) => "floorplan::config",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A scene error with source location information.
    Scene(SceneAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Scene(s) => fmt::Display::fmt(s, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Scene(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Scene(s) => s.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Scene(s) => s.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Scene(s) => s.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Scene(s) => s.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Byte offset of a one-based line and column, clamped to the source length.
///
/// A column of zero (reported at end of input) points at the line start.
fn byte_offset(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(src.len())
}

/// Convert a [`FloorPlanError`] into a list of reportable errors.
pub fn to_reportables(err: &FloorPlanError) -> Vec<Reportable<'_>> {
    match err {
        FloorPlanError::Scene { err, src } => vec![Reportable::Scene(SceneAdapter::new(err, src))],
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
