//! Export functionality for Planboard views.
//!
//! Converts a [`Canvas`] or a laid-out month timeline into an output
//! document. It is the last step of both pipelines:
//!
//! ```text
//! Canvas (+ replayed gestures)        Work items + ReferenceMonth
//!     ↓ export (this module)              ↓ layout_month
//! SVG document                        Bar placements
//!                                         ↓ export (this module)
//!                                     SVG document
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. At the crate boundary a style error
//! becomes [`PlanboardError::Config`] and every other error becomes
//! [`PlanboardError::Export`].
//!
//! [`PlanboardError::Config`]: crate::PlanboardError::Config
//! [`PlanboardError::Export`]: crate::PlanboardError::Export

/// SVG export backend.
pub mod svg;

use chrono::NaiveDate;

use planboard_core::{
    canvas::Canvas,
    timeline::{ReferenceMonth, WorkItem},
};

/// Abstraction for view export backends.
///
/// Both methods produce the complete output document as a string.
pub trait Exporter {
    /// Exports the canvas, including its selection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the canvas cannot be drawn with the
    /// exporter's settings.
    fn export_canvas(&mut self, canvas: &Canvas) -> Result<String, Error>;

    /// Exports the month timeline of `items`.
    ///
    /// `today` draws a marker when it lies inside `month`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the timeline cannot be drawn with the
    /// exporter's settings.
    fn export_timeline(
        &mut self,
        month: &ReferenceMonth,
        items: &[WorkItem],
        today: Option<NaiveDate>,
    ) -> Result<String, Error>;
}

/// Errors that can occur during export.
///
/// This type is converted into a [`PlanboardError`] at the crate boundary via
/// the [`From`] implementation in [`crate::error`].
///
/// [`PlanboardError`]: crate::PlanboardError
#[derive(Debug)]
pub enum Error {
    /// A rendering failure described by `message`.
    Render(String),
    /// A configured color that cannot be parsed.
    Style(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Style(msg) => write!(f, "Style error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
