//! Planboard - diagram canvas and month timeline for a project dashboard.
//!
//! Gesture replay, plan loading and SVG rendering on top of the
//! `planboard-core` model, plus the dashboard's sample content and its mock
//! user session.

pub mod config;
pub mod gesture;
pub mod plan;
pub mod seed;
pub mod session;

mod error;
mod export;

pub use planboard_core::{canvas, color, draw, geometry, leave, timeline};

pub use error::PlanboardError;

use chrono::NaiveDate;
use log::{debug, info};

use canvas::Canvas;
use config::AppConfig;
use export::Exporter;
use timeline::{ReferenceMonth, WorkItem};

/// Builder for rendering Planboard views.
///
/// # Examples
///
/// ```rust
/// use planboard::{BoardRenderer, config::AppConfig, gesture::Script, seed};
///
/// let renderer = BoardRenderer::new(AppConfig::default());
///
/// // Replay a script onto the sample canvas
/// let script = Script::from_toml(r#"
///     [[gesture]]
///     action = "tool"
///     tool = "diamond"
///
///     [[gesture]]
///     action = "click"
///     x = 200
///     y = 120
/// "#).expect("Failed to parse script");
///
/// let mut canvas = seed::canvas();
/// script.replay(&mut canvas);
/// assert_eq!(canvas.len(), 4);
///
/// let svg = renderer.render_canvas_svg(&canvas)
///     .expect("Failed to render canvas");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Default)]
pub struct BoardRenderer {
    config: AppConfig,
}

impl BoardRenderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a month in `YYYY-MM` form.
    ///
    /// # Errors
    ///
    /// Returns [`PlanboardError::Timeline`] for a malformed or out-of-range
    /// month.
    pub fn parse_month(&self, month: &str) -> Result<ReferenceMonth, PlanboardError> {
        Ok(month.parse::<ReferenceMonth>()?)
    }

    /// Render a canvas to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`PlanboardError::Config`] for invalid style colors and
    /// [`PlanboardError::Export`] for invalid canvas dimensions.
    pub fn render_canvas_svg(&self, canvas: &Canvas) -> Result<String, PlanboardError> {
        info!(elements = canvas.len(); "Rendering canvas");

        let mut exporter = self.exporter()?;
        let svg = exporter.export_canvas(canvas)?;

        debug!(bytes = svg.len(); "Canvas SVG rendered");
        Ok(svg)
    }

    /// Render the month timeline of `items` to an SVG string.
    ///
    /// `today` draws a marker when it lies inside `month`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanboardError::Config`] for invalid style colors and
    /// [`PlanboardError::Export`] for invalid timeline dimensions.
    pub fn render_timeline_svg(
        &self,
        month: &ReferenceMonth,
        items: &[WorkItem],
        today: Option<NaiveDate>,
    ) -> Result<String, PlanboardError> {
        info!(month:% = month, items = items.len(); "Rendering timeline");

        let mut exporter = self.exporter()?;
        let svg = exporter.export_timeline(month, items, today)?;

        debug!(bytes = svg.len(); "Timeline SVG rendered");
        Ok(svg)
    }

    fn exporter(&self) -> Result<export::svg::Svg, PlanboardError> {
        Ok(export::svg::SvgBuilder::new()
            .with_canvas(self.config.canvas())
            .with_timeline(self.config.timeline())
            .with_style(self.config.style())
            .build()?)
    }
}
