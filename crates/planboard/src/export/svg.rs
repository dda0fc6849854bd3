//! SVG backend.
//!
//! [`SvgBuilder`] resolves the configured sizes and colors once; the
//! resulting [`Svg`] renders canvases and timelines into in-memory
//! [`svg::Document`]s.

mod canvas;
mod timeline;

use chrono::NaiveDate;
use log::debug;
use svg::node::element as svg_element;

use planboard_core::{
    canvas::Canvas,
    color::Color,
    draw::{ShapeStyle, StrokeDefinition},
    geometry::Size,
    timeline::{ReferenceMonth, WorkItem},
};

use super::{Error, Exporter};
use crate::config::{CanvasConfig, StyleConfig, TimelineConfig};

/// Builder for [`Svg`].
#[derive(Debug, Default)]
pub struct SvgBuilder {
    canvas: CanvasConfig,
    timeline: TimelineConfig,
    style: StyleConfig,
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_canvas(mut self, canvas: &CanvasConfig) -> Self {
        self.canvas = canvas.clone();
        self
    }

    pub fn with_timeline(mut self, timeline: &TimelineConfig) -> Self {
        self.timeline = timeline.clone();
        self
    }

    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Validates the settings and resolves every configured color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Style`] for an unparsable color and [`Error::Render`]
    /// for non-positive dimensions or font size.
    pub fn build(self) -> Result<Svg, Error> {
        let viewport = Size::new(self.canvas.width(), self.canvas.height());
        if viewport.width() <= 0.0 || viewport.height() <= 0.0 {
            return Err(Error::Render(format!(
                "canvas viewport must be positive, got {}x{}",
                viewport.width(),
                viewport.height()
            )));
        }
        if self.canvas.grid_size() <= 0.0 {
            return Err(Error::Render(format!(
                "grid size must be positive, got {}",
                self.canvas.grid_size()
            )));
        }
        if self.timeline.track_width() <= 0.0 || self.timeline.row_height() <= 0.0 {
            return Err(Error::Render(
                "timeline track width and row height must be positive".to_string(),
            ));
        }
        if self.style.font_size() <= 0.0 {
            return Err(Error::Render(format!(
                "font size must be positive, got {}",
                self.style.font_size()
            )));
        }
        if self.timeline.label_width() < 0.0 {
            return Err(Error::Render(
                "timeline label width must not be negative".to_string(),
            ));
        }

        let stroke_color = self.style.stroke_color().map_err(Error::Style)?;
        let selection_color = self.style.selection_color().map_err(Error::Style)?;
        let shape_style = ShapeStyle::new(
            StrokeDefinition::solid(stroke_color, 2.0),
            self.style.text_color().map_err(Error::Style)?,
            StrokeDefinition::solid(selection_color, 2.0),
        )
        .with_font_size(self.style.font_size());

        debug!(
            width = viewport.width(),
            height = viewport.height(),
            grid_size = self.canvas.grid_size();
            "SVG exporter configured"
        );

        Ok(Svg {
            viewport,
            grid_size: self.canvas.grid_size(),
            background: self.style.background_color().map_err(Error::Style)?,
            grid: StrokeDefinition::solid(self.style.grid_color().map_err(Error::Style)?, 1.0),
            shape_style,
            timeline: self.timeline,
            today: StrokeDefinition::dashed(
                Color::new(timeline::TODAY_COLOR).map_err(Error::Style)?,
                1.5,
            ),
        })
    }
}

/// SVG exporter with resolved settings.
#[derive(Debug)]
pub struct Svg {
    viewport: Size,
    grid_size: f32,
    background: Color,
    grid: StrokeDefinition,
    shape_style: ShapeStyle,
    timeline: TimelineConfig,
    today: StrokeDefinition,
}

impl Svg {
    fn document(size: Size) -> svg::Document {
        svg::Document::new()
            .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
            .set("width", size.width())
            .set("height", size.height())
    }

    fn full_rect(size: Size) -> svg_element::Rectangle {
        svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", size.width())
            .set("height", size.height())
    }
}

impl Exporter for Svg {
    fn export_canvas(&mut self, canvas: &Canvas) -> Result<String, Error> {
        Ok(self.render_canvas(canvas).to_string())
    }

    fn export_timeline(
        &mut self,
        month: &ReferenceMonth,
        items: &[WorkItem],
        today: Option<NaiveDate>,
    ) -> Result<String, Error> {
        Ok(self.render_timeline(month, items, today).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults() {
        assert!(SvgBuilder::new().build().is_ok());
    }

    #[test]
    fn test_build_rejects_zero_grid() {
        let canvas = CanvasConfig::new(100.0, 100.0, 0.0);
        let err = SvgBuilder::new().with_canvas(&canvas).build().unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn test_build_rejects_invalid_color() {
        let style: StyleConfig = toml::from_str(r#"stroke_color = "bogus""#).unwrap();
        let err = SvgBuilder::new().with_style(&style).build().unwrap_err();
        assert!(matches!(err, Error::Style(_)));
    }

    #[test]
    fn test_build_rejects_zero_font_size() {
        let style: StyleConfig = toml::from_str("font_size = 0").unwrap();
        let err = SvgBuilder::new().with_style(&style).build().unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }
}
