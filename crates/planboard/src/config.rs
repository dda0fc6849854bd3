//! Configuration types for Planboard rendering.
//!
//! All types implement [`serde::Deserialize`] and every section and field is
//! optional, so a partial TOML file only overrides what it names.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`CanvasConfig`] - Viewport size and grid spacing of the diagram canvas.
//! - [`TimelineConfig`] - Column and row dimensions of the month timeline.
//! - [`StyleConfig`] - Colors used when drawing the canvas.
//!
//! # Example
//!
//! ```
//! # use planboard::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().grid_size(), 20.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use planboard_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    canvas: CanvasConfig,

    #[serde(default)]
    timeline: TimelineConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(canvas: CanvasConfig, timeline: TimelineConfig, style: StyleConfig) -> Self {
        Self {
            canvas,
            timeline,
            style,
        }
    }

    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    pub fn timeline(&self) -> &TimelineConfig {
        &self.timeline
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Diagram canvas viewport settings.
///
/// The viewport is the minimum document size; the exported document grows
/// to fit elements dragged or created beyond it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f32,
    height: f32,
    grid_size: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            grid_size: 20.0,
        }
    }
}

impl CanvasConfig {
    pub fn new(width: f32, height: f32, grid_size: f32) -> Self {
        Self {
            width,
            height,
            grid_size,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Spacing between grid lines, in pixels.
    pub fn grid_size(&self) -> f32 {
        self.grid_size
    }
}

/// Month timeline dimensions.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    track_width: f32,
    row_height: f32,
    label_width: f32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            track_width: 800.0,
            row_height: 40.0,
            label_width: 256.0,
        }
    }
}

impl TimelineConfig {
    pub fn new(track_width: f32, row_height: f32, label_width: f32) -> Self {
        Self {
            track_width,
            row_height,
            label_width,
        }
    }

    /// Width of the bar track that spans the whole month.
    pub fn track_width(&self) -> f32 {
        self.track_width
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Width of the title column left of the track.
    pub fn label_width(&self) -> f32 {
        self.label_width
    }
}

/// Visual styling configuration for the canvas.
///
/// Fields that are not set fall back to the dashboard's dark theme: a
/// gray-800 background with white outlines and text.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    background_color: Option<String>,

    #[serde(default)]
    stroke_color: Option<String>,

    #[serde(default)]
    selection_color: Option<String>,

    #[serde(default)]
    grid_color: Option<String>,

    #[serde(default)]
    text_color: Option<String>,

    #[serde(default)]
    font_size: Option<f32>,
}

impl StyleConfig {
    /// Returns the canvas background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, String> {
        resolve("background", self.background_color.as_deref(), "#1F2937")
    }

    /// Returns the outline [`Color`] of shapes and arrows.
    pub fn stroke_color(&self) -> Result<Color, String> {
        resolve("stroke", self.stroke_color.as_deref(), "white")
    }

    /// Returns the highlight [`Color`] of the selected element.
    pub fn selection_color(&self) -> Result<Color, String> {
        resolve("selection", self.selection_color.as_deref(), "#60A5FA")
    }

    /// Returns the grid line [`Color`].
    pub fn grid_color(&self) -> Result<Color, String> {
        resolve("grid", self.grid_color.as_deref(), "rgba(255, 255, 255, 0.1)")
    }

    /// Returns the label [`Color`].
    pub fn text_color(&self) -> Result<Color, String> {
        resolve("text", self.text_color.as_deref(), "white")
    }

    /// Returns the label font size in pixels (default 14).
    pub fn font_size(&self) -> f32 {
        self.font_size.unwrap_or(14.0)
    }
}

fn resolve(name: &str, configured: Option<&str>, fallback: &str) -> Result<Color, String> {
    Color::new(configured.unwrap_or(fallback))
        .map_err(|err| format!("Invalid {name} color in config: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [canvas]
            grid_size = 40

            [timeline]
            row_height = 32
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas().grid_size(), 40.0);
        assert_eq!(config.canvas().width(), 1200.0);
        assert_eq!(config.timeline().row_height(), 32.0);
        assert_eq!(config.timeline().track_width(), 800.0);
    }

    #[test]
    fn test_style_fallbacks() {
        let style = StyleConfig::default();
        assert_eq!(style.stroke_color().unwrap().to_string(), "white");
        assert_eq!(style.font_size(), 14.0);
        assert!(style.grid_color().unwrap().alpha() < 1.0);
    }

    #[test]
    fn test_invalid_style_color() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            selection_color = "not-a-color"
            "#,
        )
        .unwrap();

        let err = config.style().selection_color().unwrap_err();
        assert!(err.contains("selection"));
    }
}
