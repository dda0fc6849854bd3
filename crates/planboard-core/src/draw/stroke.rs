//! Stroke definitions for outlines, connectors and grid lines.
//!
//! [`StrokeDefinition`] bundles a color, a width and a dash [`StrokeStyle`].
//! Use the [`apply_stroke!`](crate::apply_stroke!) macro to copy all of them
//! onto an SVG element.
//!
//! ```
//! use planboard_core::color::Color;
//! use planboard_core::draw::StrokeDefinition;
//! use svg::node::element as svg_element;
//!
//! let outline = StrokeDefinition::solid(Color::new("white").unwrap(), 2.0);
//! let rect = svg_element::Rectangle::new().set("width", 100).set("height", 50);
//! let rect = planboard_core::apply_stroke!(rect, &outline);
//! ```

use crate::color::Color;

/// Dash pattern of a stroke.
///
/// - `Solid`: no `stroke-dasharray`
/// - `Dashed`: "5,5"
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5"),
        }
    }
}

/// Color, width and dash pattern of a line.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a dashed stroke.
    pub fn dashed(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Dashed,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets `stroke`, `stroke-opacity`, `stroke-width` and, for patterned styles,
/// `stroke-dasharray`.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element as svg_element;

    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_apply_stroke_sets_dasharray_only_for_patterns() {
        let solid = StrokeDefinition::solid(Color::new("white").unwrap(), 2.0);
        let line = crate::apply_stroke!(svg_element::Line::new(), &solid).to_string();
        assert!(line.contains("stroke-width=\"2\""));
        assert!(!line.contains("stroke-dasharray"));

        let dashed = StrokeDefinition::dashed(solid.color(), 1.5);
        let line = crate::apply_stroke!(svg_element::Line::new(), &dashed).to_string();
        assert!(line.contains("stroke-dasharray=\"5,5\""));
    }
}
