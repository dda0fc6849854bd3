//! Color handling for Planboard
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Work items, strokes and canvas styles all carry
//! colors parsed from CSS color strings.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#10B981", "rgb(255, 0, 0)", "white", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use planboard_core::color::Color;
    ///
    /// let completed = Color::new("#10B981").unwrap();
    /// let outline = Color::new("white").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns a sanitized, ID-safe string representation of this color.
    ///
    /// The result contains only alphanumeric characters and underscores and
    /// is used to name per-color SVG marker definitions.
    pub fn to_id_safe_string(self) -> String {
        let color_str = self.to_string();
        let mut sanitized = color_str
            .replace('#', "hex")
            .replace(['(', ')', ',', ' ', ';', '.', '%', '/'], "_");

        // SVG ids must start with a letter
        if sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            sanitized = format!("c_{sanitized}");
        }

        sanitized
    }

    /// Creates a new color with the specified alpha (transparency) value.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#3B82F6").is_ok());
        assert!(Color::new("white").is_ok());

        let err = Color::new("no-such-color").unwrap_err();
        assert!(err.contains("no-such-color"));
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default().to_string(), "black");
    }

    #[test]
    fn test_color_alpha() {
        let color = Color::new("white").unwrap().with_alpha(0.1);
        assert!((color.alpha() - 0.1).abs() < 0.001);
    }

    #[test]
    fn test_id_safe_string() {
        let color = Color::new("#60A5FA").unwrap();
        let id = color.to_id_safe_string();
        assert!(id.chars().all(|c| c.is_alphanumeric() || c == '_'));
        assert!(id.chars().next().is_some_and(|c| c.is_alphabetic()));
    }
}
