//! Shape elements placed on the diagram canvas.
//!
//! A [`ShapeElement`] is a positioned, typed, labelled unit. Its kind is a
//! closed set ([`ShapeKind`]) and only decides how the element is drawn; the
//! per-kind creation defaults live in [`ShapeTemplate`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Point, Size};

/// Identifier of an element on a canvas.
///
/// Ids are allocated by the owning [`Canvas`](super::Canvas) from a monotonic
/// counter and are never reused, even after the element is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    /// Wraps a raw id value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of shape kinds a canvas element can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Oval,
    Diamond,
    Arrow,
    Text,
    Actor,
}

impl ShapeKind {
    /// All kinds, in tool-palette order.
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Rectangle,
        ShapeKind::Oval,
        ShapeKind::Diamond,
        ShapeKind::Arrow,
        ShapeKind::Text,
        ShapeKind::Actor,
    ];

    /// Returns the lowercase identifier of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Oval => "oval",
            Self::Diamond => "diamond",
            Self::Arrow => "arrow",
            Self::Text => "text",
            Self::Actor => "actor",
        }
    }

    /// Returns the creation defaults for this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planboard_core::canvas::ShapeKind;
    /// let template = ShapeKind::Actor.template();
    /// assert_eq!(template.size().width(), 80.0);
    /// assert_eq!(template.size().height(), 100.0);
    /// assert_eq!(template.label(), "Actor");
    /// ```
    pub fn template(self) -> ShapeTemplate {
        match self {
            Self::Actor => ShapeTemplate::new(Size::new(80.0, 100.0), "Actor"),
            Self::Arrow => ShapeTemplate::new(Size::new(100.0, 20.0), ""),
            Self::Text => ShapeTemplate::new(Size::new(100.0, 50.0), "Text"),
            Self::Rectangle | Self::Oval | Self::Diamond => {
                ShapeTemplate::new(Size::new(100.0, 50.0), "Label")
            }
        }
    }

    /// Returns true if elements of this kind carry an editable label.
    pub fn has_label(self) -> bool {
        !matches!(self, Self::Arrow)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed size and default label given to a freshly created element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeTemplate {
    size: Size,
    label: &'static str,
}

impl ShapeTemplate {
    fn new(size: Size, label: &'static str) -> Self {
        Self { size, label }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

/// A shape element on the canvas.
///
/// The position is the element's top-left corner. The size is fixed when the
/// element is created and has no setter.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeElement {
    id: ElementId,
    kind: ShapeKind,
    position: Point,
    size: Size,
    text: String,
}

impl ShapeElement {
    /// Creates an element with explicit geometry and label.
    pub fn new(
        id: ElementId,
        kind: ShapeKind,
        position: Point,
        size: Size,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            position,
            size,
            text: text.into(),
        }
    }

    /// Creates an element of `kind` using the kind's template, with its
    /// top-left corner at `position`.
    pub fn from_template(id: ElementId, kind: ShapeKind, position: Point) -> Self {
        let template = kind.template();
        Self::new(id, kind, position, template.size(), template.label())
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Returns the top-left corner of the element.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the element's label.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the axis-aligned bounding box of the element.
    pub fn bounds(&self) -> Bounds {
        self.position.to_bounds(self.size)
    }

    /// Returns the centre of the element's bounding box.
    pub fn center(&self) -> Point {
        self.position.add_point(self.size.half())
    }

    pub(super) fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub(super) fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_template_table() {
        let expectations = [
            (ShapeKind::Rectangle, 100.0, 50.0, "Label"),
            (ShapeKind::Oval, 100.0, 50.0, "Label"),
            (ShapeKind::Diamond, 100.0, 50.0, "Label"),
            (ShapeKind::Arrow, 100.0, 20.0, ""),
            (ShapeKind::Text, 100.0, 50.0, "Text"),
            (ShapeKind::Actor, 80.0, 100.0, "Actor"),
        ];

        for (kind, width, height, label) in expectations {
            let template = kind.template();
            assert_approx_eq!(f32, template.size().width(), width);
            assert_approx_eq!(f32, template.size().height(), height);
            assert_eq!(template.label(), label, "label for {kind}");
        }
    }

    #[test]
    fn test_only_arrow_has_no_label() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.has_label(), kind != ShapeKind::Arrow);
        }
    }

    #[test]
    fn test_element_center() {
        let element =
            ShapeElement::from_template(ElementId::new(1), ShapeKind::Actor, Point::new(10.0, 20.0));
        assert_eq!(element.center(), Point::new(50.0, 70.0));
        assert_eq!(element.text(), "Actor");
    }

    #[test]
    fn test_kind_names_round_trip_through_serde_names() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.to_string(), kind.name());
        }
    }
}
