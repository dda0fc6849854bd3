//! Visual mapping for canvas shape kinds.
//!
//! [`ShapeVisual`] is the pure mapping from a [`ShapeKind`] to the geometry it
//! is drawn with. [`ShapeStyle`] turns an element and its visual into SVG
//! nodes. Nothing here feeds back into the canvas model.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    canvas::{ShapeElement, ShapeKind},
    color::Color,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Bounds, Point},
};

/// Side length of the arrowhead marker, in pixels.
const ARROWHEAD_LENGTH: f32 = 10.0;

/// Reference box the stick figure is designed in.
const ACTOR_BOX: (f32, f32) = (80.0, 100.0);

/// Space between an element and its selection ring.
const SELECTION_GAP: f32 = 2.0;

/// Outline used by bordered shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outline {
    Rectangle,
    Ellipse,
    /// A rectangle rotated 45° about its centre.
    Diamond,
}

/// Where an element's label is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPlacement {
    /// Centred on the element, always upright.
    Centered,
    /// Below the element's box.
    Below,
    /// Not drawn.
    Hidden,
}

/// How a shape kind is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeVisual {
    Bordered(Outline),
    StickFigure,
    Arrow,
    Label,
}

impl ShapeVisual {
    /// Returns the label placement for this visual.
    pub fn label_placement(self) -> LabelPlacement {
        match self {
            Self::Bordered(_) | Self::Label => LabelPlacement::Centered,
            Self::StickFigure => LabelPlacement::Below,
            Self::Arrow => LabelPlacement::Hidden,
        }
    }

    /// Returns the rotation of the shape body in degrees.
    pub fn rotation(self) -> f32 {
        match self {
            Self::Bordered(Outline::Diamond) => 45.0,
            _ => 0.0,
        }
    }
}

impl From<ShapeKind> for ShapeVisual {
    fn from(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Rectangle => Self::Bordered(Outline::Rectangle),
            ShapeKind::Oval => Self::Bordered(Outline::Ellipse),
            ShapeKind::Diamond => Self::Bordered(Outline::Diamond),
            ShapeKind::Arrow => Self::Arrow,
            ShapeKind::Text => Self::Label,
            ShapeKind::Actor => Self::StickFigure,
        }
    }
}

/// Returns the SVG id of the arrowhead marker for a stroke color.
pub fn arrowhead_marker_id(color: Color) -> String {
    format!("arrowhead-{}", color.to_id_safe_string())
}

/// Builds the arrowhead marker definition for a stroke color.
///
/// Arrow lines reference it through `marker-end`; the renderer places it in
/// the document's `<defs>`.
pub fn arrowhead_marker(color: Color) -> svg_element::Marker {
    let head = svg_element::Polygon::new()
        .set("points", "0 0, 10 3.5, 0 7")
        .set("fill", color.to_string());

    svg_element::Marker::new()
        .set("id", arrowhead_marker_id(color))
        .set("markerWidth", ARROWHEAD_LENGTH)
        .set("markerHeight", 7)
        .set("refX", 9)
        .set("refY", 3.5)
        .set("orient", "auto")
        .add(head)
}

/// Visual parameters shared by every canvas element.
#[derive(Debug, Clone)]
pub struct ShapeStyle {
    stroke: StrokeDefinition,
    text_color: Color,
    font_size: f32,
    selection: StrokeDefinition,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        let white = Color::new("white").expect("'white' is a valid CSS color");
        let highlight = Color::new("#60A5FA").expect("valid hex color");
        Self {
            stroke: StrokeDefinition::solid(white, 2.0),
            text_color: white,
            font_size: 14.0,
            selection: StrokeDefinition::solid(highlight, 2.0),
        }
    }
}

impl ShapeStyle {
    pub fn new(stroke: StrokeDefinition, text_color: Color, selection: StrokeDefinition) -> Self {
        Self {
            stroke,
            text_color,
            selection,
            ..Self::default()
        }
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn selection(&self) -> &StrokeDefinition {
        &self.selection
    }

    /// Draws one element, adding a highlight ring when `selected`.
    pub fn render_element(&self, element: &ShapeElement, selected: bool) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let bounds = element.bounds();
        let visual = ShapeVisual::from(element.kind());

        let body: Option<Box<dyn svg::Node>> = match visual {
            ShapeVisual::Bordered(outline) => Some(self.render_outline(outline, bounds)),
            ShapeVisual::StickFigure => Some(Box::new(self.render_stick_figure(bounds))),
            ShapeVisual::Arrow => Some(Box::new(self.render_arrow(bounds))),
            ShapeVisual::Label => None,
        };
        if let Some(body) = body {
            output.add_to_layer(RenderLayer::Content, body);
        }

        let anchor = match visual.label_placement() {
            LabelPlacement::Centered => Some(bounds.center()),
            LabelPlacement::Below => Some(Point::new(
                bounds.center().x(),
                bounds.max_y() + self.font_size,
            )),
            LabelPlacement::Hidden => None,
        };
        if let Some(anchor) = anchor.filter(|_| !element.text().is_empty()) {
            output.add_to_layer(
                RenderLayer::Text,
                Box::new(self.render_label(element.text(), anchor)),
            );
        }

        if selected {
            let ring_bounds = bounds.expand(SELECTION_GAP);
            let ring = svg_element::Rectangle::new()
                .set("x", ring_bounds.min_x())
                .set("y", ring_bounds.min_y())
                .set("width", ring_bounds.width())
                .set("height", ring_bounds.height())
                .set("fill", "none");
            output.add_to_layer(
                RenderLayer::Selection,
                Box::new(apply_stroke!(ring, &self.selection)),
            );
        }

        output
    }

    fn render_outline(&self, outline: Outline, bounds: Bounds) -> Box<dyn svg::Node> {
        let center = bounds.center();
        match outline {
            Outline::Rectangle => {
                let rect = rectangle(bounds).set("fill", "none");
                Box::new(apply_stroke!(rect, &self.stroke))
            }
            Outline::Ellipse => {
                let ellipse = svg_element::Ellipse::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("rx", bounds.width() / 2.0)
                    .set("ry", bounds.height() / 2.0)
                    .set("fill", "none");
                Box::new(apply_stroke!(ellipse, &self.stroke))
            }
            Outline::Diamond => {
                let rotation = ShapeVisual::Bordered(Outline::Diamond).rotation();
                let rect = rectangle(bounds).set("fill", "none").set(
                    "transform",
                    format!("rotate({rotation} {} {})", center.x(), center.y()),
                );
                Box::new(apply_stroke!(rect, &self.stroke))
            }
        }
    }

    fn render_stick_figure(&self, bounds: Bounds) -> svg_element::Group {
        let sx = bounds.width() / ACTOR_BOX.0;
        let sy = bounds.height() / ACTOR_BOX.1;
        let at = |x: f32, y: f32| Point::new(bounds.min_x() + x * sx, bounds.min_y() + y * sy);

        let head_center = at(40.0, 15.0);
        let head = svg_element::Circle::new()
            .set("cx", head_center.x())
            .set("cy", head_center.y())
            .set("r", 10.0 * sx.min(sy))
            .set("fill", "none");

        let mut group = svg_element::Group::new()
            .set("class", "actor")
            .add(apply_stroke!(head, &self.stroke));

        let limbs = [
            ((40.0, 25.0), (40.0, 70.0)),
            ((40.0, 35.0), (20.0, 50.0)),
            ((40.0, 35.0), (60.0, 50.0)),
            ((40.0, 70.0), (25.0, 90.0)),
            ((40.0, 70.0), (55.0, 90.0)),
        ];
        for ((x1, y1), (x2, y2)) in limbs {
            let from = at(x1, y1);
            let to = at(x2, y2);
            group = group.add(apply_stroke!(line(from, to), &self.stroke));
        }

        group
    }

    fn render_arrow(&self, bounds: Bounds) -> svg_element::Line {
        let mid_y = bounds.center().y();
        let from = Point::new(bounds.min_x(), mid_y);
        let to = Point::new(bounds.max_x() - ARROWHEAD_LENGTH, mid_y);

        apply_stroke!(line(from, to), &self.stroke).set(
            "marker-end",
            format!("url(#{})", arrowhead_marker_id(self.stroke.color())),
        )
    }

    fn render_label(&self, text: &str, anchor: Point) -> svg_element::Text {
        svg_element::Text::new(text)
            .set("x", anchor.x())
            .set("y", anchor.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-family", "sans-serif")
            .set("font-size", self.font_size)
            .set("font-weight", 500)
            .set("fill", self.text_color.to_string())
    }
}

fn rectangle(bounds: Bounds) -> svg_element::Rectangle {
    svg_element::Rectangle::new()
        .set("x", bounds.min_x())
        .set("y", bounds.min_y())
        .set("width", bounds.width())
        .set("height", bounds.height())
}

fn line(from: Point, to: Point) -> svg_element::Line {
    svg_element::Line::new()
        .set("x1", from.x())
        .set("y1", from.y())
        .set("x2", to.x())
        .set("y2", to.y())
}
