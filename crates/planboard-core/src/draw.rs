//! Drawing primitives shared by the canvas and timeline renderers.
//!
//! Everything here produces [`svg`] nodes tagged with a [`RenderLayer`]; the
//! document assembly (size, background, `<defs>`) lives in the `planboard`
//! crate's exporters.

mod layer;
mod shape;
mod stroke;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use shape::{
    LabelPlacement, Outline, ShapeStyle, ShapeVisual, arrowhead_marker, arrowhead_marker_id,
};
pub use stroke::{StrokeDefinition, StrokeStyle};
