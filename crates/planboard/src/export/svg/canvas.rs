//! SVG rendering for the diagram canvas.

use log::{debug, info};
use svg::node::element::{self as svg_element, path::Data};

use planboard_core::{
    apply_stroke,
    canvas::Canvas,
    draw::{self, LayeredOutput, RenderLayer},
    geometry::Size,
};

use super::Svg;

const GRID_PATTERN_ID: &str = "grid";

impl Svg {
    /// Renders the canvas, its elements and the selection ring.
    pub fn render_canvas(&self, canvas: &Canvas) -> svg::Document {
        let size = self.canvas_document_size(canvas);
        info!(
            elements = canvas.len(),
            width = size.width(),
            height = size.height();
            "Rendering canvas"
        );

        let defs = svg_element::Definitions::new()
            .add(self.grid_pattern())
            .add(draw::arrowhead_marker(self.shape_style.stroke().color()));

        let mut output = LayeredOutput::new();
        output.add_to_layer(
            RenderLayer::Background,
            Box::new(Self::full_rect(size).set("fill", self.background.to_string())),
        );
        output.add_to_layer(
            RenderLayer::Grid,
            Box::new(Self::full_rect(size).set("fill", format!("url(#{GRID_PATTERN_ID})"))),
        );

        let selected = canvas.selected();
        for element in canvas.elements() {
            debug!(element_id:% = element.id(), kind:% = element.kind(); "Rendering element");
            let is_selected = selected == Some(element.id());
            output.merge(self.shape_style.render_element(element, is_selected));
        }

        output
            .render()
            .into_iter()
            .fold(Self::document(size).add(defs), |doc, group| doc.add(group))
    }

    /// Returns the configured viewport grown to fit every element.
    fn canvas_document_size(&self, canvas: &Canvas) -> Size {
        canvas.bounds().map_or(self.viewport, |bounds| {
            self.viewport.max(Size::new(bounds.max_x(), bounds.max_y()))
        })
    }

    fn grid_pattern(&self) -> svg_element::Pattern {
        let cell = self.grid_size;
        let data = Data::new()
            .move_to((cell, 0.0))
            .line_to((0.0, 0.0))
            .line_to((0.0, cell));
        let path = svg_element::Path::new().set("d", data).set("fill", "none");

        svg_element::Pattern::new()
            .set("id", GRID_PATTERN_ID)
            .set("width", cell)
            .set("height", cell)
            .set("patternUnits", "userSpaceOnUse")
            .add(apply_stroke!(path, &self.grid))
    }
}

#[cfg(test)]
mod tests {
    use planboard_core::{canvas::ShapeKind, geometry::Point};

    use super::*;
    use crate::{config::StyleConfig, export::svg::SvgBuilder};

    #[test]
    fn test_empty_canvas_has_background_and_grid() {
        let svg = SvgBuilder::new().build().unwrap();
        let doc = svg.render_canvas(&Canvas::new()).to_string();

        assert!(doc.contains("width=\"1200\""));
        assert!(doc.contains("id=\"grid\""));
        assert!(doc.contains("data-layer=\"background\""));
        assert!(!doc.contains("data-layer=\"content\""));
    }

    #[test]
    fn test_document_grows_to_fit_elements() {
        let svg = SvgBuilder::new().build().unwrap();
        let mut canvas = Canvas::new();
        canvas.add_element(
            ShapeKind::Rectangle,
            Point::new(1500.0, 100.0),
            Size::new(100.0, 50.0),
            "Far away",
        );

        let size = svg.canvas_document_size(&canvas);
        assert_eq!(size.width(), 1600.0);
        assert_eq!(size.height(), 800.0);
    }

    #[test]
    fn test_selected_element_has_ring() {
        let svg = SvgBuilder::new().build().unwrap();
        let mut canvas = Canvas::new();
        let id = canvas.add_element(
            ShapeKind::Oval,
            Point::new(10.0, 10.0),
            Size::new(100.0, 50.0),
            "Label",
        );

        let doc = svg.render_canvas(&canvas).to_string();
        assert!(!doc.contains("data-layer=\"selection\""));

        canvas.select(id);
        let doc = svg.render_canvas(&canvas).to_string();
        assert!(doc.contains("data-layer=\"selection\""));
    }

    #[test]
    fn test_configured_font_size_reaches_labels() {
        let style: StyleConfig = toml::from_str("font_size = 18").unwrap();
        let svg = SvgBuilder::new().with_style(&style).build().unwrap();
        let mut canvas = Canvas::new();
        canvas.add_element(
            ShapeKind::Rectangle,
            Point::new(10.0, 10.0),
            Size::new(100.0, 50.0),
            "Process",
        );

        let doc = svg.render_canvas(&canvas).to_string();
        assert!(doc.contains("font-size=\"18\""));
        assert!(!doc.contains("font-size=\"14\""));
    }
}
