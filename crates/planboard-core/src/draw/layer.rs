//! Layer-based rendering for SVG output.
//!
//! Drawing code tags every SVG node with the [`RenderLayer`] it belongs to.
//! [`LayeredOutput`] collects the tagged nodes and emits one `<g>` group per
//! non-empty layer, bottom to top, so that labels and selection rings always
//! paint above shapes regardless of the order elements were drawn in.
//!
//! # Example
//!
//! ```
//! # use planboard_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Rectangle, Text};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Text, Box::new(Text::new("Process")));
//! output.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));
//!
//! // Content renders before Text
//! let groups = output.render();
//! assert_eq!(groups.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas fill and timeline row stripes
    Background,
    /// Grid lines and day ticks
    Grid,
    /// Shapes, arrows and timeline bars
    Content,
    /// Selection highlight and the "today" marker
    Selection,
    /// Labels and captions
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Grid => "grid",
            Self::Content => "content",
            Self::Selection => "selection",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    ///
    /// Nodes keep their insertion order within a layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Appends all nodes from another output.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of nodes tagged with `layer`.
    pub fn layer_len(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes a `<g data-layer="...">` element. The sort
    /// is stable, so nodes within a layer keep their insertion order.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg::node::element::Rectangle;

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_merge() {
        let mut first = LayeredOutput::new();
        first.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));

        let mut second = LayeredOutput::new();
        second.add_to_layer(RenderLayer::Selection, Box::new(Rectangle::new()));

        first.merge(second);
        assert_eq!(first.layer_len(RenderLayer::Selection), 1);
        assert_eq!(first.render().len(), 2);
    }

    #[test]
    fn test_render_orders_layers_bottom_to_top() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));

        let names: Vec<String> = output
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect();

        assert_eq!(names.len(), 3);
        assert!(names[0].contains("data-layer=\"background\""));
        assert!(names[1].contains("data-layer=\"content\""));
        assert!(names[2].contains("data-layer=\"text\""));
    }

    #[test]
    fn test_same_layer_shares_group() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));

        assert_eq!(output.render().len(), 1);
    }
}
