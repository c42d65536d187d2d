//! Layer-based rendering system for SVG output.
//!
//! Primitives are tagged with a [`RenderLayer`] that mirrors the scene walk
//! order. Rendering groups them into one `<g data-layer="...">` per layer,
//! bottom to top.
//!
//! # Example
//!
//! ```
//! # use floorplan_core::draw::{LayeredOutput, Primitive, RenderLayer};
//! # use floorplan_core::geometry::{Point, Size};
//! let mut output = LayeredOutput::new();
//!
//! output.add_to_layer(RenderLayer::Items, Primitive::rect(Point::default(), Size::new(10.0, 10.0)));
//! output.add_to_layer(RenderLayer::Lines, Primitive::line(Point::default(), Point::new(5.0, 0.0)));
//!
//! // Lines render before items
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

use crate::draw::{Drawable, Primitive};

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// The `Ord` derive uses declaration order, so the first variant renders first (bottom),
/// and the last variant renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Walls and separators
    Lines,
    /// Door and window markers
    Holes,
    /// Room polygons and their labels
    Areas,
    /// Furniture, functional areas and labels
    Items,
    /// Items that must stay on top, such as booking markers
    Overlays,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lines => "lines",
            Self::Holes => "holes",
            Self::Areas => "areas",
            Self::Items => "items",
            Self::Overlays => "overlays",
        }
    }
}

/// Represents primitives grouped by rendering layer.
///
/// Primitives keep their insertion order within a layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, Primitive)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single primitive to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, primitive: Primitive) {
        self.items.push((layer, primitive));
    }

    /// Adds every primitive to the specified layer, in order.
    pub fn extend_layer(
        &mut self,
        layer: RenderLayer,
        primitives: impl IntoIterator<Item = Primitive>,
    ) {
        self.items
            .extend(primitives.into_iter().map(|primitive| (layer, primitive)));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no primitives in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of primitives across all layers.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates primitives in insertion order together with their layer.
    pub fn iter(&self) -> impl Iterator<Item = (RenderLayer, &Primitive)> {
        self.items.iter().map(|(layer, primitive)| (*layer, primitive))
    }

    /// Iterates the primitives of one layer, in insertion order.
    pub fn layer(&self, layer: RenderLayer) -> impl Iterator<Item = &Primitive> {
        self.items
            .iter()
            .filter(move |(candidate, _)| *candidate == layer)
            .map(|(_, primitive)| primitive)
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer. Empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable: keeps insertion order inside a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, primitive) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(primitive.render_to_svg());
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
