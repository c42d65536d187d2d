//! SVG export of a single scene layer.
//!
//! The walker visits the layer in a fixed order: lines, holes, areas, then
//! items. Holes depend on line geometry, areas are backgrounds for items, and
//! overlay item types (booking markers by default) render after every other
//! item. Each element is resolved through the [`Catalog`], annotated with its
//! semantic `data-*` attributes and folded into a [`BoundsAccumulator`].

mod bounds;
mod document;

pub use bounds::BoundsAccumulator;
pub use document::{DEFAULT_FILE_NAME, SvgExport};

use std::sync::Arc;

use log::{debug, info, trace, warn};

use floorplan_core::{
    color::{Color, palette},
    draw::{DataAttributes, Drawable, LayeredOutput, RenderLayer, Rotation},
    geometry::Bounds,
    scene::{Layer, Properties, Scene, TextField},
};

use crate::{
    catalog::{Catalog, ElementRenderer, Rendered},
    config::ExportConfig,
    export::{self, Exporter},
};

const CUSTOM_ID: TextField = TextField::new("customId", "");

/// Scene element categories, in walk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Line,
    Hole,
    Area,
    Item,
}

impl Category {
    fn name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Hole => "hole",
            Self::Area => "area",
            Self::Item => "item",
        }
    }

    /// Attribute carrying the element's type tag, if the category has one.
    fn type_attribute(self) -> Option<&'static str> {
        match self {
            Self::Line => Some("line-type"),
            Self::Area => Some("area-type"),
            Self::Item => Some("item-type"),
            Self::Hole => None,
        }
    }

    fn render_layer(self) -> RenderLayer {
        match self {
            Self::Line => RenderLayer::Lines,
            Self::Hole => RenderLayer::Holes,
            Self::Area => RenderLayer::Areas,
            Self::Item => RenderLayer::Items,
        }
    }
}

/// Identity of the element being placed.
#[derive(Debug, Clone, Copy)]
struct ElementRef<'a> {
    category: Category,
    id: &'a str,
    kind: &'a str,
    properties: &'a Properties,
}

impl ElementRef<'_> {
    fn custom_id(&self) -> &str {
        CUSTOM_ID.resolve(self.properties)
    }

    /// `id` of the primary primitive: the custom id, else `<category>-<id>`.
    fn dom_id(&self) -> String {
        match self.custom_id() {
            "" => format!("{}-{}", self.category.name(), self.id),
            custom_id => custom_id.to_string(),
        }
    }

    fn attributes(&self) -> DataAttributes {
        let mut attributes = DataAttributes::new()
            .with("element-type", self.category.name())
            .with("element-id", self.id)
            .with_non_empty("custom-id", self.custom_id());
        if let Some(key) = self.category.type_attribute() {
            attributes.set(key, self.kind);
        }
        attributes
    }
}

/// Primitives and bounds of one flattened layer.
#[derive(Debug, Default)]
pub struct Flattened {
    output: LayeredOutput,
    bounds: BoundsAccumulator,
    skipped: usize,
}

impl Flattened {
    /// All emitted primitives, grouped by render layer.
    pub fn output(&self) -> &LayeredOutput {
        &self.output
    }

    /// Content bounds before the margin is applied.
    pub fn content_bounds(&self) -> Option<Bounds> {
        self.bounds.bounds()
    }

    /// Number of elements skipped because of dangling references.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn place(
        &mut self,
        element: ElementRef<'_>,
        rendered: Rendered,
        layer: RenderLayer,
        rotation: Option<Rotation>,
    ) {
        let (primitives, extent) = rendered.into_parts();
        let base = element.attributes();
        let mut dom_id = Some(element.dom_id());

        for primitive in primitives {
            let is_primary = primitive.attributes().get("part").is_none();
            let attributes = base.merged(primitive.attributes());

            let mut primitive = primitive.with_attributes(attributes);
            if rotation.is_some() {
                primitive = primitive.with_rotation(rotation);
            }
            if is_primary && let Some(id) = dom_id.take() {
                primitive = primitive.with_id(id);
            }

            if let Some(bounds) = primitive.bounds() {
                self.bounds.include(bounds);
            }
            self.output.add_to_layer(layer, primitive);
        }

        if let Some(extent) = extent {
            let extent = match rotation {
                Some(rotation) => extent.rotate_around(rotation.center(), rotation.degrees()),
                None => extent,
            };
            self.bounds.include(extent);
        }
    }

    fn skip(&mut self, element: ElementRef<'_>) {
        debug!(
            category = element.category.name(),
            element_id = element.id;
            "Skipping element with dangling reference"
        );
        self.skipped += 1;
    }
}

/// SVG exporter over a renderer [`Catalog`].
#[derive(Debug, Clone)]
pub struct Svg {
    catalog: Arc<Catalog>,
    config: ExportConfig,
    background: Color,
}

impl Svg {
    pub fn new(catalog: Arc<Catalog>, config: ExportConfig) -> Self {
        Self {
            catalog,
            config,
            background: palette::white(),
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Walks `layer` and collects every primitive with its bounds.
    pub fn flatten(&self, layer: &Layer) -> Flattened {
        let mut flattened = Flattened::default();

        for (id, line) in layer.lines() {
            let element = ElementRef {
                category: Category::Line,
                id,
                kind: line.kind(),
                properties: line.properties(),
            };
            let renderer = self.catalog.line_renderer(line.kind());
            self.draw(&mut flattened, element, renderer, line, layer, None);
        }

        for (id, hole) in layer.holes() {
            let element = ElementRef {
                category: Category::Hole,
                id,
                kind: hole.kind(),
                properties: hole.properties(),
            };
            let renderer = self.catalog.hole_renderer();
            self.draw(&mut flattened, element, renderer, hole, layer, None);
        }

        for (id, area) in layer.areas() {
            let element = ElementRef {
                category: Category::Area,
                id,
                kind: area.kind(),
                properties: area.properties(),
            };
            let renderer = self.catalog.area_renderer(area.kind());
            self.draw(&mut flattened, element, renderer, area, layer, None);
        }

        // Stable: overlay types move last, everything else keeps its order.
        let mut items: Vec<_> = layer.items().collect();
        items.sort_by_key(|(_, item)| self.config.is_overlay_type(item.kind()));

        for (id, item) in items {
            let element = ElementRef {
                category: Category::Item,
                id,
                kind: item.kind(),
                properties: item.properties(),
            };
            let renderer = self.catalog.item_renderer(item.kind());
            let rotatable =
                renderer.supports_rotation() || self.config.is_rotatable_type(item.kind());
            let rotation = if rotatable {
                Rotation::from_model_degrees(item.rotation(), item.export_position())
            } else {
                None
            };
            self.draw(&mut flattened, element, renderer, item, layer, rotation);
        }

        debug!(
            primitives = flattened.output.len(),
            skipped = flattened.skipped;
            "Layer flattened"
        );
        flattened
    }

    fn draw<E>(
        &self,
        flattened: &mut Flattened,
        element: ElementRef<'_>,
        renderer: &dyn ElementRenderer<E>,
        source: &E,
        layer: &Layer,
        rotation: Option<Rotation>,
    ) {
        let Some(rendered) = renderer.draw(source, layer) else {
            flattened.skip(element);
            return;
        };

        trace!(
            category = element.category.name(),
            element_id = element.id,
            kind = element.kind,
            primitives = rendered.primitives().len();
            "Element rendered"
        );

        let render_layer = match element.category {
            Category::Item if self.config.is_overlay_type(element.kind) => RenderLayer::Overlays,
            category => category.render_layer(),
        };
        flattened.place(element, rendered, render_layer, rotation);
    }

    /// Frames flattened content and serializes the document.
    pub fn emit(&self, flattened: Flattened) -> SvgExport {
        let frame = flattened
            .bounds
            .finish(self.config.default_canvas().to_bounds(), self.config.margin());
        SvgExport::emit(flattened.output, frame, self.background)
    }
}

impl Exporter for Svg {
    type Output = SvgExport;

    fn export_layer(&self, scene: &Scene, layer_id: &str) -> Result<SvgExport, export::Error> {
        let Some(layer) = scene.layer(layer_id) else {
            warn!(layer_id; "Layer not found in scene");
            return Err(export::Error::MissingLayer(layer_id.to_string()));
        };

        info!(layer_id; "Exporting layer");
        let flattened = self.flatten(layer);
        let export = self.emit(flattened);

        info!(width = export.width(), height = export.height(); "SVG document rendered");
        Ok(export)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use floorplan_core::scene::{Hole, Item, Line};

    fn svg() -> Svg {
        Svg::new(Arc::new(Catalog::builtin()), ExportConfig::default())
    }

    #[test]
    fn test_missing_layer_is_an_error() {
        let scene = Scene::new().with_layer("a", Layer::new());
        let result = svg().export_layer(&scene, "b");
        assert!(matches!(result, Err(export::Error::MissingLayer(id)) if id == "b"));
    }

    #[test]
    fn test_no_selected_layer() {
        let scene = Scene::new().with_layer("a", Layer::new());
        let result = svg().export_selected_layer(&scene);
        assert!(matches!(result, Err(export::Error::NoSelectedLayer)));
    }

    #[test]
    fn test_walk_order_groups_by_category() {
        let layer = Layer::new()
            .with_item("i", Item::new("table", 0.0, 0.0))
            .with_vertex("a", 0.0, 0.0)
            .with_vertex("b", 100.0, 0.0)
            .with_hole("h", Hole::new("door", "l", 25.0))
            .with_line("l", Line::new("wall", "a", "b"));

        let flattened = svg().flatten(&layer);
        let layers: Vec<_> = flattened.output().iter().map(|(layer, _)| layer).collect();
        assert_eq!(
            layers,
            vec![RenderLayer::Lines, RenderLayer::Holes, RenderLayer::Items]
        );
    }

    #[test]
    fn test_primary_primitive_gets_dom_id() {
        let layer = Layer::new().with_item("t1", Item::new("table-with-chairs-4", 0.0, 0.0));
        let flattened = svg().flatten(&layer);

        let ids: Vec<_> = flattened
            .output()
            .iter()
            .filter_map(|(_, primitive)| primitive.id())
            .collect();
        assert_eq!(ids, vec!["item-t1"]);

        for (_, primitive) in flattened.output().iter() {
            assert_eq!(primitive.attributes().get("element-id"), Some("t1"));
            assert_eq!(
                primitive.attributes().get("item-type"),
                Some("table-with-chairs-4")
            );
        }
    }

    #[test]
    fn test_custom_id_wins() {
        let item = Item::new("table", 0.0, 0.0)
            .with_properties(Properties::new().with("customId", "desk-42"));
        let layer = Layer::new().with_item("i", item);

        let flattened = svg().flatten(&layer);
        let (_, primitive) = flattened.output().iter().next().unwrap();
        assert_eq!(primitive.id(), Some("desk-42"));
        assert_eq!(primitive.attributes().get("custom-id"), Some("desk-42"));
    }

    #[test]
    fn test_rotation_only_for_capable_types() {
        let layer = Layer::new()
            .with_item("t", Item::new("table", 0.0, 0.0).with_rotation(90.0))
            .with_item("s", Item::new("sofa", 0.0, 0.0).with_rotation(90.0));
        let flattened = svg().flatten(&layer);

        let rotations: Vec<_> = flattened
            .output()
            .iter()
            .filter(|(_, primitive)| primitive.attributes().get("part").is_none())
            .map(|(_, primitive)| primitive.rotation().map(|rotation| rotation.degrees()))
            .collect();
        assert_eq!(rotations, vec![Some(-90.0), None]);
    }

    #[test]
    fn test_configured_rotation_capability() {
        let config = ExportConfig::default().with_rotatable_item_types(&["sofa"]);
        let svg = Svg::new(Arc::new(Catalog::builtin()), config);
        let layer = Layer::new().with_item("s", Item::new("sofa", 0.0, 0.0).with_rotation(90.0));

        let flattened = svg.flatten(&layer);
        for (_, primitive) in flattened.output().iter() {
            assert!(primitive.rotation().is_some());
        }

        // 70x50 rotated a quarter turn
        let bounds = flattened.content_bounds().unwrap();
        assert_approx_eq!(f32, bounds.width(), 50.0, epsilon = 1e-3);
        assert_approx_eq!(f32, bounds.height(), 70.0, epsilon = 1e-3);
    }

    #[test]
    fn test_overlay_items_render_last() {
        let layer = Layer::new()
            .with_item("b", Item::new("bookable-unit", 0.0, 0.0))
            .with_item("t", Item::new("table", 0.0, 0.0));
        let flattened = svg().flatten(&layer);

        let order: Vec<_> = flattened
            .output()
            .iter()
            .filter_map(|(_, primitive)| primitive.attributes().get("element-id"))
            .collect();
        assert_eq!(order, vec!["t", "b", "b"]);
    }
}
