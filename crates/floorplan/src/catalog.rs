//! Renderer catalog.
//!
//! The catalog maps element type tags to renderers. A renderer resolves an
//! element in three steps: its export-space geometry, its visual style, and
//! finally the primitives that draw it. Adding a new element type means
//! registering one renderer under its tag (and any aliases the editor uses).
//!
//! Lookups never fail: unknown line types render as walls, unknown area types
//! as plain rooms, and unknown item types through [`FallbackRenderer`].
//!
//! # Example
//!
//! ```
//! # use floorplan::catalog::Catalog;
//! # use floorplan_core::scene::{Item, Layer};
//! let catalog = Catalog::builtin();
//! let layer = Layer::new();
//!
//! let table = Item::new("table", 0.0, 0.0);
//! let renderer = catalog.item_renderer(table.kind());
//! assert!(renderer.supports_rotation());
//!
//! let rendered = renderer.draw(&table, &layer).unwrap();
//! assert_eq!(rendered.primitives().len(), 1);
//! ```

mod amenities;
mod areas;
mod fallback;
mod furniture;
mod holes;
mod icons;
mod label;
mod lines;
mod zones;

pub use amenities::{AmenityRenderer, BookableUnitRenderer};
pub use areas::AreaRenderer;
pub use fallback::FallbackRenderer;
pub use furniture::{OfficeDeskRenderer, TableRenderer, TableWithChairsRenderer};
pub use holes::HoleRenderer;
pub use label::LabelRenderer;
pub use lines::LineRenderer;
pub use zones::{BackgroundAreaRenderer, OfficeSpaceRenderer};

use std::{fmt, sync::Arc};

use indexmap::IndexMap;

use floorplan_core::{
    draw::{DataAttributes, Primitive},
    geometry::{Bounds, Point, Size},
    scene::{Area, Hole, Item, Layer, LengthField, Line, Properties},
};

/// Primitives produced for one element, plus an optional extra extent.
///
/// The extent covers room the element claims beyond its primitives, such as
/// the padding around furniture with chairs or the estimated footprint of a
/// text-only label.
#[derive(Debug, Default)]
pub struct Rendered {
    primitives: Vec<Primitive>,
    extent: Option<Bounds>,
}

impl Rendered {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, primitive: Primitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    pub fn with_extent(mut self, extent: Bounds) -> Self {
        self.extent = Some(extent);
        self
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn extent(&self) -> Option<Bounds> {
        self.extent
    }

    pub fn into_parts(self) -> (Vec<Primitive>, Option<Bounds>) {
        (self.primitives, self.extent)
    }
}

/// Resolves and draws one kind of scene element.
///
/// The first primitive without a `data-part` attribute is the element's
/// primary primitive; secondary primitives (labels, chairs, icons) carry a
/// `data-part` marker, see [`part`].
pub trait Renderer<E>: Send + Sync + fmt::Debug {
    type Geometry;
    type Style;

    /// Resolves export-space geometry.
    ///
    /// Returns `None` when the element references missing vertices or lines;
    /// such elements are skipped.
    fn geometry(&self, element: &E, layer: &Layer) -> Option<Self::Geometry>;

    /// Resolves the visual style from the element's properties.
    fn style(&self, element: &E) -> Self::Style;

    /// Emits the primitives for resolved geometry and style.
    fn render(&self, geometry: &Self::Geometry, style: &Self::Style) -> Rendered;

    /// Whether the element's rotation is applied on export.
    fn supports_rotation(&self) -> bool {
        false
    }
}

/// Object-safe view of a [`Renderer`], as stored in the [`Catalog`].
pub trait ElementRenderer<E>: Send + Sync + fmt::Debug {
    /// Runs geometry, style and render; `None` if the element is skipped.
    fn draw(&self, element: &E, layer: &Layer) -> Option<Rendered>;

    fn supports_rotation(&self) -> bool;
}

impl<E, R> ElementRenderer<E> for R
where
    R: Renderer<E>,
{
    fn draw(&self, element: &E, layer: &Layer) -> Option<Rendered> {
        let geometry = self.geometry(element, layer)?;
        let style = self.style(element);
        Some(self.render(&geometry, &style))
    }

    fn supports_rotation(&self) -> bool {
        <R as Renderer<E>>::supports_rotation(self)
    }
}

type Registry<E> = IndexMap<String, Arc<dyn ElementRenderer<E>>>;

/// Registry of renderers keyed by element type tag.
#[derive(Debug, Clone)]
pub struct Catalog {
    lines: Registry<Line>,
    default_line: Arc<dyn ElementRenderer<Line>>,
    hole: Arc<dyn ElementRenderer<Hole>>,
    areas: Registry<Area>,
    default_area: Arc<dyn ElementRenderer<Area>>,
    items: Registry<Item>,
    fallback_item: Arc<dyn ElementRenderer<Item>>,
}

impl Catalog {
    /// Creates a catalog with only the defaults: walls, hole markers, plain
    /// rooms and the fallback item renderer.
    pub fn new() -> Self {
        Self {
            lines: IndexMap::new(),
            default_line: Arc::new(LineRenderer::wall()),
            hole: Arc::new(HoleRenderer::default()),
            areas: IndexMap::new(),
            default_area: Arc::new(AreaRenderer::room()),
            items: IndexMap::new(),
            fallback_item: Arc::new(FallbackRenderer::default()),
        }
    }

    /// Creates the catalog of every built-in element type.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();

        catalog.register_line(&["wall"], LineRenderer::wall());
        catalog.register_line(&["internal-separator", "separator"], LineRenderer::separator());

        catalog.register_area(&["area", "room"], AreaRenderer::room());
        catalog.register_area(&["office-area"], AreaRenderer::office());

        catalog.register_item(&["office-space"], OfficeSpaceRenderer);
        catalog.register_item(&["background-area"], BackgroundAreaRenderer);
        catalog.register_item(&["coffee-area"], AmenityRenderer::coffee());
        catalog.register_item(&["bathroom-area"], AmenityRenderer::bathroom());
        catalog.register_item(&["phonebooth-area"], AmenityRenderer::phonebooth());
        catalog.register_item(&["bookable-unit"], BookableUnitRenderer::default());
        catalog.register_item(&["label"], LabelRenderer);
        catalog.register_item(&["table"], TableRenderer);
        catalog.register_item(&["office-desk", "office desk"], OfficeDeskRenderer);
        catalog.register_item(
            &["table-with-chairs-4", "table with chairs (4 person)"],
            TableWithChairsRenderer::four(),
        );
        catalog.register_item(
            &["table-with-chairs-6", "table with chairs (6 person)"],
            TableWithChairsRenderer::six(),
        );

        catalog
    }

    /// Registers `renderer` for line types `tags`, replacing earlier entries.
    pub fn register_line<R>(&mut self, tags: &[&str], renderer: R)
    where
        R: ElementRenderer<Line> + 'static,
    {
        register(&mut self.lines, tags, Arc::new(renderer));
    }

    /// Registers `renderer` for area types `tags`, replacing earlier entries.
    pub fn register_area<R>(&mut self, tags: &[&str], renderer: R)
    where
        R: ElementRenderer<Area> + 'static,
    {
        register(&mut self.areas, tags, Arc::new(renderer));
    }

    /// Registers `renderer` for item types `tags`, replacing earlier entries.
    pub fn register_item<R>(&mut self, tags: &[&str], renderer: R)
    where
        R: ElementRenderer<Item> + 'static,
    {
        register(&mut self.items, tags, Arc::new(renderer));
    }

    pub fn line_renderer(&self, kind: &str) -> &dyn ElementRenderer<Line> {
        self.lines.get(kind).unwrap_or(&self.default_line).as_ref()
    }

    pub fn hole_renderer(&self) -> &dyn ElementRenderer<Hole> {
        self.hole.as_ref()
    }

    pub fn area_renderer(&self, kind: &str) -> &dyn ElementRenderer<Area> {
        self.areas.get(kind).unwrap_or(&self.default_area).as_ref()
    }

    pub fn item_renderer(&self, kind: &str) -> &dyn ElementRenderer<Item> {
        self.items.get(kind).unwrap_or(&self.fallback_item).as_ref()
    }

    /// Returns `true` if `kind` has a dedicated item renderer.
    pub fn has_item_type(&self, kind: &str) -> bool {
        self.items.contains_key(kind)
    }

    /// Registered item type tags, in registration order.
    pub fn item_types(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn register<E>(registry: &mut Registry<E>, tags: &[&str], renderer: Arc<dyn ElementRenderer<E>>) {
    for tag in tags {
        registry.insert(tag.to_string(), Arc::clone(&renderer));
    }
}

/// Marks a secondary primitive of an element (`data-part`).
pub fn part(name: &str) -> DataAttributes {
    DataAttributes::new().with("part", name)
}

/// Centre and size of a rectangular item, in export space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    center: Point,
    size: Size,
}

impl Placement {
    pub fn new(center: Point, size: Size) -> Self {
        Self { center, size }
    }

    /// Places `item` with the size resolved from `footprint`.
    pub fn of_item(item: &Item, footprint: Footprint) -> Self {
        Self::new(item.export_position(), footprint.resolve(item.properties()))
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The nominal footprint, centred on the item.
    pub fn bounds(&self) -> Bounds {
        self.center.to_bounds(self.size)
    }
}

/// Rectangular size read from `width`/`height`, else `width`/`depth`, else a default.
///
/// A dimension pair is only used when both of its properties are present.
#[derive(Debug, Clone, Copy)]
pub struct Footprint {
    width: f32,
    height: f32,
}

impl Footprint {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn resolve(&self, properties: &Properties) -> Size {
        let width = LengthField::new("width", self.width);

        if properties.has("width") && properties.has("height") {
            let height = LengthField::new("height", self.height);
            Size::new(width.resolve(properties), height.resolve(properties))
        } else if properties.has("width") && properties.has("depth") {
            let depth = LengthField::new("depth", self.height);
            Size::new(width.resolve(properties), depth.resolve(properties))
        } else {
            Size::new(self.width, self.height)
        }
    }
}
