//! Read-only floor-plan scene snapshot.
//!
//! A [`Scene`] maps layer ids to [`Layer`]s. Each layer owns vertices and the
//! elements that reference them: lines (walls, separators), holes (doors and
//! windows placed along a line), areas (room polygons) and items (furniture,
//! labels, functional-area markers).
//!
//! The model deserializes from the editor's scene JSON. Element maps are
//! ordered ([`IndexMap`]) so that iteration is stable and exports are
//! deterministic. Coordinates are model coordinates (Y up); conversion to
//! export space happens in [`Vertex::to_export`] and [`Item::export_position`].
//!
//! # Example
//!
//! ```
//! # use floorplan_core::scene::Scene;
//! let json = r#"{
//!     "selectedLayer": "layer-1",
//!     "layers": {
//!         "layer-1": {
//!             "vertices": {"a": {"x": 0, "y": 0}, "b": {"x": 100, "y": 0}},
//!             "lines": {"w": {"type": "wall", "vertices": ["a", "b"]}}
//!         }
//!     }
//! }"#;
//!
//! let scene = Scene::from_json(json).unwrap();
//! let layer = scene.selected_layer().unwrap();
//! assert_eq!(layer.lines().count(), 1);
//! ```

mod properties;

pub use properties::{
    EnumField, LengthField, Measure, NumberField, Properties, PropertyValue, TextField,
};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::geometry::Point;

/// Errors raised while decoding a scene snapshot.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SceneError {
    /// One-based line and column of the decoding failure.
    pub fn location(&self) -> (usize, usize) {
        match self {
            Self::Json(err) => (err.line(), err.column()),
        }
    }
}

/// Root snapshot of the floor-plan model.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    #[serde(default)]
    layers: IndexMap<String, Layer>,
    #[serde(default)]
    selected_layer: Option<String>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the editor's scene JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] when the input is not valid JSON or does
    /// not match the scene shape.
    pub fn from_json(source: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Adds (or replaces) a layer.
    pub fn with_layer(mut self, id: &str, layer: Layer) -> Self {
        self.layers.insert(id.to_string(), layer);
        self
    }

    /// Marks `id` as the selected layer.
    pub fn with_selected_layer(mut self, id: &str) -> Self {
        self.selected_layer = Some(id.to_string());
        self
    }

    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.get(id)
    }

    pub fn layers(&self) -> impl Iterator<Item = (&str, &Layer)> {
        self.layers.iter().map(|(id, layer)| (id.as_str(), layer))
    }

    pub fn selected_layer_id(&self) -> Option<&str> {
        self.selected_layer.as_deref()
    }

    /// The selected layer, if the selection names an existing layer.
    pub fn selected_layer(&self) -> Option<&Layer> {
        self.selected_layer_id().and_then(|id| self.layer(id))
    }
}

/// A plain model-space point shared by lines and areas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Vertex {
    x: f32,
    y: f32,
}

impl Vertex {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Model point without the Y flip, for model-space arithmetic.
    pub fn to_model_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Export-space position.
    pub fn to_export(self) -> Point {
        Point::from_model(self.x, self.y)
    }
}

/// A wall or separator between two vertices.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Line {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    vertices: Vec<String>,
    #[serde(default)]
    properties: Properties,
}

impl Line {
    pub fn new(kind: &str, start: &str, end: &str) -> Self {
        Self {
            kind: kind.to_string(),
            vertices: vec![start.to_string(), end.to_string()],
            properties: Properties::new(),
        }
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The two endpoint vertex ids, if the line has exactly two.
    pub fn endpoints(&self) -> Option<(&str, &str)> {
        match self.vertices.as_slice() {
            [start, end] => Some((start, end)),
            _ => None,
        }
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

/// A door or window placed at `offset` along its host line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Hole {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    line: String,
    #[serde(default)]
    offset: f32,
    #[serde(default)]
    properties: Properties,
}

impl Hole {
    pub fn new(kind: &str, line: &str, offset: f32) -> Self {
        Self {
            kind: kind.to_string(),
            line: line.to_string(),
            offset,
            properties: Properties::new(),
        }
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    /// Distance from the line's first vertex, in scene units.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

/// A polygonal region bounded by an ordered vertex list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Area {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    vertices: Vec<String>,
    #[serde(default)]
    properties: Properties,
}

impl Area {
    pub fn new(kind: &str, vertices: &[&str]) -> Self {
        Self {
            kind: kind.to_string(),
            vertices: vertices.iter().map(|id| id.to_string()).collect(),
            properties: Properties::new(),
        }
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(String::as_str)
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

/// A freestanding placed element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Item {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    /// Degrees, counter-clockwise in model space.
    #[serde(default)]
    rotation: f32,
    #[serde(default)]
    properties: Properties,
}

impl Item {
    pub fn new(kind: &str, x: f32, y: f32) -> Self {
        Self {
            kind: kind.to_string(),
            x,
            y,
            rotation: 0.0,
            properties: Properties::new(),
        }
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Export-space anchor (centre) of the item.
    pub fn export_position(&self) -> Point {
        Point::from_model(self.x, self.y)
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

/// One layer of the scene.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Layer {
    #[serde(default)]
    vertices: IndexMap<String, Vertex>,
    #[serde(default)]
    lines: IndexMap<String, Line>,
    #[serde(default)]
    holes: IndexMap<String, Hole>,
    #[serde(default)]
    areas: IndexMap<String, Area>,
    #[serde(default)]
    items: IndexMap<String, Item>,
}

impl Layer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vertex(mut self, id: &str, x: f32, y: f32) -> Self {
        self.vertices.insert(id.to_string(), Vertex::new(x, y));
        self
    }

    pub fn with_line(mut self, id: &str, line: Line) -> Self {
        self.lines.insert(id.to_string(), line);
        self
    }

    pub fn with_hole(mut self, id: &str, hole: Hole) -> Self {
        self.holes.insert(id.to_string(), hole);
        self
    }

    pub fn with_area(mut self, id: &str, area: Area) -> Self {
        self.areas.insert(id.to_string(), area);
        self
    }

    pub fn with_item(mut self, id: &str, item: Item) -> Self {
        self.items.insert(id.to_string(), item);
        self
    }

    pub fn vertex(&self, id: &str) -> Option<Vertex> {
        self.vertices.get(id).copied()
    }

    pub fn line(&self, id: &str) -> Option<&Line> {
        self.lines.get(id)
    }

    pub fn lines(&self) -> impl Iterator<Item = (&str, &Line)> {
        self.lines.iter().map(|(id, line)| (id.as_str(), line))
    }

    pub fn holes(&self) -> impl Iterator<Item = (&str, &Hole)> {
        self.holes.iter().map(|(id, hole)| (id.as_str(), hole))
    }

    pub fn areas(&self) -> impl Iterator<Item = (&str, &Area)> {
        self.areas.iter().map(|(id, area)| (id.as_str(), area))
    }

    pub fn items(&self) -> impl Iterator<Item = (&str, &Item)> {
        self.items.iter().map(|(id, item)| (id.as_str(), item))
    }

    /// Resolves both endpoints of a line; `None` if either vertex is missing.
    pub fn line_endpoints(&self, line: &Line) -> Option<(Vertex, Vertex)> {
        let (start, end) = line.endpoints()?;
        Some((self.vertex(start)?, self.vertex(end)?))
    }

    /// Returns `true` if the layer has no drawable elements.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.holes.is_empty()
            && self.areas.is_empty()
            && self.items.is_empty()
    }
}
