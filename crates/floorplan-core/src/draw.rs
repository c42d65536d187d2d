//! Drawing primitives for floor-plan export.
//!
//! Every element of a scene is flattened into one or more [`Primitive`]s.
//! A primitive knows its own export-space geometry, its visual style and the
//! semantic `data-*` attributes that downstream tooling relies on. All
//! primitives implement the [`Drawable`] trait, which provides a consistent
//! interface for rendering to SVG and calculating bounds.

mod attributes;
mod fill;
mod layer;
mod primitive;
mod stroke;
mod text;

pub use attributes::DataAttributes;
pub use fill::FillDefinition;
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use primitive::{Icon, Primitive, Rotation, Shape};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{FontWeight, Text, TextDefinition};

use crate::geometry::Bounds;

/// Something that can be rendered into an SVG node.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable into a standalone SVG node.
    fn render_to_svg(&self) -> SvgNode;

    /// Export-space bounds of the rendered geometry, after any transform.
    ///
    /// Returns `None` for drawables whose extent is not tracked (text, icons).
    fn bounds(&self) -> Option<Bounds>;
}
