//! The [`Primitive`] type: one styled, annotated SVG shape.

use svg::node::element as svg_element;

use crate::{
    apply_fill, apply_stroke,
    draw::{DataAttributes, Drawable, FillDefinition, StrokeDefinition, SvgNode, Text},
    geometry::{Bounds, Point, Size},
};

/// An export-space rotation around a pivot, in SVG `rotate()` degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    degrees: f32,
    center: Point,
}

impl Rotation {
    pub fn new(degrees: f32, center: Point) -> Self {
        Self { degrees, center }
    }

    /// Converts a model-space rotation (counter-clockwise, Y-up) into export space.
    ///
    /// The angle is negated because the Y axis is flipped. A zero rotation
    /// yields `None` so that no transform attribute is emitted.
    pub fn from_model_degrees(model_degrees: f32, center: Point) -> Option<Self> {
        if model_degrees == 0.0 {
            None
        } else {
            Some(Self::new(-model_degrees, center))
        }
    }

    pub fn degrees(&self) -> f32 {
        self.degrees
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the SVG `transform` value.
    pub fn to_svg_value(&self) -> String {
        format!(
            "rotate({} {} {})",
            self.degrees,
            self.center.x(),
            self.center.y()
        )
    }
}

/// A vector icon drawn from a fixed path, scaled and centred on a point.
///
/// `origin` is the point of the path's own coordinate system that ends up on
/// `center`.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    path: &'static str,
    center: Point,
    scale_x: f32,
    scale_y: f32,
    origin: Point,
}

impl Icon {
    pub fn new(path: &'static str, center: Point, scale: (f32, f32), origin: Point) -> Self {
        Self {
            path,
            center,
            scale_x: scale.0,
            scale_y: scale.1,
            origin,
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the SVG `transform` value placing the icon.
    pub fn to_svg_transform(&self) -> String {
        format!(
            "translate({}, {}) scale({}, {}) translate({}, {})",
            self.center.x(),
            self.center.y(),
            self.scale_x,
            self.scale_y,
            -self.origin.x(),
            -self.origin.y()
        )
    }
}

/// Geometry of a primitive, in export space.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line { start: Point, end: Point },
    Circle { center: Point, radius: f32 },
    Rect(Bounds),
    Polygon(Vec<Point>),
    Text(Text),
    Icon(Icon),
}

/// A single drawable shape with its style and semantic annotations.
///
/// # Examples
///
/// ```
/// # use floorplan_core::draw::{Drawable, Primitive, Shape};
/// # use floorplan_core::geometry::{Bounds, Point};
/// let marker = Primitive::circle(Point::new(25.0, 0.0), 10.0);
/// assert_eq!(marker.bounds(), Some(Bounds::new(15.0, -10.0, 35.0, 10.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    shape: Shape,
    fill: Option<FillDefinition>,
    stroke: Option<StrokeDefinition>,
    opacity: Option<f32>,
    rotation: Option<Rotation>,
    id: Option<String>,
    attributes: DataAttributes,
}

impl Primitive {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            fill: None,
            stroke: None,
            opacity: None,
            rotation: None,
            id: None,
            attributes: DataAttributes::new(),
        }
    }

    pub fn line(start: Point, end: Point) -> Self {
        Self::new(Shape::Line { start, end })
    }

    pub fn circle(center: Point, radius: f32) -> Self {
        Self::new(Shape::Circle { center, radius })
    }

    /// Axis-aligned rectangle of `size` centred on `center`.
    pub fn rect(center: Point, size: Size) -> Self {
        Self::new(Shape::Rect(center.to_bounds(size)))
    }

    pub fn polygon(points: Vec<Point>) -> Self {
        Self::new(Shape::Polygon(points))
    }

    pub fn text(text: Text) -> Self {
        Self::new(Shape::Text(text))
    }

    pub fn icon(icon: Icon) -> Self {
        Self::new(Shape::Icon(icon))
    }

    pub fn with_fill(mut self, fill: FillDefinition) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the element-wide `opacity` attribute.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_rotation(mut self, rotation: Option<Rotation>) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_attributes(mut self, attributes: DataAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn fill(&self) -> Option<&FillDefinition> {
        self.fill.as_ref()
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }

    pub fn rotation(&self) -> Option<Rotation> {
        self.rotation
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn attributes(&self) -> &DataAttributes {
        &self.attributes
    }

    /// Returns the text of a text primitive.
    pub fn text_content(&self) -> Option<&str> {
        match &self.shape {
            Shape::Text(text) => Some(text.content()),
            _ => None,
        }
    }

    /// Rotated centre of a circle; circles carry no rotate transform.
    fn circle_center(&self, center: Point) -> Point {
        match self.rotation {
            Some(rotation) => center.rotate_around(rotation.center(), rotation.degrees()),
            None => center,
        }
    }

    fn transform(&self) -> Option<String> {
        let rotation = match self.shape {
            Shape::Circle { .. } => None,
            _ => self.rotation.map(|rotation| rotation.to_svg_value()),
        };
        let own = match &self.shape {
            Shape::Icon(icon) => Some(icon.to_svg_transform()),
            _ => None,
        };

        match (rotation, own) {
            (Some(rotation), Some(own)) => Some(format!("{rotation} {own}")),
            (rotation, own) => rotation.or(own),
        }
    }

    fn untransformed_bounds(&self) -> Option<Bounds> {
        match &self.shape {
            Shape::Line { start, end } => Bounds::from_points([*start, *end]),
            Shape::Circle { center, radius } => {
                Some(center.to_bounds(Size::new(radius * 2.0, radius * 2.0)))
            }
            Shape::Rect(bounds) => Some(*bounds),
            Shape::Polygon(points) => Bounds::from_points(points.iter().copied()),
            Shape::Text(_) | Shape::Icon(_) => None,
        }
    }
}

macro_rules! decorate {
    ($element:expr, $primitive:expr) => {{
        let primitive = $primitive;
        let mut elem = $element;

        if let Some(id) = &primitive.id {
            elem = elem.set("id", id.as_str());
        }
        if let Some(opacity) = primitive.opacity {
            elem = elem.set("opacity", opacity);
        }
        if let Some(transform) = primitive.transform() {
            elem = elem.set("transform", transform);
        }
        for (name, value) in primitive.attributes.iter() {
            elem = elem.set(name, value);
        }

        Box::new(elem) as SvgNode
    }};
}

impl Drawable for Primitive {
    fn render_to_svg(&self) -> SvgNode {
        let fill = self.fill.as_ref();
        let stroke = self.stroke.as_ref();

        match &self.shape {
            Shape::Line { start, end } => {
                let line = svg_element::Line::new()
                    .set("x1", start.x())
                    .set("y1", start.y())
                    .set("x2", end.x())
                    .set("y2", end.y());
                decorate!(apply_stroke!(line, stroke), self)
            }
            Shape::Circle { center, radius } => {
                let center = self.circle_center(*center);
                let circle = svg_element::Circle::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", *radius);
                decorate!(apply_stroke!(apply_fill!(circle, fill), stroke), self)
            }
            Shape::Rect(bounds) => {
                let rect = svg_element::Rectangle::new()
                    .set("x", bounds.min_x())
                    .set("y", bounds.min_y())
                    .set("width", bounds.width())
                    .set("height", bounds.height());
                decorate!(apply_stroke!(apply_fill!(rect, fill), stroke), self)
            }
            Shape::Polygon(points) => {
                let points = points
                    .iter()
                    .map(|point| format!("{},{}", point.x(), point.y()))
                    .collect::<Vec<_>>()
                    .join(" ");
                let polygon = svg_element::Polygon::new().set("points", points);
                decorate!(apply_stroke!(apply_fill!(polygon, fill), stroke), self)
            }
            Shape::Text(text) => decorate!(text.to_svg_element(), self),
            Shape::Icon(icon) => {
                let path = svg_element::Path::new().set("d", icon.path());
                decorate!(apply_stroke!(apply_fill!(path, fill), stroke), self)
            }
        }
    }

    fn bounds(&self) -> Option<Bounds> {
        if let Shape::Circle { center, radius } = &self.shape {
            let diameter = radius * 2.0;
            return Some(
                self.circle_center(*center)
                    .to_bounds(Size::new(diameter, diameter)),
            );
        }

        let bounds = self.untransformed_bounds()?;
        Some(match self.rotation {
            Some(rotation) => bounds.rotate_around(rotation.center(), rotation.degrees()),
            None => bounds,
        })
    }
}
