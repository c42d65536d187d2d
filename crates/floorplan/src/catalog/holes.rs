//! Door and window markers.

use floorplan_core::{
    color::{Color, palette},
    draw::{FillDefinition, Primitive, StrokeDefinition},
    geometry::Point,
    scene::{Hole, Layer},
};

use super::{Renderer, Rendered};

/// Draws every hole as a fixed-radius marker on its host line.
#[derive(Debug, Clone, Copy)]
pub struct HoleRenderer {
    radius: f32,
}

impl HoleRenderer {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl Default for HoleRenderer {
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// Interpolates the model-space position `offset` units along the host line.
///
/// A zero-length line places the hole on its first vertex.
fn position_on_line(start: Point, end: Point, offset: f32) -> Point {
    let length = start.distance(end);
    if length > 0.0 {
        start.lerp(end, offset / length)
    } else {
        start
    }
}

impl Renderer<Hole> for HoleRenderer {
    type Geometry = Point;
    type Style = (FillDefinition, StrokeDefinition);

    fn geometry(&self, hole: &Hole, layer: &Layer) -> Option<Point> {
        let line = layer.line(hole.line())?;
        let (start, end) = layer.line_endpoints(line)?;
        let position = position_on_line(start.to_model_point(), end.to_model_point(), hole.offset());
        Some(position.flip_y())
    }

    fn style(&self, _hole: &Hole) -> Self::Style {
        (
            FillDefinition::new(palette::hole()),
            StrokeDefinition::new(Color::default(), 1.0),
        )
    }

    fn render(&self, center: &Point, (fill, stroke): &Self::Style) -> Rendered {
        Rendered::new().with(
            Primitive::circle(*center, self.radius)
                .with_fill(*fill)
                .with_stroke(stroke.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ElementRenderer;
    use floorplan_core::{draw::Drawable, geometry::Bounds, scene::Line};

    fn layer() -> Layer {
        Layer::new()
            .with_vertex("a", 0.0, 0.0)
            .with_vertex("b", 100.0, 0.0)
            .with_vertex("c", 0.0, 50.0)
            .with_line("ab", Line::new("wall", "a", "b"))
            .with_line("ac", Line::new("wall", "a", "c"))
            .with_line("aa", Line::new("wall", "a", "a"))
    }

    #[test]
    fn test_hole_interpolates_along_line() {
        let hole = Hole::new("door", "ab", 25.0);
        let center = HoleRenderer::default().geometry(&hole, &layer()).unwrap();
        assert_eq!(center, Point::new(25.0, 0.0));
    }

    #[test]
    fn test_hole_on_vertical_line_is_flipped() {
        let hole = Hole::new("window", "ac", 20.0);
        let center = HoleRenderer::default().geometry(&hole, &layer()).unwrap();
        assert_eq!(center, Point::new(0.0, -20.0));
    }

    #[test]
    fn test_zero_length_line_uses_first_vertex() {
        let hole = Hole::new("door", "aa", 5.0);
        let center = HoleRenderer::default().geometry(&hole, &layer()).unwrap();
        assert_eq!(center, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_marker_bounds() {
        let hole = Hole::new("door", "ab", 25.0);
        let rendered = HoleRenderer::default().draw(&hole, &layer()).unwrap();
        assert_eq!(
            rendered.primitives()[0].bounds(),
            Some(Bounds::new(15.0, -10.0, 35.0, 10.0))
        );
    }

    #[test]
    fn test_missing_line_is_skipped() {
        let hole = Hole::new("door", "nope", 5.0);
        assert!(HoleRenderer::default().draw(&hole, &layer()).is_none());
    }
}
