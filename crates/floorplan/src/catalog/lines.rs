//! Walls and internal separators.

use floorplan_core::{
    color::{Color, palette},
    draw::{Primitive, StrokeDefinition, StrokeStyle},
    geometry::Point,
    scene::{Layer, Line},
};

use super::{Renderer, Rendered};

/// Export-space endpoints of a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// Draws a line as a single stroked segment.
#[derive(Debug, Clone)]
pub struct LineRenderer {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl LineRenderer {
    /// Thick solid wall.
    pub fn wall() -> Self {
        Self {
            color: palette::wall(),
            width: 4.0,
            style: StrokeStyle::Solid,
        }
    }

    /// Thin long-dashed internal separator.
    pub fn separator() -> Self {
        Self {
            color: palette::separator(),
            width: 2.0,
            style: StrokeStyle::LongDashed,
        }
    }
}

impl Renderer<Line> for LineRenderer {
    type Geometry = Segment;
    type Style = StrokeDefinition;

    fn geometry(&self, line: &Line, layer: &Layer) -> Option<Segment> {
        let (start, end) = layer.line_endpoints(line)?;
        Some(Segment {
            start: start.to_export(),
            end: end.to_export(),
        })
    }

    fn style(&self, _line: &Line) -> StrokeDefinition {
        StrokeDefinition::new(self.color, self.width).with_style(self.style.clone())
    }

    fn render(&self, segment: &Segment, stroke: &StrokeDefinition) -> Rendered {
        Rendered::new().with(Primitive::line(segment.start, segment.end).with_stroke(stroke.clone()))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::catalog::ElementRenderer;

    fn layer() -> Layer {
        Layer::new()
            .with_vertex("a", 0.0, 10.0)
            .with_vertex("b", 100.0, 10.0)
    }

    #[test]
    fn test_wall_flips_endpoints() {
        let line = Line::new("wall", "a", "b");
        let segment = LineRenderer::wall().geometry(&line, &layer()).unwrap();

        assert_eq!(segment.start, Point::new(0.0, -10.0));
        assert_eq!(segment.end, Point::new(100.0, -10.0));
    }

    #[test]
    fn test_separator_is_dashed() {
        let line = Line::new("internal-separator", "a", "b");
        let stroke = LineRenderer::separator().style(&line);

        assert_eq!(stroke.style(), &StrokeStyle::LongDashed);
        assert_approx_eq!(f32, stroke.width(), 2.0);
        assert_eq!(stroke.color(), palette::separator());
    }

    #[test]
    fn test_dangling_vertex_is_skipped() {
        let line = Line::new("wall", "a", "missing");
        assert!(LineRenderer::wall().draw(&line, &layer()).is_none());
    }
}
