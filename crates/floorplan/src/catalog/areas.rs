//! Room polygons and labelled office areas.

use floorplan_core::{
    color::palette,
    draw::{FillDefinition, Primitive, StrokeDefinition, Text, TextDefinition},
    geometry::Point,
    scene::{Area, Layer, TextField},
};

use super::{Renderer, Rendered, part};

const OFFICE_LABEL: TextField = TextField::new("officeLabel", "OFFICE");

/// Polygon outline and label anchor of an area.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaGeometry {
    pub points: Vec<Point>,
    pub centroid: Point,
}

#[derive(Debug, Clone)]
pub struct AreaStyle {
    fill: FillDefinition,
    border: Option<StrokeDefinition>,
    label: Option<String>,
}

/// Draws an area as a filled polygon, optionally bordered and labelled.
#[derive(Debug, Clone, Copy)]
pub struct AreaRenderer {
    office: bool,
}

impl AreaRenderer {
    /// Plain filled room, no border, no label.
    pub fn room() -> Self {
        Self { office: false }
    }

    /// Office area: dashed border and a centred `officeLabel` heading.
    pub fn office() -> Self {
        Self { office: true }
    }
}

impl Renderer<Area> for AreaRenderer {
    type Geometry = AreaGeometry;
    type Style = AreaStyle;

    fn geometry(&self, area: &Area, layer: &Layer) -> Option<AreaGeometry> {
        let vertices = area
            .vertices()
            .map(|id| layer.vertex(id))
            .collect::<Option<Vec<_>>>()?;
        if vertices.is_empty() {
            return None;
        }

        // Mean of model coordinates; only the anchor is flipped.
        let count = vertices.len() as f32;
        let (sum_x, sum_y) = vertices
            .iter()
            .fold((0.0, 0.0), |(x, y), vertex| (x + vertex.x(), y + vertex.y()));

        Some(AreaGeometry {
            points: vertices.iter().map(|vertex| vertex.to_export()).collect(),
            centroid: Point::from_model(sum_x / count, sum_y / count),
        })
    }

    fn style(&self, area: &Area) -> AreaStyle {
        let fill = FillDefinition::new(palette::area());
        if self.office {
            AreaStyle {
                fill,
                border: Some(StrokeDefinition::dashed(palette::office_border(), 2.0)),
                label: Some(OFFICE_LABEL.resolve(area.properties()).to_string()),
            }
        } else {
            AreaStyle {
                fill,
                border: None,
                label: None,
            }
        }
    }

    fn render(&self, geometry: &AreaGeometry, style: &AreaStyle) -> Rendered {
        let mut polygon = Primitive::polygon(geometry.points.clone()).with_fill(style.fill);
        if let Some(border) = &style.border {
            polygon = polygon.with_stroke(border.clone());
        }

        let mut rendered = Rendered::new().with(polygon);
        if let Some(label) = &style.label {
            let text = Text::new(
                TextDefinition::heading(16.0, palette::slate()),
                label.as_str(),
                geometry.centroid,
            );
            rendered = rendered.with(Primitive::text(text).with_attributes(part("label")));
        }
        rendered
    }
}
