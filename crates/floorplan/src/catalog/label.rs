//! Free-standing text labels.

use floorplan_core::{
    color::{Color, palette},
    draw::{Primitive, Text, TextDefinition},
    geometry::{Point, Size},
    scene::{Item, Layer, LengthField, TextField},
};

use super::{Renderer, Rendered};

const TEXT: TextField = TextField::new("text", "LABEL");
const FONT_SIZE: LengthField = LengthField::new("fontSize", 16.0);
const COLOR: TextField = TextField::new("color", "");

/// Estimated extent of a label around its anchor; text is not measured.
const LABEL_EXTENT: (f32, f32) = (100.0, 20.0);

/// Text-only item: no background shape.
#[derive(Debug, Clone, Copy)]
pub struct LabelRenderer;

impl Renderer<Item> for LabelRenderer {
    type Geometry = Point;
    type Style = (TextDefinition, String);

    fn geometry(&self, item: &Item, _layer: &Layer) -> Option<Point> {
        Some(item.export_position())
    }

    fn style(&self, item: &Item) -> Self::Style {
        let properties = item.properties();
        let color = Color::parse_or(COLOR.resolve(properties), palette::slate());
        (
            TextDefinition::heading(FONT_SIZE.resolve(properties), color),
            TEXT.resolve(properties).to_string(),
        )
    }

    fn render(&self, anchor: &Point, (definition, content): &Self::Style) -> Rendered {
        let text = Text::new(definition.clone(), content.as_str(), *anchor);
        Rendered::new()
            .with(Primitive::text(text))
            .with_extent(anchor.to_bounds(Size::new(LABEL_EXTENT.0, LABEL_EXTENT.1)))
    }
}
