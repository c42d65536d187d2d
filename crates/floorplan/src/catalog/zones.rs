//! Tinted rectangular zones: office spaces and background areas.

use floorplan_core::{
    color::{Color, palette},
    draw::{FillDefinition, Primitive, Text, TextDefinition},
    scene::{Item, Layer, NumberField, Properties, TextField},
};

use super::{Footprint, Placement, Renderer, Rendered, part};

const COLOR: TextField = TextField::new("color", "");
const LABEL: TextField = TextField::new("label", "OFFICE");
const OPACITY: NumberField = NumberField::new("opacity", 0.3);

const OFFICE_SPACE_FOOTPRINT: Footprint = Footprint::new(200.0, 150.0);
const BACKGROUND_AREA_FOOTPRINT: Footprint = Footprint::new(150.0, 100.0);

#[derive(Debug, Clone)]
pub struct ZoneStyle {
    fill: FillDefinition,
    label: Option<String>,
}

fn tint(properties: &Properties) -> Color {
    Color::parse_or(COLOR.resolve(properties), palette::office_tint())
}

fn render_zone(placement: &Placement, style: &ZoneStyle) -> Rendered {
    let rect = Primitive::rect(placement.center(), placement.size()).with_fill(style.fill);
    let mut rendered = Rendered::new().with(rect);

    if let Some(label) = &style.label {
        let text = Text::new(
            TextDefinition::heading(16.0, palette::slate()),
            label.as_str(),
            placement.center(),
        );
        rendered = rendered.with(Primitive::text(text).with_attributes(part("label")));
    }
    rendered
}

/// Labelled office space with a translucent tint.
#[derive(Debug, Clone, Copy)]
pub struct OfficeSpaceRenderer;

impl Renderer<Item> for OfficeSpaceRenderer {
    type Geometry = Placement;
    type Style = ZoneStyle;

    fn geometry(&self, item: &Item, _layer: &Layer) -> Option<Placement> {
        Some(Placement::of_item(item, OFFICE_SPACE_FOOTPRINT))
    }

    fn style(&self, item: &Item) -> ZoneStyle {
        ZoneStyle {
            fill: FillDefinition::with_opacity(tint(item.properties()), 0.3),
            label: Some(LABEL.resolve(item.properties()).to_string()),
        }
    }

    fn render(&self, placement: &Placement, style: &ZoneStyle) -> Rendered {
        render_zone(placement, style)
    }
}

/// Unlabelled background tint with configurable opacity.
#[derive(Debug, Clone, Copy)]
pub struct BackgroundAreaRenderer;

impl Renderer<Item> for BackgroundAreaRenderer {
    type Geometry = Placement;
    type Style = ZoneStyle;

    fn geometry(&self, item: &Item, _layer: &Layer) -> Option<Placement> {
        Some(Placement::of_item(item, BACKGROUND_AREA_FOOTPRINT))
    }

    fn style(&self, item: &Item) -> ZoneStyle {
        let properties = item.properties();
        ZoneStyle {
            fill: FillDefinition::with_opacity(tint(properties), OPACITY.resolve(properties)),
            label: None,
        }
    }

    fn render(&self, placement: &Placement, style: &ZoneStyle) -> Rendered {
        render_zone(placement, style)
    }
}
