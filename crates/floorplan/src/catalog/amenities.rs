//! Circular functional areas (coffee, bathroom, phonebooth) and bookable units.

use floorplan_core::{
    color::{Color, palette},
    draw::{DataAttributes, FillDefinition, Icon, Primitive, StrokeDefinition},
    geometry::Point,
    scene::{EnumField, Item, Layer, LengthField, TextField},
};

use super::{Renderer, Rendered, icons, part};

/// Centre and radius of a circular item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: Point,
    pub radius: f32,
}

/// Outlined disc with a white icon.
#[derive(Debug, Clone, Copy)]
pub struct AmenityRenderer {
    fill: Color,
    outline: Color,
    icon: icons::IconSpec,
}

impl AmenityRenderer {
    const RADIUS: LengthField = LengthField::new("radius", 30.0);

    pub fn coffee() -> Self {
        Self {
            fill: palette::coffee(),
            outline: palette::coffee_outline(),
            icon: icons::COFFEE,
        }
    }

    pub fn bathroom() -> Self {
        Self {
            fill: palette::amenity(),
            outline: palette::amenity_outline(),
            icon: icons::BATHROOM,
        }
    }

    pub fn phonebooth() -> Self {
        Self {
            fill: palette::amenity(),
            outline: palette::amenity_outline(),
            icon: icons::PHONEBOOTH,
        }
    }
}

impl Renderer<Item> for AmenityRenderer {
    type Geometry = Disc;
    type Style = (FillDefinition, StrokeDefinition);

    fn geometry(&self, item: &Item, _layer: &Layer) -> Option<Disc> {
        Some(Disc {
            center: item.export_position(),
            radius: Self::RADIUS.resolve(item.properties()),
        })
    }

    fn style(&self, _item: &Item) -> Self::Style {
        (
            FillDefinition::new(self.fill),
            StrokeDefinition::new(self.outline, 2.0),
        )
    }

    fn render(&self, disc: &Disc, (fill, stroke): &Self::Style) -> Rendered {
        let circle = Primitive::circle(disc.center, disc.radius)
            .with_fill(*fill)
            .with_stroke(stroke.clone());
        let icon = Icon::new(
            self.icon.path,
            disc.center,
            self.icon.scale,
            self.icon.origin(),
        );

        Rendered::new().with(circle).with(
            Primitive::icon(icon)
                .with_fill(FillDefinition::new(palette::white()))
                .with_attributes(part("icon")),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Availability {
    Available,
    Unavailable,
}

const AVAILABILITY: EnumField<Availability> = EnumField::new(
    "availability",
    &[
        ("available", Availability::Available),
        ("unavailable", Availability::Unavailable),
    ],
    Availability::Available,
);

/// Raw availability value, echoed into `data-availability`.
const AVAILABILITY_TAG: TextField = TextField::new("availability", "available");

#[derive(Debug, Clone)]
pub struct BookableStyle {
    availability: String,
    indicator: Color,
}

/// Small booking marker with a green or red availability dot.
#[derive(Debug, Clone, Copy)]
pub struct BookableUnitRenderer {
    radius: LengthField,
}

impl Default for BookableUnitRenderer {
    fn default() -> Self {
        Self {
            radius: LengthField::new("radius", 10.0),
        }
    }
}

impl Renderer<Item> for BookableUnitRenderer {
    type Geometry = Disc;
    type Style = BookableStyle;

    fn geometry(&self, item: &Item, _layer: &Layer) -> Option<Disc> {
        Some(Disc {
            center: item.export_position(),
            radius: self.radius.resolve(item.properties()),
        })
    }

    fn style(&self, item: &Item) -> BookableStyle {
        let properties = item.properties();
        let indicator = match AVAILABILITY.resolve(properties) {
            Availability::Available => palette::available(),
            Availability::Unavailable => palette::unavailable(),
        };
        BookableStyle {
            availability: AVAILABILITY_TAG.resolve(properties).to_string(),
            indicator,
        }
    }

    fn render(&self, disc: &Disc, style: &BookableStyle) -> Rendered {
        let marker = Primitive::circle(disc.center, disc.radius)
            .with_fill(FillDefinition::new(palette::office_tint()))
            .with_stroke(StrokeDefinition::new(palette::amenity_outline(), 2.0))
            .with_attributes(
                DataAttributes::new().with("availability", style.availability.as_str()),
            );
        let indicator = Primitive::circle(disc.center, disc.radius * 0.8)
            .with_fill(FillDefinition::new(style.indicator))
            .with_attributes(part("indicator"));

        Rendered::new().with(marker).with(indicator)
    }
}
