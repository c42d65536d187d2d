//! Tables and desks, including the composite furniture with chairs.
//!
//! Composite pieces claim their nominal footprint plus [`COMPOSITE_PADDING`]
//! on every side, which covers the chairs drawn outside the table edges.

use floorplan_core::{
    color::{Color, palette},
    draw::{FillDefinition, Primitive, StrokeDefinition, Text, TextDefinition},
    geometry::{Point, Size},
    scene::{EnumField, Item, Layer, LengthField},
};

use super::{Footprint, Placement, Renderer, Rendered, part};

/// Extra room claimed around composite furniture.
pub const COMPOSITE_PADDING: f32 = 50.0;

const CHAIR_SIZE: f32 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableShape {
    Rectangular,
    Circular,
}

const SHAPE: EnumField<TableShape> = EnumField::new(
    "shape",
    &[
        ("rectangular", TableShape::Rectangular),
        ("circular", TableShape::Circular),
    ],
    TableShape::Rectangular,
);
const DIAMETER: LengthField = LengthField::new("diameter", 80.0);
const TABLE_FOOTPRINT: Footprint = Footprint::new(90.0, 50.0);

/// Outline of a plain table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableGeometry {
    Rect(Placement),
    Circle { center: Point, radius: f32 },
}

/// Plain white table, rectangular or circular. Tables honour rotation.
#[derive(Debug, Clone, Copy)]
pub struct TableRenderer;

impl Renderer<Item> for TableRenderer {
    type Geometry = TableGeometry;
    type Style = (FillDefinition, StrokeDefinition);

    fn geometry(&self, item: &Item, _layer: &Layer) -> Option<TableGeometry> {
        let properties = item.properties();
        Some(match SHAPE.resolve(properties) {
            TableShape::Rectangular => TableGeometry::Rect(Placement::of_item(item, TABLE_FOOTPRINT)),
            TableShape::Circular => TableGeometry::Circle {
                center: item.export_position(),
                radius: DIAMETER.resolve(properties) / 2.0,
            },
        })
    }

    fn style(&self, _item: &Item) -> Self::Style {
        (
            FillDefinition::new(palette::white()),
            StrokeDefinition::new(Color::default(), 2.0),
        )
    }

    fn render(&self, geometry: &TableGeometry, (fill, stroke): &Self::Style) -> Rendered {
        let primitive = match geometry {
            TableGeometry::Rect(placement) => Primitive::rect(placement.center(), placement.size()),
            TableGeometry::Circle { center, radius } => Primitive::circle(*center, *radius),
        };
        Rendered::new().with(primitive.with_fill(*fill).with_stroke(stroke.clone()))
    }

    fn supports_rotation(&self) -> bool {
        true
    }
}

const DESK_FOOTPRINT: Footprint = Footprint::new(80.0, 80.0);

/// Round desk: a tinted disc, a thin inner ring and a "DESK" caption.
#[derive(Debug, Clone, Copy)]
pub struct OfficeDeskRenderer;

impl Renderer<Item> for OfficeDeskRenderer {
    type Geometry = Placement;
    type Style = ();

    fn geometry(&self, item: &Item, _layer: &Layer) -> Option<Placement> {
        Some(Placement::of_item(item, DESK_FOOTPRINT))
    }

    fn style(&self, _item: &Item) {}

    fn render(&self, placement: &Placement, _style: &()) -> Rendered {
        let center = placement.center();
        let radius = placement.size().min_side() / 2.0;

        let top = Primitive::circle(center, radius)
            .with_fill(FillDefinition::with_opacity(palette::desk(), 0.8))
            .with_stroke(StrokeDefinition::new(palette::slate(), 2.0));
        let inset = Primitive::circle(center, radius * 0.7)
            .with_stroke(StrokeDefinition::new(palette::desk_inset(), 1.0))
            .with_opacity(0.6)
            .with_attributes(part("inset"));
        let caption = Primitive::text(Text::new(TextDefinition::caption(10.0), "DESK", center))
            .with_attributes(part("label"));

        Rendered::new()
            .with(top)
            .with(inset)
            .with(caption)
            .with_extent(placement.bounds().expand(COMPOSITE_PADDING))
    }
}

/// Chair arrangement around a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seating {
    /// One chair per side.
    Four,
    /// One chair on the top and bottom sides, two on each of the left and right sides.
    Six,
}

impl Seating {
    /// Chair centres around a table of `size` centred on `center`; chairs touch the edges.
    pub fn chair_positions(self, center: Point, size: Size) -> Vec<Point> {
        let half_chair = CHAIR_SIZE / 2.0;
        let dx = size.width() / 2.0 + half_chair;
        let dy = size.height() / 2.0 + half_chair;

        let mut offsets = vec![(0.0, dy), (0.0, -dy)];
        match self {
            Self::Four => offsets.extend([(dx, 0.0), (-dx, 0.0)]),
            Self::Six => {
                let quarter = size.height() / 4.0;
                offsets.extend([(dx, quarter), (dx, -quarter), (-dx, quarter), (-dx, -quarter)]);
            }
        }

        offsets
            .into_iter()
            .map(|(x, y)| center.add_point(Point::new(x, y)))
            .collect()
    }
}

/// Table with chairs touching its edges and a "TABLE" caption.
#[derive(Debug, Clone, Copy)]
pub struct TableWithChairsRenderer {
    seating: Seating,
    footprint: Footprint,
}

impl TableWithChairsRenderer {
    pub fn four() -> Self {
        Self {
            seating: Seating::Four,
            footprint: Footprint::new(100.0, 100.0),
        }
    }

    pub fn six() -> Self {
        Self {
            seating: Seating::Six,
            footprint: Footprint::new(150.0, 100.0),
        }
    }
}

impl Renderer<Item> for TableWithChairsRenderer {
    type Geometry = Placement;
    type Style = ();

    fn geometry(&self, item: &Item, _layer: &Layer) -> Option<Placement> {
        Some(Placement::of_item(item, self.footprint))
    }

    fn style(&self, _item: &Item) {}

    fn render(&self, placement: &Placement, _style: &()) -> Rendered {
        let center = placement.center();
        let table = Primitive::rect(center, placement.size())
            .with_fill(FillDefinition::with_opacity(palette::table_top(), 0.9))
            .with_stroke(StrokeDefinition::new(palette::slate(), 2.0));

        let mut rendered = Rendered::new().with(table);
        for chair_center in self.seating.chair_positions(center, placement.size()) {
            let chair = Primitive::rect(chair_center, Size::new(CHAIR_SIZE, CHAIR_SIZE))
                .with_fill(FillDefinition::with_opacity(palette::chair(), 0.8))
                .with_stroke(StrokeDefinition::new(palette::chair_outline(), 1.0))
                .with_attributes(part("chair"));
            rendered = rendered.with(chair);
        }

        let caption = Primitive::text(Text::new(TextDefinition::caption(9.0), "TABLE", center))
            .with_attributes(part("label"));
        rendered
            .with(caption)
            .with_extent(placement.bounds().expand(COMPOSITE_PADDING))
    }
}
