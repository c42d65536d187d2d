//! Renderer for item types without a dedicated entry in the catalog.

use floorplan_core::{
    color::{Color, palette},
    draw::{FillDefinition, Primitive, StrokeDefinition, Text, TextDefinition},
    scene::{Item, Layer},
};

use super::{Footprint, Placement, Renderer, Rendered, part};

/// Plain rectangle captioned with the item's type name.
#[derive(Debug, Clone, Copy)]
pub struct FallbackRenderer {
    footprint: Footprint,
}

impl Default for FallbackRenderer {
    fn default() -> Self {
        Self {
            footprint: Footprint::new(70.0, 50.0),
        }
    }
}

impl Renderer<Item> for FallbackRenderer {
    type Geometry = Placement;
    type Style = String;

    fn geometry(&self, item: &Item, _layer: &Layer) -> Option<Placement> {
        Some(Placement::of_item(item, self.footprint))
    }

    fn style(&self, item: &Item) -> String {
        item.kind().to_string()
    }

    fn render(&self, placement: &Placement, caption: &String) -> Rendered {
        let rect = Primitive::rect(placement.center(), placement.size())
            .with_fill(FillDefinition::new(palette::area()))
            .with_stroke(StrokeDefinition::new(Color::default(), 2.0));

        let mut rendered = Rendered::new().with(rect);
        if !caption.is_empty() {
            let text = Text::new(TextDefinition::default(), caption.as_str(), placement.center());
            rendered = rendered.with(Primitive::text(text).with_attributes(part("label")));
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ElementRenderer;
    use floorplan_core::{draw::Drawable, geometry::Bounds, scene::Properties};

    #[test]
    fn test_unknown_item_rect_and_caption() {
        let item = Item::new("bookcase", 0.0, 0.0);
        let rendered = FallbackRenderer::default().draw(&item, &Layer::new()).unwrap();
        let primitives = rendered.primitives();

        assert_eq!(
            primitives[0].bounds(),
            Some(Bounds::new(-35.0, -25.0, 35.0, 25.0))
        );
        assert_eq!(primitives[1].text_content(), Some("bookcase"));
    }

    #[test]
    fn test_unknown_item_with_dimensions() {
        let item = Item::new("bookcase", 0.0, 0.0)
            .with_properties(Properties::new().with("width", 40.0).with("height", 200.0));
        let rendered = FallbackRenderer::default().draw(&item, &Layer::new()).unwrap();
        assert_eq!(
            rendered.primitives()[0].bounds(),
            Some(Bounds::new(-20.0, -100.0, 20.0, 100.0))
        );
    }
}
