//! Example: Building a scene in code
//!
//! This example assembles a small office layer with the scene builders and
//! exports it without going through JSON.

use floorplan::{
    FloorPlanExporter,
    scene::{Area, Hole, Item, Layer, Line, Properties, Scene},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let layer = Layer::new()
        .with_vertex("nw", 0.0, 300.0)
        .with_vertex("ne", 500.0, 300.0)
        .with_vertex("se", 500.0, 0.0)
        .with_vertex("sw", 0.0, 0.0)
        .with_line("north", Line::new("wall", "nw", "ne"))
        .with_line("east", Line::new("wall", "ne", "se"))
        .with_line("south", Line::new("wall", "se", "sw"))
        .with_line("west", Line::new("wall", "sw", "nw"))
        .with_hole("entrance", Hole::new("door", "south", 220.0))
        .with_area(
            "office",
            Area::new("office-area", &["nw", "ne", "se", "sw"])
                .with_properties(Properties::new().with("officeLabel", "Engineering")),
        )
        .with_item("meeting", Item::new("table-with-chairs-6", 150.0, 150.0))
        .with_item(
            "desk-1",
            Item::new("table", 380.0, 220.0).with_rotation(30.0),
        )
        .with_item(
            "desk-1-booking",
            Item::new("bookable-unit", 380.0, 220.0)
                .with_properties(Properties::new().with("availability", "unavailable")),
        )
        .with_item("coffee", Item::new("coffee-area", 440.0, 60.0));

    let scene = Scene::new()
        .with_layer("ground", layer)
        .with_selected_layer("ground");

    let exporter = FloorPlanExporter::default();
    let export = exporter.render_svg(&scene)?;

    println!(
        "Exported {}x{} document framed at {:?}\n",
        export.width(),
        export.height(),
        export.bounds()
    );
    println!("{export}");

    Ok(())
}
