//! Integration tests for the FloorPlanExporter API
//!
//! These tests drive the public API from scene JSON to the framed SVG document.

use float_cmp::assert_approx_eq;

use floorplan::{
    FloorPlanError, FloorPlanExporter,
    config::{AppConfig, ExportConfig, StyleConfig},
    draw::{Drawable, RenderLayer, Shape},
    export,
    geometry::Bounds,
};

fn layer_scene(layer: &str) -> String {
    format!(r#"{{ "selectedLayer": "ground", "layers": {{ "ground": {layer} }} }}"#)
}

#[test]
fn test_export_is_idempotent() {
    let source = layer_scene(
        r#"{
            "vertices": {
                "a": { "x": 0, "y": 0 },
                "b": { "x": 400, "y": 0 },
                "c": { "x": 400, "y": 300 }
            },
            "lines": {
                "w1": { "type": "wall", "vertices": ["a", "b"] },
                "w2": { "type": "wall", "vertices": ["b", "c"] }
            },
            "holes": { "d1": { "type": "door", "line": "w1", "offset": 120 } },
            "areas": { "r1": { "type": "area", "vertices": ["a", "b", "c"] } },
            "items": {
                "t1": { "type": "table-with-chairs-6", "x": 200, "y": 100 },
                "b1": { "type": "bookable-unit", "x": 200, "y": 100 }
            }
        }"#,
    );

    let exporter = FloorPlanExporter::default();
    let scene = exporter.parse(&source).expect("Failed to parse scene");

    let first = exporter.render_svg(&scene).expect("Failed to render");
    let second = exporter.render_svg(&scene).expect("Failed to render");
    assert_eq!(first, second);
}

#[test]
fn test_model_y_axis_is_flipped() {
    let source = layer_scene(r#"{ "items": { "t1": { "type": "table", "x": 10, "y": 20 } } }"#);

    let exporter = FloorPlanExporter::default();
    let scene = exporter.parse(&source).unwrap();
    let flattened = exporter.flatten_layer(&scene, "ground").unwrap();

    assert_eq!(
        flattened.content_bounds(),
        Some(Bounds::new(-35.0, -45.0, 55.0, 5.0))
    );
}

#[test]
fn test_bounds_are_content_plus_margin() {
    let source = layer_scene(r#"{ "items": { "t1": { "type": "table", "x": 0, "y": 0 } } }"#);

    let exporter = FloorPlanExporter::default();
    let scene = exporter.parse(&source).unwrap();
    let export = exporter.render_svg(&scene).unwrap();

    assert_eq!(export.bounds(), Bounds::new(-95.0, -75.0, 95.0, 75.0));
    assert_approx_eq!(f32, export.width(), 190.0);
    assert_approx_eq!(f32, export.height(), 150.0);
    assert!(export.svg().contains(r#"viewBox="-95 -75 190 150""#));
}

#[test]
fn test_rotated_circular_table_keeps_its_extent() {
    let source = layer_scene(
        r#"{
            "items": {
                "t1": {
                    "type": "table", "x": 0, "y": 0, "rotation": 45,
                    "properties": { "shape": "circular", "diameter": 100 }
                }
            }
        }"#,
    );

    let exporter = FloorPlanExporter::default();
    let scene = exporter.parse(&source).unwrap();
    let export = exporter.render_svg(&scene).unwrap();

    let bounds = export.bounds();
    assert_approx_eq!(f32, bounds.min_x(), -100.0, epsilon = 1e-3);
    assert_approx_eq!(f32, bounds.min_y(), -100.0, epsilon = 1e-3);
    assert_approx_eq!(f32, bounds.max_x(), 100.0, epsilon = 1e-3);
    assert_approx_eq!(f32, bounds.max_y(), 100.0, epsilon = 1e-3);
    assert!(!export.svg().contains("rotate("));
}

#[test]
fn test_negative_depth_is_a_magnitude() {
    let source = layer_scene(
        r#"{
            "items": {
                "t1": {
                    "type": "table", "x": 0, "y": 0,
                    "properties": { "width": 90, "depth": -5 }
                }
            }
        }"#,
    );

    let exporter = FloorPlanExporter::default();
    let scene = exporter.parse(&source).unwrap();
    let flattened = exporter.flatten_layer(&scene, "ground").unwrap();

    assert_eq!(
        flattened.content_bounds(),
        Some(Bounds::new(-45.0, -2.5, 45.0, 2.5))
    );
}

#[test]
fn test_zero_model_y_never_prints_negative_zero() {
    let source = layer_scene(
        r#"{
            "vertices": { "a": { "x": 0, "y": 0 }, "b": { "x": 100, "y": 0 } },
            "lines": { "w1": { "type": "wall", "vertices": ["a", "b"] } }
        }"#,
    );

    let exporter = FloorPlanExporter::default();
    let scene = exporter.parse(&source).unwrap();
    let export = exporter.render_svg(&scene).unwrap();

    assert!(export.svg().contains(r#"y1="0""#));
    assert!(!export.svg().contains(r#"="-0""#));
}

#[test]
fn test_dangling_references_skip_only_their_element() {
    let source = layer_scene(
        r#"{
            "vertices": { "a": { "x": 0, "y": 0 }, "b": { "x": 100, "y": 0 } },
            "lines": {
                "ok": { "type": "wall", "vertices": ["a", "b"] },
                "broken": { "type": "wall", "vertices": ["a", "ghost"] }
            },
            "holes": { "h1": { "type": "door", "line": "missing", "offset": 10 } },
            "areas": { "r1": { "type": "area", "vertices": ["a", "b", "ghost"] } }
        }"#,
    );

    let exporter = FloorPlanExporter::default();
    let scene = exporter.parse(&source).unwrap();
    let flattened = exporter.flatten_layer(&scene, "ground").unwrap();

    assert_eq!(flattened.skipped(), 3);
    let ids: Vec<_> = flattened
        .output()
        .iter()
        .filter_map(|(_, primitive)| primitive.attributes().get("element-id"))
        .collect();
    assert_eq!(ids, vec!["ok"]);
    assert_eq!(
        flattened.content_bounds(),
        Some(Bounds::new(0.0, 0.0, 100.0, 0.0))
    );
}

#[test]
fn test_empty_layer_uses_default_canvas() {
    let exporter = FloorPlanExporter::default();
    let scene = exporter.parse(&layer_scene("{}")).unwrap();
    let export = exporter.render_svg(&scene).unwrap();

    assert_eq!(export.bounds(), Bounds::new(-50.0, -50.0, 850.0, 650.0));
    assert_approx_eq!(f32, export.width(), 900.0);
    assert_approx_eq!(f32, export.height(), 700.0);
}

#[test]
fn test_office_area_label_at_centroid() {
    let source = layer_scene(
        r#"{
            "vertices": {
                "a": { "x": 0, "y": 0 },
                "b": { "x": 100, "y": 0 },
                "c": { "x": 0, "y": 100 }
            },
            "areas": {
                "o1": {
                    "type": "office-area",
                    "vertices": ["a", "b", "c"],
                    "properties": { "officeLabel": "R&D" }
                },
                "r1": { "type": "area", "vertices": ["a", "b", "c"] }
            }
        }"#,
    );

    let exporter = FloorPlanExporter::default();
    let scene = exporter.parse(&source).unwrap();
    let flattened = exporter.flatten_layer(&scene, "ground").unwrap();

    let labels: Vec<_> = flattened
        .output()
        .layer(RenderLayer::Areas)
        .filter(|primitive| primitive.attributes().get("part") == Some("label"))
        .collect();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].attributes().get("element-id"), Some("o1"));
    assert_eq!(labels[0].text_content(), Some("R&D"));

    let Shape::Text(text) = labels[0].shape() else {
        panic!("expected a text label");
    };
    assert_approx_eq!(f32, text.anchor().x(), 100.0 / 3.0, epsilon = 1e-4);
    assert_approx_eq!(f32, text.anchor().y(), -100.0 / 3.0, epsilon = 1e-4);
}

#[test]
fn test_composite_items_are_padded() {
    let source = layer_scene(
        r#"{ "items": { "t1": { "type": "table-with-chairs-4", "x": 0, "y": 0 } } }"#,
    );

    let exporter = FloorPlanExporter::default();
    let scene = exporter.parse(&source).unwrap();
    let export = exporter.render_svg(&scene).unwrap();

    assert_eq!(export.bounds(), Bounds::new(-150.0, -150.0, 150.0, 150.0));
}

#[test]
fn test_hole_on_line() {
    let source = layer_scene(
        r#"{
            "vertices": { "a": { "x": 0, "y": 0 }, "b": { "x": 100, "y": 0 } },
            "lines": { "w1": { "type": "wall", "vertices": ["a", "b"] } },
            "holes": { "h1": { "type": "door", "line": "w1", "offset": 25 } }
        }"#,
    );

    let exporter = FloorPlanExporter::default();
    let scene = exporter.parse(&source).unwrap();
    let flattened = exporter.flatten_layer(&scene, "ground").unwrap();

    let holes: Vec<_> = flattened.output().layer(RenderLayer::Holes).collect();
    assert_eq!(holes.len(), 1);
    assert_eq!(holes[0].id(), Some("hole-h1"));
    assert_eq!(holes[0].attributes().get("element-type"), Some("hole"));

    assert_eq!(holes[0].bounds(), Some(Bounds::new(15.0, -10.0, 35.0, 10.0)));
}

#[test]
fn test_selected_layer_required() {
    let source = r#"{ "layers": { "ground": {} } }"#;

    let exporter = FloorPlanExporter::default();
    let scene = exporter.parse(source).unwrap();

    assert!(matches!(
        exporter.render_svg(&scene),
        Err(FloorPlanError::Export(export::Error::NoSelectedLayer))
    ));
    assert!(exporter.render_layer_svg(&scene, "ground").is_ok());
}

#[test]
fn test_unknown_selection_is_missing_layer() {
    let source = r#"{ "selectedLayer": "roof", "layers": { "ground": {} } }"#;

    let exporter = FloorPlanExporter::default();
    let scene = exporter.parse(source).unwrap();

    assert!(matches!(
        exporter.render_svg(&scene),
        Err(FloorPlanError::Export(export::Error::MissingLayer(id))) if id == "roof"
    ));
}

#[test]
fn test_configured_margin_and_background() {
    let config = AppConfig::new(
        ExportConfig::default().with_margin(10.0),
        StyleConfig::default().with_background_color("#f0f0f0"),
    );
    let exporter = FloorPlanExporter::new(config).with_size_hint(1024.0, 768.0);
    let scene = exporter
        .parse(&layer_scene(
            r#"{ "items": { "t1": { "type": "table", "x": 0, "y": 0 } } }"#,
        ))
        .unwrap();
    let export = exporter.render_svg(&scene).unwrap();

    assert_eq!(export.bounds(), Bounds::new(-55.0, -35.0, 55.0, 35.0));
    assert!(export.svg().contains("background: #f0f0f0"));
}

#[test]
fn test_exporter_reusability() {
    let exporter = FloorPlanExporter::default();

    let first = exporter
        .parse(&layer_scene(r#"{ "items": { "a": { "type": "label" } } }"#))
        .unwrap();
    let second = exporter
        .parse(&layer_scene(r#"{ "items": { "b": { "type": "coffee-area" } } }"#))
        .unwrap();

    let first = exporter.render_svg(&first).unwrap();
    let second = exporter.render_svg(&second).unwrap();
    assert_ne!(first.svg(), second.svg());
    assert!(first.svg().contains(r#"id="item-a""#));
    assert!(second.svg().contains(r#"id="item-b""#));
}
