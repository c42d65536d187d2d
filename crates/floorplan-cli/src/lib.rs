//! CLI logic for the floor-plan SVG exporter.
//!
//! This module contains the core CLI logic: load configuration, decode the
//! scene JSON, export one layer and write the document.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use floorplan::{FloorPlanError, FloorPlanExporter};

/// Run the floor-plan CLI application
///
/// Reads the scene from `args.input`, exports the layer named by
/// `args.layer` (or the scene's selected layer) and writes the SVG to
/// `args.output`.
///
/// # Errors
///
/// Returns `FloorPlanError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Scene decoding errors
/// - Missing or unselected layers
pub fn run(args: &Args) -> Result<(), FloorPlanError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing scene"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let exporter = FloorPlanExporter::new(app_config);
    let scene = exporter.parse(&source)?;
    let export = match &args.layer {
        Some(layer_id) => exporter.render_layer_svg(&scene, layer_id)?,
        None => exporter.render_svg(&scene)?,
    };

    export.save(&args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
