//! Floor-plan SVG export.
//!
//! Flattens one layer of a floor-plan scene snapshot (walls, doors, zones and
//! furniture) into a standalone SVG document framed around its content.

pub mod catalog;
pub mod config;
pub mod export;

mod error;

pub use floorplan_core::{color, draw, geometry, scene};

pub use error::FloorPlanError;

use std::sync::Arc;

use log::{debug, info, trace};

use catalog::Catalog;
use config::AppConfig;
use export::{
    Exporter,
    svg::{Flattened, Svg, SvgExport},
};
use scene::Scene;

/// Entry point for decoding scenes and exporting them as SVG.
///
/// # Examples
///
/// ```rust
/// use floorplan::{FloorPlanExporter, config::AppConfig};
///
/// let source = r#"{
///     "selectedLayer": "ground",
///     "layers": {
///         "ground": {
///             "items": { "t1": { "type": "table", "x": 0, "y": 0 } }
///         }
///     }
/// }"#;
///
/// let exporter = FloorPlanExporter::new(AppConfig::default());
/// let scene = exporter.parse(source).expect("Failed to parse");
/// let export = exporter.render_svg(&scene).expect("Failed to render");
///
/// assert!(export.svg().starts_with("<svg"));
/// ```
#[derive(Debug, Clone)]
pub struct FloorPlanExporter {
    config: AppConfig,
    catalog: Arc<Catalog>,
}

impl Default for FloorPlanExporter {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl FloorPlanExporter {
    /// Create an exporter over the built-in renderer catalog.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            catalog: Arc::new(Catalog::builtin()),
        }
    }

    /// Replace the renderer catalog, e.g. to register extra item types.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }

    /// Record the caller's viewport size.
    ///
    /// The hint is advisory: the document is always framed by its content.
    pub fn with_size_hint(self, width: f32, height: f32) -> Self {
        debug!(width, height; "Ignoring advisory size hint");
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Decode a scene snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FloorPlanError::Scene`] carrying the source text when the
    /// JSON is malformed or does not match the scene shape.
    pub fn parse(&self, source: &str) -> Result<Scene, FloorPlanError> {
        info!("Parsing scene");

        let scene =
            Scene::from_json(source).map_err(|err| FloorPlanError::new_scene_error(err, source))?;

        debug!(layers_count = scene.layers().count(); "Scene parsed successfully");
        trace!(scene:?; "Parsed scene");

        Ok(scene)
    }

    /// Export the scene's selected layer.
    ///
    /// # Errors
    ///
    /// Returns [`FloorPlanError::Export`] when no layer is selected or the
    /// selection is unknown, and [`FloorPlanError::Config`] for an invalid
    /// background color.
    pub fn render_svg(&self, scene: &Scene) -> Result<SvgExport, FloorPlanError> {
        let export = self.exporter()?.export_selected_layer(scene)?;
        Ok(export)
    }

    /// Export the layer `layer_id`, ignoring the scene's selection.
    ///
    /// # Errors
    ///
    /// Returns [`FloorPlanError::Export`] when the layer does not exist.
    pub fn render_layer_svg(
        &self,
        scene: &Scene,
        layer_id: &str,
    ) -> Result<SvgExport, FloorPlanError> {
        let export = self.exporter()?.export_layer(scene, layer_id)?;
        Ok(export)
    }

    /// Walk the layer `layer_id` without serializing it.
    ///
    /// # Errors
    ///
    /// Returns [`FloorPlanError::Export`] when the layer does not exist.
    pub fn flatten_layer(&self, scene: &Scene, layer_id: &str) -> Result<Flattened, FloorPlanError> {
        let layer = scene
            .layer(layer_id)
            .ok_or_else(|| export::Error::MissingLayer(layer_id.to_string()))?;
        Ok(self.exporter()?.flatten(layer))
    }

    fn exporter(&self) -> Result<Svg, FloorPlanError> {
        let svg = Svg::new(Arc::clone(&self.catalog), self.config.export().clone());
        match self.config.style().background_color() {
            Ok(Some(background)) => Ok(svg.with_background(background)),
            Ok(None) => Ok(svg),
            Err(err) => Err(FloorPlanError::Config(format!(
                "invalid background color: {err}"
            ))),
        }
    }
}
