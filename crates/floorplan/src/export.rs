//! Export functionality for floor-plan scenes.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! flattening one layer of a scene snapshot into an output document.
//!
//! # Pipeline Position
//!
//! ```text
//! Scene JSON
//!     ↓ decode
//! Scene snapshot
//!     ↓ walk (lines → holes → areas → items)
//! Primitives + accumulated bounds
//!     ↓ emit (this module)
//! SVG document
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::Svg`] and [`svg::SvgExport`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. Only an unresolvable layer aborts an
//! export; malformed elements are skipped by the walker. [`Error`] converts
//! into [`FloorPlanError::Export`] at the crate boundary.
//!
//! [`FloorPlanError::Export`]: crate::FloorPlanError::Export

/// SVG export backend.
pub mod svg;

use thiserror::Error;

use floorplan_core::scene::Scene;

/// Abstraction for floor-plan export backends.
pub trait Exporter {
    /// The produced document.
    type Output;

    /// Exports the layer `layer_id` of `scene`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingLayer`] if the scene has no such layer.
    fn export_layer(&self, scene: &Scene, layer_id: &str) -> Result<Self::Output, Error>;

    /// Exports the scene's selected layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSelectedLayer`] if the scene selects no layer, or
    /// [`Error::MissingLayer`] if the selection names an unknown layer.
    fn export_selected_layer(&self, scene: &Scene) -> Result<Self::Output, Error> {
        let layer_id = scene.selected_layer_id().ok_or(Error::NoSelectedLayer)?;
        self.export_layer(scene, layer_id)
    }
}

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested layer does not exist in the scene.
    #[error("layer `{0}` not found in scene")]
    MissingLayer(String),

    /// The scene does not select any layer.
    #[error("scene has no selected layer")]
    NoSelectedLayer,

    /// An I/O error encountered while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
