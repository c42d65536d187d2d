//! Error types for floor-plan operations.
//!
//! This module provides the main error type [`FloorPlanError`] which wraps
//! the error conditions that can occur while decoding and exporting a scene.

use std::io;

use thiserror::Error;

use floorplan_core::scene::SceneError;

use crate::export;

/// The main error type for floor-plan operations.
///
/// # Diagnostic Variants
///
/// The `Scene` variant keeps the scene source next to the decoding error so
/// that callers can point at the failing line and column.
#[derive(Debug, Error)]
pub enum FloorPlanError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Scene { err: SceneError, src: String },

    #[error("Export error: {0}")]
    Export(#[from] export::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FloorPlanError {
    /// Create a new `Scene` error with the associated source text.
    pub fn new_scene_error(err: SceneError, src: impl Into<String>) -> Self {
        Self::Scene {
            err,
            src: src.into(),
        }
    }
}
