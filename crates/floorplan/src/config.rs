//! Configuration types for floor-plan export.
//!
//! This module provides configuration structures that control how scenes
//! are framed and styled. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining export and style settings.
//! - [`ExportConfig`] - Framing (margin, default canvas) and per-type capabilities.
//! - [`StyleConfig`] - Controls visual styling options such as background color.
//!
//! # Example
//!
//! ```
//! # use floorplan::config::AppConfig;
//! let config: AppConfig = Default::default();
//! assert_eq!(config.export().margin(), 50.0);
//! assert!(config.export().is_overlay_type("bookable-unit"));
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use floorplan_core::{
    color::Color,
    geometry::{Bounds, Size},
};

/// Top-level application configuration combining export and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Export configuration section.
    #[serde(default)]
    export: ExportConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified export and style configurations.
    pub fn new(export: ExportConfig, style: StyleConfig) -> Self {
        Self { export, style }
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Canvas used when a layer has nothing to draw.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CanvasSize {
    width: f32,
    height: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The canvas as bounds anchored at the origin.
    pub fn to_bounds(self) -> Bounds {
        Bounds::new(0.0, 0.0, self.width, self.height)
    }

    pub fn to_size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Framing and per-type capabilities of the export.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Space added on every side of the accumulated bounds.
    margin: f32,

    /// Fallback content extent for layers with nothing to draw.
    default_canvas: CanvasSize,

    /// Item types that render above all other items.
    overlay_item_types: Vec<String>,

    /// Item types granted the rotation capability in addition to the
    /// built-in rotatable ones.
    rotatable_item_types: Vec<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            margin: 50.0,
            default_canvas: CanvasSize::default(),
            overlay_item_types: vec!["bookable-unit".to_string()],
            rotatable_item_types: Vec::new(),
        }
    }
}

impl ExportConfig {
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_default_canvas(mut self, canvas: CanvasSize) -> Self {
        self.default_canvas = canvas;
        self
    }

    pub fn with_overlay_item_types(mut self, types: &[&str]) -> Self {
        self.overlay_item_types = types.iter().map(|kind| kind.to_string()).collect();
        self
    }

    pub fn with_rotatable_item_types(mut self, types: &[&str]) -> Self {
        self.rotatable_item_types = types.iter().map(|kind| kind.to_string()).collect();
        self
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn default_canvas(&self) -> CanvasSize {
        self.default_canvas
    }

    /// Returns `true` if items of `kind` render on the overlay layer.
    pub fn is_overlay_type(&self, kind: &str) -> bool {
        self.overlay_item_types.iter().any(|candidate| candidate == kind)
    }

    /// Returns `true` if `kind` was granted rotation through configuration.
    pub fn is_rotatable_type(&self, kind: &str) -> bool {
        self.rotatable_item_types
            .iter()
            .any(|candidate| candidate == kind)
    }
}

/// Visual styling configuration for exported documents.
///
/// Fields that are not set fall back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Document background [`Color`], as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    pub fn with_background_color(mut self, color: &str) -> Self {
        self.background_color = Some(color.to_string());
        self
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_export_config_defaults() {
        let config = ExportConfig::default();
        assert_approx_eq!(f32, config.margin(), 50.0);
        assert_eq!(config.default_canvas(), CanvasSize::new(800.0, 600.0));
        assert!(config.is_overlay_type("bookable-unit"));
        assert!(!config.is_overlay_type("table"));
        assert!(!config.is_rotatable_type("office-desk"));
    }

    #[test]
    fn test_canvas_to_bounds() {
        let bounds = CanvasSize::default().to_bounds();
        assert_eq!(bounds, Bounds::new(0.0, 0.0, 800.0, 600.0));
    }

    #[test]
    fn test_builders() {
        let config = ExportConfig::default()
            .with_margin(10.0)
            .with_overlay_item_types(&["label"])
            .with_rotatable_item_types(&["office-desk", "sofa"]);

        assert_approx_eq!(f32, config.margin(), 10.0);
        assert!(config.is_overlay_type("label"));
        assert!(!config.is_overlay_type("bookable-unit"));
        assert!(config.is_rotatable_type("sofa"));
    }

    #[test]
    fn test_background_color() {
        assert_eq!(StyleConfig::default().background_color(), Ok(None));

        let style = StyleConfig::default().with_background_color("#f5f5f5");
        assert!(matches!(style.background_color(), Ok(Some(_))));

        let invalid = StyleConfig::default().with_background_color("nope");
        assert!(invalid.background_color().is_err());
    }
}
