//! Fill definitions for closed shapes.

use crate::color::Color;

/// Fill color plus a separate opacity.
///
/// Opacity is kept apart from the color's alpha channel so that it maps 1:1
/// onto the SVG `fill-opacity` attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillDefinition {
    color: Color,
    opacity: f32,
}

impl FillDefinition {
    /// Fully opaque fill.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
        }
    }

    /// Fill with the given opacity, clamped to `0.0..=1.0`.
    pub fn with_opacity(color: Color, opacity: f32) -> Self {
        Self {
            color,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

/// Apply fill attributes to an SVG element; `None` produces `fill="none"`.
#[macro_export]
macro_rules! apply_fill {
    ($element:expr, $fill:expr) => {{
        match $fill {
            Some(fill) => {
                let elem = $element.set("fill", fill.color().to_string());
                if fill.opacity() < 1.0 {
                    elem.set("fill-opacity", fill.opacity())
                } else {
                    elem
                }
            }
            None => $element.set("fill", "none"),
        }
    }};
}
