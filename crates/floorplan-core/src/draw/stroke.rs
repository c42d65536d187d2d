//! Stroke and line-style definitions.
//!
//! # Overview
//!
//! - [`StrokeDefinition`]: color, width and dash style of a stroke
//! - [`StrokeStyle`]: line patterns (solid, dashed, long-dashed, custom)
//! - [`apply_stroke!`](crate::apply_stroke!): macro applying stroke attributes to SVG elements
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke` | `"#000000"` |
//! | `width` | `stroke-width` | `2.0` |
//! | `style` | `stroke-dasharray` | `"5,5"`, `"8,5"` |

use crate::color::Color;

/// Defines the visual style of a stroke, including dash patterns.
///
/// # SVG Mapping
///
/// Each variant maps to specific SVG `stroke-dasharray` values:
/// - `Solid`: No dasharray attribute
/// - `Dashed`: "5,5"
/// - `LongDashed`: "8,5"
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line with equal dash and gap lengths (5px dash, 5px gap)
    Dashed,
    /// Longer dashes used for internal separators (8px dash, 5px gap)
    LongDashed,
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5".to_string()),
            Self::LongDashed => Some("8,5".to_string()),
        }
    }
}

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use floorplan_core::draw::{StrokeDefinition, StrokeStyle};
/// use floorplan_core::color::Color;
///
/// // Default stroke (black, 1px, solid)
/// let stroke = StrokeDefinition::default();
///
/// // Dashed separator stroke
/// let mut stroke = StrokeDefinition::new(Color::new("#999999").unwrap(), 2.0);
/// stroke.set_style(StrokeStyle::LongDashed);
/// assert_eq!(stroke.style().to_svg_value().as_deref(), Some("8,5"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a solid stroke (convenience constructor).
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dashed stroke (convenience constructor).
    pub fn dashed(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dashed);
        stroke
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Sets the stroke style.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    /// Returns a copy with the given style (builder form of [`Self::set_style`]).
    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            style: StrokeStyle::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// `None` produces `stroke="none"`.
///
/// # Examples
///
/// ```
/// use floorplan_core::draw::StrokeDefinition;
/// use floorplan_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = Some(StrokeDefinition::solid(Color::new("black").unwrap(), 2.0));
/// let rect = svg_element::Rectangle::new()
///     .set("width", 100)
///     .set("height", 50);
///
/// let rect = floorplan_core::apply_stroke!(rect, stroke.as_ref());
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        match $stroke {
            Some(stroke) => {
                let mut elem = $element
                    .set("stroke", stroke.color().to_string())
                    .set("stroke-width", stroke.width());

                if let Some(dasharray) = stroke.style().to_svg_value() {
                    elem = elem.set("stroke-dasharray", dasharray);
                }

                elem
            }
            None => $element.set("stroke", "none"),
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "#000000");
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_constructors() {
        let color = Color::new("red").unwrap();

        let solid = StrokeDefinition::solid(color, 2.0);
        assert_eq!(solid.width(), 2.0);
        assert_eq!(*solid.style(), StrokeStyle::Solid);

        let dashed = StrokeDefinition::dashed(color, 1.5);
        assert_eq!(*dashed.style(), StrokeStyle::Dashed);

        let long = StrokeDefinition::new(color, 2.0).with_style(StrokeStyle::LongDashed);
        assert_eq!(*long.style(), StrokeStyle::LongDashed);
    }

    #[test]
    fn test_stroke_style_dasharray() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value(), Some("5,5".to_string()));
        assert_eq!(
            StrokeStyle::LongDashed.to_svg_value(),
            Some("8,5".to_string())
        );
    }

    #[test]
    fn test_apply_stroke_none() {
        let none: Option<&StrokeDefinition> = None;
        let rect = crate::apply_stroke!(svg::node::element::Rectangle::new(), none);
        assert!(rect.to_string().contains(r#"stroke="none""#));
    }

    #[test]
    fn test_apply_stroke_dashed() {
        let stroke = StrokeDefinition::dashed(Color::default(), 2.0);
        let line = crate::apply_stroke!(svg::node::element::Line::new(), Some(&stroke));
        let rendered = line.to_string();
        assert!(rendered.contains(r#"stroke-dasharray="5,5""#));
        assert!(rendered.contains(r#"stroke-width="2""#));
    }
}
