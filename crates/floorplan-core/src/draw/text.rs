//! Text labels.
//!
//! Labels are rendered as centred SVG `<text>` elements. They do not take part
//! in bounds accumulation; each element handler decides how much room its
//! labels need.
//!
//! # Quick Start
//!
//! ```
//! # use floorplan_core::draw::{FontWeight, Text, TextDefinition};
//! # use floorplan_core::geometry::Point;
//! let mut style = TextDefinition::new();
//! style.set_font_size(16.0);
//! style.set_font_weight(FontWeight::Bold);
//!
//! let text = Text::new(style, "OFFICE", Point::new(10.0, -20.0));
//! assert_eq!(text.content(), "OFFICE");
//! ```

use svg::node::element as svg_element;

use crate::{color::Color, geometry::Point};

/// Font weight of a label.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Returns the SVG `font-weight` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Defines the visual style for text labels.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `None` (inherited) |
/// | Font size | `12` |
/// | Font weight | normal |
/// | Text color | `#333333` |
/// | Letter spacing | `None` |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: Option<String>,
    font_size: f32,
    font_weight: FontWeight,
    color: Color,
    letter_spacing: Option<f32>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bold "Arial, Helvetica" heading style used for room and office labels.
    pub fn heading(font_size: f32, color: Color) -> Self {
        Self {
            font_family: Some("Arial, Helvetica, sans-serif".to_string()),
            font_size,
            font_weight: FontWeight::Bold,
            color,
            letter_spacing: Some(0.5),
        }
    }

    /// Small bold caption drawn on top of furniture.
    pub fn caption(font_size: f32) -> Self {
        Self {
            font_family: None,
            font_size,
            font_weight: FontWeight::Bold,
            color: Color::constant("#ffffff"),
            letter_spacing: None,
        }
    }

    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = Some(family.to_string());
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    pub fn set_font_weight(&mut self, weight: FontWeight) {
        self.font_weight = weight;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn letter_spacing(&self) -> Option<f32> {
        self.letter_spacing
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 12.0,
            font_weight: FontWeight::Normal,
            color: Color::constant("#333333"),
            letter_spacing: None,
        }
    }
}

/// A label anchored (centred) at an export-space point.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    definition: TextDefinition,
    content: String,
    anchor: Point,
}

impl Text {
    pub fn new(definition: TextDefinition, content: impl Into<String>, anchor: Point) -> Self {
        Self {
            definition,
            content: content.into(),
            anchor,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }

    pub(crate) fn to_svg_element(&self) -> svg_element::Text {
        let definition = &self.definition;
        let mut text = svg_element::Text::new(self.content.as_str())
            .set("x", self.anchor.x())
            .set("y", self.anchor.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-size", definition.font_size())
            .set("font-weight", definition.font_weight().to_svg_value())
            .set("fill", definition.color().to_string())
            .set("pointer-events", "none");

        if let Some(family) = definition.font_family() {
            text = text.set("font-family", family);
        }
        if let Some(spacing) = definition.letter_spacing() {
            text = text.set("letter-spacing", format!("{spacing}px"));
        }

        text
    }
}
