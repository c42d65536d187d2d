//! Element property bags and their typed schema fields.
//!
//! Scene elements carry a loosely typed `properties` map. Renderers never
//! read it directly; they declare typed fields ([`LengthField`],
//! [`NumberField`], [`TextField`], [`EnumField`]) with a default value and
//! resolve them through a total lookup that never fails.
//!
//! # Example
//!
//! ```
//! # use floorplan_core::scene::{LengthField, Properties, PropertyValue, TextField};
//! const WIDTH: LengthField = LengthField::new("width", 90.0);
//! const LABEL: TextField = TextField::new("label", "OFFICE");
//!
//! let properties = Properties::new().with("width", PropertyValue::measure(120.0, "cm"));
//!
//! assert_eq!(WIDTH.resolve(&properties), 120.0);
//! assert_eq!(LABEL.resolve(&properties), "OFFICE");
//! ```

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

/// A `{length, unit}` measure as stored by the editor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Measure {
    length: f32,
    #[serde(default)]
    unit: Option<String>,
}

impl Measure {
    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }
}

/// A single property value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Measure(Measure),
    Number(f32),
    Bool(bool),
    Text(String),
    /// Anything else the editor stores; ignored by the export.
    Other(serde_json::Value),
}

impl PropertyValue {
    pub fn measure(length: f32, unit: &str) -> Self {
        Self::Measure(Measure {
            length,
            unit: Some(unit.to_string()),
        })
    }

    /// Numeric view of the value: a measure's length, a number, or a numeric string.
    pub fn as_f32(&self) -> Option<f32> {
        let value = match self {
            Self::Measure(measure) => Some(measure.length),
            Self::Number(number) => Some(*number),
            Self::Text(text) => text.trim().parse().ok(),
            Self::Bool(_) | Self::Other(_) => None,
        };
        value.filter(|value| value.is_finite())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value as f32)
    }
}

/// The property bag of one scene element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Properties {
    values: IndexMap<String, PropertyValue>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.values.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A length property (`{length, unit}` or a bare number), in scene units.
#[derive(Debug, Clone, Copy)]
pub struct LengthField {
    name: &'static str,
    default: f32,
}

impl LengthField {
    pub const fn new(name: &'static str, default: f32) -> Self {
        Self { name, default }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn default_value(&self) -> f32 {
        self.default
    }

    /// Resolves the field; absent or non-numeric values yield the default.
    ///
    /// Lengths are magnitudes, so a negative value resolves to its absolute
    /// value.
    pub fn resolve(&self, properties: &Properties) -> f32 {
        properties
            .get(self.name)
            .and_then(PropertyValue::as_f32)
            .map_or(self.default, f32::abs)
    }
}

/// A plain numeric property such as an opacity.
#[derive(Debug, Clone, Copy)]
pub struct NumberField {
    name: &'static str,
    default: f32,
}

impl NumberField {
    pub const fn new(name: &'static str, default: f32) -> Self {
        Self { name, default }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn resolve(&self, properties: &Properties) -> f32 {
        properties
            .get(self.name)
            .and_then(PropertyValue::as_f32)
            .unwrap_or(self.default)
    }
}

/// A string property; empty strings count as absent.
#[derive(Debug, Clone, Copy)]
pub struct TextField {
    name: &'static str,
    default: &'static str,
}

impl TextField {
    pub const fn new(name: &'static str, default: &'static str) -> Self {
        Self { name, default }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn resolve<'a>(&self, properties: &'a Properties) -> &'a str {
        properties
            .get(self.name)
            .and_then(PropertyValue::as_text)
            .filter(|text| !text.is_empty())
            .unwrap_or(self.default)
    }
}

/// An enumerated string property mapped onto a Rust value.
///
/// Unknown strings resolve to the default.
#[derive(Debug, Clone, Copy)]
pub struct EnumField<T: Copy + 'static> {
    name: &'static str,
    variants: &'static [(&'static str, T)],
    default: T,
}

impl<T: Copy + 'static> EnumField<T> {
    pub const fn new(name: &'static str, variants: &'static [(&'static str, T)], default: T) -> Self {
        Self {
            name,
            variants,
            default,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn resolve(&self, properties: &Properties) -> T {
        let Some(text) = properties.get(self.name).and_then(PropertyValue::as_text) else {
            return self.default;
        };

        match self.variants.iter().find(|(tag, _)| *tag == text) {
            Some((_, value)) => *value,
            None => {
                debug!(property = self.name, value = text; "Unknown enum value, using default");
                self.default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Shape {
        Square,
        Round,
    }

    const SHAPE: EnumField<Shape> = EnumField::new(
        "shape",
        &[("square", Shape::Square), ("round", Shape::Round)],
        Shape::Square,
    );

    #[test]
    fn test_deserialize_mixed_values() {
        let json = r#"{
            "width": {"length": 150, "unit": "cm"},
            "opacity": 0.5,
            "label": "Kitchen",
            "visible": true,
            "nested": [1, 2]
        }"#;
        let properties: Properties = serde_json::from_str(json).unwrap();

        assert_eq!(
            properties.get("width"),
            Some(&PropertyValue::measure(150.0, "cm"))
        );
        assert_eq!(properties.get("opacity"), Some(&PropertyValue::Number(0.5)));
        assert_eq!(properties.get("visible"), Some(&PropertyValue::Bool(true)));
        assert!(matches!(properties.get("nested"), Some(PropertyValue::Other(_))));
        assert!(properties.has("label"));
    }

    #[test]
    fn test_length_field_accepts_measure_number_and_numeric_text() {
        const DEPTH: LengthField = LengthField::new("depth", 50.0);

        let measure = Properties::new().with("depth", PropertyValue::measure(80.0, "cm"));
        assert_approx_eq!(f32, DEPTH.resolve(&measure), 80.0);

        let number = Properties::new().with("depth", 42.0);
        assert_approx_eq!(f32, DEPTH.resolve(&number), 42.0);

        let text = Properties::new().with("depth", "64");
        assert_approx_eq!(f32, DEPTH.resolve(&text), 64.0);
    }

    #[test]
    fn test_length_field_defaults_on_garbage() {
        const DEPTH: LengthField = LengthField::new("depth", 50.0);

        let garbage = Properties::new().with("depth", "deep");
        assert_approx_eq!(f32, DEPTH.resolve(&garbage), 50.0);
        assert_approx_eq!(f32, DEPTH.resolve(&Properties::new()), 50.0);
        assert_approx_eq!(f32, DEPTH.default_value(), 50.0);
    }

    #[test]
    fn test_length_field_negative_is_magnitude() {
        const DEPTH: LengthField = LengthField::new("depth", 50.0);

        let negative = Properties::new().with("depth", -5.0);
        assert_approx_eq!(f32, DEPTH.resolve(&negative), 5.0);

        let measure = Properties::new().with("depth", PropertyValue::measure(-80.0, "cm"));
        assert_approx_eq!(f32, DEPTH.resolve(&measure), 80.0);
    }

    #[test]
    fn test_text_field_treats_empty_as_absent() {
        const LABEL: TextField = TextField::new("officeLabel", "OFFICE");

        let empty = Properties::new().with("officeLabel", "");
        assert_eq!(LABEL.resolve(&empty), "OFFICE");

        let set = Properties::new().with("officeLabel", "R&D");
        assert_eq!(LABEL.resolve(&set), "R&D");

        let wrong_type = Properties::new().with("officeLabel", 3.0);
        assert_eq!(LABEL.resolve(&wrong_type), "OFFICE");
    }

    #[test]
    fn test_enum_field() {
        let round = Properties::new().with("shape", "round");
        assert_eq!(SHAPE.resolve(&round), Shape::Round);

        let unknown = Properties::new().with("shape", "hexagonal");
        assert_eq!(SHAPE.resolve(&unknown), Shape::Square);
        assert_eq!(SHAPE.resolve(&Properties::new()), Shape::Square);
    }
}
