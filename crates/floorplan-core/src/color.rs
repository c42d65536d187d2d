//! Color handling for floor-plan rendering
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Colors coming from scene properties are user input,
//! so [`Color::parse_or`] offers a total parse with a fallback.

use std::str::FromStr;

use color::{ColorSpaceTag, DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use floorplan_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Parses `color_str`, returning `fallback` when it is not a valid CSS color.
    ///
    /// # Examples
    ///
    /// ```
    /// use floorplan_core::color::Color;
    ///
    /// let fallback = Color::new("white").unwrap();
    /// assert_eq!(Color::parse_or("not a color", fallback), fallback);
    /// ```
    pub fn parse_or(color_str: &str, fallback: Color) -> Self {
        Self::new(color_str).unwrap_or(fallback)
    }

    /// Parses a color literal that is known to be valid at compile time.
    ///
    /// Falls back to black rather than panicking; every caller passes a
    /// palette constant.
    pub(crate) fn constant(color_str: &str) -> Self {
        Self::parse_or(color_str, Self::default())
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Examples
    ///
    /// ```
    /// use floorplan_core::color::Color;
    ///
    /// let red = Color::new("red").unwrap();
    /// let semi_transparent_red = red.with_alpha(0.5);
    /// assert_eq!(semi_transparent_red.alpha(), 0.5);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl Color {
    fn in_srgb_gamut(&self) -> bool {
        self.color.cs == ColorSpaceTag::Srgb
            && self.color.components[..3]
                .iter()
                .all(|component| (0.0..=1.0).contains(component))
    }
}

/// In-gamut sRGB colors print as `#rrggbb`, or `rgba(..)` when translucent.
impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.in_srgb_gamut() {
            return write!(f, "{}", self.color);
        }

        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        if rgba.a == u8::MAX {
            write!(f, "{rgba:x}")
        } else {
            write!(f, "{rgba}")
        }
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

/// Named colors of the floor-plan palette.
pub mod palette {
    use super::Color;

    macro_rules! palette_color {
        ($($(#[$doc:meta])* $name:ident => $value:literal;)*) => {
            $(
                $(#[$doc])*
                pub fn $name() -> Color {
                    Color::constant($value)
                }
            )*
        };
    }

    palette_color! {
        /// Wall stroke.
        wall => "#94a3b8";
        /// Internal separator stroke.
        separator => "#999999";
        /// Door and window markers.
        hole => "#ff6b6b";
        /// Room and area fill.
        area => "#EEF3F9";
        /// Office-area dashed border.
        office_border => "#666666";
        /// Dark slate used for headings and furniture outlines.
        slate => "#2c3e50";
        /// Default body text.
        text => "#333333";
        /// Office-space and background-area tint.
        office_tint => "#e8f4f8";
        /// Coffee-area disc.
        coffee => "#8db4d3";
        /// Coffee-area outline.
        coffee_outline => "#6b9dc4";
        /// Bathroom and phonebooth disc.
        amenity => "#a8c8e1";
        /// Bathroom, phonebooth and bookable-unit outline.
        amenity_outline => "#7ba7c7";
        /// Bookable unit that can be booked.
        available => "#22c55e";
        /// Bookable unit that is taken.
        unavailable => "#ef4444";
        /// Office desk top.
        desk => "#8B4513";
        /// Office desk inner ring.
        desk_inset => "#654321";
        /// Table top of tables with chairs.
        table_top => "#9b8c75";
        /// Chair seats.
        chair => "#666666";
        /// Chair outlines.
        chair_outline => "#333333";
        /// Table tops, captions and icons.
        white => "#ffffff";
    }
}
