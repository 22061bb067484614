//! Customize the content surface while the menu is open.
use crate::Error;
use crate::geometry::Vector;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A color in the sRGB color space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// Red component, 0.0 - 1.0
    pub r: f32,
    /// Green component, 0.0 - 1.0
    pub g: f32,
    /// Blue component, 0.0 - 1.0
    pub b: f32,
    /// Transparency, 0.0 - 1.0
    pub a: f32,
}

impl Color {
    /// The black color.
    pub const BLACK: Color = Color::from_rgb(0.0, 0.0, 0.0);

    /// Creates a [`Color`] from its RGB components.
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b, a: 1.0 }
    }
}

/// The drop shadow drawn under the content surface while the menu is open.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Shadow {
    /// The color of the shadow.
    pub color: Color,
    /// The opacity of the shadow.
    pub opacity: f32,
    /// The offset of the shadow.
    pub offset: Vector,
    /// The blur radius of the shadow.
    pub radius: f32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            opacity: 0.3,
            offset: Vector::new(-5.0, 5.0),
            radius: 3.0,
        }
    }
}

/// The appearance of the content surface while the menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemOptions {
    /// The drop shadow of the content surface.
    pub shadow: Shadow,
    corner_radius: f32,
}

impl ItemOptions {
    /// Returns the corner radius of the content surface.
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Sets the corner radius of the content surface.
    pub fn set_corner_radius(&mut self, corner_radius: f32) -> Result<(), Error> {
        if !(corner_radius.is_finite() && corner_radius >= 0.0) {
            return Err(Error::invalid(
                "corner_radius",
                corner_radius,
                "it must be non negative",
            ));
        }

        self.corner_radius = corner_radius;
        Ok(())
    }

    /// Sets the corner radius of the content surface.
    pub fn with_corner_radius(mut self, corner_radius: f32) -> Result<Self, Error> {
        self.set_corner_radius(corner_radius)?;
        Ok(self)
    }

    /// Sets the [`Shadow`] of the content surface.
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = shadow;
        self
    }

    /// Checks every invariant of the options.
    pub fn validate(&self) -> Result<(), Error> {
        let mut copy = *self;
        copy.set_corner_radius(self.corner_radius)
    }
}
