//! Sizes, offsets, and the affine transform applied to surfaces.

/// An amount of space in 2 dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// The width.
    pub width: f32,
    /// The height.
    pub height: f32,
}

impl Size {
    /// A [`Size`] with zero width and height.
    pub const ZERO: Size = Size::new(0.0, 0.0);

    /// Creates a new [`Size`] with the given width and height.
    pub const fn new(width: f32, height: f32) -> Self {
        Size { width, height }
    }
}

impl From<[f32; 2]> for Size {
    fn from([width, height]: [f32; 2]) -> Self {
        Size { width, height }
    }
}

/// A 2D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    /// The X component.
    pub x: f32,
    /// The Y component.
    pub y: f32,
}

impl Vector {
    /// The zero [`Vector`].
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new [`Vector`] with the given components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A uniform scale followed by a translation.
///
/// The scale is applied around the center of the surface, the translation
/// moves the origin of the scaled surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// The uniform scale factor.
    pub scale: f32,
    /// The translation of the surface origin.
    pub translation: Vector,
}

impl Transform {
    /// The identity [`Transform`].
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vector::ZERO,
    };

    /// Creates a new [`Transform`] that scales by `scale` and moves the
    /// surface horizontally to `x`.
    pub const fn new(scale: f32, x: f32) -> Self {
        Self {
            scale,
            translation: Vector::new(x, 0.0),
        }
    }

    /// Returns `true` if both transforms are equal within `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.scale - other.scale).abs() <= epsilon
            && (self.translation.x - other.translation.x).abs() <= epsilon
            && (self.translation.y - other.translation.y).abs() <= epsilon
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
