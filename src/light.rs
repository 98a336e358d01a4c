//! Directional light with an ambient term.

use crate::foundation::math::Vec3;

/// An RGB color with channels in `[0, 1]`.
pub type Rgb = Vec3;

/// A single directional light plus an ambient term, used uniformly to shade
/// walls, floors, ceilings, and billboards.
///
/// `direction` is the light's emitted direction vector (not the
/// surface-to-light vector); the shading term uses `max(0, direction . N)`.
#[derive(Debug, Clone)]
pub struct Light {
    /// Direction the light travels in
    pub direction: Vec3,
    /// Light color, channels in `[0, 1]`
    pub color: Rgb,
    /// Ambient color added regardless of surface orientation
    pub ambient_color: Rgb,
}

impl Light {
    /// Construct a directional light with an ambient term.
    #[must_use]
    pub const fn new(direction: Vec3, color: Rgb, ambient_color: Rgb) -> Self {
        Self {
            direction,
            color,
            ambient_color,
        }
    }
}
