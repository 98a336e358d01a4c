//! Linear near/far fog.

use crate::foundation::math::utils::clamp;
use crate::light::Rgb;

/// Linear fog blended toward `color` between `near` and `far`.
///
/// `near` must be less than `far`. The fog factor is
/// `f(d) = clamp((far - d) / (far - near), 0, 1)`; `f = 1` means no fog,
/// `f = 0` means the surface is fully replaced by `color`.
#[derive(Debug, Clone)]
pub struct Fog {
    /// Distance at which fog starts to appear
    pub near: f32,
    /// Distance at which fog is total
    pub far: f32,
    /// Fog color
    pub color: Rgb,
}

impl Fog {
    /// Construct a fog descriptor.
    #[must_use]
    pub const fn new(near: f32, far: f32, color: Rgb) -> Self {
        Self { near, far, color }
    }

    /// The fog factor at distance `d`: `1` means no fog, `0` means pure fog
    /// color. `near == far` collapses the blend to a hard cutoff at that
    /// distance.
    #[must_use]
    pub fn factor(&self, distance: f32) -> f32 {
        if (self.far - self.near).abs() < f32::EPSILON {
            return if distance < self.far { 1.0 } else { 0.0 };
        }
        clamp((self.far - distance) / (self.far - self.near), 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_is_one_at_near_and_zero_at_far() {
        let fog = Fog::new(2.0, 10.0, Rgb::new(0.1, 0.1, 0.1));
        assert!((fog.factor(2.0) - 1.0).abs() < 1e-6);
        assert!((fog.factor(10.0) - 0.0).abs() < 1e-6);
        assert!((fog.factor(6.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn factor_clamps_outside_range() {
        let fog = Fog::new(2.0, 10.0, Rgb::new(0.0, 0.0, 0.0));
        assert_eq!(fog.factor(-5.0), 1.0);
        assert_eq!(fog.factor(50.0), 0.0);
    }
}
