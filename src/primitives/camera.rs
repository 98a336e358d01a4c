//! 2D raycasting camera
//!
//! Provides the camera abstraction the raycaster projects rays from: a
//! position in the tile plane, a facing angle, and an aspect ratio that
//! together derive the `dir`/`plane` basis the wall, floor/ceiling, and
//! billboard stages all share.
//!
//! ## Coordinate System
//! At `theta = 0` the camera looks along -Y. `plane` is the camera's
//! horizontal half-extent vector, perpendicular to `dir`, with magnitude
//! `aspect_ratio / 2`.

use crate::foundation::math::{Vec2, Vec2Ext};

/// A 2D camera: position, facing angle, and aspect ratio, with `dir` and
/// `plane` kept in sync with them.
///
/// # Invariants
/// After any mutation, `dir = Rot(theta) . (0, -1)` and
/// `plane = Rot(theta) . (aspect_ratio / 2, 0)`. `rotate` preserves this by
/// construction; callers must not inject non-unit changes into `dir`/`plane`
/// directly (they are private for that reason).
#[derive(Debug, Clone)]
pub struct Camera {
    /// Position in world space (1 unit = 1 tile edge)
    pub position: Vec2,
    theta: f32,
    aspect_ratio: f32,
    dir: Vec2,
    plane: Vec2,
}

impl Camera {
    /// Construct a camera at `(x, y)` facing `theta` radians with the given
    /// aspect ratio.
    #[must_use]
    pub fn new(x: f32, y: f32, theta: f32, aspect_ratio: f32) -> Self {
        let mut camera = Self {
            position: Vec2::new(x, y),
            theta,
            aspect_ratio,
            dir: Vec2::new(0.0, -1.0),
            plane: Vec2::new(aspect_ratio / 2.0, 0.0),
        };
        camera.rebuild_basis();
        camera
    }

    fn rebuild_basis(&mut self) {
        self.dir = Vec2::new(0.0, -1.0).rotated(self.theta);
        self.plane = Vec2::new(self.aspect_ratio / 2.0, 0.0).rotated(self.theta);
    }

    /// Increment the facing angle by `delta_theta` and rotate `dir`/`plane`
    /// by the same amount. No re-normalization is performed: callers must
    /// only ever pass angular deltas here, never inject arbitrary vectors.
    pub fn rotate(&mut self, delta_theta: f32) {
        self.theta += delta_theta;
        self.dir = self.dir.rotated(delta_theta);
        self.plane = self.plane.rotated(delta_theta);
    }

    /// Set the facing angle outright and reconstruct `dir`/`plane` from
    /// scratch. This is the canonical way to correct drift accumulated
    /// through repeated [`Camera::rotate`] calls.
    pub fn rotate_to(&mut self, theta: f32) {
        self.theta = theta;
        self.rebuild_basis();
    }

    /// Translate the camera by `dx` along its local right axis and `dy`
    /// along `dir`. At `theta = 0`, `dy > 0` moves toward -Y and `dx > 0`
    /// moves to the camera's right. The renderer performs no collision
    /// testing; that is the caller's responsibility.
    pub fn move_local(&mut self, dx: f32, dy: f32) {
        let right = Vec2::new(-self.plane.x, -self.plane.y).normalized_to_unit();
        self.position += right * dx + self.dir * dy;
    }

    /// Current facing angle in radians.
    #[must_use]
    pub const fn angle(&self) -> f32 {
        self.theta
    }

    /// Unit forward direction vector.
    #[must_use]
    pub const fn direction(&self) -> Vec2 {
        self.dir
    }

    /// Camera plane (half-extent right) vector, magnitude `aspect_ratio / 2`.
    #[must_use]
    pub const fn plane(&self) -> Vec2 {
        self.plane
    }

    /// Current aspect ratio.
    #[must_use]
    pub const fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Set the aspect ratio, rebuilding `plane` while preserving `theta`.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
        self.rebuild_basis();
    }
}

trait NormalizeToUnit {
    fn normalized_to_unit(self) -> Vec2;
}

impl NormalizeToUnit for Vec2 {
    fn normalized_to_unit(self) -> Vec2 {
        let mut v = self;
        v.normalize_or_unit_x();
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::PI;
    use approx::assert_relative_eq;

    #[test]
    fn construction_establishes_invariants() {
        let cam = Camera::new(0.0, 0.0, 0.0, 16.0 / 9.0);
        assert_relative_eq!(cam.direction().x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(cam.direction().y, -1.0, epsilon = 1e-6);
        assert_relative_eq!(cam.plane().x, (16.0 / 9.0) / 2.0, epsilon = 1e-6);
        assert_relative_eq!(cam.plane().y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn rotate_preserves_magnitudes_over_many_iterations() {
        let mut cam = Camera::new(0.0, 0.0, 0.0, 1.0);
        for _ in 0..10_000 {
            cam.rotate(0.001);
        }
        assert_relative_eq!(cam.direction().norm(), 1.0, epsilon = 1e-4);
        assert_relative_eq!(cam.plane().norm(), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn rotate_to_matches_fresh_construction() {
        let mut cam = Camera::new(1.0, 2.0, 0.0, 1.0);
        cam.rotate_to(PI / 3.0);
        let fresh = Camera::new(1.0, 2.0, PI / 3.0, 1.0);
        assert_relative_eq!(cam.direction().x, fresh.direction().x, epsilon = 1e-6);
        assert_relative_eq!(cam.direction().y, fresh.direction().y, epsilon = 1e-6);
    }

    #[test]
    fn set_aspect_ratio_preserves_theta() {
        let mut cam = Camera::new(0.0, 0.0, 0.7, 1.0);
        let before = cam.angle();
        cam.set_aspect_ratio(2.0);
        assert_relative_eq!(cam.angle(), before);
        assert_relative_eq!(cam.plane().norm(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn move_local_forward_moves_toward_minus_y_at_theta_zero() {
        let mut cam = Camera::new(0.0, 0.0, 0.0, 1.0);
        cam.move_local(0.0, 1.0);
        assert_relative_eq!(cam.position.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(cam.position.y, -1.0, epsilon = 1e-6);
    }
}
