//! Billboard sprites: flat camera-facing quads with directional textures.

use crate::foundation::math::{constants::TAU, Vec2};
use crate::texture::Texture;

/// A flat textured quad, oriented so its normal lies in the ground plane.
///
/// `textures` provides 1, 4, or any `n` directional views equally
/// partitioned around a full turn; index 0 is the front-facing view, as
/// seen from the billboard's facing direction (`angle`).
#[derive(Debug, Clone)]
pub struct Billboard {
    /// World position of the billboard's base (ground) point
    pub position: Vec2,
    /// Width/height scale in world units
    pub scale: Vec2,
    /// Vertical displacement of the billboard's center, in world units
    pub v_offset: f32,
    /// Facing angle in the ground plane, radians
    pub angle: f32,
    /// Directional views, index 0 = front. Must be non-empty.
    pub textures: Vec<Texture>,
}

impl Billboard {
    /// Construct a billboard. `textures` must contain at least one entry;
    /// an empty array is undefined behavior per the renderer's contract.
    #[must_use]
    pub fn new(position: Vec2, scale: Vec2, v_offset: f32, angle: f32, textures: Vec<Texture>) -> Self {
        debug_assert!(!textures.is_empty(), "billboard must have at least one texture");
        Self {
            position,
            scale,
            v_offset,
            angle,
            textures,
        }
    }

    /// Select the directional texture visible from `camera_bearing`, the
    /// raw angle (in the ground plane) from the billboard to the camera:
    /// `atan2(cam.y - bb.y, cam.x - bb.x)`. The offset by `self.angle` and
    /// the reduction into `[0, 2*pi)` both happen internally.
    ///
    /// With `angle_range = TAU / n`, texture 0 is the front view; rotating
    /// `self.angle` by one `angle_range` cycles the selected index by
    /// exactly one, in the "front, right, rear, left" convention for `n = 4`.
    #[must_use]
    pub fn select_texture(&self, camera_bearing: f32) -> &Texture {
        let n = self.textures.len();
        let angle_range = TAU / n as f32;
        let mut bearing = camera_bearing - (self.angle - angle_range / 2.0);
        bearing = bearing.rem_euclid(TAU);
        let index = ((bearing / angle_range) as usize).min(n - 1);
        &self.textures[index]
    }
}
