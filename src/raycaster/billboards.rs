//! Billboard stage: world-to-camera transform, depth sort, z-buffered
//! per-column sampling, directional texture selection.

use crate::foundation::math::{Vec2, Vec3};
use crate::fog::Fog;
use crate::light::Light;
use crate::primitives::billboard::Billboard;
use crate::primitives::camera::Camera;
use crate::raycaster::shading::shade;
use crate::texture::FrameBuffer;

/// Sort billboards back-to-front (descending squared distance to the
/// camera). Ties may resolve arbitrarily, but the ordering is total and
/// deterministic for a given input order.
pub(crate) fn sorted_back_to_front<'a>(billboards: &'a [Billboard], camera_pos: Vec2) -> Vec<&'a Billboard> {
    let mut indexed: Vec<&Billboard> = billboards.iter().collect();
    indexed.sort_by(|a, b| {
        let da = (a.position - camera_pos).norm_squared();
        let db = (b.position - camera_pos).norm_squared();
        db.partial_cmp(&da).unwrap_or(std::cmp::Ordering::Equal)
    });
    indexed
}

/// Draw a single billboard's screen-space footprint, z-buffer-tested per
/// column against the wall stage's depth values.
pub(crate) fn draw_one(
    billboard: &Billboard,
    framebuffer: &mut FrameBuffer,
    z_buffer: &[f32],
    camera: &Camera,
    light: Option<&Light>,
    fog: Option<&Fog>,
) {
    let width = framebuffer.width;
    let height = framebuffer.height;

    let dir = camera.direction();
    let plane = camera.plane();
    let inv_det = 1.0 / (plane.x * dir.y - dir.x * plane.y);

    let delta = billboard.position - camera.position;
    let bxc = inv_det * (dir.y * delta.x - dir.x * delta.y);
    let byc = inv_det * (-plane.y * delta.x + plane.x * delta.y);

    if byc <= 0.0 {
        return;
    }

    let draw_offset_y = (-billboard.v_offset / byc * height as f32).floor();
    let bxs = (width as f32 / 2.0 * (1.0 + bxc / byc)).floor();
    let base_extent = (height as f32 / byc).floor().abs();
    let sprite_width = base_extent * billboard.scale.x;
    let sprite_height = base_extent * billboard.scale.y;

    let unclipped_x_start = bxs - sprite_width / 2.0;
    let unclipped_x_end = bxs + sprite_width / 2.0;
    let x_start = unclipped_x_start.max(0.0) as u32;
    let x_end = (unclipped_x_end.max(0.0) as u32).min(width);

    let unclipped_y_start = draw_offset_y + (height as f32 - sprite_height) / 2.0;
    let unclipped_y_end = draw_offset_y + (height as f32 + sprite_height) / 2.0;
    let y_start = unclipped_y_start.max(0.0) as u32;
    let y_end = (unclipped_y_end.max(0.0) as u32).min(height);

    let bearing = (camera.position.y - billboard.position.y).atan2(camera.position.x - billboard.position.x);
    let texture = billboard.select_texture(bearing);

    let normal = {
        let mut n = Vec2::new(delta.x, delta.y);
        n /= n.norm().max(f32::EPSILON);
        Vec3::new(n.x, n.y, 0.0)
    };

    for x in x_start..x_end {
        if byc >= z_buffer[x as usize] {
            continue;
        }
        let u = (x as f32 - unclipped_x_start) / sprite_width;
        let tex_x = (u * texture.width as f32) as u32;

        for y in y_start..y_end {
            let v = (y as f32 - unclipped_y_start) / sprite_height;
            let tex_y = (v * texture.height as f32) as u32;
            let texel = texture.sample(tex_x, tex_y);
            if texel[3] == 0 {
                continue;
            }
            let shaded = shade(texel, normal, light, fog, byc);
            framebuffer.put_pixel(x, y, [shaded[0], shaded[1], shaded[2], 0xFF]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::Texture;

    fn billboard_at(x: f32, y: f32) -> Billboard {
        Billboard::new(
            Vec2::new(x, y),
            Vec2::new(1.0, 1.0),
            0.0,
            0.0,
            vec![Texture::new(2, 2, vec![255u8; 4 * 2 * 2])],
        )
    }

    #[test]
    fn sorts_farthest_first() {
        let camera_pos = Vec2::new(0.0, 0.0);
        let near = billboard_at(1.0, 0.0);
        let far = billboard_at(5.0, 0.0);
        let billboards = vec![near.clone(), far.clone()];
        let sorted = sorted_back_to_front(&billboards, camera_pos);
        assert!((sorted[0].position - camera_pos).norm() > (sorted[1].position - camera_pos).norm());
    }

    #[test]
    fn billboard_behind_camera_plane_is_culled() {
        let camera = Camera::new(0.0, 0.0, 0.0, 1.0);
        let mut fb = FrameBuffer::new(8, 8);
        let z_buffer = vec![f32::INFINITY; 8];
        // Camera looks toward -Y; placing the billboard at +Y puts it behind.
        let bb = billboard_at(0.0, 5.0);
        draw_one(&bb, &mut fb, &z_buffer, &camera, None, None);
        assert!(fb.data.as_ref().unwrap().iter().all(|&b| b == 0));
    }
}
