//! Wall stage: one DDA column per screen column, writing color and depth.

use crate::foundation::math::Vec3;
use crate::fog::Fog;
use crate::light::Light;
use crate::primitives::camera::Camera;
use crate::primitives::ray::{ray_tilemap_intersection, Ray2, Side};
use crate::raycaster::shading::shade;
use crate::texture::{FrameBuffer, Texture};
use crate::tilemap::Tilemap;

/// Draw one column of wall pixels for `x`, writing `z_buffer[x]` regardless
/// of whether shading was applied.
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_column(
    x: u32,
    framebuffer: &mut FrameBuffer,
    z_buffer: &mut [f32],
    camera: &Camera,
    tilemap: &Tilemap,
    textures: &[Texture],
    light: Option<&Light>,
    fog: Option<&Fog>,
) {
    let width = framebuffer.width;
    let height = framebuffer.height;

    let cam_x = 2.0 * x as f32 / width as f32 - 1.0;
    let dir = camera.direction() + camera.plane() * cam_x;
    let hit = ray_tilemap_intersection(
        Ray2 {
            start: camera.position,
            dir,
        },
        tilemap,
    );
    let perp = hit.perpendicular_distance;
    z_buffer[x as usize] = perp;

    let h = (height as f32 / perp).floor();
    let unclipped_start = ((height as f32 - h) / 2.0).floor();
    let unclipped_end = ((height as f32 + h) / 2.0).floor();
    let start_y = unclipped_start.max(0.0) as u32;
    let end_y = (unclipped_end.max(0.0) as u32).min(height);

    let wall_pos = match hit.side {
        Side::X => hit.hit_position.y,
        Side::Y => hit.hit_position.x,
    };
    let u = wall_pos - wall_pos.floor();

    let texture = &textures[tilemap.texture_index(hit.map_position.0, hit.map_position.1)];
    let mut tex_x = (u * texture.width as f32) as u32;
    let flip = (hit.side == Side::X && dir.x < 0.0) || (hit.side == Side::Y && dir.y > 0.0);
    if flip {
        tex_x = texture.width.saturating_sub(1).saturating_sub(tex_x);
    }

    let normal = Vec3::new(hit.normal.x, hit.normal.y, 0.0);

    for y in start_y..end_y {
        let v = (y as f32 - unclipped_start) / h;
        let tex_y = (v * texture.height as f32) as u32;
        let texel = texture.sample(tex_x, tex_y);
        let shaded = shade(texel, normal, light, fog, perp);
        framebuffer.put_pixel(x, y, shaded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bordered_tilemap(n: u32) -> Tilemap {
        let mut cells = vec![0u32; (n * n) as usize];
        for x in 0..n {
            for y in 0..n {
                if x == 0 || y == 0 || x == n - 1 || y == n - 1 {
                    cells[(n * y + x) as usize] = 1;
                }
            }
        }
        Tilemap::new(n, n, cells)
    }

    #[test]
    fn center_column_height_matches_floor_h_over_perp() {
        let map = bordered_tilemap(10);
        let camera = Camera::new(1.5, 1.5, 3.0 * std::f32::consts::PI / 4.0, 1.0);
        let mut fb = FrameBuffer::new(64, 64);
        let mut z_buffer = vec![f32::INFINITY; 64];
        let textures = vec![Texture::new(4, 4, vec![255u8; 4 * 4 * 4])];

        draw_column(32, &mut fb, &mut z_buffer, &camera, &map, &textures, None, None);

        let cam_x = 2.0 * 32.0 / 64.0 - 1.0;
        let dir = camera.direction() + camera.plane() * cam_x;
        let hit = ray_tilemap_intersection(
            Ray2 {
                start: camera.position,
                dir,
            },
            &map,
        );
        let expected_h = (64.0f32 / hit.perpendicular_distance).floor();

        assert_eq!(z_buffer[32], hit.perpendicular_distance);

        let unclipped_start = ((64.0 - expected_h) / 2.0).floor().max(0.0) as u32;
        let unclipped_end = (((64.0 + expected_h) / 2.0).floor().max(0.0) as u32).min(64);
        assert_eq!(unclipped_end - unclipped_start, expected_h as u32);
    }
}
