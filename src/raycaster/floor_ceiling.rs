//! Floor/ceiling stage: a horizontal scanline walk driven by a row-distance
//! model, independent of the wall DDA.

use crate::foundation::math::Vec3;
use crate::fog::Fog;
use crate::light::Light;
use crate::primitives::camera::Camera;
use crate::raycaster::shading::shade;
use crate::texture::{FrameBuffer, Texture};

fn wrap01(v: f32) -> f32 {
    v - v.floor()
}

/// Draw every floor/ceiling row. Either texture may be absent, in which
/// case that half of the stage is skipped independently.
pub(crate) fn draw(
    framebuffer: &mut FrameBuffer,
    camera: &Camera,
    floor_texture: Option<&Texture>,
    ceiling_texture: Option<&Texture>,
    light: Option<&Light>,
    fog: Option<&Fog>,
) {
    let width = framebuffer.width;
    let height = framebuffer.height;
    let half_height = height as f32 / 2.0;

    let ray_dir0 = camera.direction() - camera.plane();
    let ray_dir1 = camera.direction() + camera.plane();

    for y in 0..(height / 2) {
        let row_distance = half_height / (half_height - y as f32).abs();

        let floor_pos = camera.position + ray_dir0 * row_distance;
        let step = (ray_dir1 - ray_dir0) * row_distance / width as f32;

        for x in 0..width {
            let pos = floor_pos + step * x as f32;
            let u = wrap01(pos.x);
            let v = wrap01(pos.y);

            if let Some(tex) = ceiling_texture {
                let tex_x = (u * tex.width as f32) as u32;
                let tex_y = (v * tex.height as f32) as u32;
                let texel = tex.sample(tex_x, tex_y);
                let shaded = shade(texel, Vec3::new(0.0, 0.0, -1.0), light, fog, row_distance);
                framebuffer.put_pixel(x, y, shaded);
            }

            if let Some(tex) = floor_texture {
                let tex_x = (u * tex.width as f32) as u32;
                let tex_y = (v * tex.height as f32) as u32;
                let texel = tex.sample(tex_x, tex_y);
                let shaded = shade(texel, Vec3::new(0.0, 0.0, 1.0), light, fog, row_distance);
                framebuffer.put_pixel(x, height - 1 - y, shaded);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_and_floor_rows_are_mirrored() {
        let camera = Camera::new(2.0, 2.0, 0.0, 1.0);
        let mut fb = FrameBuffer::new(8, 8);
        let ceiling = Texture::new(1, 1, vec![10, 20, 30, 255]);
        let floor = Texture::new(1, 1, vec![40, 50, 60, 255]);

        draw(&mut fb, &camera, Some(&floor), Some(&ceiling), None, None);

        let data = fb.data.as_ref().unwrap();
        let px = |x: u32, y: u32| {
            let idx = 4 * (y as usize * 8 + x as usize);
            [data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]
        };
        assert_eq!(px(0, 0), [10, 20, 30, 255]);
        assert_eq!(px(0, 7), [40, 50, 60, 255]);
    }

    #[test]
    fn missing_ceiling_texture_leaves_ceiling_rows_untouched() {
        let camera = Camera::new(2.0, 2.0, 0.0, 1.0);
        let mut fb = FrameBuffer::new(4, 4);
        let floor = Texture::new(1, 1, vec![9, 9, 9, 255]);

        draw(&mut fb, &camera, Some(&floor), None, None, None);

        let data = fb.data.as_ref().unwrap();
        assert_eq!(&data[0..4], &[0, 0, 0, 0]);
    }
}
