//! Shading composition: Lambert-like directional light with ambient,
//! linearly blended with near/far fog.
//!
//! Applied uniformly by the wall, floor/ceiling, and billboard stages. When
//! `light` is absent the directional + ambient term is treated as `1`; when
//! `fog` is absent the fog factor is treated as `1` (no fog contribution).

use crate::foundation::math::Vec3;
use crate::fog::Fog;
use crate::light::Light;

/// Shade an RGBA texture sample at `distance` from the camera, under
/// surface `normal`, optional `light`, and optional `fog`. Alpha passes
/// through unshaded.
#[must_use]
pub fn shade(texel: [u8; 4], normal: Vec3, light: Option<&Light>, fog: Option<&Fog>, distance: f32) -> [u8; 4] {
    let lit = match light {
        Some(light) => {
            let intensity = light.direction.dot(&normal).max(0.0);
            light.color * intensity + light.ambient_color
        }
        None => Vec3::new(1.0, 1.0, 1.0),
    };

    let fog_factor = fog.map_or(1.0, |fog| fog.factor(distance));
    let fog_color = fog.map_or(Vec3::zeros(), |fog| fog.color);

    let channel = |tex_c: u8, lit_c: f32, fog_c: f32| -> u8 {
        let value = fog_c * (1.0 - fog_factor) * 255.0 + f32::from(tex_c) * lit_c * fog_factor;
        value.round().clamp(0.0, 255.0) as u8
    };

    [
        channel(texel[0], lit.x, fog_color.x),
        channel(texel[1], lit.y, fog_color.y),
        channel(texel[2], lit.z, fog_color.z),
        texel[3],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_light_no_fog_identity() {
        let texel = [12, 34, 56, 200];
        let shaded = shade(texel, Vec3::new(0.0, 0.0, 1.0), None, None, 5.0);
        assert_eq!(shaded, texel);
    }

    #[test]
    fn flat_light_is_identity() {
        let texel = [12, 34, 56, 200];
        let light = Light::new(Vec3::new(0.0, 0.0, -1.0), Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        let shaded = shade(texel, Vec3::new(0.0, 0.0, 1.0), Some(&light), None, 5.0);
        assert_eq!(shaded, texel);
    }

    #[test]
    fn zero_span_fog_is_pure_fog_color() {
        let texel = [200, 200, 200, 255];
        let fog = Fog::new(0.0, 0.0, Vec3::new(0.4, 0.2, 0.1));
        let shaded = shade(texel, Vec3::new(0.0, 0.0, 1.0), None, Some(&fog), 5.0);
        assert_eq!(shaded, [102, 51, 26, 255]);
    }

    #[test]
    fn unlit_surface_keeps_ambient_only() {
        let texel = [100, 100, 100, 255];
        let light = Light::new(Vec3::new(0.0, 0.0, -1.0), Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.2, 0.2, 0.2));
        // Normal facing away from the light direction: N.L clamps to 0.
        let shaded = shade(texel, Vec3::new(0.0, 0.0, 1.0), Some(&light), None, 0.0);
        assert_eq!(shaded, [20, 20, 20, 255]);
    }
}
