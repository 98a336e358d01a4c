//! Ray-query primitives
//!
//! Four pure functions used both internally by the raycaster's per-column
//! stages and directly by callers: 2D ray-tilemap DDA, its 3D extension
//! against the ceiling/floor slabs, ray-billboard intersection, and
//! screen-point unprojection.

use crate::foundation::math::utils::sign_nonzero;
use crate::foundation::math::{Vec2, Vec3};
use crate::primitives::camera::Camera;
use crate::tilemap::Tilemap;

/// Which axis of the grid a 2D DDA hit landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// An x-face (east/west wall)
    X,
    /// A y-face (north/south wall)
    Y,
}

/// A 2D ray: start point plus direction. Direction need not be unit length;
/// [`RayTilemapHit::perpendicular_distance`] is only a meaningful
/// world-space distance when the direction is unit length.
#[derive(Debug, Clone, Copy)]
pub struct Ray2 {
    /// Ray origin
    pub start: Vec2,
    /// Ray direction, not required to be normalized
    pub dir: Vec2,
}

/// A 3D ray: start point plus direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray3 {
    /// Ray origin
    pub start: Vec3,
    /// Ray direction, not required to be normalized
    pub dir: Vec3,
}

/// Result of [`ray_tilemap_intersection`].
#[derive(Debug, Clone, Copy)]
pub struct RayTilemapHit {
    /// Grid cell the ray terminated in
    pub map_position: (i32, i32),
    /// Which axis the hit face belongs to
    pub side: Side,
    /// World-space hit point
    pub hit_position: Vec2,
    /// Outward surface normal (axis-aligned, length 1)
    pub normal: Vec2,
    /// Distance along the ray's direction to the hit, measured
    /// perpendicular to the camera plane rather than along the raw ray
    /// (eliminates fish-eye curvature)
    pub perpendicular_distance: f32,
}

/// 2D DDA traversal of a tilemap (Amanatides-Woo grid traversal).
///
/// Terminates when the traversed cell has a non-zero code; the renderer
/// relies on the tilemap's outer border being solid to guarantee
/// termination. Out-of-bounds traversal past an unclosed border is
/// undefined behavior, not checked here.
#[must_use]
pub fn ray_tilemap_intersection(ray: Ray2, tilemap: &Tilemap) -> RayTilemapHit {
    let Ray2 { start, dir } = ray;

    let mut map_x = start.x.floor() as i32;
    let mut map_y = start.y.floor() as i32;

    let step_x = sign_nonzero(dir.x) as i32;
    let step_y = sign_nonzero(dir.y) as i32;

    let delta_dist_x = (1.0 / dir.x).abs();
    let delta_dist_y = (1.0 / dir.y).abs();

    let mut side_dist_x = if dir.x < 0.0 {
        (start.x - map_x as f32) * delta_dist_x
    } else {
        (map_x as f32 + 1.0 - start.x) * delta_dist_x
    };
    let mut side_dist_y = if dir.y < 0.0 {
        (start.y - map_y as f32) * delta_dist_y
    } else {
        (map_y as f32 + 1.0 - start.y) * delta_dist_y
    };

    let mut side = Side::X;
    loop {
        if side_dist_x < side_dist_y {
            side_dist_x += delta_dist_x;
            map_x += step_x;
            side = Side::X;
        } else {
            side_dist_y += delta_dist_y;
            map_y += step_y;
            side = Side::Y;
        }
        if tilemap.is_wall(map_x, map_y) {
            break;
        }
    }

    let perpendicular_distance = match side {
        Side::X => (map_x as f32 - start.x + (1.0 - step_x as f32) / 2.0) / dir.x,
        Side::Y => (map_y as f32 - start.y + (1.0 - step_y as f32) / 2.0) / dir.y,
    };

    let hit_position = start + dir * perpendicular_distance;
    let normal = match side {
        Side::X => Vec2::new(-(step_x as f32), 0.0),
        Side::Y => Vec2::new(0.0, -(step_y as f32)),
    };

    RayTilemapHit {
        map_position: (map_x, map_y),
        side,
        hit_position,
        normal,
        perpendicular_distance,
    }
}

/// Result of [`ray_tilemap_ceiling_floor_intersection`].
#[derive(Debug, Clone, Copy)]
pub struct RayCeilingFloorHit {
    /// World-space hit point in 3D
    pub position: Vec3,
    /// Outward surface normal
    pub normal: Vec3,
    /// Parameter `t` such that `position = ray.start + t * ray.dir`
    pub ray_scale: f32,
}

/// Extends a 2D tilemap hit into 3D against the `z = 0` floor and `z = 1`
/// ceiling slabs.
///
/// The ray's XY projection is normalized (its original length is used to
/// rescale the 2D perpendicular distance into a `z` estimate at the 2D
/// hit); the final intersection is then solved analytically against
/// whichever plane (floor, ceiling, or the wall face itself) the `z`
/// estimate lands in, using the ray's original (unnormalized) direction.
#[must_use]
pub fn ray_tilemap_ceiling_floor_intersection(ray: Ray3, tilemap: &Tilemap) -> RayCeilingFloorHit {
    let dir2d = Vec2::new(ray.dir.x, ray.dir.y);
    let length = dir2d.norm();
    let normalized_dir2d = dir2d / length;

    let hit2d = ray_tilemap_intersection(
        Ray2 {
            start: Vec2::new(ray.start.x, ray.start.y),
            dir: normalized_dir2d,
        },
        tilemap,
    );

    let z = ray.start.z + (ray.dir.z / length) * hit2d.perpendicular_distance;

    let (normal, d) = if z <= 0.0 {
        (Vec3::new(0.0, 0.0, 1.0), 0.0)
    } else if z >= 1.0 {
        (Vec3::new(0.0, 0.0, -1.0), 1.0)
    } else {
        let n = Vec3::new(hit2d.normal.x, hit2d.normal.y, 0.0);
        let point = Vec3::new(hit2d.hit_position.x, hit2d.hit_position.y, 0.0);
        let d = -n.dot(&point);
        (n, d)
    };

    let ray_scale = -(d + normal.dot(&ray.start)) / normal.dot(&ray.dir);
    let position = ray.start + ray.dir * ray_scale;

    RayCeilingFloorHit {
        position,
        normal,
        ray_scale,
    }
}

/// Result of [`ray_billboard_intersection`].
#[derive(Debug, Clone, Copy)]
pub struct BillboardHit {
    /// World-space hit point in 3D
    pub position: Vec3,
    /// Parameter `t` such that `position = ray.start + t * ray.dir`
    pub ray_scale: f32,
    /// Position within the sprite; both components in `[-0.5, 0.5]` means
    /// the hit lands inside the billboard's rectangle
    pub uv: Vec2,
}

/// Intersects a 3D ray with the plane of a billboard: the vertical plane
/// through `(billboard_position.x, billboard_position.y, 0)` with ground
/// normal `bb_dir` (lifted to 3D with `z = 0`).
#[must_use]
pub fn ray_billboard_intersection(
    ray: Ray3,
    billboard_position: Vec2,
    scale: Vec2,
    v_offset: f32,
    bb_dir: Vec2,
) -> BillboardHit {
    let normal = Vec3::new(bb_dir.x, bb_dir.y, 0.0);
    let point = Vec3::new(billboard_position.x, billboard_position.y, 0.0);
    let d = -normal.dot(&point);

    let ray_scale = -(d + normal.dot(&ray.start)) / normal.dot(&ray.dir);
    let position = ray.start + ray.dir * ray_scale;

    let tangent = Vec3::new(bb_dir.y, -bb_dir.x, 0.0);
    let center = Vec3::new(billboard_position.x, billboard_position.y, 0.5 + v_offset);
    let relative = position - center;

    let uv = Vec2::new(relative.dot(&tangent) / scale.x, relative.z / scale.y);

    BillboardHit {
        position,
        ray_scale,
        uv,
    }
}

/// Unprojects a normalized screen point `(nx, ny) in [0,1]^2` into a 3D ray
/// from `camera`, at world height `z = 0.5`.
#[must_use]
pub fn screen_point_to_ray(n_screen: Vec2, camera: &Camera) -> Ray3 {
    let t = 2.0 * n_screen.x - 1.0;
    let dir = camera.direction() + camera.plane() * t;
    Ray3 {
        start: Vec3::new(camera.position.x, camera.position.y, 0.5),
        dir: Vec3::new(dir.x, dir.y, (1.0 - n_screen.y) - 0.5),
    }
}
