//! Core primitive types and ray-query functions used by the raycaster and
//! exposed directly to callers.

pub mod billboard;
pub mod camera;
pub mod ray;

pub use billboard::Billboard;
pub use camera::Camera;
pub use ray::{
    ray_billboard_intersection, ray_tilemap_ceiling_floor_intersection, ray_tilemap_intersection,
    screen_point_to_ray, BillboardHit, Ray2, Ray3, RayCeilingFloorHit, RayTilemapHit, Side,
};
