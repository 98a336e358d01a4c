//! # raycaster_core
//!
//! A software raycasting renderer: a Wolfenstein-3D-style grid DDA walker
//! for walls, a scanline walker for floors/ceilings, and billboard sprites
//! with directional textures, composed under one z-buffer and a single
//! Lambert-plus-fog shading model.
//!
//! ## Features
//!
//! - **Grid DDA walls**: Amanatides-Woo traversal over a [`Tilemap`]
//! - **Floor/ceiling scanlines**: row-distance walk independent of the wall DDA
//! - **Billboards**: camera-facing sprites with direction-dependent textures
//! - **Shading**: directional light with ambient term, plus linear near/far fog
//! - **Config**: load/save via RON or TOML by file extension
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use raycaster_core::prelude::*;
//!
//! let mut framebuffer = FrameBuffer::new(320, 200);
//! let mut raycaster = Raycaster::new(&mut framebuffer).unwrap();
//!
//! let tilemap = Tilemap::new(4, 4, vec![
//!     1, 1, 1, 1,
//!     1, 0, 0, 1,
//!     1, 0, 0, 1,
//!     1, 1, 1, 1,
//! ]);
//! let wall_textures = vec![Texture::new(1, 1, vec![200, 200, 200, 255])];
//! let camera = Camera::new(1.5, 1.5, 0.0, 320.0 / 200.0);
//!
//! raycaster.render(&RenderParams {
//!     camera: &camera,
//!     tilemap: Some(&tilemap),
//!     textures: Some(&wall_textures),
//!     floor_texture: None,
//!     ceiling_texture: None,
//!     billboards: None,
//!     light: None,
//!     fog: None,
//! });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod error;
pub mod fog;
pub mod foundation;
pub mod light;
pub mod primitives;
pub mod raycaster;
pub mod texture;
pub mod tilemap;

pub use config::{Config, ConfigError, RaycasterConfig};
pub use error::RenderError;
pub use fog::Fog;
pub use light::{Light, Rgb};
pub use primitives::{
    ray_billboard_intersection, ray_tilemap_ceiling_floor_intersection, ray_tilemap_intersection,
    screen_point_to_ray, Billboard, BillboardHit, Camera, Ray2, Ray3, RayCeilingFloorHit, RayTilemapHit, Side,
};
pub use raycaster::{ClearTarget, Raycaster, RenderParams};
pub use texture::{FrameBuffer, Texture};
pub use tilemap::Tilemap;

/// Common imports for renderer users.
pub mod prelude {
    pub use crate::{
        config::{Config, RaycasterConfig},
        error::RenderError,
        fog::Fog,
        foundation::math::{Vec2, Vec3},
        light::Light,
        primitives::{Billboard, Camera},
        raycaster::{ClearTarget, Raycaster, RenderParams},
        texture::{FrameBuffer, Texture},
        tilemap::Tilemap,
    };
}
