//! The raycaster: orchestrates clear -> floor/ceiling -> walls -> billboards,
//! and owns the per-column z-buffer.

mod billboards;
mod floor_ceiling;
mod shading;
mod walls;

use crate::config::RaycasterConfig;
use crate::error::RenderError;
use crate::fog::Fog;
use crate::light::Light;
use crate::primitives::billboard::Billboard;
use crate::primitives::camera::Camera;
use crate::texture::{FrameBuffer, Texture};
use crate::tilemap::Tilemap;

pub use shading::shade;

/// What [`Raycaster::clear`] resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearTarget {
    /// Zero every pixel's RGBA bytes
    Color,
    /// Reset every z-buffer entry to `+infinity`
    Depth,
}

/// Per-frame inputs to [`Raycaster::render`].
///
/// `tilemap`/`textures` must both be present to draw walls; `floor_texture`
/// and `ceiling_texture` are independently optional; `light` and `fog` are
/// independently optional and apply uniformly across every stage.
pub struct RenderParams<'a> {
    /// Camera the frame is rendered from
    pub camera: &'a Camera,
    /// Wall grid, required together with `textures` to draw walls
    pub tilemap: Option<&'a Tilemap>,
    /// Wall textures, indexed by `tilemap` cell code minus one
    pub textures: Option<&'a [Texture]>,
    /// Floor texture, independent of `ceiling_texture`
    pub floor_texture: Option<&'a Texture>,
    /// Ceiling texture, independent of `floor_texture`
    pub ceiling_texture: Option<&'a Texture>,
    /// Sprites to draw; input order does not affect the result
    pub billboards: Option<&'a [Billboard]>,
    /// Directional light with ambient term
    pub light: Option<&'a Light>,
    /// Linear near/far fog
    pub fog: Option<&'a Fog>,
}

/// Orchestrates a single-threaded software-raycasting pass over a
/// caller-owned [`FrameBuffer`].
///
/// Borrows the frame buffer for its lifetime; owns a z-buffer of length
/// equal to the frame's width. Re-entrant across independent instances
/// owning disjoint frame buffers, but not safe to share across threads
/// concurrently (the contract is single-threaded per frame).
pub struct Raycaster<'fb> {
    framebuffer: &'fb mut FrameBuffer,
    z_buffer: Vec<f32>,
    config: RaycasterConfig,
}

impl<'fb> Raycaster<'fb> {
    /// Construct a raycaster over `framebuffer` with default configuration.
    ///
    /// # Errors
    /// Returns [`RenderError::MissingFrameBufferData`] if `framebuffer.data`
    /// is `None`: the one precondition this API validates, since the caller
    /// cannot recover from it inside `render`.
    pub fn new(framebuffer: &'fb mut FrameBuffer) -> Result<Self, RenderError> {
        Self::with_config(framebuffer, RaycasterConfig::default())
    }

    /// Construct a raycaster over `framebuffer` with explicit configuration.
    ///
    /// # Errors
    /// Returns [`RenderError::MissingFrameBufferData`] if `framebuffer.data`
    /// is `None`.
    pub fn with_config(framebuffer: &'fb mut FrameBuffer, config: RaycasterConfig) -> Result<Self, RenderError> {
        if framebuffer.data.is_none() {
            return Err(RenderError::MissingFrameBufferData);
        }
        let width = framebuffer.width as usize;
        Ok(Self {
            framebuffer,
            z_buffer: vec![f32::INFINITY; width],
            config,
        })
    }

    /// Reset `targets`; an empty slice resets both color and depth.
    ///
    /// Every z-buffer entry is set to `+infinity`, not merely every other
    /// one: a source implementation that advances its clear index twice
    /// per iteration would clear only even columns, which this
    /// reimplementation deliberately avoids.
    pub fn clear(&mut self, targets: &[ClearTarget]) {
        let (clear_color, clear_depth) = if targets.is_empty() {
            (true, true)
        } else {
            (
                targets.contains(&ClearTarget::Color),
                targets.contains(&ClearTarget::Depth),
            )
        };

        if clear_color {
            log::trace!("clearing color buffer");
            self.framebuffer.clear_color();
        }
        if clear_depth {
            log::trace!("clearing depth buffer ({} columns)", self.z_buffer.len());
            for entry in &mut self.z_buffer {
                *entry = f32::INFINITY;
            }
        }
    }

    /// Render one frame: reset buffers, then floor/ceiling, then walls,
    /// then billboards sorted back-to-front. No state is retained between
    /// calls beyond what the caller owns.
    pub fn render(&mut self, params: &RenderParams<'_>) {
        self.clear(&[]);

        if params.floor_texture.is_some() || params.ceiling_texture.is_some() {
            floor_ceiling::draw(
                self.framebuffer,
                params.camera,
                params.floor_texture,
                params.ceiling_texture,
                params.light,
                params.fog,
            );
        }

        if let (Some(tilemap), Some(textures)) = (params.tilemap, params.textures) {
            for x in 0..self.framebuffer.width {
                walls::draw_column(
                    x,
                    self.framebuffer,
                    &mut self.z_buffer,
                    params.camera,
                    tilemap,
                    textures,
                    params.light,
                    params.fog,
                );
            }
        }

        if let Some(billboards) = params.billboards {
            let ordered = billboards::sorted_back_to_front(billboards, params.camera.position);
            for billboard in ordered {
                billboards::draw_one(
                    billboard,
                    self.framebuffer,
                    &self.z_buffer,
                    params.camera,
                    params.light,
                    params.fog,
                );
            }
        }
    }

    /// Read-only access to the z-buffer, one perpendicular distance per
    /// screen column, populated by the most recent wall stage.
    #[must_use]
    pub fn z_buffer(&self) -> &[f32] {
        &self.z_buffer
    }

    /// The configuration this raycaster was constructed with.
    #[must_use]
    pub const fn config(&self) -> &RaycasterConfig {
        &self.config
    }
}
