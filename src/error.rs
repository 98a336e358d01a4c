//! Renderer-level errors
//!
//! The raycaster itself does not validate its inner loops (see the crate's
//! "Non-goals" for the reasoning); the one precondition the API does check
//! is the one the caller cannot recover from internally: a frame buffer
//! handed to the renderer with no backing pixel data.

use thiserror::Error;

/// Errors returned when constructing or reconfiguring a [`crate::raycaster::Raycaster`].
#[derive(Error, Debug)]
pub enum RenderError {
    /// The frame buffer's `data` was `None`; the renderer requires a
    /// writable byte array for its lifetime.
    #[error("frame buffer has no backing pixel data")]
    MissingFrameBufferData,
}
