//! Drawing for the two screens.
//!
//! [`CubeEngine::render`](crate::engine::CubeEngine::render) hands a
//! [`SceneFrame`] to any [`RenderSurface`]. [`DrawList`] flattens a frame
//! into world-space vertex streams, and [`GpuRenderer`] uploads those to
//! wgpu and draws them into the window surface.

mod draw_list;
mod gpu_renderer;
pub(crate) mod pipeline_util;

use std::fmt;

pub use draw_list::{DrawList, FrameUniform, GpuLight, Vertex, MAX_LIGHTS};
pub use gpu_renderer::GpuRenderer;

use crate::camera::core::Camera;
use crate::scene::{CubeScene, WelcomeScene};

/// What to draw this frame.
#[derive(Debug, Clone, Copy)]
pub enum SceneFrame<'a> {
    /// Welcome spectrum.
    Welcome {
        /// Scene state after this frame's update.
        scene: &'a WelcomeScene,
        /// Welcome camera.
        camera: &'a Camera,
    },
    /// Navigation cube.
    Cube {
        /// Scene state after this frame's update.
        scene: &'a CubeScene,
        /// Cube camera.
        camera: &'a Camera,
    },
    /// Nothing but the background (intro screen).
    Blank,
}

/// Anything that can present a [`SceneFrame`].
pub trait RenderSurface {
    /// Draw one frame.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the frame could not be presented.
    fn draw(&mut self, frame: SceneFrame<'_>) -> Result<(), RenderError>;
}

/// Errors that can occur while presenting a frame.
#[derive(Debug)]
pub enum RenderError {
    /// The surface must be reconfigured before the next frame.
    SurfaceLost,
    /// The GPU ran out of memory.
    OutOfMemory,
    /// Acquiring the next swapchain texture timed out.
    Timeout,
    /// Any other surface failure.
    Surface(wgpu::SurfaceError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceLost => write!(f, "surface lost or outdated"),
            Self::OutOfMemory => write!(f, "GPU out of memory"),
            Self::Timeout => write!(f, "timed out acquiring frame"),
            Self::Surface(e) => write!(f, "surface error: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Surface(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                Self::SurfaceLost
            }
            wgpu::SurfaceError::OutOfMemory => Self::OutOfMemory,
            wgpu::SurfaceError::Timeout => Self::Timeout,
            other => Self::Surface(other),
        }
    }
}
