//! Scene state for the two screens and the shared orientation model.
//!
//! [`WelcomeScene`] and [`CubeScene`] are the two per-frame render drivers.
//! Neither touches the GPU: each frame they update plain data (model
//! matrices, particles, lights) that a
//! [`RenderSurface`](crate::renderer::RenderSurface) then draws.

mod cube;
mod mesh;
mod orientation;
mod welcome;

pub use cube::{CubeScene, GLOW_COLOR};
use glam::Vec3;
pub use mesh::{Mesh, Segment, Triangle};
pub use orientation::{Orientation, OrientationModel};
use rand::Rng;
pub use welcome::{WelcomeScene, SPECTRUM_COLOR};

/// A point light placed in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// World-space position.
    pub position: Vec3,
    /// Linear RGB color.
    pub color: [f32; 3],
    /// Scalar intensity.
    pub intensity: f32,
}

/// One decorative particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in its scene's particle space.
    pub position: Vec3,
    /// Per-frame drift.
    pub velocity: Vec3,
    /// Which binary digit the particle shows (welcome screen only).
    pub digit: bool,
}

/// Uniformly distributed point on a spherical shell between `min` and
/// `max` radius.
pub(crate) fn random_on_shell<R: Rng + ?Sized>(
    rng: &mut R,
    min: f32,
    max: f32,
) -> Vec3 {
    let radius = rng.random_range(min..=max);
    let theta = rng.random_range(0.0..std::f32::consts::TAU);
    let phi = rng.random_range(-1.0_f32..=1.0).acos();
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}
