//! Welcome screen: a spinning wireframe icosphere inside a cloud of
//! drifting binary digits, lit by five orbiting colored lights.

use std::f32::consts::TAU;

use glam::{EulerRot, Mat4, Vec3};
use rand::Rng;

use super::mesh::{Mesh, Segment};
use super::{random_on_shell, Particle, PointLight};
use crate::options::hex_to_rgb;

const SPIN_PER_FRAME: Vec3 = Vec3::new(0.008, 0.01, 0.005);
const PARTICLE_COUNT: usize = 300;
const PARTICLE_SPEED: f32 = 0.01;
const RESPAWN_DISTANCE: f32 = 8.0;
const LIGHT_RADIUS: f32 = 5.0;
const LIGHT_HEIGHT: f32 = 3.0;
const LIGHT_COLORS: [u32; 5] =
    [0x0034_98db, 0x00e7_4c3c, 0x009b_59b6, 0x00f3_9c12, 0x001a_bc9c];

/// Base color of the spectrum shape.
pub const SPECTRUM_COLOR: u32 = 0x0034_98db;

/// Per-frame state of the welcome animation.
#[derive(Debug, Clone)]
pub struct WelcomeScene {
    mesh: Mesh,
    wireframe: Vec<Segment>,
    rotation: Vec3,
    float_offset: f32,
    emissive: f32,
    particles: Vec<Particle>,
    lights: Vec<PointLight>,
}

impl WelcomeScene {
    /// Build the scene with a spectrum of `radius`, scattering particles
    /// with the thread RNG.
    #[must_use]
    pub fn new(radius: f32) -> Self {
        Self::with_rng(radius, &mut rand::rng())
    }

    /// Build the scene using `rng` for particle placement.
    pub fn with_rng<R: Rng + ?Sized>(radius: f32, rng: &mut R) -> Self {
        let mesh = Mesh::icosphere(radius, 2);
        let wireframe = mesh.wireframe();
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                position: random_on_shell(rng, 3.0, 7.0),
                velocity: Vec3::new(
                    rng.random_range(-PARTICLE_SPEED..=PARTICLE_SPEED),
                    rng.random_range(-PARTICLE_SPEED..=PARTICLE_SPEED),
                    rng.random_range(-PARTICLE_SPEED..=PARTICLE_SPEED),
                ),
                digit: rng.random_bool(0.5),
            })
            .collect();
        let lights = LIGHT_COLORS
            .iter()
            .map(|&color| PointLight {
                position: Vec3::ZERO,
                color: hex_to_rgb(color),
                intensity: 1.5,
            })
            .collect();

        let mut scene = Self {
            mesh,
            wireframe,
            rotation: Vec3::ZERO,
            float_offset: 0.0,
            emissive: 0.8,
            particles,
            lights,
        };
        scene.place_lights(0.0);
        scene
    }

    /// Advance one frame. `time` is the animation clock in seconds.
    pub fn update<R: Rng + ?Sized>(&mut self, time: f32, rng: &mut R) {
        self.rotation += SPIN_PER_FRAME;
        self.float_offset = time.sin() * 0.5;
        self.emissive = (time * 2.0).sin().mul_add(0.2, 0.6);

        for particle in &mut self.particles {
            particle.position += particle.velocity;
            if particle.position.length() > RESPAWN_DISTANCE {
                particle.position = random_on_shell(rng, 3.0, 5.0);
            }
        }

        self.place_lights(time);
    }

    fn place_lights(&mut self, time: f32) {
        let count = self.lights.len() as f32;
        for (i, light) in self.lights.iter_mut().enumerate() {
            let i = i as f32;
            let angle = i / count * TAU + time;
            light.position = Vec3::new(
                angle.cos() * LIGHT_RADIUS,
                angle.sin() * LIGHT_RADIUS,
                LIGHT_HEIGHT,
            );
            light.intensity = (time * 2.0 + i).sin().mul_add(0.3, 1.2);
        }
    }

    /// Model matrix of the spectrum shape.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.float_offset, 0.0))
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
    }

    /// Spectrum surface.
    #[must_use]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Spectrum wireframe overlay, in model space.
    #[must_use]
    pub fn wireframe(&self) -> &[Segment] {
        &self.wireframe
    }

    /// Accumulated Euler rotation (X, Y, Z).
    #[must_use]
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Current emissive intensity of the spectrum.
    #[must_use]
    pub fn emissive(&self) -> f32 {
        self.emissive
    }

    /// Drifting digit particles, in world space.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Orbiting lights.
    #[must_use]
    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn scene() -> (WelcomeScene, StdRng) {
        let mut rng = StdRng::seed_from_u64(7);
        (WelcomeScene::with_rng(1.5, &mut rng), rng)
    }

    #[test]
    fn particles_start_inside_shell() {
        let (scene, _) = scene();
        assert_eq!(scene.particles().len(), PARTICLE_COUNT);
        for p in scene.particles() {
            let r = p.position.length();
            assert!((3.0 - 1e-4..=7.0 + 1e-4).contains(&r), "radius {r}");
            assert!(p.velocity.abs().max_element() <= PARTICLE_SPEED);
        }
    }

    #[test]
    fn update_spins_floats_and_pulses() {
        let (mut scene, mut rng) = scene();
        scene.update(0.0, &mut rng);
        scene.update(std::f32::consts::FRAC_PI_2, &mut rng);
        assert!((scene.rotation() - SPIN_PER_FRAME * 2.0).length() < 1e-6);
        assert!((scene.model_matrix().w_axis.y - 0.5).abs() < 1e-6);
        // sin(π) ≈ 0
        assert!((scene.emissive() - 0.6).abs() < 1e-5);
    }

    #[test]
    fn escaped_particles_respawn_near_center() {
        let (mut scene, mut rng) = scene();
        scene.particles[0].position = Vec3::new(7.995, 0.0, 0.0);
        scene.particles[0].velocity = Vec3::new(0.01, 0.0, 0.0);
        scene.update(0.0, &mut rng);
        let r = scene.particles()[0].position.length();
        assert!(r <= 5.0 + 1e-4, "respawned at radius {r}");
    }

    #[test]
    fn lights_orbit_on_radius_five() {
        let (mut scene, mut rng) = scene();
        scene.update(1.0, &mut rng);
        assert_eq!(scene.lights().len(), 5);
        for (i, light) in scene.lights().iter().enumerate() {
            let planar = light.position.truncate().length();
            assert!((planar - LIGHT_RADIUS).abs() < 1e-4);
            let expected = (2.0 + i as f32).sin().mul_add(0.3, 1.2);
            assert!((light.intensity - expected).abs() < 1e-6);
        }
    }
}
