//! Cube screen: the six-faced navigation cube, its glow shell, a static
//! particle halo and one orbiting light per face.

use std::f32::consts::TAU;

use glam::{Mat4, Vec3};
use rand::Rng;

use super::mesh::{Mesh, Segment};
use super::orientation::Orientation;
use super::{random_on_shell, Particle, PointLight};
use crate::options::FaceOptions;

const PARTICLE_COUNT: usize = 200;
const LIGHT_RADIUS: f32 = 6.0;
const LIGHT_HEIGHT: f32 = 4.0;
const GLOW_SCALE: f32 = 1.1;

/// Color of the glow shell and the particle halo.
pub const GLOW_COLOR: u32 = 0x0034_98db;

/// Per-frame state of the cube animation.
#[derive(Debug, Clone)]
pub struct CubeScene {
    mesh: Mesh,
    glow: Mesh,
    edges: Vec<Segment>,
    face_colors: Vec<[f32; 3]>,
    orientation: Orientation,
    emissive: Vec<f32>,
    glow_opacity: f32,
    particles: Vec<Particle>,
    lights: Vec<PointLight>,
}

impl CubeScene {
    /// Build the cube described by `faces`, scattering the halo with the
    /// thread RNG.
    #[must_use]
    pub fn new(faces: &FaceOptions) -> Self {
        Self::with_rng(faces, &mut rand::rng())
    }

    /// Build the cube using `rng` for halo placement.
    pub fn with_rng<R: Rng + ?Sized>(faces: &FaceOptions, rng: &mut R) -> Self {
        let mesh = Mesh::cuboid(faces.cube_size);
        let edges = mesh.feature_edges(1.0_f32.to_radians());
        let face_colors: Vec<[f32; 3]> =
            faces.faces.iter().map(|f| f.rgb()).collect();
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                position: random_on_shell(rng, 4.0, 6.0),
                velocity: Vec3::ZERO,
                digit: false,
            })
            .collect();
        let lights = face_colors
            .iter()
            .map(|&color| PointLight {
                position: Vec3::ZERO,
                color,
                intensity: 1.0,
            })
            .collect();

        let mut scene = Self {
            mesh,
            glow: Mesh::cuboid(faces.cube_size * GLOW_SCALE),
            edges,
            emissive: vec![0.5; face_colors.len()],
            face_colors,
            orientation: Orientation::default(),
            glow_opacity: 0.1,
            particles,
            lights,
        };
        scene.place_lights(0.0);
        scene
    }

    /// Apply the displayed orientation and advance the pulse animations.
    /// `time` is the animation clock in seconds.
    pub fn update(&mut self, orientation: Orientation, time: f32) {
        self.orientation = orientation;
        for (i, emissive) in self.emissive.iter_mut().enumerate() {
            *emissive = (time * 2.0 + i as f32).sin().mul_add(0.2, 0.4);
        }
        self.glow_opacity = (time * 1.5).sin().mul_add(0.05, 0.15);
        self.place_lights(time);
    }

    fn place_lights(&mut self, time: f32) {
        let count = self.lights.len() as f32;
        let yaw = self.orientation.yaw;
        for (i, light) in self.lights.iter_mut().enumerate() {
            let i = i as f32;
            let angle = i / count * TAU + yaw;
            light.position = Vec3::new(
                angle.cos() * LIGHT_RADIUS,
                angle.sin() * LIGHT_RADIUS,
                LIGHT_HEIGHT,
            );
            light.intensity = (time * 3.0 + i).sin().mul_add(0.2, 0.8);
        }
    }

    /// Model matrix of the cube and its glow shell.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        self.orientation.to_matrix()
    }

    /// Model matrix of the particle halo: half the cube rotation.
    #[must_use]
    pub fn halo_matrix(&self) -> Mat4 {
        Orientation::new(self.orientation.pitch * 0.5, self.orientation.yaw * 0.5)
            .to_matrix()
    }

    /// Hit-testable cube surface, one material per face.
    #[must_use]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Slightly larger shell drawn from the inside.
    #[must_use]
    pub fn glow(&self) -> &Mesh {
        &self.glow
    }

    /// Outline of the cube faces.
    #[must_use]
    pub fn edges(&self) -> &[Segment] {
        &self.edges
    }

    /// Face color per material slot.
    #[must_use]
    pub fn face_colors(&self) -> &[[f32; 3]] {
        &self.face_colors
    }

    /// Emissive intensity per material slot.
    #[must_use]
    pub fn emissive(&self) -> &[f32] {
        &self.emissive
    }

    /// Opacity of the glow shell.
    #[must_use]
    pub fn glow_opacity(&self) -> f32 {
        self.glow_opacity
    }

    /// Orientation applied on the last update.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Halo particles, in halo model space.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// One light per face, orbiting with the yaw.
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

    fn scene() -> CubeScene {
        CubeScene::with_rng(&FaceOptions::default(), &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn builds_one_material_and_light_per_face() {
        let scene = scene();
        assert_eq!(scene.mesh().material_count(), 6);
        assert_eq!(scene.lights().len(), 6);
        assert_eq!(scene.face_colors().len(), 6);
        assert_eq!(scene.edges().len(), 12);
        assert_eq!(scene.particles().len(), PARTICLE_COUNT);
    }

    #[test]
    fn update_applies_orientation_and_pulses() {
        let mut scene = scene();
        let orientation = Orientation::new(0.2, 1.0);
        scene.update(orientation, 0.0);
        assert_eq!(scene.orientation(), orientation);
        assert_eq!(scene.model_matrix(), orientation.to_matrix());
        assert!((scene.glow_opacity() - 0.15).abs() < 1e-6);
        assert!((scene.emissive()[0] - 0.4).abs() < 1e-6);
        assert!((scene.emissive()[1] - 1.0_f32.sin().mul_add(0.2, 0.4)).abs() < 1e-6);
    }

    #[test]
    fn lights_follow_yaw() {
        let mut scene = scene();
        scene.update(Orientation::new(0.0, 0.5), 0.0);
        let first = scene.lights()[0].position;
        assert!((first.x - 0.5_f32.cos() * LIGHT_RADIUS).abs() < 1e-5);
        assert!((first.y - 0.5_f32.sin() * LIGHT_RADIUS).abs() < 1e-5);
        assert!((scene.lights()[0].intensity - 0.8).abs() < 1e-6);
    }

    #[test]
    fn halo_turns_at_half_speed() {
        let mut scene = scene();
        scene.update(Orientation::new(0.4, 2.0), 0.0);
        assert_eq!(
            scene.halo_matrix(),
            Orientation::new(0.2, 1.0).to_matrix()
        );
    }
}
