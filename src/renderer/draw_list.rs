//! CPU-side flattening of a [`SceneFrame`] into world-space vertex
//! streams, one per pipeline.

use glam::{Mat4, Vec3};

use super::SceneFrame;
use crate::camera::core::{Camera, CameraUniform};
use crate::options::hex_to_rgb;
use crate::scene::{
    CubeScene, Mesh, Particle, PointLight, Segment, WelcomeScene, GLOW_COLOR,
    SPECTRUM_COLOR,
};

/// Lights the shader can take per frame.
pub const MAX_LIGHTS: usize = 16;

const WELCOME_BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
const CUBE_BACKGROUND: u32 = 0x000a_0a0a;
const WIREFRAME_COLOR: u32 = 0x0000_ffff;
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// Vertex shared by every pipeline.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// World-space position.
    pub position: [f32; 3],
    /// World-space normal (zero for unlit geometry).
    pub normal: [f32; 3],
    /// Linear RGBA.
    pub color: [f32; 4],
    /// Self-illumination added on top of lighting.
    pub emissive: f32,
}

/// One light as laid out in the frame uniform.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuLight {
    /// World-space position.
    pub position: [f32; 3],
    /// Scalar intensity.
    pub intensity: f32,
    /// Linear RGB color.
    pub color: [f32; 3],
    pub(crate) _pad: f32,
}

/// Per-frame uniform: camera, ambient term and lights.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    /// View-projection and eye.
    pub camera: CameraUniform,
    /// Ambient light level.
    pub ambient: f32,
    /// Number of valid entries in `lights`.
    pub light_count: u32,
    pub(crate) _pad: [u32; 2],
    /// Point lights; entries past `light_count` are ignored.
    pub lights: [GpuLight; MAX_LIGHTS],
}

impl Default for FrameUniform {
    fn default() -> Self {
        Self {
            camera: CameraUniform::new(),
            ambient: 0.0,
            light_count: 0,
            _pad: [0; 2],
            lights: [GpuLight::default(); MAX_LIGHTS],
        }
    }
}

impl FrameUniform {
    fn new(camera: &Camera, ambient: f32) -> Self {
        let mut uniform = Self {
            ambient,
            ..Self::default()
        };
        uniform.camera.update_view_proj(camera);
        uniform
    }

    fn push_light(&mut self, light: &PointLight) {
        let Some(slot) = self.lights.get_mut(self.light_count as usize) else {
            log::warn!("light dropped: more than {MAX_LIGHTS} lights");
            return;
        };
        *slot = GpuLight {
            position: light.position.to_array(),
            intensity: light.intensity,
            color: light.color,
            _pad: 0.0,
        };
        self.light_count += 1;
    }
}

/// Everything one frame draws, already in world space.
#[derive(Debug, Clone)]
pub struct DrawList {
    /// Background color.
    pub clear: [f32; 4],
    /// Camera and lighting.
    pub uniform: FrameUniform,
    /// Lit, double-sided triangles.
    pub lit: Vec<Vertex>,
    /// Unlit triangles seen from inside (glow shell).
    pub glow: Vec<Vertex>,
    /// Unlit line segments.
    pub lines: Vec<Vertex>,
    /// Camera-facing particle quads, additively blended.
    pub sprites: Vec<Vertex>,
}

impl DrawList {
    /// Flatten a frame.
    #[must_use]
    pub fn build(frame: SceneFrame<'_>) -> Self {
        match frame {
            SceneFrame::Welcome { scene, camera } => Self::welcome(scene, camera),
            SceneFrame::Cube { scene, camera } => Self::cube(scene, camera),
            SceneFrame::Blank => Self::empty(WELCOME_BACKGROUND, FrameUniform::default()),
        }
    }

    fn empty(clear: [f32; 4], uniform: FrameUniform) -> Self {
        Self {
            clear,
            uniform,
            lit: Vec::new(),
            glow: Vec::new(),
            lines: Vec::new(),
            sprites: Vec::new(),
        }
    }

    fn welcome(scene: &WelcomeScene, camera: &Camera) -> Self {
        let mut uniform = FrameUniform::new(camera, 0.4);
        for light in scene.lights() {
            uniform.push_light(light);
        }
        uniform.push_light(&PointLight {
            position: Vec3::new(0.0, 0.0, 5.0),
            color: WHITE,
            intensity: 2.0,
        });

        let mut list = Self::empty(WELCOME_BACKGROUND, uniform);
        let model = scene.model_matrix();
        let color = rgba(hex_to_rgb(SPECTRUM_COLOR), 0.9);
        push_mesh(&mut list.lit, scene.mesh(), &model, |_| (color, scene.emissive()));
        push_segments(
            &mut list.lines,
            scene.wireframe(),
            &model,
            rgba(hex_to_rgb(WIREFRAME_COLOR), 0.6),
        );

        let billboard = Billboard::facing(camera);
        let digit_color = rgba(hex_to_rgb(SPECTRUM_COLOR), 0.7);
        for particle in scene.particles() {
            // "1" is a narrow bar, "0" a wider block
            let half_width = if particle.digit { 0.04 } else { 0.1 };
            billboard.push_quad(
                &mut list.sprites,
                particle.position,
                half_width,
                0.15,
                digit_color,
            );
        }
        list
    }

    fn cube(scene: &CubeScene, camera: &Camera) -> Self {
        let mut uniform = FrameUniform::new(camera, 0.5);
        let colors = scene.face_colors();
        let count = colors.len().max(1) as f32;
        for (i, &color) in colors.iter().enumerate() {
            let angle = i as f32 / count * std::f32::consts::TAU;
            uniform.push_light(&PointLight {
                position: Vec3::new(angle.cos() * 8.0, angle.sin() * 8.0, 5.0),
                color,
                intensity: 0.8,
            });
        }
        for light in scene.lights() {
            uniform.push_light(light);
        }

        let mut list = Self::empty(rgba(hex_to_rgb(CUBE_BACKGROUND), 1.0), uniform);
        let model = scene.model_matrix();
        let emissive = scene.emissive();
        push_mesh(&mut list.lit, scene.mesh(), &model, |material| {
            let color = colors.get(material % colors.len().max(1)).copied().unwrap_or(WHITE);
            (rgba(color, 0.98), emissive.get(material).copied().unwrap_or(0.0))
        });
        let glow = rgba(hex_to_rgb(GLOW_COLOR), scene.glow_opacity());
        push_mesh(&mut list.glow, scene.glow(), &model, |_| (glow, 0.0));
        push_segments(&mut list.lines, scene.edges(), &model, rgba(WHITE, 0.8));

        let billboard = Billboard::facing(camera);
        let halo = scene.halo_matrix();
        for Particle { position, .. } in scene.particles() {
            billboard.push_quad(
                &mut list.sprites,
                halo.transform_point3(*position),
                0.025,
                0.025,
                rgba(WHITE, 0.6),
            );
        }
        list
    }

    /// Total vertices across every stream.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.lit.len() + self.glow.len() + self.lines.len() + self.sprites.len()
    }
}

fn rgba([r, g, b]: [f32; 3], a: f32) -> [f32; 4] {
    [r, g, b, a]
}

fn push_mesh(
    out: &mut Vec<Vertex>,
    mesh: &Mesh,
    model: &Mat4,
    style: impl Fn(usize) -> ([f32; 4], f32),
) {
    out.reserve(mesh.triangles().len() * 3);
    for tri in mesh.triangles() {
        let world = tri.transformed(model);
        let normal = world.normal().to_array();
        let (color, emissive) = style(tri.material);
        out.extend(world.vertices.iter().map(|v| Vertex {
            position: v.to_array(),
            normal,
            color,
            emissive,
        }));
    }
}

fn push_segments(out: &mut Vec<Vertex>, segments: &[Segment], model: &Mat4, color: [f32; 4]) {
    out.reserve(segments.len() * 2);
    for segment in segments {
        out.extend(segment.iter().map(|&p| Vertex {
            position: model.transform_point3(p).to_array(),
            normal: [0.0; 3],
            color,
            emissive: 0.0,
        }));
    }
}

/// Screen-aligned axes for camera-facing quads.
struct Billboard {
    right: Vec3,
    up: Vec3,
}

impl Billboard {
    fn facing(camera: &Camera) -> Self {
        let forward = (camera.target - camera.eye).normalize_or_zero();
        let right = forward.cross(camera.up).normalize_or_zero();
        Self {
            right,
            up: right.cross(forward),
        }
    }

    fn push_quad(
        &self,
        out: &mut Vec<Vertex>,
        center: Vec3,
        half_width: f32,
        half_height: f32,
        color: [f32; 4],
    ) {
        let r = self.right * half_width;
        let u = self.up * half_height;
        let corners = [
            center - r - u,
            center + r - u,
            center + r + u,
            center - r - u,
            center + r + u,
            center - r + u,
        ];
        out.extend(corners.iter().map(|c| Vertex {
            position: c.to_array(),
            normal: [0.0; 3],
            color,
            emissive: 0.0,
        }));
    }
}
