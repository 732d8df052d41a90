use glam::{Mat4, Vec2, Vec3};

use crate::options::CameraOptions;

/// Drawable area in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Viewport of the given size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, or 1.0 for a degenerate viewport.
    #[must_use]
    pub fn aspect(self) -> f32 {
        if self.width == 0 || self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Whether either side is zero.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel position to normalized device coordinates (Y up).
    #[must_use]
    pub fn to_ndc(self, pixel: Vec2) -> Vec2 {
        let size = Vec2::new(self.width.max(1) as f32, self.height.max(1) as f32);
        Vec2::new(pixel.x / size.x * 2.0 - 1.0, -(pixel.y / size.y * 2.0 - 1.0))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
}

impl Camera {
    /// Camera on the +Z axis at `distance`, looking at the origin.
    #[must_use]
    pub fn looking_at_origin(
        options: &CameraOptions,
        distance: f32,
        aspect: f32,
    ) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// View matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// Projection matrix alone.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Project a world-space point to viewport pixels. `None` when the
    /// point lies behind the eye.
    #[must_use]
    pub fn project(&self, point: Vec3, viewport: Viewport) -> Option<Vec2> {
        let clip = self.build_matrix() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.width as f32,
            (1.0 - ndc.y) * 0.5 * viewport.height as f32,
        ))
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
        self.aspect = camera.aspect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::looking_at_origin(&CameraOptions::default(), 6.0, 16.0 / 9.0)
    }

    #[test]
    fn origin_projects_to_viewport_center() {
        let viewport = Viewport::new(1600, 900);
        let center = camera().project(Vec3::ZERO, viewport).unwrap();
        assert!((center - Vec2::new(800.0, 450.0)).length() < 1e-3);
    }

    #[test]
    fn points_behind_eye_do_not_project() {
        let viewport = Viewport::new(800, 600);
        assert_eq!(camera().project(Vec3::new(0.0, 0.0, 10.0), viewport), None);
    }

    #[test]
    fn up_is_up_on_screen() {
        let viewport = Viewport::new(800, 600);
        let above = camera().project(Vec3::Y, viewport).unwrap();
        assert!(above.y < 300.0);
    }

    #[test]
    fn ndc_flips_y() {
        let viewport = Viewport::new(200, 100);
        assert_eq!(viewport.to_ndc(Vec2::ZERO), Vec2::new(-1.0, 1.0));
        assert_eq!(viewport.to_ndc(Vec2::new(200.0, 100.0)), Vec2::new(1.0, -1.0));
        assert_eq!(viewport.to_ndc(Vec2::new(100.0, 50.0)), Vec2::ZERO);
    }

    #[test]
    fn degenerate_viewport_has_unit_aspect() {
        assert_eq!(Viewport::new(0, 10).aspect(), 1.0);
        assert!(Viewport::new(0, 10).is_empty());
        assert_eq!(Viewport::new(200, 100).aspect(), 2.0);
    }
}
