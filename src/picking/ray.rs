//! World-space rays and ray/triangle intersection.

use glam::{Mat4, Vec2, Vec3};

use crate::camera::core::{Camera, Viewport};
use crate::scene::Triangle;

const EPSILON: f32 = 1e-7;

/// Half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Ray from `origin` toward `through`.
    #[must_use]
    pub fn between(origin: Vec3, through: Vec3) -> Self {
        Self {
            origin,
            direction: (through - origin).normalize_or_zero(),
        }
    }

    /// Ray from the camera eye through the pixel `pointer`.
    #[must_use]
    pub fn from_screen(camera: &Camera, pointer: Vec2, viewport: Viewport) -> Self {
        let ndc = viewport.to_ndc(pointer);
        let inverse: Mat4 = camera.build_matrix().inverse();
        // wgpu depth range: 1.0 is the far plane
        let far = inverse.project_point3(ndc.extend(1.0));
        Self::between(camera.eye, far)
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Möller–Trumbore intersection. Returns the hit distance, counting
    /// both sides of the triangle.
    #[must_use]
    pub fn intersect(&self, triangle: &Triangle) -> Option<f32> {
        let [a, b, c] = triangle.vertices;
        let edge1 = b - a;
        let edge2 = c - a;
        let p = self.direction.cross(edge2);
        let det = edge1.dot(p);
        if det.abs() < EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;

        let s = self.origin - a;
        let u = s.dot(p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }
        let q = s.cross(edge1);
        let v = self.direction.dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(q) * inv_det;
        (t > EPSILON).then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Triangle {
        Triangle {
            vertices: [
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            material: 0,
        }
    }

    #[test]
    fn straight_hit_reports_distance() {
        let ray = Ray::between(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let t = ray.intersect(&triangle()).unwrap();
        assert!((t - 5.0).abs() < 1e-5);
        assert!(ray.at(t).length() < 1e-5);
    }

    #[test]
    fn back_side_also_hits() {
        let ray = Ray::between(Vec3::new(0.0, 0.0, -2.0), Vec3::ZERO);
        assert!(ray.intersect(&triangle()).is_some());
    }

    #[test]
    fn miss_outside_edges_and_behind_origin() {
        let outside = Ray::between(Vec3::new(2.0, 2.0, 5.0), Vec3::new(2.0, 2.0, 0.0));
        assert_eq!(outside.intersect(&triangle()), None);
        let away = Ray {
            origin: Vec3::new(0.0, 0.0, 5.0),
            direction: Vec3::Z,
        };
        assert_eq!(away.intersect(&triangle()), None);
    }

    #[test]
    fn parallel_ray_misses() {
        let ray = Ray {
            origin: Vec3::new(-5.0, 0.0, 0.0),
            direction: Vec3::X,
        };
        assert_eq!(ray.intersect(&triangle()), None);
    }

    #[test]
    fn screen_center_ray_points_at_target() {
        let camera = Camera::looking_at_origin(
            &crate::options::CameraOptions::default(),
            6.0,
            4.0 / 3.0,
        );
        let ray = Ray::from_screen(&camera, Vec2::new(400.0, 300.0), Viewport::new(800, 600));
        assert_eq!(ray.origin, camera.eye);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-4);
    }
}
