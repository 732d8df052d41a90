//! Pointer-to-face resolution.

use glam::{Mat4, Vec2};

use super::ray::Ray;
use crate::camera::core::{Camera, Viewport};
use crate::scene::Mesh;

/// A mesh placed in the world, with the number of logical faces its
/// materials map onto.
#[derive(Debug, Clone, Copy)]
pub struct HitTarget<'a> {
    /// Model-space surface.
    pub mesh: &'a Mesh,
    /// Model-to-world transform.
    pub model: Mat4,
    /// Logical face count. Material indices wrap modulo this value.
    pub face_count: usize,
}

/// Resolve which logical face lies under `pointer`.
///
/// Every triangle is transformed by the target's model matrix and tested
/// against the ray from the camera eye. The nearest hit wins. `None` means
/// the ray missed, or the target has no faces.
#[must_use]
pub fn hit_test(
    pointer: Vec2,
    viewport: Viewport,
    camera: &Camera,
    target: &HitTarget<'_>,
) -> Option<usize> {
    if target.face_count == 0 || viewport.is_empty() {
        return None;
    }
    let ray = Ray::from_screen(camera, pointer, viewport);
    target
        .mesh
        .triangles()
        .iter()
        .filter_map(|tri| {
            ray.intersect(&tri.transformed(&target.model))
                .map(|t| (t, tri.material))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, material)| material % target.face_count)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::options::CameraOptions;
    use crate::scene::{Orientation, Triangle};

    const VIEWPORT: Viewport = Viewport::new(800, 600);

    fn camera() -> Camera {
        Camera::looking_at_origin(&CameraOptions::default(), 6.0, VIEWPORT.aspect())
    }

    /// Just off the screen centre, clear of the face diagonals.
    fn near_center() -> Vec2 {
        Vec2::new(430.0, 280.0)
    }

    #[test]
    fn screen_center_of_unrotated_cube_hits_front_face() {
        let cube = Mesh::cuboid(2.5);
        let target = HitTarget {
            mesh: &cube,
            model: Mat4::IDENTITY,
            face_count: 6,
        };
        assert_eq!(hit_test(near_center(), VIEWPORT, &camera(), &target), Some(4));
    }

    #[test]
    fn exact_screen_center_on_face_diagonal_hits_front_face() {
        let cube = Mesh::cuboid(2.5);
        let target = HitTarget {
            mesh: &cube,
            model: Mat4::IDENTITY,
            face_count: 6,
        };
        let pointer = Vec2::new(400.0, 300.0);
        assert_eq!(hit_test(pointer, VIEWPORT, &camera(), &target), Some(4));

        // The ray lands on the shared edge of the front face's two triangles;
        // at least one of them must accept it, at the face's depth
        let ray = Ray::from_screen(&camera(), pointer, VIEWPORT);
        let hits: Vec<f32> = cube
            .triangles()
            .iter()
            .filter(|t| t.material == 4)
            .filter_map(|t| ray.intersect(t))
            .collect();
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|t| (t - 4.75).abs() < 1e-3));
    }

    #[test]
    fn corner_misses() {
        let cube = Mesh::cuboid(2.5);
        let target = HitTarget {
            mesh: &cube,
            model: Mat4::IDENTITY,
            face_count: 6,
        };
        assert_eq!(hit_test(Vec2::ZERO, VIEWPORT, &camera(), &target), None);
    }

    #[test]
    fn quarter_turn_brings_negative_x_forward() {
        let cube = Mesh::cuboid(2.5);
        let target = HitTarget {
            mesh: &cube,
            model: Orientation::new(0.0, FRAC_PI_2).to_matrix(),
            face_count: 6,
        };
        assert_eq!(hit_test(near_center(), VIEWPORT, &camera(), &target), Some(1));
    }

    #[test]
    fn projected_triangle_centroids_hit_their_face() {
        let cube = Mesh::cuboid(2.5);
        let model = Orientation::new(0.5, 0.6).to_matrix();
        let target = HitTarget {
            mesh: &cube,
            model,
            face_count: 6,
        };
        let camera = camera();
        for tri in cube.triangles().iter().step_by(2) {
            let world = tri.transformed(&model);
            // Only faces turned toward the eye are reachable
            if world.normal().dot(camera.eye - world.vertices[0]) <= 0.0 {
                continue;
            }
            let [a, b, c] = world.vertices;
            let pixel = camera.project((a + b + c) / 3.0, VIEWPORT).unwrap();
            assert_eq!(
                hit_test(pixel, VIEWPORT, &camera, &target),
                Some(tri.material)
            );
        }
    }

    #[test]
    fn extra_materials_wrap_to_face_count() {
        let front = Mesh::cuboid(2.5)
            .triangles()
            .iter()
            .filter(|t| t.material == 4)
            .map(|t| Triangle {
                vertices: t.vertices,
                material: 10,
            })
            .collect();
        let mesh = Mesh::from_triangles(front);
        let target = HitTarget {
            mesh: &mesh,
            model: Mat4::IDENTITY,
            face_count: 6,
        };
        assert_eq!(hit_test(near_center(), VIEWPORT, &camera(), &target), Some(4));
    }

    #[test]
    fn zero_faces_never_hit() {
        let cube = Mesh::cuboid(2.5);
        let target = HitTarget {
            mesh: &cube,
            model: Mat4::IDENTITY,
            face_count: 0,
        };
        assert_eq!(hit_test(near_center(), VIEWPORT, &camera(), &target), None);
    }
}
