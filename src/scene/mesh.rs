//! Triangulated shapes shared by the hit tester and the renderer.

use std::collections::BTreeMap;

use glam::{Mat4, Vec3};

/// One triangle tagged with the material (face slot) it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertices in counter-clockwise order seen from outside.
    pub vertices: [Vec3; 3],
    /// Material index of the sub-surface.
    pub material: usize,
}

impl Triangle {
    /// Outward unit normal.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        let [a, b, c] = self.vertices;
        (b - a).cross(c - a).normalize_or_zero()
    }

    /// Triangle with every vertex transformed by `model`.
    #[must_use]
    pub fn transformed(&self, model: &Mat4) -> Self {
        Self {
            vertices: self.vertices.map(|v| model.transform_point3(v)),
            material: self.material,
        }
    }
}

/// A line segment between two points.
pub type Segment = [Vec3; 2];

/// Triangle soup with material tags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

/// In-plane axes per box face, in material order (+X, −X, +Y, −Y, +Z, −Z).
/// `u × v` points outward.
const BOX_FACE_AXES: [(Vec3, Vec3); 6] = [
    (Vec3::NEG_Z, Vec3::Y),
    (Vec3::Z, Vec3::Y),
    (Vec3::X, Vec3::NEG_Z),
    (Vec3::X, Vec3::Z),
    (Vec3::X, Vec3::Y),
    (Vec3::NEG_X, Vec3::Y),
];

impl Mesh {
    /// Mesh from an explicit triangle list.
    #[must_use]
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Axis-aligned cube of edge `size` centred on the origin. Two
    /// triangles per face, material `i` on face `i`.
    #[must_use]
    pub fn cuboid(size: f32) -> Self {
        let h = size * 0.5;
        let triangles = BOX_FACE_AXES
            .iter()
            .enumerate()
            .flat_map(|(material, &(u, v))| {
                let n = u.cross(v);
                let c = n * h;
                let (u, v) = (u * h, v * h);
                let (p0, p1, p2, p3) =
                    (c - u - v, c + u - v, c + u + v, c - u + v);
                [
                    Triangle {
                        vertices: [p0, p1, p2],
                        material,
                    },
                    Triangle {
                        vertices: [p0, p2, p3],
                        material,
                    },
                ]
            })
            .collect();
        Self { triangles }
    }

    /// Icosahedron of `radius`, subdivided `detail` times and pushed onto
    /// the sphere. Every triangle uses material 0.
    #[must_use]
    pub fn icosphere(radius: f32, detail: u32) -> Self {
        let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
        let corners = [
            Vec3::new(-1.0, t, 0.0),
            Vec3::new(1.0, t, 0.0),
            Vec3::new(-1.0, -t, 0.0),
            Vec3::new(1.0, -t, 0.0),
            Vec3::new(0.0, -1.0, t),
            Vec3::new(0.0, 1.0, t),
            Vec3::new(0.0, -1.0, -t),
            Vec3::new(0.0, 1.0, -t),
            Vec3::new(t, 0.0, -1.0),
            Vec3::new(t, 0.0, 1.0),
            Vec3::new(-t, 0.0, -1.0),
            Vec3::new(-t, 0.0, 1.0),
        ]
        .map(Vec3::normalize);
        const FACES: [[usize; 3]; 20] = [
            [0, 11, 5],
            [0, 5, 1],
            [0, 1, 7],
            [0, 7, 10],
            [0, 10, 11],
            [1, 5, 9],
            [5, 11, 4],
            [11, 10, 2],
            [10, 7, 6],
            [7, 1, 8],
            [3, 9, 4],
            [3, 4, 2],
            [3, 2, 6],
            [3, 6, 8],
            [3, 8, 9],
            [4, 9, 5],
            [2, 4, 11],
            [6, 2, 10],
            [8, 6, 7],
            [9, 8, 1],
        ];

        let mut faces: Vec<[Vec3; 3]> = FACES
            .iter()
            .map(|&[a, b, c]| [corners[a], corners[b], corners[c]])
            .collect();
        for _ in 0..detail {
            faces = faces
                .into_iter()
                .flat_map(|[a, b, c]| {
                    let ab = ((a + b) * 0.5).normalize();
                    let bc = ((b + c) * 0.5).normalize();
                    let ca = ((c + a) * 0.5).normalize();
                    [[a, ab, ca], [b, bc, ab], [c, ca, bc], [ab, bc, ca]]
                })
                .collect();
        }

        let triangles = faces
            .into_iter()
            .map(|tri| Triangle {
                vertices: tri.map(|v| v * radius),
                material: 0,
            })
            .collect();
        Self { triangles }
    }

    /// All triangles in model space.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Highest material index plus one.
    #[must_use]
    pub fn material_count(&self) -> usize {
        self.triangles
            .iter()
            .map(|t| t.material + 1)
            .max()
            .unwrap_or(0)
    }

    /// Every unique triangle edge.
    #[must_use]
    pub fn wireframe(&self) -> Vec<Segment> {
        self.edge_map().into_values().map(|(seg, _)| seg).collect()
    }

    /// Edges on the silhouette of flat regions: open edges plus edges whose
    /// neighbouring triangles bend by more than `crease` radians.
    #[must_use]
    pub fn feature_edges(&self, crease: f32) -> Vec<Segment> {
        let min_cos = crease.cos();
        self.edge_map()
            .into_values()
            .filter(|(_, normals)| match normals.as_slice() {
                [a, b] => a.dot(*b) < min_cos,
                _ => true,
            })
            .map(|(seg, _)| seg)
            .collect()
    }

    fn edge_map(&self) -> BTreeMap<(EdgeKey, EdgeKey), (Segment, Vec<Vec3>)> {
        let mut edges: BTreeMap<(EdgeKey, EdgeKey), (Segment, Vec<Vec3>)> =
            BTreeMap::new();
        for tri in &self.triangles {
            let normal = tri.normal();
            let [a, b, c] = tri.vertices;
            for (p, q) in [(a, b), (b, c), (c, a)] {
                let (kp, kq) = (edge_key(p), edge_key(q));
                let key = if kp <= kq { (kp, kq) } else { (kq, kp) };
                edges
                    .entry(key)
                    .or_insert_with(|| ([p, q], Vec::new()))
                    .1
                    .push(normal);
            }
        }
        edges
    }
}

type EdgeKey = [i64; 3];

/// Quantize a position so shared vertices compare equal.
fn edge_key(p: Vec3) -> EdgeKey {
    const SCALE: f32 = 10_000.0;
    [
        (p.x * SCALE).round() as i64,
        (p.y * SCALE).round() as i64,
        (p.z * SCALE).round() as i64,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuboid_faces_point_outward_in_material_order() {
        let cube = Mesh::cuboid(2.0);
        assert_eq!(cube.triangles().len(), 12);
        assert_eq!(cube.material_count(), 6);
        let expected = [
            Vec3::X,
            Vec3::NEG_X,
            Vec3::Y,
            Vec3::NEG_Y,
            Vec3::Z,
            Vec3::NEG_Z,
        ];
        for tri in cube.triangles() {
            let n = tri.normal();
            assert!(
                (n - expected[tri.material]).length() < 1e-5,
                "material {} has normal {n}",
                tri.material
            );
            for v in tri.vertices {
                assert!((v.abs().max_element() - 1.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn cube_feature_edges_skip_diagonals() {
        let cube = Mesh::cuboid(2.5);
        assert_eq!(cube.wireframe().len(), 18);
        assert_eq!(cube.feature_edges(1.0_f32.to_radians()).len(), 12);
    }

    #[test]
    fn icosphere_vertices_lie_on_radius() {
        let sphere = Mesh::icosphere(1.5, 2);
        assert_eq!(sphere.triangles().len(), 20 * 16);
        for tri in sphere.triangles() {
            for v in tri.vertices {
                assert!((v.length() - 1.5).abs() < 1e-4);
            }
        }
        // Closed surface: E = 3F / 2
        assert_eq!(sphere.wireframe().len(), 20 * 16 * 3 / 2);
    }

    #[test]
    fn transformed_moves_vertices() {
        let tri = Triangle {
            vertices: [Vec3::ZERO, Vec3::X, Vec3::Y],
            material: 3,
        };
        let moved = tri.transformed(&Mat4::from_translation(Vec3::Z));
        assert_eq!(moved.vertices[1], Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(moved.material, 3);
    }
}
