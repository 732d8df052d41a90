//! CPU ray picking against the navigation cube.
//!
//! A pointer position is unprojected into a world-space [`Ray`] and tested
//! against every triangle of a [`Mesh`](crate::scene::Mesh). The nearest
//! triangle's material, wrapped to the face count, names the face.

mod hit_test;
mod ray;

pub use hit_test::{hit_test, HitTarget};
pub use ray::Ray;
