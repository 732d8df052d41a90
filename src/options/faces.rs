use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::FaceCubeError;

/// Number of physical faces on the navigation cube.
pub const FACE_COUNT: usize = 6;

/// One navigable face: its position in the material order, label, color
/// and the content panel it opens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaceDescriptor {
    /// Material slot on the cube (+X, −X, +Y, −Y, +Z, −Z).
    pub index: usize,
    /// Label shown to the user.
    pub name: String,
    /// Face color as `0xRRGGBB`.
    pub color: u32,
    /// Identifier of the content panel opened by this face.
    pub content_id: String,
}

impl FaceDescriptor {
    fn new(index: usize, name: &str, color: u32, content_id: &str) -> Self {
        Self {
            index,
            name: name.to_owned(),
            color,
            content_id: content_id.to_owned(),
        }
    }

    /// Linear RGB components in `[0, 1]`.
    #[must_use]
    pub fn rgb(&self) -> [f32; 3] {
        hex_to_rgb(self.color)
    }
}

/// Split a `0xRRGGBB` value into normalized components.
#[must_use]
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Static face configuration: descriptors, snap angles and shape sizes.
pub struct FaceOptions {
    /// Cube edge length.
    pub cube_size: f32,
    /// Radius of the welcome-screen spectrum shape.
    pub spectrum_size: f32,
    /// Ordered face descriptors, one per material slot.
    pub faces: Vec<FaceDescriptor>,
    /// Target yaw (radians) that turns each face toward the viewer.
    pub face_angles: Vec<f32>,
}

impl Default for FaceOptions {
    fn default() -> Self {
        let base = PI / 4.0;
        Self {
            cube_size: 2.5,
            spectrum_size: 1.5,
            faces: vec![
                FaceDescriptor::new(0, "Accueil", 0x0034_98db, "page-accueil"),
                FaceDescriptor::new(1, "Services", 0x00e7_4c3c, "page-services"),
                FaceDescriptor::new(2, "Concept", 0x009b_59b6, "page-concept"),
                FaceDescriptor::new(3, "Equipes", 0x0015_2972, "page-equipes"),
                FaceDescriptor::new(4, "À propos", 0x00f3_9c12, "page-about"),
                FaceDescriptor::new(5, "Contact", 0x001a_bc9c, "page-contact"),
            ],
            face_angles: vec![
                base,
                base + PI / 2.5,
                base + PI / 1.25,
                base + PI * 1.2,
                base + PI,
                base + PI * 1.5,
            ],
        }
    }
}

impl FaceOptions {
    /// Check that there is exactly one descriptor and one angle per face,
    /// and that descriptor indices match their position.
    pub fn validate(&self) -> Result<(), FaceCubeError> {
        if self.faces.len() != FACE_COUNT {
            return Err(FaceCubeError::InvalidFaces(format!(
                "expected {FACE_COUNT} faces, found {}",
                self.faces.len()
            )));
        }
        if self.face_angles.len() != FACE_COUNT {
            return Err(FaceCubeError::InvalidFaces(format!(
                "expected {FACE_COUNT} face angles, found {}",
                self.face_angles.len()
            )));
        }
        if let Some((pos, face)) = self
            .faces
            .iter()
            .enumerate()
            .find(|(pos, face)| face.index != *pos)
        {
            return Err(FaceCubeError::InvalidFaces(format!(
                "face '{}' at position {pos} declares index {}",
                face.name, face.index
            )));
        }
        Ok(())
    }

    /// Descriptor for a face slot.
    #[must_use]
    pub fn face(&self, index: usize) -> Option<&FaceDescriptor> {
        self.faces.get(index)
    }

    /// Snap yaw for a face slot.
    #[must_use]
    pub fn angle(&self, index: usize) -> Option<f32> {
        self.face_angles.get(index).copied()
    }

    /// Number of configured faces (the modulus for material indices).
    #[must_use]
    pub fn count(&self) -> usize {
        self.faces.len()
    }
}
