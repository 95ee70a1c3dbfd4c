//! Lighting for the renderer.

use crate::math::vec3::Vec3;

/// Reference light placement: above and in front of the origin.
pub const DEFAULT_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 10.0, 10.0);

/// A point light at a fixed world position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(DEFAULT_LIGHT_POSITION)
    }
}

impl PointLight {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// Lambert term for a surface point: the cosine between the surface normal
    /// and the direction to the light, clamped at zero.
    ///
    /// Both vectors are normalized here, so callers can pass an averaged,
    /// non-unit normal.
    pub fn intensity(&self, point: Vec3, normal: Vec3) -> f32 {
        let to_light = (self.position - point).normalize();
        normal.normalize().dot(to_light).max(0.0)
    }

    /// Flat-shading intensity for a whole face, from its three world-space
    /// vertex positions and normals.
    ///
    /// The face normal is the average of the vertex normals and the light
    /// direction is taken from the face centroid.
    pub fn face_intensity(&self, positions: [Vec3; 3], normals: [Vec3; 3]) -> f32 {
        let centroid = Vec3::average3(positions[0], positions[1], positions[2]);
        let face_normal = Vec3::average3(normals[0], normals[1], normals[2]);
        self.intensity(centroid, face_normal)
    }
}
