//! Per-mesh placement in the world.
//!
//! A [`Transform`] holds a position and Euler rotation with a fluent API for
//! animating them between frames. It is `Copy`, so the renderer takes a
//! snapshot at the start of each render call and never observes a transform
//! that changes mid-frame.

use crate::math::{mat4::Mat4, vec3::Vec3};

/// Position plus Euler rotation (radians): x = pitch, y = yaw, z = roll.
///
/// Mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// mesh.transform_mut()
///     .rotate_x(0.01)
///     .rotate_y(0.01);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    position: Vec3,
    rotation: Vec3,
}

impl Transform {
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    // ============ Position ============

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    /// Translate by a delta vector.
    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.position += delta;
        self
    }

    // ============ Rotation ============

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Vec3) -> &mut Self {
        self.rotation = rotation;
        self
    }

    /// Add a delta rotation (Euler angles in radians).
    pub fn rotate(&mut self, delta: Vec3) -> &mut Self {
        self.rotation += delta;
        self
    }

    /// Rotate around the X axis (pitch).
    pub fn rotate_x(&mut self, angle: f32) -> &mut Self {
        self.rotation.x += angle;
        self
    }

    /// Rotate around the Y axis (yaw).
    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        self.rotation.y += angle;
        self
    }

    /// Rotate around the Z axis (roll).
    pub fn rotate_z(&mut self, angle: f32) -> &mut Self {
        self.rotation.z += angle;
        self
    }

    // ============ Matrix Generation ============

    /// Model → world matrix.
    ///
    /// Rotation (yaw = `rotation.y`, pitch = `rotation.x`, roll = `rotation.z`)
    /// is applied first, translation second.
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::translation(self.position)
            * Mat4::rotation_yaw_pitch_roll(self.rotation.y, self.rotation.x, self.rotation.z)
    }
}
