//! Perspective projection parameters.
//!
//! The [`Projection`] struct is the single source of truth for all perspective
//! projection parameters (FOV, aspect ratio, near/far planes).

use crate::math::mat4::Mat4;

/// Reference vertical field of view, in radians.
pub const DEFAULT_FOV_Y: f32 = 0.78;
pub const DEFAULT_Z_NEAR: f32 = 0.01;
pub const DEFAULT_Z_FAR: f32 = 100.0;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians.
    fov_y: f32,
    /// Aspect ratio (width / height).
    aspect_ratio: f32,
    /// Near clipping plane distance.
    z_near: f32,
    /// Far clipping plane distance.
    z_far: f32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `fov_y` - Vertical field of view in radians
    /// * `aspect_ratio` - Width divided by height
    /// * `z_near` - Near plane distance (must be > 0)
    /// * `z_far` - Far plane distance (must be > z_near)
    pub fn new(fov_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            fov_y,
            aspect_ratio,
            z_near,
            z_far,
        }
    }

    /// Returns the vertical field of view in radians.
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    /// Generates the left-handed perspective projection matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_fov_lh(self.fov_y, self.aspect_ratio, self.z_near, self.z_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec3::Vec3;
    use approx::assert_relative_eq;

    #[test]
    fn matrix_keeps_view_axis_centered() {
        let proj = Projection::new(DEFAULT_FOV_Y, 4.0 / 3.0, DEFAULT_Z_NEAR, DEFAULT_Z_FAR);
        let p = proj.matrix().transform_coordinate(Vec3::new(0.0, 0.0, 10.0));
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 0.0);
    }

    #[test]
    fn wider_aspect_narrows_horizontal_scale() {
        let point = Vec3::new(1.0, 1.0, 10.0);
        let square = Projection::new(DEFAULT_FOV_Y, 1.0, 0.1, 100.0).matrix() * point;
        let wide = Projection::new(DEFAULT_FOV_Y, 2.0, 0.1, 100.0).matrix() * point;
        assert_relative_eq!(wide.x, square.x / 2.0, epsilon = 1e-6);
        assert_relative_eq!(wide.y, square.y, epsilon = 1e-6);
    }
}
