//! Look-at camera.
//!
//! Uses a **left-handed** coordinate system with the up vector fixed to world
//! +Y. The camera is a plain value: the host moves it between frames and hands
//! a reference to [`Device::render`](crate::Device::render).

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for Camera {
    /// Ten units out on +Z, looking at the origin.
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO)
    }
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// World → view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_lh(self.position, self.target, Vec3::UP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn target_lies_on_view_z_axis() {
        let camera = Camera::new(Vec3::new(3.0, 4.0, -5.0), Vec3::new(0.0, 1.0, 2.0));
        let distance = (camera.target - camera.position).length();
        let p = camera.view_matrix() * camera.target;
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, distance, epsilon = 1e-4);
    }

    #[test]
    fn default_sees_origin_ten_units_ahead() {
        let p = Camera::default().view_matrix() * Vec3::ZERO;
        assert_relative_eq!(p.z, 10.0, epsilon = 1e-5);
    }
}
