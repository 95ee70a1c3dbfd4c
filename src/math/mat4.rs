//! 4x4 transformation matrix using column-major convention.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//!
//! The classic row-vector pipeline `world * view * projection` therefore reads
//! `projection * view * world` here.

use std::ops::Mul;

use super::vec3::Vec3;

/// 4x4 matrix stored as `data[row][col]` with column-major convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Mat4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix.
    pub fn translation(offset: Vec3) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, offset.x],
            [0.0, 1.0, 0.0, offset.y],
            [0.0, 0.0, 1.0, offset.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the X axis.
    ///
    /// Left-handed: a positive angle turns +Y toward +Z.
    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Y axis.
    ///
    /// Left-handed: a positive angle turns +Z toward +X (and +X toward -Z).
    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Z axis.
    ///
    /// A positive angle turns +X toward +Y.
    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Euler rotation: roll (Z) first, then pitch (X), then yaw (Y).
    pub fn rotation_yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Self {
        Mat4::rotation_y(yaw) * Mat4::rotation_x(pitch) * Mat4::rotation_z(roll)
    }

    /// Creates a left-handed perspective projection from a vertical field of view.
    ///
    /// After the divide by `w` (= view-space z), depth maps to 0 at `near` and
    /// 1 at `far`, growing with distance, so a smaller depth is nearer.
    pub fn perspective_fov_lh(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let y_scale = 1.0 / (fov_y / 2.0).tan();
        let x_scale = y_scale / aspect_ratio;
        let q = far / (far - near);
        Mat4::new([
            [x_scale, 0.0, 0.0, 0.0],
            [0.0, y_scale, 0.0, 0.0],
            [0.0, 0.0, q, -q * near],
            [0.0, 0.0, 1.0, 0.0],
        ])
    }

    /// Creates a view matrix with left-handed coordinate system.
    ///
    /// # Arguments
    ///
    /// * `eye` - The position of the camera.
    /// * `target` - The point the camera is looking at.
    /// * `up` - The up direction of the camera.
    pub fn look_at_lh(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let right = up.cross(forward).normalize();
        let up = forward.cross(right);

        Self::new([
            [right.x, right.y, right.z, -right.dot(eye)],
            [up.x, up.y, up.z, -up.dot(eye)],
            [forward.x, forward.y, forward.z, -forward.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Transforms a point (w = 1) and divides by the resulting w.
    ///
    /// A w of exactly zero skips the divide; there is no clipping stage to
    /// reject such points earlier.
    pub fn transform_coordinate(&self, v: Vec3) -> Vec3 {
        let m = &self.data;
        let x = m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z + m[0][3];
        let y = m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z + m[1][3];
        let z = m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z + m[2][3];
        let w = m[3][0] * v.x + m[3][1] * v.y + m[3][2] * v.z + m[3][3];

        if w != 0.0 && w != 1.0 {
            Vec3::new(x / w, y / w, z / w)
        } else {
            Vec3::new(x, y, z)
        }
    }

    /// Transforms a direction (w = 0): rotation and scale apply, translation does not.
    pub fn transform_normal(&self, v: Vec3) -> Vec3 {
        let m = &self.data;
        Vec3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

}

/// Matrix multiplication: Mat4 * Mat4.
///
/// For column-major convention, `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for (row, out) in result.iter_mut().enumerate() {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.data[row][k] * rhs.data[k][col]).sum();
            }
        }

        Mat4::new(result)
    }
}

/// Transform a point: same as [`Mat4::transform_coordinate`].
impl Mul<Vec3> for Mat4 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Self::Output {
        self.transform_coordinate(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn identity_leaves_points_untouched() {
        let p = Vec3::new(1.5, -2.0, 3.0);
        assert_eq!(Mat4::identity() * p, p);
    }

    #[test]
    fn rotation_applies_before_translation() {
        let world = Mat4::translation(Vec3::new(0.0, 0.0, 5.0))
            * Mat4::rotation_yaw_pitch_roll(FRAC_PI_2, 0.0, 0.0);
        let p = world.transform_coordinate(Vec3::new(1.0, 0.0, 0.0));
        assert_vec_eq(p, Vec3::new(0.0, 0.0, 4.0));
    }

    #[test]
    fn rotations_follow_left_handed_convention() {
        assert_vec_eq(
            Mat4::rotation_x(FRAC_PI_2) * Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert_vec_eq(
            Mat4::rotation_y(FRAC_PI_2) * Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
        );
        assert_vec_eq(
            Mat4::rotation_z(FRAC_PI_2) * Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
    }

    #[test]
    fn yaw_pitch_roll_applies_roll_then_pitch_then_yaw() {
        // Roll takes +X to +Y, pitch takes +Y to +Z, yaw takes +Z to +X.
        let m = Mat4::rotation_yaw_pitch_roll(FRAC_PI_2, FRAC_PI_2, FRAC_PI_2);
        assert_vec_eq(m * Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn transform_normal_ignores_translation() {
        let world = Mat4::translation(Vec3::new(10.0, 20.0, 30.0));
        let n = world.transform_normal(Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(n, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn zero_rotation_is_identity() {
        assert_eq!(Mat4::rotation_yaw_pitch_roll(0.0, 0.0, 0.0), Mat4::identity());
    }

    #[test]
    fn look_at_moves_eye_to_origin_and_target_forward() {
        let eye = Vec3::new(0.0, 0.0, 10.0);
        let view = Mat4::look_at_lh(eye, Vec3::ZERO, Vec3::UP);
        assert_vec_eq(view * eye, Vec3::ZERO);
        assert_vec_eq(view * Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn perspective_maps_near_and_far_to_unit_depth_range() {
        let proj = Mat4::perspective_fov_lh(0.78, 4.0 / 3.0, 0.5, 50.0);
        assert_relative_eq!((proj * Vec3::new(0.0, 0.0, 0.5)).z, 0.0, epsilon = 1e-5);
        assert_relative_eq!((proj * Vec3::new(0.0, 0.0, 50.0)).z, 1.0, epsilon = 1e-5);

        let near = (proj * Vec3::new(0.0, 0.0, 2.0)).z;
        let far = (proj * Vec3::new(0.0, 0.0, 20.0)).z;
        assert!(near < far);
    }

    #[test]
    fn multiplication_chains_right_to_left() {
        let a = Mat4::translation(Vec3::new(1.0, 0.0, 0.0));
        let b = Mat4::rotation_z(FRAC_PI_2);
        let p = Vec3::new(1.0, 0.0, 0.0);
        assert_vec_eq((a * b) * p, a * (b * p));
    }
}
