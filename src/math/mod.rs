//! Minimal linear algebra for the pipeline: points, directions and 4x4 transforms.

pub mod mat4;
pub mod vec3;

/// Linear interpolation with the parameter clamped to `[0, 1]`.
///
/// The clamp keeps a gradient that overshoots at shared-Y seams from
/// extrapolating past the segment end points.
#[inline]
pub fn lerp(min: f32, max: f32, t: f32) -> f32 {
    min + (max - min) * t.clamp(0.0, 1.0)
}
