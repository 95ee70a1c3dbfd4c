//! Triangle rasterization.
//!
//! The device projects every vertex into a [`ProjectedVertex`] before any
//! pixel work starts; the rasterizer only ever sees fully transformed
//! vertices.

mod scanline;

pub use scanline::ScanlineRasterizer;

use crate::math::vec3::Vec3;

/// A vertex after projection.
///
/// `screen` holds pixel coordinates in `x`/`y` and the post-projection depth in
/// `z`. `normal` and `world` stay in world space for lighting.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectedVertex {
    pub screen: Vec3,
    pub normal: Vec3,
    pub world: Vec3,
}

impl ProjectedVertex {
    pub fn new(screen: Vec3, normal: Vec3, world: Vec3) -> Self {
        Self {
            screen,
            normal,
            world,
        }
    }

    /// A vertex that only carries a screen position, for driving the
    /// rasterizer directly.
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            screen: Vec3::new(x, y, z),
            ..Self::default()
        }
    }
}
