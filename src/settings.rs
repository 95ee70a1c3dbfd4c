//! Library-side render configuration.

use crate::light::DEFAULT_LIGHT_POSITION;
use crate::math::vec3::Vec3;
use crate::projection::{Projection, DEFAULT_FOV_Y, DEFAULT_Z_FAR, DEFAULT_Z_NEAR};

/// Rows per framebuffer band handed to one rasterization worker.
pub const DEFAULT_BAND_ROWS: u32 = 32;

/// Knobs for a [`Device`](crate::Device). `Default` reproduces the reference
/// renderer: 0.78 rad vertical FOV, planes at 0.01 and 100, light at
/// `(0, 10, 10)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub fov_y: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub light_position: Vec3,
    /// Band height for parallel rasterization. Any value gives the same image;
    /// it only changes how the work is split.
    pub band_rows: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            fov_y: DEFAULT_FOV_Y,
            z_near: DEFAULT_Z_NEAR,
            z_far: DEFAULT_Z_FAR,
            light_position: DEFAULT_LIGHT_POSITION,
            band_rows: DEFAULT_BAND_ROWS,
        }
    }
}

impl RenderSettings {
    pub fn with_band_rows(mut self, band_rows: u32) -> Self {
        self.band_rows = band_rows;
        self
    }

    /// Projection for a `width` x `height` target.
    pub fn projection(&self, width: u32, height: u32) -> Projection {
        Projection::new(
            self.fov_y,
            width as f32 / height as f32,
            self.z_near,
            self.z_far,
        )
    }
}
