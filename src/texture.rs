//! Standalone 2D color sampler.
//!
//! Textures are decoded once through the `image` crate into BGRA bytes and are
//! immutable afterwards. The rasterizer does not sample them; they are exposed
//! for hosts that want to look up colors by UV.

use std::path::Path;

use crate::colors::{self, Color4};

/// A fixed-size BGRA texture, or an unloaded placeholder that samples white.
#[derive(Debug, Clone, Default)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Option<Vec<u8>>,
}

impl Texture {
    /// Load a texture from an image file (PNG, JPG, etc.)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, image::ImageError> {
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();

        let pixels = img
            .pixels()
            .flat_map(|p| {
                let [r, g, b, a] = p.0;
                [b, g, r, a]
            })
            .collect();

        Ok(Self {
            width,
            height,
            pixels: Some(pixels),
        })
    }

    /// Loads a texture, falling back to an unloaded one on any failure.
    ///
    /// A missing or corrupt file is not fatal for rendering: the failure is
    /// logged and every sample comes back opaque white.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(texture) => {
                log::info!(
                    "loaded texture {} ({}x{})",
                    path.display(),
                    texture.width,
                    texture.height
                );
                texture
            }
            Err(err) => {
                log::warn!("failed to load texture {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Wraps an existing BGRA pixel buffer.
    ///
    /// Returns `None` when the buffer length is not `width * height * 4` or a
    /// dimension is zero.
    pub fn from_bgra(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|cells| cells.checked_mul(4));
        if width == 0 || height == 0 || expected != Some(pixels.len()) {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels: Some(pixels),
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.pixels.is_some()
    }

    /// Sample the texture at UV coordinates using nearest-neighbor filtering.
    ///
    /// `(u * width, v * height)` is floored to a texel and wrapped modulo the
    /// dimensions (rem_euclid, so negative coordinates repeat too). No V flip.
    #[inline]
    pub fn map(&self, u: f32, v: f32) -> Color4 {
        let Some(pixels) = &self.pixels else {
            return colors::WHITE;
        };

        let x = ((u * self.width as f32).floor() as i64).rem_euclid(self.width as i64) as usize;
        let y = ((v * self.height as f32).floor() as i64).rem_euclid(self.height as i64) as usize;

        let pos = (y * self.width as usize + x) * 4;
        Color4::from_bgra([
            pixels[pos],
            pixels[pos + 1],
            pixels[pos + 2],
            pixels[pos + 3],
        ])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
