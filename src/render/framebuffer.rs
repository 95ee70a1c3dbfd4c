//! Color and depth storage for one frame.
//!
//! [`FrameBuffer`] owns a BGRA byte buffer and a per-pixel `f32` depth buffer.
//! [`FrameBand`] is a borrowed view over a horizontal run of rows; splitting
//! the frame into disjoint bands lets several workers rasterize at once
//! without sharing a single pixel.
//!
//! # Depth Buffer
//!
//! Depth is the post-projection z. Smaller values are nearer to the camera, so
//! a cleared cell holds `f32::MAX` ("nothing drawn, infinitely far").

use crate::colors::Color4;
use crate::display::{DisplaySurface, PresentError};

/// Bytes per color cell (B, G, R, A).
pub const BYTES_PER_PIXEL: usize = 4;

/// Depth written by [`FrameBuffer::clear`].
pub const CLEAR_DEPTH: f32 = f32::MAX;

pub struct FrameBuffer {
    color_buffer: Vec<u8>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Allocates both buffers once; they are never resized.
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            color_buffer: vec![0; size * BYTES_PER_PIXEL],
            depth_buffer: vec![CLEAR_DEPTH; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fills every color cell with `color` and resets every depth cell.
    pub fn clear(&mut self, color: Color4) {
        let bgra = color.to_bgra();
        for cell in self.color_buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            cell.copy_from_slice(&bgra);
        }
        self.depth_buffer.fill(CLEAR_DEPTH);
    }

    /// Unconditional write. `(x, y)` must already be inside the frame.
    #[inline]
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Color4) {
        self.full_band().put_pixel(x, y, color);
    }

    /// Depth-tested write. `(x, y)` must already be inside the frame.
    #[inline]
    pub fn put_pixel_depth(&mut self, x: u32, y: u32, z: f32, color: Color4) {
        self.full_band().put_pixel_depth(x, y, z, color);
    }

    /// BGRA bytes of one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y) * BYTES_PER_PIXEL;
        [
            self.color_buffer[i],
            self.color_buffer[i + 1],
            self.color_buffer[i + 2],
            self.color_buffer[i + 3],
        ]
    }

    pub fn depth(&self, x: u32, y: u32) -> f32 {
        self.depth_buffer[self.index(x, y)]
    }

    /// The whole color buffer, BGRA, row-major, top row first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.color_buffer
    }

    /// Copies the color buffer verbatim to the display surface.
    pub fn present<S: DisplaySurface + ?Sized>(&self, surface: &mut S) -> Result<(), PresentError> {
        if surface.width() != self.width || surface.height() != self.height {
            return Err(PresentError::SizeMismatch {
                frame_width: self.width,
                frame_height: self.height,
                surface_width: surface.width(),
                surface_height: surface.height(),
            });
        }
        surface.present(&self.color_buffer)
    }

    /// A single band spanning every row.
    pub fn full_band(&mut self) -> FrameBand<'_> {
        FrameBand {
            color_buffer: &mut self.color_buffer,
            depth_buffer: &mut self.depth_buffer,
            width: self.width,
            y_start: 0,
            y_end: self.height,
        }
    }

    /// Splits the frame into disjoint bands of `rows` rows each (the last one
    /// may be shorter), top to bottom.
    pub fn bands(&mut self, rows: u32) -> Vec<FrameBand<'_>> {
        if self.width == 0 || self.height == 0 {
            return Vec::new();
        }

        let rows = rows.max(1);
        let cells = rows as usize * self.width as usize;
        let width = self.width;
        let height = self.height;

        self.color_buffer
            .chunks_mut(cells * BYTES_PER_PIXEL)
            .zip(self.depth_buffer.chunks_mut(cells))
            .enumerate()
            .map(|(i, (color_buffer, depth_buffer))| {
                let y_start = i as u32 * rows;
                FrameBand {
                    color_buffer,
                    depth_buffer,
                    width,
                    y_start,
                    y_end: (y_start + rows).min(height),
                }
            })
            .collect()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} frame",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}

/// Exclusive view over rows `[y_start, y_end)` of a [`FrameBuffer`].
///
/// Coordinates are frame coordinates, not band-local. Holding `&mut` to the
/// band is what makes each depth test and its color write a single unit: no
/// other band can reach these pixels.
pub struct FrameBand<'a> {
    color_buffer: &'a mut [u8],
    depth_buffer: &'a mut [f32],
    width: u32,
    y_start: u32,
    y_end: u32,
}

impl FrameBand<'_> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn y_start(&self) -> u32 {
        self.y_start
    }

    /// One past the last row of the band.
    pub fn y_end(&self) -> u32 {
        self.y_end
    }

    /// Screen-bounds gate: depth-tested write if `(x, y)` lies on the screen
    /// and in this band, otherwise nothing.
    #[inline]
    pub fn draw_point(&mut self, x: i32, y: i32, z: f32, color: Color4) {
        if x >= 0 && (x as u32) < self.width && y >= self.y_start as i32 && (y as u32) < self.y_end
        {
            self.put_pixel_depth(x as u32, y as u32, z, color);
        }
    }

    /// Unconditional write; `(x, y)` must lie in the band.
    #[inline]
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Color4) {
        let i = self.index(x, y) * BYTES_PER_PIXEL;
        self.color_buffer[i..i + BYTES_PER_PIXEL].copy_from_slice(&color.to_bgra());
    }

    /// Depth-tested write; `(x, y)` must lie in the band.
    ///
    /// A fragment farther than what is stored (`stored < z`) is discarded.
    /// Otherwise depth and color are both replaced, so an equal depth lets the
    /// later fragment win.
    #[inline]
    pub fn put_pixel_depth(&mut self, x: u32, y: u32, z: f32, color: Color4) {
        let index = self.index(x, y);
        if self.depth_buffer[index] < z {
            return;
        }

        self.depth_buffer[index] = z;
        let i = index * BYTES_PER_PIXEL;
        self.color_buffer[i..i + BYTES_PER_PIXEL].copy_from_slice(&color.to_bgra());
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y >= self.y_start && y < self.y_end,
            "pixel ({x}, {y}) outside band rows {}..{}",
            self.y_start,
            self.y_end
        );
        (y - self.y_start) as usize * self.width as usize + x as usize
    }
}
