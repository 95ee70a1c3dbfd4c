//! Display surfaces the finished frame is flushed to.
//!
//! A surface is a fixed-size 32-bit BGRA bitmap owned by the host. The
//! renderer reads its size once and afterwards only pushes whole frames to it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("frame is {frame_width}x{frame_height} but the surface is {surface_width}x{surface_height}")]
    SizeMismatch {
        frame_width: u32,
        frame_height: u32,
        surface_width: u32,
        surface_height: u32,
    },
    #[error("display backend error: {0}")]
    Backend(String),
}

/// A rectangle of surface pixels, `(x, y)` top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Host bitmap that receives finished frames.
pub trait DisplaySurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Replaces the surface contents with `bgra` (exactly
    /// `width * height * 4` bytes, row-major) and marks the whole surface dirty.
    fn present(&mut self, bgra: &[u8]) -> Result<(), PresentError>;
}

/// Surface backed by an in-memory byte buffer.
///
/// Used for headless rendering and by the tests; it records the last dirty
/// region so callers can tell whether a frame was flushed.
pub struct MemorySurface {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
    dirty: Option<DirtyRect>,
}

impl MemorySurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bytes: vec![0; width as usize * height as usize * 4],
            width,
            height,
            dirty: None,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Region marked dirty by the last present, if any.
    pub fn dirty(&self) -> Option<DirtyRect> {
        self.dirty
    }

    /// Takes and resets the dirty region, as a compositor would after redrawing.
    pub fn take_dirty(&mut self) -> Option<DirtyRect> {
        self.dirty.take()
    }

    pub fn bounds(&self) -> DirtyRect {
        DirtyRect {
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
        }
    }
}

impl DisplaySurface for MemorySurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn present(&mut self, bgra: &[u8]) -> Result<(), PresentError> {
        if bgra.len() != self.bytes.len() {
            return Err(PresentError::Backend(format!(
                "expected {} bytes, got {}",
                self.bytes.len(),
                bgra.len()
            )));
        }
        self.bytes.copy_from_slice(bgra);
        self.dirty = Some(self.bounds());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_copies_and_marks_dirty() {
        let mut surface = MemorySurface::new(2, 1);
        assert_eq!(surface.dirty(), None);

        surface.present(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(surface.bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(surface.take_dirty(), Some(surface.bounds()));
        assert_eq!(surface.dirty(), None);
    }

    #[test]
    fn present_rejects_short_buffer() {
        let mut surface = MemorySurface::new(2, 2);
        assert!(surface.present(&[0; 4]).is_err());
        assert_eq!(surface.dirty(), None);
    }
}
