//! Floating-point colors and their conversion to framebuffer bytes.
//!
//! Colors are kept as unclamped `f32` channels while shading and only clamped
//! when packed into the 4-byte BGRA layout used by the framebuffer and the
//! display surface.

use std::ops::Mul;

/// A 4-channel color sample with channels nominally in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color4 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

pub const WHITE: Color4 = Color4::new(1.0, 1.0, 1.0, 1.0);
pub const BLACK: Color4 = Color4::new(0.0, 0.0, 0.0, 1.0);

/// Frame clear color used by the viewer.
pub const BACKGROUND: Color4 = BLACK;

impl Color4 {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a color from 8-bit channels.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Builds a color from a pixel stored in BGRA byte order.
    pub fn from_bgra(pixel: [u8; 4]) -> Self {
        let [b, g, r, a] = pixel;
        Self::from_rgba8(r, g, b, a)
    }

    /// Packs the color into BGRA bytes.
    ///
    /// Each channel is clamped to `[0, 1]`, scaled to `[0, 255]` and truncated.
    #[inline]
    pub fn to_bgra(self) -> [u8; 4] {
        [
            channel_to_byte(self.b),
            channel_to_byte(self.g),
            channel_to_byte(self.r),
            channel_to_byte(self.a),
        ]
    }

    /// Scales every channel, alpha included.
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Self::new(
            self.r * factor,
            self.g * factor,
            self.b * factor,
            self.a * factor,
        )
    }
}

#[inline]
fn channel_to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

impl Mul<f32> for Color4 {
    type Output = Color4;

    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

/// Component-wise modulation of two colors.
impl Mul<Color4> for Color4 {
    type Output = Color4;

    fn mul(self, rhs: Color4) -> Self::Output {
        Self::new(
            self.r * rhs.r,
            self.g * rhs.g,
            self.b * rhs.b,
            self.a * rhs.a,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_bgra_swaps_channel_order() {
        let c = Color4::new(1.0, 0.0, 0.5, 1.0);
        assert_eq!(c.to_bgra(), [127, 0, 255, 255]);
    }

    #[test]
    fn to_bgra_truncates() {
        // 0.7071 * 255 = 180.31
        assert_eq!((WHITE * 0.7071).to_bgra(), [180, 180, 180, 180]);
    }

    #[test]
    fn out_of_range_channels_clamp_only_on_conversion() {
        let bright = Color4::new(2.0, -1.0, 0.5, 1.0);
        assert_eq!(bright.r, 2.0);
        assert_eq!(bright.to_bgra(), [127, 0, 255, 255]);
        // Scaling back down after an overshoot recovers the in-range value.
        assert_eq!((bright * 0.5).to_bgra()[2], 255);
        assert_eq!((bright * 0.25).to_bgra()[2], 127);
    }

    #[test]
    fn modulate_is_component_wise() {
        let c = Color4::new(0.5, 1.0, 0.25, 1.0) * Color4::new(0.5, 0.5, 1.0, 0.5);
        assert_eq!(c, Color4::new(0.25, 0.5, 0.25, 0.5));
    }

    #[test]
    fn from_bgra_reads_blue_first() {
        let c = Color4::from_bgra([255, 0, 0, 255]);
        assert_eq!(c, Color4::new(0.0, 0.0, 1.0, 1.0));
    }
}
