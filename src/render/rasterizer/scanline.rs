//! Scanline-based triangle rasterization.
//!
//! Triangles are filled one horizontal line at a time, walking two edges of the
//! triangle downward and filling the span between them.
//!
//! # Algorithm Overview
//!
//! 1. **Sort vertices** by Y coordinate (top to bottom in screen space)
//! 2. **Classify** the middle vertex as lying right or left of the long edge
//! 3. **Rasterize** each scanline by interpolating X and depth along the two
//!    active edges, then across the span
//!
//! # Edge Pairs
//!
//! The long edge `p1 -> p3` is always active. The short side switches from
//! `p1 -> p2` to `p2 -> p3` when the scanline passes the middle vertex:
//!
//! ```text
//!        p1                      p1
//!        /\                      /\
//!       /  \                    /  \
//!      /    \ p2            p2 /    \
//!     /     /                  \     \
//!    /    /                     \     \
//!   /   /                        \     \
//!  /  /                           \     \
//!  p3                              \_____\ p3
//!
//!   p2 right of p1->p3        p2 left of p1->p3
//! ```
//!
//! The classification compares the inverse slopes `dx/dy` of `p1 -> p2` and
//! `p1 -> p3`. A zero-height edge has an inverse slope of 0.
//!
//! # Spans
//!
//! Each span is filled from its smaller X to its larger X whatever edge it
//! came from, so the pixels a triangle covers do not depend on the order its
//! vertices were given in. A pixel column `x` is covered when
//! `floor(sx) <= x < floor(ex)`; rows run from `floor(p1.y)` to `floor(p3.y)`
//! inclusive.
//!
//! # Bands
//!
//! The target is a [`FrameBand`], not the whole frame. Rows outside the band
//! are skipped before any interpolation, so a frame split into bands produces
//! exactly the pixels a single full-frame band would.

use super::ProjectedVertex;
use crate::colors::Color4;
use crate::math::lerp;
use crate::math::vec3::Vec3;
use crate::render::framebuffer::FrameBand;

/// Scanline triangle rasterizer with per-pixel depth testing.
///
/// Every pixel of a triangle gets the same color; the caller applies
/// lighting before handing the color over.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    /// Creates a new scanline rasterizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Fills the triangle `(v1, v2, v3)` into `band`.
    ///
    /// Vertices may come in any order. Pixels off the screen or outside the
    /// band are never written. A triangle whose vertices all coincide draws
    /// nothing.
    pub fn draw_triangle(
        &self,
        v1: &ProjectedVertex,
        v2: &ProjectedVertex,
        v3: &ProjectedVertex,
        color: Color4,
        band: &mut FrameBand<'_>,
    ) {
        let [p1, p2, p3] = Self::sort_vertices([v1.screen, v2.screen, v3.screen]);

        let d_p1p2 = inverse_slope(p1, p2);
        let d_p1p3 = inverse_slope(p1, p3);
        let middle_on_right = d_p1p2 > d_p1p3;

        let y_min = (p1.y.floor() as i64).max(band.y_start() as i64);
        let y_max = (p3.y.floor() as i64).min(band.y_end() as i64 - 1);

        for y in y_min..=y_max {
            let above_middle = (y as f32) < p2.y;
            let (pa, pb, pc, pd) = match (middle_on_right, above_middle) {
                (true, true) => (p1, p3, p1, p2),
                (true, false) => (p1, p3, p2, p3),
                (false, true) => (p1, p2, p1, p3),
                (false, false) => (p2, p3, p1, p3),
            };
            Self::process_scan_line(y as i32, pa, pb, pc, pd, color, band);
        }
    }

    /// Sorts three screen points by Y (ascending: top to bottom).
    ///
    /// Three compare-and-swap passes; points with equal Y keep their order.
    fn sort_vertices(mut points: [Vec3; 3]) -> [Vec3; 3] {
        if points[1].y < points[0].y {
            points.swap(0, 1);
        }
        if points[2].y < points[1].y {
            points.swap(1, 2);
        }
        if points[1].y < points[0].y {
            points.swap(0, 1);
        }
        points
    }

    /// Fills one row between edge `pa -> pb` and edge `pc -> pd`.
    ///
    /// ```text
    ///   pa              pc
    ///    \              |
    ///     sx ---------- ex     <- row y
    ///      \            |
    ///       pb          pd
    /// ```
    fn process_scan_line(
        y: i32,
        pa: Vec3,
        pb: Vec3,
        pc: Vec3,
        pd: Vec3,
        color: Color4,
        band: &mut FrameBand<'_>,
    ) {
        let yf = y as f32;
        let gradient1 = edge_gradient(yf, pa, pb);
        let gradient2 = edge_gradient(yf, pc, pd);

        let mut sx = lerp(pa.x, pb.x, gradient1);
        let mut ex = lerp(pc.x, pd.x, gradient2);
        let mut z1 = lerp(pa.z, pb.z, gradient1);
        let mut z2 = lerp(pc.z, pd.z, gradient2);

        if sx > ex {
            std::mem::swap(&mut sx, &mut ex);
            std::mem::swap(&mut z1, &mut z2);
        }

        // Columns outside the screen would be rejected by draw_point anyway;
        // skip them so huge triangles cost no more than the screen width.
        let start = (sx.floor() as i32).max(0);
        let end = (ex.floor() as i32).min(band.width() as i32);

        for x in start..end {
            let z = lerp(z1, z2, (x as f32 - sx) / (ex - sx));
            band.draw_point(x, y, z, color);
        }
    }
}

/// `dx / dy` of the edge `from -> to`; 0 for a zero-height edge.
#[inline]
fn inverse_slope(from: Vec3, to: Vec3) -> f32 {
    let dy = to.y - from.y;
    if dy > 0.0 {
        (to.x - from.x) / dy
    } else {
        0.0
    }
}

/// How far row `y` lies along the edge `a -> b`; 1 when the edge is flat.
#[inline]
fn edge_gradient(y: f32, a: Vec3, b: Vec3) -> f32 {
    if a.y == b.y {
        1.0
    } else {
        (y - a.y) / (b.y - a.y)
    }
}
