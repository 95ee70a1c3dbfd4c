//! Framebuffer storage and triangle scan conversion.

pub mod framebuffer;
pub mod rasterizer;

pub use framebuffer::{FrameBand, FrameBuffer};
pub use rasterizer::{ProjectedVertex, ScanlineRasterizer};
