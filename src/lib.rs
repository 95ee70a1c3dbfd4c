//! A CPU-only software 3D rasterizer.
//!
//! Meshes are transformed into screen space, flat-shaded by a single point
//! light and scan-converted into a color + depth framebuffer. Finished frames
//! are flushed to any [`DisplaySurface`]; with the `sdl` feature an SDL2
//! window is provided as one.
//!
//! # Quick Start
//!
//! ```ignore
//! use softrast::prelude::*;
//!
//! let meshes = load_scene("monkey.babylon")?;
//! let mut device = Device::new(640, 480);
//! let mut surface = MemorySurface::new(640, 480);
//!
//! device.clear(colors::BACKGROUND);
//! device.render(&Camera::default(), &meshes);
//! device.present(&mut surface)?;
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod device;
pub mod display;
pub mod light;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod scene;
pub mod settings;
pub mod texture;
pub mod transform;
#[cfg(feature = "sdl")]
pub mod window;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use colors::Color4;
pub use device::Device;
pub use display::{DisplaySurface, MemorySurface, PresentError};
pub use mesh::{Face, Mesh, MeshError, Vertex};
pub use projection::Projection;
pub use render::{FrameBuffer, ProjectedVertex};
pub use scene::{load_scene, parse_scene, LoadError};
pub use settings::RenderSettings;
pub use texture::Texture;
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use softrast::prelude::*;
/// ```
pub mod prelude {
    pub use crate::camera::Camera;
    pub use crate::colors::{self, Color4};
    pub use crate::device::Device;
    pub use crate::display::{DisplaySurface, MemorySurface};
    pub use crate::light::PointLight;
    pub use crate::mesh::{Face, Mesh, Vertex};
    pub use crate::scene::{load_scene, parse_scene};
    pub use crate::settings::RenderSettings;
    pub use crate::texture::Texture;
    pub use crate::transform::Transform;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec3::Vec3;

    // Window
    #[cfg(feature = "sdl")]
    pub use crate::window::{FpsCounter, FrameLimiter, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{FrameBand, FrameBuffer, ProjectedVertex, ScanlineRasterizer};
}
