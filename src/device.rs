//! The per-frame rendering pipeline.
//!
//! A [`Device`] owns the framebuffer and turns meshes into pixels:
//!
//! 1. **Snapshot** each mesh's [`Transform`] and build its world matrix
//! 2. **Project** the three vertices of every face (in parallel)
//! 3. **Shade** each face once from its world-space centroid and normal
//! 4. **Rasterize** the shaded faces into disjoint framebuffer bands (in
//!    parallel, one worker per band, faces in mesh order)
//!
//! Hosts drive it once per frame tick: [`Device::clear`], [`Device::render`],
//! then [`Device::present`].

use rayon::prelude::*;

use crate::camera::Camera;
use crate::colors::{self, Color4};
use crate::display::{DisplaySurface, PresentError};
use crate::light::PointLight;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::mesh::{Mesh, Vertex};
use crate::render::{FrameBuffer, ProjectedVertex, ScanlineRasterizer};
use crate::settings::RenderSettings;
use crate::transform::Transform;

/// Base color of every face before lighting.
pub const FACE_COLOR: Color4 = colors::WHITE;

/// A face ready for the rasterizer: screen-space vertices and its lit color.
#[derive(Clone, Copy, Debug)]
struct ShadedFace {
    vertices: [ProjectedVertex; 3],
    color: Color4,
}

pub struct Device {
    frame_buffer: FrameBuffer,
    settings: RenderSettings,
    light: PointLight,
    rasterizer: ScanlineRasterizer,
}

impl Device {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_settings(width, height, RenderSettings::default())
    }

    pub fn with_settings(width: u32, height: u32, settings: RenderSettings) -> Self {
        Self {
            frame_buffer: FrameBuffer::new(width, height),
            light: PointLight::new(settings.light_position),
            settings,
            rasterizer: ScanlineRasterizer::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.frame_buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.frame_buffer.height()
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn light(&self) -> &PointLight {
        &self.light
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    /// Resets color and depth for a new frame.
    pub fn clear(&mut self, color: Color4) {
        self.frame_buffer.clear(color);
    }

    /// Flushes the finished frame to the host surface.
    pub fn present<S: DisplaySurface + ?Sized>(&self, surface: &mut S) -> Result<(), PresentError> {
        self.frame_buffer.present(surface)
    }

    /// Depth-tested write of a single screen-space point (`x`, `y` in pixels,
    /// `z` depth). Points off the screen are ignored.
    pub fn draw_point(&mut self, point: Vec3, color: Color4) {
        // Also rejects NaN; the cast below would turn it into 0.
        if !(point.x >= 0.0 && point.y >= 0.0) {
            return;
        }
        self.frame_buffer
            .full_band()
            .draw_point(point.x as i32, point.y as i32, point.z, color);
    }

    /// Takes a model-space vertex to screen space.
    ///
    /// `transform` is the full world-view-projection matrix and `world` the
    /// mesh's world matrix. The screen position comes from `transform`; the
    /// world position and normal used for lighting come from `world`, the
    /// normal without translation.
    pub fn project(&self, vertex: &Vertex, transform: &Mat4, world: &Mat4) -> ProjectedVertex {
        let point = transform.transform_coordinate(vertex.position);
        let world_position = world.transform_coordinate(vertex.position);
        let world_normal = world.transform_normal(vertex.normal);

        // NDC has its origin in the middle of the screen with Y up; screen
        // space starts top-left with Y down.
        let width = self.width() as f32;
        let height = self.height() as f32;
        let x = point.x * width + width / 2.0;
        let y = -point.y * height + height / 2.0;

        ProjectedVertex::new(Vec3::new(x, y, point.z), world_normal, world_position)
    }

    /// Flat-shades and fills one projected triangle.
    pub fn draw_triangle(
        &mut self,
        v1: &ProjectedVertex,
        v2: &ProjectedVertex,
        v3: &ProjectedVertex,
        color: Color4,
    ) {
        let shaded = self.shade(v1, v2, v3, color);
        let mut band = self.frame_buffer.full_band();
        self.rasterizer.draw_triangle(v1, v2, v3, shaded, &mut band);
    }

    /// Draws `meshes` as seen from `camera` into the framebuffer.
    ///
    /// Every mesh's transform is read once, before any face is processed, so
    /// the frame reflects a single consistent pose of the scene.
    pub fn render(&mut self, camera: &Camera, meshes: &[Mesh]) {
        let view = camera.view_matrix();
        let projection = self
            .settings
            .projection(self.width(), self.height())
            .matrix();

        let snapshots: Vec<Transform> = meshes.iter().map(|mesh| *mesh.transform()).collect();

        let mut faces = Vec::new();
        for (mesh, snapshot) in meshes.iter().zip(&snapshots) {
            faces.extend(self.shade_mesh(mesh, snapshot, &view, &projection));
        }

        self.rasterize(&faces);
    }

    /// Projects and shades every face of `mesh` under `transform`.
    fn shade_mesh(
        &self,
        mesh: &Mesh,
        transform: &Transform,
        view: &Mat4,
        projection: &Mat4,
    ) -> Vec<ShadedFace> {
        let world = transform.world_matrix();
        let world_view_projection = *projection * *view * world;

        mesh.faces()
            .par_iter()
            .map(|face| {
                let [a, b, c] = mesh
                    .face_vertices(face)
                    .map(|vertex| self.project(&vertex, &world_view_projection, &world));
                ShadedFace {
                    vertices: [a, b, c],
                    color: self.shade(&a, &b, &c, FACE_COLOR),
                }
            })
            .collect()
    }

    fn shade(
        &self,
        v1: &ProjectedVertex,
        v2: &ProjectedVertex,
        v3: &ProjectedVertex,
        color: Color4,
    ) -> Color4 {
        let intensity = self.light.face_intensity(
            [v1.world, v2.world, v3.world],
            [v1.normal, v2.normal, v3.normal],
        );
        color * intensity
    }

    fn rasterize(&mut self, faces: &[ShadedFace]) {
        let rasterizer = self.rasterizer;
        let bands = self.frame_buffer.bands(self.settings.band_rows);
        log::debug!("rasterizing {} faces into {} bands", faces.len(), bands.len());

        bands.into_par_iter().for_each(|mut band| {
            let (top, bottom) = (band.y_start() as f32, band.y_end() as f32);
            for face in faces {
                let [a, b, c] = &face.vertices;
                let min_y = a.screen.y.min(b.screen.y).min(c.screen.y);
                let max_y = a.screen.y.max(b.screen.y).max(c.screen.y);
                // Cheap reject; the rasterizer clips rows to the band anyway.
                if max_y.floor() < top || min_y.floor() >= bottom {
                    continue;
                }
                rasterizer.draw_triangle(a, b, c, face.color, &mut band);
            }
        });
    }
}
