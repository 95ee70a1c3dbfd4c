//! Scene loading from Babylon-style JSON files.
//!
//! Only the parts of the format the renderer consumes are modeled:
//!
//! ```text
//! {
//!   "meshes": [
//!     {
//!       "name": "Cube",
//!       "vertices": [x, y, z, nx, ny, nz, (u, v)*uvCount, ...],
//!       "indices": [a, b, c, ...],
//!       "uvCount": 0 | 1 | 2,
//!       "position": [x, y, z],
//!       "rotation": [pitch, yaw, roll]      (optional)
//!     }
//!   ]
//! }
//! ```
//!
//! Every other field is ignored. A scene is validated as a whole: the first
//! problem in any mesh fails the load and no meshes are returned.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::math::vec3::Vec3;
use crate::mesh::{Face, Mesh, MeshError, Vertex};
use crate::transform::Transform;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("malformed scene: {0}")]
    Json(#[from] serde_json::Error),
    #[error("mesh {name:?}: unsupported uvCount {uv_count}")]
    UnsupportedUvCount { name: String, uv_count: u32 },
    #[error("mesh {name:?}: {len} vertex values is not a multiple of the stride {stride}")]
    RaggedVertices {
        name: String,
        len: usize,
        stride: usize,
    },
    #[error("mesh {name:?}: {len} indices is not a multiple of 3")]
    RaggedIndices { name: String, len: usize },
    #[error("mesh {name:?}: {source}")]
    Mesh { name: String, source: MeshError },
}

/// Floats per vertex in the `vertices` array, chosen by `uvCount`.
///
/// Only the leading position and normal are read; texture coordinates are
/// skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexStride {
    PositionNormal,
    OneUv,
    TwoUv,
}

impl VertexStride {
    pub fn from_uv_count(uv_count: u32) -> Option<Self> {
        match uv_count {
            0 => Some(Self::PositionNormal),
            1 => Some(Self::OneUv),
            2 => Some(Self::TwoUv),
            _ => None,
        }
    }

    pub fn floats(self) -> usize {
        match self {
            Self::PositionNormal => 6,
            Self::OneUv => 8,
            Self::TwoUv => 10,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SceneFile {
    meshes: Vec<MeshRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MeshRecord {
    name: String,
    vertices: Vec<f32>,
    indices: Vec<u32>,
    uv_count: u32,
    position: [f32; 3],
    #[serde(default)]
    rotation: [f32; 3],
}

impl MeshRecord {
    fn into_mesh(self) -> Result<Mesh, LoadError> {
        let stride = VertexStride::from_uv_count(self.uv_count).ok_or_else(|| {
            LoadError::UnsupportedUvCount {
                name: self.name.clone(),
                uv_count: self.uv_count,
            }
        })?;

        let stride = stride.floats();
        if self.vertices.len() % stride != 0 {
            return Err(LoadError::RaggedVertices {
                name: self.name,
                len: self.vertices.len(),
                stride,
            });
        }
        if self.indices.len() % 3 != 0 {
            return Err(LoadError::RaggedIndices {
                name: self.name,
                len: self.indices.len(),
            });
        }

        let vertices = self
            .vertices
            .chunks_exact(stride)
            .map(|v| Vertex::new(Vec3::from_slice(&v[0..3]), Vec3::from_slice(&v[3..6])))
            .collect();

        let faces = self
            .indices
            .chunks_exact(3)
            .map(|f| Face::new(f[0] as usize, f[1] as usize, f[2] as usize))
            .collect();

        let transform = Transform::new(self.position.into(), self.rotation.into());
        match Mesh::new(self.name.as_str(), vertices, faces) {
            Ok(mesh) => Ok(mesh.with_transform(transform)),
            Err(source) => Err(LoadError::Mesh {
                name: self.name,
                source,
            }),
        }
    }
}

/// Parses scene JSON into meshes, in file order.
pub fn parse_scene(text: &str) -> Result<Vec<Mesh>, LoadError> {
    let scene: SceneFile = serde_json::from_str(text)?;
    scene
        .meshes
        .into_iter()
        .map(MeshRecord::into_mesh)
        .collect()
}

/// Reads and parses a scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Vec<Mesh>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let meshes = parse_scene(&text)?;
    for mesh in &meshes {
        log::info!(
            "loaded mesh {:?}: {} vertices, {} faces",
            mesh.name(),
            mesh.vertices().len(),
            mesh.faces().len()
        );
    }
    Ok(meshes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = r#"{
        "producer": { "name": "Blender" },
        "meshes": [{
            "name": "Tri",
            "id": "Tri",
            "materialId": null,
            "position": [1, 2, 3],
            "rotation": [0.1, 0.2, 0.3],
            "uvCount": 0,
            "vertices": [
                0, 0, 0,  0, 0, 1,
                1, 0, 0,  0, 0, 1,
                0, 1, 0,  0, 0, 1
            ],
            "indices": [0, 1, 2]
        }]
    }"#;

    fn mesh_json(uv_count: u32, vertices: &[f32], indices: &[u32]) -> String {
        format!(
            r#"{{"meshes": [{{"name": "m", "position": [0, 0, 0], "uvCount": {uv_count},
                "vertices": {vertices:?}, "indices": {indices:?}}}]}}"#
        )
    }

    #[test]
    fn parses_mesh_and_ignores_unknown_fields() {
        let meshes = parse_scene(TRIANGLE).unwrap();
        assert_eq!(meshes.len(), 1);

        let mesh = &meshes[0];
        assert_eq!(mesh.name(), "Tri");
        assert_eq!(mesh.vertices().len(), 3);
        assert_eq!(mesh.faces(), &[Face::new(0, 1, 2)]);
        assert_eq!(mesh.vertices()[1].position, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(mesh.vertices()[1].normal, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(mesh.transform().position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.transform().rotation(), Vec3::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn rotation_defaults_to_zero() {
        let meshes = parse_scene(&mesh_json(0, &[0.0; 6], &[])).unwrap();
        assert_eq!(meshes[0].transform().rotation(), Vec3::ZERO);
    }

    #[test]
    fn uv_count_selects_stride() {
        for (uv_count, stride) in [(0, 6), (1, 8), (2, 10)] {
            // Two vertices; the second position starts right after one stride.
            let mut vertices = vec![0.0; stride * 2];
            vertices[stride] = 7.0;
            vertices[stride + 5] = 1.0;

            let meshes = parse_scene(&mesh_json(uv_count, &vertices, &[])).unwrap();
            let mesh = &meshes[0];
            assert_eq!(mesh.vertices().len(), 2, "uvCount {uv_count}");
            assert_eq!(mesh.vertices()[1].position, Vec3::new(7.0, 0.0, 0.0));
            assert_eq!(mesh.vertices()[1].normal, Vec3::new(0.0, 0.0, 1.0));
        }
    }

    #[test]
    fn rejects_unsupported_uv_count() {
        let err = parse_scene(&mesh_json(3, &[0.0; 12], &[])).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedUvCount { uv_count: 3, .. }));
    }

    #[test]
    fn rejects_ragged_arrays() {
        let err = parse_scene(&mesh_json(0, &[0.0; 7], &[])).unwrap_err();
        assert!(matches!(err, LoadError::RaggedVertices { len: 7, stride: 6, .. }));

        let err = parse_scene(&mesh_json(0, &[0.0; 18], &[0, 1])).unwrap_err();
        assert!(matches!(err, LoadError::RaggedIndices { len: 2, .. }));
    }

    #[test]
    fn out_of_range_index_fails_whole_scene() {
        let good = r#"{"name": "good", "position": [0, 0, 0], "uvCount": 0,
            "vertices": [0,0,0,0,0,1, 1,0,0,0,0,1, 0,1,0,0,0,1], "indices": [0, 1, 2]}"#;
        let bad = r#"{"name": "bad", "position": [0, 0, 0], "uvCount": 0,
            "vertices": [0,0,0,0,0,1, 1,0,0,0,0,1, 0,1,0,0,0,1], "indices": [0, 1, 3]}"#;
        let text = format!(r#"{{"meshes": [{good}, {bad}]}}"#);

        match parse_scene(&text) {
            Err(LoadError::Mesh { name, source }) => {
                assert_eq!(name, "bad");
                assert_eq!(
                    source,
                    MeshError::IndexOutOfRange {
                        face: 0,
                        index: 3,
                        vertex_count: 3
                    }
                );
            }
            other => panic!("expected index error, got {other:?}"),
        }
    }

    #[test]
    fn missing_field_is_a_json_error() {
        let err = parse_scene(r#"{"meshes": [{"name": "m", "uvCount": 0}]}"#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn load_scene_reports_missing_file() {
        let err = load_scene("no/such/scene.babylon").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("no/such/scene.babylon"));
    }

    #[test]
    fn load_scene_reads_file() {
        let name = format!("softrast-scene-{}.babylon", std::process::id());
        let path = std::env::temp_dir().join(name);
        fs::write(&path, TRIANGLE).unwrap();
        let meshes = load_scene(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(meshes.unwrap().len(), 1);
    }
}
