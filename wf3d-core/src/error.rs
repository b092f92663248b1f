/// Error types for mesh construction, OBJ loading and configuration
use std::path::PathBuf;
use thiserror::Error;

/// A mesh whose faces do not fit its vertex list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A face needs at least two indices to draw anything
    #[error("face {face} has {len} indices, at least 2 are required")]
    EmptyFace { face: usize, len: usize },

    /// A face refers to a vertex that does not exist
    #[error("face {face} refers to vertex {index} but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
}

/// OBJ loading errors
#[derive(Error, Debug)]
pub enum ObjError {
    /// Failed to read the mesh file
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `v` or `f` line could not be parsed
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The parsed data does not form a valid mesh
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Configuration file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::RenderConfig`]
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The clip planes must satisfy `0 < near < far`
    #[error("invalid clip planes: near = {near}, far = {far}")]
    ClipPlanes { near: f32, far: f32 },

    /// The horizontal field of view must lie strictly between 0 and 180 degrees
    #[error("invalid field of view: {0} degrees")]
    FieldOfView(f32),
}
