/// WF3D Core Library - Software wireframe geometry pipeline
///
/// This library provides the frame-independent core of the wireframe renderer:
/// transform matrices, meshes and OBJ loading, the camera, perspective and
/// screen projection, and scene objects that draw onto any [`Surface`].

pub mod camera;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod obj;
pub mod object;
pub mod pipeline;
pub mod projection;
pub mod renderer;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use camera::Camera;
pub use config::RenderConfig;
pub use error::{ConfigError, MeshError, ObjError};
pub use geometry::{Color, Face, Mesh, Vec4};
pub use input::{InputState, Key};
pub use object::SceneObject;
pub use projection::{Projection, Viewport};
pub use renderer::Renderer;
pub use surface::Surface;
pub use transform::Transform;
