/// Render context: camera, projection and viewport
use nalgebra::Point2;
use tracing::debug;

use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::geometry::Mesh;
use crate::input::InputState;
use crate::object::SceneObject;
use crate::pipeline::project_vertices;
use crate::projection::{Projection, Viewport};
use crate::surface::Surface;

/// Shared, per-session render state passed by reference to every object
///
/// The projection is derived from the camera lens and the viewport and is
/// recomputed whenever either changes through this type.
#[derive(Debug, Clone)]
pub struct Renderer {
    viewport: Viewport,
    camera: Camera,
    projection: Projection,
    draw_vertices: bool,
}

impl Renderer {
    pub fn new(viewport: Viewport, camera_position: [f32; 3]) -> Self {
        Self::with_camera(viewport, Camera::new(camera_position, viewport))
    }

    pub fn from_config(config: &RenderConfig, viewport: Viewport) -> Self {
        let mut renderer = Self::with_camera(viewport, Camera::from_config(config, viewport));
        renderer.draw_vertices = config.draw_vertices;
        renderer
    }

    fn with_camera(viewport: Viewport, camera: Camera) -> Self {
        let projection = Projection::new(&camera, viewport);
        Self {
            viewport,
            camera,
            projection,
            draw_vertices: true,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Wrap a mesh in a scene object using this session's defaults
    pub fn create_object(&self, mesh: Mesh) -> SceneObject {
        SceneObject::new(mesh).with_vertices(self.draw_vertices)
    }

    /// Move or turn the camera from this frame's keys
    pub fn control(&mut self, input: &InputState) {
        self.camera.control(input);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        debug!(width = viewport.width, height = viewport.height, "viewport resized");
        self.viewport = viewport;
        self.camera.fit_viewport(viewport);
        self.projection = Projection::new(&self.camera, viewport);
    }

    /// Change the horizontal field of view, in degrees
    pub fn set_fov(&mut self, h_fov_degrees: f32) {
        self.camera.h_fov = h_fov_degrees.to_radians();
        self.camera.fit_viewport(self.viewport);
        self.projection = Projection::new(&self.camera, self.viewport);
    }

    /// Move the near and far clip planes
    pub fn set_clip(&mut self, near: f32, far: f32) {
        debug!(near, far, "clip planes changed");
        self.camera.near = near;
        self.camera.far = far;
        self.projection = Projection::new(&self.camera, self.viewport);
    }

    /// Screen coordinates for every vertex of `mesh`, in vertex order
    pub fn project(&self, mesh: &Mesh) -> Vec<Point2<f32>> {
        project_vertices(mesh.vertices(), &self.camera.view_matrix(), &self.projection)
    }

    /// Draw all objects in order; later objects overdraw earlier ones
    pub fn draw<S: Surface + ?Sized>(&self, objects: &[SceneObject], target: &mut S) {
        for object in objects {
            object.draw(self, target);
        }
    }
}
