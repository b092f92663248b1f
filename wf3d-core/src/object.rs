/// Drawable objects owning their mesh
use nalgebra::Point2;
use tracing::trace;

use crate::geometry::{Color, Mesh};
use crate::pipeline::is_degenerate;
use crate::renderer::Renderer;
use crate::surface::Surface;
use crate::transform::Transform;

/// Outline stroke width for faces
pub const FACE_STROKE: u32 = 1;
/// Radius of vertex markers
pub const VERTEX_RADIUS: f32 = 2.0;

/// A mesh placed in the world
///
/// Transforms are baked straight into the mesh vertices and accumulate.
#[derive(Debug, Clone)]
pub struct SceneObject {
    mesh: Mesh,
    pub draw_vertices: bool,
    pub vertex_color: Color,
    /// Degrees of yaw applied by every [`SceneObject::step`]
    pub spin: Option<f32>,
}

impl SceneObject {
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            draw_vertices: true,
            vertex_color: Color::WHITE,
            spin: None,
        }
    }

    /// Labeled XYZ gizmo without vertex markers
    pub fn axes() -> Self {
        Self {
            draw_vertices: false,
            ..Self::new(Mesh::axes())
        }
    }

    pub fn with_vertices(mut self, draw_vertices: bool) -> Self {
        self.draw_vertices = draw_vertices;
        self
    }

    pub fn with_spin(mut self, degrees_per_step: f32) -> Self {
        self.spin = Some(degrees_per_step);
        self
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn translate(&mut self, tx: f32, ty: f32, tz: f32) {
        self.mesh.transform(&Transform::translate(tx, ty, tz));
    }

    pub fn rotate_x(&mut self, degrees: f32) {
        self.mesh.transform(&Transform::rotate_x(degrees));
    }

    pub fn rotate_y(&mut self, degrees: f32) {
        self.mesh.transform(&Transform::rotate_y(degrees));
    }

    pub fn rotate_z(&mut self, degrees: f32) {
        self.mesh.transform(&Transform::rotate_z(degrees));
    }

    pub fn scale(&mut self, sx: f32, sy: f32, sz: f32) {
        self.mesh.transform(&Transform::scale(sx, sy, sz));
    }

    /// Per-frame animation
    pub fn step(&mut self) {
        if let Some(degrees) = self.spin {
            self.rotate_y(degrees);
        }
    }

    /// Project through `renderer` and draw face outlines, labels and markers
    pub fn draw<S: Surface + ?Sized>(&self, renderer: &Renderer, target: &mut S) {
        let viewport = renderer.viewport();
        let screen = renderer.project(&self.mesh);

        let mut polygon: Vec<Point2<f32>> = Vec::new();
        for (index, face) in self.mesh.faces().iter().enumerate() {
            polygon.clear();
            polygon.extend(face.indices.iter().map(|&i| screen[i]));

            if polygon.iter().any(|p| is_degenerate(p, viewport)) {
                trace!(face = index, "face skipped");
                continue;
            }

            target.draw_polygon(&polygon, face.color, FACE_STROKE);
            if let (Some(label), Some(&last)) = (&face.label, polygon.last()) {
                target.draw_text(label, last, face.color);
            }
        }

        if self.draw_vertices {
            for vertex in screen.iter().filter(|p| !is_degenerate(p, viewport)) {
                target.draw_circle(*vertex, self.vertex_color, VERTEX_RADIUS);
            }
        }
    }
}
