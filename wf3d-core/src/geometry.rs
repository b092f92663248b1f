/// Geometry primitives for wireframe rendering
use nalgebra::{Matrix4, RowVector4};
use tracing::debug;

use crate::error::MeshError;

/// Homogeneous point or direction, multiplied as a row vector (`v * M`)
pub type Vec4 = RowVector4<f32>;

/// Homogeneous point (w = 1)
pub fn point(x: f32, y: f32, z: f32) -> Vec4 {
    Vec4::new(x, y, z, 1.0)
}

/// Homogeneous direction (w = 0), immune to translation
pub fn direction(x: f32, y: f32, z: f32) -> Vec4 {
    Vec4::new(x, y, z, 0.0)
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(250, 250, 250);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A polygon (or segment) over the owning mesh's vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub indices: Vec<usize>,
    pub color: Color,
    pub label: Option<String>,
}

impl Face {
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            color: Color::ORANGE,
            label: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Vertex positions in object space plus the faces drawn over them
///
/// Topology is fixed once built. Vertex positions are rewritten in place by
/// [`Mesh::transform`], so transforms accumulate and cannot be undone short of
/// applying the inverse.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vec4>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Build a mesh, checking that every face indexes existing vertices
    pub fn new(vertices: Vec<Vec4>, faces: Vec<Face>) -> Result<Self, MeshError> {
        for (i, face) in faces.iter().enumerate() {
            if face.indices.len() < 2 {
                return Err(MeshError::EmptyFace {
                    face: i,
                    len: face.indices.len(),
                });
            }
            if let Some(&index) = face.indices.iter().find(|&&idx| idx >= vertices.len()) {
                return Err(MeshError::IndexOutOfRange {
                    face: i,
                    index,
                    vertex_count: vertices.len(),
                });
            }
        }

        debug!(vertices = vertices.len(), faces = faces.len(), "mesh built");
        Ok(Self { vertices, faces })
    }

    pub fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Right-multiply every vertex by `matrix`, in place
    pub fn transform(&mut self, matrix: &Matrix4<f32>) {
        for vertex in &mut self.vertices {
            *vertex = *vertex * matrix;
        }
    }

    /// Paint every face with one color
    pub fn with_color(mut self, color: Color) -> Self {
        for face in &mut self.faces {
            face.color = color;
        }
        self
    }

    /// Unit cube spanning (0,0,0)..(1,1,1) with six quad faces
    pub fn cube() -> Self {
        let vertices = vec![
            point(0.0, 0.0, 0.0),
            point(0.0, 1.0, 0.0),
            point(1.0, 1.0, 0.0),
            point(1.0, 0.0, 0.0),
            point(0.0, 0.0, 1.0),
            point(0.0, 1.0, 1.0),
            point(1.0, 1.0, 1.0),
            point(1.0, 0.0, 1.0),
        ];
        let faces = [
            [0, 1, 2, 3],
            [4, 5, 6, 7],
            [0, 4, 5, 1],
            [2, 3, 7, 6],
            [1, 2, 6, 5],
            [0, 3, 7, 4],
        ]
        .into_iter()
        .map(|quad| Face::new(quad.to_vec()))
        .collect();

        Self { vertices, faces }
    }

    /// Origin plus unit X/Y/Z segments, colored red/green/blue and labeled
    pub fn axes() -> Self {
        let vertices = vec![
            point(0.0, 0.0, 0.0),
            point(1.0, 0.0, 0.0),
            point(0.0, 1.0, 0.0),
            point(0.0, 0.0, 1.0),
        ];
        let faces = vec![
            Face::new(vec![0, 1]).with_color(Color::RED).with_label("X"),
            Face::new(vec![0, 2]).with_color(Color::GREEN).with_label("Y"),
            Face::new(vec![0, 3]).with_color(Color::BLUE).with_label("Z"),
        ];

        Self { vertices, faces }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Transform;

    #[test]
    fn test_cube_shape() {
        let cube = Mesh::cube();
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.faces().len(), 6);
        assert!(cube.faces().iter().all(|f| f.indices.len() == 4));
        assert!(cube.vertices().iter().all(|v| v.w == 1.0));
        assert!(Mesh::new(cube.vertices().to_vec(), cube.faces().to_vec()).is_ok());
    }

    #[test]
    fn test_axes_labels_and_colors() {
        let axes = Mesh::axes();
        let labels: Vec<_> = axes
            .faces()
            .iter()
            .map(|f| f.label.as_deref().unwrap())
            .collect();
        assert_eq!(labels, ["X", "Y", "Z"]);
        assert_eq!(axes.faces()[0].color, Color::RED);
        assert_eq!(axes.faces()[2].color, Color::BLUE);
    }

    #[test]
    fn test_rejects_bad_faces() {
        let vertices = vec![point(0.0, 0.0, 0.0), point(1.0, 0.0, 0.0)];

        let err = Mesh::new(vertices.clone(), vec![Face::new(vec![0])]).unwrap_err();
        assert_eq!(err, MeshError::EmptyFace { face: 0, len: 1 });

        let faces = vec![Face::new(vec![0, 1]), Face::new(vec![1, 2])];
        let err = Mesh::new(vertices, faces).unwrap_err();
        assert_eq!(
            err,
            MeshError::IndexOutOfRange {
                face: 1,
                index: 2,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn test_transform_in_place_accumulates() {
        let mut mesh = Mesh::cube();
        mesh.transform(&Transform::translate(1.0, 0.0, 0.0));
        mesh.transform(&Transform::translate(1.0, 0.0, 0.0));
        assert_eq!(mesh.vertices()[0], point(2.0, 0.0, 0.0));

        mesh.transform(&Transform::scale(2.0, 2.0, 2.0));
        assert_eq!(mesh.vertices()[6], point(6.0, 2.0, 2.0));
    }

    #[test]
    fn test_with_color() {
        let mesh = Mesh::cube().with_color(Color::WHITE);
        assert!(mesh.faces().iter().all(|f| f.color == Color::WHITE));
    }
}
