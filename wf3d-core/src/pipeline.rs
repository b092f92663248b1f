/// Object space to screen space.
///
/// The pipeline is: view matrix, perspective matrix, divide by w, zero out any
/// component beyond [`CLIP_LIMIT`], screen matrix, keep x and y.
///
/// There is no frustum clipping. A zeroed component lands on the viewport
/// center line after screen mapping, and [`is_degenerate`] uses exactly that
/// to drop faces that touch it. A vertex on the camera's eye plane has w = 0
/// and produces non-finite coordinates, which are passed through untouched.
use nalgebra::{Matrix4, Point2};

use crate::geometry::Vec4;
use crate::projection::{Projection, Viewport};

/// Normalized coordinates outside [-CLIP_LIMIT, CLIP_LIMIT] are zeroed
///
/// Wider than the [-1, 1] view volume so that edges crossing the border of
/// the viewport are still partly drawn.
pub const CLIP_LIMIT: f32 = 2.0;

/// Divide every component by w
pub fn perspective_divide(clip: Vec4) -> Vec4 {
    clip / clip.w
}

/// Zero each component outside [-CLIP_LIMIT, CLIP_LIMIT]
pub fn reject_out_of_range(ndc: Vec4) -> Vec4 {
    ndc.map(|c| if c > CLIP_LIMIT || c < -CLIP_LIMIT { 0.0 } else { c })
}

/// Project object-space vertices to screen coordinates, preserving order
pub fn project_vertices(
    vertices: &[Vec4],
    view_matrix: &Matrix4<f32>,
    projection: &Projection,
) -> Vec<Point2<f32>> {
    let clip_matrix = view_matrix * projection.projection_matrix;

    vertices
        .iter()
        .map(|vertex| {
            let clip = vertex * clip_matrix;
            let ndc = reject_out_of_range(perspective_divide(clip));
            let screen = ndc * projection.to_screen_matrix;
            Point2::new(screen.x, screen.y)
        })
        .collect()
}

/// True when either coordinate sits exactly on the half-width or half-height
///
/// Those values are where zeroed (rejected) components end up, so a face
/// containing such a vertex is treated as off-screen and skipped.
pub fn is_degenerate(point: &Point2<f32>, viewport: Viewport) -> bool {
    let (hw, hh) = (viewport.half_width(), viewport.half_height());
    [point.x, point.y].iter().any(|&c| c == hw || c == hh)
}
