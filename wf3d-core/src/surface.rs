/// Drawing target for projected geometry
use nalgebra::Point2;

use crate::geometry::Color;

/// Anything that can receive outlines, markers and text in screen coordinates
///
/// Coordinates are floating point pixels with the origin at the top-left;
/// implementations round them and ignore anything that falls off the surface.
pub trait Surface {
    /// Closed outline through `points` in order
    fn draw_polygon(&mut self, points: &[Point2<f32>], color: Color, width: u32);

    /// Vertex marker
    fn draw_circle(&mut self, center: Point2<f32>, color: Color, radius: f32);

    fn draw_text(&mut self, text: &str, position: Point2<f32>, color: Color);

    /// Window title or status line
    fn set_caption(&mut self, caption: &str);
}
