/// Perspective and screen-mapping matrices
use nalgebra::Matrix4;
use tracing::debug;

use crate::camera::Camera;

/// Size of the drawing surface in pixels (or terminal cells)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn half_width(&self) -> f32 {
        self.width as f32 / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height as f32 / 2.0
    }

    /// height / width, used to derive the vertical field of view
    pub fn aspect_inverse(&self) -> f32 {
        if self.width == 0 {
            return 1.0;
        }
        self.height as f32 / self.width as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Projection matrices derived from the camera lens and the viewport
///
/// The perspective matrix writes camera-space z into w, so the following
/// divide is by depth. The screen matrix maps x in [-1, 1] to [0, width] and
/// y in [-1, 1] to [height, 0].
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub projection_matrix: Matrix4<f32>,
    pub to_screen_matrix: Matrix4<f32>,
}

impl Projection {
    pub fn new(camera: &Camera, viewport: Viewport) -> Self {
        let (near, far) = (camera.near, camera.far);
        let right = (camera.h_fov / 2.0).tan();
        let left = -right;
        let top = (camera.v_fov / 2.0).tan();
        let bottom = -top;

        let m00 = 2.0 / (right - left);
        let m11 = 2.0 / (top - bottom);
        let m22 = (far + near) / (far - near);
        let m32 = -2.0 * near * far / (far - near);
        #[rustfmt::skip]
        let projection_matrix = Matrix4::new(
            m00, 0.0, 0.0, 0.0,
            0.0, m11, 0.0, 0.0,
            0.0, 0.0, m22, 1.0,
            0.0, 0.0, m32, 0.0,
        );

        let (hw, hh) = (viewport.half_width(), viewport.half_height());
        #[rustfmt::skip]
        let to_screen_matrix = Matrix4::new(
            hw, 0.0, 0.0, 0.0,
            0.0, -hh, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            hw, hh, 0.0, 1.0,
        );

        debug!(
            width = viewport.width,
            height = viewport.height,
            h_fov = camera.h_fov.to_degrees(),
            v_fov = camera.v_fov.to_degrees(),
            "projection computed"
        );

        Self {
            projection_matrix,
            to_screen_matrix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec4;

    fn projection() -> Projection {
        let viewport = Viewport::new(800, 600);
        Projection::new(&Camera::new([0.0, 0.0, 0.0], viewport), viewport)
    }

    #[test]
    fn test_screen_mapping() {
        let screen = projection().to_screen_matrix;

        let center = Vec4::new(0.0, 0.0, 0.0, 1.0) * screen;
        assert_eq!((center.x, center.y), (400.0, 300.0));

        let right_edge = Vec4::new(1.0, 0.0, 0.0, 1.0) * screen;
        assert_eq!((right_edge.x, right_edge.y), (800.0, 300.0));

        let top_edge = Vec4::new(0.0, 1.0, 0.0, 1.0) * screen;
        assert_eq!((top_edge.x, top_edge.y), (400.0, 0.0));

        let corner = Vec4::new(-1.0, -1.0, 0.5, 1.0) * screen;
        assert_eq!((corner.x, corner.y, corner.z, corner.w), (0.0, 600.0, 0.5, 1.0));
    }

    #[test]
    fn test_perspective_writes_depth_into_w() {
        let clip = Vec4::new(1.0, 2.0, 7.0, 1.0) * projection().projection_matrix;
        assert_eq!(clip.w, 7.0);
    }

    #[test]
    fn test_near_and_far_planes_map_to_unit_depth() {
        let camera = Camera::default();
        let m = Projection::new(&camera, Viewport::default()).projection_matrix;

        let near = Vec4::new(0.0, 0.0, camera.near, 1.0) * m;
        let far = Vec4::new(0.0, 0.0, camera.far, 1.0) * m;
        assert!((near.z / near.w + 1.0).abs() < 1e-4);
        assert!((far.z / far.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_frustum_edge_maps_to_unit_x() {
        let camera = Camera::default();
        let m = Projection::new(&camera, Viewport::default()).projection_matrix;
        let depth = 10.0;
        let edge_x = depth * (camera.h_fov / 2.0).tan();
        let clip = Vec4::new(edge_x, 0.0, depth, 1.0) * m;
        assert!((clip.x / clip.w - 1.0).abs() < 1e-5);
    }
}
