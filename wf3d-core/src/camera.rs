/// Free-flying camera with an explicit orthonormal basis
use nalgebra::Matrix4;

use crate::config::RenderConfig;
use crate::geometry::{direction, point, Vec4};
use crate::input::{InputState, Key};
use crate::projection::Viewport;
use crate::transform::Transform;

/// Camera position, orientation and lens parameters
///
/// `right`, `up` and `forward` are directions (w = 0). Every rotation is
/// applied to all three with the same matrix, which keeps them orthonormal.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec4,
    pub right: Vec4,
    pub up: Vec4,
    pub forward: Vec4,
    /// Horizontal field of view in radians
    pub h_fov: f32,
    /// Vertical field of view in radians, derived from the viewport aspect
    pub v_fov: f32,
    pub near: f32,
    pub far: f32,
    pub moving_speed: f32,
    /// Degrees per control step
    pub rotation_speed: f32,
}

impl Camera {
    /// Camera at `position` looking down +Z with +Y up
    pub fn new(position: [f32; 3], viewport: Viewport) -> Self {
        let h_fov = std::f32::consts::PI / 3.0; // 60 degrees
        Self {
            position: point(position[0], position[1], position[2]),
            right: direction(1.0, 0.0, 0.0),
            up: direction(0.0, 1.0, 0.0),
            forward: direction(0.0, 0.0, 1.0),
            h_fov,
            v_fov: h_fov * viewport.aspect_inverse(),
            near: 0.1,
            far: 100.0,
            moving_speed: 0.3,
            rotation_speed: 0.9,
        }
    }

    pub fn from_config(config: &RenderConfig, viewport: Viewport) -> Self {
        let mut camera = Self::new(config.camera_position, viewport);
        camera.h_fov = config.h_fov_degrees.to_radians();
        camera.v_fov = camera.h_fov * viewport.aspect_inverse();
        camera.near = config.near;
        camera.far = config.far;
        camera.moving_speed = config.moving_speed;
        camera.rotation_speed = config.rotation_speed_degrees;
        camera
    }

    /// Re-derive the vertical field of view after a viewport change
    pub fn fit_viewport(&mut self, viewport: Viewport) {
        self.v_fov = self.h_fov * viewport.aspect_inverse();
    }

    /// Turn about the world Y axis
    pub fn yaw(&mut self, degrees: f32) {
        self.rotate_basis(&Transform::rotate_y(degrees));
    }

    /// Tilt about the world X axis
    pub fn pitch(&mut self, degrees: f32) {
        self.rotate_basis(&Transform::rotate_x(degrees));
    }

    fn rotate_basis(&mut self, rotation: &Matrix4<f32>) {
        self.forward = self.forward * rotation;
        self.right = self.right * rotation;
        self.up = self.up * rotation;
    }

    /// Strafe; `sign` is +1 for right, -1 for left
    pub fn move_right(&mut self, sign: f32) {
        self.position += self.right * (sign * self.moving_speed);
    }

    pub fn move_forward(&mut self, sign: f32) {
        self.position += self.forward * (sign * self.moving_speed);
    }

    pub fn move_up(&mut self, sign: f32) {
        self.position += self.up * (sign * self.moving_speed);
    }

    /// Apply the highest-priority held key; simultaneous keys do not combine
    pub fn control(&mut self, input: &InputState) {
        let Some(key) = input.first_held() else {
            return;
        };

        match key {
            Key::A => self.move_right(-1.0),
            Key::D => self.move_right(1.0),
            Key::W => self.move_forward(1.0),
            Key::S => self.move_forward(-1.0),
            Key::Q => self.move_up(1.0),
            Key::E => self.move_up(-1.0),
            Key::Left => self.yaw(-self.rotation_speed),
            Key::Right => self.yaw(self.rotation_speed),
            Key::Up => self.pitch(-self.rotation_speed),
            Key::Down => self.pitch(self.rotation_speed),
        }
    }

    /// Change of basis into camera space, columns are right/up/forward
    #[rustfmt::skip]
    pub fn rotation_matrix(&self) -> Matrix4<f32> {
        let (r, u, f) = (self.right, self.up, self.forward);
        Matrix4::new(
            r.x, u.x, f.x, 0.0,
            r.y, u.y, f.y, 0.0,
            r.z, u.z, f.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Create the view matrix: `translate(-position) * rotation_matrix`
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let p = self.position;
        Transform::translate(-p.x, -p.y, -p.z) * self.rotation_matrix()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new([0.0, 0.0, 0.0], Viewport::default())
    }
}
