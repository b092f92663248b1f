/// Homogeneous transform matrices for the row-vector pipeline
///
/// Every matrix here is meant to right-multiply a row vector: `v' = v * M`.
/// Translation terms therefore live in the last row.
///
/// Rotation sign convention: a positive angle turns +Y toward +Z (`rotate_x`),
/// +Z toward +X (`rotate_y`) and +X toward +Y (`rotate_z`).
use nalgebra::Matrix4;

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Create a translation matrix
    #[rustfmt::skip]
    pub fn translate(tx: f32, ty: f32, tz: f32) -> Matrix4<f32> {
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            tx, ty, tz, 1.0,
        )
    }

    /// Rotation about the X axis, angle in degrees
    #[rustfmt::skip]
    pub fn rotate_x(degrees: f32) -> Matrix4<f32> {
        let (s, c) = degrees.to_radians().sin_cos();
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c, s, 0.0,
            0.0, -s, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation about the Y axis, angle in degrees
    #[rustfmt::skip]
    pub fn rotate_y(degrees: f32) -> Matrix4<f32> {
        let (s, c) = degrees.to_radians().sin_cos();
        Matrix4::new(
            c, 0.0, -s, 0.0,
            0.0, 1.0, 0.0, 0.0,
            s, 0.0, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation about the Z axis, angle in degrees
    #[rustfmt::skip]
    pub fn rotate_z(degrees: f32) -> Matrix4<f32> {
        let (s, c) = degrees.to_radians().sin_cos();
        Matrix4::new(
            c, s, 0.0, 0.0,
            -s, c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Create a scale matrix
    #[rustfmt::skip]
    pub fn scale(sx: f32, sy: f32, sz: f32) -> Matrix4<f32> {
        Matrix4::new(
            sx, 0.0, 0.0, 0.0,
            0.0, sy, 0.0, 0.0,
            0.0, 0.0, sz, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::RowVector4;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_identity_transforms() {
        assert_eq!(Transform::scale(1.0, 1.0, 1.0), Matrix4::identity());
        assert_eq!(Transform::translate(0.0, 0.0, 0.0), Matrix4::identity());
    }

    #[test]
    fn test_rotation_round_trip() {
        for angle in [-270.0, -45.0, 0.5, 30.0, 90.0, 123.4, 359.0] {
            let x = Transform::rotate_x(angle) * Transform::rotate_x(-angle);
            let y = Transform::rotate_y(angle) * Transform::rotate_y(-angle);
            let z = Transform::rotate_z(angle) * Transform::rotate_z(-angle);
            assert!((x - Matrix4::identity()).norm() < EPS, "x at {angle}");
            assert!((y - Matrix4::identity()).norm() < EPS, "y at {angle}");
            assert!((z - Matrix4::identity()).norm() < EPS, "z at {angle}");
        }
    }

    #[test]
    fn test_translation_in_last_row() {
        let p = RowVector4::new(1.0, 2.0, 3.0, 1.0) * Transform::translate(10.0, 20.0, 30.0);
        assert_eq!(p, RowVector4::new(11.0, 22.0, 33.0, 1.0));

        // Directions (w = 0) are not affected by translation.
        let d = RowVector4::new(1.0, 0.0, 0.0, 0.0) * Transform::translate(5.0, 5.0, 5.0);
        assert_eq!(d, RowVector4::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_rotation_direction() {
        let y = RowVector4::new(0.0, 1.0, 0.0, 1.0) * Transform::rotate_x(90.0);
        assert!((y - RowVector4::new(0.0, 0.0, 1.0, 1.0)).norm() < EPS);

        let z = RowVector4::new(0.0, 0.0, 1.0, 1.0) * Transform::rotate_y(90.0);
        assert!((z - RowVector4::new(1.0, 0.0, 0.0, 1.0)).norm() < EPS);

        let x = RowVector4::new(1.0, 0.0, 0.0, 1.0) * Transform::rotate_z(90.0);
        assert!((x - RowVector4::new(0.0, 1.0, 0.0, 1.0)).norm() < EPS);
    }

    #[test]
    fn test_composition_order_matters() {
        let t = Transform::translate(1.0, 0.0, 2.0);
        let r = Transform::rotate_y(45.0);
        assert!((t * r - r * t).norm() > 0.1);

        let p = RowVector4::new(0.0, 0.0, 0.0, 1.0);
        assert!((p * (t * r) - p * (r * t)).norm() > 0.1);
    }

    #[test]
    fn test_scale_diagonal() {
        let m = Transform::scale(2.0, 3.0, 4.0);
        let p = RowVector4::new(1.0, 1.0, 1.0, 1.0) * m;
        assert_eq!(p, RowVector4::new(2.0, 3.0, 4.0, 1.0));
        assert_eq!(m[(3, 3)], 1.0);
    }
}
