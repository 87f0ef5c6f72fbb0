pub mod projection;

use super::types::{Matrix3, Matrix4, Vector3, Vector4};

#[cfg(test)]
mod test_matrix_4_transforms {
    use strum::IntoEnumIterator;

    use super::Axis;
    use crate::types::{Matrix4, Vector3, Vector4};

    fn max_error(a: Matrix4, b: Matrix4) -> f32 {
        a.to_array()
            .iter()
            .zip(b.to_array().iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f32::max)
    }

    #[test]
    fn rotate_x() {
        let m = Matrix4::rotate_x(std::f32::consts::FRAC_PI_2);
        let p = Vector4::point(Vector3::y_axis()) * m;
        assert!(p.approx_equal(Vector4::point(Vector3::z_axis())));
    }

    #[test]
    fn rotate_y() {
        let m = Matrix4::rotate_y(std::f32::consts::FRAC_PI_2);
        let p = Vector4::point(Vector3::x_axis()) * m;
        assert!(p.approx_equal(Vector4::point(-Vector3::z_axis())));
    }

    #[test]
    fn rotate_z() {
        let m = Matrix4::rotate_z(std::f32::consts::FRAC_PI_2);
        let p = Vector4::point(Vector3::x_axis()) * m;
        assert!(p.approx_equal(Vector4::point(Vector3::y_axis())));
    }

    #[test]
    fn rotate_axis_angle() {
        let m = Matrix4::rotate(std::f32::consts::FRAC_PI_2, Vector3::z_axis());
        let p = Vector4::new(1.0, 0.0, 0.0, 1.0) * m;
        let expected = Vector4::new(0.0, 1.0, 0.0, 1.0);
        assert!((p - expected).length() < 1e-5);
    }

    #[test]
    fn rotate_about() {
        for axis in Axis::iter() {
            let m = Matrix4::rotate_about(axis, 0.3);
            assert!(m.approx_equal(Matrix4::rotate(0.3, axis.unit())));
            assert!(m.transform_vector3(axis.unit()).approx_equal(axis.unit()));
        }
    }

    #[test]
    fn rotate_non_unit_axis() {
        let m = Matrix4::rotate(std::f32::consts::FRAC_PI_2, 2.0 * Vector3::z_axis());
        let p = m.transform_vector3(Vector3::z_axis());
        assert!(p.approx_equal(Vector3::new(0.0, 0.0, 4.0)));
    }

    #[test]
    fn translate() {
        let m = Matrix4::translate(Vector3::new(1.0, 2.0, 3.0));
        let p = Vector4::point(Vector3::new(2.0, 3.0, 1.0)) * m;
        assert!(p.approx_equal(Vector4::point(Vector3::new(3.0, 5.0, 4.0))));
        let v = Vector4::vector(Vector3::new(2.0, 3.0, 1.0)) * m;
        assert!(v.approx_equal(Vector4::vector(Vector3::new(2.0, 3.0, 1.0))));
    }

    #[test]
    fn scale() {
        let m = Matrix4::scale(Vector3::new(4.0, 4.0, 4.0));
        let p = Vector4::point(Vector3::new(3.0, 2.0, 1.0)) * m;
        assert!(p.approx_equal(Vector4::point(Vector3::new(12.0, 8.0, 4.0))));
        assert_eq!(m, Matrix4::scale_uniform(4.0));
        let m = Matrix4::scale(Vector3::new(1.0, -2.0, 0.5));
        assert_eq!(
            m.transform_point3(Vector3::new(3.0, 2.0, 1.0)),
            Vector3::new(3.0, -4.0, 0.5)
        );
    }

    #[test]
    fn compose_order() {
        let t = Matrix4::translate(Vector3::x_axis());
        let r = Matrix4::rotate_z(std::f32::consts::FRAC_PI_2);
        let p = Vector3::x_axis();
        assert!((t * r)
            .transform_point3(p)
            .approx_equal(Vector3::new(0.0, 2.0, 0.0)));
        assert!((r * t)
            .transform_point3(p)
            .approx_equal(Vector3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn inverse_round_trip() {
        let m = Matrix4::scale(Vector3::new(2.0, 3.0, 0.5))
            * Matrix4::rotate(0.7, Vector3::new(1.0, 2.0, 3.0).normalize())
            * Matrix4::translate(Vector3::new(4.0, -5.0, 6.0));
        let m_inv = m.inv().unwrap();
        assert!(max_error(m * m_inv, Matrix4::identity()) < 1e-4);
        assert!(max_error(m_inv * m, Matrix4::identity()) < 1e-4);
        let p = Vector3::new(-1.0, 0.5, 2.0);
        let back = m_inv.transform_point3(m.transform_point3(p));
        assert!((back - p).length() < 1e-4);
    }

    #[test]
    fn orthonormal_xform() {
        let m = Matrix4::orthonormal_xform(
            Vector3::y_axis(),
            -Vector3::x_axis(),
            Vector3::z_axis(),
            Vector3::new(1.0, 2.0, 3.0),
        );
        let p = Vector4::new(1.0, 0.0, 0.0, 1.0) * m;
        assert_eq!(p, Vector4::new(1.0, 3.0, 3.0, 1.0));
        assert_eq!(m.l, Vector4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(m.k.w, 0.0);
    }

    #[test]
    fn look_at() {
        let eye = Vector3::new(2.0, 3.0, 4.0);
        let target = Vector3::new(1.0, 1.0, 1.0);
        let m = Matrix4::look_at(eye, target, Vector3::z_axis());
        let p_eye = Vector4::point(eye) * m;
        let t = eye - target;
        assert!(p_eye.approx_equal(Vector4::point(Vector3::origin())));
        assert!((t.dot(Vector3::new(m.i.z, m.j.z, m.k.z)) - t.length()).abs() < 1e-5);
        assert!(Vector3::z_axis()
            .dot(Vector3::new(m.i.x, m.j.x, m.k.x))
            .abs()
            < 1e-6);
        let p_target = m.transform_point3(target);
        assert!((p_target - Vector3::new(0.0, 0.0, -t.length())).length() < 1e-5);
    }

    #[test]
    fn look_at_degenerate() {
        let m = Matrix4::look_at(Vector3::origin(), Vector3::z_axis(), Vector3::z_axis());
        assert!(!m.is_valid());
    }
}

#[derive(strum::EnumIter, Debug, Clone, Copy, PartialEq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub fn unit(self) -> Vector3 {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }
}

impl Matrix4 {
    /// Rotation by `rad` about `axis`. The axis is not normalized, a non-unit
    /// axis gives a transform that also scales.
    #[inline]
    pub fn rotate(rad: f32, axis: Vector3) -> Matrix4 {
        let (sin, cos) = rad.sin_cos();
        let t = 1.0 - cos;
        let Vector3 { x, y, z } = axis;
        Matrix3::new(
            Vector3::new(t * x * x + cos, t * x * y + sin * z, t * x * z - sin * y),
            Vector3::new(t * x * y - sin * z, t * y * y + cos, t * y * z + sin * x),
            Vector3::new(t * x * z + sin * y, t * y * z - sin * x, t * z * z + cos),
        )
        .into()
    }

    #[inline]
    pub fn rotate_x(rad: f32) -> Matrix4 {
        let (sin, cos) = rad.sin_cos();
        Matrix3::new(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, cos, sin),
            Vector3::new(0.0, -sin, cos),
        )
        .into()
    }

    #[inline]
    pub fn rotate_y(rad: f32) -> Matrix4 {
        let (sin, cos) = rad.sin_cos();
        Matrix3::new(
            Vector3::new(cos, 0.0, -sin),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(sin, 0.0, cos),
        )
        .into()
    }

    #[inline]
    pub fn rotate_z(rad: f32) -> Matrix4 {
        let (sin, cos) = rad.sin_cos();
        Matrix3::new(
            Vector3::new(cos, sin, 0.0),
            Vector3::new(-sin, cos, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        )
        .into()
    }

    #[inline]
    pub fn rotate_about(axis: Axis, rad: f32) -> Matrix4 {
        match axis {
            Axis::X => Self::rotate_x(rad),
            Axis::Y => Self::rotate_y(rad),
            Axis::Z => Self::rotate_z(rad),
        }
    }

    #[inline]
    pub fn translate(v: Vector3) -> Matrix4 {
        Matrix4::new(
            Vector4::vector(Vector3::x_axis()),
            Vector4::vector(Vector3::y_axis()),
            Vector4::vector(Vector3::z_axis()),
            Vector4::point(v),
        )
    }

    #[inline]
    pub fn scale(s: Vector3) -> Matrix4 {
        Matrix3::new(
            Vector3::new(s.x, 0.0, 0.0),
            Vector3::new(0.0, s.y, 0.0),
            Vector3::new(0.0, 0.0, s.z),
        )
        .into()
    }

    #[inline]
    pub fn scale_uniform(s: f32) -> Matrix4 {
        (s * Matrix3::identity()).into()
    }

    /// Basis vectors become rows `i`, `j`, `k` and `pos` the translation.
    /// Orthonormality of the basis is not checked.
    #[inline]
    pub fn orthonormal_xform(
        right: Vector3,
        up: Vector3,
        forward: Vector3,
        pos: Vector3,
    ) -> Matrix4 {
        Matrix4::new(
            Vector4::vector(right),
            Vector4::vector(up),
            Vector4::vector(forward),
            Vector4::point(pos),
        )
    }

    /// Right-handed view matrix, `eye` maps to the origin and `target` onto `-z`.
    #[inline]
    pub fn look_at(eye: Vector3, target: Vector3, up: Vector3) -> Matrix4 {
        let f = (target - eye).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(f);
        Matrix4 {
            i: Vector4::new(s.x, u.x, -f.x, 0.0),
            j: Vector4::new(s.y, u.y, -f.y, 0.0),
            k: Vector4::new(s.z, u.z, -f.z, 0.0),
            l: Vector4::new(-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0),
        }
    }
}
