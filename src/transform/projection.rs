use crate::types::{Matrix4, Vector4};

#[cfg(test)]
mod test_projection {
    use crate::types::{Matrix4, Vector3, Vector4};

    fn assert_near(a: Vector3, b: Vector3) {
        assert!((a - b).length() < 1e-5, "{} != {}", a, b);
    }

    #[test]
    fn ortho_center() {
        let m = Matrix4::ortho(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
        let p = Vector4::point(Vector3::origin()) * m;
        assert!(p.approx_equal(Vector4::new(0.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn ortho_box() {
        let m = Matrix4::ortho(0.0, 800.0, 0.0, 600.0, 0.1, 100.0);
        assert_near(
            m.project_point3(Vector3::new(800.0, 600.0, -100.0)),
            Vector3::new(1.0, 1.0, 1.0),
        );
        assert_near(
            m.project_point3(Vector3::new(0.0, 0.0, -0.1)),
            Vector3::new(-1.0, -1.0, -1.0),
        );
        assert_near(
            m.project_point3(Vector3::new(400.0, 300.0, -50.05)),
            Vector3::origin(),
        );
    }

    #[test]
    fn ortho_zero_extent() {
        let m = Matrix4::ortho(1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
        assert!(!m.is_valid());
    }

    #[test]
    fn frustum() {
        let m = Matrix4::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
        assert_near(
            m.project_point3(Vector3::new(0.0, 0.0, -1.0)),
            Vector3::new(0.0, 0.0, -1.0),
        );
        assert_near(
            m.project_point3(Vector3::new(0.0, 0.0, -10.0)),
            Vector3::new(0.0, 0.0, 1.0),
        );
        assert_near(
            m.project_point3(Vector3::new(1.0, 1.0, -1.0)),
            Vector3::new(1.0, 1.0, -1.0),
        );
        let clip = Vector4::point(Vector3::new(0.0, 0.0, -4.0)) * m;
        assert_eq!(clip.w, 4.0);
    }

    #[test]
    fn frustum_off_center() {
        let m = Matrix4::frustum(0.0, 2.0, 0.0, 1.0, 1.0, 5.0);
        assert_near(
            m.project_point3(Vector3::new(0.0, 0.0, -1.0)),
            Vector3::new(-1.0, -1.0, -1.0),
        );
        assert_near(
            m.project_point3(Vector3::new(10.0, 5.0, -5.0)),
            Vector3::new(1.0, 1.0, 1.0),
        );
    }

    #[test]
    fn perspective() {
        let m = Matrix4::perspective(std::f32::consts::FRAC_PI_2, 2.0, 1.0, 10.0);
        assert!((m.j.y - 1.0).abs() < 1e-6);
        assert!((m.i.x - 0.5).abs() < 1e-6);
        assert_near(
            m.project_point3(Vector3::new(2.0, 1.0, -1.0)),
            Vector3::new(1.0, 1.0, -1.0),
        );
        assert_near(
            m.project_point3(Vector3::new(-20.0, -10.0, -10.0)),
            Vector3::new(-1.0, -1.0, 1.0),
        );
    }

    #[test]
    fn perspective_invertible() {
        let m = Matrix4::perspective(std::f32::consts::FRAC_PI_3, 4.0 / 3.0, 0.1, 100.0);
        let m_inv = m.inv().unwrap();
        let p = Vector3::new(0.5, -0.25, -3.0);
        let back = m_inv.project_point3(m.project_point3(p));
        assert!((back - p).length() < 1e-3);
    }
}

impl Matrix4 {
    /// Maps the box onto the `[-1, 1]` clip cube, looking down `-z`.
    #[inline]
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Matrix4 {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        Matrix4 {
            i: Vector4::new(2.0 / width, 0.0, 0.0, 0.0),
            j: Vector4::new(0.0, 2.0 / height, 0.0, 0.0),
            k: Vector4::new(0.0, 0.0, -2.0 / depth, 0.0),
            l: Vector4::new(
                -(right + left) / width,
                -(top + bottom) / height,
                -(far + near) / depth,
                1.0,
            ),
        }
    }

    #[inline]
    pub fn frustum(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Matrix4 {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        Matrix4 {
            i: Vector4::new(2.0 * near / width, 0.0, 0.0, 0.0),
            j: Vector4::new(0.0, 2.0 * near / height, 0.0, 0.0),
            k: Vector4::new(
                (right + left) / width,
                (top + bottom) / height,
                -(far + near) / depth,
                -1.0,
            ),
            l: Vector4::new(0.0, 0.0, -2.0 * far * near / depth, 0.0),
        }
    }

    #[inline]
    pub fn perspective(fov_y_rad: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Matrix4 {
        let top = z_near * (fov_y_rad * 0.5).tan();
        let right = top * aspect_ratio;
        Self::frustum(-right, right, -top, top, z_near, z_far)
    }
}
