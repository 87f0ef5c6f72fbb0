mod matrix;
mod vector;

pub use matrix::{Matrix3, Matrix4};
pub use vector::{Vector3, Vector4};

/// Per-component tolerance used by `approx_equal`.
pub const EPS: f32 = 1e-6;

/// Determinant magnitude at or below which a matrix is treated as singular.
pub const DET_EPS: f32 = 1e-8;
