pub mod error;
pub mod transform;
pub mod types;

pub use error::{MathError, MathResult};
pub use transform::Axis;
pub use types::{Matrix3, Matrix4, Vector3, Vector4};
