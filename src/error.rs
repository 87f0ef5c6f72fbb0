use std::{
    error::Error,
    fmt::{Display, Formatter},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    SingularMatrix { det: f32 },
    InsufficientData { expected: usize, actual: usize },
}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            MathError::SingularMatrix { det } => {
                write!(f, "Matrix is not invertible, determinant: {}", det)
            }
            MathError::InsufficientData { expected, actual } => {
                write!(
                    f,
                    "Insufficient data: expected at least {} values, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl Error for MathError {}

pub type MathResult<T> = Result<T, MathError>;
