use thiserror::Error;

use crate::math::mat::{OutOfBoundsError, ParseMatError};

/// Error generated by the checked [Mat22](crate::Mat22) operations
#[derive(Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum MatError {
    #[error("Matrix is singular (determinant: {det})")]
    Singular {
        det: f32,
    },
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBoundsError),
    #[error("Unable to parse matrix")]
    Parse(#[from] ParseMatError),
}
