use super::matrix::Matrix4;
use crate::error::{MatrixError, Result};

const MIN_OPERANDS: usize = 2;

/// Multiply a chain of matrices left to right: `((m0 · m1) · m2) · ...`
///
/// Operands are only borrowed; the running product lives in a local
/// accumulator.
pub fn multiply(matrices: &[Matrix4]) -> Result<Matrix4> {
    let (first, rest) = match matrices {
        [first, rest @ ..] if !rest.is_empty() => (first, rest),
        _ => {
            log::debug!("multiply called with {} matrices", matrices.len());
            return Err(MatrixError::InvalidArgumentCount {
                expected: MIN_OPERANDS,
                actual: matrices.len(),
            });
        }
    };

    log::trace!("multiplying chain of {} matrices", matrices.len());

    let mut result = *first;
    for matrix in rest {
        result = result.multiply(matrix);
    }
    Ok(result)
}
