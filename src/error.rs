use thiserror::Error;

/// Contract violations reported by the engine.
///
/// Arithmetic faults (overflow, NaN, division by zero) are never reported here:
/// they follow the element type's own semantics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LaneError {
    /// A source or destination buffer does not have the length of the first source.
    #[error("buffer `{operand}` has {actual} elements, expected {expected}")]
    LengthMismatch {
        operand: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An interleaved pair buffer must hold a whole number of pairs.
    #[error("interleaved pair buffer has odd length {len}")]
    UnpairedLength { len: usize },

    #[error("unknown lane width `{0}`, expected one of scalar, narrow, mid, wide")]
    UnknownWidth(String),
}

/// Checks that `operand` is as long as the reference buffer.
pub(crate) fn ensure_len(
    operand: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), LaneError> {
    if expected == actual {
        Ok(())
    } else {
        tracing::warn!(operand, expected, actual, "buffer length mismatch");
        Err(LaneError::LengthMismatch {
            operand,
            expected,
            actual,
        })
    }
}
