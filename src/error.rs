//! Error types for the simulation core
//!
//! Only usage errors are reported here. Numerical singularities
//! (zero softening with coincident points) surface as NaN/inf in the
//! returned accelerations instead.

use thiserror::Error;

/// Errors raised before any arithmetic is performed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Two arrays that must be index-aligned have different lengths
    #[error("shape mismatch: {what} has {found} entries, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// A negative number of integration steps was requested
    #[error("step count must be non-negative, got {0}")]
    NegativeSteps(i64),

    /// Softening must be finite and >= 0
    #[error("softening must be finite and non-negative, got {0}")]
    InvalidSoftening(f64),

    /// A galaxy setup parameter is outside its usable range
    #[error("invalid galaxy parameter `{field}` = {value}: {reason}")]
    InvalidGalaxy {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub type SimResult<T> = Result<T, SimError>;

/// Fail with [`SimError::ShapeMismatch`] unless `found == expected`
pub(crate) fn check_len(what: &'static str, expected: usize, found: usize) -> SimResult<()> {
    if expected != found {
        return Err(SimError::ShapeMismatch { what, expected, found });
    }
    Ok(())
}
