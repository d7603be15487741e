//! Error types shared by the kernels and the harness.

use thiserror::Error;

/// Argument-check failure reported by a BLAS-style routine.
///
/// `position` follows the `xerbla` convention: 1-based, counted in the
/// calling order `(layout, uplo, trans, n, k, alpha, A, lda, beta, C, ldc)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlasError {
    #[error("{routine}: illegal value for argument {position} ({reason})")]
    InvalidArgument {
        routine: &'static str,
        position: usize,
        reason: String,
    },
}

impl BlasError {
    pub fn invalid(routine: &'static str, position: usize, reason: impl Into<String>) -> Self {
        BlasError::InvalidArgument {
            routine,
            position,
            reason: reason.into(),
        }
    }

    /// The offending argument position.
    pub fn position(&self) -> usize {
        match self {
            BlasError::InvalidArgument { position, .. } => *position,
        }
    }
}

/// Matrix buffer allocation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocError {
    #[error("buffer of {elements} elements overflows the address space")]
    Overflow { elements: usize },
    #[error("out of memory allocating {bytes} bytes")]
    OutOfMemory { bytes: usize },
}

/// Invalid LAPACK-style seed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("seed entry {index} = {value} is outside 0..=4095")]
    OutOfRange { index: usize, value: i32 },
    #[error("last seed entry {value} must be odd")]
    EvenLast { value: i32 },
    #[error("unknown distribution selector {0} (expected 1, 2 or 3)")]
    UnknownDistribution(i64),
}

/// Unrecognised enumeration spelling (layout, uplo, trans, data type).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {what}: '{value}'")]
pub struct ParseEnumError {
    pub what: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(what: &'static str, value: &str) -> Self {
        Self {
            what,
            value: value.to_string(),
        }
    }
}
