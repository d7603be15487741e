//! Buffer shapes and leading dimensions for one herk case.

use herkbench_core::{AllocError, Layout, Transpose};
use serde::Serialize;

/// Smallest multiple of `align` that is `>= x`. `align <= 1` is a no-op.
///
/// `None` when the result does not fit in `usize`.
pub fn roundup(x: usize, align: usize) -> Option<usize> {
    if align <= 1 {
        Some(x)
    } else {
        x.div_ceil(align).checked_mul(align)
    }
}

/// Physical storage of A and C.
///
/// `am x an` is A as stored: rows along the leading dimension. For
/// row-major layouts this is the transpose of the logical shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HerkShape {
    pub am: usize,
    pub an: usize,
    pub lda: usize,
    pub size_a: usize,
    pub n: usize,
    pub ldc: usize,
    pub size_c: usize,
}

impl HerkShape {
    /// Fails with `AllocError::Overflow` when a leading dimension or a
    /// buffer size does not fit in `usize`.
    pub fn resolve(
        layout: Layout,
        trans: Transpose,
        n: usize,
        k: usize,
        align: usize,
    ) -> Result<Self, AllocError> {
        let (rows, cols) = match trans {
            Transpose::NoTrans => (n, k),
            Transpose::Trans | Transpose::ConjTrans => (k, n),
        };
        let (am, an) = layout.physical(rows, cols);
        let lda = roundup(am, align).ok_or(AllocError::Overflow { elements: am })?;
        let ldc = roundup(n, align).ok_or(AllocError::Overflow { elements: n })?;
        let size_a = lda.checked_mul(an).ok_or(AllocError::Overflow {
            elements: lda.saturating_mul(an),
        })?;
        let size_c = ldc.checked_mul(n).ok_or(AllocError::Overflow {
            elements: ldc.saturating_mul(n),
        })?;
        Ok(Self {
            am,
            an,
            lda,
            size_a,
            n,
            ldc,
            size_c,
        })
    }
}
