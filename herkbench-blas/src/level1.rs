//! BLAS Level 1 helpers used by the rank-k update.
//!
//! Contiguous slices only: strided data is packed by the caller first.
//! Four independent accumulators keep the FP pipeline busy without SIMD
//! intrinsics, and LLVM vectorizes the real cases.

use herkbench_core::{Scalar, Zero};

// ============================================================================
// Strided gather: copy strided data into a contiguous buffer
// ============================================================================

/// Copy `n` elements of `x` with stride `inc` into `dst`, conjugating if asked.
#[inline]
pub fn gather<T: Scalar>(x: &[T], n: usize, inc: usize, conj: bool, dst: &mut [T]) {
    for (i, d) in dst[..n].iter_mut().enumerate() {
        let v = x[i * inc];
        *d = if conj { v.conj() } else { v };
    }
}

// ============================================================================
// DOTC: conjugated inner product  result = sum x[p] * conj(y[p])
// ============================================================================

#[inline]
pub fn dotc<T: Scalar>(x: &[T], y: &[T]) -> T {
    let n = x.len().min(y.len());
    let (x, y) = (&x[..n], &y[..n]);
    let chunks = n / 4;

    let mut s0 = T::zero();
    let mut s1 = T::zero();
    let mut s2 = T::zero();
    let mut s3 = T::zero();
    for c in 0..chunks {
        let p = c * 4;
        s0 += x[p] * y[p].conj();
        s1 += x[p + 1] * y[p + 1].conj();
        s2 += x[p + 2] * y[p + 2].conj();
        s3 += x[p + 3] * y[p + 3].conj();
    }
    let mut sum = (s0 + s1) + (s2 + s3);
    for p in chunks * 4..n {
        sum += x[p] * y[p].conj();
    }
    sum
}

/// Squared 2-norm `sum |x[p]|^2`, always real.
#[inline]
pub fn sum_sq<T: Scalar>(x: &[T]) -> T::Real {
    let chunks = x.len() / 4;
    let mut s0 = T::Real::zero();
    let mut s1 = T::Real::zero();
    let mut s2 = T::Real::zero();
    let mut s3 = T::Real::zero();
    for c in 0..chunks {
        let p = c * 4;
        s0 += x[p].norm_sqr();
        s1 += x[p + 1].norm_sqr();
        s2 += x[p + 2].norm_sqr();
        s3 += x[p + 3].norm_sqr();
    }
    let mut sum = (s0 + s1) + (s2 + s3);
    for v in &x[chunks * 4..] {
        sum += v.norm_sqr();
    }
    sum
}
