//! Frobenius norms (`?lange` / `?lansy` with `norm = 'F'`).
//!
//! Accumulated as a scaled sum of squares so that large or tiny entries
//! neither overflow nor underflow.

use herkbench_core::layout::{Layout, Uplo};
use herkbench_core::{One, Scalar};

/// Running `(scale, sumsq)` pair, value = scale * sqrt(sumsq).
struct ScaledSumSq<R> {
    scale: R,
    sumsq: R,
}

impl<R: herkbench_core::RealScalar> ScaledSumSq<R> {
    fn new() -> Self {
        Self {
            scale: R::zero(),
            sumsq: R::one(),
        }
    }

    fn push(&mut self, x: R, weight: R) {
        if x == R::zero() {
            return;
        }
        let ax = x.abs();
        if self.scale < ax {
            let r = self.scale / ax;
            self.sumsq = weight + self.sumsq * r * r;
            self.scale = ax;
        } else {
            let r = ax / self.scale;
            self.sumsq += weight * r * r;
        }
    }

    fn push_scalar<T: Scalar<Real = R>>(&mut self, v: T, weight: R) {
        self.push(v.real(), weight);
        if T::IS_COMPLEX {
            self.push(v.imag(), weight);
        }
    }

    fn value(&self) -> R {
        self.scale * self.sumsq.sqrt()
    }
}

/// Frobenius norm of the `m x n` general matrix A.
pub fn lange_fro<T: Scalar>(layout: Layout, m: usize, n: usize, a: &[T], lda: usize) -> T::Real {
    let one = <T::Real as One>::one();
    let mut acc = ScaledSumSq::new();
    for j in 0..n {
        for i in 0..m {
            acc.push_scalar(a[layout.index(i, j, lda)], one);
        }
    }
    acc.value()
}

/// Frobenius norm of the symmetric/Hermitian matrix whose `uplo` triangle
/// of order n is stored in A. Off-diagonal entries count twice.
pub fn lansy_fro<T: Scalar>(layout: Layout, uplo: Uplo, n: usize, a: &[T], lda: usize) -> T::Real {
    let one = <T::Real as One>::one();
    let two = one + one;
    let mut acc = ScaledSumSq::new();
    for i in 0..n {
        let (j0, j1) = uplo.row_span(i, n);
        for j in j0..j1 {
            let w = if i == j { one } else { two };
            acc.push_scalar(a[layout.index(i, j, lda)], w);
        }
    }
    acc.value()
}
