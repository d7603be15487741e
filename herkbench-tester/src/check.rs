//! Error scorer for rank-k updates.
//!
//! The difference between the two output triangles is measured in the
//! Frobenius norm and normalised by the size of the problem:
//!
//! ```text
//! error = ||C - Cref||_F / (sqrt(k + 2) * |alpha| * ||A||_F * ||B||_F + 2 * |beta| * ||C0||_F)
//! ```
//!
//! with B = A for herk. The case passes when `error <= tol * u`, u being the
//! unit roundoff of the real type.

use herkbench_core::{Layout, RealScalar, Scalar, Uplo};
use herkbench_lapack::lansy_fro;
use serde::{Deserialize, Serialize};

/// Normalised error and verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub error: f64,
    pub okay: bool,
}

/// Score `c` against `cref` on the `uplo` triangle of order `n`.
///
/// `anorm`, `bnorm` and `cnorm` are the input norms taken before either
/// kernel ran.
#[allow(clippy::too_many_arguments)]
pub fn check_herk<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    k: usize,
    alpha: T::Real,
    beta: T::Real,
    anorm: T::Real,
    bnorm: T::Real,
    cnorm: T::Real,
    cref: &[T],
    ldcref: usize,
    c: &[T],
    ldc: usize,
    tol: f64,
) -> Score {
    let mut diff = vec![T::zero(); n * n];
    for i in 0..n {
        let (j0, j1) = uplo.row_span(i, n);
        for j in j0..j1 {
            diff[layout.index(i, j, n)] = c[layout.index(i, j, ldc)] - cref[layout.index(i, j, ldcref)];
        }
    }
    let diff_norm: f64 = lansy_fro(layout, uplo, n, &diff, n).into();

    let alpha: f64 = alpha.into();
    let beta: f64 = beta.into();
    let (anorm, bnorm, cnorm): (f64, f64, f64) = (anorm.into(), bnorm.into(), cnorm.into());
    let scale = ((k + 2) as f64).sqrt() * alpha.abs() * anorm * bnorm + 2.0 * beta.abs() * cnorm;

    // Exact agreement passes even when the bound itself is zero.
    let error = if diff_norm == 0.0 {
        0.0
    } else {
        diff_norm / scale
    };
    let u: f64 = <T::Real as RealScalar>::unit_roundoff().into();
    Score {
        error,
        okay: error <= tol * u,
    }
}
