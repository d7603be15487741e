//! The two kernels the harness drives.
//!
//! Both share the calling contract `(layout, uplo, trans, n, k, alpha, A,
//! lda, beta, C, ldc)`. The optimized kernel takes the harness enums
//! directly; the reference takes CBLAS constants through the mapping table.

use herkbench_core::{BlasError, Layout, Scalar, Transpose, Uplo};
use herkbench_lapack::{cblas_herk, cblas_layout_const, cblas_trans_const, cblas_uplo_const};

/// A Hermitian rank-k update over every `Scalar` type.
pub trait HerkKernel {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    #[allow(clippy::too_many_arguments)]
    fn herk<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        trans: Transpose,
        n: usize,
        k: usize,
        alpha: T::Real,
        a: &[T],
        lda: usize,
        beta: T::Real,
        c: &mut [T],
        ldc: usize,
    ) -> Result<(), BlasError>;
}

/// `herkbench_blas::herk`, the kernel under test.
#[derive(Debug, Clone, Copy, Default)]
pub struct Optimized;

impl HerkKernel for Optimized {
    fn name(&self) -> &'static str {
        "herkbench-blas"
    }

    fn herk<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        trans: Transpose,
        n: usize,
        k: usize,
        alpha: T::Real,
        a: &[T],
        lda: usize,
        beta: T::Real,
        c: &mut [T],
        ldc: usize,
    ) -> Result<(), BlasError> {
        herkbench_blas::herk(layout, uplo, trans, n, k, alpha, a, lda, beta, c, ldc)
    }
}

/// `cblas_herk`, the correctness oracle.
#[derive(Debug, Clone, Copy, Default)]
pub struct CblasReference;

impl HerkKernel for CblasReference {
    fn name(&self) -> &'static str {
        if cfg!(feature = "mkl") {
            "cblas (mkl)"
        } else {
            "cblas (reference)"
        }
    }

    fn herk<T: Scalar>(
        &self,
        layout: Layout,
        uplo: Uplo,
        trans: Transpose,
        n: usize,
        k: usize,
        alpha: T::Real,
        a: &[T],
        lda: usize,
        beta: T::Real,
        c: &mut [T],
        ldc: usize,
    ) -> Result<(), BlasError> {
        cblas_herk(
            cblas_layout_const(layout),
            cblas_uplo_const(uplo),
            cblas_trans_const(trans),
            n,
            k,
            alpha,
            a,
            lda,
            beta,
            c,
            ldc,
        )
    }
}
