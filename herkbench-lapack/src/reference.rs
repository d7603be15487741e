//! Reference Hermitian rank-k update in the CBLAS calling convention.
//!
//! This is the correctness oracle: the straightforward column-major
//! algorithm, with row-major calls handled the CBLAS way (swap the triangle
//! and the transpose, then run the column-major code). It takes the CBLAS
//! integer constants, not the harness enums; `cblas_layout_const` and
//! friends are the one place the two vocabularies meet.
//!
//! With `--features mkl` the call is forwarded to `cblas_?herk` / `cblas_?syrk`.

use herkbench_core::layout::{Layout, Transpose, Uplo};
use herkbench_core::{BlasError, One, Scalar, Zero};
use thiserror::Error;

const ROUTINE: &str = "cblas_herk";

// ============================================================================
// CBLAS constants
// ============================================================================

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CblasLayout {
    RowMajor = 101,
    ColMajor = 102,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CblasTranspose {
    NoTrans = 111,
    Trans = 112,
    ConjTrans = 113,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CblasUplo {
    Upper = 121,
    Lower = 122,
}

/// An integer that is not one of the CBLAS enumeration constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{value} is not a valid CBLAS {what} constant")]
pub struct UnknownConstant {
    pub what: &'static str,
    pub value: i32,
}

impl TryFrom<i32> for CblasLayout {
    type Error = UnknownConstant;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            101 => Ok(CblasLayout::RowMajor),
            102 => Ok(CblasLayout::ColMajor),
            _ => Err(UnknownConstant { what: "layout", value }),
        }
    }
}

impl TryFrom<i32> for CblasTranspose {
    type Error = UnknownConstant;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            111 => Ok(CblasTranspose::NoTrans),
            112 => Ok(CblasTranspose::Trans),
            113 => Ok(CblasTranspose::ConjTrans),
            _ => Err(UnknownConstant { what: "transpose", value }),
        }
    }
}

impl TryFrom<i32> for CblasUplo {
    type Error = UnknownConstant;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            121 => Ok(CblasUplo::Upper),
            122 => Ok(CblasUplo::Lower),
            _ => Err(UnknownConstant { what: "uplo", value }),
        }
    }
}

// ============================================================================
// Mapping table: harness enums -> CBLAS constants
// ============================================================================

pub const fn cblas_layout_const(layout: Layout) -> CblasLayout {
    match layout {
        Layout::RowMajor => CblasLayout::RowMajor,
        Layout::ColMajor => CblasLayout::ColMajor,
    }
}

pub const fn cblas_trans_const(trans: Transpose) -> CblasTranspose {
    match trans {
        Transpose::NoTrans => CblasTranspose::NoTrans,
        Transpose::Trans => CblasTranspose::Trans,
        Transpose::ConjTrans => CblasTranspose::ConjTrans,
    }
}

pub const fn cblas_uplo_const(uplo: Uplo) -> CblasUplo {
    match uplo {
        Uplo::Upper => CblasUplo::Upper,
        Uplo::Lower => CblasUplo::Lower,
    }
}

// ============================================================================
// cblas_herk
// ============================================================================

/// C := alpha * op(A) * op(A)^H + beta * C on the `uplo` triangle.
///
/// Argument checks and error positions match the optimized kernel, so the
/// two are interchangeable behind the harness.
#[allow(clippy::too_many_arguments)]
pub fn cblas_herk<T: Scalar>(
    layout: CblasLayout,
    uplo: CblasUplo,
    trans: CblasTranspose,
    n: usize,
    k: usize,
    alpha: T::Real,
    a: &[T],
    lda: usize,
    beta: T::Real,
    c: &mut [T],
    ldc: usize,
) -> Result<(), BlasError> {
    if T::IS_COMPLEX && trans == CblasTranspose::Trans {
        return Err(BlasError::invalid(
            ROUTINE,
            3,
            "Trans is not a Hermitian operation; use NoTrans or ConjTrans",
        ));
    }
    let (rows, cols) = match trans {
        CblasTranspose::NoTrans => (n, k),
        _ => (k, n),
    };
    let (phys_rows, phys_cols) = match layout {
        CblasLayout::ColMajor => (rows, cols),
        CblasLayout::RowMajor => (cols, rows),
    };
    if lda < phys_rows {
        return Err(BlasError::invalid(
            ROUTINE,
            8,
            format!("lda = {} < {}", lda, phys_rows),
        ));
    }
    if ldc < n {
        return Err(BlasError::invalid(
            ROUTINE,
            11,
            format!("ldc = {} < n = {}", ldc, n),
        ));
    }
    if phys_rows > 0
        && phys_cols > 0
        && a.len() < lda.saturating_mul(phys_cols - 1).saturating_add(phys_rows)
    {
        return Err(BlasError::invalid(ROUTINE, 7, "A is too short"));
    }
    if n > 0 && c.len() < ldc.saturating_mul(n - 1).saturating_add(n) {
        return Err(BlasError::invalid(ROUTINE, 10, "C is too short"));
    }

    #[cfg(feature = "mkl")]
    {
        let (n_i, k_i) = (blas_int(n, 4)?, blas_int(k, 5)?);
        let (lda_i, ldc_i) = (blas_int(lda, 8)?, blas_int(ldc, 11)?);
        unsafe {
            T::mkl_herk(
                layout as i32,
                uplo as i32,
                trans as i32,
                n_i,
                k_i,
                alpha,
                a.as_ptr(),
                lda_i,
                beta,
                c.as_mut_ptr(),
                ldc_i,
            );
        }
        Ok(())
    }

    #[cfg(not(feature = "mkl"))]
    {
        // Row-major C is the transpose of a column-major C; the stored
        // triangle flips and the operation flips between A*A^H and A^H*A.
        let (upper, no_trans) = match layout {
            CblasLayout::ColMajor => (uplo == CblasUplo::Upper, trans == CblasTranspose::NoTrans),
            CblasLayout::RowMajor => (uplo == CblasUplo::Lower, trans != CblasTranspose::NoTrans),
        };
        herk_col_major(upper, no_trans, n, k, alpha, a, lda, beta, c, ldc);
        Ok(())
    }
}

/// MKL takes 32-bit dimensions.
#[cfg(feature = "mkl")]
fn blas_int(x: usize, position: usize) -> Result<i32, BlasError> {
    i32::try_from(x).map_err(|_| {
        BlasError::invalid(ROUTINE, position, format!("{} exceeds the 32-bit BLAS range", x))
    })
}

/// Column-major rank-k update, one column of C at a time.
#[allow(clippy::too_many_arguments)]
#[cfg_attr(feature = "mkl", allow(dead_code))]
fn herk_col_major<T: Scalar>(
    upper: bool,
    no_trans: bool,
    n: usize,
    k: usize,
    alpha: T::Real,
    a: &[T],
    lda: usize,
    beta: T::Real,
    c: &mut [T],
    ldc: usize,
) {
    let zero = T::Real::zero();
    let one = T::Real::one();
    if n == 0 || ((alpha == zero || k == 0) && beta == one) {
        return;
    }
    let at = |i: usize, j: usize, ld: usize| j * ld + i;
    let rows = |j: usize| if upper { 0..j } else { j + 1..n };

    if alpha == zero {
        for j in 0..n {
            for i in rows(j) {
                c[at(i, j, ldc)] = if beta == zero {
                    T::zero()
                } else {
                    c[at(i, j, ldc)].mul_real(beta)
                };
            }
            let d = at(j, j, ldc);
            c[d] = if beta == zero {
                T::zero()
            } else {
                T::from_real(beta * c[d].real())
            };
        }
        return;
    }

    if no_trans {
        // C := alpha * A * A^H + beta * C
        for j in 0..n {
            let d = at(j, j, ldc);
            if beta == zero {
                for i in rows(j) {
                    c[at(i, j, ldc)] = T::zero();
                }
                c[d] = T::zero();
            } else if beta != one {
                for i in rows(j) {
                    let idx = at(i, j, ldc);
                    c[idx] = c[idx].mul_real(beta);
                }
                c[d] = T::from_real(beta * c[d].real());
            } else {
                c[d] = T::from_real(c[d].real());
            }
            for l in 0..k {
                let ajl = a[at(j, l, lda)];
                if ajl == T::zero() {
                    continue;
                }
                let temp = ajl.conj().mul_real(alpha);
                for i in rows(j) {
                    let idx = at(i, j, ldc);
                    c[idx] += temp * a[at(i, l, lda)];
                }
                c[d] = T::from_real(c[d].real() + (temp * ajl).real());
            }
        }
    } else {
        // C := alpha * A^H * A + beta * C
        for j in 0..n {
            if !upper {
                herk_diag(j, k, alpha, a, lda, beta, c, ldc);
            }
            for i in rows(j) {
                let mut temp = T::zero();
                for l in 0..k {
                    temp += a[at(l, i, lda)].conj() * a[at(l, j, lda)];
                }
                let idx = at(i, j, ldc);
                c[idx] = if beta == zero {
                    temp.mul_real(alpha)
                } else {
                    temp.mul_real(alpha) + c[idx].mul_real(beta)
                };
            }
            if upper {
                herk_diag(j, k, alpha, a, lda, beta, c, ldc);
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn herk_diag<T: Scalar>(
    j: usize,
    k: usize,
    alpha: T::Real,
    a: &[T],
    lda: usize,
    beta: T::Real,
    c: &mut [T],
    ldc: usize,
) {
    let mut rtemp = T::Real::zero();
    for l in 0..k {
        rtemp += a[j * lda + l].norm_sqr();
    }
    let d = j * ldc + j;
    c[d] = if beta == T::Real::zero() {
        T::from_real(alpha * rtemp)
    } else {
        T::from_real(alpha * rtemp + beta * c[d].real())
    };
}
