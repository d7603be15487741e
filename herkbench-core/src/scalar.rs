//! Scalar type family: real single/double and complex single/double.
//!
//! A Hermitian rank-k update takes *real* alpha and beta even when A and C
//! are complex, so every [`Scalar`] names its real counterpart through
//! [`Scalar::Real`]. Kernels, norms and the error scorer are all written
//! once against these traits.

use num_complex::{Complex32, Complex64};
use num_traits::{Float, One, Zero};
use std::fmt::{Debug, Display, LowerExp};
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Element type of a matrix buffer.
pub trait Scalar:
    Copy
    + Send
    + Sync
    + Debug
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + SubAssign
    + 'static
{
    /// Real type of alpha, beta, norms and errors.
    type Real: RealScalar;

    const IS_COMPLEX: bool;

    /// BLAS routine prefix: `s`, `d`, `c` or `z`.
    const PREFIX: char;

    fn from_real(re: Self::Real) -> Self;

    /// Build from real and imaginary parts; real types drop `im`.
    fn from_parts(re: f64, im: f64) -> Self;

    fn real(self) -> Self::Real;

    fn imag(self) -> Self::Real;

    fn conj(self) -> Self;

    /// Squared magnitude `re^2 + im^2`.
    fn norm_sqr(self) -> Self::Real;

    fn mul_real(self, r: Self::Real) -> Self;

    /// Raw MKL CBLAS herk (syrk for real types).
    ///
    /// # Safety
    /// Pointers and dimensions must describe valid buffers for the call.
    #[cfg(feature = "mkl")]
    #[allow(clippy::too_many_arguments)]
    unsafe fn mkl_herk(
        layout: i32,
        uplo: i32,
        trans: i32,
        n: i32,
        k: i32,
        alpha: Self::Real,
        a: *const Self,
        lda: i32,
        beta: Self::Real,
        c: *mut Self,
        ldc: i32,
    );
}

/// Real scalar: `f32` or `f64`.
pub trait RealScalar: Scalar<Real = Self> + Float + Display + LowerExp + Into<f64> {
    /// Lossy conversion from a configuration value.
    fn cast(x: f64) -> Self;

    /// Unit roundoff `u = eps / 2`.
    fn unit_roundoff() -> Self {
        Self::epsilon() / (Self::one() + Self::one())
    }
}

macro_rules! impl_real_scalar {
    ($t:ty, $prefix:expr, $syrk:ident) => {
        impl Scalar for $t {
            type Real = $t;
            const IS_COMPLEX: bool = false;
            const PREFIX: char = $prefix;

            #[inline(always)]
            fn from_real(re: $t) -> Self {
                re
            }
            #[inline(always)]
            fn from_parts(re: f64, _im: f64) -> Self {
                re as $t
            }
            #[inline(always)]
            fn real(self) -> $t {
                self
            }
            #[inline(always)]
            fn imag(self) -> $t {
                0.0
            }
            #[inline(always)]
            fn conj(self) -> Self {
                self
            }
            #[inline(always)]
            fn norm_sqr(self) -> $t {
                self * self
            }
            #[inline(always)]
            fn mul_real(self, r: $t) -> Self {
                self * r
            }

            #[cfg(feature = "mkl")]
            unsafe fn mkl_herk(
                layout: i32,
                uplo: i32,
                trans: i32,
                n: i32,
                k: i32,
                alpha: $t,
                a: *const Self,
                lda: i32,
                beta: $t,
                c: *mut Self,
                ldc: i32,
            ) {
                crate::mkl_ffi::$syrk(layout, uplo, trans, n, k, alpha, a, lda, beta, c, ldc);
            }
        }

        impl RealScalar for $t {
            #[inline(always)]
            fn cast(x: f64) -> Self {
                x as $t
            }
        }
    };
}

macro_rules! impl_complex_scalar {
    ($t:ty, $r:ty, $prefix:expr, $herk:ident) => {
        impl Scalar for $t {
            type Real = $r;
            const IS_COMPLEX: bool = true;
            const PREFIX: char = $prefix;

            #[inline(always)]
            fn from_real(re: $r) -> Self {
                <$t>::new(re, 0.0)
            }
            #[inline(always)]
            fn from_parts(re: f64, im: f64) -> Self {
                <$t>::new(re as $r, im as $r)
            }
            #[inline(always)]
            fn real(self) -> $r {
                self.re
            }
            #[inline(always)]
            fn imag(self) -> $r {
                self.im
            }
            #[inline(always)]
            fn conj(self) -> Self {
                <$t>::new(self.re, -self.im)
            }
            #[inline(always)]
            fn norm_sqr(self) -> $r {
                self.re * self.re + self.im * self.im
            }
            #[inline(always)]
            fn mul_real(self, r: $r) -> Self {
                <$t>::new(self.re * r, self.im * r)
            }

            #[cfg(feature = "mkl")]
            unsafe fn mkl_herk(
                layout: i32,
                uplo: i32,
                trans: i32,
                n: i32,
                k: i32,
                alpha: $r,
                a: *const Self,
                lda: i32,
                beta: $r,
                c: *mut Self,
                ldc: i32,
            ) {
                crate::mkl_ffi::$herk(
                    layout,
                    uplo,
                    trans,
                    n,
                    k,
                    alpha,
                    a as *const std::os::raw::c_void,
                    lda,
                    beta,
                    c as *mut std::os::raw::c_void,
                    ldc,
                );
            }
        }
    };
}

impl_real_scalar!(f32, 's', cblas_ssyrk);
impl_real_scalar!(f64, 'd', cblas_dsyrk);
impl_complex_scalar!(Complex32, f32, 'c', cblas_cherk);
impl_complex_scalar!(Complex64, f64, 'z', cblas_zherk);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_conj_and_norm() {
        let z = Complex64::new(3.0, -4.0);
        assert_eq!(Scalar::conj(z), Complex64::new(3.0, 4.0));
        assert_eq!(Scalar::norm_sqr(z), 25.0);
        assert_eq!(z.mul_real(2.0), Complex64::new(6.0, -8.0));
        assert_eq!(Scalar::real(z), 3.0);
        assert_eq!(Scalar::imag(z), -4.0);
    }

    #[test]
    fn test_real_drops_imaginary_part() {
        assert_eq!(<f32 as Scalar>::from_parts(1.5, 7.0), 1.5f32);
        assert_eq!(Scalar::imag(2.0f64), 0.0);
        assert_eq!(Scalar::conj(-2.0f64), -2.0);
    }

    #[test]
    fn test_unit_roundoff_per_precision() {
        assert_eq!(f32::unit_roundoff(), f32::EPSILON / 2.0);
        assert_eq!(f64::unit_roundoff(), f64::EPSILON / 2.0);
        // Complex types share the epsilon of their real part.
        assert_eq!(
            <<Complex32 as Scalar>::Real as RealScalar>::unit_roundoff(),
            f32::unit_roundoff()
        );
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(<f32 as Scalar>::PREFIX, 's');
        assert_eq!(<f64 as Scalar>::PREFIX, 'd');
        assert_eq!(<Complex32 as Scalar>::PREFIX, 'c');
        assert_eq!(<Complex64 as Scalar>::PREFIX, 'z');
        assert!(<Complex64 as Scalar>::IS_COMPLEX);
        assert!(!<f64 as Scalar>::IS_COMPLEX);
    }
}
