// BLAS functions match CBLAS signatures; many parameters are inherent to the API.
// Numeric kernels use index loops on packed arrays where iterators hurt readability.
#![allow(clippy::too_many_arguments, clippy::needless_range_loop)]

//! # Herkbench BLAS
//!
//! The optimized Hermitian rank-k update, the kernel the harness measures.
//!
//! One generic entry point covers `ssyrk`, `dsyrk`, `cherk` and `zherk`:
//! real types perform the symmetric update, complex types the Hermitian one.
//!
//! ## Memory Layout
//!
//! Both row-major and column-major layouts are supported via CBLAS-style API.
//!
//! ```
//! use herkbench_blas::level3;
//! use herkbench_core::{AlignedBuf, Layout, Transpose, Uplo};
//!
//! let (n, k) = (4, 3);
//! let mut a = AlignedBuf::<f64>::zeroed(n * k).unwrap();
//! let mut c = AlignedBuf::<f64>::zeroed(n * n).unwrap();
//! a.fill(1.0);
//!
//! level3::herk(Layout::ColMajor, Uplo::Upper, Transpose::NoTrans,
//!              n, k, 1.0, &a, n, 0.0, &mut c, n).unwrap();
//! assert_eq!(c[0], 3.0);
//! ```

pub mod level1;
pub mod level3;

pub use herkbench_core::layout::{Layout, Transpose, Uplo};
pub use level3::herk;
