//! # Herkbench Core
//!
//! Shared building blocks for the herkbench crates.
//!
//! This crate provides:
//! - **CBLAS layout types**: `Layout`, `Uplo`, `Transpose`, free of any
//!   library's integer encoding.
//! - **Scalar family**: `Scalar` / `RealScalar` over `f32`, `f64`,
//!   `Complex32`, `Complex64`, each complex type paired with its real type.
//! - **Seeded generator**: `Iseed` + `larnv`, an explicit-state LAPACK-style
//!   random matrix generator.
//! - **Aligned buffers**: `AlignedBuf`, scoped 64-byte aligned allocations.
//! - **Parallel execution**: scoped-thread row partitioning for kernels.

pub mod buffer;
pub mod error;
pub mod layout;
pub mod parallel;
pub mod rng;
pub mod scalar;

// Intel MKL FFI bindings (only compiled when --features mkl is enabled)
#[cfg(feature = "mkl")]
pub mod mkl_ffi;

pub use buffer::AlignedBuf;
pub use error::{AllocError, BlasError, ParseEnumError, SeedError};
pub use layout::{Layout, Transpose, Uplo};
pub use num_complex::{Complex32, Complex64};
pub use num_traits::{Float, One, Zero};
pub use parallel::parallel_for_chunks;
pub use rng::{larnv, Idist, Iseed};
pub use scalar::{RealScalar, Scalar};
