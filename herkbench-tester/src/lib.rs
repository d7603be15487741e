//! # Herkbench Tester
//!
//! Correctness and throughput harness for the Hermitian rank-k update
//! `C := alpha * A * A^H + beta * C`.
//!
//! One test case runs a fixed pipeline:
//!
//! 1. resolve buffer shapes and leading dimensions ([`shape`]),
//! 2. fill A then C from one explicit seed and snapshot C,
//! 3. time the kernel under test, then (optionally) the reference,
//! 4. score the two output triangles ([`check`]).
//!
//! ```no_run
//! use herkbench_tester::{test_herk, DataType, Dim, Params};
//!
//! let params = Params {
//!     datatype: DataType::DoubleComplex,
//!     dim: Dim::new(500, 200),
//!     ..Params::default()
//! };
//! let report = test_herk(&params).unwrap();
//! println!("{:.3} Gflop/s, error {:?}", report.gflops, report.error);
//! ```

pub mod check;
pub mod error;
pub mod flops;
pub mod flush;
pub mod herk;
pub mod kernel;
pub mod params;
pub mod print;
pub mod report;
pub mod shape;

pub use check::{check_herk, Score};
pub use error::{HerkError, KernelRole, Result};
pub use flops::{gflop_herk, gflop_herk_for, gflops};
pub use herk::{test_herk, test_herk_with, test_herk_with_output, test_herk_work};
pub use kernel::{CblasReference, HerkKernel, Optimized};
pub use params::{parse_real_scalar, DataType, Dim, Params, MAX_CACHE_MIB};
pub use report::{CaseResult, HerkReport};
pub use shape::{roundup, HerkShape};
