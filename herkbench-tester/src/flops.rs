//! Operation counts, LAPACK Working Note 41 style.

use herkbench_core::{Complex32, Complex64, Scalar};

use crate::params::DataType;

fn fmuls_herk(n: f64, k: f64) -> f64 {
    0.5 * k * n * (n + 1.0)
}

fn fadds_herk(n: f64, k: f64) -> f64 {
    0.5 * k * n * (n + 1.0)
}

/// Giga-flops of one herk of order `n` and depth `k` in type `T`.
///
/// A complex multiply costs 6 real flops and a complex add costs 2.
pub fn gflop_herk<T: Scalar>(n: usize, k: usize) -> f64 {
    let (n, k) = (n as f64, k as f64);
    let (mul, add) = (fmuls_herk(n, k), fadds_herk(n, k));
    if T::IS_COMPLEX {
        1e-9 * (6.0 * mul + 2.0 * add)
    } else {
        1e-9 * (mul + add)
    }
}

/// `gflop_herk` for a runtime data type; 0 for the unsupported integer class.
pub fn gflop_herk_for(datatype: DataType, n: usize, k: usize) -> f64 {
    match datatype {
        DataType::Integer => 0.0,
        DataType::Single => gflop_herk::<f32>(n, k),
        DataType::Double => gflop_herk::<f64>(n, k),
        DataType::SingleComplex => gflop_herk::<Complex32>(n, k),
        DataType::DoubleComplex => gflop_herk::<Complex64>(n, k),
    }
}

/// Throughput in Gflop/s; 0 when the call was too fast to time.
pub fn gflops(gflop: f64, seconds: f64) -> f64 {
    if seconds > 0.0 {
        gflop / seconds
    } else {
        0.0
    }
}
