//! End-to-end tests of the herk harness through its public API.

use std::sync::Mutex;

use herkbench_core::{BlasError, Idist, Layout, Scalar, Transpose, Uplo};
use herkbench_tester::{
    gflop_herk_for, parse_real_scalar, test_herk, test_herk_with, CblasReference, DataType, Dim,
    HerkError, HerkKernel, KernelRole, Optimized, Params, MAX_CACHE_MIB,
};
use proptest::prelude::*;

fn params(datatype: DataType, n: usize, k: usize) -> Params {
    Params {
        datatype,
        dim: Dim::new(n, k),
        cache: 0,
        ..Params::default()
    }
}

/// Runs the optimized kernel, then adds `bump` to the (0, 0) element.
struct Perturbed {
    bump: f64,
}

impl HerkKernel for Perturbed {
    fn name(&self) -> &'static str {
        "perturbed"
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
        Optimized.herk(layout, uplo, trans, n, k, alpha, a, lda, beta, c, ldc)?;
        if n > 0 {
            c[0] = c[0] + T::from_parts(self.bump, 0.0);
        }
        Ok(())
    }
}

/// Records the inputs it sees, then defers to the reference.
#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<(Vec<(f64, f64)>, Vec<(f64, f64)>)>>,
}

fn snapshot<T: Scalar>(x: &[T]) -> Vec<(f64, f64)> {
    x.iter().map(|v| (v.real().into(), v.imag().into())).collect()
}

impl HerkKernel for Recorder {
    fn name(&self) -> &'static str {
        "recorder"
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
        self.seen.lock().unwrap().push((snapshot(a), snapshot(c)));
        CblasReference.herk(layout, uplo, trans, n, k, alpha, a, lda, beta, c, ldc)
    }
}

#[test]
fn test_zero_order_passes_for_every_type() {
    for dt in [
        DataType::Single,
        DataType::Double,
        DataType::SingleComplex,
        DataType::DoubleComplex,
    ] {
        for k in [0, 4] {
            let report = test_herk(&params(dt, 0, k)).unwrap();
            assert_eq!(report.error, Some(0.0), "{} k={}", dt, k);
            assert_eq!(report.okay, Some(true), "{} k={}", dt, k);
        }
    }
}

#[test]
fn test_alpha_zero_beta_one_leaves_c_unchanged() {
    let p = Params {
        alpha: 0.0,
        beta: 1.0,
        ..params(DataType::DoubleComplex, 20, 7)
    };
    let report = test_herk(&p).unwrap();
    assert_eq!(report.error, Some(0.0));
    assert_eq!(report.okay, Some(true));
}

#[test]
fn test_zero_depth_scales_by_beta() {
    let report = test_herk(&params(DataType::Single, 12, 0)).unwrap();
    assert_eq!(report.okay, Some(true), "error {:?}", report.error);
}

#[test]
fn test_same_seed_gives_identical_inputs() {
    let p = params(DataType::SingleComplex, 6, 4);
    let rec = Recorder::default();
    test_herk_with(&p, &rec, &CblasReference).unwrap();
    test_herk_with(&p, &rec, &CblasReference).unwrap();
    let seen = rec.seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], seen[1], "A and C must be reproducible from the seed");
}

#[test]
fn test_both_kernels_see_the_same_inputs() {
    let p = params(DataType::Double, 5, 3);
    let test_side = Recorder::default();
    let ref_side = Recorder::default();
    test_herk_with(&p, &test_side, &ref_side).unwrap();
    let a = test_side.seen.lock().unwrap();
    let b = ref_side.seen.lock().unwrap();
    assert_eq!(a[0], b[0], "reference must get the untouched snapshot and the same A");
}

#[test]
fn test_different_seed_changes_inputs() {
    let rec = Recorder::default();
    test_herk_with(&params(DataType::Double, 4, 4), &rec, &CblasReference).unwrap();
    let p = Params {
        seed: [1, 2, 3, 5],
        idist: Idist::Normal,
        ..params(DataType::Double, 4, 4)
    };
    test_herk_with(&p, &rec, &CblasReference).unwrap();
    let seen = rec.seen.lock().unwrap();
    assert_ne!(seen[0].0, seen[1].0);
}

#[test]
fn test_reference_against_itself_scores_zero() {
    for layout in Layout::ALL {
        for uplo in Uplo::ALL {
            let p = Params {
                layout,
                uplo,
                trans: Transpose::ConjTrans,
                align: 4,
                ..params(DataType::DoubleComplex, 11, 6)
            };
            let report = test_herk_with(&p, &CblasReference, &CblasReference).unwrap();
            assert_eq!(report.error, Some(0.0), "{:?} {:?}", layout, uplo);
            assert_eq!(report.okay, Some(true));
        }
    }
}

#[test]
fn test_numerical_mismatch_is_reported_not_raised() {
    let p = params(DataType::Double, 10, 10);
    let report = test_herk_with(&p, &Perturbed { bump: 1e-3 }, &CblasReference).unwrap();
    assert_eq!(report.okay, Some(false));
    let error = report.error.unwrap();
    assert!(error > 0.0 && error.is_finite(), "error = {}", error);
    assert!(report.time_ms >= 0.0);
}

#[test]
fn test_rounding_sized_perturbation_still_passes() {
    let p = params(DataType::Double, 10, 10);
    let report = test_herk_with(&p, &Perturbed { bump: 1e-17 }, &CblasReference).unwrap();
    assert_eq!(report.okay, Some(true), "error = {:?}", report.error);
}

#[test]
fn test_integer_type_fails_fast() {
    let err = test_herk(&params(DataType::Integer, 10, 10)).unwrap_err();
    assert!(matches!(err, HerkError::UnsupportedDataType(DataType::Integer)));
}

#[test]
fn test_complex_trans_is_a_kernel_error() {
    let p = Params {
        trans: Transpose::Trans,
        ..params(DataType::DoubleComplex, 4, 4)
    };
    match test_herk(&p).unwrap_err() {
        HerkError::Kernel { role, source } => {
            assert_eq!(role, KernelRole::Test);
            assert_eq!(source.position(), 3);
        }
        other => panic!("expected kernel error, got {:?}", other),
    }
}

#[test]
fn test_real_trans_is_accepted() {
    let p = Params {
        trans: Transpose::Trans,
        ..params(DataType::Single, 8, 5)
    };
    let report = test_herk(&p).unwrap();
    assert_eq!(report.okay, Some(true), "error {:?}", report.error);
}

#[test]
fn test_invalid_seed_is_a_config_error() {
    let p = Params {
        seed: [0, 0, 0, 2],
        ..params(DataType::Double, 4, 4)
    };
    assert!(matches!(test_herk(&p).unwrap_err(), HerkError::Seed(_)));
}

#[test]
fn test_oversized_dimensions_are_an_allocation_error() {
    for dt in [DataType::Double, DataType::DoubleComplex] {
        let err = test_herk(&params(dt, 1 << 40, 1 << 40)).unwrap_err();
        assert!(matches!(err, HerkError::Alloc(_)), "{}: {:?}", dt, err);
    }
    let p = Params {
        layout: Layout::RowMajor,
        align: 64,
        ..params(DataType::Single, usize::MAX - 3, 1)
    };
    assert!(matches!(test_herk(&p).unwrap_err(), HerkError::Alloc(_)));
}

#[test]
fn test_absurd_cache_flush_is_a_config_error() {
    let p = Params {
        cache: MAX_CACHE_MIB + 1,
        ..params(DataType::Double, 4, 4)
    };
    assert!(matches!(test_herk(&p).unwrap_err(), HerkError::Config(_)));
}

#[test]
fn test_imaginary_alpha_is_rejected() {
    assert!(matches!(parse_real_scalar("1+1i"), Err(HerkError::Config(_))));
    assert_eq!(parse_real_scalar("1+0i").unwrap(), 1.0);
}

#[test]
fn test_throughput_counts_double_with_k() {
    let a = gflop_herk_for(DataType::Double, 64, 16);
    let b = gflop_herk_for(DataType::Double, 64, 32);
    assert!((b - 2.0 * a).abs() < 1e-15);
    assert_eq!(gflop_herk_for(DataType::Integer, 64, 16), 0.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_optimized_kernel_passes_random_shapes(
        n in 0usize..24,
        k in 0usize..24,
        align in 1usize..9,
        row_major in any::<bool>(),
        upper in any::<bool>(),
        conj in any::<bool>(),
        complex in any::<bool>(),
    ) {
        let p = Params {
            layout: if row_major { Layout::RowMajor } else { Layout::ColMajor },
            uplo: if upper { Uplo::Upper } else { Uplo::Lower },
            trans: if conj { Transpose::ConjTrans } else { Transpose::NoTrans },
            align,
            ..params(if complex { DataType::DoubleComplex } else { DataType::Double }, n, k)
        };
        let report = test_herk(&p).unwrap();
        prop_assert_eq!(report.okay, Some(true), "error {:?}", report.error);
    }
}
