//! One herk test case: generate, run, time, score.

use std::io::{self, Write};
use std::time::Instant;

use herkbench_core::{larnv, AlignedBuf, Iseed, Layout, RealScalar, Scalar, Transpose};
use herkbench_core::{Complex32, Complex64};
use herkbench_lapack::{lacpy, lange_fro, lansy_fro, MatrixPart};

use crate::check::check_herk;
use crate::error::{HerkError, KernelRole, Result};
use crate::flops::{gflop_herk, gflops};
use crate::flush::flush_cache;
use crate::kernel::{CblasReference, HerkKernel, Optimized};
use crate::params::{DataType, Params};
use crate::print::print_matrix;
use crate::report::HerkReport;
use crate::shape::HerkShape;

/// Run one case with the optimized kernel against the CBLAS reference.
pub fn test_herk(params: &Params) -> Result<HerkReport> {
    test_herk_with(params, &Optimized, &CblasReference)
}

/// Run one case with caller-chosen kernels; verbose output goes to stdout.
pub fn test_herk_with<K: HerkKernel, R: HerkKernel>(
    params: &Params,
    kernel: &K,
    reference: &R,
) -> Result<HerkReport> {
    test_herk_with_output(params, kernel, reference, &mut io::stdout())
}

/// Run one case, writing the verbose summary and dumps to `out`.
pub fn test_herk_with_output<K: HerkKernel, R: HerkKernel, W: Write>(
    params: &Params,
    kernel: &K,
    reference: &R,
    out: &mut W,
) -> Result<HerkReport> {
    params.validate()?;
    match params.datatype {
        DataType::Integer => Err(HerkError::UnsupportedDataType(DataType::Integer)),
        DataType::Single => test_herk_work::<f32, _, _, _>(params, kernel, reference, out),
        DataType::Double => test_herk_work::<f64, _, _, _>(params, kernel, reference, out),
        DataType::SingleComplex => {
            test_herk_work::<Complex32, _, _, _>(params, kernel, reference, out)
        }
        DataType::DoubleComplex => {
            test_herk_work::<Complex64, _, _, _>(params, kernel, reference, out)
        }
    }
}

/// The case body for one scalar type.
///
/// A, C and the reference copy of C are owned `AlignedBuf`s and are freed on
/// every return path.
pub fn test_herk_work<T: Scalar, K: HerkKernel, R: HerkKernel, W: Write>(
    params: &Params,
    kernel: &K,
    reference: &R,
    out: &mut W,
) -> Result<HerkReport> {
    let (layout, uplo, trans) = (params.layout, params.uplo, params.trans);
    let (n, k) = (params.dim.n, params.dim.k);
    let alpha = <T::Real as RealScalar>::cast(params.alpha);
    let beta = <T::Real as RealScalar>::cast(params.beta);
    let align = params.align.max(1);

    let shape = HerkShape::resolve(layout, trans, n, k, align)?;
    let (lda, ldc) = (shape.lda, shape.ldc);
    log::debug!("{}herk {:?}", T::PREFIX, shape);

    let mut a = AlignedBuf::<T>::zeroed(shape.size_a)?;
    let mut c = AlignedBuf::<T>::zeroed(shape.size_c)?;
    let mut cref = AlignedBuf::<T>::zeroed(shape.size_c)?;

    let mut seed = Iseed::new(params.seed)?;
    larnv(params.idist, &mut seed, &mut a);
    larnv(params.idist, &mut seed, &mut c);
    lacpy(MatrixPart::General, layout, n, n, &c, ldc, &mut cref, ldc);

    // A is stored as shape.am x shape.an in column order of its leading
    // dimension; the Frobenius norm does not care about the logical view.
    let anorm = lange_fro(Layout::ColMajor, shape.am, shape.an, &a, lda);
    let cnorm = lansy_fro(layout, uplo, n, &c, ldc);
    log::debug!("norms: A {:.2e}, C {:.2e}", anorm, cnorm);

    if params.verbose >= 1 {
        writeln!(
            out,
            "uplo {}, trans {}\n\
             A Am={:5}, An={:5}, lda={:5}, size={:5}, norm {:.2e}\n\
             C  n={:5},  n={:5}, ldc={:5}, size={:5}, norm {:.2e}",
            uplo, trans, shape.am, shape.an, lda, shape.size_a, anorm, n, n, ldc, shape.size_c, cnorm
        )?;
    }
    if params.verbose >= 2 {
        writeln!(out, "alpha = {:.4e}; beta = {:.4e};  % real", alpha, beta)?;
        let (rows, cols) = match trans {
            Transpose::NoTrans => (n, k),
            _ => (k, n),
        };
        print_matrix(out, "A", layout, rows, cols, &a, lda)?;
        print_matrix(out, "C", layout, n, n, &c, ldc)?;
    }

    let gflop = gflop_herk::<T>(n, k);

    flush_cache(params.cache);
    let start = Instant::now();
    kernel
        .herk(layout, uplo, trans, n, k, alpha, &a, lda, beta, &mut c, ldc)
        .map_err(|source| HerkError::Kernel {
            role: KernelRole::Test,
            source,
        })?;
    let secs = start.elapsed().as_secs_f64();

    let mut report = HerkReport {
        time_ms: secs * 1000.0,
        gflops: gflops(gflop, secs),
        ..HerkReport::default()
    };
    log::debug!("{}: {:.4} ms, {:.3} Gflop/s", kernel.name(), report.time_ms, report.gflops);

    if params.verbose >= 2 {
        print_matrix(out, "C2", layout, n, n, &c, ldc)?;
    }

    if params.runs_reference() {
        flush_cache(params.cache);
        let start = Instant::now();
        reference
            .herk(layout, uplo, trans, n, k, alpha, &a, lda, beta, &mut cref, ldc)
            .map_err(|source| HerkError::Kernel {
                role: KernelRole::Reference,
                source,
            })?;
        let secs = start.elapsed().as_secs_f64();
        report.ref_time_ms = Some(secs * 1000.0);
        report.ref_gflops = Some(gflops(gflop, secs));
        log::debug!("{}: {:.4} ms", reference.name(), secs * 1000.0);

        if params.verbose >= 2 {
            print_matrix(out, "Cref", layout, n, n, &cref, ldc)?;
        }

        if params.check {
            let score = check_herk(
                layout, uplo, n, k, alpha, beta, anorm, anorm, cnorm, &cref, ldc, &c, ldc, params.tol,
            );
            if !score.okay {
                log::warn!(
                    "{}herk {} {} {} n={} k={}: error {:.2e} exceeds {} * u",
                    T::PREFIX,
                    layout,
                    uplo,
                    trans,
                    n,
                    k,
                    score.error,
                    params.tol
                );
            }
            report.error = Some(score.error);
            report.okay = Some(score.okay);
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Dim;
    use herkbench_core::Uplo;

    fn small(datatype: DataType) -> Params {
        Params {
            datatype,
            dim: Dim::new(9, 5),
            cache: 0,
            ..Params::default()
        }
    }

    #[test]
    fn test_every_float_type_passes() {
        for dt in [
            DataType::Single,
            DataType::Double,
            DataType::SingleComplex,
            DataType::DoubleComplex,
        ] {
            let report = test_herk(&small(dt)).unwrap();
            assert_eq!(report.okay, Some(true), "{}: error {:?}", dt, report.error);
            assert!(report.ref_time_ms.is_some());
        }
    }

    #[test]
    fn test_integer_is_rejected() {
        let err = test_herk(&small(DataType::Integer)).unwrap_err();
        assert!(matches!(err, HerkError::UnsupportedDataType(DataType::Integer)));
    }

    #[test]
    fn test_no_reference_without_ref_or_check() {
        let p = Params {
            check: false,
            run_ref: false,
            ..small(DataType::Double)
        };
        let report = test_herk(&p).unwrap();
        assert_eq!(report.ref_time_ms, None);
        assert_eq!(report.error, None);
        assert_eq!(report.okay, None);
    }

    #[test]
    fn test_ref_without_check_times_only() {
        let p = Params {
            check: false,
            run_ref: true,
            ..small(DataType::Double)
        };
        let report = test_herk(&p).unwrap();
        assert!(report.ref_time_ms.is_some());
        assert!(report.ref_gflops.is_some());
        assert_eq!(report.okay, None);
    }

    #[test]
    fn test_verbose_summary_only_at_level_one() {
        let p = Params {
            verbose: 1,
            ..small(DataType::Double)
        };
        let mut out = Vec::new();
        test_herk_with_output(&p, &Optimized, &CblasReference, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("lda="), "summary missing: {}", text);
        assert!(!text.contains("A = ["), "level 1 must not dump matrices: {}", text);
    }

    #[test]
    fn test_verbose_dumps_every_matrix_at_level_two() {
        let p = Params {
            verbose: 2,
            dim: Dim::new(3, 2),
            ..small(DataType::DoubleComplex)
        };
        let mut out = Vec::new();
        let report = test_herk_with_output(&p, &Optimized, &CblasReference, &mut out).unwrap();
        assert_eq!(report.okay, Some(true));
        let text = String::from_utf8(out).unwrap();
        for label in ["alpha = ", "A = [", "C = [", "C2 = [", "Cref = ["] {
            assert!(text.contains(label), "missing {:?} in:\n{}", label, text);
        }
    }

    #[test]
    fn test_silent_by_default() {
        let mut out = Vec::new();
        test_herk_with_output(&small(DataType::Single), &Optimized, &CblasReference, &mut out)
            .unwrap();
        assert!(out.is_empty(), "verbose 0 wrote {} bytes", out.len());
    }

    #[test]
    fn test_all_variants_with_alignment() {
        for layout in Layout::ALL {
            for uplo in Uplo::ALL {
                for trans in [Transpose::NoTrans, Transpose::ConjTrans] {
                    let p = Params {
                        layout,
                        uplo,
                        trans,
                        align: 8,
                        ..small(DataType::DoubleComplex)
                    };
                    let report = test_herk(&p).unwrap();
                    assert_eq!(
                        report.okay,
                        Some(true),
                        "{:?} {:?} {:?}: error {:?}",
                        layout,
                        uplo,
                        trans,
                        report.error
                    );
                }
            }
        }
    }
}
