//! Raw FFI declarations for the Intel MKL CBLAS rank-k updates.
//!
//! These map 1:1 to `mkl_cblas.h`. All functions are unsafe; the safe entry
//! point is `herkbench_lapack::reference::cblas_herk`, which checks the
//! arguments and converts the harness enums through its mapping table first.

#![allow(non_snake_case)]

use std::os::raw::{c_double, c_float, c_int, c_void};

#[link(name = "mkl_rt")]
extern "C" {
    pub fn cblas_ssyrk(
        layout: c_int,
        uplo: c_int,
        trans: c_int,
        n: c_int,
        k: c_int,
        alpha: c_float,
        a: *const c_float,
        lda: c_int,
        beta: c_float,
        c: *mut c_float,
        ldc: c_int,
    );
    pub fn cblas_dsyrk(
        layout: c_int,
        uplo: c_int,
        trans: c_int,
        n: c_int,
        k: c_int,
        alpha: c_double,
        a: *const c_double,
        lda: c_int,
        beta: c_double,
        c: *mut c_double,
        ldc: c_int,
    );

    // alpha and beta are real for the Hermitian update.
    pub fn cblas_cherk(
        layout: c_int,
        uplo: c_int,
        trans: c_int,
        n: c_int,
        k: c_int,
        alpha: c_float,
        a: *const c_void,
        lda: c_int,
        beta: c_float,
        c: *mut c_void,
        ldc: c_int,
    );
    pub fn cblas_zherk(
        layout: c_int,
        uplo: c_int,
        trans: c_int,
        n: c_int,
        k: c_int,
        alpha: c_double,
        a: *const c_void,
        lda: c_int,
        beta: c_double,
        c: *mut c_void,
        ldc: c_int,
    );
}
