// Routines match LAPACK/CBLAS signatures; many parameters are inherent to the API.
#![allow(clippy::too_many_arguments, clippy::needless_range_loop)]

//! # Herkbench LAPACK
//!
//! The trusted side of the harness, in LAPACK/CBLAS vocabulary:
//!
//! - **Reference kernel**: `cblas_herk`, taking CBLAS integer constants, plus
//!   the total mapping from harness enums to those constants.
//! - **Norms**: Frobenius norms of a general matrix and of a stored triangle.
//! - **Copy**: `lacpy` for the whole matrix or one triangle.
//!
//! Build with `--features mkl` to route the reference kernel through Intel MKL.

pub mod lacpy;
pub mod norms;
pub mod reference;

pub use lacpy::{lacpy, MatrixPart};
pub use norms::{lange_fro, lansy_fro};
pub use reference::{
    cblas_herk, cblas_layout_const, cblas_trans_const, cblas_uplo_const, CblasLayout,
    CblasTranspose, CblasUplo, UnknownConstant,
};
