//! `?lacpy`: copy all or one triangle of a matrix.

use herkbench_core::layout::Layout;
use herkbench_core::Scalar;

/// Which part of the matrix to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixPart {
    General,
    Upper,
    Lower,
}

/// Copy the selected part of the `m x n` matrix A into B.
///
/// Elements outside the part (and padding beyond `m`) are left unchanged in B.
pub fn lacpy<T: Scalar>(
    part: MatrixPart,
    layout: Layout,
    m: usize,
    n: usize,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) {
    for j in 0..n {
        let rows = match part {
            MatrixPart::General => 0..m,
            MatrixPart::Upper => 0..(j + 1).min(m),
            MatrixPart::Lower => j.min(m)..m,
        };
        for i in rows {
            b[layout.index(i, j, ldb)] = a[layout.index(i, j, lda)];
        }
    }
}
