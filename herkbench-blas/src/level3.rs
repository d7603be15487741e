//! BLAS Level 3: Hermitian / symmetric rank-k update.
//!
//! C := alpha * op(A) * op(A)^H + beta * C, one triangle of C only.
//!
//! The n "row vectors" of op(A) are either read in place (when they are
//! contiguous in A and need no conjugation) or packed once into a
//! contiguous n x k panel. Each output element is then a single `dotc`
//! between two panel rows, and rows of C are distributed over threads.

use herkbench_core::layout::{Layout, Transpose, Uplo};
use herkbench_core::parallel::parallel_for_chunks;
use herkbench_core::{BlasError, One, Scalar, Zero};

use crate::level1::{dotc, gather, sum_sq};

const ROUTINE: &str = "herk";

/// Wrapper to send a raw mutable pointer across thread boundaries.
/// Safety: The caller must ensure non-overlapping access between threads.
#[derive(Clone, Copy)]
struct SendMutPtr<T> {
    ptr: *mut T,
    len: usize,
}
unsafe impl<T> Send for SendMutPtr<T> {}
unsafe impl<T> Sync for SendMutPtr<T> {}

impl<T: Copy> SendMutPtr<T> {
    fn new(slice: &mut [T]) -> Self {
        Self {
            ptr: slice.as_mut_ptr(),
            len: slice.len(),
        }
    }

    /// Safety: no other thread touches `idx` concurrently.
    #[inline(always)]
    unsafe fn read(&self, idx: usize) -> T {
        debug_assert!(idx < self.len);
        *self.ptr.add(idx)
    }

    /// Safety: no other thread touches `idx` concurrently.
    #[inline(always)]
    unsafe fn write(&self, idx: usize, v: T) {
        debug_assert!(idx < self.len);
        *self.ptr.add(idx) = v;
    }
}

/// Elements a `rows x cols` stored matrix with leading dimension `ld` spans.
#[inline]
fn span(rows: usize, cols: usize, ld: usize) -> usize {
    if rows == 0 || cols == 0 {
        0
    } else {
        ld.saturating_mul(cols - 1).saturating_add(rows)
    }
}

/// Hermitian (complex) or symmetric (real) rank-k update.
///
/// `trans = NoTrans` computes `alpha * A * A^H`, with A logically n x k;
/// `ConjTrans` computes `alpha * A^H * A`, with A logically k x n. Real
/// types accept `Trans` as a synonym of `ConjTrans`; complex types reject it.
///
/// Only the `uplo` triangle of C is referenced. The imaginary parts of the
/// diagonal are set to zero on output unless the call is a quick return.
#[allow(clippy::too_many_arguments)]
pub fn herk<T: Scalar>(
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
    if T::IS_COMPLEX && trans == Transpose::Trans {
        return Err(BlasError::invalid(
            ROUTINE,
            3,
            "Trans is not a Hermitian operation; use NoTrans or ConjTrans",
        ));
    }
    let (a_rows, a_cols) = match trans {
        Transpose::NoTrans => (n, k),
        _ => (k, n),
    };
    let (a_phys_rows, a_phys_cols) = layout.physical(a_rows, a_cols);
    if lda < a_phys_rows {
        return Err(BlasError::invalid(
            ROUTINE,
            8,
            format!("lda = {} < {}", lda, a_phys_rows),
        ));
    }
    if ldc < n {
        return Err(BlasError::invalid(
            ROUTINE,
            11,
            format!("ldc = {} < n = {}", ldc, n),
        ));
    }
    let need_a = span(a_phys_rows, a_phys_cols, lda);
    if a.len() < need_a {
        return Err(BlasError::invalid(
            ROUTINE,
            7,
            format!("A holds {} elements, needs {}", a.len(), need_a),
        ));
    }
    let need_c = span(n, n, ldc);
    if c.len() < need_c {
        return Err(BlasError::invalid(
            ROUTINE,
            10,
            format!("C holds {} elements, needs {}", c.len(), need_c),
        ));
    }

    let zero = T::Real::zero();
    let one = T::Real::one();
    if n == 0 || ((alpha == zero || k == 0) && beta == one) {
        return Ok(());
    }

    if alpha == zero || k == 0 {
        scale_triangle(layout, uplo, n, beta, c, ldc);
        return Ok(());
    }

    // Vector i of op(A) is contiguous in A for (RowMajor, NoTrans) and
    // (ColMajor, ConjTrans); otherwise element p sits at a[p * lda + i].
    let in_place = matches!(
        (layout, trans),
        (Layout::RowMajor, Transpose::NoTrans)
            | (Layout::ColMajor, Transpose::Trans | Transpose::ConjTrans)
    );
    // op(A) row i is conj(A(:, i)) for the transposed forms.
    let conj_rows = T::IS_COMPLEX && trans != Transpose::NoTrans;

    let packed: Vec<T>;
    // Contiguous but conjugated rows are read in place with the dot
    // arguments swapped: sum conj(a_i) a_j = dotc(a_j, a_i).
    let (panel, ldp): (&[T], usize) = if in_place {
        (a, lda)
    } else {
        let mut buf = vec![T::zero(); n * k];
        for i in 0..n {
            gather(&a[i..], k, lda, conj_rows, &mut buf[i * k..(i + 1) * k]);
        }
        packed = buf;
        (&packed, k)
    };
    let swap_dot = in_place && conj_rows;

    log::trace!(
        "{}herk n={} k={} in_place={} conj_rows={}",
        T::PREFIX,
        n,
        k,
        in_place,
        conj_rows
    );

    let out = SendMutPtr::new(c);
    let work = n.saturating_mul(n).saturating_mul(k) / 2;
    parallel_for_chunks(0, n, work, move |start, end| {
        for i in start..end {
            let v_i = &panel[i * ldp..i * ldp + k];
            let (j_start, j_end) = uplo.row_span(i, n);
            for j in j_start..j_end {
                let idx = layout.index(i, j, ldc);
                if i == j {
                    let d = alpha * sum_sq(v_i);
                    let val = if beta == zero {
                        d
                    } else {
                        d + beta * unsafe { out.read(idx) }.real()
                    };
                    unsafe { out.write(idx, T::from_real(val)) };
                    continue;
                }
                let v_j = &panel[j * ldp..j * ldp + k];
                let dot = if swap_dot { dotc(v_j, v_i) } else { dotc(v_i, v_j) };
                let mut val = dot.mul_real(alpha);
                if beta != zero {
                    val += unsafe { out.read(idx) }.mul_real(beta);
                }
                unsafe { out.write(idx, val) };
            }
        }
    });

    Ok(())
}

/// C := beta * C on the triangle, diagonal forced real.
fn scale_triangle<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    beta: T::Real,
    c: &mut [T],
    ldc: usize,
) {
    let zero = T::Real::zero();
    for i in 0..n {
        let (j_start, j_end) = uplo.row_span(i, n);
        for j in j_start..j_end {
            let idx = layout.index(i, j, ldc);
            let v = if beta == zero {
                T::zero()
            } else {
                c[idx].mul_real(beta)
            };
            c[idx] = if i == j { T::from_real(v.real()) } else { v };
        }
    }
}
