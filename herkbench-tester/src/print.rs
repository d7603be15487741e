//! Matrix dumps for `verbose >= 2`, pasteable into MATLAB or Octave.

use std::io::{self, Write};

use herkbench_core::{Float, Layout, Scalar, Zero};

/// Write `label = [ ... ];` for the logical `m x n` matrix A.
pub fn print_matrix<T: Scalar, W: Write>(
    w: &mut W,
    label: &str,
    layout: Layout,
    m: usize,
    n: usize,
    a: &[T],
    lda: usize,
) -> io::Result<()> {
    writeln!(w, "{} = [", label)?;
    for i in 0..m {
        for j in 0..n {
            let v = a[layout.index(i, j, lda)];
            if T::IS_COMPLEX {
                let im = v.imag();
                let sign = if im < T::Real::zero() { '-' } else { '+' };
                write!(w, " {:10.4e} {} {:9.4e}i", v.real(), sign, im.abs())?;
            } else {
                write!(w, " {:10.4e}", v.real())?;
            }
        }
        writeln!(w)?;
    }
    writeln!(w, "];")
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex32;

    #[test]
    fn test_print_real_row_major() {
        let a = vec![1.0f64, 2.0, 3.0, 4.0];
        let mut out = Vec::new();
        print_matrix(&mut out, "A", Layout::RowMajor, 2, 2, &a, 2).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "A = [");
        assert!(lines[1].contains("1.0000e0") && lines[1].contains("2.0000e0"), "{}", lines[1]);
        assert_eq!(lines[3], "];");
    }

    #[test]
    fn test_print_complex_sign() {
        let a = vec![Complex32::new(1.0, -0.5)];
        let mut out = Vec::new();
        print_matrix(&mut out, "C", Layout::ColMajor, 1, 1, &a, 1).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("- 5.0000e-1i"), "{}", text);
    }

    #[test]
    fn test_print_empty() {
        let a: Vec<f64> = vec![];
        let mut out = Vec::new();
        print_matrix(&mut out, "A", Layout::ColMajor, 0, 3, &a, 0).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "A = [\n];\n");
    }
}
