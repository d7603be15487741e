//! CBLAS-style layout, triangle and transpose enumerations.
//!
//! These are the harness-side names. They deliberately carry no CBLAS
//! integer discriminants: a library that wants its own constants
//! (see `herkbench_lapack::reference`) goes through an explicit mapping
//! table instead of an `as` cast.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseEnumError;

/// Memory layout for matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Row-major (C-style): elements in a row are contiguous.
    RowMajor,
    /// Column-major (Fortran-style): elements in a column are contiguous.
    #[default]
    ColMajor,
}

/// Transpose operation applied to A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transpose {
    /// No transpose.
    #[default]
    NoTrans,
    /// Transpose.
    Trans,
    /// Conjugate transpose (for complex types).
    ConjTrans,
}

/// Triangle of a symmetric/Hermitian matrix that is stored and updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Uplo {
    #[default]
    Upper,
    Lower,
}

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::RowMajor, Layout::ColMajor];

    /// Linear index into a flat array for element (i, j).
    #[inline(always)]
    pub fn index(self, i: usize, j: usize, ld: usize) -> usize {
        match self {
            Layout::RowMajor => i * ld + j,
            Layout::ColMajor => j * ld + i,
        }
    }

    /// Physical (rows, cols) of a logical `rows x cols` matrix: the extent
    /// the leading dimension has to cover comes first.
    #[inline]
    pub fn physical(self, rows: usize, cols: usize) -> (usize, usize) {
        match self {
            Layout::RowMajor => (cols, rows),
            Layout::ColMajor => (rows, cols),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Layout::RowMajor => 'r',
            Layout::ColMajor => 'c',
        }
    }
}

impl Transpose {
    pub const ALL: [Transpose; 3] = [Transpose::NoTrans, Transpose::Trans, Transpose::ConjTrans];

    pub fn to_char(self) -> char {
        match self {
            Transpose::NoTrans => 'n',
            Transpose::Trans => 't',
            Transpose::ConjTrans => 'c',
        }
    }
}

impl Uplo {
    pub const ALL: [Uplo; 2] = [Uplo::Upper, Uplo::Lower];

    /// Column range `[start, end)` of row `i` that lies in this triangle of an
    /// `n x n` matrix (diagonal included).
    #[inline(always)]
    pub fn row_span(self, i: usize, n: usize) -> (usize, usize) {
        match self {
            Uplo::Upper => (i, n),
            Uplo::Lower => (0, i + 1),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Uplo::Upper => 'u',
            Uplo::Lower => 'l',
        }
    }
}

impl FromStr for Layout {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "row" | "rowmajor" => Ok(Layout::RowMajor),
            "c" | "col" | "colmajor" => Ok(Layout::ColMajor),
            _ => Err(ParseEnumError::new("layout", s)),
        }
    }
}

impl FromStr for Transpose {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "notrans" => Ok(Transpose::NoTrans),
            "t" | "trans" => Ok(Transpose::Trans),
            "c" | "conjtrans" => Ok(Transpose::ConjTrans),
            _ => Err(ParseEnumError::new("trans", s)),
        }
    }
}

impl FromStr for Uplo {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u" | "upper" => Ok(Uplo::Upper),
            "l" | "lower" => Ok(Uplo::Lower),
            _ => Err(ParseEnumError::new("uplo", s)),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Transpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Uplo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
