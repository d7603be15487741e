//! Test configuration for one herk case.
//!
//! `Params` is plain data: the CLI builds one per point of its cartesian
//! product, and the library never reads global state.

use std::fmt;
use std::str::FromStr;

use herkbench_core::{Idist, Iseed, Layout, ParseEnumError, Transpose, Uplo};
use serde::{Deserialize, Serialize};

use crate::error::{HerkError, Result};

/// Largest accepted cache flush, in MiB.
pub const MAX_CACHE_MIB: usize = 4096;

/// Numeric type class of A and C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataType {
    /// Selectable, but herk has no integer instantiation.
    Integer,
    Single,
    Double,
    SingleComplex,
    DoubleComplex,
}

impl DataType {
    pub const ALL: [DataType; 5] = [
        DataType::Integer,
        DataType::Single,
        DataType::Double,
        DataType::SingleComplex,
        DataType::DoubleComplex,
    ];

    /// BLAS prefix letter.
    pub fn to_char(self) -> char {
        match self {
            DataType::Integer => 'i',
            DataType::Single => 's',
            DataType::Double => 'd',
            DataType::SingleComplex => 'c',
            DataType::DoubleComplex => 'z',
        }
    }
}

impl FromStr for DataType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "i" | "int" | "integer" => Ok(DataType::Integer),
            "s" | "single" | "float" => Ok(DataType::Single),
            "d" | "double" => Ok(DataType::Double),
            "c" | "single-complex" | "complex-float" => Ok(DataType::SingleComplex),
            "z" | "double-complex" | "complex-double" => Ok(DataType::DoubleComplex),
            _ => Err(ParseEnumError::new("data type", s)),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Problem dimensions: order `n` of C and reduction depth `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dim {
    pub n: usize,
    pub k: usize,
}

impl Dim {
    pub fn new(n: usize, k: usize) -> Self {
        Self { n, k }
    }
}

/// Accepts `NxK` or a single `N` (k = n).
impl FromStr for Dim {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parse = |v: &str| {
            v.trim()
                .parse::<usize>()
                .map_err(|_| ParseEnumError::new("dimension", s))
        };
        match s.split_once(['x', 'X']) {
            Some((n, k)) => Ok(Dim::new(parse(n)?, parse(k)?)),
            None => {
                let n = parse(s)?;
                Ok(Dim::new(n, n))
            }
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.n, self.k)
    }
}

/// Full configuration of one test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    pub datatype: DataType,
    pub layout: Layout,
    pub uplo: Uplo,
    pub trans: Transpose,
    pub dim: Dim,
    /// Real even for complex data: the update must stay Hermitian.
    pub alpha: f64,
    pub beta: f64,
    /// Leading dimensions are rounded up to a multiple of this.
    pub align: usize,
    /// 0 = silent, 1 = shape/norm summary, 2 = full matrix dump.
    pub verbose: u8,
    /// Cache flush size in MiB before each timed call; 0 disables.
    pub cache: usize,
    /// Time the reference kernel.
    #[serde(rename = "ref")]
    pub run_ref: bool,
    /// Score the kernel under test against the reference.
    pub check: bool,
    /// Error threshold as a multiple of the unit roundoff.
    pub tol: f64,
    pub seed: [i32; 4],
    pub idist: Idist,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            datatype: DataType::Double,
            layout: Layout::ColMajor,
            uplo: Uplo::Lower,
            trans: Transpose::NoTrans,
            dim: Dim::new(100, 100),
            alpha: std::f64::consts::PI,
            beta: std::f64::consts::E,
            align: 1,
            verbose: 0,
            cache: 20,
            run_ref: false,
            check: true,
            tol: 3.0,
            seed: Iseed::default().as_array(),
            idist: Idist::Uniform01,
        }
    }
}

impl Params {
    /// Reject configurations no kernel call could be built from.
    pub fn validate(&self) -> Result<()> {
        if self.align == 0 {
            return Err(HerkError::config("align must be at least 1"));
        }
        if self.cache > MAX_CACHE_MIB {
            return Err(HerkError::config(format!(
                "cache flush of {} MiB exceeds the {} MiB limit",
                self.cache, MAX_CACHE_MIB
            )));
        }
        if !(self.tol.is_finite() && self.tol >= 0.0) {
            return Err(HerkError::config(format!(
                "tol must be finite and non-negative, got {}",
                self.tol
            )));
        }
        if !self.alpha.is_finite() || !self.beta.is_finite() {
            return Err(HerkError::config(format!(
                "alpha and beta must be finite, got alpha = {}, beta = {}",
                self.alpha, self.beta
            )));
        }
        Iseed::new(self.seed)?;
        Ok(())
    }

    /// Whether the reference kernel runs at all.
    pub fn runs_reference(&self) -> bool {
        self.run_ref || self.check
    }
}

/// Parse alpha or beta.
///
/// Accepts `re`, `re+imi`, `imi` and `(re,im)`; any non-zero imaginary part
/// is rejected because herk scales by real numbers only.
pub fn parse_real_scalar(s: &str) -> Result<f64> {
    let t = s.trim();
    let number = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|_| HerkError::config(format!("'{}' is not a number", s)))
    };
    let (re, im) = if let Some(inner) = t.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        let (r, i) = inner
            .split_once(',')
            .ok_or_else(|| HerkError::config(format!("'{}' is not a number", s)))?;
        (number(r)?, number(i)?)
    } else if let Some(body) = t.strip_suffix(['i', 'j']) {
        match split_imaginary(body) {
            Some(at) => (number(&body[..at])?, number(&body[at..])?),
            None => (0.0, number(body)?),
        }
    } else {
        (number(t)?, 0.0)
    };
    if im != 0.0 {
        return Err(HerkError::config(format!(
            "'{}': alpha and beta must be real, imaginary part {} is not allowed",
            s, im
        )));
    }
    Ok(re)
}

/// Position of the sign that starts the imaginary part of `re+im`.
fn split_imaginary(body: &str) -> Option<usize> {
    let b = body.as_bytes();
    (1..b.len())
        .rev()
        .find(|&i| (b[i] == b'+' || b[i] == b'-') && !matches!(b[i - 1], b'e' | b'E'))
}

/// Parse a LAPACK seed `a,b,c,d`.
pub fn parse_seed(s: &str) -> Result<[i32; 4]> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 4 {
        return Err(HerkError::config(format!(
            "seed '{}' must have exactly 4 comma-separated entries",
            s
        )));
    }
    let mut seed = [0i32; 4];
    for (slot, part) in seed.iter_mut().zip(parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| HerkError::config(format!("seed entry '{}' is not an integer", part)))?;
    }
    Iseed::new(seed)?;
    Ok(seed)
}

/// Parse the distribution selector 1, 2 or 3.
pub fn parse_idist(s: &str) -> Result<Idist> {
    let v: i64 = s
        .trim()
        .parse()
        .map_err(|_| HerkError::config(format!("idist '{}' is not an integer", s)))?;
    Ok(Idist::try_from(v)?)
}
