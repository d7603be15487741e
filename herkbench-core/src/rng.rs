//! Deterministic matrix generator with an explicit LAPACK-style seed.
//!
//! `Iseed` is the classic four-limb seed of `xLARNV`: four integers in
//! `0..=4095`, the last one odd, forming a 48-bit state for the
//! multiplicative congruential generator `x <- a * x mod 2^48`.
//! The seed is an owned value threaded through [`larnv`]; nothing lives in
//! ambient state, so each test case reproduces on its own.
//!
//! Generating A and then C from the *same* evolving seed yields a pair that
//! is decorrelated yet reproducible as a pair.

use serde::{Deserialize, Serialize};

use crate::error::SeedError;
use crate::scalar::Scalar;

const LIMB_BITS: u32 = 12;
const LIMB_MASK: u64 = (1 << LIMB_BITS) - 1;
const STATE_MASK: u64 = (1 << 48) - 1;

/// Multiplier 33952834046453, limbs (494, 322, 2508, 2549).
const MULTIPLIER: u64 = (494 << 36) | (322 << 24) | (2508 << 12) | 2549;

/// Four-limb 48-bit generator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Iseed([i32; 4]);

impl Iseed {
    /// Validate and wrap a seed.
    pub fn new(seed: [i32; 4]) -> Result<Self, SeedError> {
        for (index, &value) in seed.iter().enumerate() {
            if !(0..=LIMB_MASK as i32).contains(&value) {
                return Err(SeedError::OutOfRange { index, value });
            }
        }
        if seed[3] % 2 == 0 {
            return Err(SeedError::EvenLast { value: seed[3] });
        }
        Ok(Self(seed))
    }

    /// Current limbs; feeding them back into [`Iseed::new`] resumes the stream.
    pub fn as_array(&self) -> [i32; 4] {
        self.0
    }

    fn state(&self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |acc, &limb| (acc << LIMB_BITS) | limb as u64)
    }

    fn set_state(&mut self, x: u64) {
        for (i, limb) in self.0.iter_mut().enumerate() {
            let shift = LIMB_BITS * (3 - i as u32);
            *limb = ((x >> shift) & LIMB_MASK) as i32;
        }
    }

    /// Uniform sample in the open interval (0, 1).
    ///
    /// The state stays odd, so it never reaches zero.
    #[inline]
    pub fn next_uniform(&mut self) -> f64 {
        let x = self.state().wrapping_mul(MULTIPLIER) & STATE_MASK;
        self.set_state(x);
        x as f64 / (1u64 << 48) as f64
    }

    /// Standard normal sample via Box-Muller.
    pub fn next_normal(&mut self) -> f64 {
        let u1 = self.next_uniform();
        let u2 = self.next_uniform();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }
}

impl Default for Iseed {
    fn default() -> Self {
        Self([0, 0, 0, 1])
    }
}

/// Distribution selector (`idist`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Idist {
    /// Uniform (0, 1).
    #[default]
    Uniform01,
    /// Uniform (-1, 1).
    UniformSymmetric,
    /// Standard normal.
    Normal,
}

impl Idist {
    fn sample(self, seed: &mut Iseed) -> f64 {
        match self {
            Idist::Uniform01 => seed.next_uniform(),
            Idist::UniformSymmetric => 2.0 * seed.next_uniform() - 1.0,
            Idist::Normal => seed.next_normal(),
        }
    }
}

impl TryFrom<i64> for Idist {
    type Error = SeedError;

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Idist::Uniform01),
            2 => Ok(Idist::UniformSymmetric),
            3 => Ok(Idist::Normal),
            other => Err(SeedError::UnknownDistribution(other)),
        }
    }
}

impl From<Idist> for i64 {
    fn from(d: Idist) -> i64 {
        match d {
            Idist::Uniform01 => 1,
            Idist::UniformSymmetric => 2,
            Idist::Normal => 3,
        }
    }
}

/// Fill `x` with pseudo-random values, advancing `seed`.
///
/// Complex elements draw the real part, then the imaginary part.
pub fn larnv<T: Scalar>(idist: Idist, seed: &mut Iseed, x: &mut [T]) {
    for v in x.iter_mut() {
        let re = idist.sample(seed);
        let im = if T::IS_COMPLEX { idist.sample(seed) } else { 0.0 };
        *v = T::from_parts(re, im);
    }
}
