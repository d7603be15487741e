//! Harness errors.
//!
//! A numerical mismatch is not an error: it is reported as
//! `okay == Some(false)` next to the error value. Everything here aborts
//! the one test case it occurs in.

use std::fmt;

use herkbench_core::{AllocError, BlasError, SeedError};
use serde::Serialize;
use thiserror::Error;

use crate::params::DataType;

/// Which of the two kernels a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelRole {
    Test,
    Reference,
}

impl fmt::Display for KernelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelRole::Test => f.write_str("kernel under test"),
            KernelRole::Reference => f.write_str("reference kernel"),
        }
    }
}

#[derive(Debug, Error)]
pub enum HerkError {
    #[error("herk does not support data type '{0}'")]
    UnsupportedDataType(DataType),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid seed: {0}")]
    Seed(#[from] SeedError),

    #[error("allocation failed: {0}")]
    Alloc(#[from] AllocError),

    #[error("{role} rejected its arguments: {source}")]
    Kernel {
        role: KernelRole,
        #[source]
        source: BlasError,
    },

    #[error("writing verbose output: {0}")]
    Io(#[from] std::io::Error),
}

impl HerkError {
    pub fn config(msg: impl Into<String>) -> Self {
        HerkError::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, HerkError>;
