// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types shared by every computation in the crate.
//!
//! "No solution" is not an error: searches that can legitimately come up
//! empty return `Option` instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EulerError {
    /// A caller-supplied parameter is outside the domain of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A digit source produced something other than 0-9.
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit { found: char, position: usize },

    /// An intermediate value no longer fits in a u64.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),
}

pub type EulerResult<T> = Result<T, EulerError>;

impl EulerError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        EulerError::InvalidArgument(message.into())
    }
}
