// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Errors for the fallible helpers around the engine.
//!
//! [`compute`](crate::compute) itself cannot fail; only reading inputs and
//! parsing digest text can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by digest parsing and input helpers.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    #[error("expected {expected} digest characters or bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid hex character at position {position}")]
    InvalidHex { position: usize },

    #[error("invalid base64 digest: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

impl HashError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, HashError>;
