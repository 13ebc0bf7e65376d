// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Whole-message input helpers.
//!
//! The engine hashes a complete in-memory message, so these helpers read the
//! entire input first and then make a single [`compute`] call. The size
//! limit bounds that buffer.

use crate::digest::Digest;
use crate::engine::compute;
use crate::error::{HashError, Result};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace};

/// Default in-memory input limit (1 GiB).
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 1 << 30;

/// Bounds on how much input is buffered before hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashLimits {
    /// Largest input accepted, in bytes.
    pub max_input_bytes: u64,
}

impl Default for HashLimits {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl HashLimits {
    pub fn new(max_input_bytes: u64) -> Self {
        Self { max_input_bytes }
    }

    /// No limit beyond available memory (and the 2^61-byte engine precondition).
    pub fn unlimited() -> Self {
        Self {
            max_input_bytes: u64::MAX,
        }
    }

    fn check(&self, size: u64) -> Result<()> {
        if size > self.max_input_bytes {
            return Err(HashError::TooLarge {
                size,
                limit: self.max_input_bytes,
            });
        }
        Ok(())
    }
}

/// A digest together with the number of bytes it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashedInput {
    pub digest: Digest,
    pub size: u64,
}

/// Read the file at `path` completely, enforcing `limits`.
///
/// Devices, FIFOs and procfs entries report a length of zero, so the
/// metadata check is only an early rejection; the read itself stops one
/// byte past the limit.
pub fn read_file<P: AsRef<Path>>(path: P, limits: &HashLimits) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| HashError::io(path, e))?;
    limits.check(metadata.len())?;

    let file = File::open(path).map_err(|e| HashError::io(path, e))?;
    read_bounded(file, path, limits)
}

/// Read `reader` to the end, enforcing `limits`.
///
/// `name` only labels I/O errors (for example `"-"` for stdin).
pub fn read_all<R: Read>(reader: R, name: &str, limits: &HashLimits) -> Result<Vec<u8>> {
    read_bounded(reader, Path::new(name), limits)
}

fn read_bounded<R: Read>(reader: R, name: &Path, limits: &HashLimits) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader
        .take(limits.max_input_bytes.saturating_add(1))
        .read_to_end(&mut data)
        .map_err(|e| HashError::io(name, e))?;
    limits.check(data.len() as u64)?;
    Ok(data)
}

/// Read the file at `path` completely and hash it, reporting its size.
pub fn hash_file_sized<P: AsRef<Path>>(path: P, limits: &HashLimits) -> Result<HashedInput> {
    let path = path.as_ref();
    let data = read_file(path, limits)?;
    debug!(path = %path.display(), size = data.len(), "hashing file");
    Ok(HashedInput {
        digest: compute(&data),
        size: data.len() as u64,
    })
}

/// Read the file at `path` completely and hash it.
pub fn hash_file<P: AsRef<Path>>(path: P, limits: &HashLimits) -> Result<Digest> {
    hash_file_sized(path, limits).map(|hashed| hashed.digest)
}

/// Read `reader` to the end and hash it, reporting the byte count.
pub fn hash_reader_sized<R: Read>(
    reader: R,
    name: &str,
    limits: &HashLimits,
) -> Result<HashedInput> {
    let data = read_all(reader, name, limits)?;
    trace!(name, size = data.len(), "hashing reader");
    Ok(HashedInput {
        digest: compute(&data),
        size: data.len() as u64,
    })
}

/// Read `reader` to the end and hash everything it produced.
pub fn hash_reader<R: Read>(reader: R, name: &str, limits: &HashLimits) -> Result<Digest> {
    hash_reader_sized(reader, name, limits).map(|hashed| hashed.digest)
}
