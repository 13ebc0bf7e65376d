// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! ISF SHA-256
//!
//! A portable SHA-256 (FIPS 180-4) engine:
//! - One-shot [`compute`] over a complete in-memory message
//! - Explicit big-endian packing, identical output on every platform
//! - No allocation, no global mutable state
//!
//! # Quick Start
//!
//! ```
//! use isf_sha256::{compute, Digest};
//!
//! let digest = compute(b"abc");
//! assert_eq!(
//!     digest,
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//!         .parse::<Digest>()
//!         .unwrap()
//! );
//! ```
//!
//! Files and readers are hashed whole via [`hash_file`] / [`hash_reader`];
//! there is no incremental `update`/`finalize` API.
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `serde` | `Digest` (de)serializes as lowercase hex |

pub mod digest;
pub mod engine;
pub mod error;
pub mod source;
pub mod vectors;

pub use digest::Digest;
pub use engine::{compute, compute_into, BLOCK_SIZE, DIGEST_SIZE};
pub use error::{HashError, Result};
pub use source::{
    hash_file, hash_file_sized, hash_reader, hash_reader_sized, read_all, read_file, HashLimits,
    HashedInput, DEFAULT_MAX_INPUT_BYTES,
};
pub use vectors::{self_test, KnownAnswer, SelfTestFailure, KNOWN_ANSWERS, QUOTE};
