// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Known-answer vectors and the start-up self test.
//!
//! Vectors cover the FIPS 180-4 examples, the shared quote fixture, and the
//! lengths around the 56-byte padding split.

use crate::digest::Digest;
use crate::engine::compute;
use thiserror::Error;
use tracing::trace;

/// Shared fixture text, also used by the checksum companions.
pub const QUOTE: &[u8] = b"Truth is stranger than fiction, but it is because Fiction \
is obliged to stick to possibilities; Truth isn't.";

/// A message with its published digest.
#[derive(Debug, Clone, Copy)]
pub struct KnownAnswer {
    pub name: &'static str,
    pub message: &'static [u8],
    /// Expected digest, lowercase hex.
    pub digest: &'static str,
}

const A55: &[u8; 55] = &[b'a'; 55];
const A56: &[u8; 56] = &[b'a'; 56];
const A57: &[u8; 57] = &[b'a'; 57];
const A64: &[u8; 64] = &[b'a'; 64];

pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "empty",
        message: b"",
        digest: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    KnownAnswer {
        name: "abc",
        message: b"abc",
        digest: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    KnownAnswer {
        name: "fips-448-bit",
        message: b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        digest: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    KnownAnswer {
        name: "fips-896-bit",
        message: b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno\
ijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        digest: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    },
    KnownAnswer {
        name: "quote",
        message: QUOTE,
        digest: "910b3959f84b18f5acde2c881e5375a0a16c7245b994dbb466bb1fc3c9230998",
    },
    KnownAnswer {
        name: "a*55",
        message: A55,
        digest: "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318",
    },
    KnownAnswer {
        name: "a*56",
        message: A56,
        digest: "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a",
    },
    KnownAnswer {
        name: "a*57",
        message: A57,
        digest: "f13b2d724659eb3bf47f2dd6af1accc87b81f09f59f2b75e5c0bed6589dfe8c6",
    },
    KnownAnswer {
        name: "a*64",
        message: A64,
        digest: "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb",
    },
];

/// A vector whose computed digest differs from the published one.
#[derive(Debug, Clone, Error)]
#[error("self test '{name}' failed: expected {expected}, got {actual}")]
pub struct SelfTestFailure {
    pub name: &'static str,
    pub expected: &'static str,
    pub actual: Digest,
}

/// Hash every entry of [`KNOWN_ANSWERS`]; stop at the first mismatch.
pub fn self_test() -> Result<(), SelfTestFailure> {
    for vector in KNOWN_ANSWERS {
        let actual = compute(vector.message);
        trace!(name = vector.name, digest = %actual, "known answer");
        if actual.to_hex() != vector.digest {
            return Err(SelfTestFailure {
                name: vector.name,
                expected: vector.digest,
                actual,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_test_passes() {
        self_test().unwrap();
    }

    #[test]
    fn test_fixture_lengths() {
        assert_eq!(QUOTE.len(), 108);
        let lens: Vec<usize> = KNOWN_ANSWERS.iter().map(|v| v.message.len()).collect();
        for boundary in [55, 56, 57, 64] {
            assert!(lens.contains(&boundary), "missing {}-byte vector", boundary);
        }
    }

    #[test]
    fn test_vectors_are_valid_hex() {
        for v in KNOWN_ANSWERS {
            assert!(Digest::from_hex(v.digest).is_ok(), "{}", v.name);
        }
    }
}
