// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The 32-byte SHA-256 output and its text encodings.

use crate::engine::DIGEST_SIZE;
use crate::error::{HashError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fmt;
use std::str::FromStr;

const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";
const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// A SHA-256 digest.
///
/// Always exactly [`DIGEST_SIZE`] bytes, whatever the input length.
/// `Display` and `LowerHex` render the conventional lowercase hex form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.0
    }

    /// Lowercase hex, 64 characters.
    pub fn to_hex(&self) -> String {
        encode_hex(&self.0, HEX_LOWER)
    }

    /// Parse 64 hex characters, either case. Surrounding whitespace is ignored.
    pub fn from_hex(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.len() != DIGEST_SIZE * 2 {
            return Err(HashError::InvalidLength {
                expected: DIGEST_SIZE * 2,
                actual: text.len(),
            });
        }

        let mut bytes = [0u8; DIGEST_SIZE];
        for (i, pair) in text.as_bytes().chunks_exact(2).enumerate() {
            let hi = nibble(pair[0]).ok_or(HashError::InvalidHex { position: i * 2 })?;
            let lo = nibble(pair[1]).ok_or(HashError::InvalidHex { position: i * 2 + 1 })?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }

    /// Standard base64 with padding (44 characters).
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }

    pub fn from_base64(text: &str) -> Result<Self> {
        let decoded = STANDARD.decode(text.trim())?;
        Self::try_from(decoded.as_slice())
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn encode_hex(bytes: &[u8], alphabet: &[u8; 16]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push(alphabet[usize::from(b >> 4)] as char);
        out.push(alphabet[usize::from(b & 0x0f)] as char);
    }
    out
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = HashError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; DIGEST_SIZE] =
            bytes.try_into().map_err(|_| HashError::InvalidLength {
                expected: DIGEST_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_hex(&self.0, HEX_UPPER))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digest {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC_HEX: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
    const ABC_B64: &str = "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0=";

    #[test]
    fn test_hex_parse_and_format() {
        let d = Digest::from_hex(ABC_HEX).unwrap();
        assert_eq!(d.as_bytes()[0], 0xba);
        assert_eq!(d.as_bytes()[31], 0xad);
        assert_eq!(d.to_string(), ABC_HEX);
        assert_eq!(format!("{:x}", d), ABC_HEX);
        assert_eq!(format!("{:X}", d), ABC_HEX.to_uppercase());
    }

    #[test]
    fn test_hex_accepts_uppercase_and_whitespace() {
        let padded = format!("  {}\n", ABC_HEX.to_uppercase());
        let d: Digest = padded.parse().unwrap();
        assert_eq!(d.to_hex(), ABC_HEX);
    }

    #[test]
    fn test_hex_rejects_bad_input() {
        assert!(matches!(
            Digest::from_hex("abcd"),
            Err(HashError::InvalidLength { expected: 64, actual: 4 })
        ));

        let mut bad = ABC_HEX.to_string();
        bad.replace_range(10..11, "g");
        assert!(matches!(
            Digest::from_hex(&bad),
            Err(HashError::InvalidHex { position: 10 })
        ));
    }

    #[test]
    fn test_base64() {
        let d = Digest::from_hex(ABC_HEX).unwrap();
        assert_eq!(d.to_base64(), ABC_B64);
        assert_eq!(Digest::from_base64(ABC_B64).unwrap(), d);
        assert!(matches!(
            Digest::from_base64("AAAA"),
            Err(HashError::InvalidLength { expected: 32, actual: 3 })
        ));
        assert!(matches!(
            Digest::from_base64("not base64!"),
            Err(HashError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_debug_and_conversions() {
        let d = Digest::from([0u8; DIGEST_SIZE]);
        assert_eq!(format!("{:?}", d), format!("Digest({})", "0".repeat(64)));
        assert_eq!(<[u8; DIGEST_SIZE]>::from(d), [0u8; DIGEST_SIZE]);
        assert!(Digest::try_from(&[0u8; 31][..]).is_err());
        assert_eq!(d.as_ref().len(), DIGEST_SIZE);
    }
}
