// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Checksum manifest parsing.
//!
//! Accepts both layouts the tool writes:
//! - GNU: `<digest>  <name>` or `<digest> *<name>`
//! - BSD: `SHA256 (<name>) = <digest>`
//!
//! Digests may be hex (64 chars) or base64 (44 chars). Blank lines and
//! lines starting with `#` are skipped. A leading `\` marks a line whose
//! name is escaped (`\\`, `\n`, `\r`).

use isf_sha256::{Digest, HashError};
use thiserror::Error;

const BASE64_DIGEST_LEN: usize = 44;

/// One line of a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub expected: Digest,
    pub path: String,
}

/// A line that could not be parsed.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("line {line}: unrecognized checksum line")]
    Unrecognized { line: usize },

    #[error("line {line}: {source}")]
    BadDigest {
        line: usize,
        #[source]
        source: HashError,
    },
}

/// Parse result: good entries plus every malformed line.
#[derive(Debug, Default)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
    pub errors: Vec<ManifestError>,
}

pub fn parse(text: &str) -> Manifest {
    let mut manifest = Manifest::default();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let number = idx + 1;
        let (escaped, body) = match line.strip_prefix('\\') {
            Some(rest) => (true, rest),
            None => (false, line),
        };
        let split = split_bsd(body).or_else(|| split_gnu(body));
        let Some((digest, path)) = split.and_then(|(digest, path)| {
            let path = if escaped {
                unescape_name(path)?
            } else {
                path.to_string()
            };
            Some((digest, path))
        }) else {
            manifest.errors.push(ManifestError::Unrecognized { line: number });
            continue;
        };

        match parse_digest(digest) {
            Ok(expected) => manifest.entries.push(ManifestEntry { expected, path }),
            Err(source) => manifest.errors.push(ManifestError::BadDigest {
                line: number,
                source,
            }),
        }
    }
    manifest
}

/// Hex or base64, chosen by length.
pub fn parse_digest(text: &str) -> Result<Digest, HashError> {
    let text = text.trim();
    if text.len() == BASE64_DIGEST_LEN {
        Digest::from_base64(text)
    } else {
        Digest::from_hex(text)
    }
}

/// Undo the escaping of a name on a `\`-prefixed line.
fn unescape_name(name: &str) -> Option<String> {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            '\\' => out.push('\\'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            _ => return None,
        }
    }
    Some(out)
}

fn split_bsd(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix("SHA256 (")?;
    let (path, digest) = rest.rsplit_once(") = ")?;
    if path.is_empty() {
        return None;
    }
    Some((digest, path))
}

fn split_gnu(line: &str) -> Option<(&str, &str)> {
    let (digest, rest) = line.split_once(' ')?;
    let path = rest.strip_prefix(' ').or_else(|| rest.strip_prefix('*'))?;
    if digest.is_empty() || path.is_empty() {
        return None;
    }
    Some((digest, path))
}
