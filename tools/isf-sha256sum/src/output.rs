// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Output line formatting.
//!
//! Names containing a backslash, newline or carriage return are escaped
//! the way coreutils does it: the line gets a leading `\` and those
//! characters are written as `\\`, `\n` and `\r`.

use crate::config::{Encoding, OutputStyle};
use isf_sha256::Digest;
use serde::Serialize;

#[derive(Serialize)]
struct JsonRecord<'a> {
    name: &'a str,
    digest: String,
    encoding: Encoding,
    size: u64,
}

fn encode(digest: &Digest, encoding: Encoding) -> String {
    match encoding {
        Encoding::Hex => digest.to_hex(),
        Encoding::Base64 => digest.to_base64(),
    }
}

/// Escaped form of `name`, or `None` when it can be written as is.
pub fn escape_name(name: &str) -> Option<String> {
    if !name.contains(['\\', '\n', '\r']) {
        return None;
    }
    let mut escaped = String::with_capacity(name.len() + 2);
    for c in name.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    Some(escaped)
}

/// Render one result line (without trailing newline).
pub fn format_line(
    style: OutputStyle,
    encoding: Encoding,
    name: &str,
    size: u64,
    digest: &Digest,
) -> Result<String, serde_json::Error> {
    let text = encode(digest, encoding);
    let escaped = escape_name(name);
    let (marker, shown) = match &escaped {
        Some(e) => ("\\", e.as_str()),
        None => ("", name),
    };
    Ok(match style {
        OutputStyle::Gnu => format!("{}{}  {}", marker, text, shown),
        OutputStyle::Bsd => format!("{}SHA256 ({}) = {}", marker, shown, text),
        OutputStyle::Json => serde_json::to_string(&JsonRecord {
            name,
            digest: text,
            encoding,
            size,
        })?,
    })
}
