// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use isf_sha256::Digest;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Anything that parses must re-encode to the canonical form.
    if let Ok(d) = Digest::from_hex(text) {
        assert_eq!(d.to_hex(), text.trim().to_ascii_lowercase());
    }
    if let Ok(d) = Digest::from_base64(text) {
        assert_eq!(Digest::from_base64(&d.to_base64()).ok(), Some(d));
    }
});
