// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use ring::digest::{digest, SHA256};

fuzz_target!(|data: &[u8]| {
    let ours = isf_sha256::compute(data);
    let reference = digest(&SHA256, data);
    assert_eq!(ours.as_bytes().as_slice(), reference.as_ref());
});
