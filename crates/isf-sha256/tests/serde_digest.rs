// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use isf_sha256::{compute, Digest};

#[test]
fn digest_serializes_as_hex_string() {
    let d = compute(b"abc");
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(
        json,
        "\"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\""
    );
    let back: Digest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);
}

#[test]
fn invalid_hex_is_a_deserialize_error() {
    let err = serde_json::from_str::<Digest>("\"zz\"").unwrap_err();
    assert!(err.to_string().contains("expected 64"));
}
