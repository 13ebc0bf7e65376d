// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// Differential check against ring's SHA-256 over a seeded random corpus.

use isf_sha256::compute;
use ring::digest::{digest, SHA256};

const CORPUS_SIZE: usize = 300;
const MAX_LEN: usize = 10_000;

fn reference(data: &[u8]) -> [u8; 32] {
    let hash = digest(&SHA256, data);
    let mut out = [0u8; 32];
    out.copy_from_slice(hash.as_ref());
    out
}

fn random_message(rng: &mut fastrand::Rng, len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rng.fill(&mut buf);
    buf
}

#[test]
fn random_corpus_matches_ring() {
    let mut rng = fastrand::Rng::with_seed(0x5348_4132_3536);
    for i in 0..CORPUS_SIZE {
        let len = rng.usize(0..=MAX_LEN);
        let msg = random_message(&mut rng, len);
        assert_eq!(
            compute(&msg).as_bytes(),
            &reference(&msg),
            "corpus entry {i}, len {len}"
        );
    }
}

#[test]
fn every_length_up_to_three_blocks() {
    let mut rng = fastrand::Rng::with_seed(7);
    let msg = random_message(&mut rng, 192);
    for len in 0..=msg.len() {
        assert_eq!(
            compute(&msg[..len]).as_bytes(),
            &reference(&msg[..len]),
            "len {len}"
        );
    }
}
