// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::cast_possible_truncation)] // Bench payload generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use isf_sha256::{compute, compute_into, DIGEST_SIZE};

const SIZES: [usize; 4] = [64, 1024, 64 * 1024, 1024 * 1024];

fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

// ============================================================================
// One-shot compute
// ============================================================================

/// Benchmark: compute() throughput across message sizes
fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    for len in SIZES {
        let data = payload(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| compute(black_box(data)))
        });
    }
    group.finish();
}

/// Benchmark: padding-only cost (55 vs 56 bytes, one vs two blocks)
fn bench_padding_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("padding_split");
    for len in [55usize, 56] {
        let data = payload(len);
        let mut out = [0u8; DIGEST_SIZE];
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| compute_into(black_box(data), &mut out))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute, bench_padding_split);
criterion_main!(benches);
