// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use mempbkdf::{Sha1, Sha256, derive_key_into};

fn benchmark_pbkdf2_rounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("pbkdf2_sha1_rounds");

    // Cost is linear in the iteration count; sweep typical work factors
    for rounds in [1_000u32, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*rounds as u64));
        group.bench_with_input(format!("{} rounds", rounds), rounds, |b, &rounds| {
            let mut key = [0u8; 20];

            b.iter(|| {
                derive_key_into::<Sha1>(
                    black_box(b"benchmark-password"),
                    black_box(b"benchmark-salt"),
                    black_box(rounds),
                    black_box(&mut key),
                )
                .expect("pbkdf2 failed");
            });
        });
    }
    group.finish();
}

fn benchmark_pbkdf2_output_len(c: &mut Criterion) {
    let mut group = c.benchmark_group("pbkdf2_sha1_output");

    // Blocks are independent; cost scales with ceil(len / 20)
    for key_len in [20usize, 40, 64, 128].iter() {
        group.throughput(Throughput::Bytes(*key_len as u64));
        group.bench_with_input(format!("{} bytes", key_len), key_len, |b, &key_len| {
            let mut key = vec![0u8; key_len];

            b.iter(|| {
                derive_key_into::<Sha1>(
                    black_box(b"benchmark-password"),
                    black_box(b"benchmark-salt"),
                    black_box(1_000),
                    black_box(&mut key),
                )
                .expect("pbkdf2 failed");
            });
        });
    }
    group.finish();
}

fn benchmark_pbkdf2_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("pbkdf2_sha256_rounds");

    for rounds in [1_000u32, 10_000].iter() {
        group.throughput(Throughput::Elements(*rounds as u64));
        group.bench_with_input(format!("{} rounds", rounds), rounds, |b, &rounds| {
            let mut key = [0u8; 32];

            b.iter(|| {
                derive_key_into::<Sha256>(
                    black_box(b"benchmark-password"),
                    black_box(b"benchmark-salt"),
                    black_box(rounds),
                    black_box(&mut key),
                )
                .expect("pbkdf2 failed");
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_pbkdf2_rounds,
    benchmark_pbkdf2_output_len,
    benchmark_pbkdf2_sha256
);
criterion_main!(benches);
