//! Benchmarks end-to-end `detect` throughput on a large, otherwise-boring
//! ASCII/UTF-8 payload, to catch regressions in the cheap early stages
//! (BOM/UTF-16-32/escape/binary guard) that every call pays for regardless
//! of what the statistical stage ends up doing.

use chardetect_rs::{detect, DetectOptions};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn ascii_payload(size: usize) -> Vec<u8> {
    "The quick brown fox jumps over the lazy dog. "
        .bytes()
        .cycle()
        .take(size)
        .collect()
}

fn bench_large_ascii(c: &mut Criterion) {
    let payload = ascii_payload(200_000);
    c.bench_function("detect/ascii 200KB", |b| {
        b.iter(|| {
            let result = detect(black_box(&payload), Some(DetectOptions::default()));
            black_box(result);
        });
    });
}

fn bench_large_utf8(c: &mut Criterion) {
    let payload: Vec<u8> = "Der schnelle braune Fuchs springt über den faulen Hund. "
        .bytes()
        .cycle()
        .take(200_000)
        .collect();
    c.bench_function("detect/utf8 200KB", |b| {
        b.iter(|| {
            let result = detect(black_box(&payload), Some(DetectOptions::default()));
            black_box(result);
        });
    });
}

criterion_group!(benches, bench_large_ascii, bench_large_utf8);
criterion_main!(benches);
