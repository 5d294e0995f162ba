//! Benchmarks the statistical scoring stage's cosine-similarity hot path
//! (spec §4.11) by running detection over non-ASCII payloads that survive
//! all the way to that stage. Grounded on the teacher crate's
//! `benches`-via-`criterion` setup (`charset-normalizer-rs`'s dev-deps).

use chardetect_rs::{detect_all, DetectOptions};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Encoded as windows-1251 (not UTF-8) so the payload survives past the
/// dedicated UTF-8 stage and actually reaches statistical scoring.
fn russian_payload(size: usize) -> Vec<u8> {
    let sentence = "Быстрая коричневая лиса перепрыгивает через ленивую собаку. ";
    let (encoded, _, _) = encoding_rs::WINDOWS_1251.encode(sentence);
    encoded.iter().copied().cycle().take(size).collect()
}

fn bench_statistical_scoring(c: &mut Criterion) {
    let payload = russian_payload(8 * 1024);
    c.bench_function("detect_all/windows-1251-like cyrillic 8KiB", |b| {
        b.iter(|| {
            let result = detect_all(black_box(&payload), Some(DetectOptions::default()));
            black_box(result);
        });
    });
}

criterion_group!(benches, bench_statistical_scoring);
criterion_main!(benches);
