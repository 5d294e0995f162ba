//! Byte-bigram histogram and cosine similarity shared by the statistical
//! scoring stage (§4.11) and the tier-3 UTF-8 language fallback (§4.12).
//!
//! The quantization scheme (scale the largest bucket to 255, store the
//! Euclidean norm alongside) exactly mirrors `tools/gen_models.py`'s
//! training-time quantization so a live sample and a trained profile are
//! directly comparable.

use crate::consts::BIGRAM_TABLE_SIZE;

/// Build a quantized byte-bigram histogram over `bytes`, same shape as a
/// trained [`crate::models::BigramProfile`] table.
pub(crate) fn quantized_table(bytes: &[u8]) -> (Box<[u8]>, f32) {
    let mut counts = vec![0u32; BIGRAM_TABLE_SIZE];
    for pair in bytes.windows(2) {
        let idx = (pair[0] as usize) << 8 | pair[1] as usize;
        counts[idx] += 1;
    }
    let (table, norm) = quantize_counts(&counts);
    (table.into_boxed_slice(), norm)
}

/// Scale an arbitrary count histogram the same way a trained profile is
/// quantized (largest bucket -> 255), carrying the Euclidean norm alongside
/// so the result is directly comparable via [`cosine`].
pub(crate) fn quantize_counts(counts: &[u32]) -> (Vec<u8>, f32) {
    let peak = counts.iter().copied().max().unwrap_or(0);
    if peak == 0 {
        return (vec![0u8; counts.len()], 0.0);
    }
    let scale = 255.0 / peak as f32;
    let table: Vec<u8> = counts
        .iter()
        .map(|&c| (c as f32 * scale).round().min(255.0) as u8)
        .collect();
    let norm = (table.iter().map(|&v| (v as f32) * (v as f32)).sum::<f32>()).sqrt();
    (table, norm)
}

/// Derive the marginal leading-byte distribution from a dense bigram table
/// (sum the 256 trailing-byte buckets for each fixed leading byte `b1`),
/// re-quantized so it is directly comparable to an observed leading-byte
/// histogram via [`cosine`]. This is the "language-specific leading-byte
/// frequency table" behind §4.10's `distribution_score`.
pub(crate) fn leading_byte_marginal(table: &[u8]) -> (Vec<u8>, f32) {
    let mut sums = vec![0u32; 256];
    for (b1, sum) in sums.iter_mut().enumerate() {
        let row = &table[b1 * 256..(b1 + 1) * 256];
        *sum = row.iter().map(|&v| v as u32).sum();
    }
    quantize_counts(&sums)
}

/// Cosine similarity between two equally-sized quantized bigram tables.
/// Written as a flat loop with no branching in the hot path so it
/// auto-vectorizes; this is the single most frequently executed routine in
/// the crate on multi-candidate, non-ASCII input.
pub(crate) fn cosine(a: &[u8], a_norm: f32, b: &[u8], b_norm: f32) -> f32 {
    if a_norm == 0.0 || b_norm == 0.0 {
        return 0.0;
    }
    let mut dot: f32 = 0.0;
    for (&x, &y) in a.iter().zip(b.iter()) {
        dot += x as f32 * y as f32;
    }
    (dot / (a_norm * b_norm)).clamp(0.0, 1.0)
}
