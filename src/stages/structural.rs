//! Structural probing (spec §4.10): for multi-byte candidates that survived
//! gating, validate the lead/trail byte grammar explicitly and run the
//! Shift_JIS vs EUC-JP Hiragana context analyzer that byte-validity alone
//! cannot disambiguate (both decode many of the same byte strings as valid,
//! just to different code points).
//!
//! Grounded on the teacher crate's per-plugin character-class scanners in
//! `charset-normalizer-rs/src/md.rs` (each plugin walks the decoded chars
//! once and accumulates a ratio); the Hiragana counter here follows the
//! same "walk once, accumulate, compare" shape.

use super::{Stage, StageOutcome};
use crate::bigram;
use crate::consts::{CJK_GATING_MIN_BYTES, CJK_MIN_COVERAGE, CONTEXT_ANALYZER_MAX_WEIGHT};
use crate::context::Context;
use crate::decode::probe_multi_byte;
use crate::entity::DetectOptions;
use crate::models::STORE;

pub(crate) struct StructuralStage;

impl Stage for StructuralStage {
    fn name(&self) -> &'static str {
        "structural"
    }

    fn run(&self, ctx: &mut Context, _options: &DetectOptions) -> StageOutcome {
        if ctx.candidates.is_empty() {
            return StageOutcome::Skip;
        }

        let prefix_len = ctx.prefix.len();
        for candidate in &mut ctx.candidates {
            if let Some(kind) = candidate.encoding.multi_byte_kind() {
                let probe = probe_multi_byte(ctx.prefix, kind);
                let eliminated = prefix_len >= CJK_GATING_MIN_BYTES && probe.coverage < CJK_MIN_COVERAGE;
                candidate.confidence = if eliminated {
                    0.0
                } else {
                    match distribution_score(candidate.encoding.name(), &probe.lead_byte_counts) {
                        Some(score) => 0.5 * probe.coverage + 0.5 * score,
                        None => probe.coverage,
                    }
                };
            } else if candidate.encoding.is_multi_byte() {
                // WHATWG-backed multi-byte encodings already proved a full
                // strict decode in the byte-validity stage.
                candidate.confidence = 1.0;
            }
        }
        ctx.candidates.retain(|c| !c.encoding.is_multi_byte() || c.confidence > 0.0);

        apply_shift_jis_euc_jp_context(ctx);

        StageOutcome::Narrow
    }
}

/// §4.10's `distribution_score`: cosine similarity between the observed
/// leading-byte histogram and the marginal leading-byte distribution of
/// each trained bigram profile for this encoding, keeping the best match.
/// `None` when no profile is trained for the encoding at all.
fn distribution_score(encoding_name: &str, observed_counts: &[u32; 256]) -> Option<f32> {
    let profiles = STORE.all_for_encoding(encoding_name);
    if profiles.is_empty() {
        return None;
    }
    let (observed_table, observed_norm) = bigram::quantize_counts(observed_counts);
    let mut best: Option<f32> = None;
    for profile in &profiles {
        let (marginal, marginal_norm) = bigram::leading_byte_marginal(&profile.table);
        let score = bigram::cosine(&observed_table, observed_norm, &marginal, marginal_norm);
        best = Some(best.map_or(score, |b| b.max(score)));
    }
    best
}

fn apply_shift_jis_euc_jp_context(ctx: &mut Context) {
    let has_shift_jis = ctx.candidates.iter().any(|c| c.encoding.name() == "shift_jis");
    let has_euc_jp = ctx.candidates.iter().any(|c| c.encoding.name() == "euc-jp");
    if !has_shift_jis || !has_euc_jp {
        return;
    }

    let shift_jis = crate::registry::resolve("shift_jis").expect("shift_jis registered");
    let euc_jp = crate::registry::resolve("euc-jp").expect("euc-jp registered");

    let shift_jis_score = ctx.decode(shift_jis).map(hiragana_run_score).unwrap_or(0);
    let euc_jp_score = ctx.decode(euc_jp).map(hiragana_run_score).unwrap_or(0);

    if shift_jis_score == euc_jp_score {
        return;
    }
    let (winner, loser) = if shift_jis_score > euc_jp_score {
        ("shift_jis", "euc-jp")
    } else {
        ("euc-jp", "shift_jis")
    };
    for candidate in &mut ctx.candidates {
        if candidate.encoding.name() == winner {
            candidate.confidence = (candidate.confidence + CONTEXT_ANALYZER_MAX_WEIGHT).min(1.0);
        } else if candidate.encoding.name() == loser {
            candidate.confidence = (candidate.confidence - CONTEXT_ANALYZER_MAX_WEIGHT).max(0.0);
        }
    }
}

/// Count runs of consecutive Hiragana code points (U+3041-U+3096): a
/// heuristic for "this decode looks like real Japanese prose" that a
/// structurally-valid-but-wrong decode of the same bytes rarely produces.
fn hiragana_run_score(text: &str) -> usize {
    let mut score = 0usize;
    let mut run = 0usize;
    for ch in text.chars() {
        if ('\u{3041}'..='\u{3096}').contains(&ch) {
            run += 1;
            if run >= 2 {
                score += 1;
            }
        } else {
            run = 0;
        }
    }
    score
}
