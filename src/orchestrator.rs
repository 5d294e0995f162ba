//! Pipeline Orchestrator (spec §4.3, §9): drives the ordered stage list,
//! stops at the first authoritative verdict, and otherwise performs the
//! final ranking (plus era tie-break) across whatever candidates survived
//! to the end of the pipeline.
//!
//! Grounded on the teacher crate's `from_bytes` (`charset-normalizer-rs/
//! src/lib.rs`): a single function that walks a prioritized encoding list,
//! early-returns on a sufficiently confident hit, and otherwise falls back
//! to ranking whatever it accumulated.

use crate::consts::{DETECT_ALL_THRESHOLD, ERA_TIE_BREAK_EPSILON, STATISTICAL_CONFIDENCE_FLOOR};
use crate::context::{Candidate, Context};
use crate::entity::{DetectOptions, DetectionResult, DetectionResults};
use crate::registry::Era;
use crate::stages::{self, StageOutcome};
use log::debug;
use ordered_float::OrderedFloat;

/// Era tiers in best-to-worst order for the default (modern-first) tie-break
/// (spec §4.3, §9); reversed when `options.prefer_legacy` is set.
const ERA_TIERS: [Era; 6] = [
    Era::MODERN_WEB,
    Era::LEGACY_ISO,
    Era::LEGACY_MAC,
    Era::LEGACY_REGIONAL,
    Era::DOS,
    Era::MAINFRAME,
];

/// Rank of `era`'s best-matching tier: lower is preferred. An era that
/// matches no named tier (shouldn't happen for a registered encoding) sorts
/// last. When `prefer_legacy` is set the order is reversed end-to-end.
fn era_rank(era: Era, prefer_legacy: bool) -> usize {
    match ERA_TIERS.iter().position(|&tier| era.contains(tier)) {
        Some(pos) if prefer_legacy => ERA_TIERS.len() - 1 - pos,
        Some(pos) => pos,
        // No named tier matches at all: sort after every named tier
        // regardless of tie-break direction.
        None => ERA_TIERS.len(),
    }
}

pub(crate) fn detect_all(input: &[u8], options: &DetectOptions) -> DetectionResults {
    if input.is_empty() {
        return DetectionResults(Vec::new());
    }

    let mut ctx = Context::new(input, options.max_bytes);
    let stage_list = stages::pipeline();

    for stage in &stage_list {
        match stage.run(&mut ctx, options) {
            StageOutcome::Verdict {
                encoding,
                confidence,
                language,
            } => {
                debug!("stage {} returned a verdict: {encoding} ({confidence})", stage.name());
                return DetectionResults(vec![DetectionResult::new(
                    encoding,
                    confidence,
                    language,
                    options.should_rename_legacy,
                )]);
            }
            StageOutcome::Narrow => {
                debug!(
                    "stage {} narrowed to {} candidate(s)",
                    stage.name(),
                    ctx.candidates.len()
                );
                if ctx.candidates.is_empty() {
                    break;
                }
            }
            StageOutcome::Skip => {}
        }
    }

    rank_candidates(ctx.candidates, options)
}

pub(crate) fn detect_one(input: &[u8], options: &DetectOptions) -> Option<DetectionResult> {
    detect_all(input, options).0.into_iter().next()
}

/// Sort surviving candidates best-first, breaking near-ties by era
/// preference (spec §9): candidates within [`ERA_TIE_BREAK_EPSILON`] of the
/// best score are re-ordered so a legacy-era candidate only wins when
/// `options.prefer_legacy` is set.
fn rank_candidates(mut candidates: Vec<Candidate>, options: &DetectOptions) -> DetectionResults {
    // A candidate that actually went through cosine scoring never reports
    // below the floor (§4.11); this is distinct from the `ignore_threshold`
    // filter below, which controls whether sub-floor results are reported
    // at all rather than clamped.
    for candidate in &mut candidates {
        if candidate.scored && candidate.confidence < STATISTICAL_CONFIDENCE_FLOOR {
            candidate.confidence = STATISTICAL_CONFIDENCE_FLOOR;
        }
    }

    if !options.ignore_threshold {
        candidates.retain(|c| c.confidence > 0.0);
    }
    candidates.sort_by_key(|c| std::cmp::Reverse(OrderedFloat(c.confidence)));

    if let Some(top_confidence) = candidates.first().map(|c| c.confidence) {
        let tie_zone_end = candidates
            .iter()
            .position(|c| top_confidence - c.confidence > ERA_TIE_BREAK_EPSILON)
            .unwrap_or(candidates.len());
        if tie_zone_end > 1 {
            let tied = &mut candidates[..tie_zone_end];
            tied.sort_by_key(|c| era_rank(c.encoding.era(), options.prefer_legacy));
        }
    }

    let results: Vec<DetectionResult> = candidates
        .into_iter()
        .filter(|c| options.ignore_threshold || c.confidence >= DETECT_ALL_THRESHOLD)
        .map(|c| DetectionResult::new(c.encoding.name(), c.confidence, c.language, options.should_rename_legacy))
        .collect();

    DetectionResults(results)
}
