//! Statistical scoring (spec §4.11) and the orchestrator-facing half of
//! Language Assignment tiers 1-2 (spec §4.12): score every surviving
//! candidate's raw byte-bigram histogram against its trained profiles via
//! cosine similarity and annotate each candidate with a final confidence
//! and language. The orchestrator performs the final ranking and
//! era tie-break across the annotated candidate set (spec §4.3, §9).
//!
//! Grounded on the teacher crate's `cd::coherence_ratio`
//! (`charset-normalizer-rs/src/cd.rs`), which also scores each surviving
//! candidate against per-language reference data and keeps the best; this
//! crate substitutes cosine similarity over bigram tables for the
//! teacher's Jaro-similarity-over-ordered-frequency-lists approach.

use super::{Stage, StageOutcome};
use crate::bigram;
use crate::context::Context;
use crate::entity::DetectOptions;
use crate::language::{self, Language};
use crate::models::STORE;

pub(crate) struct StatisticalStage;

impl Stage for StatisticalStage {
    fn name(&self) -> &'static str {
        "statistical"
    }

    fn run(&self, ctx: &mut Context, _options: &DetectOptions) -> StageOutcome {
        if ctx.candidates.is_empty() {
            return StageOutcome::Skip;
        }

        let (sample_table, sample_norm) = bigram::quantized_table(ctx.prefix);

        for candidate in &mut ctx.candidates {
            let name = candidate.encoding.name();
            // Tier 1 (§4.12) fixes the *language* for these encodings, but
            // confidence is never exempt from cosine scoring against their
            // own trained profiles: two tier-1 candidates that both
            // byte-decode validly must still be told apart by fit.
            let fixed_language = language::single_language_for(name);

            let profiles = STORE.all_for_encoding(name);
            if profiles.is_empty() {
                // No trained profile for this encoding: fall back to
                // whatever structural confidence earlier stages produced.
                if let Some(language) = fixed_language {
                    candidate.language = Some(language);
                }
                continue;
            }

            let mut best_model_language: Option<Language> = None;
            let mut best_score = 0.0f32;
            for profile in &profiles {
                let score = bigram::cosine(&sample_table, sample_norm, &profile.table, profile.norm);
                if best_model_language.is_none() || score > best_score {
                    best_score = score;
                    best_model_language = Some(profile.language);
                }
            }

            candidate.confidence = if candidate.confidence > 0.0 {
                0.5 * best_score + 0.5 * candidate.confidence
            } else {
                best_score
            };
            candidate.language = Some(fixed_language.or(best_model_language).expect("profiles is non-empty"));
            candidate.scored = true;
        }

        StageOutcome::Narrow
    }
}
