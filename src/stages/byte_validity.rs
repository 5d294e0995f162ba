//! Byte-validity filter (spec §4.9): the first stage that works against the
//! full Encoding Registry rather than one fixed hypothesis. Every
//! era-eligible candidate that fails to decode the whole prefix is dropped
//! before any scoring work is spent on it.
//!
//! Grounded on the teacher crate's `from_bytes` loop in
//! `charset-normalizer-rs/src/lib.rs`, which iterates "prioritized
//! encodings" and discards any that raise a decode error outright.

use super::{Stage, StageOutcome};
use crate::context::{Candidate, Context};
use crate::entity::DetectOptions;
use crate::registry;

pub(crate) struct ByteValidityStage;

impl Stage for ByteValidityStage {
    fn name(&self) -> &'static str {
        "byte_validity"
    }

    fn run(&self, ctx: &mut Context, options: &DetectOptions) -> StageOutcome {
        let era_candidates = registry::candidates_for_era(options.era_filter);
        let mut survivors = Vec::new();
        for encoding in era_candidates {
            // ascii/utf-8/utf-16/utf-32 already had their dedicated stages;
            // they remain eligible here too since some inputs (e.g. a short
            // ASCII-compatible non-ASCII single-byte file) still benefit
            // from being scored against them downstream.
            if ctx.decode(encoding).is_ok() {
                survivors.push(Candidate {
                    encoding,
                    confidence: 0.0,
                    language: None,
                    scored: false,
                });
            }
        }
        ctx.candidates = survivors;
        StageOutcome::Narrow
    }
}
