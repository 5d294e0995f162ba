//! Binary guard (spec §4.7): bail out early on data that is clearly not
//! text at all, before sinking effort into decode attempts.
//!
//! Grounded on the teacher crate's control-character plugins in
//! `charset-normalizer-rs/src/md.rs` (e.g. `ArchivedFileNameDetector`,
//! `SuspiciousRange` checks), which treat a high density of control bytes
//! as evidence against any text encoding.

use super::{Stage, StageOutcome};
use crate::consts::{BINARY_CONTROL_FRACTION, BINARY_GUARD_WINDOW};
use crate::context::Context;
use crate::entity::DetectOptions;

pub(crate) struct BinaryGuardStage;

impl Stage for BinaryGuardStage {
    fn name(&self) -> &'static str {
        "binary_guard"
    }

    fn run(&self, ctx: &mut Context, _options: &DetectOptions) -> StageOutcome {
        if ctx.is_empty() {
            return StageOutcome::Skip;
        }

        // A null byte with no UTF-16/32 pattern to explain it (§4.5 already
        // ran and found none) is binary on its own, regardless of density.
        if ctx.wide_char_pattern_ruled_out && ctx.null_count > 0 {
            return StageOutcome::Verdict {
                encoding: "application/octet-stream",
                confidence: 1.0,
                language: None,
            };
        }

        let window = &ctx.prefix[..ctx.prefix.len().min(BINARY_GUARD_WINDOW)];
        let control_count = window
            .iter()
            .filter(|&&b| b < 0x20 && !matches!(b, 0x09 | 0x0A | 0x0C | 0x0D))
            .count();
        let fraction = control_count as f32 / window.len() as f32;
        if fraction >= BINARY_CONTROL_FRACTION {
            return StageOutcome::Verdict {
                encoding: "application/octet-stream",
                confidence: 1.0,
                language: None,
            };
        }
        StageOutcome::Skip
    }
}
