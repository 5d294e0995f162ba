//! CJK gating (spec §4.10, "Open Question" on coverage floor): a cheap
//! pre-filter that drops multi-byte CJK candidates before the more
//! expensive structural probing runs, when there simply isn't enough
//! non-ASCII material in the prefix to trust a multi-byte guess.
//!
//! Grounded on the teacher crate's early-exit checks in `md.rs` (several
//! plugins return `ratio = 0.0` immediately when `self.character_count()`
//! is below a minimum before doing real work).

use super::{Stage, StageOutcome};
use crate::consts::{CJK_GATING_MIN_BYTES, CJK_MIN_COVERAGE};
use crate::context::Context;
use crate::entity::DetectOptions;

pub(crate) struct CjkGatingStage;

impl Stage for CjkGatingStage {
    fn name(&self) -> &'static str {
        "cjk_gating"
    }

    fn run(&self, ctx: &mut Context, _options: &DetectOptions) -> StageOutcome {
        if ctx.prefix.len() < CJK_GATING_MIN_BYTES {
            return StageOutcome::Skip;
        }
        let coverage = ctx.non_ascii_count as f32 / ctx.prefix.len() as f32;
        if coverage >= CJK_MIN_COVERAGE {
            return StageOutcome::Skip;
        }
        ctx.retain_candidates(|c| !c.encoding.is_multi_byte());
        StageOutcome::Narrow
    }
}
