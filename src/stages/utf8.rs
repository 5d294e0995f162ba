//! UTF-8 stage (spec §4.3 step 7): valid, non-ASCII UTF-8 is accepted on
//! structural grounds alone, before any candidate narrowing or scoring.

use super::{Stage, StageOutcome};
use crate::consts::UTF8_CONFIDENCE;
use crate::context::Context;
use crate::entity::DetectOptions;
use crate::language::tier3_utf8_language;
use crate::registry;

pub(crate) struct Utf8Stage;

impl Stage for Utf8Stage {
    fn name(&self) -> &'static str {
        "utf8"
    }

    fn run(&self, ctx: &mut Context, _options: &DetectOptions) -> StageOutcome {
        if ctx.non_ascii_count == 0 {
            return StageOutcome::Skip;
        }
        let utf8 = registry::resolve("utf-8").expect("utf-8 always registered");
        if let Ok(text) = ctx.decode(utf8) {
            let language = tier3_utf8_language(text);
            return StageOutcome::Verdict {
                encoding: "utf-8",
                confidence: UTF8_CONFIDENCE,
                language,
            };
        }
        StageOutcome::Skip
    }
}
