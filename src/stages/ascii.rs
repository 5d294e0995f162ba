//! ASCII stage (spec §4.3 step 6): the cheapest possible verdict.

use super::{Stage, StageOutcome};
use crate::consts::ASCII_CONFIDENCE;
use crate::context::Context;
use crate::entity::DetectOptions;
use crate::registry::{self, Era};

pub(crate) struct AsciiStage;

impl Stage for AsciiStage {
    fn name(&self) -> &'static str {
        "ascii"
    }

    fn run(&self, ctx: &mut Context, options: &DetectOptions) -> StageOutcome {
        if ctx.is_empty() || ctx.non_ascii_count > 0 {
            return StageOutcome::Skip;
        }
        let has_non_ascii_control = ctx
            .prefix
            .iter()
            .any(|&b| b < 0x20 && !matches!(b, 0x09 | 0x0A | 0x0C | 0x0D));
        if has_non_ascii_control {
            return StageOutcome::Skip;
        }

        // When the caller has not restricted detection to a narrower era
        // (i.e. asked for every era), report the Windows-1252 superset
        // instead of plain ASCII: it decodes the same bytes identically but
        // leaves room for a later stage to recognize a high-byte extension.
        if options.era_filter == Era::ALL {
            if let Some(windows_1252) = registry::resolve("windows-1252") {
                return StageOutcome::Verdict {
                    encoding: windows_1252.name(),
                    confidence: ASCII_CONFIDENCE,
                    language: None,
                };
            }
        }

        StageOutcome::Verdict {
            encoding: "ascii",
            confidence: ASCII_CONFIDENCE,
            language: None,
        }
    }
}
