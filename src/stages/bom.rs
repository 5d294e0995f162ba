//! BOM stage (spec §4.4): a byte-order mark is treated as definitive.
//!
//! Grounded on the teacher crate's `utils::identify_sig_or_bom`
//! (`charset-normalizer-rs/src/utils.rs`), a fixed signature table checked
//! against the start of the buffer before anything more expensive runs.

use super::{Stage, StageOutcome};
use crate::consts::BOM_CONFIDENCE;
use crate::context::Context;
use crate::entity::DetectOptions;

const SIGNATURES: &[(&[u8], &str)] = &[
    (&[0xEF, 0xBB, 0xBF], "utf-8-sig"),
    (&[0xFF, 0xFE, 0x00, 0x00], "utf-32le"),
    (&[0x00, 0x00, 0xFE, 0xFF], "utf-32be"),
    (&[0xFF, 0xFE], "utf-16le"),
    (&[0xFE, 0xFF], "utf-16be"),
];

pub(crate) struct BomStage;

impl Stage for BomStage {
    fn name(&self) -> &'static str {
        "bom"
    }

    fn run(&self, ctx: &mut Context, _options: &DetectOptions) -> StageOutcome {
        // UTF-32 signatures must be checked before UTF-16: `FF FE 00 00`
        // starts with the UTF-16LE signature.
        for (sig, name) in SIGNATURES {
            if ctx.prefix.starts_with(sig) {
                return StageOutcome::Verdict {
                    encoding: name,
                    confidence: BOM_CONFIDENCE,
                    language: None,
                };
            }
        }
        StageOutcome::Skip
    }
}
