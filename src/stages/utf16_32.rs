//! UTF-16/32 pattern stage (spec §4.5): BOM-less wide-character text has a
//! distinctive periodic null-byte signature even without a signature mark.
//!
//! There is no direct teacher analogue (the teacher crate does not handle
//! BOM-less UTF-16/32 at all); the approach here follows the same
//! "cheap statistical pre-filter before expensive work" shape as the
//! teacher's `md` plugins, just applied to null-byte periodicity instead
//! of character-class ratios.

use super::{Stage, StageOutcome};
use crate::consts::{NULL_DENSITY_FLOOR, UTF16_32_CONFIDENCE, UTF16_32_SCAN_WINDOW, UTF32_NULL_MAJORITY};
use crate::context::Context;
use crate::entity::DetectOptions;

pub(crate) struct Utf1632Stage;

impl Stage for Utf1632Stage {
    fn name(&self) -> &'static str {
        "utf16_32_pattern"
    }

    fn run(&self, ctx: &mut Context, _options: &DetectOptions) -> StageOutcome {
        // Whatever this run concludes, a `Verdict` short-circuits the whole
        // pipeline before the binary guard ever consults this flag, so it's
        // safe to mark the pattern ruled-out unconditionally up front.
        ctx.wide_char_pattern_ruled_out = true;

        let window = &ctx.prefix[..ctx.prefix.len().min(UTF16_32_SCAN_WINDOW)];
        if window.len() < 4 {
            return StageOutcome::Skip;
        }

        let null_density = ctx.null_count as f32 / ctx.prefix.len().max(1) as f32;
        if null_density < NULL_DENSITY_FLOOR {
            return StageOutcome::Skip;
        }

        // UTF-32: the byte position holding actual character data is the
        // minority (low-null) residue class mod 4; the other three should
        // be overwhelmingly null. `"AB".encode("utf-32-le")` is
        // `41 00 00 00 42 00 00 00`, so residue 0 (the low byte) is the
        // non-null minority and residues 1-3 are all-null.
        if window.len() >= 16 {
            let mut nulls_by_residue = [0usize; 4];
            for (i, &b) in window.iter().enumerate() {
                if b == 0 {
                    nulls_by_residue[i % 4] += 1;
                }
            }
            let slots = window.len() / 4;
            if slots > 0 {
                let (low_residue, _) = nulls_by_residue
                    .iter()
                    .enumerate()
                    .min_by_key(|&(_, &nulls)| nulls)
                    .expect("nulls_by_residue is non-empty");
                let others_majority_null = nulls_by_residue
                    .iter()
                    .enumerate()
                    .filter(|&(residue, _)| residue != low_residue)
                    .all(|(_, &nulls)| nulls as f32 / slots as f32 >= UTF32_NULL_MAJORITY);
                let encoding = match (others_majority_null, low_residue) {
                    (true, 0) => Some("utf-32le"),
                    (true, 3) => Some("utf-32be"),
                    _ => None,
                };
                if let Some(encoding) = encoding {
                    return StageOutcome::Verdict {
                        encoding,
                        confidence: UTF16_32_CONFIDENCE,
                        language: None,
                    };
                }
            }
        }

        // UTF-16: every other byte tends to be null for Latin-script text.
        let mut nulls_even = 0usize;
        let mut nulls_odd = 0usize;
        for (i, &b) in window.iter().enumerate() {
            if b == 0 {
                if i % 2 == 0 {
                    nulls_even += 1;
                } else {
                    nulls_odd += 1;
                }
            }
        }
        let half = window.len() / 2;
        if half == 0 {
            return StageOutcome::Skip;
        }
        let even_ratio = nulls_even as f32 / half as f32;
        let odd_ratio = nulls_odd as f32 / half as f32;
        if even_ratio >= UTF32_NULL_MAJORITY && even_ratio > odd_ratio {
            return StageOutcome::Verdict {
                encoding: "utf-16be",
                confidence: UTF16_32_CONFIDENCE,
                language: None,
            };
        }
        if odd_ratio >= UTF32_NULL_MAJORITY && odd_ratio > even_ratio {
            return StageOutcome::Verdict {
                encoding: "utf-16le",
                confidence: UTF16_32_CONFIDENCE,
                language: None,
            };
        }

        StageOutcome::Skip
    }
}
