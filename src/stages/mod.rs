//! The eleven ordered Pipeline Stages (spec §4.4-§4.11).
//!
//! Grounded on the teacher crate's `MessDetectorPlugin` trait and the
//! `Vec<Box<dyn MessDetectorPlugin>>` driving loop in
//! `charset-normalizer-rs/src/md.rs::mess_ratio`: a small trait, one impl
//! per concern, run in a fixed order by the orchestrator. Unlike the
//! teacher's plugins (which all vote toward one "mess ratio"), these
//! stages can short-circuit the pipeline outright (`StageOutcome::Verdict`)
//! the moment one of them is authoritative.

pub(crate) mod ascii;
pub(crate) mod binary;
pub(crate) mod bom;
pub(crate) mod byte_validity;
pub(crate) mod cjk_gating;
pub(crate) mod escape;
pub(crate) mod markup;
pub(crate) mod statistical;
pub(crate) mod structural;
pub(crate) mod utf16_32;
pub(crate) mod utf8;

use crate::context::Context;
use crate::entity::DetectOptions;
use crate::language::Language;

/// Result of running one stage over the current [`Context`].
pub(crate) enum StageOutcome {
    /// Authoritative answer; the orchestrator stops and returns it.
    Verdict {
        encoding: &'static str,
        confidence: f32,
        language: Option<Language>,
    },
    /// Candidate set was narrowed or annotated; keep going.
    Narrow,
    /// Stage does not apply to this input.
    Skip,
}

pub(crate) trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Context, options: &DetectOptions) -> StageOutcome;
}

/// The fixed stage order (spec §4.3 step list). The orchestrator iterates
/// this exact sequence; stage order is itself part of the pipeline's
/// contract, not an implementation detail.
pub(crate) fn pipeline() -> Vec<Box<dyn Stage + Send + Sync>> {
    vec![
        Box::new(bom::BomStage),
        Box::new(utf16_32::Utf1632Stage),
        Box::new(escape::EscapeStage),
        Box::new(binary::BinaryGuardStage),
        Box::new(markup::MarkupStage),
        Box::new(ascii::AsciiStage),
        Box::new(utf8::Utf8Stage),
        Box::new(byte_validity::ByteValidityStage),
        Box::new(cjk_gating::CjkGatingStage),
        Box::new(structural::StructuralStage),
        Box::new(statistical::StatisticalStage),
    ]
}
