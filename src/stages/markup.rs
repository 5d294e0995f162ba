//! Markup stage (spec §4.8): HTML/XML documents frequently declare their
//! own encoding; trust a self-declaration that also round-trips cleanly.
//!
//! Grounded on the teacher crate's use of `regex` for ad hoc text scanning
//! (`charset-normalizer-rs` depends on `regex` for exactly this kind of
//! declarative-pattern search) rather than a full HTML/XML parser.

use super::{Stage, StageOutcome};
use crate::consts::{DECLARED_ENCODING_SEARCH_ZONE, MARKUP_CONFIDENCE, MARKUP_SCAN_WINDOW};
use crate::context::Context;
use crate::entity::DetectOptions;
use crate::registry;
use once_cell::sync::Lazy;
use regex::bytes::Regex;

static META_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([a-zA-Z0-9_\-]+)"#).unwrap()
});

static XML_ENCODING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<\?xml[^>]+encoding\s*=\s*["']([a-zA-Z0-9_\-]+)["']"#).unwrap()
});

pub(crate) struct MarkupStage;

impl Stage for MarkupStage {
    fn name(&self) -> &'static str {
        "markup"
    }

    fn run(&self, ctx: &mut Context, _options: &DetectOptions) -> StageOutcome {
        let scan_len = ctx.prefix.len().min(MARKUP_SCAN_WINDOW.max(DECLARED_ENCODING_SEARCH_ZONE));
        let window = &ctx.prefix[..scan_len];

        let declared = META_CHARSET
            .captures(window)
            .or_else(|| XML_ENCODING.captures(window))
            .and_then(|caps| caps.get(1))
            .and_then(|m| std::str::from_utf8(m.as_bytes()).ok());

        let Some(name) = declared else {
            return StageOutcome::Skip;
        };

        let Some(encoding) = registry::resolve(name) else {
            return StageOutcome::Skip;
        };

        if ctx.decode(encoding).is_ok() {
            return StageOutcome::Verdict {
                encoding: encoding.name(),
                confidence: MARKUP_CONFIDENCE,
                language: None,
            };
        }

        StageOutcome::Skip
    }
}
