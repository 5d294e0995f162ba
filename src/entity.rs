//! Public result and settings types (spec §4.1, §4.3).
//!
//! Grounded on the teacher crate's `entity::{CharsetMatch, CharsetMatches,
//! NormalizerSettings}` (`charset-normalizer-rs/src/entity.rs`): a plain
//! struct carrying the winning encoding plus derived metadata, a thin
//! container type around a `Vec` of those, and a `Default`-impl settings
//! struct threaded through the top-level entry points.

use crate::language::Language;
use crate::registry::Era;
use serde::Serialize;
use std::fmt;

/// One scored encoding/language hypothesis (spec §4.1).
#[derive(Debug, Clone, Serialize)]
pub struct DetectionResult {
    pub encoding: String,
    pub confidence: f32,
    pub language: Option<String>,
    /// Opaque passthrough of `DetectOptions::should_rename_legacy` (spec
    /// §4.3): carried unchanged for callers to act on, never consulted by
    /// this crate's own ranking.
    pub should_rename_legacy: bool,
}

impl DetectionResult {
    pub(crate) fn new(
        encoding: &str,
        confidence: f32,
        language: Option<Language>,
        should_rename_legacy: bool,
    ) -> DetectionResult {
        DetectionResult {
            encoding: encoding.to_string(),
            confidence,
            language: language.map(|l| l.to_string()),
            should_rename_legacy,
        }
    }
}

impl fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.language {
            Some(lang) => write!(f, "{} ({:.2}, {})", self.encoding, self.confidence, lang),
            None => write!(f, "{} ({:.2})", self.encoding, self.confidence),
        }
    }
}

/// Ordered list of hypotheses from `detect_all`, best-first (spec §4.3).
#[derive(Debug, Clone, Default)]
pub struct DetectionResults(pub(crate) Vec<DetectionResult>);

impl DetectionResults {
    pub fn best(&self) -> Option<&DetectionResult> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DetectionResult> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl IntoIterator for DetectionResults {
    type Item = DetectionResult;
    type IntoIter = std::vec::IntoIter<DetectionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Settings threaded through `detect`/`detect_all`/[`crate::streaming`]
/// (spec §4.3). Mirrors the teacher's `NormalizerSettings` shape.
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// Era tiers the orchestrator will consider. Defaults to `MODERN_WEB`.
    pub era_filter: Era,
    /// Maximum number of leading bytes analyzed.
    pub max_bytes: usize,
    /// If true, `detect_all` keeps hypotheses below the confidence floor.
    pub ignore_threshold: bool,
    /// If true, legacy single-byte encodings are preferred over their
    /// modern-era near-equivalents when confidences tie (spec §9).
    pub prefer_legacy: bool,
    /// Buffer-length boundary [`crate::streaming::UniversalDetector::feed`]
    /// re-checks the quick stages on (spec §4.13). Not consulted outside
    /// streaming.
    pub chunk_size: usize,
    /// Opaque post-processing hint passed through unchanged onto every
    /// [`DetectionResult`] this call produces (spec §4.3); never acted on
    /// here.
    pub should_rename_legacy: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        DetectOptions {
            era_filter: Era::default(),
            max_bytes: crate::consts::DEFAULT_MAX_BYTES,
            ignore_threshold: false,
            prefer_legacy: false,
            chunk_size: crate::consts::DEFAULT_CHUNK_SIZE,
            should_rename_legacy: false,
        }
    }
}
