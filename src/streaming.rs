//! Streaming Detector (spec §4.13): `feed`/`close`/`reset` over a growing
//! buffer, with a quick deterministic prefix check run on every `feed` so
//! callers get an answer as early as possible.
//!
//! Grounded on the teacher crate's `from_bytes` being structured as "try
//! progressively more expensive checks, stop at the first confident
//! answer" (`charset-normalizer-rs/src/lib.rs`); here that same early-exit
//! shape is spread across repeated `feed` calls instead of one pass over a
//! complete buffer.
//!
//! Not thread-safe: a [`UniversalDetector`] owns a growing buffer and
//! cached result with no internal synchronization. Use one instance per
//! stream, confined to a single thread.

use crate::context::Context;
use crate::entity::{DetectOptions, DetectionResult};
use crate::orchestrator;
use crate::stages::{self, Stage, StageOutcome};

/// Stages cheap and deterministic enough to re-run on every `feed` without
/// waiting for the stream to close. Multi-candidate narrowing and
/// statistical scoring only run once, in [`UniversalDetector::close`].
fn quick_stages() -> Vec<Box<dyn Stage + Send + Sync>> {
    vec![
        Box::new(stages::bom::BomStage),
        Box::new(stages::utf16_32::Utf1632Stage),
        Box::new(stages::escape::EscapeStage),
        Box::new(stages::markup::MarkupStage),
    ]
}

pub struct UniversalDetector {
    buffer: Vec<u8>,
    options: DetectOptions,
    done: bool,
    cached: Option<DetectionResult>,
}

impl UniversalDetector {
    pub fn new() -> UniversalDetector {
        UniversalDetector::with_options(DetectOptions::default())
    }

    pub fn with_options(options: DetectOptions) -> UniversalDetector {
        UniversalDetector {
            buffer: Vec::new(),
            options,
            done: false,
            cached: None,
        }
    }

    /// Append `chunk` and, if the buffer has just crossed a `chunk_size`
    /// boundary (spec §4.13), re-run the quick deterministic stages. The
    /// very first feed always checks regardless of size, so a short first
    /// chunk containing e.g. a BOM is still detected immediately. Returns
    /// the cached result the moment one of them is authoritative; returns
    /// `None` while still undecided or while a mid-boundary feed was
    /// skipped.
    pub fn feed(&mut self, chunk: &[u8]) -> Option<&DetectionResult> {
        if self.done {
            return self.cached.as_ref();
        }
        let prev_len = self.buffer.len();
        self.buffer.extend_from_slice(chunk);
        let new_len = self.buffer.len();

        let chunk_size = self.options.chunk_size.max(1);
        let crossed_boundary = prev_len == 0 || prev_len / chunk_size != new_len / chunk_size;
        if !crossed_boundary || new_len > self.options.max_bytes {
            return self.cached.as_ref();
        }

        let mut ctx = Context::new(&self.buffer, self.options.max_bytes);
        for stage in quick_stages() {
            if let StageOutcome::Verdict {
                encoding,
                confidence,
                language,
            } = stage.run(&mut ctx, &self.options)
            {
                self.cached = Some(DetectionResult::new(
                    encoding,
                    confidence,
                    language,
                    self.options.should_rename_legacy,
                ));
                self.done = true;
                break;
            }
        }
        self.cached.as_ref()
    }

    /// Run the full pipeline once over everything fed so far and cache it.
    /// Idempotent: calling `close` again just returns the cached result.
    pub fn close(&mut self) -> &DetectionResult {
        if !self.done {
            let result = orchestrator::detect_one(&self.buffer, &self.options)
                .unwrap_or_else(|| DetectionResult::new("unknown", 0.0, None, self.options.should_rename_legacy));
            self.cached = Some(result);
            self.done = true;
        }
        self.cached.as_ref().expect("close always populates cached")
    }

    /// Clear all buffered bytes and cached state, ready to detect a new
    /// stream with the same options.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.done = false;
        self.cached = None;
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Default for UniversalDetector {
    fn default() -> UniversalDetector {
        UniversalDetector::new()
    }
}
