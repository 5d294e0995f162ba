//! Pipeline Context (spec §4.2): the mutable scratchpad threaded through
//! the ordered stage list by the orchestrator.
//!
//! Grounded on the teacher crate's pattern of passing a borrowed `&[u8]`
//! plus a handful of precomputed scalars into each `MessDetectorPlugin`
//! (`charset-normalizer-rs/src/md.rs::mess_ratio`); this crate collects
//! the same kind of precomputed, reusable facts into one struct so later
//! stages don't redo work earlier stages already did.

use crate::language::Language;
use crate::registry::Encoding;
use ahash::HashMap;

/// One still-alive encoding candidate as stages narrow the field.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub(crate) encoding: &'static Encoding,
    pub(crate) confidence: f32,
    pub(crate) language: Option<Language>,
    /// Set once the statistical stage has scored this candidate against a
    /// trained bigram profile, so the orchestrator knows whether a
    /// sub-floor confidence should be clamped up (spec §4.11) rather than
    /// left at its pre-scoring structural value.
    pub(crate) scored: bool,
}

pub(crate) struct Context<'a> {
    pub(crate) input: &'a [u8],
    pub(crate) prefix: &'a [u8],
    pub(crate) non_ascii_count: usize,
    pub(crate) null_count: usize,
    pub(crate) candidates: Vec<Candidate>,
    /// Set by the UTF-16/32 pattern stage once it has run, regardless of
    /// verdict: a `true` value means no wide-character pattern was found,
    /// so the binary guard's null-byte rule (§4.7) may safely fire.
    pub(crate) wide_char_pattern_ruled_out: bool,
    decode_cache: HashMap<&'static str, Result<String, usize>>,
}

impl<'a> Context<'a> {
    pub(crate) fn new(input: &'a [u8], max_bytes: usize) -> Context<'a> {
        let prefix_len = input.len().min(max_bytes);
        let prefix = &input[..prefix_len];
        let mut non_ascii_count = 0usize;
        let mut null_count = 0usize;
        for &b in prefix {
            if b >= 0x80 {
                non_ascii_count += 1;
            }
            if b == 0x00 {
                null_count += 1;
            }
        }
        Context {
            input,
            prefix,
            non_ascii_count,
            null_count,
            candidates: Vec::new(),
            wide_char_pattern_ruled_out: false,
            decode_cache: HashMap::default(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Decode `prefix` through `encoding`, memoizing the result for the
    /// lifetime of this context. Later stages (structural probing,
    /// statistical scoring) frequently need the same decode more than once.
    pub(crate) fn decode(&mut self, encoding: &'static Encoding) -> Result<&str, usize> {
        let entry = self
            .decode_cache
            .entry(encoding.name())
            .or_insert_with(|| match encoding.try_decode(self.prefix) {
                Ok(text) => Ok(text),
                Err(crate::errors::DecodeFailure::InvalidAt(i)) => Err(i),
            });
        entry.as_deref().map_err(|&i| i)
    }

    pub(crate) fn retain_candidates<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Candidate) -> bool,
    {
        self.candidates.retain(|c| keep(c));
    }
}
