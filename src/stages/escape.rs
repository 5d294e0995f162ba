//! Escape stage (spec §4.6): ISO-2022-JP, ISO-2022-KR and HZ-GB-2312 all
//! signal their encoding with explicit escape sequences, so a small state
//! machine can detect (and, via [`validate`], byte-validate) them directly
//! rather than going through statistical scoring.
//!
//! Grounded on the teacher crate's escape/mess-detection plugins under
//! `charset-normalizer-rs/src/md.rs`, which run small deterministic
//! scanners over the buffer before any probabilistic scoring; the
//! state-machine shape here is the same idea applied to ISO-2022/HZ
//! escape grammars instead of character-class ratios.

use super::{Stage, StageOutcome};
use crate::consts::ESCAPE_CONFIDENCE;
use crate::context::Context;
use crate::entity::DetectOptions;
use crate::errors::DecodeFailure;
use crate::registry::EscapeKind;

pub(crate) struct EscapeStage;

impl Stage for EscapeStage {
    fn name(&self) -> &'static str {
        "escape"
    }

    fn run(&self, ctx: &mut Context, _options: &DetectOptions) -> StageOutcome {
        for kind in [EscapeKind::Iso2022Jp, EscapeKind::Iso2022Kr, EscapeKind::HzGb2312] {
            if find_leading_escape(ctx.prefix, kind) && validate(ctx.prefix, kind).is_ok() {
                let encoding = match kind {
                    EscapeKind::Iso2022Jp => "iso-2022-jp",
                    EscapeKind::Iso2022Kr => "iso-2022-kr",
                    EscapeKind::HzGb2312 => "hz-gb-2312",
                };
                return StageOutcome::Verdict {
                    encoding,
                    confidence: ESCAPE_CONFIDENCE,
                    language: None,
                };
            }
        }
        StageOutcome::Skip
    }
}

fn find_leading_escape(bytes: &[u8], kind: EscapeKind) -> bool {
    match kind {
        EscapeKind::Iso2022Jp => {
            bytes.windows(3).take(64).any(|w| {
                w == [0x1B, b'$', b'B']
                    || w == [0x1B, b'$', b'@']
                    || w == [0x1B, b'(', b'B']
                    || w == [0x1B, b'(', b'J']
            })
        }
        EscapeKind::Iso2022Kr => bytes.windows(4).take(64).any(|w| w == [0x1B, b'$', b')', b'C']),
        EscapeKind::HzGb2312 => bytes.windows(2).take(256).any(|w| w == [b'~', b'{']),
    }
}

/// Validate that `bytes` never violates the escape grammar for `kind`.
/// Used both by the stage above and by [`crate::decode::try_decode`] to
/// byte-validate candidates that survive the escape stage but get
/// re-checked later in the pipeline.
pub(crate) fn validate(bytes: &[u8], kind: EscapeKind) -> Result<(), DecodeFailure> {
    match kind {
        EscapeKind::Iso2022Jp => validate_iso2022jp(bytes),
        EscapeKind::Iso2022Kr => validate_iso2022kr(bytes),
        EscapeKind::HzGb2312 => validate_hz(bytes),
    }
}

/// ISO-2022-JP: `ESC $ B` / `ESC $ @` switch into two-byte JIS mode, `ESC (
/// B` / `ESC ( J` switch back to single-byte ASCII/Roman. In two-byte mode,
/// bytes must come in 0x21-0x7E pairs.
fn validate_iso2022jp(bytes: &[u8]) -> Result<(), DecodeFailure> {
    let mut i = 0usize;
    let mut two_byte_mode = false;
    while i < bytes.len() {
        if bytes[i] == 0x1B {
            if bytes[i..].starts_with(&[0x1B, b'$', b'B']) || bytes[i..].starts_with(&[0x1B, b'$', b'@']) {
                two_byte_mode = true;
                i += 3;
                continue;
            }
            if bytes[i..].starts_with(&[0x1B, b'(', b'B']) || bytes[i..].starts_with(&[0x1B, b'(', b'J']) {
                two_byte_mode = false;
                i += 3;
                continue;
            }
            return Err(DecodeFailure::InvalidAt(i));
        }
        if bytes[i] == b'\n' || bytes[i] == b'\r' {
            two_byte_mode = false;
            i += 1;
            continue;
        }
        if two_byte_mode {
            if i + 1 >= bytes.len() {
                return Err(DecodeFailure::InvalidAt(i));
            }
            let (a, b) = (bytes[i], bytes[i + 1]);
            if !(0x21..=0x7E).contains(&a) || !(0x21..=0x7E).contains(&b) {
                return Err(DecodeFailure::InvalidAt(i));
            }
            i += 2;
        } else {
            if bytes[i] >= 0x80 {
                return Err(DecodeFailure::InvalidAt(i));
            }
            i += 1;
        }
    }
    Ok(())
}

/// ISO-2022-KR: a single leading `ESC $ ) C` designates KS X 1001; after
/// that, bytes alternate between ASCII and a shift-in/out byte (0x0E/0x0F)
/// controlled two-byte regime.
fn validate_iso2022kr(bytes: &[u8]) -> Result<(), DecodeFailure> {
    let mut i = 0usize;
    let mut two_byte_mode = false;
    let mut seen_designator = false;
    while i < bytes.len() {
        if bytes[i..].starts_with(&[0x1B, b'$', b')', b'C']) {
            seen_designator = true;
            i += 4;
            continue;
        }
        match bytes[i] {
            0x0E => {
                two_byte_mode = true;
                i += 1;
            }
            0x0F => {
                two_byte_mode = false;
                i += 1;
            }
            _ if two_byte_mode => {
                if i + 1 >= bytes.len() {
                    return Err(DecodeFailure::InvalidAt(i));
                }
                let (a, b) = (bytes[i], bytes[i + 1]);
                if !(0x21..=0x7E).contains(&a) || !(0x21..=0x7E).contains(&b) {
                    return Err(DecodeFailure::InvalidAt(i));
                }
                i += 2;
            }
            b if b < 0x80 => i += 1,
            _ => return Err(DecodeFailure::InvalidAt(i)),
        }
    }
    if seen_designator {
        Ok(())
    } else {
        Err(DecodeFailure::InvalidAt(0))
    }
}

/// HZ-GB-2312: `~{` enters two-byte GB 2312 mode, `~}` leaves it, `~~`
/// escapes a literal tilde, `~\n` is a line-continuation no-op.
fn validate_hz(bytes: &[u8]) -> Result<(), DecodeFailure> {
    let mut i = 0usize;
    let mut two_byte_mode = false;
    while i < bytes.len() {
        if bytes[i] == b'~' && i + 1 < bytes.len() {
            match bytes[i + 1] {
                b'{' => {
                    two_byte_mode = true;
                    i += 2;
                    continue;
                }
                b'}' => {
                    two_byte_mode = false;
                    i += 2;
                    continue;
                }
                b'~' => {
                    i += 2;
                    continue;
                }
                b'\n' => {
                    i += 2;
                    continue;
                }
                _ => {}
            }
        }
        if two_byte_mode {
            if i + 1 >= bytes.len() {
                return Err(DecodeFailure::InvalidAt(i));
            }
            let (a, b) = (bytes[i], bytes[i + 1]);
            if !(0x21..=0x7E).contains(&a) || !(0x21..=0x7E).contains(&b) {
                return Err(DecodeFailure::InvalidAt(i));
            }
            i += 2;
        } else {
            if bytes[i] >= 0x80 {
                return Err(DecodeFailure::InvalidAt(i));
            }
            i += 1;
        }
    }
    Ok(())
}
