//! Decoder abstraction (spec §9 design notes): `try_decode(bytes, encoding)`
//! hides every encoding-specific decode strategy behind one call. Grounded
//! on the teacher crate's `enc::Encoding::decode_updated`
//! (`charset-normalizer-rs/src/enc.rs`), which wraps `encoding_rs`'s
//! `Decoder::decode_to_string_without_replacement` and nibbles the trailing
//! byte off on failure to retry; this crate additionally backs
//! single-byte-table, UTF-32 and structural-only encodings that
//! `encoding_rs` has no decoder for at all.

use crate::errors::DecodeFailure;
use crate::registry::{DecoderKind, Encoding, EscapeKind, MultiByteKind};

pub(crate) fn try_decode(bytes: &[u8], encoding: &Encoding) -> Result<String, DecodeFailure> {
    match encoding.decoder {
        DecoderKind::Ascii => decode_ascii(bytes),
        DecoderKind::Whatwg(enc) => decode_whatwg(bytes, enc),
        DecoderKind::Utf32 { big_endian } => decode_utf32(bytes, big_endian),
        DecoderKind::SingleByteTable(table) => Ok(decode_single_byte_table(bytes, table)),
        DecoderKind::Structural(kind) => decode_structural(bytes, kind),
        DecoderKind::Escape(kind) => decode_escape(bytes, kind),
    }
}

fn decode_ascii(bytes: &[u8]) -> Result<String, DecodeFailure> {
    for (i, &b) in bytes.iter().enumerate() {
        if b >= 0x80 {
            return Err(DecodeFailure::InvalidAt(i));
        }
    }
    // SAFETY-free: every byte has already been checked to be < 0x80.
    Ok(bytes.iter().map(|&b| b as char).collect())
}

/// Mirrors the teacher's `decode_updated`: ask `encoding_rs` for a strict
/// decode, and on failure report the byte offset it stopped at rather than
/// inserting replacement characters.
fn decode_whatwg(bytes: &[u8], enc: &'static encoding_rs::Encoding) -> Result<String, DecodeFailure> {
    let mut decoder = enc.new_decoder_without_bom_handling();
    let mut out = String::with_capacity(bytes.len());
    let mut consumed = 0usize;
    loop {
        let remaining = &bytes[consumed..];
        let (result, read) =
            decoder.decode_to_string_without_replacement(remaining, &mut out, true);
        match result {
            encoding_rs::DecoderResult::InputEmpty => return Ok(out),
            encoding_rs::DecoderResult::OutputFull => {
                out.reserve(bytes.len());
            }
            encoding_rs::DecoderResult::Malformed(_, _) => {
                return Err(DecodeFailure::InvalidAt(consumed + read));
            }
        }
        consumed += read;
        if read == 0 && remaining.is_empty() {
            return Ok(out);
        }
    }
}

fn decode_utf32(bytes: &[u8], big_endian: bool) -> Result<String, DecodeFailure> {
    if bytes.len() % 4 != 0 {
        return Err(DecodeFailure::InvalidAt(bytes.len() - bytes.len() % 4));
    }
    let mut out = String::with_capacity(bytes.len() / 4);
    for (i, chunk) in bytes.chunks_exact(4).enumerate() {
        let raw = if big_endian {
            u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])
        } else {
            u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])
        };
        match char::from_u32(raw) {
            Some(ch) => out.push(ch),
            None => return Err(DecodeFailure::InvalidAt(i * 4)),
        }
    }
    Ok(out)
}

fn decode_single_byte_table(bytes: &[u8], table: &[char; 256]) -> String {
    bytes.iter().map(|&b| table[b as usize]).collect()
}

/// Structural-only decoders (§4.10) have no full charmap of their own, so
/// byte-validity (§4.9) never eliminates them outright on a decode error;
/// elimination instead happens in the structural probing stage via
/// [`probe_multi_byte`]'s coverage, matching a `coding_state` that degrades
/// gradually rather than hard-failing on the first bad byte. The returned
/// placeholder text is never consulted by confidence/language assignment.
fn decode_structural(bytes: &[u8], _kind: MultiByteKind) -> Result<String, DecodeFailure> {
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

/// Result of a lenient multi-byte probe (§4.10): how much of the stream
/// consumed as valid lead/trail sequences (`coverage`), and the histogram
/// of leading bytes seen in sequences that did validate, used to compute
/// `distribution_score` against a trained leading-byte frequency table.
pub(crate) struct ProbeResult {
    pub(crate) coverage: f32,
    pub(crate) lead_byte_counts: [u32; 256],
}

/// Walk `bytes` under `kind`'s lead/trail grammar without aborting on the
/// first invalid byte: an invalid lead or trail just advances by one byte
/// uncounted, approximating a `coding_state` that can recover from noise
/// rather than latching into `ERROR` permanently.
pub(crate) fn probe_multi_byte(bytes: &[u8], kind: MultiByteKind) -> ProbeResult {
    let mut covered = 0usize;
    let mut lead_byte_counts = [0u32; 256];
    let mut i = 0usize;
    while i < bytes.len() {
        let b = bytes[i];
        if b < 0x80 {
            covered += 1;
            i += 1;
            continue;
        }
        if let Some(width) = lead_width(b, kind) {
            let sequence_valid =
                i + width <= bytes.len() && bytes[i + 1..i + width].iter().all(|&t| is_valid_trail(t, kind));
            if sequence_valid {
                covered += width;
                lead_byte_counts[b as usize] += 1;
                i += width;
                continue;
            }
        }
        i += 1;
    }
    let coverage = covered as f32 / bytes.len().max(1) as f32;
    ProbeResult {
        coverage,
        lead_byte_counts,
    }
}

fn lead_width(b: u8, kind: MultiByteKind) -> Option<usize> {
    match kind {
        MultiByteKind::Utf8 => {
            if b & 0b1110_0000 == 0b1100_0000 {
                Some(2)
            } else if b & 0b1111_0000 == 0b1110_0000 {
                Some(3)
            } else if b & 0b1111_1000 == 0b1111_0000 {
                Some(4)
            } else {
                None
            }
        }
        MultiByteKind::Gb18030 => {
            if (0x81..=0xFE).contains(&b) {
                Some(2)
            } else {
                None
            }
        }
        MultiByteKind::Big5 => {
            if (0x81..=0xFE).contains(&b) {
                Some(2)
            } else {
                None
            }
        }
        MultiByteKind::EucJp | MultiByteKind::EucKr => {
            if (0xA1..=0xFE).contains(&b) {
                Some(2)
            } else {
                None
            }
        }
        MultiByteKind::Cp949 => {
            if (0x81..=0xFE).contains(&b) {
                Some(2)
            } else {
                None
            }
        }
        MultiByteKind::ShiftJis => {
            if (0x81..=0x9F).contains(&b) || (0xE0..=0xFC).contains(&b) {
                Some(2)
            } else {
                None
            }
        }
        MultiByteKind::Johab => {
            if (0x84..=0xD3).contains(&b) || (0xD8..=0xDE).contains(&b) || (0xE0..=0xF9).contains(&b) {
                Some(2)
            } else {
                None
            }
        }
    }
}

fn is_valid_trail(b: u8, kind: MultiByteKind) -> bool {
    match kind {
        MultiByteKind::Utf8 => (0x80..=0xBF).contains(&b),
        MultiByteKind::Gb18030 => (0x40..=0xFE).contains(&b) && b != 0x7F,
        MultiByteKind::Big5 => (0x40..=0x7E).contains(&b) || (0xA1..=0xFE).contains(&b),
        MultiByteKind::EucJp | MultiByteKind::EucKr | MultiByteKind::Cp949 => {
            (0xA1..=0xFE).contains(&b) || (0x41..=0xFE).contains(&b)
        }
        MultiByteKind::ShiftJis => (0x40..=0xFC).contains(&b) && b != 0x7F,
        MultiByteKind::Johab => (0x31..=0xFE).contains(&b),
    }
}

/// Run one of the escape-sequence grammars (§4.6) purely as a validity
/// check: if the byte stream never violates the state machine, the decode
/// "succeeds" with a lossy placeholder, matching structural-only semantics.
fn decode_escape(bytes: &[u8], kind: EscapeKind) -> Result<String, DecodeFailure> {
    crate::stages::escape::validate(bytes, kind)?;
    Ok(String::from_utf8_lossy(bytes).into_owned())
}
