//! Internal error kinds (spec §7).
//!
//! The public detection surface never raises for undetectable data: `detect`/
//! `detect_all` always return, falling back to the "not detected" sentinel.
//! The kinds here are used internally to classify failures without
//! propagating most of them upward; only [`DetectError::MalformedModel`] can
//! reach a caller, and only from process-wide model-store initialization.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    /// The packed model blob failed its magic/version check.
    MalformedModel(String),
    /// `encoding_era` bitmask did not correspond to any known tier.
    UnknownEra(u32),
    /// I/O failure reading a file via [`crate::from_path`].
    Io { path: PathBuf, message: String },
}

impl fmt::Display for DetectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectError::MalformedModel(reason) => {
                write!(f, "model store initialization failed: {reason}")
            }
            DetectError::UnknownEra(mask) => write!(f, "unknown encoding era bitmask: {mask:#x}"),
            DetectError::Io { path, message } => {
                write!(f, "error reading {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for DetectError {}

/// Internal-only decode-failure classification used by the byte-validity
/// filter (§4.9) and structural probers (§4.10). Never escapes the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecodeFailure {
    /// Decoding failed at the given byte offset.
    InvalidAt(usize),
}
