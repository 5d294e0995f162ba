//! chardetect-rs
//! =============
//!
//! A universal character-encoding and natural-language detector.
//!
//! Given an opaque byte sequence, `detect`/`detect_all` identify the most
//! likely encoding among roughly sixty supported IANA/WHATWG names, report
//! a confidence in `[0, 1]`, and identify the dominant natural language
//! when the encoding or the statistical scoring stage can determine one.
//!
//! # Library
//!
//! * [`detect`] returns the single best guess, if any.
//! * [`detect_all`] returns every candidate above the confidence floor,
//!   best first.
//! * [`streaming::UniversalDetector`] wraps the same pipeline for
//!   incremental input (network sockets, chunked reads).
//!
//! ## Example
//!
//! ```rust
//! use chardetect_rs::detect;
//!
//! let bytes = "Привет, мир".as_bytes();
//! let result = detect(bytes, None).expect("utf-8 text always detects");
//! assert_eq!(result.encoding, "utf-8");
//! ```
//!
//! # CLI tool
//!
//! A `chardetect` binary is included behind the `cli` feature, mirroring
//! the standard `chardetect`/`file --mime-encoding` command-line surface.

mod bigram;
mod context;
mod decode;
mod models;
mod orchestrator;
mod stages;
mod tables;

pub mod consts;
pub mod entity;
pub mod errors;
pub mod language;
pub mod registry;
pub mod streaming;

#[cfg(test)]
mod tests;

pub use entity::{DetectOptions, DetectionResult, DetectionResults};
pub use errors::DetectError;
pub use registry::{Encoding, Era};
pub use streaming::UniversalDetector;

use log::trace;
use std::fs;
use std::path::Path;

/// Detect the best-guess encoding (and, where possible, language) for
/// `bytes`. Returns `None` only for empty input.
pub fn detect(bytes: &[u8], options: Option<DetectOptions>) -> Option<DetectionResult> {
    let options = options.unwrap_or_default();
    trace!("detect: {} byte(s), era_filter={:?}", bytes.len(), options.era_filter);
    orchestrator::detect_one(bytes, &options)
}

/// Detect every candidate encoding above the confidence floor (or all
/// candidates, if `options.ignore_threshold` is set), best first.
pub fn detect_all(bytes: &[u8], options: Option<DetectOptions>) -> DetectionResults {
    let options = options.unwrap_or_default();
    trace!("detect_all: {} byte(s), era_filter={:?}", bytes.len(), options.era_filter);
    orchestrator::detect_all(bytes, &options)
}

/// Read `path` and run [`detect`] over its contents.
pub fn detect_path(path: &Path, options: Option<DetectOptions>) -> Result<Option<DetectionResult>, DetectError> {
    let bytes = fs::read(path).map_err(|e| DetectError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(detect(&bytes, options))
}
