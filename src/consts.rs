//! Calibration constants for the detection pipeline.
//!
//! Mirrors the teacher crate's pattern of a single `consts` module holding
//! the thresholds referenced from `lib.rs`/stage modules, rather than
//! scattering magic numbers (see `charset-normalizer-rs`'s `consts::
//! {TOO_BIG_SEQUENCE, TOO_SMALL_SEQUENCE, MAX_PROCESSED_BYTES}`).

/// Default prefix length analyzed by `detect`/`detect_all` (spec §4.3).
pub const DEFAULT_MAX_BYTES: usize = 200_000;

/// Default streaming chunk boundary (spec §4.3, §4.13).
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Cap on bytes scanned for UTF-16/32 null-byte patterning (spec §4.5).
pub const UTF16_32_SCAN_WINDOW: usize = 8192;

/// Fraction of null bytes in one residue class required to call UTF-32 (spec §4.5).
pub const UTF32_NULL_MAJORITY: f32 = 0.90;

/// Minimum overall null-byte density to call a UTF-16/32 pattern (spec §4.5).
pub const NULL_DENSITY_FLOOR: f32 = 0.25;

/// Confidence floor for the UTF-16/32 pattern stage (spec §4.5).
pub const UTF16_32_CONFIDENCE: f32 = 0.95;

/// Confidence assigned to an escape-stage verdict (spec §4.6).
pub const ESCAPE_CONFIDENCE: f32 = 0.99;

/// Window scanned by the binary guard for control-byte density (spec §4.7).
pub const BINARY_GUARD_WINDOW: usize = 64 * 1024;

/// Fraction of C0 control bytes (excluding TAB/LF/FF/CR) that marks data binary (spec §4.7).
pub const BINARY_CONTROL_FRACTION: f32 = 0.05;

/// Window scanned by the markup stage for `<meta charset>` / `<?xml encoding>` (spec §4.8).
pub const MARKUP_SCAN_WINDOW: usize = 8 * 1024;

/// Confidence assigned to a markup-stage verdict (spec §4.8).
pub const MARKUP_CONFIDENCE: f32 = 0.99;

/// Confidence assigned to the ASCII stage (spec §4.3 step 6).
pub const ASCII_CONFIDENCE: f32 = 0.95;

/// Confidence assigned to a successful UTF-8 structural validation (spec §4.3 step 7).
pub const UTF8_CONFIDENCE: f32 = 0.99;

/// Minimum multi-byte structural coverage to survive CJK gating (spec §4.9/§4.10, "Open Question").
pub const CJK_MIN_COVERAGE: f32 = 0.15;

/// Minimum number of bytes processed before the coverage floor is enforced (spec §4.10).
pub const CJK_GATING_MIN_BYTES: usize = 1024;

/// Maximum tie-break weight contributed by the Shift_JIS/EUC-JP Hiragana context analyzers (spec §4.10).
pub const CONTEXT_ANALYZER_MAX_WEIGHT: f32 = 0.1;

/// Confidence floor applied after statistical scoring (spec §4.11).
pub const STATISTICAL_CONFIDENCE_FLOOR: f32 = 0.20;

/// `detect_all` drops results below this confidence unless `ignore_threshold` (spec §4.3).
pub const DETECT_ALL_THRESHOLD: f32 = 0.20;

/// Era tie-break epsilon: confidences within this distance are considered tied (spec §4.3, §9).
pub const ERA_TIE_BREAK_EPSILON: f32 = 0.01;

/// Number of leading bytes of the decoded UTF-8 prefix used for tier-3 language fallback (spec §4.12).
pub const UTF8_LANGUAGE_FALLBACK_WINDOW: usize = 2048;

/// Search window for declarative encoding indication used by the markup stage (spec §4.8).
pub const DECLARED_ENCODING_SEARCH_ZONE: usize = 4096;

/// Size of a dense bigram table: 256 lead bytes * 256 trail bytes.
pub const BIGRAM_TABLE_SIZE: usize = 65_536;

/// Model blob magic bytes (spec §6).
pub const MODEL_MAGIC: &[u8; 4] = b"CHMD";

/// Model blob format version understood by this crate (spec §6).
pub const MODEL_VERSION: u16 = 1;

/// Confidence assigned to a BOM-stage verdict (spec §4.4): a byte-order
/// mark is treated as definitive.
pub const BOM_CONFIDENCE: f32 = 1.0;
