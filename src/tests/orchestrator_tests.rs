use crate::entity::DetectOptions;
use crate::orchestrator::{detect_all, detect_one};
use crate::registry::Era;

#[test]
fn empty_input_detects_nothing() {
    let result = detect_one(&[], &DetectOptions::default());
    assert!(result.is_none());
}

#[test]
fn pure_ascii_detects_as_ascii() {
    let result = detect_one(b"hello, world", &DetectOptions::default()).expect("ascii should detect");
    assert_eq!(result.encoding, "ascii");
}

#[test]
fn utf8_bom_short_circuits_to_utf8_sig() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice("héllo".as_bytes());
    let result = detect_one(&bytes, &DetectOptions::default()).expect("utf-8 bom should detect");
    assert_eq!(result.encoding, "utf-8-sig");
    assert!(result.confidence >= 0.99);
}

#[test]
fn valid_non_ascii_utf8_detects_as_utf8_with_language() {
    let text = "Der schnelle braune Fuchs springt über den faulen Hund während die Uhr tickt.";
    let result = detect_one(text.as_bytes(), &DetectOptions::default()).expect("utf-8 text should detect");
    assert_eq!(result.encoding, "utf-8");
    assert!(result.language.is_some());
}

#[test]
fn null_heavy_binary_is_flagged_as_octet_stream() {
    let mut bytes = vec![0u8; 4096];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = (i % 7) as u8; // mostly control bytes, no text structure
    }
    let result = detect_one(&bytes, &DetectOptions::default()).expect("binary guard should fire");
    assert_eq!(result.encoding, "application/octet-stream");
}

#[test]
fn windows_1251_russian_text_detects_with_language() {
    let text = "Быстрая коричневая лиса перепрыгивает через ленивую собаку.";
    let (bytes, _, had_errors) = encoding_rs::WINDOWS_1251.encode(text);
    assert!(!had_errors);
    let result = detect_one(&bytes, &DetectOptions::default()).expect("windows-1251 should detect");
    assert_eq!(result.encoding, "windows-1251");
    assert_eq!(result.language.as_deref(), Some("Russian"));
}

#[test]
fn detect_all_orders_results_best_first() {
    let text = "The quick brown fox jumps over the lazy dog.";
    let results = detect_all(text.as_bytes(), &DetectOptions::default());
    assert!(!results.is_empty());
    let confidences: Vec<f32> = results.iter().map(|r| r.confidence).collect();
    for window in confidences.windows(2) {
        assert!(window[0] >= window[1]);
    }
}

#[test]
fn era_filter_excludes_mainframe_candidates_by_default() {
    let options = DetectOptions {
        era_filter: Era::MODERN_WEB,
        ..DetectOptions::default()
    };
    let results = detect_all(b"\x40\x40\x40\x40", &options);
    assert!(results.iter().all(|r| r.encoding != "cp037"));
}
