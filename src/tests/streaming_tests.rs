use crate::entity::DetectOptions;
use crate::streaming::UniversalDetector;

#[test]
fn feed_detects_bom_immediately() {
    let mut detector = UniversalDetector::new();
    let result = detector.feed(&[0xEF, 0xBB, 0xBF]);
    assert_eq!(result.map(|r| r.encoding.as_str()), Some("utf-8-sig"));
    assert!(detector.is_done());
}

#[test]
fn feed_across_chunk_boundary_still_detects_bom() {
    let mut detector = UniversalDetector::with_options(DetectOptions {
        chunk_size: 4,
        ..DetectOptions::default()
    });
    assert!(detector.feed(&[0xEF]).is_none());
    assert!(!detector.is_done());
    let result = detector.feed(&[0xBB, 0xBF, b'h', b'i']);
    assert_eq!(result.map(|r| r.encoding.as_str()), Some("utf-8-sig"));
}

#[test]
fn close_falls_back_to_full_pipeline_for_ascii() {
    let mut detector = UniversalDetector::new();
    detector.feed(b"hello");
    let result = detector.close();
    assert_eq!(result.encoding, "ascii");
}

#[test]
fn close_is_idempotent() {
    let mut detector = UniversalDetector::new();
    detector.feed(b"hello world");
    let first = detector.close().clone();
    let second = detector.close();
    assert_eq!(first.encoding, second.encoding);
}

#[test]
fn reset_clears_buffered_state() {
    let mut detector = UniversalDetector::new();
    detector.feed(&[0xEF, 0xBB, 0xBF]);
    assert!(detector.is_done());
    detector.reset();
    assert!(!detector.is_done());
    detector.feed(b"plain ascii after reset");
    let result = detector.close();
    assert_eq!(result.encoding, "ascii");
}

#[test]
fn with_options_is_respected_across_feed_and_close() {
    let options = DetectOptions {
        ignore_threshold: true,
        ..DetectOptions::default()
    };
    let mut detector = UniversalDetector::with_options(options);
    detector.feed(b"plain ascii content");
    let result = detector.close();
    assert_eq!(result.encoding, "ascii");
}
