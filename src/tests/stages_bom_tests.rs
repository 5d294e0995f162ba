use crate::context::Context;
use crate::entity::DetectOptions;
use crate::stages::{bom::BomStage, Stage, StageOutcome};

fn verdict_encoding(bytes: &[u8]) -> Option<&'static str> {
    let mut ctx = Context::new(bytes, crate::consts::DEFAULT_MAX_BYTES);
    match BomStage.run(&mut ctx, &DetectOptions::default()) {
        StageOutcome::Verdict { encoding, .. } => Some(encoding),
        _ => None,
    }
}

#[test]
fn detects_utf8_bom() {
    assert_eq!(verdict_encoding(&[0xEF, 0xBB, 0xBF, b'h', b'i']), Some("utf-8-sig"));
}

#[test]
fn detects_utf16le_bom() {
    assert_eq!(verdict_encoding(&[0xFF, 0xFE, b'h', 0x00]), Some("utf-16le"));
}

#[test]
fn detects_utf16be_bom() {
    assert_eq!(verdict_encoding(&[0xFE, 0xFF, 0x00, b'h']), Some("utf-16be"));
}

#[test]
fn utf32le_bom_takes_priority_over_utf16le() {
    // FF FE 00 00 is a prefix match for the UTF-16LE signature too; the
    // longer UTF-32 signature must win.
    assert_eq!(verdict_encoding(&[0xFF, 0xFE, 0x00, 0x00, b'h']), Some("utf-32le"));
}

#[test]
fn detects_utf32be_bom() {
    assert_eq!(verdict_encoding(&[0x00, 0x00, 0xFE, 0xFF, b'h']), Some("utf-32be"));
}

#[test]
fn no_bom_skips() {
    assert_eq!(verdict_encoding(b"plain ascii text"), None);
}
