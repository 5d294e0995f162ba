use crate::registry::{candidates_for_era, is_multibyte, resolve, Era};

#[test]
fn resolves_canonical_name() {
    let enc = resolve("utf-8").expect("utf-8 must be registered");
    assert_eq!(enc.name(), "utf-8");
}

#[test]
fn resolves_case_insensitive_alias() {
    let enc = resolve("UTF8").expect("UTF8 alias must resolve");
    assert_eq!(enc.name(), "utf-8");

    let enc = resolve("Shift-JIS").expect("Shift-JIS alias must resolve");
    assert_eq!(enc.name(), "shift_jis");
}

#[test]
fn unknown_name_does_not_resolve() {
    assert!(resolve("not-a-real-encoding").is_none());
}

#[test]
fn iso_8859_1_and_windows_1252_are_distinct_entries() {
    let latin1 = resolve("iso-8859-1").expect("iso-8859-1 registered");
    let win1252 = resolve("windows-1252").expect("windows-1252 registered");
    assert_ne!(latin1.name(), win1252.name());
    assert!(latin1.era().contains(Era::LEGACY_ISO));
    assert!(win1252.era().contains(Era::MODERN_WEB));
}

#[test]
fn era_filtering_excludes_other_tiers() {
    let modern = candidates_for_era(Era::MODERN_WEB);
    assert!(modern.iter().any(|e| e.name() == "utf-8"));
    assert!(!modern.iter().any(|e| e.name() == "cp037"));

    let mainframe = candidates_for_era(Era::MAINFRAME);
    assert!(mainframe.iter().any(|e| e.name() == "cp037"));
    assert!(!mainframe.iter().any(|e| e.name() == "utf-8"));
}

#[test]
fn all_era_includes_every_tier() {
    let all = candidates_for_era(Era::ALL);
    assert!(all.iter().any(|e| e.name() == "cp437"));
    assert!(all.iter().any(|e| e.name() == "koi8-r"));
    assert!(all.iter().any(|e| e.name() == "johab"));
}

#[test]
fn multi_byte_flags_match_expectations() {
    assert!(is_multibyte("gb18030"));
    assert!(is_multibyte("shift_jis"));
    assert!(!is_multibyte("windows-1251"));
    assert!(!is_multibyte("ascii"));
}
