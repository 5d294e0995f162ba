use crate::registry::EscapeKind;
use crate::stages::escape::validate;

#[test]
fn iso2022jp_roundtrips_ascii_and_two_byte_mode() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"Hello ");
    bytes.extend_from_slice(&[0x1B, b'$', b'B']);
    bytes.extend_from_slice(&[0x24, 0x22, 0x24, 0x24]); // two valid JIS pairs
    bytes.extend_from_slice(&[0x1B, b'(', b'B']);
    bytes.extend_from_slice(b" world");
    assert!(validate(&bytes, EscapeKind::Iso2022Jp).is_ok());
}

#[test]
fn iso2022jp_rejects_truncated_two_byte_pair() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&[0x1B, b'$', b'B']);
    bytes.push(0x24); // missing trail byte
    assert!(validate(&bytes, EscapeKind::Iso2022Jp).is_err());
}

#[test]
fn iso2022kr_requires_designator() {
    let bytes = [0x0E, 0x21, 0x21, 0x0F];
    assert!(validate(&bytes, EscapeKind::Iso2022Kr).is_err());
}

#[test]
fn iso2022kr_valid_stream() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&[0x1B, b'$', b')', b'C']);
    bytes.extend_from_slice(b"ascii ");
    bytes.push(0x0E);
    bytes.extend_from_slice(&[0x21, 0x21]);
    bytes.push(0x0F);
    assert!(validate(&bytes, EscapeKind::Iso2022Kr).is_ok());
}

#[test]
fn hz_gb2312_valid_stream() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"plain ");
    bytes.extend_from_slice(b"~{");
    bytes.extend_from_slice(&[0x21, 0x21, 0x7E, 0x7E]);
    bytes.extend_from_slice(b"~}");
    bytes.extend_from_slice(b" more");
    assert!(validate(&bytes, EscapeKind::HzGb2312).is_ok());
}

#[test]
fn hz_gb2312_rejects_bad_pair_in_two_byte_mode() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"~{");
    bytes.push(0x01); // not in 0x21-0x7E
    bytes.push(0x21);
    assert!(validate(&bytes, EscapeKind::HzGb2312).is_err());
}
