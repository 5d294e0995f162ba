//! End-to-end CLI tests (spec §6, §8), grounded on the teacher crate's
//! `tests/normalizer.rs` use of `assert_cmd`/`predicates` to drive the
//! compiled binary rather than calling library functions directly.

use assert_cmd::Command;
use predicates::prelude::*;

fn chardetect() -> Command {
    Command::cargo_bin("chardetect").expect("chardetect binary must build with the cli feature")
}

fn write_temp(bytes: &[u8]) -> tempfile_like::TempPath {
    tempfile_like::TempPath::new(bytes)
}

/// Minimal temp-file helper so this test file doesn't need a `tempfile`
/// dev-dependency beyond what the teacher crate already pulls in
/// transitively through `assert_cmd`.
mod tempfile_like {
    use std::fs::File;
    use std::io::Write as _;
    use std::path::{Path, PathBuf};

    pub struct TempPath(PathBuf);

    impl TempPath {
        pub fn new(bytes: &[u8]) -> TempPath {
            let mut path = std::env::temp_dir();
            let unique = format!("chardetect-rs-test-{:p}", bytes.as_ptr());
            path.push(unique);
            let mut file = File::create(&path).expect("create temp file");
            file.write_all(bytes).expect("write temp file");
            TempPath(path)
        }
    }

    impl AsRef<Path> for TempPath {
        fn as_ref(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for TempPath {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }
}

#[test]
fn minimal_flag_prints_bare_encoding_name() {
    let path = write_temp(b"hello, ascii world");
    chardetect()
        .arg("--minimal")
        .arg(path.as_ref())
        .assert()
        .success()
        .stdout(predicate::str::contains("ascii"));
}

#[test]
fn default_output_is_plain_text_with_confidence() {
    let path = write_temp(b"hello, ascii world");
    chardetect()
        .arg(path.as_ref())
        .assert()
        .success()
        .stdout(predicate::str::contains("ascii with confidence"));
}

#[test]
fn utf8_bom_file_detects_as_utf8_sig() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice("héllo, world".as_bytes());
    let path = write_temp(&bytes);
    chardetect()
        .arg("--minimal")
        .arg(path.as_ref())
        .assert()
        .success()
        .stdout(predicate::str::contains("utf-8-sig"));
}

#[test]
fn unknown_era_flag_fails() {
    let path = write_temp(b"hello");
    chardetect()
        .arg("-e")
        .arg("not-a-real-era")
        .arg(path.as_ref())
        .assert()
        .failure();
}

#[test]
fn nonexistent_file_fails_with_nonzero_exit() {
    chardetect()
        .arg("/nonexistent/path/does-not-exist.txt")
        .assert()
        .failure();
}

#[test]
fn stdin_without_paths_is_rejected() {
    let mut cmd = chardetect();
    cmd.write_stdin("whatever\n");
    cmd.assert().failure();
}
