//! `chardetect` CLI front-end (spec §6), behind the `cli` feature.
//!
//! Grounded on the teacher crate's `normalizer.rs`: `clap::Parser` for
//! argument parsing, `env_logger::Builder::from_env` wired to `--verbose`,
//! one JSON object per input unless `--minimal` is given.

use clap::Parser;
use chardetect_rs::registry::{self, Era};
use chardetect_rs::{detect_path, DetectOptions, DetectionResult};
use std::path::PathBuf;
use std::process::ExitCode;

/// Identify the character encoding (and, when possible, language) of one
/// or more files.
#[derive(Parser, Debug)]
#[command(name = "chardetect", version, about)]
struct Args {
    /// Files to analyze.
    paths: Vec<PathBuf>,

    /// Only print the detected encoding name, one per line.
    #[arg(short = 'm', long)]
    minimal: bool,

    /// Prefer legacy single-byte encodings over modern-era near
    /// equivalents when confidences tie.
    #[arg(short = 'l', long)]
    legacy: bool,

    /// Restrict detection to one era tier: modern-web, legacy-iso,
    /// legacy-mac, legacy-regional, dos, mainframe, all.
    #[arg(short = 'e', long)]
    era: Option<String>,

    /// Emit debug-level logs about the detection process to stderr.
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Accepts either a named tier or a raw `encoding_era` bitmask (decimal or
/// `0x`-prefixed hex), validated through [`registry::era_from_bits`] so an
/// out-of-range bitmask is rejected rather than silently truncated.
fn parse_era(name: &str) -> Result<Era, Option<u32>> {
    match name.to_lowercase().as_str() {
        "modern-web" | "modern_web" => return Ok(Era::MODERN_WEB),
        "legacy-iso" | "legacy_iso" => return Ok(Era::LEGACY_ISO),
        "legacy-mac" | "legacy_mac" => return Ok(Era::LEGACY_MAC),
        "legacy-regional" | "legacy_regional" => return Ok(Era::LEGACY_REGIONAL),
        "dos" => return Ok(Era::DOS),
        "mainframe" => return Ok(Era::MAINFRAME),
        "all" => return Ok(Era::ALL),
        _ => {}
    }

    let bits = name
        .strip_prefix("0x")
        .map(|hex| u32::from_str_radix(hex, 16))
        .unwrap_or_else(|| name.parse::<u32>());
    match bits {
        Ok(bits) => registry::era_from_bits(bits).map_err(|_| Some(bits)),
        Err(_) => Err(None),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let era_filter = match args.era.as_deref().map(parse_era) {
        Some(Ok(era)) => era,
        Some(Err(_)) => {
            eprintln!("chardetect: unknown era {:?}", args.era.unwrap());
            return ExitCode::FAILURE;
        }
        None => Era::default(),
    };

    let options = DetectOptions {
        era_filter,
        prefer_legacy: args.legacy,
        ..DetectOptions::default()
    };

    if args.paths.is_empty() {
        eprintln!("chardetect: reading from stdin is not yet supported, pass file paths");
        return ExitCode::FAILURE;
    }

    let mut any_undetected = false;
    for path in &args.paths {
        let display_path = path.display().to_string();
        match detect_path(path, Some(options.clone())) {
            Ok(result) => {
                if result.is_none() {
                    any_undetected = true;
                }
                print_result(&display_path, result.as_ref(), args.minimal);
            }
            Err(err) => {
                eprintln!("chardetect: {err}");
                any_undetected = true;
            }
        }
    }

    if any_undetected {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_result(path: &str, result: Option<&DetectionResult>, minimal: bool) {
    match result {
        Some(r) if minimal => println!("{}", r.encoding),
        Some(r) => println!("{path}: {} with confidence {:.2}", r.encoding, r.confidence),
        None if minimal => println!("unknown"),
        None => println!("{path}: unknown with confidence 0.00"),
    }
}
