//! Model Store (spec §4, §6): process-wide, lazily-initialized bigram
//! frequency profiles used by the statistical scoring stage.
//!
//! Grounded on the teacher crate's `Lazy<HashMap<...>>` statics (e.g.
//! `enc::BY_NAME`, `utils::` cached lookups in `charset-normalizer-rs`):
//! one `once_cell::sync::Lazy` built once per process, read-only
//! thereafter, no locking on the hot path. The blob itself is produced
//! offline by `tools/gen_models.py` and embedded with `include_bytes!`
//! so there is no filesystem dependency at runtime.

use crate::consts::{BIGRAM_TABLE_SIZE, MODEL_MAGIC, MODEL_VERSION};
use crate::errors::DetectError;
use crate::language::Language;
use ahash::HashMap;
use once_cell::sync::Lazy;

pub(crate) struct BigramProfile {
    pub(crate) language: Language,
    pub(crate) encoding: String,
    pub(crate) table: Box<[u8]>,
    pub(crate) norm: f32,
}

pub(crate) struct ModelStore {
    profiles: Vec<BigramProfile>,
    by_key: HashMap<String, usize>,
}

impl ModelStore {
    fn parse(blob: &[u8]) -> Result<ModelStore, DetectError> {
        if blob.len() < 10 || &blob[0..4] != MODEL_MAGIC {
            return Err(DetectError::MalformedModel("bad magic".into()));
        }
        let version = u16::from_le_bytes([blob[4], blob[5]]);
        if version != MODEL_VERSION {
            return Err(DetectError::MalformedModel(format!(
                "unsupported model version {version}"
            )));
        }
        let count = u32::from_le_bytes([blob[6], blob[7], blob[8], blob[9]]) as usize;
        let mut cursor = 10usize;
        let mut profiles = Vec::with_capacity(count);
        let mut by_key = HashMap::default();

        for _ in 0..count {
            let key_len = read_u16(blob, cursor)? as usize;
            cursor += 2;
            let key_bytes = slice(blob, cursor, key_len)?;
            let key = std::str::from_utf8(key_bytes)
                .map_err(|_| DetectError::MalformedModel("non-utf8 key".into()))?
                .to_string();
            cursor += key_len;

            let table_bytes = slice(blob, cursor, BIGRAM_TABLE_SIZE)?;
            let table: Box<[u8]> = table_bytes.into();
            cursor += BIGRAM_TABLE_SIZE;

            let norm_bytes = slice(blob, cursor, 4)?;
            let norm = f32::from_le_bytes([norm_bytes[0], norm_bytes[1], norm_bytes[2], norm_bytes[3]]);
            cursor += 4;

            let (language_part, encoding_part) = key
                .split_once(':')
                .ok_or_else(|| DetectError::MalformedModel(format!("malformed key {key}")))?;
            let language = Language::from_key(language_part)
                .ok_or_else(|| DetectError::MalformedModel(format!("unknown language {language_part}")))?;

            by_key.insert(key.clone(), profiles.len());
            profiles.push(BigramProfile {
                language,
                encoding: encoding_part.to_string(),
                table,
                norm,
            });
        }

        Ok(ModelStore { profiles, by_key })
    }

    pub(crate) fn get(&self, language: Language, encoding: &str) -> Option<&BigramProfile> {
        let key = format!("{}:{}", language.as_key(), encoding);
        self.by_key.get(&key).map(|&idx| &self.profiles[idx])
    }

    pub(crate) fn all_for_encoding(&self, encoding: &str) -> Vec<&BigramProfile> {
        self.profiles.iter().filter(|p| p.encoding == encoding).collect()
    }

    pub(crate) fn all_utf8_language_profiles(&self) -> Vec<&BigramProfile> {
        self.all_for_encoding("utf-8")
    }
}

fn slice(blob: &[u8], start: usize, len: usize) -> Result<&[u8], DetectError> {
    blob.get(start..start + len)
        .ok_or_else(|| DetectError::MalformedModel("truncated entry".into()))
}

fn read_u16(blob: &[u8], at: usize) -> Result<u16, DetectError> {
    let bytes = slice(blob, at, 2)?;
    Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
}

static MODEL_BLOB: &[u8] = include_bytes!("../assets/models.bin");

pub(crate) static STORE: Lazy<ModelStore> =
    Lazy::new(|| ModelStore::parse(MODEL_BLOB).expect("bundled model blob must parse"));
