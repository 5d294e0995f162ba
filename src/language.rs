//! Natural-language identifiers used by bigram profiles and the Language
//! Assignment tiers (spec §4.12).
//!
//! The enum and "single-language encoding" fixed table are grounded on the
//! teacher crate's `entity::Language` and `assets::ENCODING_TO_LANGUAGE`
//! (`charset-normalizer-rs`), trimmed to the set this crate actually trains
//! bigram profiles for.

use ahash::HashMap;
use once_cell::sync::Lazy;
use std::fmt;
use std::iter::FromIterator;

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
pub enum Language {
    English,
    German,
    French,
    Dutch,
    Italian,
    Polish,
    Spanish,
    Russian,
    Japanese,
    Portuguese,
    Chinese,
    Korean,
    Greek,
    Turkish,
    Arabic,
    Hebrew,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Language {
    pub(crate) fn as_key(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "German",
            Language::French => "French",
            Language::Dutch => "Dutch",
            Language::Italian => "Italian",
            Language::Polish => "Polish",
            Language::Spanish => "Spanish",
            Language::Russian => "Russian",
            Language::Japanese => "Japanese",
            Language::Portuguese => "Portuguese",
            Language::Chinese => "Chinese",
            Language::Korean => "Korean",
            Language::Greek => "Greek",
            Language::Turkish => "Turkish",
            Language::Arabic => "Arabic",
            Language::Hebrew => "Hebrew",
        }
    }

    pub(crate) fn from_key(key: &str) -> Option<Language> {
        Some(match key {
            "English" => Language::English,
            "German" => Language::German,
            "French" => Language::French,
            "Dutch" => Language::Dutch,
            "Italian" => Language::Italian,
            "Polish" => Language::Polish,
            "Spanish" => Language::Spanish,
            "Russian" => Language::Russian,
            "Japanese" => Language::Japanese,
            "Portuguese" => Language::Portuguese,
            "Chinese" => Language::Chinese,
            "Korean" => Language::Korean,
            "Greek" => Language::Greek,
            "Turkish" => Language::Turkish,
            "Arabic" => Language::Arabic,
            "Hebrew" => Language::Hebrew,
            _ => return None,
        })
    }
}

/// Tier 1 of spec §4.12: encodings heavily tied to a single language. Checked
/// before any statistical scoring is consulted.
pub(crate) static SINGLE_LANGUAGE_ENCODING: Lazy<HashMap<&'static str, Language>> = Lazy::new(|| {
    HashMap::from_iter([
        ("big5", Language::Chinese),
        ("gbk", Language::Chinese),
        ("gb18030", Language::Chinese),
        ("hz-gb-2312", Language::Chinese),
        ("euc-jp", Language::Japanese),
        ("iso-2022-jp", Language::Japanese),
        ("shift_jis", Language::Japanese),
        ("euc-kr", Language::Korean),
        ("cp949", Language::Korean),
        ("johab", Language::Korean),
        ("iso-2022-kr", Language::Korean),
        ("iso-8859-7", Language::Greek),
        ("koi8-r", Language::Russian),
        ("koi8-u", Language::Russian),
        ("windows-1251", Language::Russian),
        ("x-mac-cyrillic", Language::Russian),
        ("iso-8859-8", Language::Hebrew),
        ("windows-1255", Language::Hebrew),
        ("iso-8859-6", Language::Arabic),
        ("windows-1256", Language::Arabic),
    ])
});

pub(crate) fn single_language_for(encoding_name: &str) -> Option<Language> {
    SINGLE_LANGUAGE_ENCODING.get(encoding_name).copied()
}

/// Tier 3 of spec §4.12: for UTF-8 text that carries no single-language
/// encoding tie and no per-encoding model (UTF-8 is shared by every
/// language), score the first [`crate::consts::UTF8_LANGUAGE_FALLBACK_WINDOW`]
/// bytes of decoded text against each language's UTF-8 bigram profile and
/// take the best match.
pub(crate) fn tier3_utf8_language(text: &str) -> Option<Language> {
    let window_len = text.len().min(crate::consts::UTF8_LANGUAGE_FALLBACK_WINDOW);
    let window = &text.as_bytes()[..window_len];
    let (sample_table, sample_norm) = crate::bigram::quantized_table(window);

    let mut best: Option<(Language, f32)> = None;
    for profile in crate::models::STORE.all_utf8_language_profiles() {
        let score = crate::bigram::cosine(&sample_table, sample_norm, &profile.table, profile.norm);
        if best.map(|(_, best_score)| score > best_score).unwrap_or(true) {
            best = Some((profile.language, score));
        }
    }
    best.filter(|(_, score)| *score >= crate::consts::STATISTICAL_CONFIDENCE_FLOOR)
        .map(|(lang, _)| lang)
}
