use crate::bigram::{cosine, quantized_table};
use crate::language::tier3_utf8_language;

#[test]
fn cosine_of_identical_tables_is_one() {
    let (table, norm) = quantized_table(b"the quick brown fox jumps over the lazy dog");
    let score = cosine(&table, norm, &table, norm);
    assert!((score - 1.0).abs() < 1e-4, "expected ~1.0, got {score}");
}

#[test]
fn cosine_of_empty_tables_is_zero() {
    let (table, norm) = quantized_table(b"");
    let score = cosine(&table, norm, &table, norm);
    assert_eq!(score, 0.0);
}

#[test]
fn cosine_is_symmetric() {
    let (a_table, a_norm) = quantized_table(b"hello world hello world");
    let (b_table, b_norm) = quantized_table(b"bonjour le monde bonjour");
    let forward = cosine(&a_table, a_norm, &b_table, b_norm);
    let backward = cosine(&b_table, b_norm, &a_table, a_norm);
    assert!((forward - backward).abs() < 1e-6);
}

#[test]
fn tier3_recognizes_latin_script_prose() {
    use crate::language::Language;
    let text = "The quick brown fox jumps over the lazy dog while the old clock on the wall keeps perfect time.";
    let language = tier3_utf8_language(text);
    let latin_script = [
        Language::English,
        Language::German,
        Language::French,
        Language::Dutch,
        Language::Italian,
        Language::Spanish,
        Language::Portuguese,
        Language::Polish,
        Language::Turkish,
    ];
    assert!(
        language.map(|l| latin_script.contains(&l)).unwrap_or(false),
        "expected a Latin-script language, got {language:?}"
    );
}

#[test]
fn tier3_recognizes_russian_prose() {
    let text = "Быстрая коричневая лиса перепрыгивает через ленивую собаку, пока старые часы на стене спокойно отсчитывают время.";
    let language = tier3_utf8_language(text);
    assert_eq!(language, Some(crate::language::Language::Russian));
}
