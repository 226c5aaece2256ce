//! Field normalization
//!
//! Produces the canonical strings every downstream stage compares.
//! Normalization is pure, thread-safe, and idempotent: `normalize(normalize(x))
//! == normalize(x)` for every textual field.

use unicode_normalization::UnicodeNormalization;

use crate::models::{NormalizedRecord, Record};
use crate::{blocking, phonetic};

/// Unicode combining marks left behind by NFD decomposition, stripped so
/// "é" -> "e", "ñ" -> "n", and so on for diacritics umlaut expansion does
/// not already cover.
fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}'
        | '\u{1AB0}'..='\u{1AFF}'
        | '\u{1DC0}'..='\u{1DFF}'
        | '\u{20D0}'..='\u{20FF}'
        | '\u{FE20}'..='\u{FE2F}'
    )
}

/// Expand the four German umlaut/eszett characters before general accent
/// folding runs.
fn expand_umlauts(text: &str) -> String {
    text.replace('ü', "ue")
    .replace('ö', "oe")
    .replace('ä', "ae")
    .replace('ß', "ss")
}

/// NFD-decompose and drop combining marks, folding remaining diacritics to
/// their closest ASCII letter.
fn fold_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Retain `a-z`, digits, space, and hyphen; drop all other punctuation.
fn filter_chars(text: &str) -> String {
    text.chars()
    .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ' || *c == '-')
    .collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Canonicalize one free-text field: lowercase, umlaut expansion,
/// accent folding, character filter, whitespace collapse.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let expanded = expand_umlauts(&lowered);
    let folded = fold_accents(&expanded);
    let filtered = filter_chars(&folded);
    collapse_whitespace(&filtered).trim().to_string()
}

/// Strip everything but decimal digits.
pub fn normalize_postal_code(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalize a house number to digits plus a lowercase letter suffix
/// (e.g. "12 A" -> "12a"); free text beyond that pattern is passed through
/// the general text normalizer.
pub fn normalize_house_number(text: &str) -> String {
    normalize_text(text).replace(' ', "")
}

/// `effective_year(record)`: year of `birth_date` if present, else
/// `birth_year`, else absent. Date-over-year precedence is a rule,
/// not a fallback driven by data quality.
fn effective_year(record: &Record) -> Option<i32> {
    use chrono::Datelike;
    record
    .birth_date
    .map(|d| d.year())
    .or(record.birth_year)
}

fn normalize_optional(field: &Option<String>) -> String {
    field.as_deref().map(normalize_text).unwrap_or_default()
}

/// Normalize a raw [`Record`] into a [`NormalizedRecord`], computing its
/// phonetic codes and blocking key in the same pass.
///
/// An unparseable or otherwise unusable field degrades to absent for that
/// field rather than aborting the record.
pub fn normalize_record(record: &Record) -> NormalizedRecord {
    let given_name = normalize_optional(&record.given_name);
    let surname = normalize_optional(&record.surname);
    let secondary_name = normalize_optional(&record.secondary_name);
    let street = normalize_optional(&record.street);
    let city = normalize_optional(&record.city);
    let postal_code = record
    .postal_code
    .as_deref()
    .map(normalize_postal_code)
    .unwrap_or_default();
    let house_number = record
    .house_number
    .as_deref()
    .map(normalize_house_number)
    .unwrap_or_default();

    let given_phon = phonetic::encode(&given_name);
    let surname_phon = phonetic::encode(&surname);

    let mut normalized = NormalizedRecord {
        id: record.id,
        given_name,
        surname,
        secondary_name,
        street,
        house_number,
        postal_code,
        city,
        effective_year: effective_year(record),
        given_phon,
        surname_phon,
        blocking_key: String::new(),
    };
    normalized.blocking_key = blocking::compute_key(&normalized);
    normalized
}
