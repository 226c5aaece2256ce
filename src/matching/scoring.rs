//! Confidence scoring
//!
//! Combines the match type and, where applicable, the Stage-2 similarity
//! score with an address agreement ratio into the final `[0, 100]`
//! confidence.

use crate::models::{MatchType, NormalizedRecord};

/// Fraction of commonly-populated address fields that agree after
/// normalization, over `{street, house_number, postal_code, city}`. `0.0`
/// when neither record has any of these fields populated.
pub fn address_ratio(a: &NormalizedRecord, b: &NormalizedRecord) -> f64 {
    let fields: [(&str, &str); 4] = [
        (&a.street, &b.street),
        (&a.house_number, &b.house_number),
        (&a.postal_code, &b.postal_code),
        (&a.city, &b.city),
    ];

    let mut common = 0u32;
    let mut agree = 0u32;
    for (x, y) in fields {
        if !x.is_empty() && !y.is_empty() {
            common += 1;
            if x == y {
                agree += 1;
            }
        }
    }

    if common == 0 {
        0.0
    } else {
        f64::from(agree) / f64::from(common)
    }
}

/// Score one match per the table. `similarity` is the Stage-2 score
/// used by the two fuzzy types (`score_normal`/`score_swapped`); it is
/// ignored for exact and phonetic-assisted types, whose confidence is a
/// function of `address_ratio` alone.
pub fn score(
    match_type: MatchType,
    similarity: f64,
    a: &NormalizedRecord,
    b: &NormalizedRecord,
) -> u8 {
    let ratio = address_ratio(a, b);
    let (lo, hi) = match_type.confidence_bounds();

    let raw = match match_type {
        MatchType::ExactNormal => 90.0 + 10.0 * ratio,
        MatchType::ExactSwapped => 85.0 + 10.0 * ratio,
        MatchType::PhoneticAssistedNormal => 72.0 + 10.0 * ratio,
        MatchType::PhoneticAssistedSwapped => 70.0 + 10.0 * ratio,
        MatchType::FuzzyNormal => 50.0 * similarity + 30.0 * ratio,
        MatchType::FuzzySwapped => 50.0 * similarity + 30.0 * ratio - 5.0,
    };

    raw.floor().clamp(f64::from(lo), f64::from(hi)) as u8
}
