//! Two-stage matcher
//!
//! Stage 1 looks for exact matches on normalized names (direct and
//! swapped). Stage 2 runs fuzzy similarity, with a phonetic fallback band,
//! over every pair Stage 1 left unresolved.

use std::collections::HashSet;

use strsim::normalized_levenshtein;

use crate::config::MatchingConfig;
use crate::models::{Match, MatchType, NormalizedRecord};
use crate::rules::passes_rule_gate;

/// Exact name matching, direct and swapped. Empty normalized names
/// disqualify the record from Stage 1.
pub mod stage1 {
    use super::*;

    /// Evaluate one gated pair for an exact match. Returns `None` if
    /// neither record has a comparable name, or neither the direct nor the
    /// swapped comparison holds.
    pub fn evaluate(a: &NormalizedRecord, b: &NormalizedRecord) -> Option<MatchType> {
        if !a.has_comparable_name() || !b.has_comparable_name() {
            return None;
        }

        if a.given_name == b.given_name && a.surname == b.surname {
            return Some(MatchType::ExactNormal);
        }

        if a.given_name == b.surname && a.surname == b.given_name {
            return Some(MatchType::ExactSwapped);
        }

        None
    }
}

/// Fuzzy similarity with phonetic fallback, for pairs Stage 1 did not
/// resolve.
pub mod stage2 {
    use super::*;

    /// The four symmetric similarity ratios and which orientation won.
    struct SimilarityResult {
        best: f64,
        best_is_swapped: bool,
    }

    fn compare(a: &NormalizedRecord, b: &NormalizedRecord) -> SimilarityResult {
        let d_g = normalized_levenshtein(&a.given_name, &b.given_name);
        let d_s = normalized_levenshtein(&a.surname, &b.surname);
        let score_normal = (d_g + d_s) / 2.0;

        let sw_g = normalized_levenshtein(&a.given_name, &b.surname);
        let sw_s = normalized_levenshtein(&a.surname, &b.given_name);
        let score_swapped = (sw_g + sw_s) / 2.0;

        SimilarityResult {
            best: score_normal.max(score_swapped),
            best_is_swapped: score_swapped > score_normal,
        }
    }

    fn phonetic_match(a: &NormalizedRecord, b: &NormalizedRecord) -> Option<MatchType> {
        let p_normal = a.given_phon == b.given_phon && a.surname_phon == b.surname_phon;
        let p_swapped = a.given_phon == b.surname_phon && a.surname_phon == b.given_phon;

        if p_swapped && !p_normal {
            Some(MatchType::PhoneticAssistedSwapped)
        } else if p_normal {
            Some(MatchType::PhoneticAssistedNormal)
        } else {
            None
        }
    }

    /// Evaluate one gated, Stage-1-unresolved pair. Returns the similarity
    /// score used alongside the emitted type, so the confidence scorer
    /// does not need to recompute it.
    pub fn evaluate(
        a: &NormalizedRecord,
        b: &NormalizedRecord,
        config: &MatchingConfig,
    ) -> Option<(MatchType, f64)> {
        if !a.has_comparable_name() || !b.has_comparable_name() {
            return None;
        }

        let sim = compare(a, b);

        if sim.best >= config.fuzzy_threshold {
            let match_type = if sim.best_is_swapped {
                MatchType::FuzzySwapped
            } else {
                MatchType::FuzzyNormal
            };
            return Some((match_type, sim.best));
        }

        if config.use_phonetic && sim.best >= config.phonetic_fallback_low {
            if let Some(match_type) = phonetic_match(a, b) {
                return Some((match_type, sim.best));
            }
        }

        None
    }
}

/// Run both stages over one block's candidate pairs, in id order, with
/// Stage 2 skipping any pair Stage 1 already resolved.
///
/// `score` is the caller-supplied confidence function so this module does
/// not depend on the scoring module directly, keeping the match-producing
/// logic separable from the score-assigning logic.
pub fn match_block<F>(
    records: &[&NormalizedRecord],
    config: &MatchingConfig,
    score: F,
) -> Vec<Match>
where
F: Fn(MatchType, f64, &NormalizedRecord, &NormalizedRecord) -> u8,
{
    let mut matched_in_stage1: HashSet<(u64, u64)> = HashSet::new();
    let mut matches = Vec::new();

    for i in 0..records.len() {
        for j in (i + 1)..records.len() {
            let (a, b) = (records[i], records[j]);
            let (a, b) = if a.id < b.id { (a, b) } else { (b, a) };

            if !passes_rule_gate(a, b, config.ambiguous_year_policy) {
                continue;
            }

            if let Some(match_type) = stage1::evaluate(a, b) {
                matched_in_stage1.insert((a.id, b.id));
                let confidence = score(match_type, 1.0, a, b);
                matches.push(Match::new(a.id, b.id, match_type, confidence));
            }
        }
    }

    for i in 0..records.len() {
        for j in (i + 1)..records.len() {
            let (a, b) = (records[i], records[j]);
            let (a, b) = if a.id < b.id { (a, b) } else { (b, a) };

            if matched_in_stage1.contains(&(a.id, b.id)) {
                continue;
            }
            if !passes_rule_gate(a, b, config.ambiguous_year_policy) {
                continue;
            }

            if let Some((match_type, sim_score)) = stage2::evaluate(a, b, config) {
                let confidence = score(match_type, sim_score, a, b);
                matches.push(Match::new(a.id, b.id, match_type, confidence));
            }
        }
    }

    matches
}
