//! Match result model
//!
//! The six match types form a closed set: represented as a
//! tagged enum with explicit discriminants, never as a bare string, so the
//! compiler enforces exhaustive handling at every call site that branches on
//! match type.

use serde::{Deserialize, Serialize};

use crate::models::Record;

/// The kind of evidence that produced a match, ordered from strongest to
/// weakest. The discriminant values double as the tie-break ranking used by
/// the block runner when the same pair is produced more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Swapped given/surname, phonetic-assisted only (weakest).
    PhoneticAssistedSwapped = 0,
    /// Direct given/surname, phonetic-assisted only.
    PhoneticAssistedNormal = 1,
    /// Swapped given/surname, fuzzy similarity accepted.
    FuzzySwapped = 2,
    /// Direct given/surname, fuzzy similarity accepted.
    FuzzyNormal = 3,
    /// Given/surname exchanged between the two records, exact match.
    ExactSwapped = 4,
    /// Direct given/surname exact match (strongest).
    ExactNormal = 5,
}

impl MatchType {
    /// The confidence interval this match type is bounded to.
    pub fn confidence_bounds(self) -> (u8, u8) {
        match self {
            MatchType::ExactNormal => (90, 100),
            MatchType::ExactSwapped => (85, 95),
            MatchType::PhoneticAssistedNormal => (72, 82),
            MatchType::PhoneticAssistedSwapped => (70, 80),
            MatchType::FuzzyNormal => (70, 95),
            MatchType::FuzzySwapped => (65, 95),
        }
    }

    /// True if given/surname were exchanged between the two records to
    /// produce this match.
    pub fn is_swapped(self) -> bool {
        matches!(
            self,
            MatchType::ExactSwapped
            | MatchType::FuzzySwapped
            | MatchType::PhoneticAssistedSwapped
        )
    }
}

/// A pairwise match between two records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Lower of the two record ids.
    pub id_a: u64,
    /// Higher of the two record ids.
    pub id_b: u64,
    pub match_type: MatchType,
    /// Integer confidence in `[0, 100]`.
    pub confidence_score: u8,
}

impl Match {
    /// Construct a match, ordering the ids so `id_a < id_b` always holds,
    /// regardless of which order the caller discovered the pair in.
    pub fn new(id_x: u64, id_y: u64, match_type: MatchType, confidence_score: u8) -> Self {
        let (id_a, id_b) = if id_x < id_y {
            (id_x, id_y)
        } else {
            (id_y, id_x)
        };
        Self {
            id_a,
            id_b,
            match_type,
            confidence_score,
        }
    }

    /// The pair key used for deduplication across stages and blocks.
    pub fn pair_key(&self) -> (u64, u64) {
        (self.id_a, self.id_b)
    }

    /// Materialize the collaborator-facing export schema: two rows
    /// sharing `match_id`, tagged `A`/`B`, carrying the full record for
    /// that side. This crate performs no I/O; it only builds the rows.
    pub fn export_rows(&self, record_a: &Record, record_b: &Record) -> [ExportRow; 2] {
        let match_id = format!("{}_{}", self.id_a, self.id_b);
        [
            ExportRow {
                match_id: match_id.clone(),
                position: ExportPosition::A,
                match_type: self.match_type,
                confidence_score: self.confidence_score,
                record: record_a.clone(),
            },
            ExportRow {
                match_id,
                position: ExportPosition::B,
                match_type: self.match_type,
                confidence_score: self.confidence_score,
                record: record_b.clone(),
            },
        ]
    }
}

/// Which side of a match an [`ExportRow`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportPosition {
    A,
    B,
}

/// One row of the collaborator-facing export schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub match_id: String,
    pub position: ExportPosition,
    pub match_type: MatchType,
    pub confidence_score: u8,
    #[serde(flatten)]
    pub record: Record,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_orders_ids() {
        let m = Match::new(5, 2, MatchType::ExactNormal, 95);
        assert_eq!(m.id_a, 2);
        assert_eq!(m.id_b, 5);
    }

    #[test]
    fn confidence_bounds_match_spec_table() {
        assert_eq!(MatchType::ExactNormal.confidence_bounds(), (90, 100));
        assert_eq!(MatchType::ExactSwapped.confidence_bounds(), (85, 95));
        assert_eq!(MatchType::PhoneticAssistedNormal.confidence_bounds(), (72, 82));
        assert_eq!(MatchType::PhoneticAssistedSwapped.confidence_bounds(), (70, 80));
        assert_eq!(MatchType::FuzzyNormal.confidence_bounds(), (70, 95));
        assert_eq!(MatchType::FuzzySwapped.confidence_bounds(), (65, 95));
    }

    #[test]
    fn ranking_orders_exact_above_fuzzy_above_phonetic() {
        assert!(MatchType::ExactNormal > MatchType::ExactSwapped);
        assert!(MatchType::ExactSwapped > MatchType::FuzzyNormal);
        assert!(MatchType::FuzzyNormal > MatchType::FuzzySwapped);
        assert!(MatchType::FuzzySwapped > MatchType::PhoneticAssistedNormal);
        assert!(MatchType::PhoneticAssistedNormal > MatchType::PhoneticAssistedSwapped);
    }

    #[test]
    fn export_rows_share_match_id_and_tag_position() {
        let m = Match::new(1, 2, MatchType::ExactNormal, 100);
        let a = Record::new(1);
        let b = Record::new(2);
        let [row_a, row_b] = m.export_rows(&a, &b);
        assert_eq!(row_a.match_id, "1_2");
        assert_eq!(row_b.match_id, "1_2");
        assert_eq!(row_a.position, ExportPosition::A);
        assert_eq!(row_b.position, ExportPosition::B);
    }
}
