//! Pairwise record deduplication core
//!
//! Identifies probable duplicate person/address records within a German
//! address registry for fraud detection: names may be altered, swapped,
//! transliterated, or phonetically varied, while business rules
//! still govern when two records may legitimately be considered the same.
//!
//! This crate is the matching core only: normalization, Kölner Phonetik
//! encoding, blocking, the rule gate, the two-stage matcher, the
//! confidence scorer, and the parallel block runner. Ingestion, CLI/config
//! parsing beyond the [`config::MatchingConfig`] struct itself, logging
//! backend initialization, and result export beyond the pairwise schema
//! are a collaborator's concern.

pub mod blocking;
pub mod config;
pub mod error;
pub mod matching;
pub mod models;
pub mod normalize;
pub mod phonetic;
pub mod pipeline;
pub mod rules;
pub mod runner;

pub use config::MatchingConfig;
pub use error::{Error, Result};
pub use models::{Match, MatchType, NormalizedRecord, Record};
pub use pipeline::Pipeline;
pub use runner::RunOutcome;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_is_constructible_with_default_config() {
        assert!(Pipeline::new(MatchingConfig::default()).is_ok());
    }
}
