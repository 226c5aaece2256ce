//! Configuration for the matching pipeline
//!
//! `MatchingConfig` is constructed once by the caller (from env, file, or
//! CLI flags — all of which are the ingestion collaborator's concern, not
//! this crate's) and passed into [`crate::Pipeline::new`]. Validation
//! happens once, at construction, so a bad threshold fails fast before any
//! block is ever processed.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Policy for the Birth-Year rule (R2) when exactly one record carries a
/// birth year. Default is to reject as ambiguous; a caller that wants the
/// permissive variant must opt in explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmbiguousYearPolicy {
    /// Reject the pair when only one side has year information (default).
    Reject,
    /// Pass the pair through, treating missing year information as
    /// non-disqualifying.
    Pass,
}

impl Default for AmbiguousYearPolicy {
    fn default() -> Self {
        AmbiguousYearPolicy::Reject
    }
}

/// Tunable thresholds and execution knobs for the matching pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum character similarity in `[0, 1]` to accept a Stage-2 fuzzy
    /// match outright.
    pub fuzzy_threshold: f64,

    /// Lower bound of the phonetic-assist band in `[0, 1]`. Similarity
    /// scores between this value and `fuzzy_threshold` fall back to
    /// phonetic comparison.
    pub phonetic_fallback_low: f64,

    /// Minimum confidence score (0-100) a match must reach to be emitted
    /// from [`crate::Pipeline::run`].
    pub confidence_threshold: u8,

    /// Enable the phonetic fallback branch of Stage 2.
    pub use_phonetic: bool,

    /// Enable the multi-worker block runner. When `false`, blocks are
    /// processed sequentially regardless of block count.
    pub use_parallel: bool,

    /// Worker count for the block runner. `None` means cores minus one,
    /// floored at 1.
    pub workers: Option<usize>,

    /// Chunking cap: blocks larger than this are split into contiguous
    /// chunks of at most this many records.
    pub max_block_size: usize,

    /// Policy for the Birth-Year rule's one-sided-year case.
    pub ambiguous_year_policy: AmbiguousYearPolicy,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 0.70,
            phonetic_fallback_low: 0.60,
            confidence_threshold: 70,
            use_phonetic: true,
            use_parallel: true,
            workers: None,
            max_block_size: 10_000,
            ambiguous_year_policy: AmbiguousYearPolicy::default(),
        }
    }
}

impl MatchingConfig {
    /// Validate thresholds and bounds. Called once by `Pipeline::new`
    /// before any block is processed; a violation is a fatal configuration
    /// error, never a per-record one.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(Error::config(format!(
                        "fuzzy_threshold must be in [0, 1], got {}",
                        self.fuzzy_threshold
            )));
        }

        if !(0.0..=1.0).contains(&self.phonetic_fallback_low) {
            return Err(Error::config(format!(
                        "phonetic_fallback_low must be in [0, 1], got {}",
                        self.phonetic_fallback_low
            )));
        }

        if self.phonetic_fallback_low > self.fuzzy_threshold {
            return Err(Error::config(format!(
                        "phonetic_fallback_low ({}) must not exceed fuzzy_threshold ({})",
                        self.phonetic_fallback_low, self.fuzzy_threshold
            )));
        }

        if self.confidence_threshold > 100 {
            return Err(Error::config(format!(
                        "confidence_threshold must be in [0, 100], got {}",
                        self.confidence_threshold
            )));
        }

        if self.max_block_size == 0 {
            return Err(Error::config("max_block_size must be greater than 0"));
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(Error::config("workers must be greater than 0 when set"));
            }
        }

        Ok(())
    }
}
