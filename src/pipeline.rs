//! Top-level pipeline entry point
//!
//! Glues normalization, blocking, the rule-gated two-stage matcher, and the
//! block runner into the single call a collaborator needs
//! (`Pipeline::run(&[Record]) -> RunOutcome`).

use std::sync::atomic::AtomicBool;
use std::time::Instant;

use crate::blocking::build_blocks;
use crate::config::MatchingConfig;
use crate::models::{NormalizedRecord, Record};
use crate::normalize::normalize_record;
use crate::runner::{self, RunOutcome};
use crate::Result;

/// A validated matching pipeline, ready to run over an in-memory dataset.
///
/// The crate does not own ingestion: a collaborator's CSV/DB reader
/// produces the `&[Record]` slice passed to [`Pipeline::run`].
pub struct Pipeline {
    config: MatchingConfig,
}

impl Pipeline {
    /// Validate `config` once, before any work starts, failing fast with
    /// [`crate::Error::Config`] on violation.
    pub fn new(config: MatchingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Normalize, block, match, and score every record, returning the
    /// emitted matches that clear `confidence_threshold` plus run
    /// diagnostics.
    pub fn run(&self, records: &[Record]) -> RunOutcome {
        self.run_cancellable(records, &AtomicBool::new(false))
    }

    /// As [`Pipeline::run`], but checks `cancelled` between blocks so
    /// a caller running this on a background thread can stop it early.
    pub fn run_cancellable(&self, records: &[Record], cancelled: &AtomicBool) -> RunOutcome {
        let start = Instant::now();

        let normalized: Vec<NormalizedRecord> = records.iter().map(normalize_record).collect();
        let blocks = build_blocks(&normalized, self.config.max_block_size);

        tracing::debug!(
            records_in = records.len(),
            blocks_total = blocks.len(),
            "dataset normalized and blocked"
        );

        let mut outcome = runner::run(&blocks, &normalized, &self.config, cancelled);

        let threshold = self.config.confidence_threshold;
        outcome
        .matches
        .retain(|m| m.confidence_score >= threshold);

        tracing::info!(
            records_in = records.len(),
            blocks_total = blocks.len(),
            matches_emitted = outcome.matches.len(),
            failed_block_count = outcome.failed_block_count,
            incomplete = outcome.incomplete,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "pipeline run complete"
        );

        outcome
    }
}
