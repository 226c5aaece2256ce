//! Two-stage matcher and confidence scorer
//!
//! `match_block` drives the rule gate and both stages over one block's
//! records; `scoring::score` turns a match type plus similarity into the
//! final confidence value.

pub mod algorithms;
pub mod scoring;

use crate::config::MatchingConfig;
use crate::models::{Match, NormalizedRecord};

/// Run the two-stage matcher over one block, scoring each emitted match
/// as it is produced.
pub fn match_block(records: &[&NormalizedRecord], config: &MatchingConfig) -> Vec<Match> {
    algorithms::match_block(records, config, scoring::score)
}
