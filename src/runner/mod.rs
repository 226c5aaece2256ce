//! Block runner
//!
//! Drives the rule gate and two-stage matcher over every block, in
//! parallel across blocks via rayon `par_iter`. A block is
//! a self-contained unit of work: given the read-only normalized dataset
//! slice and a block's record ids, it produces a `Vec<Match>` with no
//! shared mutable state, so no bespoke channel or actor layer is needed.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::blocking::Block;
use crate::config::MatchingConfig;
use crate::matching::match_block;
use crate::models::{Match, NormalizedRecord};

/// Below this many blocks, sequential execution outperforms spinning up a
/// thread pool.
const SEQUENTIAL_BLOCK_THRESHOLD: usize = 10;

/// The result of driving the block runner over a dataset.
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    /// Deduplicated matches, one per `(id_a, id_b)` pair, keyed by the
    /// highest-ranking match type when a pair was produced more than once.
    pub matches: Vec<Match>,
    /// Blocks dropped after a worker panic.
    pub failed_block_count: usize,
    /// Set when cancellation stopped the run before every block was
    /// processed.
    pub incomplete: bool,
}

fn worker_count(config: &MatchingConfig) -> usize {
    config.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
            .map(|n| n.get().saturating_sub(1).max(1))
            .unwrap_or(1)
    })
}

/// Run one block: look up its records, evaluate the rule gate and
/// two-stage matcher, and catch a panic so a single malformed block
/// cannot take down the whole run.
fn run_one_block(
    block: &Block,
    records_by_id: &HashMap<u64, &NormalizedRecord>,
    config: &MatchingConfig,
) -> Option<Vec<Match>> {
    let refs: Vec<&NormalizedRecord> = block
    .record_ids
    .iter()
    .filter_map(|id| records_by_id.get(id).copied())
    .collect();

    if refs.len() < 2 {
        tracing::debug!(blocking_key = %block.key, "block has fewer than 2 resolvable records");
        return Some(Vec::new());
    }

    match catch_unwind(AssertUnwindSafe(|| match_block(&refs, config))) {
        Ok(matches) => Some(matches),
        Err(_) => {
            tracing::warn!(blocking_key = %block.key, "worker panicked, block dropped");
            None
        }
    }
}

/// Merge per-block match vectors into a single deduplicated set, keyed by
/// `(id_a, id_b)`. When a pair is produced more than once, the
/// higher-ranking match type wins; `MatchType`'s declaration order
/// doubles as this ranking.
fn dedup_matches(batches: Vec<Vec<Match>>) -> Vec<Match> {
    let mut by_pair: HashMap<(u64, u64), Match> = HashMap::new();
    for m in batches.into_iter().flatten() {
        by_pair
        .entry(m.pair_key())
        .and_modify(|existing| {
                if m.match_type > existing.match_type {
                    *existing = m;
                }
        })
        .or_insert(m);
    }
    by_pair.into_values().collect()
}

/// Drive the matcher over every block. `records` is the full normalized
/// dataset, shared read-only by every worker. `cancelled` is checked between blocks, never inside
/// the inner pair loop.
pub fn run(
    blocks: &[Block],
    records: &[NormalizedRecord],
    config: &MatchingConfig,
    cancelled: &AtomicBool,
) -> RunOutcome {
    let records_by_id: HashMap<u64, &NormalizedRecord> =
    records.iter().map(|r| (r.id, r)).collect();

    let use_parallel = config.use_parallel && blocks.len() > SEQUENTIAL_BLOCK_THRESHOLD;

    if !use_parallel {
        return run_sequential(blocks, &records_by_id, config, cancelled);
    }

    let pool = rayon::ThreadPoolBuilder::new()
    .num_threads(worker_count(config))
    .build();

    let pool = match pool {
        Ok(pool) => pool,
        Err(_) => return run_sequential(blocks, &records_by_id, config, cancelled),
    };

    pool.install(|| run_parallel(blocks, &records_by_id, config, cancelled))
}

fn run_sequential(
    blocks: &[Block],
    records_by_id: &HashMap<u64, &NormalizedRecord>,
    config: &MatchingConfig,
    cancelled: &AtomicBool,
) -> RunOutcome {
    let mut batches = Vec::new();
    let mut failed_block_count = 0;
    let mut incomplete = false;

    for block in blocks {
        if cancelled.load(Ordering::Relaxed) {
            incomplete = true;
            break;
        }
        match run_one_block(block, records_by_id, config) {
            Some(matches) => batches.push(matches),
            None => failed_block_count += 1,
        }
    }

    RunOutcome {
        matches: dedup_matches(batches),
        failed_block_count,
        incomplete,
    }
}

fn run_parallel(
    blocks: &[Block],
    records_by_id: &HashMap<u64, &NormalizedRecord>,
    config: &MatchingConfig,
    cancelled: &AtomicBool,
) -> RunOutcome {
    let results: Vec<Option<Vec<Match>>> = blocks
    .par_iter()
    .map(|block| {
            if cancelled.load(Ordering::Relaxed) {
                return None;
            }
            run_one_block(block, records_by_id, config)
    })
    .collect();

    let incomplete = cancelled.load(Ordering::Relaxed);
    let failed_block_count = results.iter().filter(|r| r.is_none()).count();
    let batches: Vec<Vec<Match>> = results.into_iter().flatten().collect();

    RunOutcome {
        matches: dedup_matches(batches),
        failed_block_count,
        incomplete,
    }
}
