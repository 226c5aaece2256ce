//! Blocking key assignment and block construction
//!
//! Reduces the O(n²) candidate space by grouping normalized records
//! that share a blocking key. Only the `no_address` strategy reads phonetic
//! codes; the other three key off postal code and street alone.

use std::collections::HashMap;

use crate::models::NormalizedRecord;

/// A group of record ids sharing a blocking key, already chunked to at most
/// `max_block_size` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub key: String,
    pub record_ids: Vec<u64>,
}

/// Compute the blocking key for one record using the first applicable of
/// the four strategies. Reads the already-normalized postal code,
/// street, and phonetic codes off `record`; performs no normalization
/// itself.
pub fn compute_key(record: &NormalizedRecord) -> String {
    let has_postal = !record.postal_code.is_empty();
    let has_street = !record.street.is_empty();

    match (has_postal, has_street) {
        (true, true) => format!("{}|{}", record.postal_code, record.street),
        (true, false) => format!("plz|{}", record.postal_code),
        (false, true) => format!("str|{}", record.street),
        (false, false) => format!("phon|{}|{}", record.given_phon, record.surname_phon),
    }
}

/// Group records by their precomputed `blocking_key`, drop singleton
/// groups, and split oversized groups into contiguous chunks of at most
/// `max_block_size` ids.
///
/// Chunking can split a true duplicate pair across two chunks of the same
/// oversized group; this is an accepted precision/throughput trade-off
/// and is not corrected here.
pub fn build_blocks(records: &[NormalizedRecord], max_block_size: usize) -> Vec<Block> {
    let mut groups: HashMap<&str, Vec<u64>> = HashMap::new();
    for record in records {
        groups
        .entry(record.blocking_key.as_str())
        .or_default()
        .push(record.id);
    }

    let mut blocks = Vec::new();
    for (key, ids) in groups {
        if ids.len() < 2 {
            tracing::debug!(blocking_key = %key, size = ids.len(), "singleton block dropped");
            continue;
        }
        if ids.len() <= max_block_size {
            blocks.push(Block {
                    key: key.to_string(),
                    record_ids: ids,
            });
        } else {
            let chunk_count = ids.len().div_ceil(max_block_size);
            tracing::debug!(
                blocking_key = %key,
                size = ids.len(),
                chunk_count,
                "oversized block split into chunks"
            );
            for chunk in ids.chunks(max_block_size) {
                blocks.push(Block {
                        key: key.to_string(),
                        record_ids: chunk.to_vec(),
                });
            }
        }
    }
    blocks
}
