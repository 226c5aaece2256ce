//! Data models for the record deduplication core

pub mod match_result;
pub mod normalized;
pub mod record;

pub use match_result::{ExportPosition, ExportRow, Match, MatchType};
pub use normalized::NormalizedRecord;
pub use record::Record;
