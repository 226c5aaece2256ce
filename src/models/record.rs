//! Raw record model
//!
//! A [`Record`] is the caller's input shape: one row of a person/address
//! registry extract. Every field but `id` is optional because registry
//! extracts are sparse in practice — a row missing a street or a birth date
//! is routine, not an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One person-address row as supplied by the ingestion collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Stable index in the dataset. Used as the join key in emitted matches.
    pub id: u64,

    pub given_name: Option<String>,
    pub surname: Option<String>,

    /// Middle/secondary name component (Name2), e.g. a trailing hyphenated
    /// surname fragment stored separately from `surname`.
    pub secondary_name: Option<String>,

    pub street: Option<String>,
    pub house_number: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,

    /// Full date of birth, when known.
    pub birth_date: Option<NaiveDate>,

    /// Standalone birth year, used when only the year (not the full date)
    /// is on file.
    pub birth_year: Option<i32>,
}

impl Record {
    /// Build a minimal record with only an id; every other field absent.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            given_name: None,
            surname: None,
            secondary_name: None,
            street: None,
            house_number: None,
            postal_code: None,
            city: None,
            birth_date: None,
            birth_year: None,
        }
    }
}
