//! Kölner Phonetik (Cologne phonetic) encoding
//!
//! Wraps [`rphonetic::Cologne`], the real Apache-licensed implementation of
//! the algorithm, rather than re-deriving its letter-class tables here. The
//! encoder is pure: it depends only on its input string.

use rphonetic::{Cologne, Encoder};

/// Encode a normalized name (already lowercased, umlaut-expanded, ASCII
/// filtered by [`crate::normalize`]) into its Kölner Phonetik code.
///
/// Empty input yields the empty code. Hyphens are ignored by the underlying
/// encoder, so a compound surname like "rohner-stassek" encodes as a single
/// token.
pub fn encode(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    Cologne.encode(name)
}
