//! How likely a run of random symbols is to reduce to a given class.
//!
//! For a class `c` covering `n` of the 64 alphabet symbols, a random string of
//! length `L` stays within `c` with probability `(n / 64)^L`. Some of those
//! strings reduce to a strictly narrower class instead, so the probability of
//! reducing to exactly `c` subtracts the exact probabilities of every narrower
//! named class.

use crate::char_class::{CharClass, NAMED_CLASSES};

/// Probability that a uniformly random string of `len` alphabet symbols
/// (padding excluded) reduces to exactly `class`.
///
/// Empty strings have no class, so `len == 0` yields `0.0`.
pub fn class_probability(class: CharClass, len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }

    let exponent = i32::try_from(len).unwrap_or(i32::MAX);
    let within = (class.symbol_count() as f64 / 64.0).powi(exponent);

    let narrower: f64 = NAMED_CLASSES
        .iter()
        .map(|(_, named)| *named)
        .filter(|named| named.is_narrower_than(class))
        .map(|named| class_probability(named, len))
        .sum();

    within - narrower
}
