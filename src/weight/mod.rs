//! Weighted text length estimation
//!
//! Most characters count as one unit. Printable ASCII and full-width
//! digits/Latin letters are discounted by a third of a unit each, so a run
//! of three of them is one unit shorter than its raw character count.

pub mod classify;
pub mod length;

pub use classify::{classify, CharClass, DISCOUNTED_RANGES};
pub use length::WeightedLength;

use crate::error::{Error, Result};

/// Estimate the effective length of `text`.
///
/// Counting happens per code point, so astral characters (emoji, rare CJK)
/// count once. The result is exact; see [`WeightedLength::as_f64`] for the
/// numeric value.
pub fn estimate(text: &str) -> WeightedLength {
    text.chars().collect()
}

/// Effective length of `text` as a float, never rounded.
pub fn estimate_f64(text: &str) -> f64 {
    estimate(text).as_f64()
}

/// Estimate the effective length of raw bytes.
///
/// Bytes that are not valid UTF-8 are rejected instead of being decoded
/// lossily, so callers never display a count for mangled input.
pub fn estimate_bytes(bytes: &[u8]) -> Result<WeightedLength> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| Error::NotText { valid_up_to: e.valid_up_to() })?;
    Ok(estimate(text))
}
