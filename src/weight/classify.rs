//! Character classification for weighted length.

use std::ops::RangeInclusive;

/// Inclusive code-point ranges whose characters are discounted by a third of a unit.
pub const DISCOUNTED_RANGES: [RangeInclusive<u32>; 4] = [
    // Printable ASCII, excluding space
    0x21..=0x7E,
    // Full-width digits
    0xFF10..=0xFF19,
    // Full-width uppercase Latin
    0xFF21..=0xFF3A,
    // Full-width lowercase Latin
    0xFF41..=0xFF5A,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Counts as 2/3 of a unit
    Discounted,
    /// Counts as a full unit
    Normal,
}

impl CharClass {
    /// Weight of one character of this class, in thirds of a unit.
    pub const fn thirds(self) -> u64 {
        match self {
            CharClass::Discounted => 2,
            CharClass::Normal => 3,
        }
    }
}

/// Classify a single character by its code point.
pub fn classify(c: char) -> CharClass {
    let cp = u32::from(c);
    if DISCOUNTED_RANGES.iter().any(|range| range.contains(&cp)) {
        CharClass::Discounted
    } else {
        CharClass::Normal
    }
}
