//! Exact weighted length value.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use super::classify::{classify, CharClass};

/// Effective length of a piece of text, kept as exact counts.
///
/// The value is `total - discounted / 3`. Comparisons and arithmetic happen
/// on the counts (in thirds of a unit), so nothing is rounded until a caller
/// asks for [`as_f64`](Self::as_f64).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct WeightedLength {
    total: u64,
    discounted: u64,
}

impl WeightedLength {
    pub const ZERO: WeightedLength = WeightedLength { total: 0, discounted: 0 };

    /// Build from raw counts. `discounted` is clamped to `total`.
    pub fn from_counts(total: u64, discounted: u64) -> Self {
        Self { total, discounted: discounted.min(total) }
    }

    /// Number of code points counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of discounted code points.
    pub fn discounted(&self) -> u64 {
        self.discounted
    }

    pub fn normal(&self) -> u64 {
        self.total - self.discounted
    }

    /// Effective length in thirds of a unit.
    pub fn thirds(&self) -> u64 {
        3 * self.total - self.discounted
    }

    pub fn as_f64(&self) -> f64 {
        self.total as f64 - self.discounted as f64 / 3.0
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Whether the effective length is strictly greater than `limit` units.
    pub fn exceeds(&self, limit: u64) -> bool {
        u128::from(self.thirds()) > u128::from(limit) * 3
    }

    /// Units left before `limit`; negative when the text is over.
    pub fn remaining(&self, limit: u64) -> f64 {
        let left = i128::from(limit) * 3 - i128::from(self.thirds());
        left as f64 / 3.0
    }

    /// Compare effective values only; `"abc"` and `"あい"` are equal here.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        self.thirds().cmp(&other.thirds())
    }

    fn push(&mut self, c: char) {
        self.total += 1;
        if classify(c) == CharClass::Discounted {
            self.discounted += 1;
        }
    }
}

impl Add for WeightedLength {
    type Output = WeightedLength;

    fn add(self, rhs: WeightedLength) -> WeightedLength {
        WeightedLength {
            total: self.total + rhs.total,
            discounted: self.discounted + rhs.discounted,
        }
    }
}

impl AddAssign for WeightedLength {
    fn add_assign(&mut self, rhs: WeightedLength) {
        self.total += rhs.total;
        self.discounted += rhs.discounted;
    }
}

impl Sum for WeightedLength {
    fn sum<I: Iterator<Item = WeightedLength>>(iter: I) -> Self {
        iter.fold(WeightedLength::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a WeightedLength> for WeightedLength {
    fn sum<I: Iterator<Item = &'a WeightedLength>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Extend<char> for WeightedLength {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.push(c);
        }
    }
}

impl FromIterator<char> for WeightedLength {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut len = WeightedLength::ZERO;
        len.extend(iter);
        len
    }
}

impl PartialOrd for WeightedLength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders by effective value, then by code-point count so that `Ord` agrees
/// with `Eq`. Use [`WeightedLength::cmp_value`] for value-only comparison.
impl Ord for WeightedLength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.thirds()
            .cmp(&other.thirds())
            .then_with(|| self.total.cmp(&other.total))
    }
}

/// Up to four decimals, trailing zeros trimmed (`3.3333`, `4`, `0.6667`).
impl fmt::Display for WeightedLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::format_units(self.as_f64(), 4))
    }
}
