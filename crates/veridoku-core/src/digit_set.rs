//! A set of digits 1-9, stored as a 9-bit mask.

use std::fmt;

use crate::digit::Digit;

/// A set of [`Digit`]s backed by a `u16` bitmask.
///
/// Bits 0-8 represent the digits 1-9. This is the transient set a house
/// check collapses into: inserting the same digit twice leaves the set
/// unchanged, so a house contains the digits 1-9 exactly once precisely
/// when its set [`is_full`](Self::is_full).
///
/// # Examples
///
/// ```
/// use veridoku_core::{Digit, DigitSet};
///
/// let set: DigitSet = [Digit::D1, Digit::D5, Digit::D5].into_iter().collect();
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Digit::D5));
/// assert!(!set.is_full());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet(u16);

impl DigitSet {
    const MASK: u16 = 0b1_1111_1111;

    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing every digit 1-9.
    pub const FULL: Self = Self(Self::MASK);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Inserts a digit, returning `true` if it was not already present.
    pub fn insert(&mut self, digit: Digit) -> bool {
        let bit = Self::bit(digit);
        let inserted = self.0 & bit == 0;
        self.0 |= bit;
        inserted
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set (0-9).
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the set contains every digit 1-9.
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 == Self::MASK
    }

    /// Returns an iterator over the digits in the set, in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Digit::ALL.into_iter().filter(move |&digit| self.contains(digit))
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
