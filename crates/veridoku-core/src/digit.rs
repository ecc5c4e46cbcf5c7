//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A sudoku digit in the range 1-9.
///
/// The enum makes out-of-range cell values unrepresentable: anything a
/// board cell holds is either a `Digit` or empty. Both constructors are
/// fallible and never panic on untrusted input.
///
/// # Examples
///
/// ```
/// use veridoku_core::Digit;
///
/// assert_eq!(Digit::from_char('5'), Some(Digit::D5));
/// assert_eq!(Digit::from_char('0'), None);
/// assert_eq!(Digit::D5.value(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all digits from 1 to 9, in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a numeric value, if it is in the range 1-9.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Creates a digit from its character form `'1'..='9'`.
    ///
    /// `'0'` is a representable cell character in board files but not a
    /// digit, so it returns `None` like any other non-digit character.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let value = u8::try_from(c.to_digit(10)?).ok()?;
        Self::from_value(value)
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_range() {
        assert_eq!(Digit::from_value(1), Some(Digit::D1));
        assert_eq!(Digit::from_value(9), Some(Digit::D9));
        assert_eq!(Digit::from_value(0), None);
        assert_eq!(Digit::from_value(10), None);
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Digit::from_char('1'), Some(Digit::D1));
        assert_eq!(Digit::from_char('9'), Some(Digit::D9));
        assert_eq!(Digit::from_char('0'), None);
        assert_eq!(Digit::from_char('a'), None);
        assert_eq!(Digit::from_char(' '), None);
    }

    #[test]
    fn test_all_is_ascending() {
        assert_eq!(Digit::ALL.len(), 9);
        for (i, digit) in Digit::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(digit.value()), i + 1);
            assert_eq!(Digit::from_value(digit.value()), Some(digit));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Digit::D1), "1");
        assert_eq!(format!("{}", Digit::D9), "9");
    }

    #[test]
    fn test_into_u8() {
        let value: u8 = Digit::D5.into();
        assert_eq!(value, 5);
    }
}
