//! Solution checking over the 27 houses.
//!
//! A board is a valid solution when every row, column, and 3×3 box
//! contains each digit exactly once. With 9 cells per house this is
//! equivalent to the house holding 9 distinct digits, so each check
//! collects a [`DigitSet`] and asks whether it is full.

use crate::{board::Board, digit_set::DigitSet, house::House};

/// Collects the set of digits present in a house.
///
/// Empty cells contribute nothing, and duplicates collapse into a
/// single member.
#[must_use]
pub fn house_digits(board: &Board, house: House) -> DigitSet {
    house.positions().filter_map(|pos| board[pos]).collect()
}

/// Returns `true` if the house contains all nine digits.
///
/// A duplicate digit crowds out another one and an empty cell leaves a
/// gap, so a house with 9 distinct digits is complete and correct.
#[must_use]
pub fn house_is_complete(board: &Board, house: House) -> bool {
    house_digits(board, house).is_full()
}

/// Returns the first incomplete house, if any.
///
/// Houses are scanned in [`House::ALL`] order: rows top to bottom, then
/// columns left to right, then boxes in raster order.
#[must_use]
pub fn first_violation(board: &Board) -> Option<House> {
    House::ALL
        .into_iter()
        .find(|&house| !house_is_complete(board, house))
}

/// Returns `true` if the board is a valid solved Sudoku.
///
/// # Examples
///
/// ```
/// use veridoku_core::{Board, verify};
///
/// let board: Board = "
///     534678912
///     672195348
///     198342567
///     859761423
///     426853791
///     713924856
///     961537284
///     287419635
///     345286179
/// "
/// .parse()
/// .unwrap();
/// assert!(verify::is_valid(&board));
/// ```
#[must_use]
pub fn is_valid(board: &Board) -> bool {
    first_violation(board).is_none()
}
