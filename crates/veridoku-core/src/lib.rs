//! Core data structures and validation for the Veridoku board verifier.
//!
//! This crate models a 9x9 Sudoku board and decides whether it is a valid
//! solution: every row, every column, and every 3x3 box must contain the
//! digits 1 through 9 exactly once.
//!
//! # Overview
//!
//! - [`digit`]: type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: a 9-bit set of digits; a full set is a valid house
//! - [`position`]: board (x, y) coordinates
//! - [`board`]: the 81-cell board and its text format
//! - [`house`]: the 27 constraint groups (rows, columns, boxes)
//! - [`verify`]: the validation routine itself
//!
//! # Examples
//!
//! ```
//! use veridoku_core::{Board, verify};
//!
//! let board: Board = "
//!     534678912
//!     672195348
//!     198342567
//!     859761423
//!     426853791
//!     713924856
//!     961537284
//!     287419635
//!     345286179
//! "
//! .parse()?;
//!
//! assert!(verify::is_valid(&board));
//! # Ok::<(), veridoku_core::ParseBoardError>(())
//! ```

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod house;
pub mod position;
pub mod verify;

// Re-export commonly used types
pub use self::{
    board::{Board, ParseBoardError},
    digit::Digit,
    digit_set::DigitSet,
    house::House,
    position::Position,
};
