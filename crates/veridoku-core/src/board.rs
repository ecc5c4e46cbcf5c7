//! The 9×9 board and its text representation.

use std::fmt::{self, Display};
use std::ops::Index;
use std::str::FromStr;

use crate::{digit::Digit, position::Position};

/// A 9×9 Sudoku board.
///
/// Each cell holds either a digit or nothing. Cells are stored in raster
/// order (left to right, top to bottom) and addressed by [`Position`].
///
/// Boards parse from text with one row per line: nine characters per row,
/// `1`-`9` for a digit and `0` for an empty cell. Lines are trimmed and
/// blank lines are skipped, so indented or spaced-out literals work too.
///
/// # Examples
///
/// ```
/// use veridoku_core::{Board, Digit, Position};
///
/// let board: Board = "
///     530070000
///     600195000
///     098000060
///     800060003
///     400803001
///     700020006
///     060000280
///     000419005
///     000080079
/// "
/// .parse()
/// .unwrap();
/// assert_eq!(board[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(board[Position::new(2, 0)], None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
}

impl Board {
    /// Creates a board from 81 cells in raster order.
    #[must_use]
    pub const fn from_cells(cells: [Option<Digit>; 81]) -> Self {
        Self { cells }
    }

    /// Creates a board with every cell empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self::from_cells([None; 81])
    }
}

impl Index<Position> for Board {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.cell_index()]
    }
}

/// Error returned when a board cannot be parsed from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The text does not contain exactly 9 non-blank rows.
    #[display("expected 9 rows, found {found}")]
    WrongRowCount {
        /// Number of non-blank rows found.
        found: usize,
    },
    /// A row does not contain exactly 9 cells.
    #[display("row {row} has {found} cells, expected 9")]
    WrongRowWidth {
        /// Row index (0-8).
        row: u8,
        /// Number of cells found in the row.
        found: usize,
    },
    /// A cell contains a character other than `0`-`9`.
    #[display("invalid character {ch:?} at row {row}, column {column}")]
    InvalidCharacter {
        /// Row index (0-8).
        row: u8,
        /// Column index (0-8).
        column: u8,
        /// The offending character.
        ch: char,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != 9 {
            return Err(ParseBoardError::WrongRowCount { found: rows.len() });
        }

        let mut cells = [None; 81];
        for (y, line) in (0..9).zip(&rows) {
            let width = line.chars().count();
            if width != 9 {
                return Err(ParseBoardError::WrongRowWidth { row: y, found: width });
            }
            for (x, ch) in (0..9).zip(line.chars()) {
                let pos = Position::new(x, y);
                cells[pos.cell_index()] = match ch {
                    '0' => None,
                    _ => Some(Digit::from_char(ch).ok_or(ParseBoardError::InvalidCharacter {
                        row: y,
                        column: x,
                        ch,
                    })?),
                };
            }
        }
        Ok(Self { cells })
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..9 {
                match self[Position::new(x, y)] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "0")?,
                }
            }
        }
        Ok(())
    }
}
