//! The 27 constraint groups of the board.

use std::fmt::{self, Display};

use crate::position::Position;

/// One constraint group of the board: a row, a column, or a 3×3 box.
///
/// The 27 houses are the units of verification: a board is a valid
/// solution exactly when every house contains the digits 1-9 once each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// Row `y`, counted top to bottom.
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// Column `x`, counted left to right.
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// 3×3 box `index`, in raster order (left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// The nine rows, top to bottom.
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut y = 0;
        while y < 9 {
            rows[y as usize] = Self::Row { y };
            y += 1;
        }
        rows
    };

    /// The nine columns, left to right.
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut x = 0;
        while x < 9 {
            columns[x as usize] = Self::Column { x };
            x += 1;
        }
        columns
    };

    /// The nine 3×3 boxes, in raster order.
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut index = 0;
        while index < 9 {
            boxes[index as usize] = Self::Box { index };
            index += 1;
        }
        boxes
    };

    /// All 27 houses: rows first, then columns, then boxes.
    ///
    /// This is the scan order of
    /// [`first_violation`](crate::verify::first_violation).
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        while i < 9 {
            all[i] = Self::ROWS[i];
            all[i + 9] = Self::COLUMNS[i];
            all[i + 18] = Self::BOXES[i];
            i += 1;
        }
        all
    };

    /// Returns the absolute [`Position`] of the `i`-th cell of this
    /// house.
    ///
    /// Rows count cells left to right, columns top to bottom, and boxes
    /// in raster order within the box.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn cell_position(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns an iterator over the 9 positions of this house.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..9).map(move |i| self.cell_position(i))
    }
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            House::Row { y } => write!(f, "row {y}"),
            House::Column { x } => write!(f, "column {x}"),
            House::Box { index } => write!(f, "box {index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order_is_rows_columns_boxes() {
        assert_eq!(House::ALL.len(), 27);
        assert_eq!(House::ALL[0], House::Row { y: 0 });
        assert_eq!(House::ALL[8], House::Row { y: 8 });
        assert_eq!(House::ALL[9], House::Column { x: 0 });
        assert_eq!(House::ALL[17], House::Column { x: 8 });
        assert_eq!(House::ALL[18], House::Box { index: 0 });
        assert_eq!(House::ALL[26], House::Box { index: 8 });
    }

    #[test]
    fn test_row_positions() {
        let positions: Vec<_> = House::Row { y: 3 }.positions().collect();
        assert_eq!(positions.len(), 9);
        assert_eq!(positions[0], Position::new(0, 3));
        assert_eq!(positions[8], Position::new(8, 3));
    }

    #[test]
    fn test_column_positions() {
        let positions: Vec<_> = House::Column { x: 6 }.positions().collect();
        assert_eq!(positions[0], Position::new(6, 0));
        assert_eq!(positions[8], Position::new(6, 8));
    }

    #[test]
    fn test_box_positions_raster_order() {
        let positions: Vec<_> = House::Box { index: 4 }.positions().collect();
        assert_eq!(positions[0], Position::new(3, 3));
        assert_eq!(positions[1], Position::new(4, 3));
        assert_eq!(positions[3], Position::new(3, 4));
        assert_eq!(positions[8], Position::new(5, 5));
    }

    #[test]
    fn test_houses_cover_each_cell_three_times() {
        let mut counts = [0u32; 81];
        for house in House::ALL {
            for pos in house.positions() {
                counts[usize::from(pos.y()) * 9 + usize::from(pos.x())] += 1;
            }
        }
        assert!(counts.iter().all(|&count| count == 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(House::Row { y: 2 }.to_string(), "row 2");
        assert_eq!(House::Column { x: 7 }.to_string(), "column 7");
        assert_eq!(House::Box { index: 0 }.to_string(), "box 0");
    }
}
