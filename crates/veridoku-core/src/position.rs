//! Board position coordinates.

/// A cell position on the 9x9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top
/// to bottom). Both coordinates are checked at construction time, so a
/// `Position` always names a real cell and board lookups never go out
/// of bounds.
///
/// # Examples
///
/// ```
/// use veridoku_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.box_index(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Returns the `i`-th cell (0-8, raster order within the box) of box
    /// `index` (0-8, left to right, top to bottom).
    ///
    /// # Panics
    ///
    /// Panics if `index` or `i` is not in the range 0-8.
    #[must_use]
    pub const fn from_box(index: u8, i: u8) -> Self {
        assert!(index < 9 && i < 9);
        Self::new((index % 3) * 3 + i % 3, (index / 3) * 3 + i / 3)
    }

    /// Column index (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Row index (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Index of the 3x3 box containing this position (0-8, left to
    /// right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    pub(crate) const fn cell_index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates() {
        let pos = Position::new(2, 6);
        assert_eq!(pos.x(), 2);
        assert_eq!(pos.y(), 6);
        assert_eq!(pos.cell_index(), 56);
    }

    #[test]
    fn test_box_index_corners() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(8, 0).box_index(), 2);
        assert_eq!(Position::new(0, 8).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
        assert_eq!(Position::new(4, 4).box_index(), 4);
    }

    #[test]
    fn test_from_box_raster_order() {
        // Box 0 starts at the top-left corner.
        assert_eq!(Position::from_box(0, 0), Position::new(0, 0));
        assert_eq!(Position::from_box(0, 8), Position::new(2, 2));
        // Box 5 has its top-left corner at (6, 3).
        assert_eq!(Position::from_box(5, 0), Position::new(6, 3));
        assert_eq!(Position::from_box(5, 4), Position::new(7, 4));
        // Every cell of a box maps back to that box.
        for index in 0..9 {
            for i in 0..9 {
                assert_eq!(Position::from_box(index, i).box_index(), index);
            }
        }
    }

    #[test]
    #[should_panic(expected = "x < 9 && y < 9")]
    fn test_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }
}
