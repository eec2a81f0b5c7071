//! The cross-shaped board grid.
//!
//! ## Layout
//!
//! For arm thickness `a` the grid is `(2a + 1) x (2a + 1)`. A cell is
//! playable when its row or its column falls inside the centered strip
//! `[(dim - a) / 2, (dim - a) / 2 + a)`. Everything else is a corner and
//! permanently out of bounds.
//!
//! ## Rendering
//!
//! `Display` produces the canonical text form consumed by tests and by
//! textual frontends: one line per row, cells joined by a single space,
//! rows joined by newline, no trailing newline. Out-of-bounds cells
//! render as a blank, so rows carry leading and trailing spaces.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// A square grid of cells with cross topology.
///
/// Coordinates are signed so that callers (notably the terminal-detection
/// scan) can probe past the edge and get an ordinary bounds failure.
///
/// Cloning produces a fully independent deep copy; a clone held by a
/// renderer is unaffected by later engine mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    dim: i32,
    /// Row-major cell storage, `dim * dim` entries.
    cells: Vec<Cell>,
}

impl Board {
    /// Build the initial cross fill for the given arm thickness.
    ///
    /// Every cell in the cross region starts as `Marble`; corners are
    /// `OutOfBounds`. The caller is responsible for validating `arm`
    /// and for designating the empty cell afterwards.
    pub(crate) fn cross(arm: i32) -> Self {
        let dim = 2 * arm + 1;
        let strip = (dim - arm) / 2;
        let in_strip = |x: i32| x >= strip && x < strip + arm;

        let mut cells = Vec::with_capacity((dim * dim) as usize);
        for row in 0..dim {
            for col in 0..dim {
                if in_strip(row) || in_strip(col) {
                    cells.push(Cell::Marble);
                } else {
                    cells.push(Cell::OutOfBounds);
                }
            }
        }

        Self { dim, cells }
    }

    /// Grid dimension (rows == columns == `2 * arm + 1`).
    #[must_use]
    pub fn dim(&self) -> i32 {
        self.dim
    }

    /// Get the cell at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        let idx = self.index(row, col)?;
        Some(self.cells[idx])
    }

    /// Overwrite the cell at `(row, col)`. In-grid coordinates only.
    pub(crate) fn set(&mut self, row: i32, col: i32, cell: Cell) {
        let idx = self
            .index(row, col)
            .expect("set called with out-of-grid coordinates");
        self.cells[idx] = cell;
    }

    /// Count the marbles currently on the board.
    ///
    /// The engine calls this once at construction and tracks the score
    /// incrementally from then on; tests use it as an oracle.
    #[must_use]
    pub fn marble_count(&self) -> u32 {
        self.cells.iter().filter(|&&c| c == Cell::Marble).count() as u32
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.dim as usize)
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || row >= self.dim || col < 0 || col >= self.dim {
            return None;
        }
        Some((row * self.dim + col) as usize)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_fill_arm_3() {
        let board = Board::cross(3);

        assert_eq!(board.dim(), 7);
        // Corners are out of bounds
        assert_eq!(board.get(0, 0), Some(Cell::OutOfBounds));
        assert_eq!(board.get(1, 6), Some(Cell::OutOfBounds));
        assert_eq!(board.get(6, 0), Some(Cell::OutOfBounds));
        assert_eq!(board.get(5, 5), Some(Cell::OutOfBounds));
        // Strips are marbles
        assert_eq!(board.get(0, 3), Some(Cell::Marble));
        assert_eq!(board.get(3, 0), Some(Cell::Marble));
        assert_eq!(board.get(3, 3), Some(Cell::Marble));
        // 49 cells minus four 2x2 corners
        assert_eq!(board.marble_count(), 33);
    }

    #[test]
    fn test_cross_fill_arm_5() {
        let board = Board::cross(5);

        assert_eq!(board.dim(), 11);
        assert_eq!(board.get(2, 2), Some(Cell::OutOfBounds));
        assert_eq!(board.get(2, 3), Some(Cell::Marble));
        assert_eq!(board.marble_count(), 85);
    }

    #[test]
    fn test_get_out_of_grid() {
        let board = Board::cross(3);

        assert_eq!(board.get(-1, 3), None);
        assert_eq!(board.get(3, -2), None);
        assert_eq!(board.get(7, 0), None);
        assert_eq!(board.get(0, 7), None);
    }

    #[test]
    fn test_render_initial_cross() {
        let board = Board::cross(3);

        let expected = concat!(
            "    O O O    \n",
            "    O O O    \n",
            "O O O O O O O\n",
            "O O O O O O O\n",
            "O O O O O O O\n",
            "    O O O    \n",
            "    O O O    ",
        );
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::cross(3);
        let copy = board.clone();

        board.set(3, 3, Cell::Empty);

        assert_eq!(copy.get(3, 3), Some(Cell::Marble));
        assert_eq!(board.get(3, 3), Some(Cell::Empty));
    }

    #[test]
    fn test_serialization_round_trip() {
        let board = Board::cross(3);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(board, deserialized);
    }
}
