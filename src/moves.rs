//! Positions and jump moves.
//!
//! A jump moves a marble two cells in one of the four axis directions,
//! over an adjacent marble, into an empty cell. These types only carry
//! the geometry; legality against a concrete board lives in the engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A grid coordinate.
///
/// Signed on purpose: probe targets two cells past the board edge are
/// representable and simply fail the bounds check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Create a position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A candidate jump from one cell to another.
///
/// ## Example
///
/// ```
/// use marble_solitaire::{Jump, Pos};
///
/// let jump = Jump::between(1, 3, 3, 3);
/// assert_eq!(jump.midpoint(), Pos::new(2, 3));
/// assert!(jump.is_orthogonal_two());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jump {
    /// Source cell (must hold a marble for the jump to be legal).
    pub from: Pos,
    /// Destination cell (must be empty for the jump to be legal).
    pub to: Pos,
}

impl Jump {
    /// Create a jump between two positions.
    #[must_use]
    pub const fn new(from: Pos, to: Pos) -> Self {
        Self { from, to }
    }

    /// Create a jump from raw coordinates.
    #[must_use]
    pub const fn between(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> Self {
        Self::new(Pos::new(from_row, from_col), Pos::new(to_row, to_col))
    }

    /// Check the displacement: exactly two cells along exactly one axis.
    ///
    /// Rules out diagonals, single steps, and longer slides.
    #[must_use]
    pub fn is_orthogonal_two(&self) -> bool {
        let d_row = (self.from.row - self.to.row).abs();
        let d_col = (self.from.col - self.to.col).abs();
        (d_row == 2 && d_col == 0) || (d_col == 2 && d_row == 0)
    }

    /// The jumped-over cell: the arithmetic mean of the endpoints.
    ///
    /// Only meaningful when `is_orthogonal_two()` holds.
    #[must_use]
    pub fn midpoint(&self) -> Pos {
        Pos::new(
            (self.from.row + self.to.row) / 2,
            (self.from.col + self.to.col) / 2,
        )
    }

    /// The four candidate jumps out of a cell (up, down, left, right).
    ///
    /// Targets may land outside the grid; the board lookup rejects those.
    #[must_use]
    pub fn probes_from(origin: Pos) -> SmallVec<[Jump; 4]> {
        let Pos { row, col } = origin;
        SmallVec::from_buf([
            Jump::between(row, col, row - 2, col),
            Jump::between(row, col, row + 2, col),
            Jump::between(row, col, row, col - 2),
            Jump::between(row, col, row, col + 2),
        ])
    }
}

impl std::fmt::Display for Jump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
