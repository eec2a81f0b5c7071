//! Cell states.

use serde::{Deserialize, Serialize};

/// State of a single grid cell.
///
/// Corner cells are `OutOfBounds` for the life of the board and never
/// change. Cells inside the cross region are always either `Marble` or
/// `Empty`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Corner cell outside the cross region.
    OutOfBounds,
    /// Cell holding a marble.
    Marble,
    /// Vacant playable cell.
    Empty,
}

impl Cell {
    /// The symbol used in the canonical text rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::OutOfBounds => ' ',
            Cell::Marble => 'O',
            Cell::Empty => '_',
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
