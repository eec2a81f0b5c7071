//! Error kinds reported by the engine.
//!
//! The engine never recovers from or retries these; it reports them
//! synchronously to the caller and guarantees no state changed. Higher
//! layers decide what to do: the interactive `Session` deliberately
//! swallows `InvalidMove` and resets its selection buffer.

use serde::{Deserialize, Serialize};

use crate::moves::Pos;

/// Errors reported by board construction and jump execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    /// Arm thickness is not an odd integer greater than 1.
    /// Raised only at construction.
    InvalidConfiguration { arm: i32 },
    /// Designated empty cell is outside the grid or outside the
    /// playable cross region. Raised only at construction.
    InvalidEmptyCell { row: i32, col: i32 },
    /// A jump failed a legality condition. The board and score are
    /// guaranteed unchanged.
    InvalidMove { from: Pos, to: Pos },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidConfiguration { arm } => write!(
                f,
                "Invalid arm value {}, must be positive odd number larger than 1",
                arm
            ),
            GameError::InvalidEmptyCell { row, col } => {
                write!(f, "Invalid empty cell position ({},{})", row, col)
            }
            GameError::InvalidMove { from, to } => {
                write!(f, "Invalid move from {} to {}", from, to)
            }
        }
    }
}

impl std::error::Error for GameError {}
