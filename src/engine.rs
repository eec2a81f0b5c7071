//! The solitaire game engine.
//!
//! Owns the board and the score, and exposes the full operation set:
//! construction (four surfaces), jump execution, score and terminal
//! queries, snapshots, and textual rendering.
//!
//! ## Invariants
//!
//! - `score` always equals the number of marbles on the board. It is
//!   computed from the grid once at construction and decremented by
//!   exactly 1 per accepted jump, never incremented.
//! - Out-of-bounds cells never change state.
//! - A failed operation leaves the engine bit-for-bit unchanged.

use tracing::{debug, instrument};

use crate::board::{Board, Cell};
use crate::error::GameError;
use crate::moves::{Jump, Pos};

/// Default arm thickness: the classic 7x7 cross.
pub const DEFAULT_ARM: i32 = 3;

/// The peg solitaire game engine.
///
/// ## Example
///
/// ```
/// use marble_solitaire::{Jump, SolitaireEngine};
///
/// let mut engine = SolitaireEngine::new();
/// assert_eq!(engine.score(), 32);
///
/// engine.apply(Jump::between(1, 3, 3, 3)).unwrap();
/// assert_eq!(engine.score(), 31);
/// assert!(!engine.is_terminal());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolitaireEngine {
    board: Board,
    score: u32,
}

impl SolitaireEngine {
    /// Default board: arm thickness 3, empty cell at the grid center.
    #[must_use]
    pub fn new() -> Self {
        // Statically valid configuration, cannot fail.
        Self::build(DEFAULT_ARM, DEFAULT_ARM, DEFAULT_ARM)
            .expect("default configuration is valid")
    }

    /// Arm thickness 3 with the empty cell at the given coordinate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmptyCell` if `(s_row, s_col)` is outside the grid
    /// or outside the playable cross region.
    pub fn with_empty_cell(s_row: i32, s_col: i32) -> Result<Self, GameError> {
        Self::build(DEFAULT_ARM, s_row, s_col)
    }

    /// Given arm thickness with the empty cell at the grid center.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `arm` is not an odd integer
    /// greater than 1.
    pub fn with_arm(arm: i32) -> Result<Self, GameError> {
        Self::build(arm, arm, arm)
    }

    /// Fully explicit: arm thickness and empty cell coordinate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for a bad arm value, then
    /// `InvalidEmptyCell` for a bad empty coordinate.
    pub fn with_arm_and_empty_cell(arm: i32, s_row: i32, s_col: i32) -> Result<Self, GameError> {
        Self::build(arm, s_row, s_col)
    }

    /// Shared construction path. Validation order: arm value, empty-cell
    /// bounds, empty-cell cross membership. Atomic: no partially filled
    /// engine is ever observable.
    fn build(arm: i32, s_row: i32, s_col: i32) -> Result<Self, GameError> {
        if arm <= 1 || arm % 2 == 0 {
            return Err(GameError::InvalidConfiguration { arm });
        }

        let dim = 2 * arm + 1;
        if s_row < 0 || s_row >= dim || s_col < 0 || s_col >= dim {
            return Err(GameError::InvalidEmptyCell {
                row: s_row,
                col: s_col,
            });
        }

        let mut board = Board::cross(arm);
        if board.get(s_row, s_col) != Some(Cell::Marble) {
            return Err(GameError::InvalidEmptyCell {
                row: s_row,
                col: s_col,
            });
        }
        board.set(s_row, s_col, Cell::Empty);

        let score = board.marble_count();
        debug!(arm, s_row, s_col, score, "board initialized");
        Ok(Self { board, score })
    }

    /// Execute a jump: source marble leaps over an adjacent marble into
    /// an empty cell two steps away; the jumped marble is removed.
    ///
    /// Check-then-commit: on rejection nothing changes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMove` if any legality condition fails.
    #[instrument(skip(self))]
    pub fn apply(&mut self, jump: Jump) -> Result<(), GameError> {
        if !self.is_legal(jump) {
            return Err(GameError::InvalidMove {
                from: jump.from,
                to: jump.to,
            });
        }

        let mid = jump.midpoint();
        self.board.set(mid.row, mid.col, Cell::Empty);
        self.board.set(jump.from.row, jump.from.col, Cell::Empty);
        self.board.set(jump.to.row, jump.to.col, Cell::Marble);
        self.score -= 1;

        debug!(%jump, score = self.score, "jump applied");
        Ok(())
    }

    /// Current marble count. O(1), tracked incrementally.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Check whether no legal jump remains anywhere on the board.
    ///
    /// Scans every cell and probes the four candidate destinations with
    /// the same legality check as `apply`. O(dim^2) with constant work
    /// per cell, cheap enough that nothing incremental is tracked.
    ///
    /// Terminal says nothing about the score; it only means no further
    /// interaction is possible.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        for row in 0..self.board.dim() {
            for col in 0..self.board.dim() {
                if self.has_jump_from(row, col) {
                    return false;
                }
            }
        }
        true
    }

    /// Enumerate every legal jump on the current board.
    ///
    /// Empty exactly when `is_terminal()` holds. Useful for frontends
    /// that show hints and for search over the move space.
    #[must_use]
    pub fn legal_jumps(&self) -> Vec<Jump> {
        let mut jumps = Vec::new();
        for row in 0..self.board.dim() {
            for col in 0..self.board.dim() {
                if self.board.get(row, col) != Some(Cell::Marble) {
                    continue;
                }
                for probe in Jump::probes_from(Pos::new(row, col)) {
                    if self.is_legal(probe) {
                        jumps.push(probe);
                    }
                }
            }
        }
        jumps
    }

    /// Take an independent deep copy of the board.
    ///
    /// Mutating the copy never affects the engine, and later engine
    /// mutation never affects a copy already taken.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Render the board in its canonical text form.
    ///
    /// One line per row, cells joined by a single space, rows joined by
    /// newline, no trailing newline. This exact format is a
    /// compatibility surface.
    #[must_use]
    pub fn render(&self) -> String {
        self.board.to_string()
    }

    /// Full legality check for a jump, bounds included.
    fn is_legal(&self, jump: Jump) -> bool {
        // Out-of-grid coordinates fail the lookups below.
        if self.board.get(jump.from.row, jump.from.col) != Some(Cell::Marble) {
            return false;
        }
        if self.board.get(jump.to.row, jump.to.col) != Some(Cell::Empty) {
            return false;
        }
        if !jump.is_orthogonal_two() {
            return false;
        }
        let mid = jump.midpoint();
        self.board.get(mid.row, mid.col) == Some(Cell::Marble)
    }

    /// Check whether the marble at `(row, col)` has any legal jump.
    fn has_jump_from(&self, row: i32, col: i32) -> bool {
        if self.board.get(row, col) != Some(Cell::Marble) {
            return false;
        }
        Jump::probes_from(Pos::new(row, col))
            .iter()
            .any(|&probe| self.is_legal(probe))
    }
}

impl Default for SolitaireEngine {
    fn default() -> Self {
        Self::new()
    }
}
