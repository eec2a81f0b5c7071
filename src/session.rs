//! Click-aggregation layer for interactive frontends.
//!
//! A GUI reports one cell selection at a time. `Session` buffers two
//! selections into a (source, destination) pair, hands the pair to the
//! engine once, and returns a fresh snapshot for redraw.
//!
//! ## Policy
//!
//! When the engine rejects the pair, the session swallows the error and
//! simply resets its buffer; no feedback reaches the user and the board
//! is presented unchanged. That policy belongs here and only here: the
//! engine itself always reports the rejection.

use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::board::Board;
use crate::engine::SolitaireEngine;
use crate::moves::{Jump, Pos};

/// Aggregates raw cell selections into jumps against an owned engine.
///
/// ## Example
///
/// ```
/// use marble_solitaire::{Session, SolitaireEngine};
///
/// let mut session = Session::new(SolitaireEngine::new());
/// assert!(session.select(1, 3).is_none()); // first endpoint buffered
/// let board = session.select(3, 3).unwrap(); // pair complete, jump applied
/// assert_eq!(session.score(), 31);
/// assert_eq!(board.marble_count(), 31);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    engine: SolitaireEngine,
    pending: SmallVec<[Pos; 2]>,
}

impl Session {
    /// Wrap an engine in a fresh session with an empty selection buffer.
    #[must_use]
    pub fn new(engine: SolitaireEngine) -> Self {
        Self {
            engine,
            pending: SmallVec::new(),
        }
    }

    /// Record a cell selection.
    ///
    /// The first selection of a pair is buffered and `None` is returned.
    /// The second completes the pair: the jump is attempted, a rejection
    /// is discarded, the buffer is cleared, and a snapshot of the
    /// (possibly unchanged) board is returned for redraw.
    #[instrument(skip(self))]
    pub fn select(&mut self, row: i32, col: i32) -> Option<Board> {
        self.pending.push(Pos::new(row, col));
        if self.pending.len() < 2 {
            return None;
        }

        let jump = Jump::new(self.pending[0], self.pending[1]);
        if let Err(err) = self.engine.apply(jump) {
            debug!(%err, "selection pair discarded");
        }
        self.pending.clear();
        Some(self.engine.snapshot())
    }

    /// The buffered source selection, if a pair is half complete.
    /// Frontends use this to highlight the picked cell.
    #[must_use]
    pub fn pending_selection(&self) -> Option<Pos> {
        self.pending.first().copied()
    }

    /// Current score of the underlying engine.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    /// Whether no legal jump remains.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.engine.is_terminal()
    }
}
