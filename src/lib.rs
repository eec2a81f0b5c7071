//! # marble-solitaire
//!
//! A peg solitaire (marble solitaire) board engine on generalized
//! cross-shaped boards.
//!
//! ## Design Principles
//!
//! 1. **Configurable Topology**: The arm thickness of the cross and the
//!    initial empty cell are constructor parameters, not constants.
//!    `arm = 3` gives the classic 7x7 board with a 32-marble start.
//!
//! 2. **Check-Then-Commit**: A rejected jump leaves the board and score
//!    untouched. There is never partial mutation to roll back.
//!
//! 3. **Ownership Boundary**: The engine owns the grid exclusively.
//!    External readers get independent deep copies via `snapshot()`,
//!    never a live reference, so a renderer can keep board state across
//!    later moves without aliasing concerns.
//!
//! ## Modules
//!
//! - `board`: Cell states and the cross-shaped grid
//! - `moves`: Positions and jump moves
//! - `engine`: Construction, jump execution, scoring, terminal detection
//! - `error`: Error kinds reported by the engine
//! - `session`: Click-aggregation layer for interactive frontends

pub mod board;
pub mod engine;
pub mod error;
pub mod moves;
pub mod session;

// Re-export commonly used types
pub use crate::board::{Board, Cell};
pub use crate::engine::{SolitaireEngine, DEFAULT_ARM};
pub use crate::error::GameError;
pub use crate::moves::{Jump, Pos};
pub use crate::session::Session;
