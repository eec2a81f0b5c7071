//! Board types: cell states and the cross-shaped grid.
//!
//! The grid is square with dimension `2 * arm + 1`. The playable region
//! is the cross formed by the middle vertical and horizontal strips of
//! width `arm`; the four corner blocks are permanently out of bounds.

pub mod cell;
pub mod grid;

pub use cell::Cell;
pub use grid::Board;
