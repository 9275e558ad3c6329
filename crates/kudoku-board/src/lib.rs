//! Interactive board state for the Kudoku engine.
//!
//! This crate holds the mutable, always-consistent [`Board`] — 81 cells of
//! values plus locked flags for the original clues — and the
//! [`ValidityTracker`] that derives duplicate-digit severity per cell. The
//! two are deliberately separate value types connected by explicit
//! recomputation calls: the board never carries redundant derived fields
//! that could go stale.
//!
//! The presentation layer consumes exactly two things here:
//! [`Board::cell_view`] for rendering and [`Board::set_value`] as the sole
//! mutation entry point.
//!
//! # Examples
//!
//! ```
//! use kudoku_board::{Board, Severity};
//!
//! let mut board: Board =
//!     "84..7.59.5.....38....5.3..2.2.....1.3.....9...7.9.52..9.5..4.....7.1....28...7..."
//!         .parse()?;
//!
//! // Clue cells are locked; writes to them are ignored.
//! board.set_value(0, 1);
//! assert_eq!(board.cell_view(0).value, 8);
//!
//! // Writing a duplicate digit flags the offending cells.
//! board.set_value(2, 8);
//! assert!(board.cell_view(2).severity.contains(Severity::CELL));
//! # Ok::<(), kudoku_core::MalformedPuzzleError>(())
//! ```

pub mod board;
pub mod validity;

pub use self::{
    board::{Board, CellView},
    validity::{Severity, ValidityTracker},
};
