//! Core data structures for the Kudoku Sudoku engine.
//!
//! This crate provides the fundamental, efficient types shared by the board,
//! solver, and generator crates:
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: Candidate sets encoded as 9-bit masks
//! - [`cell`]: Cell indices, areas (rows, columns, regions), and the
//!   precomputed peer topology of the 9×9 grid
//! - [`cell_set`]: Sets of board cells encoded as 81-bit masks
//! - [`grid`]: The 81-cell digit grid and the canonical puzzle string format
//!
//! # Examples
//!
//! ```
//! use kudoku_core::{CellIndex, Digit, DigitGrid, DigitSet};
//!
//! // Parse a puzzle from the canonical 81-character format.
//! let grid: DigitGrid = "\
//!     84..7.59.5.....38....5.3..2.2.....1.3.....9...7.9.52..9.5..4.....7.1....28...7..."
//!     .parse()?;
//! assert_eq!(grid.clue_count(), 27);
//!
//! // Candidate sets are bit-encoded; a resolved set decodes to its digit.
//! let set = DigitSet::only(Digit::D7);
//! assert_eq!(set.single(), Some(Digit::D7));
//!
//! // Every cell knows its up-to-20 peers.
//! assert_eq!(CellIndex::new(40).peers().len(), 20);
//! # Ok::<(), kudoku_core::MalformedPuzzleError>(())
//! ```

pub mod cell;
pub mod cell_set;
pub mod digit;
pub mod digit_set;
pub mod grid;

pub use self::{
    cell::{Area, CellIndex},
    cell_set::CellSet,
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, MalformedPuzzleError},
};
