//! Backtracking search for the Kudoku engine.
//!
//! The solver enumerates the solutions of a puzzle up to a caller-specified
//! cap, using constraint propagation over per-area used-digit masks and
//! most-constrained-cell ordering. The same search drives three questions:
//!
//! - *solve it*: [`solve`] returns the first solution,
//! - *is it a proper puzzle*: [`is_uniquely_solvable`] caps the search at two
//!   solutions to distinguish "unique" from "multiple" cheaply,
//! - *generate*: the generator runs [`search_with_order`] with a randomized
//!   candidate order.
//!
//! Long-running searches are cooperative: every entry point has a variant
//! threading a [`CancelToken`] through the recursion, and the
//! [`background`] module runs any search on a shared worker thread so a UI
//! thread never blocks.
//!
//! # Examples
//!
//! ```
//! use kudoku_core::DigitGrid;
//!
//! let puzzle: DigitGrid =
//!     "84..7.59.5.....38....5.3..2.2.....1.3.....9...7.9.52..9.5..4.....7.1....28...7..."
//!         .parse()?;
//!
//! let solution = kudoku_solver::solve(&puzzle)?;
//! assert!(kudoku_solver::verify_solution(&puzzle, &solution));
//! assert!(kudoku_solver::is_uniquely_solvable(&puzzle)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{backtrack::*, cancel::CancelToken, constraint_index::ConstraintIndex, error::*};

pub mod background;
mod backtrack;
mod cancel;
mod constraint_index;
mod error;
