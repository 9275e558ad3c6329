//! Backtracking search with most-constrained-cell ordering.

use kudoku_core::{CellIndex, Digit, DigitGrid, DigitSet, MalformedPuzzleError};
use tinyvec::ArrayVec;

use crate::{cancel::CancelToken, constraint_index::ConstraintIndex, error::SolveError};

/// Default solution cap: two solutions are enough to distinguish "unique"
/// from "multiple" without enumerating every completion of a sparse grid.
pub const DEFAULT_SOLUTION_CAP: usize = 2;

/// Result of a cancellable search.
///
/// Cancellation is a normal outcome, not an error, so callers can
/// differentiate "no solution exists" from "the search gave up".
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SearchOutcome {
    /// The search ran to completion; zero solutions means the puzzle is
    /// unsatisfiable.
    Complete(Vec<DigitGrid>),
    /// The cancel token was tripped before the search finished.
    Cancelled,
}

impl SearchOutcome {
    /// Returns the solutions of a completed search, or `None` if cancelled.
    #[must_use]
    pub fn into_solutions(self) -> Option<Vec<DigitGrid>> {
        match self {
            Self::Complete(solutions) => Some(solutions),
            Self::Cancelled => None,
        }
    }
}

/// Candidate iteration order policy for the search.
///
/// The solver tries candidates in ascending digit order; the generator
/// plugs in a shuffling policy to randomize the grid it fills.
pub trait CandidateOrder {
    /// Returns the digit values (1-9) of `candidates` in the order the
    /// search should try them.
    fn arrange(&mut self, candidates: DigitSet) -> ArrayVec<[u8; 9]>;
}

/// Tries candidates in ascending digit order (the default policy).
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascending;

impl CandidateOrder for Ascending {
    fn arrange(&mut self, candidates: DigitSet) -> ArrayVec<[u8; 9]> {
        candidates.iter().map(Digit::value).collect()
    }
}

/// Enumerates solutions of `puzzle`, stopping once `cap` have been found.
///
/// The caller's grid is never mutated; the search works on private copies.
/// A well-formed but unsatisfiable puzzle yields an empty vector, not an
/// error.
///
/// # Errors
///
/// Returns [`MalformedPuzzleError::ConflictingClues`] if the clue pattern
/// already violates row/column/region uniqueness. (Wrong lengths and
/// out-of-range digits are rejected when constructing the [`DigitGrid`]
/// itself.)
pub fn solutions_up_to(
    puzzle: &DigitGrid,
    cap: usize,
) -> Result<Vec<DigitGrid>, MalformedPuzzleError> {
    match search(puzzle, cap, &CancelToken::new())? {
        SearchOutcome::Complete(solutions) => Ok(solutions),
        SearchOutcome::Cancelled => unreachable!("a private token is never cancelled"),
    }
}

/// Cancellable variant of [`solutions_up_to`].
///
/// The token is checked between candidate placements; tripping it yields
/// [`SearchOutcome::Cancelled`].
///
/// # Errors
///
/// Returns [`MalformedPuzzleError::ConflictingClues`] for a clue pattern
/// that already violates uniqueness.
pub fn search(
    puzzle: &DigitGrid,
    cap: usize,
    cancel: &CancelToken,
) -> Result<SearchOutcome, MalformedPuzzleError> {
    search_with_order(puzzle, cap, cancel, &mut Ascending)
}

/// Runs the search with a custom candidate order policy.
///
/// This is the generator's entry point: filling a random grid is exactly
/// this search over the empty grid with a shuffling policy and a cap of 1.
///
/// # Errors
///
/// Returns [`MalformedPuzzleError::ConflictingClues`] for a clue pattern
/// that already violates uniqueness.
pub fn search_with_order<O: CandidateOrder>(
    puzzle: &DigitGrid,
    cap: usize,
    cancel: &CancelToken,
    order: &mut O,
) -> Result<SearchOutcome, MalformedPuzzleError> {
    let constraints = ConstraintIndex::from_grid(puzzle)?;
    let mut search = Search {
        grid: puzzle.clone(),
        constraints,
        solutions: Vec::new(),
        cap,
        cancelled: false,
    };
    search.run(cancel, order);
    if search.cancelled {
        Ok(SearchOutcome::Cancelled)
    } else {
        Ok(SearchOutcome::Complete(search.solutions))
    }
}

/// Returns whether the puzzle has exactly one solution.
///
/// # Errors
///
/// Returns [`MalformedPuzzleError::ConflictingClues`] for a clue pattern
/// that already violates uniqueness.
pub fn is_uniquely_solvable(puzzle: &DigitGrid) -> Result<bool, MalformedPuzzleError> {
    Ok(solutions_up_to(puzzle, DEFAULT_SOLUTION_CAP)?.len() == 1)
}

/// Returns whether `candidate` is a complete, rule-valid grid that agrees
/// with every clue of `puzzle`.
#[must_use]
pub fn verify_solution(puzzle: &DigitGrid, candidate: &DigitGrid) -> bool {
    candidate.is_complete()
        && ConstraintIndex::from_grid(candidate).is_ok()
        && puzzle.is_subset_of(candidate)
}

/// Returns the first solution of `puzzle`.
///
/// # Errors
///
/// Returns [`SolveError::Malformed`] for a rejected clue pattern and
/// [`SolveError::NoSolution`] when the search completes without finding any
/// solution.
pub fn solve(puzzle: &DigitGrid) -> Result<DigitGrid, SolveError> {
    let mut solutions = solutions_up_to(puzzle, 1)?;
    solutions.pop().ok_or(SolveError::NoSolution)
}

struct Search {
    grid: DigitGrid,
    constraints: ConstraintIndex,
    solutions: Vec<DigitGrid>,
    cap: usize,
    cancelled: bool,
}

impl Search {
    /// Picks the unresolved cell with the fewest remaining candidates, ties
    /// broken by lowest index. Returns `None` when every cell is resolved.
    fn select_cell(&self) -> Option<(CellIndex, DigitSet)> {
        let mut best: Option<(CellIndex, DigitSet)> = None;
        for (cell, digit) in self.grid.cells() {
            if digit.is_some() {
                continue;
            }
            let candidates = self.constraints.candidates_for(cell);
            let improves = best.is_none_or(|(_, b)| candidates.len() < b.len());
            if improves {
                best = Some((cell, candidates));
                if candidates.is_empty() {
                    // A dead end; no cell can do worse.
                    break;
                }
            }
        }
        best
    }

    fn run<O: CandidateOrder>(&mut self, cancel: &CancelToken, order: &mut O) {
        if cancel.is_cancelled() {
            self.cancelled = true;
            return;
        }
        if self.solutions.len() >= self.cap {
            return;
        }
        let Some((cell, candidates)) = self.select_cell() else {
            self.solutions.push(self.grid.clone());
            return;
        };
        // An empty candidate set yields no iterations: the branch fails
        // locally and the caller backtracks.
        for value in order.arrange(candidates) {
            let digit = Digit::ALL[usize::from(value) - 1];
            self.constraints.place(cell, digit);
            self.grid.set(cell, Some(digit));
            self.run(cancel, order);
            self.grid.set(cell, None);
            self.constraints.remove(cell, digit);
            if self.cancelled || self.solutions.len() >= self.cap {
                break;
            }
        }
    }
}
