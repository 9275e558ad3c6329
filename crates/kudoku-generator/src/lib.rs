//! Puzzle generation for the Kudoku engine.
//!
//! Generation runs in two steps, both driven by the solver's backtracking
//! search:
//!
//! 1. **Fill**: search the empty grid with a randomized candidate order and
//!    a solution cap of 1. The first grid found is the full solution; on an
//!    empty board the search always terminates, so this cannot fail.
//! 2. **Carve**: visit the filled cells in one random order without
//!    replacement, tentatively clearing each and keeping the removal only if
//!    the reduced puzzle still has exactly one solution. Cells whose removal
//!    breaks uniqueness are restored and never retried. Carving stops at the
//!    requested clue count, at the 24-clue floor, or when no eligible cell
//!    remains.
//!
//! Requested clue counts below the floor are silently raised to it: below 24
//! clues uniqueness becomes exceedingly rare and expensive to search for.
//!
//! # Examples
//!
//! ```
//! use kudoku_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::with_num_clues(30);
//! let generated = generator.generate();
//!
//! assert_eq!(generated.puzzle.clue_count(), 30);
//! assert!(generated.puzzle.is_subset_of(&generated.solution));
//! assert!(kudoku_solver::is_uniquely_solvable(&generated.puzzle).unwrap());
//! ```
//!
//! Generation is reproducible from a [`PuzzleSeed`]:
//!
//! ```
//! use kudoku_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let seed = PuzzleSeed::from_bytes([7; 32]);
//! let generator = PuzzleGenerator::new();
//! assert_eq!(generator.generate_with_seed(seed), generator.generate_with_seed(seed));
//! ```

use kudoku_core::{CellIndex, Digit, DigitGrid, DigitSet};
use kudoku_solver::{CancelToken, CandidateOrder, SearchOutcome};
use rand::{Rng, seq::SliceRandom as _};
use tinyvec::ArrayVec;

pub use self::seed::{ParseSeedError, PuzzleSeed};

mod seed;

/// Minimum number of clues a generated puzzle may have.
pub const MIN_PUZZLE_CLUES: usize = 24;

/// Clue count used when the caller does not request one.
pub const DEFAULT_NUM_CLUES: usize = 27;

/// A generated puzzle together with its unique solution and seed.
///
/// Invariants: `puzzle` is a subset of `solution`, has between
/// [`MIN_PUZZLE_CLUES`] and 81 clues, and solving it yields exactly
/// `solution` and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The clue pattern handed to the player.
    pub puzzle: DigitGrid,
    /// The full grid the puzzle uniquely solves to.
    pub solution: DigitGrid,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Result of a cancellable generation run.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum GenerateOutcome {
    /// Generation finished and produced a puzzle.
    Complete(GeneratedPuzzle),
    /// The cancel token was tripped mid-generation.
    Cancelled,
}

impl GenerateOutcome {
    /// Returns the generated puzzle, or `None` if generation was cancelled.
    #[must_use]
    pub fn into_puzzle(self) -> Option<GeneratedPuzzle> {
        match self {
            Self::Complete(generated) => Some(generated),
            Self::Cancelled => None,
        }
    }
}

/// Produces puzzles with a guaranteed-unique solution at a target clue
/// count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    num_clues: usize,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// Creates a generator targeting [`DEFAULT_NUM_CLUES`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_num_clues(DEFAULT_NUM_CLUES)
    }

    /// Creates a generator targeting the given clue count.
    ///
    /// The count is confined to `[MIN_PUZZLE_CLUES, 81]`; requesting fewer
    /// clues than the floor silently raises the target to it.
    #[must_use]
    pub fn with_num_clues(num_clues: usize) -> Self {
        Self {
            num_clues: num_clues.clamp(MIN_PUZZLE_CLUES, 81),
        }
    }

    /// Returns the effective clue target.
    #[must_use]
    pub fn num_clues(&self) -> usize {
        self.num_clues
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        match self.generate_with_cancel(seed, &CancelToken::new()) {
            GenerateOutcome::Complete(generated) => generated,
            GenerateOutcome::Cancelled => unreachable!("a private token is never cancelled"),
        }
    }

    /// Cancellable variant of [`generate_with_seed`].
    ///
    /// The token is checked between search steps and between carve attempts;
    /// tripping it yields [`GenerateOutcome::Cancelled`].
    ///
    /// [`generate_with_seed`]: PuzzleGenerator::generate_with_seed
    #[must_use]
    pub fn generate_with_cancel(&self, seed: PuzzleSeed, cancel: &CancelToken) -> GenerateOutcome {
        let mut rng = seed.rng();
        let Some(solution) = fill_grid(&mut rng, cancel) else {
            return GenerateOutcome::Cancelled;
        };
        let Some(puzzle) = self.carve_clues(&mut rng, &solution, cancel) else {
            return GenerateOutcome::Cancelled;
        };
        GenerateOutcome::Complete(GeneratedPuzzle {
            puzzle,
            solution,
            seed,
        })
    }

    /// Removes clues from a copy of `solution` while uniqueness holds.
    fn carve_clues<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        solution: &DigitGrid,
        cancel: &CancelToken,
    ) -> Option<DigitGrid> {
        let mut puzzle = solution.clone();
        let mut cells = CellIndex::ALL;
        cells.shuffle(rng);

        let mut clues = puzzle.clue_count();
        for cell in cells {
            if clues <= self.num_clues {
                break;
            }
            if cancel.is_cancelled() {
                return None;
            }
            let removed = puzzle.get(cell);
            puzzle.set(cell, None);
            if matches!(kudoku_solver::is_uniquely_solvable(&puzzle), Ok(true)) {
                clues -= 1;
                log::trace!("cleared cell {cell}, {clues} clues remain");
            } else {
                // Removal breaks uniqueness; restore and never retry.
                puzzle.set(cell, removed);
            }
        }
        log::debug!("carved to {clues} clues (target {})", self.num_clues);
        Some(puzzle)
    }
}

/// Searches the empty grid with randomized candidate order; the first
/// solution found is a uniformly scrambled full grid.
fn fill_grid<R: Rng + ?Sized>(rng: &mut R, cancel: &CancelToken) -> Option<DigitGrid> {
    let mut order = Shuffled { rng };
    let outcome = kudoku_solver::search_with_order(&DigitGrid::new(), 1, cancel, &mut order)
        .expect("the empty grid has no conflicting clues");
    match outcome {
        SearchOutcome::Cancelled => None,
        SearchOutcome::Complete(mut solutions) => {
            let solution = solutions
                .pop()
                .expect("search over the empty grid always completes a grid");
            log::debug!("filled solution grid");
            Some(solution)
        }
    }
}

/// Candidate order policy that shuffles each candidate set.
struct Shuffled<'r, R: ?Sized> {
    rng: &'r mut R,
}

impl<R: Rng + ?Sized> CandidateOrder for Shuffled<'_, R> {
    fn arrange(&mut self, candidates: DigitSet) -> ArrayVec<[u8; 9]> {
        let mut values: ArrayVec<[u8; 9]> = candidates.iter().map(Digit::value).collect();
        values.shuffle(self.rng);
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(byte: u8) -> PuzzleSeed {
        PuzzleSeed::from_bytes([byte; 32])
    }

    #[test]
    fn test_generate_hits_requested_clue_count() {
        let generated = PuzzleGenerator::with_num_clues(30).generate_with_seed(seed(1));
        assert_eq!(generated.puzzle.clue_count(), 30);
        assert!(generated.puzzle.is_subset_of(&generated.solution));
        assert!(kudoku_solver::is_uniquely_solvable(&generated.puzzle).unwrap());
        assert!(kudoku_solver::verify_solution(&generated.puzzle, &generated.solution));
    }

    #[test]
    fn test_generated_solution_is_rule_valid() {
        let generated = PuzzleGenerator::new().generate_with_seed(seed(2));
        assert!(generated.solution.is_complete());
        assert!(kudoku_solver::verify_solution(&DigitGrid::new(), &generated.solution));
    }

    #[test]
    fn test_clue_floor_is_enforced() {
        let generator = PuzzleGenerator::with_num_clues(10);
        assert_eq!(generator.num_clues(), MIN_PUZZLE_CLUES);

        let generated = generator.generate_with_seed(seed(3));
        assert!(generated.puzzle.clue_count() >= MIN_PUZZLE_CLUES);
        assert!(kudoku_solver::is_uniquely_solvable(&generated.puzzle).unwrap());
    }

    #[test]
    fn test_clue_ceiling_is_enforced() {
        let generator = PuzzleGenerator::with_num_clues(200);
        assert_eq!(generator.num_clues(), 81);

        // Target 81 means nothing gets carved.
        let generated = generator.generate_with_seed(seed(4));
        assert_eq!(generated.puzzle, generated.solution);
    }

    #[test]
    fn test_same_seed_reproduces_the_puzzle() {
        let generator = PuzzleGenerator::new();
        let a = generator.generate_with_seed(seed(5));
        let b = generator.generate_with_seed(seed(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_give_different_puzzles() {
        let generator = PuzzleGenerator::new();
        let a = generator.generate_with_seed(seed(6));
        let b = generator.generate_with_seed(seed(7));
        assert_ne!(a.solution, b.solution);
    }

    #[test]
    fn test_pre_cancelled_generation_reports_cancelled() {
        let token = CancelToken::new();
        token.cancel();
        let outcome = PuzzleGenerator::new().generate_with_cancel(seed(8), &token);
        assert_eq!(outcome, GenerateOutcome::Cancelled);
        assert!(outcome.is_cancelled());
        assert_eq!(outcome.into_puzzle(), None);
    }

    #[test]
    fn test_default_targets_default_clue_count() {
        assert_eq!(PuzzleGenerator::default().num_clues(), DEFAULT_NUM_CLUES);
    }
}
