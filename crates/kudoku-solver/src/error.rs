use kudoku_core::MalformedPuzzleError;

/// Errors from the single-solution convenience accessor [`solve`].
///
/// [`search`] and friends treat "no solution" as a normal empty result; only
/// [`solve`] promotes it to an error because it promised a solution.
///
/// [`solve`]: crate::solve
/// [`search`]: crate::search
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolveError {
    /// The puzzle was rejected before any search began.
    #[display("malformed puzzle: {_0}")]
    Malformed(#[from] MalformedPuzzleError),
    /// The puzzle is well-formed but admits no solution.
    #[display("puzzle has no solution")]
    NoSolution,
}
