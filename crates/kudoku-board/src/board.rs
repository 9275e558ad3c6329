//! The mutable 81-cell board consumed by the presentation layer.

use std::str::FromStr;

use kudoku_core::{CellIndex, CellSet, Digit, DigitGrid, MalformedPuzzleError};

use crate::validity::{Severity, ValidityTracker};

/// Read-only per-cell view model handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Current value, `0` for empty.
    pub value: u8,
    /// Whether the cell is an original clue and cannot be edited.
    pub locked: bool,
    /// Invalidity severity derived from the cell's row, column, and region.
    pub severity: Severity,
}

/// An interactive board: 81 cell values, locked flags for the original
/// clues, and a validity tracker recomputed on every mutation.
///
/// [`set_value`](Board::set_value) is the sole mutation entry point and is
/// deliberately permissive: out-of-range indices and values are confined to
/// the nearest bound rather than rejected, matching unconstrained UI input
/// events. Locked cells ignore writes entirely.
///
/// # Examples
///
/// ```
/// use kudoku_board::Board;
///
/// let mut board = Board::new();
/// board.set_value(40, 5);
/// assert_eq!(board.cell_view(40).value, 5);
///
/// // Clearing uses value 0.
/// board.set_value(40, 0);
/// assert_eq!(board.cell_view(40).value, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    values: DigitGrid,
    locked: CellSet,
    validity: ValidityTracker,
}

impl Board {
    /// Creates an empty board with every cell unlocked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from a puzzle grid, locking every clue cell.
    #[must_use]
    pub fn from_grid(puzzle: &DigitGrid) -> Self {
        let mut board = Self {
            values: puzzle.clone(),
            locked: CellSet::EMPTY,
            validity: ValidityTracker::new(),
        };
        for (cell, digit) in puzzle.cells() {
            if digit.is_some() {
                board.lock(cell);
            }
        }
        board.validity.recompute_all(&board.values);
        board
    }

    /// Marks a cell as locked. Construction-only: once a clue is locked its
    /// value never changes for the board's lifetime.
    fn lock(&mut self, cell: CellIndex) {
        self.locked.insert(cell);
    }

    /// Sets the value of a cell from interactive input.
    ///
    /// `cell_index` is confined to `[0, 81)` and `value` to `[0, 9]`
    /// (nearest bound); neither is ever an error. Writes to locked cells are
    /// ignored. Validity is recomputed for the cell's row, column, and
    /// region; a write of the already-stored value skips the recomputation,
    /// which is observationally identical.
    pub fn set_value(&mut self, cell_index: usize, value: u8) {
        let cell = CellIndex::new(cell_index.min(CellIndex::COUNT - 1));
        let value = value.min(9);
        if self.locked.contains(cell) || self.values.value(cell) == value {
            return;
        }
        self.values.set(cell, Digit::new(value));
        self.validity.recompute_around(&self.values, cell);
    }

    /// Returns the view model of a cell; the index is confined to `[0, 81)`.
    #[must_use]
    pub fn cell_view(&self, cell_index: usize) -> CellView {
        let cell = CellIndex::new(cell_index.min(CellIndex::COUNT - 1));
        CellView {
            value: self.values.value(cell),
            locked: self.locked.contains(cell),
            severity: self.validity.severity(cell),
        }
    }

    /// Returns the raw value of a cell (`0` = empty).
    #[must_use]
    pub fn value(&self, cell: CellIndex) -> u8 {
        self.values.value(cell)
    }

    /// Returns whether the cell is a locked clue.
    #[must_use]
    pub fn is_locked(&self, cell: CellIndex) -> bool {
        self.locked.contains(cell)
    }

    /// Returns the invalidity severity of a cell.
    #[must_use]
    pub fn severity(&self, cell: CellIndex) -> Severity {
        self.validity.severity(cell)
    }

    /// Returns whether no row, column, or region holds a duplicate digit.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        kudoku_core::Area::ALL
            .into_iter()
            .all(|area| self.validity.is_area_valid(area))
    }

    /// Returns whether every cell is filled and no duplicates exist.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.values.is_complete() && self.is_valid()
    }

    /// Returns a read-only projection of the current values, independent of
    /// any view model; this is what the solver and generator consume.
    #[must_use]
    pub fn snapshot(&self) -> DigitGrid {
        self.values.clone()
    }
}

impl FromStr for Board {
    type Err = MalformedPuzzleError;

    /// Parses the canonical 81-character puzzle string; every clue cell is
    /// locked immediately after being set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let puzzle: DigitGrid = s.parse()?;
        Ok(Self::from_grid(&puzzle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str =
        "84..7.59.5.....38....5.3..2.2.....1.3.....9...7.9.52..9.5..4.....7.1....28...7...";

    #[test]
    fn test_from_str_locks_clues() {
        let board: Board = FIXTURE.parse().unwrap();
        assert!(board.is_locked(CellIndex::new(0)));
        assert!(!board.is_locked(CellIndex::new(2)));
        assert_eq!(board.snapshot().clue_count(), 27);
    }

    #[test]
    fn test_from_str_rejects_wrong_length() {
        let err = "123".parse::<Board>().unwrap_err();
        assert_eq!(err, MalformedPuzzleError::WrongLength { found: 3 });
    }

    #[test]
    fn test_locked_cell_ignores_writes() {
        let mut board: Board = FIXTURE.parse().unwrap();
        board.set_value(0, 1);
        board.set_value(0, 0);
        assert_eq!(board.cell_view(0).value, 8);
    }

    #[test]
    fn test_set_value_confines_out_of_range_input() {
        let mut board = Board::new();

        // Index beyond the board lands on the last cell.
        board.set_value(5000, 3);
        assert_eq!(board.cell_view(80).value, 3);

        // Values beyond 9 are confined to 9.
        board.set_value(0, 200);
        assert_eq!(board.cell_view(0).value, 9);

        // The view accessor confines too.
        assert_eq!(board.cell_view(5000).value, 3);
    }

    #[test]
    fn test_duplicate_write_updates_severity() {
        let mut board = Board::new();
        board.set_value(0, 5);
        board.set_value(1, 5);

        let offender = board.cell_view(0).severity;
        assert!(offender.contains(Severity::ROW));
        assert!(offender.contains(Severity::REGION));
        assert!(offender.contains(Severity::CELL));

        let bystander = board.cell_view(4).severity;
        assert_eq!(bystander, Severity::ROW);

        // Clearing one duplicate restores full validity.
        board.set_value(1, 0);
        assert_eq!(board.cell_view(0).severity, Severity::empty());
        assert!(board.is_valid());
    }

    #[test]
    fn test_clue_conflicts_are_visible_from_construction() {
        // Two 1s in row 0 of the initial clues.
        let text: String = format!("1.1{}", ".".repeat(78));
        let board: Board = text.parse().unwrap();
        assert!(board.cell_view(0).severity.contains(Severity::CELL));
        assert!(board.cell_view(2).severity.contains(Severity::CELL));
        assert!(!board.is_valid());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut board = Board::new();
        let before = board.snapshot();
        board.set_value(10, 4);
        assert_eq!(before.clue_count(), 0);
        assert_eq!(board.snapshot().clue_count(), 1);
    }

    #[test]
    fn test_is_solved() {
        let solution =
            "843672591562491387791583642429736815356128974178945236915864723637219458284357169";
        let board: Board = solution.parse().unwrap();
        assert!(board.is_solved());

        let board: Board = FIXTURE.parse().unwrap();
        assert!(!board.is_solved());
    }
}
