//! Per-area used-digit masks for O(1) candidate pruning.

use kudoku_core::{CellIndex, Digit, DigitGrid, DigitSet, MalformedPuzzleError};

/// Compact record of which digits are already placed in each row, column,
/// and region.
///
/// The index lives only inside a search: it is rebuilt from a grid snapshot
/// when a search starts and updated incrementally as the search places and
/// removes digits, so the grid itself never carries redundant derived state.
///
/// # Examples
///
/// ```
/// use kudoku_core::{CellIndex, Digit, DigitGrid};
/// use kudoku_solver::ConstraintIndex;
///
/// let mut index = ConstraintIndex::new();
/// index.place(CellIndex::new(0), Digit::D8);
///
/// // 8 is no longer a candidate anywhere in row 0, column 0, or region 0.
/// assert!(!index.candidates_for(CellIndex::new(5)).contains(Digit::D8));
/// assert!(!index.candidates_for(CellIndex::new(72)).contains(Digit::D8));
/// assert!(index.candidates_for(CellIndex::new(40)).contains(Digit::D8));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintIndex {
    rows: [DigitSet; 9],
    columns: [DigitSet; 9],
    regions: [DigitSet; 9],
}

impl ConstraintIndex {
    /// Creates an index with no digits placed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from a grid snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedPuzzleError::ConflictingClues`] if two equal
    /// digits share a row, column, or region — such a grid can never be
    /// searched meaningfully, so it is rejected before any search begins.
    pub fn from_grid(grid: &DigitGrid) -> Result<Self, MalformedPuzzleError> {
        let mut index = Self::new();
        for (cell, digit) in grid.cells() {
            if let Some(digit) = digit {
                if !index.candidates_for(cell).contains(digit) {
                    return Err(MalformedPuzzleError::ConflictingClues { cell });
                }
                index.place(cell, digit);
            }
        }
        Ok(index)
    }

    /// Returns the digits already used in the given row.
    #[must_use]
    pub fn used_in_row(&self, row: u8) -> DigitSet {
        self.rows[usize::from(row)]
    }

    /// Returns the digits already used in the given column.
    #[must_use]
    pub fn used_in_column(&self, column: u8) -> DigitSet {
        self.columns[usize::from(column)]
    }

    /// Returns the digits already used in the given region.
    #[must_use]
    pub fn used_in_region(&self, region: u8) -> DigitSet {
        self.regions[usize::from(region)]
    }

    /// Returns the digits still legal at the given cell.
    ///
    /// This is the complement, within the nine-digit universe, of the union
    /// of the cell's row, column, and region masks. An empty result is a
    /// dead end during search.
    #[must_use]
    pub fn candidates_for(&self, cell: CellIndex) -> DigitSet {
        (self.used_in_row(cell.row())
            | self.used_in_column(cell.column())
            | self.used_in_region(cell.region()))
        .complement()
    }

    /// Records a digit as placed at the given cell.
    pub fn place(&mut self, cell: CellIndex, digit: Digit) {
        self.rows[usize::from(cell.row())].insert(digit);
        self.columns[usize::from(cell.column())].insert(digit);
        self.regions[usize::from(cell.region())].insert(digit);
    }

    /// Removes a previously placed digit (used when backtracking).
    pub fn remove(&mut self, cell: CellIndex, digit: Digit) {
        self.rows[usize::from(cell.row())].remove(digit);
        self.columns[usize::from(cell.column())].remove(digit);
        self.regions[usize::from(cell.region())].remove(digit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_grid_records_used_digits() {
        let grid: DigitGrid = format!("123{}", ".".repeat(78)).parse().unwrap();
        let index = ConstraintIndex::from_grid(&grid).unwrap();

        let used = index.used_in_row(0);
        assert!(used.contains(Digit::D1));
        assert!(used.contains(Digit::D2));
        assert!(used.contains(Digit::D3));
        assert_eq!(used.len(), 3);

        assert_eq!(index.used_in_column(0).len(), 1);
        assert_eq!(index.used_in_region(0).len(), 3);
        assert_eq!(index.used_in_row(5), DigitSet::EMPTY);
    }

    #[test]
    fn test_candidates_exclude_all_three_areas() {
        let mut index = ConstraintIndex::new();
        index.place(CellIndex::new(0), Digit::D1); // row 0
        index.place(CellIndex::new(9), Digit::D2); // column 0
        index.place(CellIndex::new(10), Digit::D3); // region 0

        let candidates = index.candidates_for(CellIndex::new(1));
        assert!(!candidates.contains(Digit::D1));
        assert!(candidates.contains(Digit::D2)); // different column
        assert!(!candidates.contains(Digit::D3));
        assert_eq!(candidates.len(), 7);
    }

    #[test]
    fn test_place_then_remove_restores_candidates() {
        let mut index = ConstraintIndex::new();
        let cell = CellIndex::new(40);

        index.place(cell, Digit::D7);
        assert!(!index.candidates_for(cell).contains(Digit::D7));

        index.remove(cell, Digit::D7);
        assert_eq!(index.candidates_for(cell), DigitSet::FULL);
        assert_eq!(index, ConstraintIndex::new());
    }

    #[test]
    fn test_from_grid_rejects_conflicting_clues() {
        // Two 5s in row 0.
        let grid: DigitGrid = format!("5..5{}", ".".repeat(77)).parse().unwrap();
        let err = ConstraintIndex::from_grid(&grid).unwrap_err();
        assert_eq!(
            err,
            MalformedPuzzleError::ConflictingClues {
                cell: CellIndex::new(3)
            }
        );
    }

    #[test]
    fn test_from_grid_rejects_region_conflict() {
        // 9 at cells 0 and 10 share region 0 but neither row nor column.
        let grid: DigitGrid = format!("9{}9{}", ".".repeat(9), ".".repeat(70))
            .parse()
            .unwrap();
        assert!(matches!(
            ConstraintIndex::from_grid(&grid),
            Err(MalformedPuzzleError::ConflictingClues { .. })
        ));
    }
}
