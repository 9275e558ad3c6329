//! Duplicate-digit detection and per-cell severity flags.
//!
//! Validity is a function of the board's current values, never stored
//! authoritatively: the tracker keeps one offender set per area and derives
//! each cell's [`Severity`] from the state of its three owning areas.

use bitflags::bitflags;
use kudoku_core::{Area, CellIndex, CellSet, DigitGrid};

bitflags! {
    /// Invalidity severity of a single cell, as consumed by the renderer.
    ///
    /// The area flags mark membership in a currently violated row, column,
    /// or region; [`CELL`](Severity::CELL) marks the cells that actually
    /// carry a duplicated digit, not merely members of an invalid area.
    /// An empty set means the cell is fully valid.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Severity: u8 {
        /// The cell's row contains a duplicate digit.
        const ROW = 1;
        /// The cell's column contains a duplicate digit.
        const COLUMN = 2;
        /// The cell's region contains a duplicate digit.
        const REGION = 4;
        /// The cell itself is one of the duplicate offenders.
        const CELL = 8;
    }
}

/// Tracks, per area, which cells carry duplicated digits.
///
/// The tracker must be told when values change: [`recompute_around`]
/// re-derives exactly the three areas owning a mutated cell, while
/// [`recompute_all`] rebuilds everything (used at construction).
///
/// [`recompute_around`]: ValidityTracker::recompute_around
/// [`recompute_all`]: ValidityTracker::recompute_all
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidityTracker {
    /// One offender set per area, indexed by [`Area::ordinal`].
    offenders: [CellSet; 27],
}

impl ValidityTracker {
    /// Creates a tracker with every area considered valid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans one area of `values` and returns its offending cells.
    ///
    /// The first occurrence of each digit is remembered; once a second
    /// occurrence appears, the original cell and every later duplicate are
    /// all reported. An empty result means the area is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use kudoku_core::{Area, CellIndex, Digit, DigitGrid};
    /// use kudoku_board::ValidityTracker;
    ///
    /// let mut values = DigitGrid::new();
    /// values.set(CellIndex::new(0), Some(Digit::D5));
    /// values.set(CellIndex::new(3), Some(Digit::D5));
    ///
    /// let offenders = ValidityTracker::find_offenders(&values, Area::Row(0));
    /// assert!(offenders.contains(CellIndex::new(0)));
    /// assert!(offenders.contains(CellIndex::new(3)));
    /// assert_eq!(offenders.len(), 2);
    /// ```
    #[must_use]
    pub fn find_offenders(values: &DigitGrid, area: Area) -> CellSet {
        let mut first_seen: [Option<CellIndex>; 9] = [None; 9];
        let mut offenders = CellSet::EMPTY;
        for cell in area.cells() {
            if let Some(digit) = values.get(cell) {
                let slot = &mut first_seen[usize::from(digit.value() - 1)];
                match *slot {
                    None => *slot = Some(cell),
                    Some(first) => {
                        offenders.insert(first);
                        offenders.insert(cell);
                    }
                }
            }
        }
        offenders
    }

    /// Rebuilds the offender sets of all 27 areas from `values`.
    pub fn recompute_all(&mut self, values: &DigitGrid) {
        for area in Area::ALL {
            self.offenders[area.ordinal()] = Self::find_offenders(values, area);
        }
    }

    /// Re-derives the three areas owning `cell` from `values`.
    ///
    /// Must be called after every value change at `cell`; areas not owning
    /// the cell cannot have changed and keep their previous state.
    pub fn recompute_around(&mut self, values: &DigitGrid, cell: CellIndex) {
        for area in cell.areas() {
            self.offenders[area.ordinal()] = Self::find_offenders(values, area);
        }
    }

    /// Returns whether the area currently holds no duplicate digit.
    #[must_use]
    pub fn is_area_valid(&self, area: Area) -> bool {
        self.offenders[area.ordinal()].is_empty()
    }

    /// Returns the offending cells recorded for the area.
    #[must_use]
    pub fn area_offenders(&self, area: Area) -> CellSet {
        self.offenders[area.ordinal()]
    }

    /// Derives the severity of a cell from its three owning areas.
    #[must_use]
    pub fn severity(&self, cell: CellIndex) -> Severity {
        let mut severity = Severity::empty();
        let area_flags = [Severity::ROW, Severity::COLUMN, Severity::REGION];
        for (area, flag) in cell.areas().into_iter().zip(area_flags) {
            let offenders = self.offenders[area.ordinal()];
            if !offenders.is_empty() {
                severity |= flag;
                if offenders.contains(cell) {
                    severity |= Severity::CELL;
                }
            }
        }
        severity
    }
}

#[cfg(test)]
mod tests {
    use kudoku_core::Digit;

    use super::*;

    fn values_with(cells: &[(usize, u8)]) -> DigitGrid {
        let mut values = DigitGrid::new();
        for &(index, value) in cells {
            values.set(CellIndex::new(index), Digit::new(value));
        }
        values
    }

    #[test]
    fn test_clean_area_has_no_offenders() {
        let values = values_with(&[(0, 1), (1, 2), (2, 3), (3, 4)]);
        assert!(ValidityTracker::find_offenders(&values, Area::Row(0)).is_empty());
    }

    #[test]
    fn test_duplicate_reports_first_and_later_occurrences() {
        // 5 at columns 1, 4, and 7 of row 2.
        let values = values_with(&[(19, 5), (22, 5), (25, 5)]);
        let offenders = ValidityTracker::find_offenders(&values, Area::Row(2));
        let indices: Vec<_> = offenders.iter().map(CellIndex::index).collect();
        assert_eq!(indices, vec![19, 22, 25]);
    }

    #[test]
    fn test_distinct_duplicate_digits_all_reported() {
        // Row 0: two 1s and two 9s.
        let values = values_with(&[(0, 1), (2, 1), (5, 9), (8, 9)]);
        let offenders = ValidityTracker::find_offenders(&values, Area::Row(0));
        assert_eq!(offenders.len(), 4);
    }

    #[test]
    fn test_severity_flags_each_owning_area() {
        // Two 5s in row 0, which also share region 0.
        let values = values_with(&[(0, 5), (1, 5)]);
        let mut tracker = ValidityTracker::new();
        tracker.recompute_all(&values);

        // Offenders carry the area flags plus CELL.
        assert_eq!(
            tracker.severity(CellIndex::new(0)),
            Severity::ROW | Severity::REGION | Severity::CELL
        );
        // A bystander in the same row and region is flagged but not an offender.
        assert_eq!(
            tracker.severity(CellIndex::new(2)),
            Severity::ROW | Severity::REGION
        );
        // Same region only.
        assert_eq!(tracker.severity(CellIndex::new(9)), Severity::REGION);
        // Same row, different region.
        assert_eq!(tracker.severity(CellIndex::new(5)), Severity::ROW);
        // Unrelated cell.
        assert_eq!(tracker.severity(CellIndex::new(40)), Severity::empty());
    }

    #[test]
    fn test_recompute_around_leaves_other_areas_intact() {
        // Duplicate 7s in column 0 (regions 0 and 3), duplicate 5s in row 0.
        let mut values = values_with(&[(0, 5), (3, 5), (9, 7), (36, 7)]);
        let mut tracker = ValidityTracker::new();
        tracker.recompute_all(&values);
        assert!(!tracker.is_area_valid(Area::Row(0)));
        assert!(!tracker.is_area_valid(Area::Column(0)));

        // Clearing cell 3 fixes row 0; the column 0 violation is untouched.
        values.set(CellIndex::new(3), None);
        tracker.recompute_around(&values, CellIndex::new(3));

        assert!(tracker.is_area_valid(Area::Row(0)));
        assert!(!tracker.is_area_valid(Area::Column(0)));
        assert_eq!(
            tracker.severity(CellIndex::new(9)),
            Severity::COLUMN | Severity::CELL
        );
        assert_eq!(tracker.severity(CellIndex::new(0)), Severity::COLUMN);
    }

    #[test]
    fn test_severity_bit_values() {
        assert_eq!(Severity::ROW.bits(), 1);
        assert_eq!(Severity::COLUMN.bits(), 2);
        assert_eq!(Severity::REGION.bits(), 4);
        assert_eq!(Severity::CELL.bits(), 8);
        assert_eq!(Severity::all().bits(), 15);
    }
}
