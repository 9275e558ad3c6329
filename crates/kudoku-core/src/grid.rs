//! The 81-cell digit grid and the canonical puzzle string format.
//!
//! A [`DigitGrid`] is a plain value: 81 cells, each empty or holding a digit.
//! It is the currency between the board, solver, and generator — puzzles,
//! snapshots, and solutions are all digit grids.
//!
//! The canonical string format is exactly 81 characters, `'1'..'9'` for a
//! clue and any other character (canonically `'.'`) for an empty cell; no
//! whitespace or row separators.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{cell::CellIndex, digit::Digit};

/// Errors produced when a puzzle fails validation before any search begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MalformedPuzzleError {
    /// The input does not describe exactly 81 cells.
    #[display("puzzle must describe exactly 81 cells, got {found}")]
    WrongLength {
        /// Number of cells found in the input.
        found: usize,
    },
    /// A raw cell value was outside the range 0-9.
    #[display("cell value must be in 0-9, got {found}")]
    InvalidDigit {
        /// The offending value.
        found: u8,
    },
    /// Two equal clues share a row, column, or region.
    #[display("clue at cell {cell} repeats a digit within its row, column, or region")]
    ConflictingClues {
        /// One of the conflicting cells.
        cell: CellIndex,
    },
}

/// An 81-cell grid of optional digits, indexed by [`CellIndex`].
///
/// # Examples
///
/// ```
/// use kudoku_core::{CellIndex, Digit, DigitGrid};
///
/// let mut grid = DigitGrid::new();
/// assert_eq!(grid.clue_count(), 0);
///
/// grid.set(CellIndex::new(0), Some(Digit::D8));
/// assert_eq!(grid.get(CellIndex::new(0)), Some(Digit::D8));
/// assert_eq!(grid.clue_count(), 1);
/// ```
///
/// Parsing and printing use the canonical 81-character format:
///
/// ```
/// use kudoku_core::DigitGrid;
///
/// let text = "84..7.59.5.....38....5.3..2.2.....1.3.....9...7.9.52..9.5..4.....7.1....28...7...";
/// let grid: DigitGrid = text.parse()?;
/// assert_eq!(grid.to_string(), text);
/// # Ok::<(), kudoku_core::MalformedPuzzleError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct DigitGrid([u8; 81]);

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; 81])
    }

    /// Returns the digit at the given cell, or `None` if the cell is empty.
    #[must_use]
    pub fn get(&self, cell: CellIndex) -> Option<Digit> {
        Digit::new(self.0[cell.index()])
    }

    /// Returns the raw value at the given cell (`0` = empty).
    #[must_use]
    pub fn value(&self, cell: CellIndex) -> u8 {
        self.0[cell.index()]
    }

    /// Sets or clears the digit at the given cell.
    pub fn set(&mut self, cell: CellIndex, digit: Option<Digit>) {
        self.0[cell.index()] = digit.map_or(0, Digit::value);
    }

    /// Returns the number of non-empty cells.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.0.iter().filter(|&&v| v != 0).count()
    }

    /// Returns whether every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(|&v| v != 0)
    }

    /// Returns whether every non-empty cell of `self` holds the same digit in
    /// `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(&mine, &theirs)| mine == 0 || mine == theirs)
    }

    /// Returns an iterator over all cells and their contents.
    pub fn cells(&self) -> impl Iterator<Item = (CellIndex, Option<Digit>)> + '_ {
        CellIndex::ALL.into_iter().map(|cell| (cell, self.get(cell)))
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for DigitGrid {
    type Err = MalformedPuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = [0u8; 81];
        let mut found = 0;
        for (i, ch) in s.chars().enumerate() {
            if let Some(slot) = values.get_mut(i) {
                // Non-digit characters (and '0') mean an empty cell.
                *slot = ch
                    .to_digit(10)
                    .and_then(|d| u8::try_from(d).ok())
                    .unwrap_or(0);
            }
            found += 1;
        }
        if found != values.len() {
            return Err(MalformedPuzzleError::WrongLength { found });
        }
        Ok(Self(values))
    }
}

impl TryFrom<&[u8]> for DigitGrid {
    type Error = MalformedPuzzleError;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        let values: [u8; 81] = values
            .try_into()
            .map_err(|_| MalformedPuzzleError::WrongLength { found: values.len() })?;
        if let Some(&found) = values.iter().find(|&&v| v > 9) {
            return Err(MalformedPuzzleError::InvalidDigit { found });
        }
        Ok(Self(values))
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &value in &self.0 {
            let ch = match value {
                0 => '.',
                v => char::from(b'0' + v),
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitGrid(\"{self}\")")
    }
}
