//! Reproducible 32-byte seeds for puzzle generation.

use std::{fmt, str::FromStr};

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;

/// Errors produced when parsing a seed from its hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input was not exactly 64 characters.
    #[display("seed must be 64 hex characters, got {found}")]
    WrongLength {
        /// Number of characters found.
        found: usize,
    },
    /// The input contained a non-hexadecimal character.
    #[display("seed contains a non-hex character: {found:?}")]
    InvalidHexDigit {
        /// The offending character.
        found: char,
    },
}

/// A 32-byte seed identifying one generated puzzle.
///
/// The same seed always produces the same puzzle and solution, which makes
/// generation reproducible across runs — useful for benchmarks, bug reports,
/// and sharing puzzles.
///
/// Seeds round-trip through a 64-character lowercase hex form:
///
/// ```
/// use kudoku_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1".parse()?;
/// assert_eq!(
///     seed.to_string(),
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
/// );
/// # Ok::<(), kudoku_generator::ParseSeedError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh seed from the process-wide random source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the deterministic generator RNG for this seed.
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PuzzleSeed({self})")
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 64 {
            return Err(ParseSeedError::WrongLength { found: chars.len() });
        }
        let mut bytes = [0; 32];
        for (slot, pair) in bytes.iter_mut().zip(chars.chunks_exact(2)) {
            let nibble = |ch: char| {
                ch.to_digit(16)
                    .ok_or(ParseSeedError::InvalidHexDigit { found: ch })
            };
            let value = nibble(pair[0])? * 16 + nibble(pair[1])?;
            *slot = u8::try_from(value).expect("two hex nibbles fit in a byte");
        }
        Ok(Self(bytes))
    }
}
