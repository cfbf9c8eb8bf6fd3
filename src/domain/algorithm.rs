//! Selects which step engine variant advances the board.

use super::{GridState, step};

/// Both variants produce identical generations; they differ only in how
/// the next generation is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell on the calling thread
    #[default]
    Serial,
    /// Next generation computed with rayon, written back serially
    Parallel,
}

impl Algorithm {
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// The other variant, for the UI toggle
    pub fn next(self) -> Self {
        match self {
            Algorithm::Serial => Algorithm::Parallel,
            Algorithm::Parallel => Algorithm::Serial,
        }
    }

    /// Advance `grid` one generation with this variant
    pub fn advance(self, grid: &mut GridState) {
        match self {
            Algorithm::Serial => step::advance(grid),
            Algorithm::Parallel => step::advance_parallel(grid),
        }
    }
}
