//! Error types for seed import

use thiserror::Error;

/// Why a seed token could not be applied. The target grid is untouched in
/// every case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// Seed declares more rows or columns than the target grid has
    #[error("seed is {seed_rows}x{seed_cols} but the grid is only {rows}x{cols}")]
    Oversize {
        seed_rows: usize,
        seed_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// Token is not a valid seed
    #[error("malformed seed: {0}")]
    Malformed(String),
}

impl SeedError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        SeedError::Malformed(reason.into())
    }
}

/// Result type for seed operations
pub type Result<T> = std::result::Result<T, SeedError>;
