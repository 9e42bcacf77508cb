//! Error types for cluetrail

use thiserror::Error;

/// Main error type for hunt generation and workbook access
#[derive(Debug, Error)]
pub enum HuntError {
    /// The pool is too small to seed a hunt
    #[error("need at least 2 clues to generate a hunt, found {0}")]
    InsufficientClues(usize),

    /// Per-group retry cap exhausted
    #[error(
        "could not generate a valid sequence for group {group} after {attempts} attempts; \
         try using more clues or fewer groups"
    )]
    UnsatisfiableConstraints { group: usize, attempts: usize },

    /// The clue table exists but holds no usable clues
    #[error("no clues found in table '{0}'")]
    EmptyCluePool(String),

    /// A named table is absent from the workbook
    #[error("table '{0}' not found in workbook")]
    MissingTable(String),

    #[error("workbook I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for cluetrail operations
pub type Result<T> = std::result::Result<T, HuntError>;
