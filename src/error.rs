use std::io;

use thiserror::Error;

/// Unified error type for the recipe book.
///
/// Lookups and collection inserts report absence and duplicates through
/// `Option` / `bool`. This enum covers the paths where a reason has to travel
/// further: ingestion and the strict insert.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error while reading an input file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A line of input could not be turned into a recipe.
    #[error("Malformed input at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    /// A recipe with this name is already in the book.
    #[error("Duplicate recipe: {0}")]
    Duplicate(String),
    /// No recipe with this name.
    #[error("Recipe not found: {0}")]
    NotFound(String),
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
