pub mod reader;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::book::RecipeBook;
use crate::error::Result;

pub use reader::{RecipeReader, parse_line};

/// What to do when the input names a recipe that is already in the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep the first copy, log and count the rest.
    #[default]
    Skip,
    /// Stop the load with `Error::Duplicate`.
    Reject,
}

/// Ingestion settings.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Discard the first line.
    pub has_header: bool,
    /// Field separator.
    pub delimiter: char,
    pub duplicates: DuplicatePolicy,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            has_header: true,
            delimiter: ',',
            duplicates: DuplicatePolicy::Skip,
        }
    }
}

/// Outcome of a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub inserted: usize,
    pub duplicates: usize,
}

/// Feed every record from `reader` into `book` through its duplicate check.
///
/// Stops at the first malformed line or I/O error. Records inserted before
/// the failure stay in the book.
pub fn load_into<R: BufRead>(
    book: &mut RecipeBook,
    reader: R,
    options: &LoadOptions,
) -> Result<LoadReport> {
    let mut report = LoadReport::default();
    let mut records = RecipeReader::new(reader, options);

    while let Some(recipe) = records.next() {
        let recipe = recipe?;
        match options.duplicates {
            DuplicatePolicy::Skip => {
                let name = recipe.name.clone();
                if book.add_recipe(recipe) {
                    report.inserted += 1;
                } else {
                    warn!(line = records.line_no(), name = %name, "skipping duplicate recipe");
                    report.duplicates += 1;
                }
            }
            DuplicatePolicy::Reject => {
                book.try_add_recipe(recipe)?;
                report.inserted += 1;
            }
        }
    }

    Ok(report)
}

/// Open `path` and load it into a fresh book.
pub fn load_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<RecipeBook> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let mut book = RecipeBook::new();
    let report = load_into(&mut book, BufReader::new(file), options)?;
    info!(
        path = %path.display(),
        inserted = report.inserted,
        duplicates = report.duplicates,
        "loaded recipe book"
    );
    Ok(book)
}
