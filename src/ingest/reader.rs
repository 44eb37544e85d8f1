use std::io::{BufRead, Lines};

use crate::error::{Error, Result};
use crate::ingest::LoadOptions;
use crate::recipe::Recipe;

/// Reads recipes from delimited text, one per line.
///
/// Line format:
/// ```text
/// name,difficulty_level,description,mastered_flag
/// ```
///
/// The first line is a header and is skipped unless
/// [`LoadOptions::has_header`] is off. Blank lines are skipped. Yields one
/// `Result<Recipe>` per record; a bad line yields `Error::Malformed` with its
/// 1-based line number and reading may continue past it.
pub struct RecipeReader<R> {
    lines: Lines<R>,
    line_no: usize,
    delimiter: char,
    header_pending: bool,
}

impl<R: BufRead> RecipeReader<R> {
    pub fn new(reader: R, options: &LoadOptions) -> Self {
        RecipeReader {
            lines: reader.lines(),
            line_no: 0,
            delimiter: options.delimiter,
            header_pending: options.has_header,
        }
    }

    /// Line number of the last line read, counting the header.
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for RecipeReader<R> {
    type Item = Result<Recipe>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::Io(e))),
            };
            self.line_no += 1;

            if self.header_pending {
                self.header_pending = false;
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }
            return Some(parse_line(&line, self.delimiter, self.line_no));
        }
    }
}

/// Split one record line into a [`Recipe`].
///
/// Missing trailing fields read as empty; anything after the fourth field is
/// ignored. Only `difficulty_level` can fail.
pub fn parse_line(line: &str, delimiter: char, line_no: usize) -> Result<Recipe> {
    let mut fields = line.split(delimiter);
    let name = fields.next().unwrap_or_default();
    let difficulty = fields.next().unwrap_or_default().trim();
    let description = fields.next().unwrap_or_default();
    let mastered = fields.next().unwrap_or_default() == "1";

    let difficulty = difficulty.parse::<i32>().map_err(|e| Error::Malformed {
        line: line_no,
        reason: format!("difficulty level {difficulty:?}: {e}"),
    })?;

    Ok(Recipe::new(name, difficulty, description, mastered))
}
