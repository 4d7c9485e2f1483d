use crate::config::ParserConfig;
use crate::error::{MovieBinsError, Result};
use crate::parser::record::Movie;
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Fixed field order of a catalog line: title,year,languages,rating.
pub const FIELDS_PER_RECORD: usize = 4;

/// Result of one parse pass: the record list in file order plus per-line
/// diagnostics for rejected lines.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub movies: Vec<Movie>,
    pub skipped: Vec<String>,
}

impl ParseOutcome {
    pub fn count(&self) -> usize {
        self.movies.len()
    }
}

/// Reads a comma-separated movie catalog into memory.
///
/// The format is fixed: one header line (always discarded), then data lines
/// split on literal commas into title,year,languages,rating. There is no
/// quoting or escaping support; a comma inside a title corrupts that record.
pub struct MovieParser {
    max_line_len: usize,
}

impl MovieParser {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            max_line_len: config.max_line_len,
        }
    }

    /// Parses the catalog at `path`, preserving file order.
    ///
    /// Over-long and under-fielded lines are rejected individually and
    /// recorded in the outcome; malformed numeric fields never reject a line.
    /// The file handle is closed on every exit path.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ParseOutcome> {
        let path = path.as_ref();

        let file = fs::File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => MovieBinsError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => MovieBinsError::Io(e),
        })?;

        let reader = BufReader::new(file);
        let mut outcome = ParseOutcome::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;

            // The first line is a header, discarded unconditionally.
            if index == 0 {
                continue;
            }

            let line_number = index + 1;

            if line.len() > self.max_line_len {
                outcome.skipped.push(format!(
                    "line {}: {} bytes exceeds the {} byte limit",
                    line_number,
                    line.len(),
                    self.max_line_len
                ));
                continue;
            }

            let line = line.trim_end_matches('\r');
            let fields: Vec<&str> = line.split(',').collect();

            if fields.len() < FIELDS_PER_RECORD {
                outcome.skipped.push(format!(
                    "line {}: expected {} fields, found {}",
                    line_number,
                    FIELDS_PER_RECORD,
                    fields.len()
                ));
                continue;
            }

            // Fields beyond the fourth are ignored.
            outcome
                .movies
                .push(Movie::from_fields(fields[0], fields[1], fields[2], fields[3]));
        }

        Ok(outcome)
    }
}
