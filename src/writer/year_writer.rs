use crate::error::{MovieBinsError, Result};
use crate::parser::Movie;
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::time::{Duration, Instant};

/// Year bucket files are kept at rw-r-----.
pub const FILE_MODE: u32 = 0o640;

/// Running state of one write pass over a record list.
#[derive(Debug)]
pub struct WriteProgress {
    pub records_written: usize,
    pub total_records: usize,
    pub years: HashSet<i32>,
    pub current_title: Option<String>,
    pub start_time: Instant,
    pub errors: Vec<String>,
}

impl WriteProgress {
    pub fn new(total_records: usize) -> Self {
        Self {
            records_written: 0,
            total_records,
            years: HashSet::new(),
            current_title: None,
            start_time: Instant::now(),
            errors: Vec::new(),
        }
    }

    pub fn update(&mut self, movie: &Movie) {
        self.records_written += 1;
        self.years.insert(movie.year);
        self.current_title = Some(movie.title.clone());
    }

    pub fn add_error<S: Into<String>>(&mut self, error: S) {
        self.errors.push(error.into());
    }

    pub fn year_files(&self) -> usize {
        self.years.len()
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Writes each record's title into its year bucket file.
pub struct YearWriter;

impl YearWriter {
    pub fn new() -> Self {
        Self
    }

    /// Appends every title to `<output_dir>/<year>.txt` in input order.
    ///
    /// Each record gets its own open/append/close cycle, and the 0640 mode is
    /// re-applied after every append, even when the file already carries it.
    /// The first failed open or write aborts the remaining records; files
    /// already written stay in place. A failed chmod is recorded and the pass
    /// continues.
    pub fn write_records(
        &self,
        movies: &[Movie],
        output_dir: &Path,
        progress_callback: Option<&dyn Fn(&WriteProgress)>,
    ) -> Result<WriteProgress> {
        let mut progress = WriteProgress::new(movies.len());

        for movie in movies {
            let path = output_dir.join(movie.year_file_name());

            self.append_title(&path, &movie.title)?;

            if let Err(e) = set_file_mode(&path, FILE_MODE) {
                progress.add_error(format!(
                    "failed to set permissions on {}: {}",
                    path.display(),
                    e
                ));
            }

            progress.update(movie);

            if let Some(callback) = progress_callback {
                callback(&progress);
            }
        }

        Ok(progress)
    }

    fn append_title(&self, path: &Path, title: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| MovieBinsError::FileWriteFailed {
                path: path.display().to_string(),
                source: e,
            })?;

        writeln!(file, "{}", title).map_err(|e| MovieBinsError::FileWriteFailed {
            path: path.display().to_string(),
            source: e,
        })
        // The handle drops here; the file is closed before the next record.
    }
}

impl Default for YearWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn set_file_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}
