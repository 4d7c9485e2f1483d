pub mod output_dir;
pub mod year_writer;

pub use output_dir::OutputDirBuilder;
pub use year_writer::{WriteProgress, YearWriter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Summary of one completed processing run, printable in every output mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingReport {
    pub source_file: String,
    pub records_parsed: usize,
    pub lines_skipped: usize,
    pub output_directory: String,
    pub year_files: usize,
    pub processed_at: DateTime<Utc>,
    pub duration: Duration,
    pub errors: Vec<String>,
}

impl ProcessingReport {
    pub fn new(
        source_file: String,
        records_parsed: usize,
        lines_skipped: usize,
        output_directory: String,
        progress: &WriteProgress,
    ) -> Self {
        Self {
            source_file,
            records_parsed,
            lines_skipped,
            output_directory,
            year_files: progress.year_files(),
            processed_at: Utc::now(),
            duration: progress.elapsed(),
            errors: progress.errors.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_from_progress() {
        let mut progress = WriteProgress::new(3);
        progress.update(&crate::parser::Movie::new("A", 1999, "", 0.0));
        progress.update(&crate::parser::Movie::new("B", 1999, "", 0.0));
        progress.update(&crate::parser::Movie::new("C", 2004, "", 0.0));
        progress.add_error("chmod failed somewhere");

        let report = ProcessingReport::new(
            "movies_sample.csv".to_string(),
            3,
            0,
            "user.movies.777".to_string(),
            &progress,
        );

        assert_eq!(report.records_parsed, 3);
        assert_eq!(report.year_files, 2);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let progress = WriteProgress::new(0);
        let report = ProcessingReport::new(
            "movies_empty.csv".to_string(),
            0,
            0,
            "user.movies.1".to_string(),
            &progress,
        );

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("movies_empty.csv"));
        assert!(json.contains("year_files"));
    }
}
