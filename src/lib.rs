pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod selector;
pub mod ui;
pub mod writer;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, OutputConfig, ParserConfig, SelectorConfig};
pub use error::{MovieBinsError, Result, UserFriendlyError};

// Core functionality re-exports
pub use parser::{Movie, MovieParser, ParseOutcome};
pub use selector::{Candidate, CandidateFilter, DirectoryScanner, Selection, SizeRank};
pub use ui::{GracefulShutdown, Menu, MenuChoice, OutputFormatter, OutputMode, ProgressManager};
pub use writer::{OutputDirBuilder, ProcessingReport, WriteProgress, YearWriter};

use std::path::Path;

/// Main library interface: one instance drives select -> parse -> write runs.
pub struct MovieBins {
    config: Config,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
    shutdown: GracefulShutdown,
}

impl MovieBins {
    /// Create a new MovieBins instance with the provided configuration
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Result<Self> {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let progress_manager = ProgressManager::new(!quiet);
        let shutdown = GracefulShutdown::new()?;

        Ok(Self {
            config,
            output_formatter,
            progress_manager,
            shutdown,
        })
    }

    /// Create a new MovieBins instance for testing (no signal handler conflicts)
    #[cfg(test)]
    pub fn new_for_test(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let progress_manager = ProgressManager::new(!quiet);
        let shutdown = GracefulShutdown::new_for_test();

        Self {
            config,
            output_formatter,
            progress_manager,
            shutdown,
        }
    }

    /// Create MovieBins instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        };

        Self::new(config, output_mode, cli_args.verbose, cli_args.quiet)
    }

    /// Run one full processing operation for the given selection.
    ///
    /// Selects the input file, parses it into memory, creates the output
    /// directory, and writes one year bucket file per distinct year. Files
    /// written before a failure stay in place.
    pub fn process(&self, selection: &Selection) -> Result<ProcessingReport> {
        let (candidate, outcome) = self.preview(selection)?;
        self.shutdown.check_shutdown()?;

        let output_dir = OutputDirBuilder::new(&self.config.output).create()?;
        let dir_name = output_dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        self.output_formatter
            .success(&format!("Created directory with name {}", dir_name));

        let progress = self.write_records(&outcome.movies, &output_dir)?;

        for error in &progress.errors {
            self.output_formatter.warning(error);
        }

        self.output_formatter.print_write_summary(&progress);

        Ok(ProcessingReport::new(
            candidate.name,
            outcome.count(),
            outcome.skipped.len(),
            dir_name,
            &progress,
        ))
    }

    /// Select and parse without touching the filesystem beyond reads.
    pub fn preview(&self, selection: &Selection) -> Result<(Candidate, ParseOutcome)> {
        self.shutdown.check_shutdown()?;

        let candidate = self.select(selection)?;
        let outcome = self.parse_catalog(&candidate)?;

        Ok((candidate, outcome))
    }

    /// Resolve a selection to a concrete input file
    fn select(&self, selection: &Selection) -> Result<Candidate> {
        let scanner = DirectoryScanner::new(&self.config.selector);

        let candidate = match selection {
            Selection::Largest => {
                let candidate = scanner.select_by_size(SizeRank::Largest)?.ok_or_else(|| {
                    MovieBinsError::NoMatchingFile {
                        directory: scanner.directory().display().to_string(),
                    }
                })?;
                self.output_formatter.success(&format!(
                    "Now processing the largest file named {}",
                    candidate.name
                ));
                candidate
            }
            Selection::Smallest => {
                let candidate = scanner.select_by_size(SizeRank::Smallest)?.ok_or_else(|| {
                    MovieBinsError::NoMatchingFile {
                        directory: scanner.directory().display().to_string(),
                    }
                })?;
                self.output_formatter.success(&format!(
                    "Now processing the smallest file named {}",
                    candidate.name
                ));
                candidate
            }
            Selection::Named(path) => {
                let candidate = scanner.resolve_named(path)?;
                self.output_formatter.success(&format!(
                    "Now processing the chosen file named {}",
                    candidate.name
                ));
                candidate
            }
        };

        self.output_formatter
            .debug(&format!("Selected {} ({} bytes)", candidate.name, candidate.size));

        Ok(candidate)
    }

    /// Parse the selected catalog into memory
    fn parse_catalog(&self, candidate: &Candidate) -> Result<ParseOutcome> {
        let parser = MovieParser::new(&self.config.parser);
        let outcome = parser.parse_file(&candidate.path)?;

        for line in &outcome.skipped {
            self.output_formatter.warning(line);
        }

        self.output_formatter.success(&format!(
            "Processed file {} and parsed data for {} movies",
            candidate.name,
            outcome.count()
        ));

        Ok(outcome)
    }

    /// Write year bucket files with progress tracking
    fn write_records(&self, movies: &[Movie], output_dir: &Path) -> Result<WriteProgress> {
        let record_progress = self
            .progress_manager
            .create_record_progress(movies.len() as u64);
        let progress_callback = {
            let pb = record_progress.clone();
            move |progress: &WriteProgress| {
                ui::progress::update_record_progress(&pb, progress);
            }
        };

        let writer = YearWriter::new();
        let progress = writer.write_records(movies, output_dir, Some(&progress_callback))?;

        ui::progress::finish_progress_with_summary(
            &record_progress,
            &format!("Wrote {} titles", progress.records_written),
            progress.elapsed(),
        );

        Ok(progress)
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(MovieBinsError::Io)?;
        Ok(())
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Check if shutdown has been requested
    pub fn is_running(&self) -> bool {
        self.shutdown.is_running()
    }

    /// Request graceful shutdown
    pub fn request_shutdown(&self) {
        self.shutdown.request_shutdown();
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &MovieBinsError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}
