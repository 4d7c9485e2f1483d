use crate::config::{CliOverrides, Config};
use crate::error::Result;
use crate::selector::Selection;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moviebins")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Partition movie CSV catalogs into per-year title files")]
#[command(
    long_about = "MovieBins reads a comma-separated movie catalog and writes each title \
                       into a year-bucketed text file inside a freshly created, \
                       permission-restricted directory. Without a selection flag it runs \
                       an interactive menu."
)]
#[command(after_help = "EXAMPLES:\n  \
    moviebins                         # interactive menu\n  \
    moviebins --largest               # process the largest movies_*.csv* file\n  \
    moviebins --smallest --quiet\n  \
    moviebins --file movies_2024.csv --label archivist\n  \
    moviebins --largest --dry-run --output-format json")]
pub struct Cli {
    /// Process the largest matching file in the scan directory
    #[arg(long, conflicts_with_all = ["smallest", "file"])]
    pub largest: bool,

    /// Process the smallest matching file in the scan directory
    #[arg(long, conflicts_with = "file")]
    pub smallest: bool,

    /// Process a specific catalog file by path
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Directory to scan for candidate files (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Label used in generated output directory names
    #[arg(short, long, help = "Output directories are named <label>.movies.<n>")]
    pub label: Option<String>,

    /// Where to create the output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Select and parse without creating the output directory
    #[arg(long, help = "Show what would be processed without writing anything")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_directory(self.directory.clone())
            .with_label(self.label.clone())
            .with_output_dir(self.output.clone())
    }

    /// The one-shot selection requested on the command line, if any. `None`
    /// means the interactive menu runs.
    pub fn selection(&self) -> Option<Selection> {
        if self.largest {
            Some(Selection::Largest)
        } else if self.smallest {
            Some(Selection::Smallest)
        } else {
            self.file.clone().map(Selection::Named)
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("moviebins").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_flags_means_interactive() {
        let cli = parse(&[]);
        assert_eq!(cli.selection(), None);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_selection_flags() {
        assert_eq!(parse(&["--largest"]).selection(), Some(Selection::Largest));
        assert_eq!(parse(&["--smallest"]).selection(), Some(Selection::Smallest));
        assert_eq!(
            parse(&["--file", "movies_x.csv"]).selection(),
            Some(Selection::Named(PathBuf::from("movies_x.csv")))
        );
    }

    #[test]
    fn test_conflicting_selection_flags_rejected() {
        let result = Cli::try_parse_from(["moviebins", "--largest", "--smallest"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from(["moviebins", "--largest", "--file", "x.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["moviebins", "--quiet", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&[]).verbosity_level(), 0);
        assert_eq!(parse(&["-v"]).verbosity_level(), 1);
        assert_eq!(parse(&["-vv"]).verbosity_level(), 2);
        assert_eq!(parse(&["--quiet"]).verbosity_level(), 0);
        assert!(parse(&["-v"]).is_verbose());
        assert!(!parse(&["--quiet"]).is_verbose());
    }

    #[test]
    fn test_overrides_carry_cli_values() {
        let cli = parse(&["--label", "archivist", "--directory", "/data/in"]);
        let overrides = cli.create_cli_overrides();
        assert_eq!(overrides.label.as_deref(), Some("archivist"));
        assert_eq!(overrides.directory, Some(PathBuf::from("/data/in")));
        assert_eq!(overrides.output_dir, None);
    }
}
