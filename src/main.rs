use clap::Parser;
use moviebins::{
    Cli, Menu, MenuChoice, MovieBins, MovieBinsError, OutputFormatter, OutputMode, Selection,
    UserFriendlyError,
};
use std::io;
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    // Create MovieBins instance
    let app = match MovieBins::from_cli(&cli) {
        Ok(app) => app,
        Err(e) => {
            print_startup_error(&e);
            return 1;
        }
    };

    // Handle dry run mode
    if cli.dry_run {
        return handle_dry_run(&cli, &app);
    }

    // One-shot mode when a selection flag was given, interactive menu otherwise
    match cli.selection() {
        Some(selection) => run_once(&app, &selection),
        None => run_menu(&app),
    }
}

fn run_once(app: &MovieBins, selection: &Selection) -> i32 {
    match app.process(selection) {
        Ok(report) => {
            app.output_formatter().print_processing_report(&report);

            if report.errors.is_empty() {
                0 // Success
            } else {
                2 // Success with warnings
            }
        }
        Err(e) => {
            app.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn run_menu(app: &MovieBins) -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock());

    loop {
        if !app.is_running() {
            break;
        }

        match menu.main_choice() {
            Ok(MenuChoice::Exit) => break,
            Ok(MenuChoice::Process) => match menu.selection_choice() {
                Ok(Some(selection)) => match app.process(&selection) {
                    Ok(report) => app.output_formatter().print_processing_report(&report),
                    Err(MovieBinsError::Cancelled) => break,
                    // Operation failures are reported and the menu returns.
                    Err(e) => app.handle_error(&e),
                },
                // Invalid sub-choice falls back to the top-level menu.
                Ok(None) => continue,
                Err(_) => break,
            },
            Err(_) => break,
        }
    }

    0
}

fn handle_dry_run(cli: &Cli, app: &MovieBins) -> i32 {
    let formatter = app.output_formatter();

    let selection = match cli.selection() {
        Some(selection) => selection,
        None => {
            formatter.error("--dry-run requires --largest, --smallest, or --file");
            return 2;
        }
    };

    formatter.start_operation("DRY RUN MODE - no directory will be created");
    formatter.print_separator();

    match app.preview(&selection) {
        Ok((candidate, outcome)) => {
            println!("  Strategy:       {}", selection.describe());
            println!("  Would process:  {} ({} bytes)", candidate.name, candidate.size);
            println!("  Records parsed: {}", outcome.count());
            if !outcome.skipped.is_empty() {
                println!("  Lines skipped:  {}", outcome.skipped.len());
            }

            let config = app.config();
            println!("  Output label:   {}", config.output.label);
            println!(
                "  Output base:    {}",
                config.output.base_directory.display()
            );

            formatter.print_separator();
            formatter.success("Dry run completed successfully");
            0
        }
        Err(e) => {
            app.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "moviebins.toml".to_string());

    match MovieBins::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  moviebins --config {}", config_path);
            println!("\nEdit the file to customize settings for your needs.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn print_startup_error(error: &MovieBinsError) {
    // Create a basic formatter for startup errors
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}

fn exit_code_for(error: &MovieBinsError) -> i32 {
    match error {
        MovieBinsError::Cancelled => 130, // Interrupted (SIGINT)
        MovieBinsError::Config { .. } => 2,
        MovieBinsError::FileNotFound { .. } => 3,
        MovieBinsError::NoMatchingFile { .. } => 4,
        MovieBinsError::DirectoryCreateFailed { .. } => 5,
        MovieBinsError::FileWriteFailed { .. } => 6,
        _ => 1, // General error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_command() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let cli = Cli::try_parse_from([
            "moviebins",
            "--generate-config",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .unwrap();

        let exit_code = handle_generate_config(&cli);
        assert_eq!(exit_code, 0);
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[selector]"));
    }

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(exit_code_for(&MovieBinsError::Cancelled), 130);
        assert_eq!(
            exit_code_for(&MovieBinsError::Config {
                message: "bad".to_string()
            }),
            2
        );
        assert_eq!(
            exit_code_for(&MovieBinsError::FileNotFound {
                path: "x".to_string()
            }),
            3
        );
        assert_eq!(
            exit_code_for(&MovieBinsError::NoMatchingFile {
                directory: ".".to_string()
            }),
            4
        );
        assert_eq!(
            exit_code_for(&MovieBinsError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "io"
            ))),
            1
        );
    }
}
