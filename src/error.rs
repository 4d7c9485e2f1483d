use thiserror::Error;

#[derive(Error, Debug)]
pub enum MovieBinsError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to create output directory: {path}")]
    DirectoryCreateFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write year file: {path}")]
    FileWriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No suitable input file found in {directory}")]
    NoMatchingFile { directory: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Operation was cancelled by user")]
    Cancelled,
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for MovieBinsError {
    fn user_message(&self) -> String {
        match self {
            MovieBinsError::FileNotFound { path } => {
                format!("The file {} was not found.", path)
            }
            MovieBinsError::DirectoryCreateFailed { path, source } => {
                format!("Failed to create directory {}: {}", path, source)
            }
            MovieBinsError::FileWriteFailed { path, source } => {
                format!("Failed to write {}: {}", path, source)
            }
            MovieBinsError::NoMatchingFile { .. } => "No suitable file found.".to_string(),
            MovieBinsError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            MovieBinsError::Cancelled => "Operation was cancelled by user".to_string(),
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            MovieBinsError::FileNotFound { .. } => Some(
                "Check the spelling of the path and that the file exists. Relative paths are resolved against the current directory.".to_string(),
            ),
            MovieBinsError::DirectoryCreateFailed { .. } => Some(
                "The generated name may already exist, or the target directory may not be writable. Re-run to draw a fresh name, or point --output at a writable location.".to_string(),
            ),
            MovieBinsError::FileWriteFailed { .. } => Some(
                "Files written before the failure are left in place. Check free space and permissions on the output directory.".to_string(),
            ),
            MovieBinsError::NoMatchingFile { directory } => Some(format!(
                "Candidate files must start with the configured prefix and contain the marker (by default movies_*.csv*). Searched: {}",
                directory
            )),
            MovieBinsError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all required fields are present.".to_string(),
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for MovieBinsError {
    fn from(error: toml::de::Error) -> Self {
        MovieBinsError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MovieBinsError>;
