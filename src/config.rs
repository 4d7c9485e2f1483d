use crate::error::{MovieBinsError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub parser: ParserConfig,
    pub selector: SelectorConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParserConfig {
    pub max_line_len: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SelectorConfig {
    pub prefix: String,
    pub marker: String,
    pub directory: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub label: String,
    pub base_directory: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            selector: SelectorConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        // Matches the 1024-byte line buffer of the legacy importer.
        Self { max_line_len: 1024 }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            prefix: "movies_".to_string(),
            marker: ".csv".to_string(),
            directory: PathBuf::from("."),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            label: std::env::var("USER").unwrap_or_else(|_| "movies".to_string()),
            base_directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(MovieBinsError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| MovieBinsError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| MovieBinsError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["moviebins.toml", ".moviebins.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref directory) = cli_args.directory {
            self.selector.directory = directory.clone();
        }

        if let Some(ref prefix) = cli_args.prefix {
            self.selector.prefix = prefix.clone();
        }

        if let Some(ref label) = cli_args.label {
            self.output.label = label.clone();
        }

        if let Some(ref output_dir) = cli_args.output_dir {
            self.output.base_directory = output_dir.clone();
        }

        if let Some(max_line_len) = cli_args.max_line_len {
            self.parser.max_line_len = max_line_len;
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| MovieBinsError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| MovieBinsError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.parser.max_line_len == 0 {
            return Err(MovieBinsError::Config {
                message: "Maximum line length must be greater than 0".to_string(),
            });
        }

        if self.selector.prefix.is_empty() {
            return Err(MovieBinsError::Config {
                message: "Candidate file prefix must not be empty".to_string(),
            });
        }

        if self.output.label.is_empty() {
            return Err(MovieBinsError::Config {
                message: "Output directory label must not be empty".to_string(),
            });
        }

        // The label becomes a single path component of the directory name.
        if self.output.label.contains(['/', '\\']) {
            return Err(MovieBinsError::Config {
                message: format!(
                    "Output directory label must not contain path separators: {}",
                    self.output.label
                ),
            });
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub directory: Option<PathBuf>,
    pub prefix: Option<String>,
    pub label: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub max_line_len: Option<usize>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(mut self, directory: Option<PathBuf>) -> Self {
        self.directory = directory;
        self
    }

    pub fn with_prefix(mut self, prefix: Option<String>) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = output_dir;
        self
    }

    pub fn with_max_line_len(mut self, max_line_len: Option<usize>) -> Self {
        self.max_line_len = max_line_len;
        self
    }
}
