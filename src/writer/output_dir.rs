use crate::config::OutputConfig;
use crate::error::{MovieBinsError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::os::unix::fs::DirBuilderExt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

/// Output directories are created rwxr-x---.
pub const DIR_MODE: u32 = 0o750;

/// Upper bound (exclusive) of the random suffix in generated directory names.
pub const NAME_SUFFIX_RANGE: u32 = 100_000;

static DIR_NAME_RNG: OnceLock<Mutex<StdRng>> = OnceLock::new();

/// Process-scoped generator for directory-name suffixes, seeded exactly once
/// from OS entropy. Collisions across runs stay improbable but possible; they
/// are not retried.
fn dir_name_rng() -> &'static Mutex<StdRng> {
    DIR_NAME_RNG.get_or_init(|| Mutex::new(StdRng::from_os_rng()))
}

/// Creates the per-run output directory.
pub struct OutputDirBuilder {
    base_directory: PathBuf,
    label: String,
}

impl OutputDirBuilder {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            base_directory: config.base_directory.clone(),
            label: config.label.clone(),
        }
    }

    /// Draws a fresh `<label>.movies.<n>` name, n in [0, 100000).
    pub fn random_dir_name(&self) -> String {
        let suffix = dir_name_rng().lock().unwrap().random_range(0..NAME_SUFFIX_RANGE);
        format!("{}.movies.{}", self.label, suffix)
    }

    /// Creates the directory with mode 0750 and returns its path.
    ///
    /// Creation fails loudly if the drawn name already exists; there is no
    /// retry with an alternate name.
    pub fn create(&self) -> Result<PathBuf> {
        let path = self.base_directory.join(self.random_dir_name());
        self.create_at(&path)?;
        Ok(path)
    }

    fn create_at(&self, path: &Path) -> Result<()> {
        let mut builder = fs::DirBuilder::new();
        builder.mode(DIR_MODE);
        builder.create(path).map_err(|e| MovieBinsError::DirectoryCreateFailed {
            path: path.display().to_string(),
            source: e,
        })
    }
}
