use crate::config::SelectorConfig;
use crate::error::{MovieBinsError, Result};
use crate::selector::candidate_filter::CandidateFilter;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A selected input file.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
}

/// Size-based selection strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeRank {
    Largest,
    Smallest,
}

/// Scans one directory (no recursion) for candidate catalog files.
pub struct DirectoryScanner {
    filter: CandidateFilter,
    directory: PathBuf,
}

impl DirectoryScanner {
    pub fn new(config: &SelectorConfig) -> Self {
        Self {
            filter: CandidateFilter::new(config),
            directory: config.directory.clone(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Picks the largest or smallest candidate by byte size.
    ///
    /// Comparisons are strict, so the first file seen in directory-iteration
    /// order wins ties. Iteration order is filesystem-dependent; callers must
    /// not assume any tie-break beyond first-seen-wins. Zero matches is
    /// `Ok(None)`, not an error.
    pub fn select_by_size(&self, rank: SizeRank) -> Result<Option<Candidate>> {
        let mut best: Option<Candidate> = None;

        let walker = WalkDir::new(&self.directory)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        for entry in walker {
            let entry = entry.map_err(|e| MovieBinsError::Io(e.into()))?;

            if !entry.file_type().is_file() {
                continue;
            }

            let name = match entry.file_name().to_str() {
                Some(name) => name.to_string(),
                None => continue,
            };

            if !self.filter.is_candidate(&name) {
                continue;
            }

            // An unreadable entry is skipped, not fatal.
            let size = match entry.metadata() {
                Ok(metadata) => metadata.len(),
                Err(_) => continue,
            };

            let better = match &best {
                None => true,
                Some(current) => match rank {
                    SizeRank::Largest => size > current.size,
                    SizeRank::Smallest => size < current.size,
                },
            };

            if better {
                best = Some(Candidate {
                    path: entry.path().to_path_buf(),
                    name,
                    size,
                });
            }
        }

        Ok(best)
    }

    /// Resolves an operator-supplied path, checking existence before anything
    /// tries to parse it. A missing path is `FileNotFound`.
    pub fn resolve_named<P: AsRef<Path>>(&self, path: P) -> Result<Candidate> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(MovieBinsError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();

        Ok(Candidate {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scanner_for(dir: &TempDir) -> DirectoryScanner {
        let config = SelectorConfig {
            directory: dir.path().to_path_buf(),
            ..SelectorConfig::default()
        };
        DirectoryScanner::new(&config)
    }

    #[test]
    fn test_largest_and_smallest_selection() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("movies_small.csv"), vec![b'x'; 10]).unwrap();
        fs::write(dir.path().join("movies_big.csv"), vec![b'x'; 1000]).unwrap();

        let scanner = scanner_for(&dir);

        let largest = scanner.select_by_size(SizeRank::Largest).unwrap().unwrap();
        assert_eq!(largest.name, "movies_big.csv");
        assert_eq!(largest.size, 1000);

        let smallest = scanner.select_by_size(SizeRank::Smallest).unwrap().unwrap();
        assert_eq!(smallest.name, "movies_small.csv");
        assert_eq!(smallest.size, 10);
    }

    #[test]
    fn test_non_candidates_are_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("movies_real.csv"), vec![b'x'; 5]).unwrap();
        fs::write(dir.path().join("data_movies.csv"), vec![b'x'; 5000]).unwrap();
        fs::write(dir.path().join("movies_notes.txt"), vec![b'x'; 5000]).unwrap();

        let scanner = scanner_for(&dir);
        let largest = scanner.select_by_size(SizeRank::Largest).unwrap().unwrap();
        assert_eq!(largest.name, "movies_real.csv");
    }

    #[test]
    fn test_marker_substring_match_selects_backup_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("movies_archive.csv.bak"), vec![b'x'; 50]).unwrap();

        let scanner = scanner_for(&dir);
        let found = scanner.select_by_size(SizeRank::Largest).unwrap().unwrap();
        assert_eq!(found.name, "movies_archive.csv.bak");
    }

    #[test]
    fn test_subdirectories_are_not_searched() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("nested");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("movies_nested.csv"), vec![b'x'; 10]).unwrap();
        // A directory whose name matches the rule is not a candidate either.
        fs::create_dir(dir.path().join("movies_dir.csv")).unwrap();

        let scanner = scanner_for(&dir);
        assert!(scanner.select_by_size(SizeRank::Largest).unwrap().is_none());
    }

    #[test]
    fn test_no_matching_file_is_none_not_error() {
        let dir = TempDir::new().unwrap();
        let scanner = scanner_for(&dir);

        assert!(scanner.select_by_size(SizeRank::Largest).unwrap().is_none());
        assert!(scanner.select_by_size(SizeRank::Smallest).unwrap().is_none());
    }

    #[test]
    fn test_resolve_named_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("anything.csv");
        fs::write(&path, "Title,Year,Languages,Rating\n").unwrap();

        let scanner = scanner_for(&dir);
        let candidate = scanner.resolve_named(&path).unwrap();
        assert_eq!(candidate.name, "anything.csv");
        assert_eq!(candidate.path, path);
    }

    #[test]
    fn test_resolve_named_missing() {
        let dir = TempDir::new().unwrap();
        let scanner = scanner_for(&dir);

        let result = scanner.resolve_named(dir.path().join("movies_gone.csv"));
        assert!(matches!(result, Err(MovieBinsError::FileNotFound { .. })));
    }
}
