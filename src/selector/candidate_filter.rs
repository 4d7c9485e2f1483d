use crate::config::SelectorConfig;

/// Decides which directory entries count as candidate input files.
///
/// The name must start with the prefix and contain the marker anywhere in the
/// name. The marker is a substring match, not a suffix check, so
/// `movies_archive.csv.bak` is a candidate.
pub struct CandidateFilter {
    prefix: String,
    marker: String,
}

impl CandidateFilter {
    pub fn new(config: &SelectorConfig) -> Self {
        Self {
            prefix: config.prefix.clone(),
            marker: config.marker.clone(),
        }
    }

    pub fn is_candidate(&self, name: &str) -> bool {
        name.starts_with(&self.prefix) && name.contains(&self.marker)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }
}

impl Default for CandidateFilter {
    fn default() -> Self {
        let config = SelectorConfig::default();
        Self::new(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_marker_required() {
        let filter = CandidateFilter::default();

        assert!(filter.is_candidate("movies_2024.csv"));
        assert!(filter.is_candidate("movies_.csv"));

        // Missing prefix.
        assert!(!filter.is_candidate("data_movies.csv"));
        assert!(!filter.is_candidate("Movies_2024.csv"));

        // Missing marker.
        assert!(!filter.is_candidate("movies_plain.txt"));
        assert!(!filter.is_candidate("movies_"));
    }

    #[test]
    fn test_marker_matches_as_substring_not_suffix() {
        let filter = CandidateFilter::default();

        assert!(filter.is_candidate("movies_archive.csv.bak"));
        assert!(filter.is_candidate("movies_a.csving"));
    }

    #[test]
    fn test_custom_rule() {
        let config = SelectorConfig {
            prefix: "catalog-".to_string(),
            marker: ".tsv".to_string(),
            directory: std::path::PathBuf::from("."),
        };
        let filter = CandidateFilter::new(&config);

        assert!(filter.is_candidate("catalog-a.tsv"));
        assert!(!filter.is_candidate("movies_a.csv"));
    }
}
