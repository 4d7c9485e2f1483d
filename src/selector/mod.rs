pub mod candidate_filter;
pub mod directory_scanner;

pub use candidate_filter::CandidateFilter;
pub use directory_scanner::{Candidate, DirectoryScanner, SizeRank};

use std::path::PathBuf;

/// How the operator chose the input file.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Largest,
    Smallest,
    Named(PathBuf),
}

impl Selection {
    pub fn describe(&self) -> String {
        match self {
            Selection::Largest => "the largest file".to_string(),
            Selection::Smallest => "the smallest file".to_string(),
            Selection::Named(path) => format!("the chosen file named {}", path.display()),
        }
    }
}
