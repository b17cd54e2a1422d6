use serde::{Deserialize, Serialize};

/// Strand a primer anneals to, derived from the subject coordinates of a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strand {
    /// `subject_start < subject_end`
    Forward,
    /// `subject_start >= subject_end`
    Reverse,
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "+"),
            Self::Reverse => write!(f, "-"),
        }
    }
}

/// Relative orientation of the second amplicon in a pairwise alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Second sequence aligned as given
    Forward,
    /// Second sequence aligned after reverse complementation
    ReverseComplement,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::ReverseComplement => write!(f, "reverse-complement"),
        }
    }
}

/// How to choose an amplicon when primer pairing yields more than one candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PairSelection {
    /// Use the first pair in scan order
    #[default]
    First,
    /// Use the pair spanning the longest interval (first one wins ties)
    Longest,
    /// Require exactly one pair
    Unique,
}

impl std::fmt::Display for PairSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Longest => write!(f, "longest"),
            Self::Unique => write!(f, "unique"),
        }
    }
}
