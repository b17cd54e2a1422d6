use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::alignment::orientation::{resolve, OrientedAlignment};
use crate::alignment::scoring::ScoringScheme;
use crate::core::amplicon::{Amplicon, Interval, SitePair};
use crate::core::sequence::{is_acgt, SequenceError};
use crate::core::types::PairSelection;
use crate::pcr::matcher::{filter_and_sort, find_pairs};
use crate::tools::{SequenceSearchTool, SubsequenceExtractionTool, ToolError};
use crate::utils::validation::DEFAULT_MIN_PERCENT_IDENTITY;

/// Default maximum distance between primer 3' ends
pub const DEFAULT_MAX_AMPLICON_SIZE: u64 = 2_000;

#[derive(Error, Debug)]
pub enum PcrError {
    #[error("Primer search failed for {}: {source}", .assembly.display())]
    SearchToolFailure {
        assembly: PathBuf,
        #[source]
        source: ToolError,
    },

    #[error("Amplicon extraction failed for {}: {source}", .assembly.display())]
    ExtractionFailure {
        assembly: PathBuf,
        #[source]
        source: ToolError,
    },

    #[error("Extraction of {interval} from {} returned no sequence", .assembly.display())]
    EmptyExtraction { assembly: PathBuf, interval: Interval },

    #[error(
        "No primer site pair within {max_amplicon_size} bp found in {}",
        .assembly.display()
    )]
    NoSitePairFound {
        assembly: PathBuf,
        max_amplicon_size: u64,
    },

    #[error("{count} primer site pairs found in {}, expected exactly one", .assembly.display())]
    MultipleSitePairs { assembly: PathBuf, count: usize },

    #[error(transparent)]
    UnknownBase(#[from] SequenceError),
}

/// Configuration for in-silico PCR
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsPcrConfig {
    /// Maximum distance between the 3' ends of paired primer hits
    pub max_amplicon_size: u64,
    /// Minimum percent identity for a full-length primer hit
    pub min_percent_identity: f64,
    /// Which pair to amplify when more than one qualifies
    pub pair_selection: PairSelection,
}

impl Default for IsPcrConfig {
    fn default() -> Self {
        Self {
            max_amplicon_size: DEFAULT_MAX_AMPLICON_SIZE,
            min_percent_identity: DEFAULT_MIN_PERCENT_IDENTITY,
            pair_selection: PairSelection::default(),
        }
    }
}

impl IsPcrConfig {
    pub fn new(max_amplicon_size: u64) -> Self {
        Self {
            max_amplicon_size,
            ..Self::default()
        }
    }
}

/// Amplicons from two assemblies and their best-orientation alignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmpliconAlignment {
    pub amplicon_a: Amplicon,
    pub amplicon_b: Amplicon,
    pub result: OrientedAlignment,
}

/// In-silico PCR over injected search and extraction tools
pub struct InSilicoPcr<S, E> {
    search: S,
    extract: E,
    config: IsPcrConfig,
}

impl<S: SequenceSearchTool, E: SubsequenceExtractionTool> InSilicoPcr<S, E> {
    pub fn new(search: S, extract: E, config: IsPcrConfig) -> Self {
        Self {
            search,
            extract,
            config,
        }
    }

    /// Search primers against `assembly` and pair the qualifying hits
    ///
    /// # Errors
    ///
    /// Returns `PcrError::SearchToolFailure` if the search tool fails.
    pub fn site_pairs(&self, primers: &Path, assembly: &Path) -> Result<Vec<SitePair>, PcrError> {
        info!("Searching primers against {}", assembly.display());
        let hits = self
            .search
            .search(primers, assembly)
            .map_err(|source| PcrError::SearchToolFailure {
                assembly: assembly.to_path_buf(),
                source,
            })?;

        let sorted = filter_and_sort(hits, self.config.min_percent_identity);
        Ok(find_pairs(&sorted, self.config.max_amplicon_size))
    }

    /// Amplify the single amplicon chosen by the configured [`PairSelection`]
    ///
    /// # Errors
    ///
    /// Returns `PcrError::NoSitePairFound` when no pair qualifies,
    /// `PcrError::MultipleSitePairs` when `Unique` selection sees more than one, or a
    /// tool failure from either stage.
    pub fn amplify(&self, primers: &Path, assembly: &Path) -> Result<Amplicon, PcrError> {
        let pairs = self.site_pairs(primers, assembly)?;
        let pair = self.select_pair(&pairs, assembly)?;
        let interval = pair.interval();
        debug!(
            "Selected {} ({}) + {} ({}) -> {}",
            pair.first.primer_id,
            pair.first.strand(),
            pair.second.primer_id,
            pair.second.strand(),
            interval
        );

        let extracted = self.extract_intervals(assembly, std::slice::from_ref(&interval))?;
        let amplicon = extracted
            .into_iter()
            .next()
            .ok_or_else(|| PcrError::EmptyExtraction {
                assembly: assembly.to_path_buf(),
                interval,
            })?;

        info!(
            "Amplified {} bp from {}",
            amplicon.len(),
            assembly.display()
        );
        Ok(amplicon)
    }

    /// Amplify every qualifying pair, in scan order
    ///
    /// # Errors
    ///
    /// Returns `PcrError::NoSitePairFound` when no pair qualifies, or a tool failure.
    pub fn amplify_all(&self, primers: &Path, assembly: &Path) -> Result<Vec<Amplicon>, PcrError> {
        let pairs = self.site_pairs(primers, assembly)?;
        if pairs.is_empty() {
            return Err(self.no_pair(assembly));
        }

        let intervals: Vec<Interval> = pairs.iter().map(SitePair::interval).collect();
        self.extract_intervals(assembly, &intervals)
    }

    /// Amplify both assemblies and align the amplicons in their best orientation
    ///
    /// # Errors
    ///
    /// Returns any error of [`Self::amplify`] for either assembly, or
    /// `PcrError::UnknownBase` if the second amplicon cannot be reverse complemented.
    pub fn align_assemblies(
        &self,
        primers: &Path,
        assembly_a: &Path,
        assembly_b: &Path,
        scoring: &ScoringScheme,
    ) -> Result<AmpliconAlignment, PcrError> {
        let amplicon_a = self.amplify(primers, assembly_a)?;
        let amplicon_b = self.amplify(primers, assembly_b)?;

        info!(
            "Aligning {} bp against {} bp",
            amplicon_a.len(),
            amplicon_b.len()
        );
        let result = resolve(&amplicon_a.sequence, &amplicon_b.sequence, scoring)?;

        Ok(AmpliconAlignment {
            amplicon_a,
            amplicon_b,
            result,
        })
    }

    fn extract_intervals(
        &self,
        assembly: &Path,
        intervals: &[Interval],
    ) -> Result<Vec<Amplicon>, PcrError> {
        let amplicons = self
            .extract
            .extract(assembly, intervals)
            .map_err(|source| PcrError::ExtractionFailure {
                assembly: assembly.to_path_buf(),
                source,
            })?;

        if amplicons.iter().any(Amplicon::is_empty) {
            warn!("Extraction from {} produced an empty amplicon", assembly.display());
        }
        if amplicons.iter().any(|a| !is_acgt(&a.sequence)) {
            warn!(
                "Amplicon from {} contains bases other than A, C, G and T",
                assembly.display()
            );
        }
        Ok(amplicons)
    }

    fn select_pair<'a>(&self, pairs: &'a [SitePair], assembly: &Path) -> Result<&'a SitePair, PcrError> {
        let Some(first) = pairs.first() else {
            return Err(self.no_pair(assembly));
        };

        match self.config.pair_selection {
            PairSelection::First => {
                if pairs.len() > 1 {
                    warn!(
                        "{} primer site pairs found in {}, using the first",
                        pairs.len(),
                        assembly.display()
                    );
                }
                Ok(first)
            }
            PairSelection::Longest => Ok(pairs.iter().fold(first, |best, pair| {
                if pair.interval().len() > best.interval().len() {
                    pair
                } else {
                    best
                }
            })),
            PairSelection::Unique => {
                if pairs.len() == 1 {
                    Ok(first)
                } else {
                    Err(PcrError::MultipleSitePairs {
                        assembly: assembly.to_path_buf(),
                        count: pairs.len(),
                    })
                }
            }
        }
    }

    fn no_pair(&self, assembly: &Path) -> PcrError {
        PcrError::NoSitePairFound {
            assembly: assembly.to_path_buf(),
            max_amplicon_size: self.config.max_amplicon_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = IsPcrConfig::default();
        assert_eq!(config.max_amplicon_size, DEFAULT_MAX_AMPLICON_SIZE);
        assert!((config.min_percent_identity - 80.0).abs() < f64::EPSILON);
        assert_eq!(config.pair_selection, PairSelection::First);

        let config = IsPcrConfig::new(500);
        assert_eq!(config.max_amplicon_size, 500);
        assert_eq!(config.pair_selection, PairSelection::First);
    }

    #[test]
    fn test_error_messages_name_assembly() {
        let err = PcrError::NoSitePairFound {
            assembly: PathBuf::from("genomes/a.fna"),
            max_amplicon_size: 300,
        };
        assert_eq!(
            err.to_string(),
            "No primer site pair within 300 bp found in genomes/a.fna"
        );

        let err = PcrError::MultipleSitePairs {
            assembly: PathBuf::from("b.fna"),
            count: 3,
        };
        assert_eq!(
            err.to_string(),
            "3 primer site pairs found in b.fna, expected exactly one"
        );
    }
}
