use serde::{Deserialize, Serialize};

use crate::core::types::Strand;

/// A single primer-annealing hit reported by the sequence search tool.
///
/// Coordinates are the 1-based, inclusive subject coordinates as reported in
/// BLAST tabular output. A reverse-strand hit has `subject_start > subject_end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitRecord {
    /// Query (primer) identifier
    pub primer_id: String,

    /// Subject (contig) identifier
    pub contig_id: String,

    /// Percent identity of the primer alignment (0-100)
    pub percent_identity: f64,

    /// Number of aligned columns
    pub alignment_length: u64,

    /// Length of the primer
    pub query_length: u64,

    /// Subject coordinate aligned to the first primer base
    pub subject_start: u64,

    /// Subject coordinate aligned to the last primer base
    pub subject_end: u64,
}

impl HitRecord {
    /// A perfect full-length hit: 100% identity, with the alignment and primer lengths
    /// both equal to the subject span. Use [`Self::with_alignment`] for anything else.
    pub fn new(
        primer_id: impl Into<String>,
        contig_id: impl Into<String>,
        subject_start: u64,
        subject_end: u64,
    ) -> Self {
        let span = subject_start.abs_diff(subject_end) + 1;
        Self {
            primer_id: primer_id.into(),
            contig_id: contig_id.into(),
            percent_identity: 100.0,
            alignment_length: span,
            query_length: span,
            subject_start,
            subject_end,
        }
    }

    /// Set identity and lengths, e.g. for hits built in tests
    #[must_use]
    pub fn with_alignment(mut self, percent_identity: f64, alignment_length: u64, query_length: u64) -> Self {
        self.percent_identity = percent_identity;
        self.alignment_length = alignment_length;
        self.query_length = query_length;
        self
    }

    #[must_use]
    pub fn strand(&self) -> Strand {
        if self.subject_start < self.subject_end {
            Strand::Forward
        } else {
            Strand::Reverse
        }
    }

    #[must_use]
    pub fn is_forward(&self) -> bool {
        self.strand() == Strand::Forward
    }

    /// Full-length primer match with at least `min_percent_identity` identity
    ///
    /// A record with an empty primer never matches.
    #[must_use]
    pub fn is_full_length_match(&self, min_percent_identity: f64) -> bool {
        self.query_length > 0
            && self.alignment_length == self.query_length
            && self.percent_identity >= min_percent_identity
    }
}
