use serde::{Deserialize, Serialize};

use crate::core::hit::HitRecord;

/// Two primer hits on one contig that would yield an amplification product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitePair {
    /// Hit with the smaller subject start
    pub first: HitRecord,
    /// Hit with the larger subject start
    pub second: HitRecord,
}

impl SitePair {
    pub fn new(first: HitRecord, second: HitRecord) -> Self {
        Self { first, second }
    }

    /// Distance between the two primer 3' ends
    #[must_use]
    pub fn distance(&self) -> u64 {
        self.first.subject_end.abs_diff(self.second.subject_end)
    }

    /// Region strictly between the two primer sites, as a 0-based half-open interval.
    ///
    /// Subject ends are 1-based and inclusive, so the lower end is already the 0-based
    /// offset of the first base past the forward primer, and the upper end minus one is
    /// the 0-based offset of the first base of the reverse primer site.
    #[must_use]
    pub fn interval(&self) -> Interval {
        let lo = self.first.subject_end.min(self.second.subject_end);
        let hi = self.first.subject_end.max(self.second.subject_end);
        Interval {
            contig: self.first.contig_id.clone(),
            start: lo,
            stop: hi.saturating_sub(1).max(lo),
        }
    }
}

/// A 0-based, half-open region of a contig
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub contig: String,
    pub start: u64,
    pub stop: u64,
}

impl Interval {
    pub fn new(contig: impl Into<String>, start: u64, stop: u64) -> Self {
        Self {
            contig: contig.into(),
            start,
            stop,
        }
    }

    #[must_use]
    pub fn len(&self) -> u64 {
        self.stop.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render as a three-column BED line (without trailing newline)
    #[must_use]
    pub fn to_bed_line(&self) -> String {
        format!("{}\t{}\t{}", self.contig, self.start, self.stop)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.contig, self.start, self.stop)
    }
}

/// A named amplified sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amplicon {
    /// Record name reported by the extraction tool
    pub name: String,
    /// Cleaned, upper-case sequence
    pub sequence: String,
}

impl Amplicon {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
