use tracing::debug;

use crate::core::amplicon::SitePair;
use crate::core::hit::HitRecord;
use crate::core::types::Strand;

/// Keep full-length hits with at least `min_percent_identity` identity, ordered by
/// ascending subject start. The sort is stable, so hits with equal starts keep the
/// order the search tool reported them in.
#[must_use]
pub fn filter_and_sort(hits: Vec<HitRecord>, min_percent_identity: f64) -> Vec<HitRecord> {
    let total = hits.len();
    let mut kept: Vec<HitRecord> = hits
        .into_iter()
        .filter(|hit| hit.is_full_length_match(min_percent_identity))
        .collect();
    kept.sort_by_key(|hit| hit.subject_start);

    debug!("Kept {} of {} primer hits", kept.len(), total);
    kept
}

/// Pair sorted hits whose geometry would produce an amplicon of at most
/// `max_amplicon_size` bases between primer 3' ends.
///
/// Every pair `i < j` is checked. A pair qualifies when both hits are on the same
/// contig, their subject ends are within `max_amplicon_size` of each other, and the
/// primers face each other: either the first is forward and the second reverse with
/// the first ending before the second, or the first is reverse and the second forward
/// with the second ending before the first.
#[must_use]
pub fn find_pairs(sorted_hits: &[HitRecord], max_amplicon_size: u64) -> Vec<SitePair> {
    let mut pairs = Vec::new();

    for (i, h1) in sorted_hits.iter().enumerate() {
        for h2 in &sorted_hits[i + 1..] {
            if is_site_pair(h1, h2, max_amplicon_size) {
                pairs.push(SitePair::new(h1.clone(), h2.clone()));
            }
        }
    }

    debug!(
        "Found {} primer site pairs within {} bp",
        pairs.len(),
        max_amplicon_size
    );
    pairs
}

fn is_site_pair(h1: &HitRecord, h2: &HitRecord, max_amplicon_size: u64) -> bool {
    if h1.contig_id != h2.contig_id {
        return false;
    }
    if h1.subject_end.abs_diff(h2.subject_end) > max_amplicon_size {
        return false;
    }

    match (h1.strand(), h2.strand()) {
        (Strand::Forward, Strand::Reverse) => h1.subject_end < h2.subject_end,
        (Strand::Reverse, Strand::Forward) => h2.subject_end < h1.subject_end,
        _ => false,
    }
}
