//! In-silico PCR: from primer hits to amplicon sequences.
//!
//! 1. The search tool reports primer-annealing hits for an assembly
//! 2. [`matcher::filter_and_sort`] keeps full-length, high-identity hits ordered by position
//! 3. [`matcher::find_pairs`] pairs facing hits on one contig within the size bound
//! 4. [`pipeline::InSilicoPcr`] picks a pair, extracts the region between the primers,
//!    and reports an explicit error when nothing qualifies

pub mod matcher;
pub mod pipeline;
