//! Core data types for in-silico PCR and amplicon alignment.
//!
//! - [`HitRecord`](hit::HitRecord): A primer-annealing hit from the sequence search tool
//! - [`SitePair`](amplicon::SitePair): Two hits that bound a candidate amplicon
//! - [`Interval`](amplicon::Interval): A 0-based half-open region handed to the extraction tool
//! - [`Amplicon`](amplicon::Amplicon): An extracted, cleaned amplicon sequence
//! - [`Strand`](types::Strand), [`Orientation`](types::Orientation),
//!   [`PairSelection`](types::PairSelection): Classification and policy types
//! - [`sequence`]: Reverse complementation and sequence cleaning
//!
//! ## Coordinates
//!
//! Hits carry the 1-based, inclusive subject coordinates of BLAST tabular output.
//! Intervals are 0-based and half-open, as in BED.

pub mod amplicon;
pub mod hit;
pub mod sequence;
pub mod types;
