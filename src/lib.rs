//! # amplicon-align
//!
//! A library for in-silico PCR between genome assemblies and global alignment of the
//! resulting amplicons.
//!
//! Given a primer set and two assemblies, `amplicon-align` locates the primer-annealing
//! sites in each assembly, pairs sites that would produce an amplicon within a size
//! bound, extracts the amplified region, and aligns the two amplicons end to end.
//! Because the assemblies may be oriented differently, the second amplicon is aligned
//! both as given and reverse complemented, and the better alignment is reported.
//!
//! ## Features
//!
//! - **Primer site pairing**: Full-length, high-identity hits paired by strand and distance
//! - **Needleman-Wunsch**: Linear-gap global alignment with exact integer scores
//! - **Deterministic ties**: All tied predecessors are recorded; traceback prefers
//!   diagonal, then up, then left
//! - **Orientation resolution**: Forward vs. reverse complement, forward wins ties
//! - **Pluggable tools**: Search and extraction are traits with `blastn`/`seqtk` adapters
//!
//! ## Example
//!
//! ```rust
//! use amplicon_align::{align, resolve, ScoringScheme};
//!
//! let scoring = ScoringScheme::new(1, -1, -2);
//!
//! let aln = align("ACGT", "AGT", &scoring);
//! assert_eq!(aln.aligned_b, "A-GT");
//! assert_eq!(aln.score, 1);
//!
//! let best = resolve("AAAACCC", "GGGTTTT", &scoring).unwrap();
//! assert_eq!(best.alignment.score, 7);
//! ```
//!
//! ## Modules
//!
//! - [`alignment`]: Global alignment engine and orientation resolution
//! - [`core`]: Hits, site pairs, intervals, amplicons and sequence helpers
//! - [`pcr`]: Primer site matching and the in-silico PCR pipeline
//! - [`parsing`]: Parsers for BLAST tabular and FASTA data
//! - [`tools`]: External tool ports and their process adapters
//! - [`cli`]: Command-line interface implementation

pub mod alignment;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod pcr;
pub mod tools;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::alignment::needleman_wunsch::{align, Alignment};
pub use crate::alignment::orientation::{resolve, OrientedAlignment};
pub use crate::alignment::scoring::ScoringScheme;
pub use crate::core::amplicon::{Amplicon, Interval, SitePair};
pub use crate::core::hit::HitRecord;
pub use crate::core::sequence::reverse_complement;
pub use crate::core::types::*;
pub use crate::pcr::pipeline::{InSilicoPcr, IsPcrConfig, PcrError};
