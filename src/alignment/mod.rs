//! Global pairwise alignment of amplicons.
//!
//! - [`needleman_wunsch`]: Linear-gap global alignment with deterministic tie-breaking
//! - [`orientation`]: Picks the better of the forward and reverse-complement alignments
//! - [`scoring`]: Match, mismatch and gap parameters
//!
//! ## Example
//!
//! ```rust
//! use amplicon_align::alignment::orientation::resolve;
//! use amplicon_align::alignment::scoring::ScoringScheme;
//! use amplicon_align::core::types::Orientation;
//!
//! let scoring = ScoringScheme::new(1, -1, -2);
//! let best = resolve("AAAACCC", "GGGTTTT", &scoring).unwrap();
//! assert_eq!(best.orientation, Orientation::ReverseComplement);
//! println!("{}", best.alignment);
//! ```

pub mod needleman_wunsch;
pub mod orientation;
pub mod scoring;
