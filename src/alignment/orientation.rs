use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alignment::needleman_wunsch::{align, Alignment};
use crate::alignment::scoring::ScoringScheme;
use crate::core::sequence::{reverse_complement, SequenceError};
use crate::core::types::Orientation;

/// The better of the forward and reverse-complement alignments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientedAlignment {
    /// Winning alignment
    pub alignment: Alignment,
    /// Orientation of the second sequence in `alignment`
    pub orientation: Orientation,
    /// Score with the second sequence as given
    pub forward_score: i64,
    /// Score with the second sequence reverse complemented
    pub reverse_score: i64,
}

/// Align `seq_a` against both `seq_b` and its reverse complement, keeping the
/// higher-scoring alignment. Equal scores keep the forward alignment.
///
/// # Errors
///
/// Returns `SequenceError::UnknownBase` if `seq_b` contains a character that
/// cannot be complemented.
pub fn resolve(
    seq_a: &str,
    seq_b: &str,
    scoring: &ScoringScheme,
) -> Result<OrientedAlignment, SequenceError> {
    let rc_b = reverse_complement(seq_b)?;

    let forward = align(seq_a, seq_b, scoring);
    let reverse = align(seq_a, &rc_b, scoring);

    debug!(
        "Orientation scores: forward={}, reverse-complement={}",
        forward.score, reverse.score
    );

    let (forward_score, reverse_score) = (forward.score, reverse.score);
    let (alignment, orientation) = if forward_score >= reverse_score {
        (forward, Orientation::Forward)
    } else {
        (reverse, Orientation::ReverseComplement)
    };

    Ok(OrientedAlignment {
        alignment,
        orientation,
        forward_score,
        reverse_score,
    })
}
