use serde::{Deserialize, Serialize};

/// Linear-gap scoring parameters.
///
/// Values are added as given during the recurrence, so penalties are normally
/// negative, but no sign convention is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringScheme {
    /// Score added for identical bases
    pub match_score: i32,
    /// Score added for differing bases
    pub mismatch: i32,
    /// Score added per gapped column
    pub gap: i32,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_score: 1,
            mismatch: -1,
            gap: -1,
        }
    }
}

impl ScoringScheme {
    pub fn new(match_score: i32, mismatch: i32, gap: i32) -> Self {
        Self {
            match_score,
            mismatch,
            gap,
        }
    }

    /// Score of aligning `a` against `b` in one column
    #[inline]
    #[must_use]
    pub fn substitution<T: PartialEq + ?Sized>(&self, a: &T, b: &T) -> i64 {
        if a == b {
            i64::from(self.match_score)
        } else {
            i64::from(self.mismatch)
        }
    }

    /// Score of `n` gapped columns, computed without accumulation
    #[inline]
    #[must_use]
    pub fn gaps(&self, n: usize) -> i64 {
        // usize -> i64 cannot truncate for any sequence that fits in memory
        #[allow(clippy::cast_possible_wrap)]
        let n = n as i64;
        n * i64::from(self.gap)
    }
}
