//! Needleman-Wunsch global alignment with tie-aware traceback.
//!
//! Every cell records the full set of predecessor directions that reach its optimal
//! score. Traceback then walks the set with a fixed Diagonal > Up > Left priority,
//! which makes the reported alignment reproducible when several optima exist.

use serde::{Deserialize, Serialize};

use crate::alignment::scoring::ScoringScheme;

/// Character written into an aligned sequence for a gapped column
pub const GAP: char = '-';

/// A traceback move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Consume one base of each sequence
    Diagonal,
    /// Consume a base of the first sequence against a gap
    Up,
    /// Consume a base of the second sequence against a gap
    Left,
}

impl Direction {
    /// Traceback priority, highest first
    pub const PRIORITY: [Direction; 3] = [Direction::Diagonal, Direction::Up, Direction::Left];
}

/// The set of optimal predecessor directions of one matrix cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionSet {
    pub diagonal: bool,
    pub up: bool,
    pub left: bool,
}

impl DirectionSet {
    pub const EMPTY: Self = Self {
        diagonal: false,
        up: false,
        left: false,
    };

    #[must_use]
    pub fn only(direction: Direction) -> Self {
        let mut set = Self::EMPTY;
        set.insert(direction);
        set
    }

    pub fn insert(&mut self, direction: Direction) {
        match direction {
            Direction::Diagonal => self.diagonal = true,
            Direction::Up => self.up = true,
            Direction::Left => self.left = true,
        }
    }

    #[must_use]
    pub fn contains(&self, direction: Direction) -> bool {
        match direction {
            Direction::Diagonal => self.diagonal,
            Direction::Up => self.up,
            Direction::Left => self.left,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.diagonal || self.up || self.left)
    }

    /// Number of tied directions
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.diagonal) + usize::from(self.up) + usize::from(self.left)
    }

    /// Highest-priority direction in the set
    #[must_use]
    pub fn preferred(&self) -> Option<Direction> {
        Direction::PRIORITY
            .into_iter()
            .find(|&direction| self.contains(direction))
    }
}

/// Score and direction grids of size `(|A| + 1) x (|B| + 1)`, stored row-major
#[derive(Debug, Clone)]
pub struct AlignmentMatrix {
    rows: usize,
    cols: usize,
    scores: Vec<i64>,
    directions: Vec<DirectionSet>,
}

impl AlignmentMatrix {
    /// Fill the matrix for `seq_a` (rows) against `seq_b` (columns)
    #[must_use]
    pub fn fill<T: PartialEq>(seq_a: &[T], seq_b: &[T], scoring: &ScoringScheme) -> Self {
        let rows = seq_a.len() + 1;
        let cols = seq_b.len() + 1;
        let mut scores = vec![0_i64; rows * cols];
        let mut directions = vec![DirectionSet::EMPTY; rows * cols];

        // Boundaries are i * gap and j * gap exactly, never accumulated
        for i in 1..rows {
            scores[i * cols] = scoring.gaps(i);
            directions[i * cols] = DirectionSet::only(Direction::Up);
        }
        for j in 1..cols {
            scores[j] = scoring.gaps(j);
            directions[j] = DirectionSet::only(Direction::Left);
        }

        let gap = i64::from(scoring.gap);
        for i in 1..rows {
            let a = &seq_a[i - 1];
            for j in 1..cols {
                let diag = scores[(i - 1) * cols + j - 1] + scoring.substitution(a, &seq_b[j - 1]);
                let up = scores[(i - 1) * cols + j] + gap;
                let left = scores[i * cols + j - 1] + gap;
                let best = diag.max(up).max(left);

                let cell = &mut directions[i * cols + j];
                if diag == best {
                    cell.insert(Direction::Diagonal);
                }
                if up == best {
                    cell.insert(Direction::Up);
                }
                if left == best {
                    cell.insert(Direction::Left);
                }
                scores[i * cols + j] = best;
            }
        }

        Self {
            rows,
            cols,
            scores,
            directions,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn score(&self, i: usize, j: usize) -> i64 {
        self.scores[i * self.cols + j]
    }

    #[must_use]
    pub fn directions(&self, i: usize, j: usize) -> DirectionSet {
        self.directions[i * self.cols + j]
    }

    /// Score of the full global alignment (bottom-right cell)
    #[must_use]
    pub fn final_score(&self) -> i64 {
        self.score(self.rows - 1, self.cols - 1)
    }

    /// Walk back from the bottom-right cell taking the preferred direction at each step
    #[must_use]
    pub fn traceback(&self, seq_a: &[char], seq_b: &[char]) -> Alignment {
        let mut col_a = Vec::with_capacity(seq_a.len() + seq_b.len());
        let mut col_b = Vec::with_capacity(seq_a.len() + seq_b.len());
        let (mut i, mut j) = (self.rows - 1, self.cols - 1);

        while i > 0 || j > 0 {
            // Only (0, 0) has an empty set, and the loop never visits it
            let Some(direction) = self.directions(i, j).preferred() else {
                break;
            };
            match direction {
                Direction::Diagonal => {
                    col_a.push(seq_a[i - 1]);
                    col_b.push(seq_b[j - 1]);
                    i -= 1;
                    j -= 1;
                }
                Direction::Up => {
                    col_a.push(seq_a[i - 1]);
                    col_b.push(GAP);
                    i -= 1;
                }
                Direction::Left => {
                    col_a.push(GAP);
                    col_b.push(seq_b[j - 1]);
                    j -= 1;
                }
            }
        }

        Alignment {
            aligned_a: col_a.into_iter().rev().collect(),
            aligned_b: col_b.into_iter().rev().collect(),
            score: self.final_score(),
        }
    }
}

/// A pairwise global alignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    /// First sequence with gaps inserted
    pub aligned_a: String,
    /// Second sequence with gaps inserted
    pub aligned_b: String,
    /// Optimal alignment score
    pub score: i64,
}

/// Column counts of an alignment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentStats {
    pub columns: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub gaps: usize,
    /// Fraction of columns that are matches (0.0 for an empty alignment)
    pub identity: f64,
}

impl Alignment {
    /// Number of alignment columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.aligned_a.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aligned_a.is_empty()
    }

    /// Recompute the score from the aligned columns
    #[must_use]
    pub fn rescore(&self, scoring: &ScoringScheme) -> i64 {
        self.aligned_a
            .chars()
            .zip(self.aligned_b.chars())
            .map(|(a, b)| {
                if a == GAP || b == GAP {
                    i64::from(scoring.gap)
                } else {
                    scoring.substitution(&a, &b)
                }
            })
            .sum()
    }

    #[must_use]
    pub fn stats(&self) -> AlignmentStats {
        let mut stats = AlignmentStats {
            columns: self.len(),
            matches: 0,
            mismatches: 0,
            gaps: 0,
            identity: 0.0,
        };

        for (a, b) in self.aligned_a.chars().zip(self.aligned_b.chars()) {
            if a == GAP || b == GAP {
                stats.gaps += 1;
            } else if a == b {
                stats.matches += 1;
            } else {
                stats.mismatches += 1;
            }
        }

        if stats.columns > 0 {
            #[allow(clippy::cast_precision_loss)]
            {
                stats.identity = stats.matches as f64 / stats.columns as f64;
            }
        }

        stats
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.aligned_a)?;
        writeln!(f, "{}", self.aligned_b)?;
        write!(f, "{}", self.score)
    }
}

/// Globally align `seq_a` against `seq_b`.
///
/// Runs in `O(|A| * |B|)` time and space. Sequences are compared character by
/// character, so any alphabet is accepted; either sequence may be empty.
/// `-` in an input reads as a gap when an alignment is rescored.
///
/// # Examples
///
/// ```
/// use amplicon_align::alignment::needleman_wunsch::align;
/// use amplicon_align::alignment::scoring::ScoringScheme;
///
/// let aln = align("ACGT", "AGT", &ScoringScheme::new(1, -1, -2));
/// assert_eq!(aln.aligned_a, "ACGT");
/// assert_eq!(aln.aligned_b, "A-GT");
/// assert_eq!(aln.score, 1);
/// ```
#[must_use]
pub fn align(seq_a: &str, seq_b: &str, scoring: &ScoringScheme) -> Alignment {
    let a: Vec<char> = seq_a.chars().collect();
    let b: Vec<char> = seq_b.chars().collect();
    AlignmentMatrix::fill(&a, &b, scoring).traceback(&a, &b)
}
