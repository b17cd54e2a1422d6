//! Parsers for the output of external tools and for sequence inputs.
//!
//! - **BLAST tabular** (`-outfmt "6 std qlen"`): primer-annealing hits
//! - **FASTA**: extracted amplicons and direct alignment inputs

use thiserror::Error;

pub mod blast;
pub mod fasta;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("{0}")]
    TooManyHits(String),

    #[error("{0}")]
    TooManyRecords(String),
}
