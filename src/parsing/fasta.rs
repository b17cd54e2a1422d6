//! Parser for FASTA records using noodles.
//!
//! Used for the output of the subsequence extraction tool and for FASTA inputs
//! to direct alignment. Sequences are cleaned (whitespace stripped, upper-cased).
//!
//! Supported extensions for files:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz`, `.bgz` variants (gzip compressed)

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;

use crate::core::amplicon::Amplicon;
use crate::core::sequence::clean_sequence;
use crate::parsing::ParseError;
use crate::utils::validation::check_record_limit;

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Parse every record from in-memory FASTA text (e.g. captured tool output).
///
/// # Errors
///
/// Returns `ParseError::Noodles` if a record is malformed or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_fasta_bytes(data: &[u8]) -> Result<Vec<Amplicon>, ParseError> {
    let mut reader = fasta::io::Reader::new(data);
    parse_fasta_reader(&mut reader)
}

/// Parse every record from a FASTA file, plain or gzip-compressed.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or the errors of
/// [`parse_fasta_bytes`].
pub fn parse_fasta_file(path: &Path) -> Result<Vec<Amplicon>, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        let reader = BufReader::new(MultiGzDecoder::new(file));
        parse_fasta_reader(&mut fasta::io::Reader::new(reader))
    } else {
        parse_fasta_reader(&mut fasta::io::Reader::new(BufReader::new(file)))
    }
}

/// Read the first record of a FASTA file.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the file holds no records, or the errors
/// of [`parse_fasta_file`].
pub fn read_first_record(path: &Path) -> Result<Amplicon, ParseError> {
    parse_fasta_file(path)?.into_iter().next().ok_or_else(|| {
        ParseError::InvalidFormat(format!("No sequences found in {}", path.display()))
    })
}

fn parse_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<Amplicon>, ParseError> {
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        if let Some(msg) = check_record_limit(records.len()) {
            return Err(ParseError::TooManyRecords(msg));
        }

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence = clean_sequence(&String::from_utf8_lossy(record.sequence().as_ref()));
        records.push(Amplicon::new(name, sequence));
    }

    Ok(records)
}
