//! Parser for BLAST tabular output produced with `-outfmt "6 std qlen"`.
//!
//! Each record has at least 13 tab-separated fields:
//!
//! | # | Field | Used |
//! |---|-------|------|
//! | 1 | qseqid | yes |
//! | 2 | sseqid | yes |
//! | 3 | pident | yes |
//! | 4 | length | yes |
//! | 5-8 | mismatch, gapopen, qstart, qend | no |
//! | 9 | sstart | yes |
//! | 10 | send | yes |
//! | 11-12 | evalue, bitscore | no |
//! | 13 | qlen | yes |

use crate::core::hit::HitRecord;
use crate::parsing::ParseError;
use crate::utils::validation::check_hit_limit;

/// Minimum number of fields in a `6 std qlen` record
pub const MIN_FIELDS: usize = 13;

/// Parse BLAST tabular text into hit records.
///
/// Blank lines and `#` comment lines are skipped.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a record has too few fields or a numeric
/// field cannot be parsed, or `ParseError::TooManyHits` if the limit is exceeded.
pub fn parse_blast_tabular(text: &str) -> Result<Vec<HitRecord>, ParseError> {
    let mut hits = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(msg) = check_hit_limit(hits.len()) {
            return Err(ParseError::TooManyHits(msg));
        }

        hits.push(parse_record(line, i + 1)?);
    }

    Ok(hits)
}

fn parse_record(line: &str, line_num: usize) -> Result<HitRecord, ParseError> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    if fields.len() < MIN_FIELDS {
        return Err(ParseError::InvalidFormat(format!(
            "Line {line_num} has {} fields, expected at least {MIN_FIELDS}",
            fields.len()
        )));
    }

    Ok(HitRecord {
        primer_id: fields[0].to_string(),
        contig_id: fields[1].to_string(),
        percent_identity: parse_field(fields[2], "pident", line_num)?,
        alignment_length: parse_field(fields[3], "length", line_num)?,
        query_length: parse_field(fields[12], "qlen", line_num)?,
        subject_start: parse_field(fields[8], "sstart", line_num)?,
        subject_end: parse_field(fields[9], "send", line_num)?,
    })
}

fn parse_field<T: std::str::FromStr>(
    value: &str,
    name: &str,
    line_num: usize,
) -> Result<T, ParseError> {
    value.parse().map_err(|_| {
        ParseError::InvalidFormat(format!("Invalid {name} on line {line_num}: '{value}'"))
    })
}
