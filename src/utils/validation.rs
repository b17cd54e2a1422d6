//! Centralized validation constants and helper functions.

/// Maximum number of hits accepted from the sequence search tool (DOS protection)
pub const MAX_HITS: usize = 100_000;

/// Maximum number of FASTA records accepted from a single input (DOS protection)
pub const MAX_RECORDS: usize = 100_000;

/// Minimum percent identity for a primer hit to be kept
pub const DEFAULT_MIN_PERCENT_IDENTITY: f64 = 80.0;

/// Check if adding another hit would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new hit.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_hit_limit(count: usize) -> Option<String> {
    if count >= MAX_HITS {
        Some(format!(
            "Too many hits: adding another would exceed maximum of {MAX_HITS}"
        ))
    } else {
        None
    }
}

/// Same as [`check_hit_limit`] for FASTA records
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}

/// Validate a percent identity threshold.
///
/// # Examples
///
/// ```
/// use amplicon_align::utils::validation::is_valid_percent_identity;
///
/// assert!(is_valid_percent_identity(80.0));
/// assert!(!is_valid_percent_identity(100.5));
/// assert!(!is_valid_percent_identity(f64::NAN));
/// ```
#[must_use]
pub fn is_valid_percent_identity(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

/// Parse a percent identity threshold from the command line
///
/// # Errors
///
/// Returns a message if the value is not a number in `[0, 100]`.
pub fn parse_percent_identity(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if is_valid_percent_identity(value) {
        Ok(value)
    } else {
        Err(format!("{value} is outside of 0-100"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_hit_limit() {
        assert!(check_hit_limit(0).is_none());
        assert!(check_hit_limit(MAX_HITS - 1).is_none());
        let msg = check_hit_limit(MAX_HITS).unwrap();
        assert!(msg.contains("Too many hits"));
        assert!(msg.contains(&MAX_HITS.to_string()));
    }

    #[test]
    fn test_check_record_limit() {
        assert!(check_record_limit(10).is_none());
        let msg = check_record_limit(MAX_RECORDS).unwrap();
        assert!(msg.contains("Too many records"));
        assert!(msg.contains(&MAX_RECORDS.to_string()));
    }

    #[test]
    fn test_parse_percent_identity() {
        assert_eq!(parse_percent_identity("95.5"), Ok(95.5));
        assert_eq!(parse_percent_identity("0"), Ok(0.0));
        assert!(parse_percent_identity("101").is_err());
        assert!(parse_percent_identity("-1").is_err());
        assert!(parse_percent_identity("high").is_err());
    }
}
