use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Unknown base '{base}' at position {position}: only A, C, G and T can be complemented")]
    UnknownBase { base: char, position: usize },
}

/// Return the Watson-Crick complement of a single base.
///
/// Lower-case bases are accepted and complemented to upper case.
#[must_use]
pub fn complement(base: u8) -> Option<u8> {
    match base.to_ascii_uppercase() {
        b'A' => Some(b'T'),
        b'T' => Some(b'A'),
        b'C' => Some(b'G'),
        b'G' => Some(b'C'),
        _ => None,
    }
}

/// Reverse a sequence and complement every base.
///
/// # Errors
///
/// Returns `SequenceError::UnknownBase` for the right-most character outside of
/// `{A, C, G, T}`, with its offset in the input. Ambiguity codes such as `N` are
/// rejected rather than passed through.
///
/// # Examples
///
/// ```
/// use amplicon_align::core::sequence::reverse_complement;
///
/// assert_eq!(reverse_complement("AACG").unwrap(), "CGTT");
/// assert!(reverse_complement("ACNT").is_err());
/// ```
pub fn reverse_complement(seq: &str) -> Result<String, SequenceError> {
    let mut out = String::with_capacity(seq.len());

    for (position, base) in seq.char_indices().rev() {
        let comp = u8::try_from(base)
            .ok()
            .and_then(complement)
            .ok_or(SequenceError::UnknownBase { base, position })?;
        out.push(char::from(comp));
    }

    Ok(out)
}

/// Strip whitespace and upper-case raw sequence text (e.g. a multi-line FASTA body).
#[must_use]
pub fn clean_sequence(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// True when every character is one of `A`, `C`, `G`, `T` (case-insensitive).
#[must_use]
pub fn is_acgt(seq: &str) -> bool {
    seq.bytes().all(|b| complement(b).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement("ACGT").unwrap(), "ACGT");
        assert_eq!(reverse_complement("AAAC").unwrap(), "GTTT");
        assert_eq!(reverse_complement("GATTACA").unwrap(), "TGTAATC");
        assert_eq!(reverse_complement("").unwrap(), "");
    }

    #[test]
    fn test_reverse_complement_lowercase() {
        assert_eq!(reverse_complement("gattaca").unwrap(), "TGTAATC");
    }

    #[test]
    fn test_reverse_complement_involution() {
        for seq in ["A", "ACGT", "GGGCCCAAATTT", "TTAGCCGATCGATCGGATCA", "CAT"] {
            let twice = reverse_complement(&reverse_complement(seq).unwrap()).unwrap();
            assert_eq!(twice, seq);
        }
    }

    #[test]
    fn test_reverse_complement_unknown_base() {
        let err = reverse_complement("ACGNA").unwrap_err();
        assert_eq!(
            err,
            SequenceError::UnknownBase {
                base: 'N',
                position: 3
            }
        );
    }

    #[test]
    fn test_unknown_base_reports_rightmost_offender() {
        let err = reverse_complement("NACGR").unwrap_err();
        assert!(matches!(err, SequenceError::UnknownBase { base: 'R', position: 4 }));
    }

    #[test]
    fn test_clean_sequence() {
        assert_eq!(clean_sequence("acgt\nACGT\r\n  tt\t"), "ACGTACGTTT");
        assert_eq!(clean_sequence(""), "");
    }

    #[test]
    fn test_is_acgt() {
        assert!(is_acgt("ACGTacgt"));
        assert!(is_acgt(""));
        assert!(!is_acgt("ACGN"));
        assert!(!is_acgt("AC-GT"));
    }
}
