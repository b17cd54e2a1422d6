//! In-silico PCR pipeline tests
//!
//! The search and extraction tools are replaced with in-memory fakes so the
//! pipeline can be exercised without blastn or seqtk installed.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use amplicon_align::core::sequence::reverse_complement;
use amplicon_align::tools::{SequenceSearchTool, SubsequenceExtractionTool, ToolError};
use amplicon_align::{
    Amplicon, HitRecord, InSilicoPcr, Interval, IsPcrConfig, Orientation, PairSelection,
    PcrError, ScoringScheme,
};

const CONTIG_LEN: usize = 400;

/// Deterministic pseudo-random contig
fn contig_sequence(seed: u64) -> String {
    let mut state = seed;
    (0..CONTIG_LEN)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            char::from(b"ACGT"[((state >> 33) % 4) as usize])
        })
        .collect()
}

fn hit(primer: &str, contig: &str, start: u64, end: u64) -> HitRecord {
    HitRecord::new(primer, contig, start, end).with_alignment(100.0, 20, 20)
}

/// Search fake returning canned hits per assembly
#[derive(Default)]
struct FakeSearch {
    hits: HashMap<PathBuf, Vec<HitRecord>>,
}

impl FakeSearch {
    fn with(mut self, assembly: &str, hits: Vec<HitRecord>) -> Self {
        self.hits.insert(PathBuf::from(assembly), hits);
        self
    }
}

impl SequenceSearchTool for FakeSearch {
    fn search(&self, _primers: &Path, assembly: &Path) -> Result<Vec<HitRecord>, ToolError> {
        self.hits
            .get(assembly)
            .cloned()
            .ok_or_else(|| ToolError::Failed {
                program: "fake-search".to_string(),
                status: "exit status: 2".to_string(),
                stderr: format!("cannot open {}", assembly.display()),
            })
    }
}

/// Extraction fake slicing in-memory contigs and recording requested intervals
#[derive(Default)]
struct FakeExtract {
    assemblies: HashMap<PathBuf, HashMap<String, String>>,
    requests: RefCell<Vec<Interval>>,
    return_nothing: bool,
}

impl FakeExtract {
    fn with(mut self, assembly: &str, contig: &str, sequence: String) -> Self {
        self.assemblies
            .entry(PathBuf::from(assembly))
            .or_default()
            .insert(contig.to_string(), sequence);
        self
    }
}

impl SubsequenceExtractionTool for FakeExtract {
    fn extract(&self, assembly: &Path, intervals: &[Interval]) -> Result<Vec<Amplicon>, ToolError> {
        self.requests.borrow_mut().extend(intervals.iter().cloned());
        if self.return_nothing {
            return Ok(Vec::new());
        }

        let contigs = self.assemblies.get(assembly).ok_or_else(|| ToolError::Failed {
            program: "fake-extract".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "no such assembly".to_string(),
        })?;

        Ok(intervals
            .iter()
            .filter_map(|interval| {
                let seq = contigs.get(&interval.contig)?;
                let start = usize::try_from(interval.start).ok()?;
                let stop = usize::try_from(interval.stop).ok()?;
                Some(Amplicon::new(interval.to_string(), &seq[start..stop]))
            })
            .collect())
    }
}

/// Assembly A carries the primers forward; assembly B is its reverse complement
fn fixture() -> (FakeSearch, FakeExtract, String) {
    let contig_a = contig_sequence(42);
    let contig_b = reverse_complement(&contig_a).unwrap();
    let len = CONTIG_LEN as u64;

    // 1-based position p maps to len + 1 - p on the reverse complement
    let search = FakeSearch::default()
        .with(
            "a.fna",
            vec![hit("fwd", "contig_a", 10, 30), hit("rev", "contig_a", 300, 250)],
        )
        .with(
            "b.fna",
            vec![
                hit("rev", "contig_b", len + 1 - 300, len + 1 - 250),
                hit("fwd", "contig_b", len + 1 - 10, len + 1 - 30),
            ],
        );
    let extract = FakeExtract::default()
        .with("a.fna", "contig_a", contig_a.clone())
        .with("b.fna", "contig_b", contig_b);

    (search, extract, contig_a)
}

#[test]
fn test_amplify_extracts_region_between_primers() {
    let (search, extract, contig_a) = fixture();
    let pcr = InSilicoPcr::new(&search, &extract, IsPcrConfig::new(300));

    let amplicon = pcr
        .amplify(Path::new("primers.fna"), Path::new("a.fna"))
        .unwrap();

    assert_eq!(
        extract.requests.borrow().as_slice(),
        &[Interval::new("contig_a", 30, 249)]
    );
    assert_eq!(amplicon.name, "contig_a:30-249");
    assert_eq!(amplicon.sequence, contig_a[30..249]);
}

#[test]
fn test_align_assemblies_resolves_reverse_complement() {
    let (search, extract, _) = fixture();
    let pcr = InSilicoPcr::new(search, extract, IsPcrConfig::new(300));
    let scoring = ScoringScheme::new(1, -1, -2);

    let aligned = pcr
        .align_assemblies(
            Path::new("primers.fna"),
            Path::new("a.fna"),
            Path::new("b.fna"),
            &scoring,
        )
        .unwrap();

    assert_eq!(aligned.amplicon_a.len(), 219);
    assert_eq!(aligned.amplicon_b.len(), 219);
    assert_eq!(aligned.result.orientation, Orientation::ReverseComplement);
    assert_eq!(aligned.result.alignment.score, 219);
    assert_eq!(aligned.result.reverse_score, 219);
    assert!(aligned.result.forward_score < 219);
    assert_eq!(
        aligned.result.alignment.aligned_a,
        aligned.result.alignment.aligned_b
    );
    assert_eq!(
        aligned.result.alignment.rescore(&scoring),
        aligned.result.alignment.score
    );
}

#[test]
fn test_same_assembly_aligns_forward() {
    let (search, extract, _) = fixture();
    let pcr = InSilicoPcr::new(search, extract, IsPcrConfig::new(300));
    let scoring = ScoringScheme::new(2, -1, -1);

    let aligned = pcr
        .align_assemblies(
            Path::new("primers.fna"),
            Path::new("a.fna"),
            Path::new("a.fna"),
            &scoring,
        )
        .unwrap();

    assert_eq!(aligned.result.orientation, Orientation::Forward);
    assert_eq!(aligned.result.alignment.score, 2 * 219);
}

#[test]
fn test_no_site_pair_within_bound() {
    let (search, extract, _) = fixture();
    let pcr = InSilicoPcr::new(&search, &extract, IsPcrConfig::new(219));

    let err = pcr
        .amplify(Path::new("primers.fna"), Path::new("a.fna"))
        .unwrap_err();

    assert!(matches!(
        err,
        PcrError::NoSitePairFound {
            max_amplicon_size: 219,
            ..
        }
    ));
    assert!(err.to_string().contains("a.fna"));
    // Nothing is extracted when no pair qualifies
    assert!(extract.requests.borrow().is_empty());
}

#[test]
fn test_low_identity_hits_are_ignored() {
    let search = FakeSearch::default().with(
        "a.fna",
        vec![
            hit("fwd", "contig_a", 10, 30),
            HitRecord::new("rev", "contig_a", 300, 250).with_alignment(75.0, 20, 20),
        ],
    );
    let pcr = InSilicoPcr::new(search, FakeExtract::default(), IsPcrConfig::new(300));

    let err = pcr
        .amplify(Path::new("primers.fna"), Path::new("a.fna"))
        .unwrap_err();
    assert!(matches!(err, PcrError::NoSitePairFound { .. }));
}

#[test]
fn test_search_failure_names_assembly() {
    let (search, extract, _) = fixture();
    let pcr = InSilicoPcr::new(search, extract, IsPcrConfig::new(300));

    let err = pcr
        .amplify(Path::new("primers.fna"), Path::new("missing.fna"))
        .unwrap_err();

    assert!(matches!(err, PcrError::SearchToolFailure { .. }));
    assert!(err.to_string().contains("missing.fna"));
}

#[test]
fn test_extraction_failure_names_assembly() {
    let (search, _, _) = fixture();
    let pcr = InSilicoPcr::new(search, FakeExtract::default(), IsPcrConfig::new(300));

    let err = pcr
        .amplify(Path::new("primers.fna"), Path::new("a.fna"))
        .unwrap_err();

    assert!(matches!(err, PcrError::ExtractionFailure { .. }));
    assert!(err.to_string().contains("a.fna"));
}

#[test]
fn test_empty_extraction_is_an_error() {
    let (search, _, _) = fixture();
    let extract = FakeExtract {
        return_nothing: true,
        ..FakeExtract::default()
    };
    let pcr = InSilicoPcr::new(search, extract, IsPcrConfig::new(300));

    let err = pcr
        .amplify(Path::new("primers.fna"), Path::new("a.fna"))
        .unwrap_err();
    assert!(matches!(err, PcrError::EmptyExtraction { .. }));
}

fn multi_pair_search() -> FakeSearch {
    FakeSearch::default().with(
        "a.fna",
        vec![
            hit("fwd1", "contig_a", 50, 70),
            hit("fwd2", "contig_a", 10, 30),
            hit("rev", "contig_a", 300, 250),
        ],
    )
}

fn multi_pair_extract() -> FakeExtract {
    FakeExtract::default().with("a.fna", "contig_a", contig_sequence(7))
}

#[test]
fn test_pair_selection_first() {
    let extract = multi_pair_extract();
    let pcr = InSilicoPcr::new(multi_pair_search(), &extract, IsPcrConfig::new(300));

    pcr.amplify(Path::new("primers.fna"), Path::new("a.fna"))
        .unwrap();
    // Hits are sorted by start, so fwd2 (start 10) pairs first
    assert_eq!(
        extract.requests.borrow().as_slice(),
        &[Interval::new("contig_a", 30, 249)]
    );
}

#[test]
fn test_pair_selection_longest() {
    let extract = multi_pair_extract();
    let config = IsPcrConfig {
        pair_selection: PairSelection::Longest,
        ..IsPcrConfig::new(300)
    };
    let pcr = InSilicoPcr::new(multi_pair_search(), &extract, config);

    let amplicon = pcr
        .amplify(Path::new("primers.fna"), Path::new("a.fna"))
        .unwrap();
    assert_eq!(amplicon.len(), 219);
}

#[test]
fn test_pair_selection_unique() {
    let config = IsPcrConfig {
        pair_selection: PairSelection::Unique,
        ..IsPcrConfig::new(300)
    };
    let pcr = InSilicoPcr::new(multi_pair_search(), multi_pair_extract(), config);

    let err = pcr
        .amplify(Path::new("primers.fna"), Path::new("a.fna"))
        .unwrap_err();
    assert!(matches!(err, PcrError::MultipleSitePairs { count: 2, .. }));
}

#[test]
fn test_amplify_all() {
    let extract = multi_pair_extract();
    let pcr = InSilicoPcr::new(multi_pair_search(), &extract, IsPcrConfig::new(300));

    let amplicons = pcr
        .amplify_all(Path::new("primers.fna"), Path::new("a.fna"))
        .unwrap();
    assert_eq!(amplicons.len(), 2);
    assert_eq!(amplicons[0].name, "contig_a:30-249");
    assert_eq!(amplicons[1].name, "contig_a:70-249");
}

#[test]
fn test_unknown_base_in_second_amplicon() {
    let contig_a = contig_sequence(42);
    let mut contig_b = contig_a.clone();
    contig_b.replace_range(100..101, "N");

    let hits = vec![hit("fwd", "contig", 10, 30), hit("rev", "contig", 300, 250)];
    let search = FakeSearch::default()
        .with("a.fna", hits.clone())
        .with("b.fna", hits);
    let extract = FakeExtract::default()
        .with("a.fna", "contig", contig_a)
        .with("b.fna", "contig", contig_b);
    let pcr = InSilicoPcr::new(search, extract, IsPcrConfig::new(300));

    let err = pcr
        .align_assemblies(
            Path::new("primers.fna"),
            Path::new("a.fna"),
            Path::new("b.fna"),
            &ScoringScheme::default(),
        )
        .unwrap_err();
    assert!(matches!(err, PcrError::UnknownBase(_)));
}
