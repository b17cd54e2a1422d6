//! Command-line interface for amplicon-align.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **align**: Amplify both assemblies in silico and align the amplicons
//! - **ispcr**: Amplify one assembly and print the amplicon(s) as FASTA
//! - **nw**: Globally align the first records of two FASTA files
//!
//! ## Usage
//!
//! ```text
//! # Full pipeline (requires blastn and seqtk on PATH)
//! amplicon-align align -1 a.fna -2 b.fna -p primers.fna -m 2000 --match 1 --mismatch -1 --gap -1
//!
//! # Just the amplicon of one assembly
//! amplicon-align ispcr -a a.fna -p primers.fna -m 2000
//!
//! # Direct alignment, trying both orientations of the second sequence
//! amplicon-align nw x.fa y.fa --match 1 --mismatch -1 --gap -2 --best-orientation
//! ```

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::alignment::needleman_wunsch::Alignment;
use crate::alignment::orientation::OrientedAlignment;
use crate::alignment::scoring::ScoringScheme;
use crate::core::types::{Orientation, PairSelection};
use crate::pcr::pipeline::IsPcrConfig;
use crate::tools::blastn::{Blastn, DEFAULT_BLASTN};
use crate::tools::seqtk::{Seqtk, DEFAULT_SEQTK};
use crate::utils::validation::parse_percent_identity;

pub mod align;
pub mod ispcr;
pub mod nw;

#[derive(Parser)]
#[command(name = "amplicon-align")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "In-silico PCR between two assemblies and global alignment of the amplicons")]
#[command(
    long_about = "amplicon-align finds primer-annealing sites in two genome assemblies, extracts the region each primer pair would amplify, and reports the optimal Needleman-Wunsch alignment of the two amplicons.\n\nThe second amplicon is aligned both as given and reverse complemented; the higher-scoring orientation is reported (ties keep the given orientation)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Amplify two assemblies and align the amplicons
    Align(align::AlignArgs),

    /// Amplify one assembly and print the amplicon
    Ispcr(ispcr::IsPcrArgs),

    /// Align the first sequences of two FASTA files
    Nw(nw::NwArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Match, mismatch and gap scores
#[derive(Args, Clone, Copy, Debug)]
pub struct ScoringArgs {
    /// Score for identical bases
    #[arg(long = "match", allow_hyphen_values = true)]
    pub match_score: i32,

    /// Score for differing bases (usually negative)
    #[arg(long, allow_hyphen_values = true)]
    pub mismatch: i32,

    /// Score per gapped column (usually negative)
    #[arg(long, allow_hyphen_values = true)]
    pub gap: i32,
}

impl From<ScoringArgs> for ScoringScheme {
    fn from(args: ScoringArgs) -> Self {
        ScoringScheme::new(args.match_score, args.mismatch, args.gap)
    }
}

/// Primer pairing and external tool options
#[derive(Args, Clone, Debug)]
pub struct PcrArgs {
    /// Path to the primer FASTA file
    #[arg(short = 'p', long)]
    pub primers: std::path::PathBuf,

    /// Maximum amplicon size (distance between primer 3' ends)
    #[arg(short = 'm', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_amplicon_size: u64,

    /// Minimum percent identity of a full-length primer hit (0-100)
    #[arg(long, default_value = "80", value_parser = parse_percent_identity)]
    pub min_identity: f64,

    /// Which primer site pair to amplify when more than one qualifies
    #[arg(long, value_enum, default_value = "first")]
    pub pair_selection: PairSelection,

    /// blastn executable
    #[arg(long, default_value = DEFAULT_BLASTN)]
    pub blastn: String,

    /// seqtk executable
    #[arg(long, default_value = DEFAULT_SEQTK)]
    pub seqtk: String,
}

impl PcrArgs {
    pub fn config(&self) -> IsPcrConfig {
        IsPcrConfig {
            max_amplicon_size: self.max_amplicon_size,
            min_percent_identity: self.min_identity,
            pair_selection: self.pair_selection,
        }
    }

    pub fn tools(&self) -> (Blastn, Seqtk) {
        (Blastn::new(&self.blastn), Seqtk::new(&self.seqtk))
    }
}

/// Print an alignment in the requested format
///
/// Text output is the two aligned sequences followed by the score, one per line.
/// Orientation details are reported in JSON and TSV output when available.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn print_alignment<T: Serialize>(
    aln: &Alignment,
    oriented: Option<&OrientedAlignment>,
    format: OutputFormat,
    json_extra: &T,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", aln.aligned_a);
            println!("{}", aln.aligned_b);
            println!("{}", aln.score);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "inputs": json_extra,
                "orientation": oriented.map(|o| o.orientation),
                "forward_score": oriented.map(|o| o.forward_score),
                "reverse_score": oriented.map(|o| o.reverse_score),
                "score": aln.score,
                "aligned_a": aln.aligned_a,
                "aligned_b": aln.aligned_b,
                "stats": aln.stats(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            let stats = aln.stats();
            let orientation = oriented.map_or(Orientation::Forward, |o| o.orientation);
            println!("orientation\tscore\tcolumns\tmatches\tmismatches\tgaps\tidentity\taligned_a\taligned_b");
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{:.4}\t{}\t{}",
                orientation,
                aln.score,
                stats.columns,
                stats.matches,
                stats.mismatches,
                stats.gaps,
                stats.identity,
                aln.aligned_a,
                aln.aligned_b,
            );
        }
    }
    Ok(())
}
