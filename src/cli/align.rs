use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::alignment::scoring::ScoringScheme;
use crate::cli::{print_alignment, OutputFormat, PcrArgs, ScoringArgs};
use crate::pcr::pipeline::InSilicoPcr;

#[derive(Args)]
pub struct AlignArgs {
    /// Path to the first assembly file
    #[arg(short = '1', long = "assembly1")]
    pub assembly_a: PathBuf,

    /// Path to the second assembly file
    #[arg(short = '2', long = "assembly2")]
    pub assembly_b: PathBuf,

    #[command(flatten)]
    pub pcr: PcrArgs,

    #[command(flatten)]
    pub scoring: ScoringArgs,
}

/// Execute align subcommand
///
/// # Errors
///
/// Returns an error if either assembly cannot be amplified or the amplicons cannot
/// be aligned.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AlignArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (blastn, seqtk) = args.pcr.tools();
    let pcr = InSilicoPcr::new(blastn, seqtk, args.pcr.config());
    let scoring = ScoringScheme::from(args.scoring);

    let aligned = pcr
        .align_assemblies(&args.pcr.primers, &args.assembly_a, &args.assembly_b, &scoring)
        .context("In-silico PCR alignment failed")?;

    info!(
        "Best orientation: {} (forward {}, reverse-complement {})",
        aligned.result.orientation, aligned.result.forward_score, aligned.result.reverse_score
    );
    if verbose {
        eprintln!(
            "Amplicon A: {} ({} bp)\nAmplicon B: {} ({} bp)",
            aligned.amplicon_a.name,
            aligned.amplicon_a.len(),
            aligned.amplicon_b.name,
            aligned.amplicon_b.len(),
        );
    }

    let inputs = serde_json::json!({
        "assembly_a": args.assembly_a.display().to_string(),
        "assembly_b": args.assembly_b.display().to_string(),
        "primers": args.pcr.primers.display().to_string(),
        "amplicon_a": aligned.amplicon_a,
        "amplicon_b": aligned.amplicon_b,
        "scoring": scoring,
    });
    print_alignment(
        &aligned.result.alignment,
        Some(&aligned.result),
        format,
        &inputs,
    )
}
