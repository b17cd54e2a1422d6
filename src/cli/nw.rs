use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::alignment::needleman_wunsch::align;
use crate::alignment::orientation::resolve;
use crate::alignment::scoring::ScoringScheme;
use crate::cli::{print_alignment, OutputFormat, ScoringArgs};
use crate::parsing::fasta::read_first_record;

#[derive(Args)]
pub struct NwArgs {
    /// FASTA file holding the first sequence (plain or gzip)
    #[arg(required = true)]
    pub input_a: PathBuf,

    /// FASTA file holding the second sequence (plain or gzip)
    #[arg(required = true)]
    pub input_b: PathBuf,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    /// Also align the reverse complement of the second sequence and keep the better one
    #[arg(long)]
    pub best_orientation: bool,
}

/// Execute nw subcommand
///
/// # Errors
///
/// Returns an error if either input cannot be read, or if `--best-orientation` is
/// given and the second sequence holds a base that cannot be complemented.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: NwArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let record_a = read_first_record(&args.input_a)
        .with_context(|| format!("Failed to read {}", args.input_a.display()))?;
    let record_b = read_first_record(&args.input_b)
        .with_context(|| format!("Failed to read {}", args.input_b.display()))?;

    if verbose {
        eprintln!(
            "Aligning {} ({} bp) against {} ({} bp)",
            record_a.name,
            record_a.len(),
            record_b.name,
            record_b.len()
        );
    }

    let scoring = ScoringScheme::from(args.scoring);
    let oriented = if args.best_orientation {
        Some(
            resolve(&record_a.sequence, &record_b.sequence, &scoring)
                .with_context(|| format!("Cannot reverse complement {}", record_b.name))?,
        )
    } else {
        None
    };
    let alignment = match &oriented {
        Some(result) => result.alignment.clone(),
        None => align(&record_a.sequence, &record_b.sequence, &scoring),
    };

    let inputs = serde_json::json!({
        "input_a": args.input_a.display().to_string(),
        "input_b": args.input_b.display().to_string(),
        "name_a": record_a.name,
        "name_b": record_b.name,
        "scoring": scoring,
    });
    print_alignment(&alignment, oriented.as_ref(), format, &inputs)
}
