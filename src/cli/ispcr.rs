use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{OutputFormat, PcrArgs};
use crate::core::amplicon::Amplicon;
use crate::pcr::pipeline::InSilicoPcr;

/// Bases per FASTA line in text output
const FASTA_LINE_WIDTH: usize = 80;

#[derive(Args)]
pub struct IsPcrArgs {
    /// Path to the assembly file
    #[arg(short = 'a', long)]
    pub assembly: PathBuf,

    #[command(flatten)]
    pub pcr: PcrArgs,

    /// Print every qualifying amplicon instead of the selected one
    #[arg(long)]
    pub all: bool,
}

/// Execute ispcr subcommand
///
/// # Errors
///
/// Returns an error if the assembly cannot be amplified.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: IsPcrArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (blastn, seqtk) = args.pcr.tools();
    let pcr = InSilicoPcr::new(blastn, seqtk, args.pcr.config());

    let amplicons = if args.all {
        pcr.amplify_all(&args.pcr.primers, &args.assembly)
    } else {
        pcr.amplify(&args.pcr.primers, &args.assembly).map(|a| vec![a])
    }
    .with_context(|| format!("In-silico PCR failed for {}", args.assembly.display()))?;

    if verbose {
        eprintln!("Amplified {} sequence(s)", amplicons.len());
    }

    match format {
        OutputFormat::Text => print!("{}", format_fasta(&amplicons)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&amplicons)?),
        OutputFormat::Tsv => {
            println!("name\tlength\tsequence");
            for amplicon in &amplicons {
                println!("{}\t{}\t{}", amplicon.name, amplicon.len(), amplicon.sequence);
            }
        }
    }

    Ok(())
}

fn format_fasta(amplicons: &[Amplicon]) -> String {
    let mut out = String::new();
    for amplicon in amplicons {
        out.push('>');
        out.push_str(&amplicon.name);
        out.push('\n');
        let bases: Vec<char> = amplicon.sequence.chars().collect();
        for line in bases.chunks(FASTA_LINE_WIDTH) {
            out.extend(line);
            out.push('\n');
        }
    }
    out
}
