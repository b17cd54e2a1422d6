use std::io::Write;
use std::path::Path;
use std::process::Command;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::core::amplicon::{Amplicon, Interval};
use crate::parsing::fasta::parse_fasta_bytes;
use crate::tools::{run_command, SubsequenceExtractionTool, ToolError};

/// Default program name, resolved through `PATH`
pub const DEFAULT_SEQTK: &str = "seqtk";

/// Interval extraction with `seqtk subseq`
#[derive(Debug, Clone)]
pub struct Seqtk {
    program: String,
}

impl Default for Seqtk {
    fn default() -> Self {
        Self::new(DEFAULT_SEQTK)
    }
}

impl Seqtk {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

/// Write intervals to a BED file that is removed when the handle is dropped
///
/// # Errors
///
/// Returns `ToolError::Io` if the file cannot be created or written.
pub fn write_bed(intervals: &[Interval]) -> Result<NamedTempFile, ToolError> {
    let mut bed = NamedTempFile::with_suffix(".bed")?;
    for interval in intervals {
        writeln!(bed, "{}", interval.to_bed_line())?;
    }
    bed.flush()?;
    Ok(bed)
}

impl SubsequenceExtractionTool for Seqtk {
    fn extract(&self, assembly: &Path, intervals: &[Interval]) -> Result<Vec<Amplicon>, ToolError> {
        // Deleted on drop, including on every early return below
        let bed = write_bed(intervals)?;
        debug!(
            "Running {} subseq on {} with {} intervals",
            self.program,
            assembly.display(),
            intervals.len()
        );

        let output = run_command(
            Command::new(&self.program)
                .arg("subseq")
                .arg(assembly)
                .arg(bed.path()),
            &self.program,
        )?;

        parse_fasta_bytes(&output.stdout).map_err(|source| ToolError::Parse {
            program: self.program.clone(),
            source,
        })
    }
}
