//! Ports for the external tools used by in-silico PCR.
//!
//! The pipeline only talks to the [`SequenceSearchTool`] and
//! [`SubsequenceExtractionTool`] traits. The process-backed adapters are:
//!
//! - [`blastn::Blastn`]: `blastn -task blastn-short -outfmt "6 std qlen"`
//! - [`seqtk::Seqtk`]: `seqtk subseq <assembly> <bed>`
//!
//! Tests substitute in-memory fakes.

use std::path::Path;
use std::process::{Command, Output};

use thiserror::Error;

use crate::core::amplicon::{Amplicon, Interval};
use crate::core::hit::HitRecord;
use crate::parsing::ParseError;

pub mod blastn;
pub mod seqtk;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with status {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Could not parse output of '{program}': {source}")]
    Parse {
        program: String,
        #[source]
        source: ParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Locates primer-annealing sites in an assembly
pub trait SequenceSearchTool {
    /// Search every primer in `primers` against `assembly`
    ///
    /// # Errors
    ///
    /// Returns a `ToolError` if the search cannot be run or its output is unparseable.
    fn search(&self, primers: &Path, assembly: &Path) -> Result<Vec<HitRecord>, ToolError>;
}

/// Materializes sequences for intervals of an assembly
pub trait SubsequenceExtractionTool {
    /// Extract one amplicon per interval, in input order
    ///
    /// # Errors
    ///
    /// Returns a `ToolError` if the extraction cannot be run or its output is unparseable.
    fn extract(&self, assembly: &Path, intervals: &[Interval]) -> Result<Vec<Amplicon>, ToolError>;
}

impl<T: SequenceSearchTool + ?Sized> SequenceSearchTool for &T {
    fn search(&self, primers: &Path, assembly: &Path) -> Result<Vec<HitRecord>, ToolError> {
        (**self).search(primers, assembly)
    }
}

impl<T: SubsequenceExtractionTool + ?Sized> SubsequenceExtractionTool for &T {
    fn extract(&self, assembly: &Path, intervals: &[Interval]) -> Result<Vec<Amplicon>, ToolError> {
        (**self).extract(assembly, intervals)
    }
}

/// Run a command to completion, turning spawn failures and non-zero exits into errors
pub(crate) fn run_command(command: &mut Command, program: &str) -> Result<Output, ToolError> {
    let output = command.output().map_err(|source| ToolError::Spawn {
        program: program.to_string(),
        source,
    })?;

    if output.status.success() {
        Ok(output)
    } else {
        Err(ToolError::Failed {
            program: program.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
