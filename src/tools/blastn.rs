use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::core::hit::HitRecord;
use crate::parsing::blast::parse_blast_tabular;
use crate::tools::{run_command, SequenceSearchTool, ToolError};

/// Default program name, resolved through `PATH`
pub const DEFAULT_BLASTN: &str = "blastn";

/// Primer search with `blastn -task blastn-short`
#[derive(Debug, Clone)]
pub struct Blastn {
    program: String,
}

impl Default for Blastn {
    fn default() -> Self {
        Self::new(DEFAULT_BLASTN)
    }
}

impl Blastn {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, primers: &Path, assembly: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-task")
            .arg("blastn-short")
            .arg("-query")
            .arg(primers)
            .arg("-subject")
            .arg(assembly)
            .arg("-outfmt")
            .arg("6 std qlen");
        cmd
    }
}

impl SequenceSearchTool for Blastn {
    fn search(&self, primers: &Path, assembly: &Path) -> Result<Vec<HitRecord>, ToolError> {
        debug!(
            "Running {} on {} against {}",
            self.program,
            primers.display(),
            assembly.display()
        );
        let output = run_command(&mut self.command(primers, assembly), &self.program)?;

        parse_blast_tabular(&String::from_utf8_lossy(&output.stdout)).map_err(|source| {
            ToolError::Parse {
                program: self.program.clone(),
                source,
            }
        })
    }
}
