use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::error::{PipelineError, PipelineResult, WriteFailure};
use crate::models::Projection;
use crate::stages::{PartitionStats, SourceSummary};

/// Write a projection as `<dir>/<FILE_NAME>`, creating `dir` if needed.
///
/// The header row is always written, even for zero rows. An existing file
/// at the destination is overwritten.
pub fn write_projection<T: Projection>(rows: &[T], dir: &Path) -> PipelineResult<PathBuf> {
    let path = dir.join(T::FILE_NAME);
    write_csv(rows, &path)?;
    Ok(path)
}

/// Serialize rows to a comma-delimited file with `T::HEADER` as its header
pub fn write_csv<T: Projection>(rows: &[T], path: &Path) -> PipelineResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| PipelineError::write(parent, WriteFailure::CreateDir(e)))?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| PipelineError::write(path, e))?;

    writer
        .write_record(T::HEADER)
        .map_err(|e| PipelineError::write(path, e))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| PipelineError::write(path, e))?;
    }
    writer.flush().map_err(|e| PipelineError::write(path, e))?;

    Ok(())
}

/// Summary of what a run read and how the rules fired
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub sources: Vec<SourceSummary>,
    pub total_rows: usize,
    pub stats: PartitionStats,
}

impl RunReport {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize run report")
    }

    /// Human-readable rendering
    pub fn format(&self) -> String {
        let mut output = String::new();

        output.push_str("Inputs\n------\n");
        for source in &self.sources {
            output.push_str(&format!("{}: {} rows\n", source.path.display(), source.rows));
        }
        output.push_str(&format!("Total rows: {}\n\n", self.total_rows));

        output.push_str("Rules\n-----\n");
        output.push_str(&format!("Missing education: {}\n", self.stats.education_missing));
        output.push_str(&format!("Credit default = 1: {}\n", self.stats.credit_default_yes));
        output.push_str(&format!("Mortgage = 1: {}\n", self.stats.mortgage_yes));
        output.push_str(&format!("Previous outcome = 1: {}\n", self.stats.previous_success));
        output.push_str(&format!("Campaign outcome = 1: {}\n", self.stats.campaign_yes));
        output.push_str(&format!("Undated contacts: {}\n", self.stats.undated_contacts));

        output
    }
}

/// Console line confirming a written table
pub fn saved_message(path: &Path) -> String {
    format!("Se ha guardado en {}", path.display())
}
