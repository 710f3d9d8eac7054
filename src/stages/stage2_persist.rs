use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::PipelineResult;
use crate::io::write_projection;
use crate::models::Projections;

/// Result of Stage 2 persistence
#[derive(Debug)]
pub struct PersistResult {
    /// Files written, in write order
    pub written: Vec<PathBuf>,
}

/// Perform Stage 2: write client, campaign and economics tables into `output_dir`
///
/// `on_written` is called right after each file lands, so a failure on a
/// later file leaves earlier files (and their notifications) in place.
pub fn persist(
    projections: &Projections,
    output_dir: &Path,
    mut on_written: impl FnMut(&Path),
) -> PipelineResult<PersistResult> {
    let mut written = Vec::with_capacity(3);

    let mut record = |path: PathBuf| {
        info!("Wrote {} rows to {:?}", projections.len(), path);
        on_written(&path);
        written.push(path);
    };

    record(write_projection(&projections.clients, output_dir)?);
    record(write_projection(&projections.campaigns, output_dir)?);
    record(write_projection(&projections.economics, output_dir)?);

    Ok(PersistResult { written })
}
