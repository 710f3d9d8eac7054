use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{PipelineError, PipelineResult};
use crate::io::read_archive;
use crate::models::RawTable;

/// Row count contributed by one input archive
#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub path: PathBuf,
    pub rows: usize,
}

/// Result of Stage 0 aggregation
#[derive(Debug)]
pub struct AggregationResult {
    /// The Unified Table: all sources' rows, file order then row order
    pub table: RawTable,
    /// One entry per source, in the order they were appended
    pub sources: Vec<SourceSummary>,
}

/// Perform Stage 0: read every archive in order and concatenate the tables
pub fn aggregate(paths: &[PathBuf]) -> PipelineResult<AggregationResult> {
    let mut tables = Vec::with_capacity(paths.len());
    for path in paths {
        tables.push((path.clone(), read_archive(path)?));
    }
    concat_tables(tables)
}

/// Append tables in the given order.
///
/// All tables must share one column set. The first table fixes the column
/// order; later tables are rearranged to it.
pub fn concat_tables(tables: Vec<(PathBuf, RawTable)>) -> PipelineResult<AggregationResult> {
    let mut sources = Vec::with_capacity(tables.len());
    let mut unified: Option<RawTable> = None;

    for (path, table) in tables {
        let rows = table.len();

        match unified.as_mut() {
            None => unified = Some(table),
            Some(acc) => {
                let positions = (table.column_set() == acc.column_set())
                    .then(|| table.positions_of(&acc.headers))
                    .flatten()
                    .ok_or_else(|| PipelineError::SchemaMismatch {
                        path: path.clone(),
                        expected: acc.headers.clone(),
                        found: table.headers.clone(),
                    })?;
                acc.rows.extend(table.into_rows_reordered(&positions));
            }
        }

        debug!("Appended {} rows from {:?}", rows, path);
        sources.push(SourceSummary { path, rows });
    }

    let table = unified.unwrap_or_default();
    info!(
        "Unified {} rows from {} sources",
        table.len(),
        sources.len()
    );

    Ok(AggregationResult { table, sources })
}
