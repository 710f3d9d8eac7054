use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::ZipArchive;

use crate::error::{PipelineError, PipelineResult, ReadFailure};
use crate::models::RawTable;

/// Upper bound on the buffer reserved up front for a decompressed member
const MAX_PREALLOCATED_BYTES: u64 = 64 * 1024 * 1024;

/// List the input archives in a directory, sorted by file name
///
/// Only regular files are returned; subdirectories are skipped.
pub fn list_archives(dir: &Path) -> PipelineResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| PipelineError::read(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PipelineError::read(dir, e))?;
        let file_type = entry.file_type().map_err(|e| PipelineError::read(entry.path(), e))?;
        if file_type.is_file() {
            files.push(entry.path());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if files.is_empty() {
        return Err(PipelineError::EmptyInput(dir.to_path_buf()));
    }
    Ok(files)
}

/// Read a single-member zip archive holding one delimited table.
///
/// The table's first column is a row-index artifact and is dropped.
pub fn read_archive(path: &Path) -> PipelineResult<RawTable> {
    let bytes = extract_single_member(path).map_err(|e| PipelineError::read(path, e))?;
    let table = parse_table(&bytes).map_err(|e| PipelineError::read(path, e))?;

    debug!(
        "Read {} rows x {} columns from {:?}",
        table.len(),
        table.headers.len(),
        path
    );
    Ok(table)
}

/// Decompress the one file inside the archive at `path`
fn extract_single_member(path: &Path) -> Result<Vec<u8>, ReadFailure> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;

    let mut members = Vec::new();
    for i in 0..archive.len() {
        if archive.by_index(i)?.is_file() {
            members.push(i);
        }
    }

    let [member] = members[..] else {
        return Err(ReadFailure::MemberCount(members.len()));
    };

    let mut entry = archive.by_index(member)?;
    let mut buf = Vec::with_capacity(preallocation(entry.size()));
    entry.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Bytes to reserve for a member whose header declares `declared` bytes.
///
/// Header sizes are not trusted; the reader grows the buffer past the cap.
fn preallocation(declared: u64) -> usize {
    declared.min(MAX_PREALLOCATED_BYTES) as usize
}

/// Parse a comma-delimited table with a header row, dropping its first column
pub fn parse_table(bytes: &[u8]) -> Result<RawTable, ReadFailure> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .skip(1)
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        return Err(ReadFailure::NoColumns);
    }

    let mut table = RawTable::new(headers);
    for result in reader.records() {
        let record = result?;
        table
            .rows
            .push(record.iter().skip(1).map(str::to_string).collect());
    }

    Ok(table)
}
