use std::path::PathBuf;

use thiserror::Error;

/// Why an input archive could not be turned into a table.
#[derive(Debug, Error)]
pub enum ReadFailure {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid zip archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The archive must wrap exactly one file.
    #[error("expected exactly one file in archive, found {0}")]
    MemberCount(usize),

    #[error("invalid delimited table: {0}")]
    Csv(#[from] csv::Error),

    /// Header row is empty or holds only the index column.
    #[error("table has no data columns")]
    NoColumns,
}

/// Why an output table could not be written.
#[derive(Debug, Error)]
pub enum WriteFailure {
    #[error("could not create directory: {0}")]
    CreateDir(std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level pipeline error.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Archive missing, unreadable or not a single delimited table.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ReadFailure,
    },

    /// Two sources disagree on their column set.
    #[error(
        "column set of {} does not match earlier inputs (expected {expected:?}, found {found:?})",
        .path.display()
    )]
    SchemaMismatch {
        path: PathBuf,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A column required by the projections is absent.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: WriteFailure,
    },

    #[error("no input files found in {}", .0.display())]
    EmptyInput(PathBuf),

    /// Only raised under [`crate::rules::UnknownMonthPolicy::Fail`].
    #[error("unrecognized month {month:?} for client {client_id}")]
    UnknownMonth { client_id: String, month: String },
}

impl PipelineError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: impl Into<ReadFailure>) -> Self {
        Self::Read {
            path: path.into(),
            source: source.into(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: impl Into<WriteFailure>) -> Self {
        Self::Write {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;
