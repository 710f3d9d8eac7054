pub mod error;
pub mod io;
pub mod models;
pub mod rules;
pub mod stages;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{PipelineError, PipelineResult, ReadFailure, WriteFailure};
pub use io::{list_archives, read_archive, saved_message, write_projection, RunReport};
pub use models::{
    CampaignRow, ClientRow, EconomicsRow, Projection, Projections, RawTable, Record,
};
pub use rules::{PartitionConfig, UnknownMonthPolicy};
pub use stages::{aggregate, concat_tables, partition, persist};
