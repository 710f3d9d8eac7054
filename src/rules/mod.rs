pub mod campaign;
pub mod client;

pub use campaign::*;
pub use client::*;

/// What to do with a contact whose month is not one of `jan`..`dec`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum UnknownMonthPolicy {
    /// Leave `last_contact_date` empty and keep the row
    #[default]
    Null,
    /// Abort the run with `UnknownMonth`
    Fail,
}

/// Configuration for the partition rules
#[derive(Debug, Clone)]
pub struct PartitionConfig {
    /// Year stamped onto every reconstructed contact date
    pub contact_year: u16,
    /// Handling of unrecognized month abbreviations
    pub unknown_month: UnknownMonthPolicy,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            contact_year: 2022,
            unknown_month: UnknownMonthPolicy::Null,
        }
    }
}

/// 1 if `value` is exactly `truthy`, 0 for anything else (empty included)
pub fn binarize(value: &str, truthy: &str) -> u8 {
    u8::from(value == truthy)
}
