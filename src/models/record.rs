use super::ColumnIndex;
use crate::error::PipelineResult;

/// Columns every input source must carry, in the order they are resolved
pub const SOURCE_COLUMNS: [&str; 16] = [
    "client_id",
    "age",
    "job",
    "marital",
    "education",
    "credit_default",
    "mortgage",
    "number_contacts",
    "contact_duration",
    "previous_campaign_contacts",
    "previous_outcome",
    "campaign_outcome",
    "day",
    "month",
    "cons_price_idx",
    "euribor_three_months",
];

/// One client's campaign interaction as read from input.
///
/// Values are kept as their source text; projections decide which fields
/// are rewritten and which pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub client_id: String,
    pub age: String,
    pub job: String,
    pub marital: String,
    pub education: String,
    pub credit_default: String,
    pub mortgage: String,
    pub number_contacts: String,
    pub contact_duration: String,
    pub previous_campaign_contacts: String,
    pub previous_outcome: String,
    pub campaign_outcome: String,
    pub day: String,
    pub month: String,
    pub cons_price_idx: String,
    pub euribor_three_months: String,
}

/// Positions of [`SOURCE_COLUMNS`] within a concrete header
#[derive(Debug, Clone, Copy)]
pub struct RecordLayout {
    positions: [usize; SOURCE_COLUMNS.len()],
}

impl RecordLayout {
    /// Resolve every source column, failing on the first one absent
    pub fn resolve(index: &ColumnIndex) -> PipelineResult<Self> {
        let mut positions = [0usize; SOURCE_COLUMNS.len()];
        for (slot, name) in positions.iter_mut().zip(SOURCE_COLUMNS) {
            *slot = index.require(name)?;
        }
        Ok(Self { positions })
    }
}

impl Record {
    /// Build a record from one row of a table whose header produced `layout`
    pub fn from_row(row: &[String], layout: &RecordLayout) -> Self {
        let field = |i: usize| -> String {
            row.get(layout.positions[i]).cloned().unwrap_or_default()
        };

        Self {
            client_id: field(0),
            age: field(1),
            job: field(2),
            marital: field(3),
            education: field(4),
            credit_default: field(5),
            mortgage: field(6),
            number_contacts: field(7),
            contact_duration: field(8),
            previous_campaign_contacts: field(9),
            previous_outcome: field(10),
            campaign_outcome: field(11),
            day: field(12),
            month: field(13),
            cons_price_idx: field(14),
            euribor_three_months: field(15),
        }
    }
}
