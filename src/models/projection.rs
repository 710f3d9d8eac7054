use serde::Serialize;

/// An output table: a row type plus where and under which header it is written
pub trait Projection: Serialize {
    /// File name inside the output directory
    const FILE_NAME: &'static str;
    /// Header row, matching the serialized field order
    const HEADER: &'static [&'static str];
}

/// Client demographics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientRow {
    pub client_id: String,
    pub age: String,
    /// Dots removed, dashes turned into underscores
    pub job: String,
    pub marital: String,
    /// `None` where the source said "unknown"
    pub education: Option<String>,
    pub credit_default: u8,
    pub mortgage: u8,
}

impl Projection for ClientRow {
    const FILE_NAME: &'static str = "client.csv";
    const HEADER: &'static [&'static str] = &[
        "client_id",
        "age",
        "job",
        "marital",
        "education",
        "credit_default",
        "mortgage",
    ];
}

/// Campaign interaction facts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignRow {
    pub client_id: String,
    pub number_contacts: String,
    pub contact_duration: String,
    pub previous_campaign_contacts: String,
    pub previous_outcome: u8,
    pub campaign_outcome: u8,
    /// `YYYY-MM-DD`, or `None` when the source day/month cannot be mapped
    pub last_contact_date: Option<String>,
}

impl Projection for CampaignRow {
    const FILE_NAME: &'static str = "campaign.csv";
    const HEADER: &'static [&'static str] = &[
        "client_id",
        "number_contacts",
        "contact_duration",
        "previous_campaign_contacts",
        "previous_outcome",
        "campaign_outcome",
        "last_contact_date",
    ];
}

/// Economic indicators, passed through unchanged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EconomicsRow {
    pub client_id: String,
    pub cons_price_idx: String,
    pub euribor_three_months: String,
}

impl Projection for EconomicsRow {
    const FILE_NAME: &'static str = "economics.csv";
    const HEADER: &'static [&'static str] =
        &["client_id", "cons_price_idx", "euribor_three_months"];
}

/// The three projections of one Unified Table, row-aligned
#[derive(Debug, Clone, Default)]
pub struct Projections {
    pub clients: Vec<ClientRow>,
    pub campaigns: Vec<CampaignRow>,
    pub economics: Vec<EconomicsRow>,
}

impl Projections {
    /// Rows per projection (all three are always the same length)
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
