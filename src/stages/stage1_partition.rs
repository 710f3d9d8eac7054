use serde::Serialize;
use tracing::{info, warn};

use crate::error::PipelineResult;
use crate::models::{
    CampaignRow, ClientRow, ColumnIndex, EconomicsRow, Projections, RawTable, Record,
    RecordLayout,
};
use crate::rules::{PartitionConfig, to_campaign_row, to_client_row};

/// Counts of how often each rule fired
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartitionStats {
    pub rows: usize,
    /// Rows whose education became missing
    pub education_missing: usize,
    pub credit_default_yes: usize,
    pub mortgage_yes: usize,
    pub previous_success: usize,
    pub campaign_yes: usize,
    /// Rows without a `last_contact_date`
    pub undated_contacts: usize,
}

impl PartitionStats {
    fn record(&mut self, client: &ClientRow, campaign: &CampaignRow) {
        self.rows += 1;
        self.education_missing += usize::from(client.education.is_none());
        self.credit_default_yes += usize::from(client.credit_default);
        self.mortgage_yes += usize::from(client.mortgage);
        self.previous_success += usize::from(campaign.previous_outcome);
        self.campaign_yes += usize::from(campaign.campaign_outcome);
        self.undated_contacts += usize::from(campaign.last_contact_date.is_none());
    }
}

/// Result of Stage 1 partitioning
#[derive(Debug)]
pub struct PartitionResult {
    pub projections: Projections,
    pub stats: PartitionStats,
}

/// Perform Stage 1: split the Unified Table into client, campaign and economics projections
///
/// Every required column is resolved before any row is touched, so a
/// missing column fails the run without partial output. Each projection
/// row is an independent copy of the fields it needs.
pub fn partition(table: &RawTable, config: &PartitionConfig) -> PipelineResult<PartitionResult> {
    let layout = RecordLayout::resolve(&ColumnIndex::new(&table.headers))?;

    let mut projections = Projections {
        clients: Vec::with_capacity(table.len()),
        campaigns: Vec::with_capacity(table.len()),
        economics: Vec::with_capacity(table.len()),
    };
    let mut stats = PartitionStats::default();

    for row in &table.rows {
        let record = Record::from_row(row, &layout);

        let client = to_client_row(&record);
        let campaign = to_campaign_row(&record, config)?;
        let economics = to_economics_row(&record);

        stats.record(&client, &campaign);
        projections.clients.push(client);
        projections.campaigns.push(campaign);
        projections.economics.push(economics);
    }

    if stats.undated_contacts > 0 {
        warn!(
            "{} contacts have no last_contact_date (unrecognized month or empty day)",
            stats.undated_contacts
        );
    }
    info!(
        "Partitioned {} rows ({} missing education)",
        stats.rows, stats.education_missing
    );

    Ok(PartitionResult { projections, stats })
}

/// Project a record onto the economics table
fn to_economics_row(record: &Record) -> EconomicsRow {
    EconomicsRow {
        client_id: record.client_id.clone(),
        cons_price_idx: record.cons_price_idx.clone(),
        euribor_three_months: record.euribor_three_months.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use crate::io::parse_table;
    use crate::models::SOURCE_COLUMNS;
    use crate::rules::UnknownMonthPolicy;
    use crate::testing::{sample_row, source_csv};

    fn unified(rows: &[[&str; SOURCE_COLUMNS.len()]]) -> RawTable {
        parse_table(source_csv(rows).as_bytes()).unwrap()
    }

    #[test]
    fn test_partition_scenario_row() {
        let table = unified(&[sample_row("1", "blue-collar.", "basic.4y", "Jan", "5")]);
        let result = partition(&table, &PartitionConfig::default()).unwrap();

        let client = &result.projections.clients[0];
        assert_eq!(client.job, "blue_collar");
        assert_eq!(client.education.as_deref(), Some("basic_4y"));
        assert_eq!(client.credit_default, 1);
        assert_eq!(client.mortgage, 0);

        let campaign = &result.projections.campaigns[0];
        assert_eq!(campaign.last_contact_date.as_deref(), Some("2022-01-05"));

        let economics = &result.projections.economics[0];
        assert_eq!(economics.cons_price_idx, "93.994");
        assert_eq!(economics.euribor_three_months, "4.857");
    }

    #[test]
    fn test_partition_row_counts_and_ids_align() {
        let table = unified(&[
            sample_row("5", "services", "high.school", "aug", "1"),
            sample_row("5", "retired", "unknown", "oct", "31"),
            sample_row("9", "technician", "professional.course", "feb", "14"),
        ]);
        let result = partition(&table, &PartitionConfig::default()).unwrap();
        let p = &result.projections;

        assert_eq!(p.clients.len(), table.len());
        assert_eq!(p.campaigns.len(), table.len());
        assert_eq!(p.economics.len(), table.len());

        // Duplicate ids pass through, row order is kept
        let expected = vec!["5", "5", "9"];
        let client_ids: Vec<&str> = p.clients.iter().map(|r| r.client_id.as_str()).collect();
        let campaign_ids: Vec<&str> = p.campaigns.iter().map(|r| r.client_id.as_str()).collect();
        let economics_ids: Vec<&str> = p.economics.iter().map(|r| r.client_id.as_str()).collect();
        assert_eq!(client_ids, expected);
        assert_eq!(campaign_ids, expected);
        assert_eq!(economics_ids, expected);

        assert_eq!(result.stats.rows, 3);
        assert_eq!(result.stats.education_missing, 1);
    }

    #[test]
    fn test_partition_output_invariants() {
        let jobs = ["admin.", "blue-collar", "self-employed.", "a.b-c", ""];
        let educations = ["basic.6y", "unknown", "illiterate", "a.b.c", ""];
        let rows: Vec<_> = jobs
            .iter()
            .zip(educations.iter())
            .enumerate()
            .map(|(i, (job, edu))| {
                let mut row = sample_row("0", job, edu, "mar", "7");
                row[5] = if i % 2 == 0 { "yes" } else { "unknown" };
                row[6] = if i % 3 == 0 { "yes" } else { "no" };
                row
            })
            .collect();

        let result = partition(&unified(&rows), &PartitionConfig::default()).unwrap();

        for client in &result.projections.clients {
            assert!(!client.job.contains('.'));
            assert!(!client.job.contains('-'));
            if let Some(edu) = &client.education {
                assert!(!edu.contains('.'));
                assert_ne!(edu, "unknown");
            }
            assert!(client.credit_default <= 1);
            assert!(client.mortgage <= 1);
        }
        for (i, client) in result.projections.clients.iter().enumerate() {
            assert_eq!(client.credit_default, u8::from(i % 2 == 0));
            assert_eq!(client.mortgage, u8::from(i % 3 == 0));
        }
        for campaign in &result.projections.campaigns {
            assert_eq!(campaign.last_contact_date.as_deref(), Some("2022-03-07"));
        }
    }

    #[test]
    fn test_partition_custom_year() {
        let table = unified(&[sample_row("1", "admin.", "basic.4y", "Sep", "30")]);
        let config = PartitionConfig {
            contact_year: 2023,
            ..Default::default()
        };

        let result = partition(&table, &config).unwrap();
        assert_eq!(
            result.projections.campaigns[0].last_contact_date.as_deref(),
            Some("2023-09-30")
        );
    }

    #[test]
    fn test_partition_unknown_month() {
        let table = unified(&[sample_row("1", "admin.", "basic.4y", "xyz", "3")]);

        let result = partition(&table, &PartitionConfig::default()).unwrap();
        assert_eq!(result.projections.campaigns[0].last_contact_date, None);
        assert_eq!(result.stats.undated_contacts, 1);

        let strict = PartitionConfig {
            unknown_month: UnknownMonthPolicy::Fail,
            ..Default::default()
        };
        assert!(matches!(
            partition(&table, &strict),
            Err(PipelineError::UnknownMonth { .. })
        ));
    }

    #[test]
    fn test_partition_missing_column() {
        let table = parse_table(b",client_id,age\n0,1,30\n").unwrap();

        match partition(&table, &PartitionConfig::default()) {
            Err(PipelineError::MissingColumn(name)) => assert_eq!(name, "job"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_partition_empty_table() {
        let table = unified(&[]);
        let result = partition(&table, &PartitionConfig::default()).unwrap();
        assert!(result.projections.is_empty());
        assert_eq!(result.stats, PartitionStats::default());
    }
}
