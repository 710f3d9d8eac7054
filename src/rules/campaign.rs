use crate::error::{PipelineError, PipelineResult};
use crate::models::{CampaignRow, Record};

use super::{PartitionConfig, UnknownMonthPolicy, binarize};

/// Two-digit month number for a three-letter English abbreviation, any case
pub fn month_number(abbreviation: &str) -> Option<&'static str> {
    let number = match abbreviation.to_ascii_lowercase().as_str() {
        "jan" => "01",
        "feb" => "02",
        "mar" => "03",
        "apr" => "04",
        "may" => "05",
        "jun" => "06",
        "jul" => "07",
        "aug" => "08",
        "sep" => "09",
        "oct" => "10",
        "nov" => "11",
        "dec" => "12",
        _ => return None,
    };
    Some(number)
}

/// Left-pad a day with zeros to two characters
pub fn pad_day(day: &str) -> Option<String> {
    let day = day.trim();
    if day.is_empty() {
        return None;
    }
    Some(format!("{:0>2}", day))
}

/// `YYYY-MM-DD` from a year, a month abbreviation and a day
pub fn last_contact_date(year: u16, month: &str, day: &str) -> Option<String> {
    let month = month_number(month)?;
    let day = pad_day(day)?;
    Some(format!("{:04}-{}-{}", year, month, day))
}

/// Project a record onto the campaign table
pub fn to_campaign_row(record: &Record, config: &PartitionConfig) -> PipelineResult<CampaignRow> {
    let last_contact_date = last_contact_date(config.contact_year, &record.month, &record.day);

    if last_contact_date.is_none()
        && config.unknown_month == UnknownMonthPolicy::Fail
        && month_number(&record.month).is_none()
    {
        return Err(PipelineError::UnknownMonth {
            client_id: record.client_id.clone(),
            month: record.month.clone(),
        });
    }

    Ok(CampaignRow {
        client_id: record.client_id.clone(),
        number_contacts: record.number_contacts.clone(),
        contact_duration: record.contact_duration.clone(),
        previous_campaign_contacts: record.previous_campaign_contacts.clone(),
        previous_outcome: binarize(&record.previous_outcome, "success"),
        campaign_outcome: binarize(&record.campaign_outcome, "yes"),
        last_contact_date,
    })
}
