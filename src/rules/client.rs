use crate::models::{ClientRow, Record};

use super::binarize;

/// Strip every `.` from a job title, then turn every `-` into `_`
///
/// Removal runs first so a `.` never ends up next to a fresh `_`.
pub fn normalize_job(job: &str) -> String {
    job.replace('.', "").replace('-', "_")
}

/// Turn every `.` into `_`; the literal `unknown` (and an empty cell) becomes missing
pub fn normalize_education(education: &str) -> Option<String> {
    let normalized = education.replace('.', "_");
    if normalized == "unknown" || normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Project a record onto the client table
pub fn to_client_row(record: &Record) -> ClientRow {
    ClientRow {
        client_id: record.client_id.clone(),
        age: record.age.clone(),
        job: normalize_job(&record.job),
        marital: record.marital.clone(),
        education: normalize_education(&record.education),
        credit_default: binarize(&record.credit_default, "yes"),
        mortgage: binarize(&record.mortgage, "yes"),
    }
}
