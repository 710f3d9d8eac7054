use std::io::Write;
use std::path::Path;

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::models::SOURCE_COLUMNS;

/// Write a zip archive holding the given `(name, content)` members
pub fn write_zip_members(path: &Path, members: &[(&str, &str)]) {
    let file = std::fs::File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    for (name, content) in members {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

/// Write a zip archive holding a single member
pub fn write_zip(path: &Path, member: &str, content: &str) {
    write_zip_members(path, &[(member, content)]);
}

/// Source CSV text with a leading index column and the full column set.
///
/// Each row lists its values in [`SOURCE_COLUMNS`] order.
pub fn source_csv(rows: &[[&str; SOURCE_COLUMNS.len()]]) -> String {
    let mut out = format!(",{}\n", SOURCE_COLUMNS.join(","));
    for (i, row) in rows.iter().enumerate() {
        out.push_str(&format!("{},{}\n", i, row.join(",")));
    }
    out
}

/// A plausible source row with the given id, job, education, month and day
pub fn sample_row<'a>(
    client_id: &'a str,
    job: &'a str,
    education: &'a str,
    month: &'a str,
    day: &'a str,
) -> [&'a str; SOURCE_COLUMNS.len()] {
    [
        client_id, "41", job, "married", education, "yes", "no", "2", "261", "0", "failure",
        "yes", day, month, "93.994", "4.857",
    ]
}
