//! Pure CSV document builder for the day export.
//!
//! Produces a single document with one header row followed by one row per
//! log entry and one row per task. No I/O here; the api crate decides the
//! content type and filename.

use crate::types::Timestamp;

/// Header row shared by log and task rows.
pub const CSV_HEADER: &str = "Type,Timestamp,Category,Detail,Status";

/// Build the CSV export for a single day.
///
/// `logs` are `(created_at, category, outcome)` tuples; `tasks` are
/// `(created_at, description, done)` tuples, both already in display order.
/// A day with no rows yields the header line only.
pub fn build_day_csv(logs: &[(Timestamp, String, String)], tasks: &[(Timestamp, String, bool)]) -> String {
    let mut lines = Vec::with_capacity(logs.len() + tasks.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for (ts, category, outcome) in logs {
        lines.push(
            [
                "Log".to_string(),
                ts.to_rfc3339(),
                csv_escape(category),
                csv_escape(outcome),
                String::new(),
            ]
            .join(","),
        );
    }

    for (ts, description, done) in tasks {
        let status = if *done { "Done" } else { "Pending" };
        lines.push(
            [
                "Task".to_string(),
                ts.to_rfc3339(),
                "-".to_string(),
                csv_escape(description),
                status.to_string(),
            ]
            .join(","),
        );
    }

    lines.join("\n") + "\n"
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
