use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use super::aggregate::TableRow;
use super::model::FacultyDataset;

/// CSV header, matching the serde names of [`TableRow`].
const CSV_HEADER: [&str; 11] = [
    "S_No",
    "Name",
    "Designation",
    "Domain",
    "Journal_Publications",
    "Conference_Publications",
    "Books_Chapters",
    "Total_Publications",
    "Research_Projects_Completed",
    "Research_Projects_Ongoing",
    "Total_Research_Projects",
];

/// Which rows an export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// The current table (filtered, sorted by total publications).
    Filtered,
    /// Every loaded record in sheet order.
    Complete,
}

impl ExportKind {
    /// Suggested file name for an export made on `date`.
    pub fn file_name(self, date: NaiveDate) -> String {
        let stem = match self {
            ExportKind::Filtered => "research_data",
            ExportKind::Complete => "complete_data",
        };
        format!("{stem}_{}.csv", date.format("%Y%m%d"))
    }
}

/// All records of `dataset` projected to table rows, unsorted.
pub fn complete_rows(dataset: &FacultyDataset) -> Vec<TableRow> {
    dataset.records.iter().map(TableRow::from).collect()
}

/// Write `rows` as CSV. The header is written even when `rows` is empty.
pub fn write_table_csv(path: &Path, rows: &[TableRow]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer.write_record(CSV_HEADER).context("writing CSV header")?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("writing row for S_No {}", row.serial_number))?;
    }
    writer.flush().context("flushing CSV")?;

    log::info!("Exported {} rows to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{FacultyRecord, RecordFields};

    fn dataset() -> FacultyDataset {
        FacultyDataset::from_records(vec![
            FacultyRecord::new(RecordFields {
                serial_number: 2,
                name: "Dr B, Jr".into(),
                designation: "Professor".into(),
                domain: "ML".into(),
                journal_publications: 1,
                ..Default::default()
            }),
            FacultyRecord::new(RecordFields {
                serial_number: 1,
                name: "A".into(),
                domain: "iot".into(),
                projects_ongoing: 2,
                ..Default::default()
            }),
        ])
    }

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_table_csv(&path, &complete_rows(&dataset())).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER.join(","));
        assert_eq!(lines[1], "2,\"Dr B, Jr\",Professor,ML,1,0,0,1,0,0,0");
        assert_eq!(lines[2], "1,A,,iot,0,0,0,0,0,2,2");
    }

    #[test]
    fn empty_export_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        write_table_csv(&path, &[]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim_end(), CSV_HEADER.join(","));
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        assert!(write_table_csv(&path, &[]).is_err());
    }

    #[test]
    fn file_names_carry_the_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(ExportKind::Filtered.file_name(date), "research_data_20260307.csv");
        assert_eq!(ExportKind::Complete.file_name(date), "complete_data_20260307.csv");
    }
}
