use super::model::{Cell, FacultyRecord, RawRow, RecordFields};

// ---------------------------------------------------------------------------
// Fixed sheet schema
// ---------------------------------------------------------------------------

/// Column positions of the faculty sheet. Anything past `Domain` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Column {
    Serial = 0,
    Name,
    Designation,
    JournalPublications,
    ConferencePublications,
    BookChapters,
    ProjectsCompleted,
    ProjectsOngoing,
    Domain,
}

/// Number of columns a row must populate to be considered.
pub const SCHEMA_WIDTH: usize = 9;

static EMPTY: Cell = Cell::Empty;

fn cell(row: &[Cell], col: Column) -> &Cell {
    row.get(col as usize).unwrap_or(&EMPTY)
}

/// Position of the last non-empty cell plus one.
fn populated_width(row: &[Cell]) -> usize {
    row.iter().rposition(|c| !c.is_empty()).map_or(0, |i| i + 1)
}

// ---------------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------------

/// Convert one raw row into a record, or `None` when the row does not carry
/// a usable serial number or stops short of the domain column.
pub fn normalize_row(row: &[Cell]) -> Option<FacultyRecord> {
    if populated_width(row) < SCHEMA_WIDTH {
        return None;
    }
    let serial_number = cell(row, Column::Serial).as_int()?;

    Some(FacultyRecord::new(RecordFields {
        serial_number,
        name: cell(row, Column::Name).as_text(),
        designation: cell(row, Column::Designation).as_text(),
        domain: cell(row, Column::Domain).as_text(),
        journal_publications: cell(row, Column::JournalPublications).as_count(),
        conference_publications: cell(row, Column::ConferencePublications).as_count(),
        book_chapters: cell(row, Column::BookChapters).as_count(),
        projects_completed: cell(row, Column::ProjectsCompleted).as_count(),
        projects_ongoing: cell(row, Column::ProjectsOngoing).as_count(),
    }))
}

/// Normalize all rows, preserving order. Malformed rows are dropped.
pub fn normalize(rows: &[RawRow]) -> Vec<FacultyRecord> {
    let records: Vec<FacultyRecord> = rows.iter().filter_map(|r| normalize_row(r)).collect();

    let skipped = rows.len() - records.len();
    if skipped > 0 {
        log::debug!("Skipped {skipped} of {} rows without a valid serial number or full width", rows.len());
    }
    records
}
