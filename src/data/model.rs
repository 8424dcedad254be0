use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Cell – a single decoded spreadsheet value
// ---------------------------------------------------------------------------

/// A dynamically-typed cell as produced by the spreadsheet decoders.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

/// One row of the decoded sheet.
pub type RawRow = Vec<Cell>;

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl Cell {
    /// Whether the cell carries any value. Whitespace-only text counts as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Lenient integer interpretation.
    ///
    /// Text is parsed like a spreadsheet user would expect: surrounding
    /// whitespace is ignored and the leading run of digits (with an optional
    /// sign) is taken, so `"12 papers"` reads as 12. Values beyond the `i64`
    /// range saturate. Floats truncate toward zero. Anything without a leading
    /// digit yields `None`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(i) => Some(*i),
            Cell::Float(v) if v.is_finite() => Some(v.trunc() as i64),
            Cell::Text(s) => parse_leading_int(s),
            _ => None,
        }
    }

    /// Count-style interpretation: missing, non-numeric or negative values are 0.
    pub fn as_count(&self) -> u32 {
        self.as_int()
            .map(|v| v.clamp(0, i64::from(u32::MAX)) as u32)
            .unwrap_or(0)
    }

    /// Trimmed text form; empty cells become an empty string.
    pub fn as_text(&self) -> String {
        self.to_string().trim().to_string()
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim();
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Digit runs past the i64 range saturate rather than fail.
    let value = digits[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -value } else { value })
}

// ---------------------------------------------------------------------------
// FacultyRecord – one normalized row
// ---------------------------------------------------------------------------

/// A normalized faculty entry. Totals are derived once in [`FacultyRecord::new`]
/// and the fields are only reachable through accessors, so a record never
/// changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct FacultyRecord {
    serial_number: i64,
    name: String,
    designation: String,
    domain: String,
    journal_publications: u32,
    conference_publications: u32,
    book_chapters: u32,
    projects_completed: u32,
    projects_ongoing: u32,
    total_publications: u32,
    total_projects: u32,
}

/// Per-field input for [`FacultyRecord::new`].
#[derive(Debug, Clone, Default)]
pub struct RecordFields {
    pub serial_number: i64,
    pub name: String,
    pub designation: String,
    pub domain: String,
    pub journal_publications: u32,
    pub conference_publications: u32,
    pub book_chapters: u32,
    pub projects_completed: u32,
    pub projects_ongoing: u32,
}

impl FacultyRecord {
    pub fn new(fields: RecordFields) -> Self {
        let total_publications = fields
            .journal_publications
            .saturating_add(fields.conference_publications)
            .saturating_add(fields.book_chapters);
        let total_projects = fields
            .projects_completed
            .saturating_add(fields.projects_ongoing);
        Self {
            serial_number: fields.serial_number,
            name: fields.name,
            designation: fields.designation,
            domain: fields.domain,
            journal_publications: fields.journal_publications,
            conference_publications: fields.conference_publications,
            book_chapters: fields.book_chapters,
            projects_completed: fields.projects_completed,
            projects_ongoing: fields.projects_ongoing,
            total_publications,
            total_projects,
        }
    }

    pub fn serial_number(&self) -> i64 {
        self.serial_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn journal_publications(&self) -> u32 {
        self.journal_publications
    }

    pub fn conference_publications(&self) -> u32 {
        self.conference_publications
    }

    pub fn book_chapters(&self) -> u32 {
        self.book_chapters
    }

    pub fn projects_completed(&self) -> u32 {
        self.projects_completed
    }

    pub fn projects_ongoing(&self) -> u32 {
        self.projects_ongoing
    }

    pub fn total_publications(&self) -> u32 {
        self.total_publications
    }

    pub fn total_projects(&self) -> u32 {
        self.total_projects
    }
}

// ---------------------------------------------------------------------------
// FacultyDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full normalized dataset with pre-computed filter options.
#[derive(Debug, Clone, Default)]
pub struct FacultyDataset {
    /// All records, in sheet order.
    pub records: Vec<FacultyRecord>,
    /// Sorted distinct designations.
    pub designations: BTreeSet<String>,
    /// Sorted distinct research domains.
    pub domains: BTreeSet<String>,
    /// Upper bound for the total publications slider.
    pub max_total_publications: u32,
    /// Upper bound for the journal publications slider.
    pub max_journal_publications: u32,
}

impl FacultyDataset {
    /// Build option indices from the normalized records.
    pub fn from_records(records: Vec<FacultyRecord>) -> Self {
        let mut designations = BTreeSet::new();
        let mut domains = BTreeSet::new();
        let mut max_total_publications = 0;
        let mut max_journal_publications = 0;

        for rec in &records {
            designations.insert(rec.designation().to_string());
            domains.insert(rec.domain().to_string());
            max_total_publications = max_total_publications.max(rec.total_publications());
            max_journal_publications = max_journal_publications.max(rec.journal_publications());
        }

        FacultyDataset {
            records,
            designations,
            domains,
            max_total_publications,
            max_journal_publications,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(serial: i64, designation: &str, domain: &str, journal: u32) -> FacultyRecord {
        FacultyRecord::new(RecordFields {
            serial_number: serial,
            name: format!("Person {serial}"),
            designation: designation.into(),
            domain: domain.into(),
            journal_publications: journal,
            conference_publications: 2,
            book_chapters: 1,
            projects_completed: 1,
            projects_ongoing: 2,
        })
    }

    #[test]
    fn totals_are_derived_at_creation() {
        let rec = record(1, "Professor", "ML", 5);
        assert_eq!(rec.total_publications(), 8);
        assert_eq!(rec.total_projects(), 3);
    }

    #[test]
    fn lenient_int_parsing() {
        assert_eq!(Cell::Text(" 12 ".into()).as_int(), Some(12));
        assert_eq!(Cell::Text("12abc".into()).as_int(), Some(12));
        assert_eq!(Cell::Text("-4".into()).as_int(), Some(-4));
        assert_eq!(Cell::Float(12.9).as_int(), Some(12));
        assert_eq!(Cell::Text("abc".into()).as_int(), None);
        assert_eq!(Cell::Text("".into()).as_int(), None);
        assert_eq!(Cell::Text("-".into()).as_int(), None);
        assert_eq!(Cell::Bool(true).as_int(), None);
        assert_eq!(Cell::Empty.as_int(), None);
    }

    #[test]
    fn oversized_integers_saturate() {
        assert_eq!(Cell::Text("123456789012345678901234".into()).as_int(), Some(i64::MAX));
        assert_eq!(Cell::Text("-99999999999999999999x".into()).as_int(), Some(-i64::MAX));
        assert_eq!(Cell::Float(1e30).as_int(), Some(i64::MAX));
        assert_eq!(Cell::Text("99999999999999999999".into()).as_count(), u32::MAX);
    }

    #[test]
    fn counts_never_go_negative() {
        assert_eq!(Cell::Int(-3).as_count(), 0);
        assert_eq!(Cell::Text("n/a".into()).as_count(), 0);
        assert_eq!(Cell::Float(7.0).as_count(), 7);
    }

    #[test]
    fn text_is_trimmed_and_floats_print_plainly() {
        assert_eq!(Cell::Text("  ML \t".into()).as_text(), "ML");
        assert_eq!(Cell::Float(3.0).as_text(), "3");
        assert_eq!(Cell::Empty.as_text(), "");
        assert!(Cell::Text("   ".into()).is_empty());
    }

    #[test]
    fn dataset_collects_options_and_maxima() {
        let ds = FacultyDataset::from_records(vec![
            record(1, "Professor", "ML", 5),
            record(2, "Associate Professor", "iot", 40),
            record(3, "Professor", "ML", 1),
        ]);
        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.designations.iter().collect::<Vec<_>>(),
            ["Associate Professor", "Professor"]
        );
        assert_eq!(ds.domains.len(), 2);
        assert_eq!(ds.max_total_publications, 43);
        assert_eq!(ds.max_journal_publications, 40);
    }
}
