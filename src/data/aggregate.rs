use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::Serialize;

use super::model::FacultyRecord;

/// Maximum number of entries in the top-N charts.
pub const TOP_N: usize = 15;

/// Prefix dropped from names in chart labels.
const HONORIFIC: &str = "Dr ";

/// Chart label for a faculty name. The stored record keeps its full name.
pub fn display_name(name: &str) -> &str {
    name.strip_prefix(HONORIFIC).unwrap_or(name)
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Headline figures for the current view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kpis {
    pub count: usize,
    pub journal_publications: u64,
    pub conference_publications: u64,
    pub book_chapters: u64,
    pub projects_completed: u64,
    pub projects_ongoing: u64,
    pub total_publications: u64,
    /// Publications per record, rounded to one decimal. 0 for an empty view.
    pub avg_publications: f64,
    pub unique_domains: usize,
}

impl Kpis {
    /// `(label, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Total Professors", self.count.to_string()),
            ("Total Journal Publications", self.journal_publications.to_string()),
            ("Total Conference Publications", self.conference_publications.to_string()),
            ("Total Books/Chapters", self.book_chapters.to_string()),
            ("Total Publications", self.total_publications.to_string()),
            ("Completed Projects", self.projects_completed.to_string()),
            ("Ongoing Projects", self.projects_ongoing.to_string()),
            ("Avg Publications/Professor", format!("{:.1}", self.avg_publications)),
            ("Unique Domains", self.unique_domains.to_string()),
        ]
    }
}

/// A named category → value series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub categories: Vec<String>,
    pub values: Vec<u64>,
}

impl Series {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    fn push(&mut self, category: impl Into<String>, value: u64) {
        self.categories.push(category.into());
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest value, 0 when empty.
    pub fn max_value(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.categories
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Completed/ongoing project counts for a stacked bar chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackedSeries {
    pub names: Vec<String>,
    pub completed: Vec<u64>,
    pub ongoing: Vec<u64>,
}

impl StackedSeries {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Record counts per (domain, designation), both axes sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrossTab {
    pub domains: Vec<String>,
    pub designations: Vec<String>,
    /// `counts[domain][designation]`.
    pub counts: Vec<Vec<u64>>,
}

impl CrossTab {
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Every chart payload derived from one view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub top_publications: Series,
    pub domain_publications: Series,
    pub designation_counts: Series,
    pub top_projects: StackedSeries,
    pub publication_types: Series,
    pub domain_designation: CrossTab,
}

/// One line of the data table (and of the CSV export).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    #[serde(rename = "S_No")]
    pub serial_number: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Designation")]
    pub designation: String,
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "Journal_Publications")]
    pub journal_publications: u32,
    #[serde(rename = "Conference_Publications")]
    pub conference_publications: u32,
    #[serde(rename = "Books_Chapters")]
    pub book_chapters: u32,
    #[serde(rename = "Total_Publications")]
    pub total_publications: u32,
    #[serde(rename = "Research_Projects_Completed")]
    pub projects_completed: u32,
    #[serde(rename = "Research_Projects_Ongoing")]
    pub projects_ongoing: u32,
    #[serde(rename = "Total_Research_Projects")]
    pub total_projects: u32,
}

/// Column headers of [`TableRow`] for display.
pub const TABLE_COLUMNS: [&str; 11] = [
    "S No",
    "Name",
    "Designation",
    "Domain",
    "Journal Publications",
    "Conference Publications",
    "Books Chapters",
    "Total Publications",
    "Research Projects Completed",
    "Research Projects Ongoing",
    "Total Research Projects",
];

impl From<&FacultyRecord> for TableRow {
    fn from(rec: &FacultyRecord) -> Self {
        Self {
            serial_number: rec.serial_number(),
            name: rec.name().to_string(),
            designation: rec.designation().to_string(),
            domain: rec.domain().to_string(),
            journal_publications: rec.journal_publications(),
            conference_publications: rec.conference_publications(),
            book_chapters: rec.book_chapters(),
            total_publications: rec.total_publications(),
            projects_completed: rec.projects_completed(),
            projects_ongoing: rec.projects_ongoing(),
            total_projects: rec.total_projects(),
        }
    }
}

impl TableRow {
    /// Cell texts in [`TABLE_COLUMNS`] order.
    pub fn cells(&self) -> [String; 11] {
        [
            self.serial_number.to_string(),
            self.name.clone(),
            self.designation.clone(),
            self.domain.clone(),
            self.journal_publications.to_string(),
            self.conference_publications.to_string(),
            self.book_chapters.to_string(),
            self.total_publications.to_string(),
            self.projects_completed.to_string(),
            self.projects_ongoing.to_string(),
            self.total_projects.to_string(),
        ]
    }
}

/// Publication sums for one domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainStats {
    pub domain: String,
    pub journal_publications: u64,
    pub conference_publications: u64,
    pub book_chapters: u64,
    pub total_publications: u64,
}

/// Project sums for one designation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignationStats {
    pub designation: String,
    pub projects_completed: u64,
    pub projects_ongoing: u64,
    pub total_projects: u64,
}

/// Everything the presentation layer needs for one recompute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub kpis: Kpis,
    pub charts: ChartSeries,
    pub table: Vec<TableRow>,
    pub domain_stats: Vec<DomainStats>,
    pub designation_stats: Vec<DesignationStats>,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Compute KPIs, chart series and table rows for a filtered view.
pub fn summarize(view: &[&FacultyRecord]) -> Summary {
    Summary {
        kpis: kpis(view),
        charts: ChartSeries {
            top_publications: top_publications(view),
            domain_publications: domain_publications(view),
            designation_counts: designation_counts(view),
            top_projects: top_projects(view),
            publication_types: publication_types(view),
            domain_designation: domain_designation(view),
        },
        table: table_rows(view),
        domain_stats: domain_stats(view),
        designation_stats: designation_stats(view),
    }
}

fn sum(view: &[&FacultyRecord], field: impl Fn(&FacultyRecord) -> u32) -> u64 {
    view.iter().map(|&r| u64::from(field(r))).sum()
}

pub fn kpis(view: &[&FacultyRecord]) -> Kpis {
    let count = view.len();
    let total_publications = sum(view, FacultyRecord::total_publications);
    let avg_publications = if count == 0 {
        0.0
    } else {
        (total_publications as f64 / count as f64 * 10.0).round() / 10.0
    };
    let unique_domains = view
        .iter()
        .map(|r| r.domain())
        .collect::<HashSet<_>>()
        .len();

    Kpis {
        count,
        journal_publications: sum(view, FacultyRecord::journal_publications),
        conference_publications: sum(view, FacultyRecord::conference_publications),
        book_chapters: sum(view, FacultyRecord::book_chapters),
        projects_completed: sum(view, FacultyRecord::projects_completed),
        projects_ongoing: sum(view, FacultyRecord::projects_ongoing),
        total_publications,
        avg_publications,
        unique_domains,
    }
}

/// Copy of `view` stably sorted by total publications, highest first.
fn by_total_publications<'a>(view: &[&'a FacultyRecord]) -> Vec<&'a FacultyRecord> {
    let mut sorted = view.to_vec();
    sorted.sort_by(|a, b| b.total_publications().cmp(&a.total_publications()));
    sorted
}

pub fn top_publications(view: &[&FacultyRecord]) -> Series {
    let mut series = Series::new("Top 15 Professors by Total Publications");
    for rec in by_total_publications(view).into_iter().take(TOP_N) {
        series.push(display_name(rec.name()), u64::from(rec.total_publications()));
    }
    series
}

/// Group `view` by `key`, keeping groups in order of first appearance.
fn group_by<'a, T: Default>(
    view: &[&'a FacultyRecord],
    key: impl Fn(&'a FacultyRecord) -> &'a str,
    mut fold: impl FnMut(&mut T, &FacultyRecord),
) -> Vec<(String, T)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, T)> = Vec::new();
    for &rec in view {
        let k = key(rec);
        let slot = *index.entry(k).or_insert_with(|| {
            groups.push((k.to_string(), T::default()));
            groups.len() - 1
        });
        fold(&mut groups[slot].1, rec);
    }
    groups
}

pub fn domain_publications(view: &[&FacultyRecord]) -> Series {
    let mut groups = group_by(view, FacultyRecord::domain, |acc: &mut u64, r| {
        *acc += u64::from(r.total_publications())
    });
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    let mut series = Series::new("Total Publications by Research Domain");
    for (domain, total) in groups {
        series.push(domain, total);
    }
    series
}

pub fn designation_counts(view: &[&FacultyRecord]) -> Series {
    let groups = group_by(view, FacultyRecord::designation, |acc: &mut u64, _| *acc += 1);

    let mut series = Series::new("Faculty Distribution by Designation");
    for (designation, count) in groups {
        series.push(designation, count);
    }
    series
}

pub fn top_projects(view: &[&FacultyRecord]) -> StackedSeries {
    let mut active: Vec<&FacultyRecord> = view
        .iter()
        .copied()
        .filter(|r| r.total_projects() > 0)
        .collect();
    active.sort_by(|a, b| {
        let ka = u64::from(a.projects_completed()) + u64::from(a.projects_ongoing());
        let kb = u64::from(b.projects_completed()) + u64::from(b.projects_ongoing());
        kb.cmp(&ka)
    });

    let mut series = StackedSeries::default();
    for rec in active.into_iter().take(TOP_N) {
        series.names.push(display_name(rec.name()).to_string());
        series.completed.push(u64::from(rec.projects_completed()));
        series.ongoing.push(u64::from(rec.projects_ongoing()));
    }
    series
}

pub fn publication_types(view: &[&FacultyRecord]) -> Series {
    let mut series = Series::new("Publication Type Distribution");
    if view.is_empty() {
        return series;
    }
    series.push("Journal", sum(view, FacultyRecord::journal_publications));
    series.push("Conference", sum(view, FacultyRecord::conference_publications));
    series.push("Books/Chapters", sum(view, FacultyRecord::book_chapters));
    series
}

pub fn domain_designation(view: &[&FacultyRecord]) -> CrossTab {
    let mut pivot: BTreeMap<&str, BTreeMap<&str, u64>> = BTreeMap::new();
    let mut designations: BTreeSet<&str> = BTreeSet::new();
    for rec in view {
        *pivot
            .entry(rec.domain())
            .or_default()
            .entry(rec.designation())
            .or_default() += 1;
        designations.insert(rec.designation());
    }

    let counts = pivot
        .values()
        .map(|row| {
            designations
                .iter()
                .map(|d| row.get(d).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    CrossTab {
        domains: pivot.keys().map(|d| d.to_string()).collect(),
        designations: designations.into_iter().map(str::to_string).collect(),
        counts,
    }
}

pub fn table_rows(view: &[&FacultyRecord]) -> Vec<TableRow> {
    by_total_publications(view)
        .into_iter()
        .map(TableRow::from)
        .collect()
}

pub fn domain_stats(view: &[&FacultyRecord]) -> Vec<DomainStats> {
    let mut stats: Vec<DomainStats> = group_by(view, FacultyRecord::domain, |acc: &mut DomainStats, r| {
        acc.journal_publications += u64::from(r.journal_publications());
        acc.conference_publications += u64::from(r.conference_publications());
        acc.book_chapters += u64::from(r.book_chapters());
        acc.total_publications += u64::from(r.total_publications());
    })
    .into_iter()
    .map(|(domain, s)| DomainStats { domain, ..s })
    .collect();
    stats.sort_by(|a, b| b.total_publications.cmp(&a.total_publications));
    stats
}

pub fn designation_stats(view: &[&FacultyRecord]) -> Vec<DesignationStats> {
    let mut stats: Vec<DesignationStats> =
        group_by(view, FacultyRecord::designation, |acc: &mut DesignationStats, r| {
            acc.projects_completed += u64::from(r.projects_completed());
            acc.projects_ongoing += u64::from(r.projects_ongoing());
            acc.total_projects += u64::from(r.total_projects());
        })
        .into_iter()
        .map(|(designation, s)| DesignationStats { designation, ..s })
        .collect();
    stats.sort_by(|a, b| b.total_projects.cmp(&a.total_projects));
    stats
}
