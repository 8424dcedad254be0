use std::collections::BTreeSet;

use super::model::{FacultyDataset, FacultyRecord};

// ---------------------------------------------------------------------------
// Filter criteria: the current state of the five filter controls
// ---------------------------------------------------------------------------

/// Current filter selections.
///
/// An empty designation or domain set means "no filter" (show all), which is
/// also how a fully selected list behaves. Deselecting every entry therefore
/// shows everything again rather than hiding everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against the name.
    pub name_query: String,
    pub allowed_designations: BTreeSet<String>,
    pub allowed_domains: BTreeSet<String>,
    pub min_total_publications: u32,
    pub min_journal_publications: u32,
}

impl FilterCriteria {
    /// Criteria with every option of `dataset` selected (i.e., show everything).
    pub fn select_all(dataset: &FacultyDataset) -> Self {
        Self {
            name_query: String::new(),
            allowed_designations: dataset.designations.clone(),
            allowed_domains: dataset.domains.clone(),
            min_total_publications: 0,
            min_journal_publications: 0,
        }
    }

    /// Whether a single record passes all five predicates.
    ///
    /// `needle` is the lower-cased name query, computed once per pass.
    fn matches(&self, rec: &FacultyRecord, needle: &str) -> bool {
        if !needle.is_empty() && !rec.name().to_lowercase().contains(needle) {
            return false;
        }
        if !self.allowed_designations.is_empty()
            && !self.allowed_designations.contains(rec.designation())
        {
            return false;
        }
        if !self.allowed_domains.is_empty() && !self.allowed_domains.contains(rec.domain()) {
            return false;
        }
        rec.total_publications() >= self.min_total_publications
            && rec.journal_publications() >= self.min_journal_publications
    }
}

/// Return indices of records that pass all active filters, in input order.
pub fn filtered_indices(records: &[FacultyRecord], criteria: &FilterCriteria) -> Vec<usize> {
    let needle = criteria.name_query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, rec)| criteria.matches(rec, &needle))
        .map(|(i, _)| i)
        .collect()
}

/// Reduce `records` to the view passing `criteria`. The input is left untouched.
pub fn apply<'a>(records: &'a [FacultyRecord], criteria: &FilterCriteria) -> Vec<&'a FacultyRecord> {
    filtered_indices(records, criteria)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::RecordFields;

    fn record(serial: i64, name: &str, designation: &str, domain: &str, journal: u32, conf: u32, books: u32) -> FacultyRecord {
        FacultyRecord::new(RecordFields {
            serial_number: serial,
            name: name.into(),
            designation: designation.into(),
            domain: domain.into(),
            journal_publications: journal,
            conference_publications: conf,
            book_chapters: books,
            ..Default::default()
        })
    }

    fn sample() -> Vec<FacultyRecord> {
        vec![
            record(1, "Dr A", "Professor", "ML", 5, 2, 0),
            record(2, "B", "Assistant Professor", "iot", 1, 1, 1),
            record(3, "Dr Carla", "Professor", "Signal processing", 10, 0, 0),
        ]
    }

    fn serials(view: &[&FacultyRecord]) -> Vec<i64> {
        view.iter().map(|r| r.serial_number()).collect()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_criteria_keep_everything_in_order() {
        let records = sample();
        assert_eq!(serials(&apply(&records, &FilterCriteria::default())), [1, 2, 3]);
    }

    #[test]
    fn select_all_keeps_everything() {
        let records = sample();
        let ds = FacultyDataset::from_records(records.clone());
        let criteria = FilterCriteria::select_all(&ds);
        assert_eq!(serials(&apply(&records, &criteria)), [1, 2, 3]);
    }

    #[test]
    fn name_query_is_case_insensitive() {
        let records = sample();
        let criteria = FilterCriteria {
            name_query: "CAR".into(),
            ..Default::default()
        };
        assert_eq!(serials(&apply(&records, &criteria)), [3]);

        let criteria = FilterCriteria {
            name_query: "dr ".into(),
            ..Default::default()
        };
        assert_eq!(serials(&apply(&records, &criteria)), [1, 3]);
    }

    #[test]
    fn membership_filters() {
        let records = sample();
        let criteria = FilterCriteria {
            allowed_designations: set(&["Professor"]),
            ..Default::default()
        };
        assert_eq!(serials(&apply(&records, &criteria)), [1, 3]);

        let criteria = FilterCriteria {
            allowed_designations: set(&["Professor"]),
            allowed_domains: set(&["ML", "iot"]),
            ..Default::default()
        };
        assert_eq!(serials(&apply(&records, &criteria)), [1]);
    }

    #[test]
    fn empty_selection_never_excludes() {
        let records = sample();
        let criteria = FilterCriteria {
            allowed_designations: BTreeSet::new(),
            allowed_domains: BTreeSet::new(),
            ..Default::default()
        };
        assert_eq!(apply(&records, &criteria).len(), records.len());
    }

    #[test]
    fn thresholds() {
        let records = sample();
        let criteria = FilterCriteria {
            min_total_publications: 5,
            ..Default::default()
        };
        assert_eq!(serials(&apply(&records, &criteria)), [1, 3]);

        let criteria = FilterCriteria {
            min_total_publications: 5,
            min_journal_publications: 6,
            ..Default::default()
        };
        assert_eq!(serials(&apply(&records, &criteria)), [3]);
    }

    #[test]
    fn no_match_is_an_empty_view() {
        let records = sample();
        let criteria = FilterCriteria {
            name_query: "nobody".into(),
            ..Default::default()
        };
        assert!(apply(&records, &criteria).is_empty());
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let records = sample();
        let criteria = FilterCriteria {
            allowed_domains: set(&["ML", "Signal processing"]),
            min_journal_publications: 3,
            ..Default::default()
        };
        let once: Vec<FacultyRecord> = apply(&records, &criteria).into_iter().cloned().collect();
        let twice = apply(&once, &criteria);
        assert_eq!(serials(&twice), [1, 3]);
        assert_eq!(filtered_indices(&records, &criteria), [0, 2]);
    }
}
