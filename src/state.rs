use std::path::Path;

use crate::color::ColorMap;
use crate::data::aggregate::{summarize, Summary};
use crate::data::export::{complete_rows, write_table_csv, ExportKind};
use crate::data::filter::{filtered_indices, FilterCriteria};
use crate::data::loader::{load_dataset, LoadOptions};
use crate::data::model::{FacultyDataset, FacultyRecord};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Outcome of the most recent load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loaded,
    /// The load failed; the message replaces the dashboard content.
    Failed(String),
}

/// The full dashboard state, independent of rendering.
///
/// Every filter mutation goes through a method here and ends in
/// [`AppState::on_filter_changed`], which re-filters and re-aggregates.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<FacultyDataset>,

    /// Current filter selections.
    pub criteria: FilterCriteria,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// KPIs, chart series and table rows for the visible records.
    pub summary: Summary,

    pub load_status: LoadStatus,

    /// Colours for research domains.
    pub domain_colors: Option<ColorMap>,

    /// Colours for designations.
    pub designation_colors: Option<ColorMap>,

    /// Transient message (exports) shown in the top bar.
    pub status_message: Option<String>,

    /// How data files are read (from the command line).
    pub load_options: LoadOptions,
}

impl AppState {
    /// Empty state that will read files with `load_options`.
    pub fn new(load_options: LoadOptions) -> Self {
        Self {
            load_options,
            ..Default::default()
        }
    }

    /// Load `path` and install the result, or switch to the failed state.
    pub fn load_path(&mut self, path: &Path) {
        match load_dataset(path, &self.load_options) {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.fail_load(format!("Could not load {}: {e}", path.display()));
            }
        }
    }

    /// Ingest a newly loaded dataset, select every filter option and recompute.
    pub fn set_dataset(&mut self, dataset: FacultyDataset) {
        self.criteria = FilterCriteria::select_all(&dataset);
        self.domain_colors = Some(ColorMap::new(&dataset.domains));
        self.designation_colors = Some(ColorMap::new(&dataset.designations));
        self.dataset = Some(dataset);
        self.load_status = LoadStatus::Loaded;
        self.status_message = None;
        self.on_filter_changed();
    }

    /// Drop any loaded data and show `message` instead of the dashboard.
    pub fn fail_load(&mut self, message: String) {
        self.dataset = None;
        self.criteria = FilterCriteria::default();
        self.visible_indices.clear();
        self.summary = Summary::default();
        self.domain_colors = None;
        self.designation_colors = None;
        self.status_message = None;
        self.load_status = LoadStatus::Failed(message);
    }

    /// Recompute `visible_indices` and `summary` after a filter change.
    pub fn on_filter_changed(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        self.visible_indices = filtered_indices(&ds.records, &self.criteria);
        log::debug!("{} of {} records visible", self.visible_indices.len(), ds.len());
        let summary = summarize(&self.view());
        self.summary = summary;
    }

    /// Records passing the current filters, in sheet order.
    pub fn view(&self) -> Vec<&FacultyRecord> {
        match &self.dataset {
            Some(ds) => self.visible_indices.iter().map(|&i| &ds.records[i]).collect(),
            None => Vec::new(),
        }
    }

    pub fn set_name_query(&mut self, query: &str) {
        self.criteria.name_query = query.to_string();
        self.on_filter_changed();
    }

    /// Toggle a single designation in the filter.
    pub fn toggle_designation(&mut self, designation: &str) {
        toggle(&mut self.criteria.allowed_designations, designation);
        self.on_filter_changed();
    }

    /// Toggle a single domain in the filter.
    pub fn toggle_domain(&mut self, domain: &str) {
        toggle(&mut self.criteria.allowed_domains, domain);
        self.on_filter_changed();
    }

    pub fn select_all_designations(&mut self) {
        if let Some(ds) = &self.dataset {
            self.criteria.allowed_designations = ds.designations.clone();
            self.on_filter_changed();
        }
    }

    /// An empty selection shows every designation.
    pub fn select_none_designations(&mut self) {
        self.criteria.allowed_designations.clear();
        self.on_filter_changed();
    }

    pub fn select_all_domains(&mut self) {
        if let Some(ds) = &self.dataset {
            self.criteria.allowed_domains = ds.domains.clone();
            self.on_filter_changed();
        }
    }

    /// An empty selection shows every domain.
    pub fn select_none_domains(&mut self) {
        self.criteria.allowed_domains.clear();
        self.on_filter_changed();
    }

    /// Set the total publications threshold, clamped to the dataset maximum.
    pub fn set_min_total_publications(&mut self, value: u32) {
        let max = self.dataset.as_ref().map_or(0, |ds| ds.max_total_publications);
        self.criteria.min_total_publications = value.min(max);
        self.on_filter_changed();
    }

    /// Set the journal publications threshold, clamped to the dataset maximum.
    pub fn set_min_journal_publications(&mut self, value: u32) {
        let max = self.dataset.as_ref().map_or(0, |ds| ds.max_journal_publications);
        self.criteria.min_journal_publications = value.min(max);
        self.on_filter_changed();
    }

    /// Back to the initial selection: everything visible.
    pub fn reset_filters(&mut self) {
        if let Some(ds) = &self.dataset {
            self.criteria = FilterCriteria::select_all(ds);
            self.on_filter_changed();
        }
    }

    /// Write the filtered table or the complete dataset to `path`.
    pub fn export(&self, kind: ExportKind, path: &Path) -> anyhow::Result<usize> {
        let rows = match kind {
            ExportKind::Filtered => self.summary.table.clone(),
            ExportKind::Complete => self.dataset.as_ref().map(complete_rows).unwrap_or_default(),
        };
        write_table_csv(path, &rows)?;
        Ok(rows.len())
    }
}

fn toggle(set: &mut std::collections::BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::RecordFields;

    fn record(serial: i64, name: &str, designation: &str, domain: &str, journal: u32, conf: u32) -> FacultyRecord {
        FacultyRecord::new(RecordFields {
            serial_number: serial,
            name: name.into(),
            designation: designation.into(),
            domain: domain.into(),
            journal_publications: journal,
            conference_publications: conf,
            ..Default::default()
        })
    }

    fn loaded() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(FacultyDataset::from_records(vec![
            record(1, "Dr A", "Professor", "ML", 5, 2),
            record(2, "B", "Assistant Professor", "iot", 1, 1),
            record(3, "Dr C", "Professor", "iot", 0, 4),
        ]));
        state
    }

    #[test]
    fn new_dataset_shows_everything() {
        let state = loaded();
        assert_eq!(state.load_status, LoadStatus::Loaded);
        assert_eq!(state.visible_indices, [0, 1, 2]);
        assert_eq!(state.summary.kpis.count, 3);
        assert_eq!(state.criteria.allowed_domains.len(), 2);
    }

    #[test]
    fn threshold_change_recomputes_summary() {
        let mut state = loaded();
        state.set_min_total_publications(5);
        assert_eq!(state.visible_indices, [0]);
        assert_eq!(state.summary.kpis.total_publications, 7);
        assert_eq!(state.summary.table.len(), 1);
        assert_eq!(state.view()[0].serial_number(), 1);
    }

    #[test]
    fn thresholds_are_clamped() {
        let mut state = loaded();
        state.set_min_journal_publications(1_000);
        assert_eq!(state.criteria.min_journal_publications, 5);
        assert_eq!(state.visible_indices, [0]);
    }

    #[test]
    fn toggling_and_deselecting_all() {
        let mut state = loaded();
        state.toggle_domain("iot");
        assert_eq!(state.visible_indices, [0]);

        state.toggle_domain("ML");
        assert!(state.criteria.allowed_domains.is_empty());
        assert_eq!(state.visible_indices, [0, 1, 2]);

        state.toggle_domain("iot");
        assert_eq!(state.visible_indices, [1, 2]);

        state.select_none_designations();
        state.toggle_designation("Professor");
        assert_eq!(state.visible_indices, [2]);
    }

    #[test]
    fn reset_restores_full_view() {
        let mut state = loaded();
        state.set_name_query("dr");
        state.toggle_designation("Professor");
        state.set_min_total_publications(3);
        assert!(state.visible_indices.is_empty());
        assert_eq!(state.summary.kpis.avg_publications, 0.0);

        state.reset_filters();
        assert_eq!(state.visible_indices, [0, 1, 2]);
        assert_eq!(state.criteria.name_query, "");
    }

    #[test]
    fn failed_load_discards_data() {
        let mut state = loaded();
        state.load_path(Path::new("faculty.docx"));
        assert!(state.dataset.is_none());
        assert!(state.view().is_empty());
        match &state.load_status {
            LoadStatus::Failed(msg) => assert!(msg.contains("unsupported file extension")),
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[test]
    fn failed_load_clears_stale_status() {
        let mut state = loaded();
        state.status_message = Some("Exported 3 rows to out.csv".into());
        state.load_path(Path::new("missing.xlsx"));
        assert!(matches!(state.load_status, LoadStatus::Failed(_)));
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn summary_is_built_from_the_view() {
        let mut state = loaded();
        state.toggle_designation("Professor");
        let serials: Vec<i64> = state.view().iter().map(|r| r.serial_number()).collect();
        assert_eq!(serials, [2]);
        assert_eq!(state.summary.kpis.count, 1);
        assert_eq!(state.summary.table[0].name, "B");
    }

    #[test]
    fn export_filtered_rows() {
        let mut state = loaded();
        state.set_name_query("Dr");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filtered.csv");
        assert_eq!(state.export(ExportKind::Filtered, &path).unwrap(), 2);
        assert_eq!(state.export(ExportKind::Complete, &path).unwrap(), 3);
    }
}
