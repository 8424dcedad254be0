use std::collections::BTreeSet;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::export::ExportKind;
use crate::state::{AppState, LoadStatus};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Options");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone what we need so we can mutate state inside the closures.
    let designations = dataset.designations.clone();
    let domains = dataset.domains.clone();
    let max_total = dataset.max_total_publications;
    let max_journal = dataset.max_journal_publications;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Name search ----
            ui.strong("Search Professor by Name");
            let mut query = state.criteria.name_query.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut query).hint_text("Name contains…"))
                .changed()
            {
                state.set_name_query(&query);
            }
            ui.separator();

            // ---- Multi-select lists ----
            let toggled = checklist(
                ui,
                "Designation",
                &designations,
                &state.criteria.allowed_designations,
            );
            match toggled {
                Some(Toggle::All) => state.select_all_designations(),
                Some(Toggle::None) => state.select_none_designations(),
                Some(Toggle::One(v)) => state.toggle_designation(&v),
                None => {}
            }

            let toggled = checklist(ui, "Research Domain", &domains, &state.criteria.allowed_domains);
            match toggled {
                Some(Toggle::All) => state.select_all_domains(),
                Some(Toggle::None) => state.select_none_domains(),
                Some(Toggle::One(v)) => state.toggle_domain(&v),
                None => {}
            }
            ui.separator();

            // ---- Thresholds ----
            let mut min_total = state.criteria.min_total_publications;
            if ui
                .add(egui::Slider::new(&mut min_total, 0..=max_total).text("Min total publications"))
                .changed()
            {
                state.set_min_total_publications(min_total);
            }

            let mut min_journal = state.criteria.min_journal_publications;
            if ui
                .add(egui::Slider::new(&mut min_journal, 0..=max_journal).text("Min journal publications"))
                .changed()
            {
                state.set_min_journal_publications(min_journal);
            }
            ui.separator();

            if ui.button("Reset Filters").clicked() {
                state.reset_filters();
            }
        });
}

enum Toggle {
    All,
    None,
    One(String),
}

/// Collapsible checkbox list. Returns the user's action, if any; the caller
/// applies it so that every change goes through the state's recompute.
fn checklist(
    ui: &mut Ui,
    title: &str,
    options: &BTreeSet<String>,
    selected: &BTreeSet<String>,
) -> Option<Toggle> {
    let mut action = None;
    let header_text = format!("{title}  ({}/{})", selected.len(), options.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(title)
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    action = Some(Toggle::All);
                }
                if ui.small_button("None").clicked() {
                    action = Some(Toggle::None);
                }
            });

            for value in options {
                let mut checked = selected.contains(value);
                let label = if value.is_empty() { "(blank)" } else { value.as_str() };
                if ui.checkbox(&mut checked, label).changed() {
                    action = Some(Toggle::One(value.clone()));
                }
            }
        });
    action
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            let has_data = state.dataset.is_some();
            if ui
                .add_enabled(has_data, egui::Button::new("Export filtered data (CSV)…"))
                .clicked()
            {
                export_dialog(state, ExportKind::Filtered);
                ui.close_menu();
            }
            if ui
                .add_enabled(has_data, egui::Button::new("Export complete data (CSV)…"))
                .clicked()
            {
                export_dialog(state, ExportKind::Complete);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} faculty loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(msg.as_str());
        }

        if let LoadStatus::Failed(_) = state.load_status {
            ui.separator();
            ui.label(RichText::new("Load failed").color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open faculty research data")
        .add_filter("Supported files", &["xlsx", "xlsm", "xlsb", "xls", "ods", "csv", "json", "parquet", "pq"])
        .add_filter("Spreadsheet", &["xlsx", "xlsm", "xlsb", "xls", "ods"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}

fn export_dialog(state: &mut AppState, kind: ExportKind) {
    let today = chrono::Local::now().date_naive();
    let file = rfd::FileDialog::new()
        .set_title("Export CSV")
        .set_file_name(kind.file_name(today))
        .add_filter("CSV", &["csv"])
        .save_file();

    let Some(path) = file else {
        return;
    };
    state.status_message = Some(match state.export(kind, &path) {
        Ok(n) => format!("Exported {n} rows to {}", path.display()),
        Err(e) => {
            log::error!("Export failed: {e:#}");
            format!("Export failed: {e:#}")
        }
    });
}
