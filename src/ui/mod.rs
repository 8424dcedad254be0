//! egui presentation: binds the state's summary to panels, charts and tables.

pub mod charts;
pub mod panels;
pub mod table;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, LoadStatus};

/// Render the central dashboard, or the terminal error / empty placeholder.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    match &state.load_status {
        LoadStatus::Failed(message) => {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.add_space(40.0);
                ui.heading(RichText::new("Error Loading Data").color(Color32::RED));
                ui.label(message.as_str());
            });
            return;
        }
        LoadStatus::Idle => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a faculty sheet to begin  (File → Open…)");
            });
            return;
        }
        LoadStatus::Loaded => {}
    }

    let summary = &state.summary;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Key Performance Indicators");
            charts::kpi_cards(ui, &summary.kpis);
            ui.separator();

            ui.heading("Research Analytics");
            charts::chart_grid(ui, state);
            ui.separator();

            ui.heading("Detailed Faculty Data");
            table::data_table(ui, &summary.table);
            ui.separator();

            ui.heading("Summary Statistics");
            ui.columns(2, |cols: &mut [Ui]| {
                egui::CollapsingHeader::new("Publication Statistics by Domain")
                    .default_open(false)
                    .show(&mut cols[0], |ui: &mut Ui| {
                        table::domain_stats_table(ui, &summary.domain_stats)
                    });
                egui::CollapsingHeader::new("Research Project Statistics by Designation")
                    .default_open(false)
                    .show(&mut cols[1], |ui: &mut Ui| {
                        table::designation_stats_table(ui, &summary.designation_stats)
                    });
            });
        });
}
