use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::aggregate::{DesignationStats, DomainStats, TableRow, TABLE_COLUMNS};

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Data and statistics tables
// ---------------------------------------------------------------------------

/// The detailed faculty table, already sorted by total publications.
pub fn data_table(ui: &mut Ui, rows: &[TableRow]) {
    grid(ui, "data_table", &TABLE_COLUMNS, rows.len(), 400.0, |i| rows[i].cells().to_vec());
}

pub fn domain_stats_table(ui: &mut Ui, stats: &[DomainStats]) {
    let header = ["Domain", "Journal", "Conference", "Books/Chapters", "Total Publications"];
    grid(ui, "domain_stats", &header, stats.len(), 240.0, |i| {
        let s = &stats[i];
        vec![
            s.domain.clone(),
            s.journal_publications.to_string(),
            s.conference_publications.to_string(),
            s.book_chapters.to_string(),
            s.total_publications.to_string(),
        ]
    });
}

pub fn designation_stats_table(ui: &mut Ui, stats: &[DesignationStats]) {
    let header = ["Designation", "Completed", "Ongoing", "Total Projects"];
    grid(ui, "designation_stats", &header, stats.len(), 240.0, |i| {
        let s = &stats[i];
        vec![
            s.designation.clone(),
            s.projects_completed.to_string(),
            s.projects_ongoing.to_string(),
            s.total_projects.to_string(),
        ]
    });
}

fn grid(
    ui: &mut Ui,
    id: &str,
    header: &[&str],
    n_rows: usize,
    max_height: f32,
    cells: impl Fn(usize) -> Vec<String>,
) {
    if n_rows == 0 {
        ui.label("No data to display.");
        return;
    }

    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(60.0), header.len())
            .max_scroll_height(max_height)
            .header(ROW_HEIGHT + 4.0, |mut head| {
                for title in header {
                    head.col(|ui: &mut Ui| {
                        ui.strong(*title);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, n_rows, |mut row| {
                    for text in cells(row.index()) {
                        row.col(|ui: &mut Ui| {
                            ui.label(text);
                        });
                    }
                });
            });
    });
}
