use std::ops::RangeInclusive;

use eframe::egui::{self, Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot};

use crate::color::{intensity, ColorMap};
use crate::data::aggregate::{ChartSeries, CrossTab, Kpis, Series, StackedSeries};
use crate::state::AppState;

const CHART_HEIGHT: f32 = 320.0;
const COMPLETED_COLOR: Color32 = Color32::from_rgb(0x2e, 0xcc, 0x71);
const ONGOING_COLOR: Color32 = Color32::from_rgb(0x34, 0x98, 0xdb);

// ---------------------------------------------------------------------------
// KPI cards
// ---------------------------------------------------------------------------

pub fn kpi_cards(ui: &mut Ui, kpis: &Kpis) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (label, value) in kpis.entries() {
            ui.group(|ui: &mut Ui| {
                ui.set_min_width(170.0);
                ui.vertical(|ui: &mut Ui| {
                    ui.label(label);
                    ui.label(RichText::new(value).heading().strong());
                });
            });
        }
    });
}

// ---------------------------------------------------------------------------
// Charts (central panel)
// ---------------------------------------------------------------------------

/// Render every chart for the current view, two per row.
pub fn chart_grid(ui: &mut Ui, state: &AppState) {
    let charts: &ChartSeries = &state.summary.charts;
    let domain_colors = state.domain_colors.as_ref();
    let designation_colors = state.designation_colors.as_ref();

    ui.columns(2, |cols: &mut [Ui]| {
        titled(&mut cols[0], charts.top_publications.name, |ui| {
            top_publications(ui, &charts.top_publications)
        });
        titled(&mut cols[1], charts.domain_publications.name, |ui| {
            category_bars(ui, "domain_publications", &charts.domain_publications, domain_colors, false)
        });
    });
    ui.add_space(8.0);

    ui.columns(2, |cols: &mut [Ui]| {
        titled(&mut cols[0], "Research Projects: Completed vs Ongoing (Top 15)", |ui| {
            project_stack(ui, &charts.top_projects)
        });
        titled(&mut cols[1], charts.designation_counts.name, |ui| {
            category_bars(ui, "designation_counts", &charts.designation_counts, designation_colors, true)
        });
    });
    ui.add_space(8.0);

    ui.columns(2, |cols: &mut [Ui]| {
        titled(&mut cols[0], charts.publication_types.name, |ui| {
            category_bars(ui, "publication_types", &charts.publication_types, None, true)
        });
        titled(&mut cols[1], "Faculty Count by Domain and Designation", |ui| {
            cross_tab(ui, &charts.domain_designation, designation_colors)
        });
    });
}

/// Heading plus either the chart or a placeholder when there is nothing to draw.
fn titled(ui: &mut Ui, title: &str, draw: impl FnOnce(&mut Ui) -> bool) {
    ui.strong(title);
    if !draw(ui) {
        ui.add_sized([ui.available_width(), CHART_HEIGHT], egui::Label::new("No data to display."));
    }
}

/// Axis formatter that prints the category label at integer positions.
fn category_axis(labels: Vec<String>) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String + 'static {
    move |mark: GridMark, _range: &RangeInclusive<f64>| {
        let v = mark.value;
        if v < 0.0 || v.fract() != 0.0 {
            return String::new();
        }
        labels.get(v as usize).cloned().unwrap_or_default()
    }
}

fn top_publications(ui: &mut Ui, series: &Series) -> bool {
    if series.is_empty() {
        return false;
    }
    let n = series.len();
    let max = series.max_value();

    // Highest first, drawn at the top.
    let bars: Vec<Bar> = series
        .iter()
        .enumerate()
        .map(|(i, (name, value))| {
            Bar::new((n - 1 - i) as f64, value as f64)
                .name(name)
                .fill(intensity(210.0, value, max))
        })
        .collect();
    let labels: Vec<String> = series.categories.iter().rev().cloned().collect();

    Plot::new("top_publications")
        .height(CHART_HEIGHT)
        .y_axis_formatter(category_axis(labels))
        .x_axis_label("Total Publications")
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Total Publications").horizontal());
        });
    true
}

/// Vertical bars, one per category. `share` appends the percentage to hover labels.
fn category_bars(ui: &mut Ui, id: &str, series: &Series, colors: Option<&ColorMap>, share: bool) -> bool {
    if series.is_empty() {
        return false;
    }
    let total: u64 = series.values.iter().sum();
    let max = series.max_value();

    let bars: Vec<Bar> = series
        .iter()
        .enumerate()
        .map(|(i, (category, value))| {
            let name = if share && total > 0 {
                format!("{category} ({:.1}%)", value as f64 * 100.0 / total as f64)
            } else {
                category.to_string()
            };
            let fill = colors.map_or_else(|| intensity(150.0, value, max), |c| c.color_for(category));
            Bar::new(i as f64, value as f64).name(name).fill(fill)
        })
        .collect();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .x_axis_formatter(category_axis(series.categories.clone()))
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(series.name));
        });
    true
}

fn project_stack(ui: &mut Ui, series: &StackedSeries) -> bool {
    if series.is_empty() {
        return false;
    }
    let bars = |values: &[u64], color: Color32| -> Vec<Bar> {
        values
            .iter()
            .zip(&series.names)
            .enumerate()
            .map(|(i, (&v, name))| Bar::new(i as f64, v as f64).name(name).fill(color))
            .collect()
    };

    let completed = BarChart::new(bars(&series.completed, COMPLETED_COLOR))
        .name("Completed")
        .color(COMPLETED_COLOR);
    let ongoing = BarChart::new(bars(&series.ongoing, ONGOING_COLOR))
        .name("Ongoing")
        .color(ONGOING_COLOR)
        .stack_on(&[&completed]);

    Plot::new("top_projects")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_formatter(category_axis(series.names.clone()))
        .y_axis_label("Number of Projects")
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(completed);
            plot_ui.bar_chart(ongoing);
        });
    true
}

fn cross_tab(ui: &mut Ui, tab: &CrossTab, colors: Option<&ColorMap>) -> bool {
    if tab.is_empty() {
        return false;
    }

    let mut charts: Vec<BarChart> = Vec::with_capacity(tab.designations.len());
    for (j, designation) in tab.designations.iter().enumerate() {
        let bars: Vec<Bar> = tab
            .counts
            .iter()
            .enumerate()
            .map(|(i, row)| Bar::new(i as f64, row[j] as f64).name(&tab.domains[i]))
            .collect();
        let color = colors.map_or(Color32::LIGHT_BLUE, |c| c.color_for(designation));
        let below: Vec<&BarChart> = charts.iter().collect();
        let chart = BarChart::new(bars)
            .name(designation)
            .color(color)
            .stack_on(&below);
        charts.push(chart);
    }

    Plot::new("domain_designation")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_formatter(category_axis(tab.domains.clone()))
        .y_axis_label("Faculty Count")
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
    true
}
