use std::path::PathBuf;

use clap::Parser;
use eframe::egui;

use faculty_dashboard::app::DashboardApp;
use faculty_dashboard::data::loader::{LoadOptions, DEFAULT_HEADER_ROWS};
use faculty_dashboard::state::AppState;

/// Interactive dashboard for faculty research metrics.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Data file to open at startup (.xlsx, .xls, .ods, .csv, .json, .parquet).
    path: Option<PathBuf>,

    /// Banner/header rows above the first faculty row.
    #[arg(long, default_value_t = DEFAULT_HEADER_ROWS)]
    header_rows: usize,

    /// Worksheet to read instead of the first one.
    #[arg(long)]
    sheet: Option<String>,
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let mut state = AppState::new(LoadOptions {
        header_rows: args.header_rows,
        sheet: args.sheet,
    });
    if let Some(path) = &args.path {
        state.load_path(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Faculty Research Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(state)))),
    )
}
