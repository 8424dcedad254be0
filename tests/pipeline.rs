use std::io::Write;

use faculty_dashboard::data::aggregate::{summarize, TOP_N};
use faculty_dashboard::data::filter::{apply, FilterCriteria};
use faculty_dashboard::data::loader::{load_dataset, LoadOptions};
use faculty_dashboard::data::model::{Cell, RawRow};
use faculty_dashboard::data::normalize::normalize;
use faculty_dashboard::state::{AppState, LoadStatus};

fn row(serial: i64, name: &str, designation: &str, pubs: [i64; 3], projects: [i64; 2], domain: &str) -> RawRow {
    vec![
        Cell::Int(serial),
        Cell::Text(name.into()),
        Cell::Text(designation.into()),
        Cell::Int(pubs[0]),
        Cell::Int(pubs[1]),
        Cell::Int(pubs[2]),
        Cell::Int(projects[0]),
        Cell::Int(projects[1]),
        Cell::Text(domain.into()),
    ]
}

#[test]
fn two_record_walkthrough() {
    let rows = vec![
        row(1, "Dr A", "Professor", [5, 2, 0], [1, 0], "ML"),
        row(2, "B", "Assistant Professor", [1, 1, 1], [0, 2], "iot"),
    ];
    let records = normalize(&rows);
    let totals: Vec<u32> = records.iter().map(|r| r.total_publications()).collect();
    assert_eq!(totals, [7, 3]);

    let criteria = FilterCriteria {
        min_total_publications: 5,
        ..Default::default()
    };
    let view = apply(&records, &criteria);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].serial_number(), 1);

    let summary = summarize(&view);
    assert_eq!(summary.charts.domain_publications.categories, ["ML"]);
    assert_eq!(summary.charts.domain_publications.values, [7]);
    assert_eq!(summary.charts.designation_counts.categories, ["Professor"]);
    assert_eq!(summary.charts.designation_counts.values, [1]);
    assert_eq!(summary.charts.top_publications.categories, ["A"]);
    assert_eq!(summary.kpis.avg_publications, 7.0);
}

#[test]
fn large_view_respects_top_n_and_totals() {
    let domains = ["ML", "iot", "Antenna design"];
    let rows: Vec<RawRow> = (1..=40)
        .map(|i| {
            row(
                i,
                &format!("Dr Person {i}"),
                if i % 2 == 0 { "Professor" } else { "Associate Professor" },
                [i % 9, i % 4, i % 2],
                [i % 3, i % 5],
                domains[(i % 3) as usize],
            )
        })
        .collect();
    let records = normalize(&rows);
    assert_eq!(records.len(), 40);
    for r in &records {
        assert_eq!(
            r.total_publications(),
            r.journal_publications() + r.conference_publications() + r.book_chapters()
        );
        assert_eq!(r.total_projects(), r.projects_completed() + r.projects_ongoing());
    }

    let view = apply(&records, &FilterCriteria::default());
    assert_eq!(view.len(), records.len());
    let summary = summarize(&view);

    assert_eq!(summary.charts.top_publications.len(), TOP_N);
    assert!(summary.charts.top_projects.len() <= TOP_N);
    assert_eq!(summary.table.len(), 40);
    assert!(summary
        .table
        .windows(2)
        .all(|w| w[0].total_publications >= w[1].total_publications));

    let domain_total: u64 = summary.charts.domain_publications.values.iter().sum();
    assert_eq!(domain_total, summary.kpis.total_publications);
    let designation_total: u64 = summary.charts.designation_counts.values.iter().sum();
    assert_eq!(designation_total as usize, summary.kpis.count);
    assert_eq!(summary.kpis.unique_domains, 3);
}

#[test]
fn csv_file_drives_the_dashboard_state() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(
        file,
        "Department,,,,,,,,\n\
         Summary,,,,,,,,\n\
         S.No,Name,Designation,J,C,B,PC,PO,Domain\n\
         1,Dr A,Professor,5,2,0,1,0,ML\n\
         2,B,Assistant Professor,1,1,1,0,2,iot\n\
         x,broken,row,1,1,1,1,1,ML\n"
    )
    .unwrap();

    let ds = load_dataset(file.path(), &LoadOptions::default()).unwrap();
    assert_eq!(ds.len(), 2);

    let mut state = AppState::new(LoadOptions::default());
    state.load_path(file.path());
    assert_eq!(state.load_status, LoadStatus::Loaded);
    assert_eq!(state.summary.kpis.count, 2);

    state.set_min_total_publications(5);
    assert_eq!(state.summary.kpis.count, 1);
    state.select_none_domains();
    assert_eq!(state.summary.kpis.count, 1);
    state.reset_filters();
    assert_eq!(state.summary.kpis.count, 2);
}
