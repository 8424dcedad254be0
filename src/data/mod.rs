/// Data layer: core types, loading, normalizing, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .xlsx / .ods / .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  decode file → rows of cells (banner rows skipped)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize │  rows → FacultyRecord (bad rows dropped, totals derived)
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  FilterCriteria → filtered view
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate │  view → KPIs, chart series, table rows
///   └───────────┘
/// ```

pub mod aggregate;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
