use std::path::{Path, PathBuf};

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{
    DataType, Float32Type, Float64Type, Int16Type, Int32Type, Int64Type, Int8Type, UInt16Type,
    UInt32Type, UInt64Type, UInt8Type,
};
use calamine::{open_workbook_auto, Data, Range, Reader};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Cell, FacultyDataset, RawRow};
use super::normalize::normalize;

/// Banner/header rows above the first faculty row in the department sheet.
pub const DEFAULT_HEADER_ROWS: usize = 3;

// ---------------------------------------------------------------------------
// Options and errors
// ---------------------------------------------------------------------------

/// How to read the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Leading grid rows to skip (spreadsheet, CSV and JSON inputs).
    pub header_rows: usize,
    /// Worksheet to read; the first sheet when `None`.
    pub sheet: Option<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            header_rows: DEFAULT_HEADER_ROWS,
            sheet: None,
        }
    }
}

/// The data file could not be read or decoded. Terminal for that load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("workbook contains no sheets")]
    NoSheets,

    #[error("sheet '{0}' not found in workbook")]
    SheetNotFound(String),

    #[error("could not decode CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("could not decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not decode Parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("could not read Parquet batch: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("unexpected layout: {0}")]
    Layout(String),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and normalize a faculty sheet.
pub fn load_dataset(path: &Path, options: &LoadOptions) -> Result<FacultyDataset, LoadError> {
    let rows = load_file(path, options)?;
    let records = normalize(&rows);
    log::info!(
        "Loaded {} faculty records from {} ({} data rows)",
        records.len(),
        path.display(),
        rows.len()
    );
    Ok(FacultyDataset::from_records(records))
}

/// Decode a file into data rows. Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xlsb` / `.xls` / `.ods` – the first (or named) sheet
/// * `.csv`     – plain rows, no header handling beyond `header_rows`
/// * `.json`    – `[[cell, cell, ...], ...]`
/// * `.parquet` – columns taken by position
pub fn load_file(path: &Path, options: &LoadOptions) -> Result<Vec<RawRow>, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let grid = match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => load_workbook(path, options.sheet.as_deref())?,
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => return load_parquet(path),
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    Ok(grid.into_iter().skip(options.header_rows).collect())
}

// ---------------------------------------------------------------------------
// Spreadsheet loader
// ---------------------------------------------------------------------------

fn load_workbook(path: &Path, sheet: Option<&str>) -> Result<Vec<RawRow>, LoadError> {
    let mut workbook = open_workbook_auto(path)?;
    let names = workbook.sheet_names();

    let name = match sheet {
        Some(wanted) => names
            .iter()
            .find(|n| n.as_str() == wanted)
            .cloned()
            .ok_or_else(|| LoadError::SheetNotFound(wanted.to_string()))?,
        None => names.first().cloned().ok_or(LoadError::NoSheets)?,
    };
    log::debug!("Reading sheet '{name}' from {}", path.display());

    let range = workbook.worksheet_range(&name)?;
    Ok(grid_from_range(&range))
}

/// Rows of `range` re-aligned to the sheet origin, so that row and column
/// offsets count from A1 even when the used range starts further in.
fn grid_from_range(range: &Range<Data>) -> Vec<RawRow> {
    let Some((first_row, first_col)) = range.start() else {
        return Vec::new();
    };

    let mut grid: Vec<RawRow> = vec![Vec::new(); first_row as usize];
    grid.extend(range.rows().map(|row| {
        std::iter::repeat(Cell::Empty)
            .take(first_col as usize)
            .chain(row.iter().map(cell_from_data))
            .collect()
    }));
    grid
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(_) | Data::Empty => Cell::Empty,
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Rows are read as-is: no header row, ragged widths allowed.
fn load_csv(path: &Path) -> Result<Vec<RawRow>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(guess_cell).collect());
    }
    Ok(rows)
}

fn guess_cell(s: &str) -> Cell {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Cell::Empty;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Cell::Int(i);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        return Cell::Float(f);
    }
    if trimmed == "true" || trimmed == "false" {
        return Cell::Bool(trimmed == "true");
    }
    Cell::Text(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON layout (one inner array per sheet row):
///
/// ```json
/// [
///   ["Faculty Research Data"],
///   [],
///   ["S.No", "Name", "Designation", ...],
///   [1, "Dr A", "Professor", 5, 2, 0, 1, 0, "ML"]
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<RawRow>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let rows = root
        .as_array()
        .ok_or_else(|| LoadError::Layout("expected a top-level JSON array".into()))?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            row.as_array()
                .map(|cells| cells.iter().map(json_to_cell).collect())
                .ok_or_else(|| LoadError::Layout(format!("row {i} is not an array")))
        })
        .collect()
}

fn json_to_cell(val: &JsonValue) -> Cell {
    match val {
        JsonValue::String(s) => Cell::Text(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Cell::Int(i)
            } else if let Some(f) = n.as_f64() {
                Cell::Float(f)
            } else {
                Cell::Text(n.to_string())
            }
        }
        JsonValue::Bool(b) => Cell::Bool(*b),
        JsonValue::Null => Cell::Empty,
        other => Cell::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with the sheet columns in schema order.
///
/// Column names are not consulted; the schema plays the role of the banner
/// rows, so every row is data.
fn load_parquet(path: &Path) -> Result<Vec<RawRow>, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result?;
        for row in 0..batch.num_rows() {
            rows.push(batch.columns().iter().map(|col| extract_cell(col, row)).collect());
        }
    }
    Ok(rows)
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell(col: &ArrayRef, row: usize) -> Cell {
    if col.is_null(row) {
        return Cell::Empty;
    }
    match col.data_type() {
        DataType::Utf8 => Cell::Text(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Cell::Text(col.as_string::<i64>().value(row).to_string()),
        DataType::Int8 => Cell::Int(col.as_primitive::<Int8Type>().value(row).into()),
        DataType::Int16 => Cell::Int(col.as_primitive::<Int16Type>().value(row).into()),
        DataType::Int32 => Cell::Int(col.as_primitive::<Int32Type>().value(row).into()),
        DataType::Int64 => Cell::Int(col.as_primitive::<Int64Type>().value(row)),
        DataType::UInt8 => Cell::Int(col.as_primitive::<UInt8Type>().value(row).into()),
        DataType::UInt16 => Cell::Int(col.as_primitive::<UInt16Type>().value(row).into()),
        DataType::UInt32 => Cell::Int(col.as_primitive::<UInt32Type>().value(row).into()),
        DataType::UInt64 => {
            let v = col.as_primitive::<UInt64Type>().value(row);
            i64::try_from(v).map_or(Cell::Empty, Cell::Int)
        }
        DataType::Float32 => Cell::Float(col.as_primitive::<Float32Type>().value(row).into()),
        DataType::Float64 => Cell::Float(col.as_primitive::<Float64Type>().value(row)),
        DataType::Boolean => Cell::Bool(col.as_boolean().value(row)),
        other => {
            log::debug!("Ignoring Parquet cell of type {other:?}");
            Cell::Empty
        }
    }
}
