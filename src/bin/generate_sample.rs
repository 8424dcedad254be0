use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Int64Array, StringArray, UInt32Array};
use arrow::datatypes::{Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// (name, designation, journal, conference, books, completed, ongoing, domain)
type Row = (&'static str, &'static str, u32, u32, u32, u32, u32, &'static str);

const FACULTY: [Row; 27] = [
    ("Dr Binod Kumar Kanaujia", "Director, NITJ", 347, 93, 25, 8, 3, "Communication Systems"),
    ("Dr Arun K Khosla", "Professor", 45, 31, 25, 11, 2, "Human–Computer Interaction (HCI)"),
    ("Dr B S Saini", "Professor", 61, 56, 16, 1, 0, "Signal processing"),
    ("Dr Mamta Khosla", "Professor", 56, 35, 11, 3, 4, "ML"),
    ("Dr Ashish Raman", "Associate Professor & Head", 84, 33, 15, 6, 10, "ML"),
    ("Dr Asutosh Kar", "Associate Professor", 54, 50, 3, 6, 0, "Signal processing"),
    ("Dr Balwinder Raj", "Associate Professor", 107, 51, 21, 7, 3, "Nanoelectronics"),
    ("Dr Deepti Kakkar", "Associate Professor", 36, 41, 22, 0, 1, "ML"),
    ("Dr Indu Saini", "Associate Professor", 38, 34, 8, 6, 0, "ML"),
    ("Dr Neetu Sood", "Associate Professor", 31, 43, 9, 3, 1, "Signal processing"),
    ("Dr Ramesh K Sunkaria", "Associate Professor", 83, 73, 6, 14, 4, "Signal processing"),
    ("Dr Aijaz Mehdi Zaidi", "Assistant Professor (Grade-I)", 19, 8, 1, 0, 1, "ML"),
    ("Dr. Manjeet Singh", "Assistant Professor (Grade-I)", 18, 13, 3, 0, 1, "iot"),
    ("Dr Nitesh Kashyap", "Assistant Professor (Grade-I)", 17, 16, 1, 0, 2, "Antenna design"),
    ("Dr Pawan Kumar Verma", "Assistant Professor (Grade-I)", 15, 17, 4, 1, 1, "iot"),
    ("Dr Sateesh Kumar Awasthi", "Assistant Professor (Grade-I)", 10, 18, 3, 2, 1, "Signal Processing"),
    ("Dr Sukwinder Singh", "Assistant Professor (Grade-I)", 12, 17, 1, 1, 3, "iot"),
    ("Dr Tarun Chaudhary", "Assistant Professor (Grade-I)", 20, 21, 14, 0, 1, "Nanoelectronics"),
    ("Dr Amina Girdher", "Assistant Professor Grade-II", 7, 5, 0, 0, 0, "Spectrum"),
    ("Dr Bodile Roshan Mukindrao", "Assistant Professor (Grade-II)", 6, 8, 2, 0, 1, "Signal processing"),
    ("Dr. Kundan Kumar", "Assistant Professor (Grade-II)", 13, 9, 0, 0, 3, "Antenna design"),
    ("Dr Pheirojam Pooja", "Assistant Professor Grade-II", 14, 1, 2, 0, 0, "Nanoelectronics"),
    ("Dr Robin Kalyan", "Assistant Professor Grade-II", 5, 8, 0, 0, 0, "Amplifier"),
    ("Dr Rohit Singh", "Assistant Professor (Grade-II)", 25, 6, 1, 0, 2, "Communication Systems"),
    ("Dr Sachchidanand", "Assistant Professor Grade-II", 0, 0, 0, 0, 0, "Beam conductors"),
    ("Dr Sumon Modak", "Assistant Professor Grade-II", 17, 8, 0, 0, 0, "Antenna design"),
    ("Dr. V Narasimha Nayak", "Assistant Professor Grade-II", 8, 8, 0, 0, 0, "Communication Systems"),
];

const HEADER: [&str; 9] = [
    "S.No",
    "Name",
    "Designation",
    "Journal Publications",
    "Conference Publications",
    "Books/Chapters",
    "Research Projects Completed",
    "Research Projects Ongoing",
    "Domain",
];

/// Sheet layout: two banner rows, the header row, then one row per faculty member.
fn write_csv(path: &str) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("creating {path}"))?;

    writer.write_record(["Department of Electronics & Communication Engineering"])?;
    writer.write_record(["Faculty Research Summary"])?;
    writer.write_record(HEADER)?;
    for (i, row) in FACULTY.iter().enumerate() {
        let (name, designation, journal, conference, books, completed, ongoing, domain) = *row;
        writer.write_record([
            (i + 1).to_string(),
            name.to_string(),
            designation.to_string(),
            journal.to_string(),
            conference.to_string(),
            books.to_string(),
            completed.to_string(),
            ongoing.to_string(),
            domain.to_string(),
        ])?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn counts(pick: fn(&Row) -> u32) -> ArrayRef {
    Arc::new(UInt32Array::from(FACULTY.iter().map(pick).collect::<Vec<_>>()))
}

fn texts(pick: fn(&Row) -> &'static str) -> ArrayRef {
    Arc::new(StringArray::from(FACULTY.iter().map(pick).collect::<Vec<_>>()))
}

/// Same rows without banner lines; the schema carries the column names.
fn write_parquet(path: &str) -> Result<()> {
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from_iter_values(1..=FACULTY.len() as i64)),
        texts(|r| r.0),
        texts(|r| r.1),
        counts(|r| r.2),
        counts(|r| r.3),
        counts(|r| r.4),
        counts(|r| r.5),
        counts(|r| r.6),
        texts(|r| r.7),
    ];

    let fields: Vec<Field> = HEADER
        .iter()
        .zip(&columns)
        .map(|(name, col)| Field::new(*name, col.data_type().clone(), false))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let batch = RecordBatch::try_new(schema.clone(), columns).context("building record batch")?;

    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating Parquet writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing Parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let csv_path = "sample_faculty.csv";
    let parquet_path = "sample_faculty.parquet";

    write_csv(csv_path)?;
    write_parquet(parquet_path)?;

    println!(
        "Wrote {} faculty rows to {csv_path} and {parquet_path}",
        FACULTY.len()
    );
    Ok(())
}
