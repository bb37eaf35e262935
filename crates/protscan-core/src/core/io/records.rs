use crate::core::models::sequence::Sequence;
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Number of columns in a protein dataset row.
pub const RECORD_COLUMNS: usize = 19;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Row on line {line} has {found} columns, expected {}", RECORD_COLUMNS)]
    ShortRow { line: u64, found: usize },
}

/// One row of a protein dataset. Column order:
///
/// ID, Name, Gene name, Taxonomic lineage, Cellular components, Domain, Family,
/// Biological process, Function, Length, Molecular weight, Number of interactors, pI,
/// Net_Charge_7_4, Hydrophobicity_GRAVY, Depth_Rank, Last_Rank, First_Rank,
/// Sequence_Chunks.
///
/// Numeric columns are the values stored in the dataset, not recomputed ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProteinRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub gene: Option<String>,
    pub taxonomy: Option<String>,
    pub cellular_component: Option<String>,
    pub domain: Option<String>,
    pub family: Option<String>,
    pub biological_process: Option<String>,
    pub function: Option<String>,
    pub length: Option<usize>,
    pub molecular_weight: Option<f64>,
    pub interactor_count: Option<u32>,
    pub isoelectric_point: Option<f64>,
    pub net_charge_7_4: Option<f64>,
    pub hydrophobicity: Option<f64>,
    pub depth_rank: Option<i64>,
    pub last_rank: Option<i64>,
    pub first_rank: Option<i64>,
    pub sequence: Sequence,
}

fn null_text(cell: &str) -> Option<String> {
    let cell = cell.trim();
    match cell {
        "" | "NULL" | "null" => None,
        _ => Some(cell.to_string()),
    }
}

fn null_number<T: FromStr>(cell: &str) -> Option<T> {
    null_text(cell).and_then(|s| s.parse().ok())
}

impl ProteinRecord {
    fn from_row(row: &csv::StringRecord) -> Result<Self, RecordError> {
        if row.len() < RECORD_COLUMNS {
            return Err(RecordError::ShortRow {
                line: row.position().map_or(0, |p| p.line()),
                found: row.len(),
            });
        }
        let cell = |i: usize| row.get(i).unwrap_or_default();

        Ok(Self {
            id: null_text(cell(0)),
            name: null_text(cell(1)),
            gene: null_text(cell(2)),
            taxonomy: null_text(cell(3)),
            cellular_component: null_text(cell(4)),
            domain: null_text(cell(5)),
            family: null_text(cell(6)),
            biological_process: null_text(cell(7)),
            function: null_text(cell(8)),
            length: null_number(cell(9)),
            molecular_weight: null_number(cell(10)),
            interactor_count: null_number(cell(11)),
            isoelectric_point: null_number(cell(12)),
            net_charge_7_4: null_number(cell(13)),
            hydrophobicity: null_number(cell(14)),
            depth_rank: null_number(cell(15)),
            last_rank: null_number(cell(16)),
            first_rank: null_number(cell(17)),
            sequence: Sequence::parse_chunks(cell(18)),
        })
    }
}

/// Reads every data row of a protein dataset; the first row is treated as a header.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<ProteinRecord>, RecordError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.records() {
        records.push(ProteinRecord::from_row(&row?)?);
    }
    Ok(records)
}

pub fn read_records_from_path(path: &Path) -> Result<Vec<ProteinRecord>, RecordError> {
    let file = File::open(path).map_err(|e| RecordError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    read_records(file)
}

/// Writes `rows` as CSV with a header derived from the row type's field names.
pub fn write_rows<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<(), RecordError> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
