use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{DashboardError, Result};
use crate::models::{Cell, Dataset};

/// Normalize a raw header the way the dashboard expects column names:
/// trimmed, lowercased, spaces replaced with underscores, dots removed.
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_").replace('.', "")
}

/// Reads the measurement table from a spreadsheet or CSV file. Runs once
/// at startup; any failure here is fatal and there is no fallback dataset.
pub struct SpreadsheetReader;

impl SpreadsheetReader {
    pub fn new() -> Self {
        Self
    }

    /// Load a dataset, dispatching on the file extension.
    pub fn read(&self, path: &Path) -> Result<Dataset> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => self.read_csv(path),
            "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => self.read_excel(path),
            other => Err(DashboardError::UnsupportedExtension(other.to_string())),
        }
    }

    /// Read the first worksheet of an Excel/ODS workbook. The first row is
    /// the header; everything below is data.
    fn read_excel(&self, path: &Path) -> Result<Dataset> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| DashboardError::EmptyDataset("workbook has no sheets".to_string()))??;

        let mut rows = range.rows();
        let header = rows
            .next()
            .ok_or_else(|| DashboardError::EmptyDataset("worksheet has no header row".to_string()))?;

        let columns: Vec<String> = header
            .iter()
            .map(|cell| normalize_column_name(&header_text(cell)))
            .collect();

        let data = rows
            .map(|row| row.iter().map(cell_from_excel).collect())
            .collect();

        Dataset::new(columns, data)
    }

    fn read_csv(&self, path: &Path) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        let columns: Vec<String> = reader
            .headers()?
            .iter()
            .map(normalize_column_name)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(Cell::from_field).collect());
        }

        Dataset::new(columns, rows)
    }
}

impl Default for SpreadsheetReader {
    fn default() -> Self {
        Self::new()
    }
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn cell_from_excel(cell: &Data) -> Cell {
    match cell {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::Float(value) => Cell::Number(*value),
        Data::Int(value) => Cell::Number(*value as f64),
        Data::Bool(value) => Cell::Text(value.to_string()),
        Data::String(text) => Cell::from_field(text),
        Data::DateTime(value) => Cell::Number(value.as_f64()),
        Data::DateTimeIso(text) | Data::DurationIso(text) => Cell::Text(text.clone()),
    }
}
