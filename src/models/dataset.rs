use validator::Validate;

use crate::error::{DashboardError, Result};

/// A single spreadsheet cell after ingestion.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Parse a raw string field the way a CSV cell is ingested: numeric
    /// content becomes a number, blank content becomes empty.
    pub fn from_field(field: &str) -> Self {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Cell::Number(value),
            Err(_) => Cell::Text(trimmed.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Render the cell for use as a categorical label (country names, hover text).
    pub fn as_label(&self) -> Option<String> {
        match self {
            Cell::Text(text) => Some(text.clone()),
            Cell::Number(value) => Some(format_number(*value)),
            Cell::Empty => None,
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// The in-memory measurement table. Loaded once at startup and never
/// mutated afterwards; every chart builder reads it through `&self`.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    /// Build a dataset from normalized column names and cell rows. Rows are
    /// padded with empty cells so every row spans the full column set.
    pub fn new(columns: Vec<String>, mut rows: Vec<Vec<Cell>>) -> Result<Self> {
        if columns.is_empty() {
            return Err(DashboardError::EmptyDataset(
                "no header row found".to_string(),
            ));
        }
        for row in &mut rows {
            row.resize(columns.len(), Cell::Empty);
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn number(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row)?.get(col)?.as_number()
    }

    pub fn label(&self, row: usize, col: usize) -> Option<String> {
        self.rows.get(row)?.get(col)?.as_label()
    }

    /// The year value of a row, if the year cell holds a number.
    pub fn year(&self, row: usize, col: usize) -> Option<i64> {
        self.number(row, col).map(|value| value.round() as i64)
    }

    /// Distinct labels of a column in first-seen row order. Empty cells are
    /// skipped.
    pub fn distinct_labels(&self, col: usize) -> Vec<String> {
        let mut seen = Vec::new();
        for row in 0..self.rows.len() {
            if let Some(label) = self.label(row, col) {
                if !seen.contains(&label) {
                    seen.push(label);
                }
            }
        }
        seen
    }

    /// Distinct integer years of a column in first-seen row order.
    pub fn distinct_years(&self, col: usize) -> Vec<i64> {
        let mut seen = Vec::new();
        for row in 0..self.rows.len() {
            if let Some(year) = self.year(row, col) {
                if !seen.contains(&year) {
                    seen.push(year);
                }
            }
        }
        seen
    }

    /// Indices of all rows whose year cell equals `year`.
    pub fn rows_with_year(&self, col: usize, year: i64) -> Vec<usize> {
        (0..self.rows.len())
            .filter(|&row| self.year(row, col) == Some(year))
            .collect()
    }

    /// Indices of every row, for builders that operate on the full table.
    pub fn all_rows(&self) -> Vec<usize> {
        (0..self.rows.len()).collect()
    }
}

/// A geographic position read from the optional latitude/longitude columns.
/// Rows with out-of-range coordinates are dropped by the point-map builder.
#[derive(Debug, Clone, Copy, Validate)]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
