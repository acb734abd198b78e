pub mod spreadsheet_reader;

pub use spreadsheet_reader::{normalize_column_name, SpreadsheetReader};
