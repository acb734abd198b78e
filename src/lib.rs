pub mod charts;
pub mod cli;
pub mod error;
pub mod models;
pub mod readers;
pub mod server;
pub mod utils;

pub use error::{DashboardError, Result};
