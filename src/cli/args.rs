use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "airquality-dashboard")]
#[command(about = "Interactive air-quality dashboard for PM2.5/PM10 spreadsheets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a dataset and serve the interactive dashboard
    Serve {
        #[arg(short, long, help = "Input spreadsheet (xlsx, xls, xlsm, xlsb, ods or csv)")]
        data_file: PathBuf,

        #[arg(long, default_value = "127.0.0.1", help = "Bind address")]
        host: String,

        #[arg(short, long, default_value = "8050", help = "Bind port")]
        port: u16,
    },

    /// Load a dataset and print the resolved schema without serving
    Inspect {
        #[arg(short, long, help = "Input spreadsheet (xlsx, xls, xlsm, xlsb, ods or csv)")]
        data_file: PathBuf,
    },
}
