use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, Commands};
use crate::error::{DashboardError, Result};
use crate::models::{ColumnMap, Dataset, ResolvedColumn, SemanticRole};
use crate::readers::SpreadsheetReader;
use crate::server::{self, AppState, Layout};
use crate::utils::ProgressReporter;

pub async fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve {
            data_file,
            host,
            port,
        } => {
            let (dataset, columns) = load(&data_file)?;
            let layout = Layout::build(&dataset, &columns)?;

            let addr: SocketAddr = format!("{host}:{port}")
                .parse()
                .map_err(|_| DashboardError::Config(format!("invalid bind address {host}:{port}")))?;

            println!("Serving dashboard at http://{addr}/");
            server::serve(
                AppState {
                    dataset: Arc::new(dataset),
                    columns,
                    layout,
                },
                addr,
            )
            .await
        }

        Commands::Inspect { data_file } => {
            let (dataset, columns) = load(&data_file)?;
            print_report(&dataset, &columns);
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore the error if a subscriber is already installed (tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

/// One-time startup sequence: read the spreadsheet, then bind the semantic
/// roles. Any failure here aborts before the server starts listening.
fn load(data_file: &Path) -> Result<(Dataset, ColumnMap)> {
    let progress = ProgressReporter::new_spinner("Loading dataset...", false);

    let dataset = SpreadsheetReader::new().read(data_file)?;
    progress.set_message("Resolving columns...");
    let columns = ColumnMap::resolve(dataset.columns())?;

    progress.finish_with_message(&format!(
        "Loaded {} rows from {}",
        dataset.row_count(),
        data_file.display()
    ));
    tracing::info!(
        rows = dataset.row_count(),
        columns = dataset.columns().len(),
        "dataset loaded"
    );

    Ok((dataset, columns))
}

fn print_report(dataset: &Dataset, columns: &ColumnMap) {
    println!("Rows: {}", dataset.row_count());
    println!("Columns: {}", dataset.columns().join(", "));
    println!("\nResolved roles:");
    print_role(SemanticRole::Country, Some(&columns.country));
    print_role(SemanticRole::Pm25, Some(&columns.pm25));
    print_role(SemanticRole::Pm10, Some(&columns.pm10));
    print_role(SemanticRole::Year, Some(&columns.year));
    print_role(SemanticRole::Latitude, columns.latitude.as_ref());
    print_role(SemanticRole::Longitude, columns.longitude.as_ref());

    let countries = dataset.distinct_labels(columns.country.index);
    let mut years = dataset.distinct_years(columns.year.index);
    years.sort_unstable();
    println!("\nDistinct countries: {}", countries.len());
    println!(
        "Years: {}",
        years
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "Geo chart: {}",
        if columns.has_coordinates() {
            "point map (lat/lon resolved)"
        } else {
            "choropleth (no coordinates)"
        }
    );
}

fn print_role(role: SemanticRole, column: Option<&ResolvedColumn>) {
    match column {
        Some(column) => println!("  {:<10} -> {} (column {})", role.to_string(), column.name, column.index),
        None => println!("  {:<10} -> (not present)", role.to_string()),
    }
}
