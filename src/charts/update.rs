use serde::Serialize;

use crate::charts::spec::ChartSpec;
use crate::charts::{bar, geo, line, scatter};
use crate::models::{ColumnMap, Dataset, Selection};

/// The four chart specifications produced by one selection change, in
/// fixed panel order.
#[derive(Debug, Serialize)]
pub struct DashboardUpdate {
    pub bar: ChartSpec,
    pub line: ChartSpec,
    pub scatter: ChartSpec,
    pub geo: ChartSpec,
}

/// Recompute all four charts for the current control state. Pure and
/// deterministic: the table is never mutated and nothing is cached.
/// The country selection is carried but not applied as a filter.
pub fn build_dashboard(
    dataset: &Dataset,
    columns: &ColumnMap,
    selection: &Selection,
) -> DashboardUpdate {
    DashboardUpdate {
        bar: bar::top10_bar(dataset, columns, selection.indicator, selection.year),
        line: line::trend_line(dataset, columns, selection.indicator),
        scatter: scatter::pm_scatter(dataset, columns, selection.year),
        geo: geo::geo_map(dataset, columns, selection.indicator, selection.year),
    }
}
