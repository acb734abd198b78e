use crate::charts::spec::{ChartSpec, LineChart};
use crate::charts::stats::grouped_mean;
use crate::models::{ColumnMap, Dataset, Indicator};

/// Global yearly trend: mean of the selected indicator per year over the
/// *unfiltered* table, one point per distinct year, ascending. The year
/// slider has no effect here.
pub fn trend_line(dataset: &Dataset, columns: &ColumnMap, indicator: Indicator) -> ChartSpec {
    let indicator_column = columns.indicator(indicator);

    let pairs = dataset.all_rows().into_iter().filter_map(|row| {
        let year = dataset.year(row, columns.year.index)?;
        let value = dataset.number(row, indicator_column.index)?;
        Some((year, value))
    });

    let mut trend = grouped_mean(pairs);
    trend.sort_by_key(|(year, _)| *year);
    let (x, y) = trend.into_iter().unzip();

    ChartSpec::Line(LineChart {
        title: format!(
            "Global Yearly {} Trend",
            indicator_column.name.to_uppercase()
        ),
        x_title: columns.year.name.clone(),
        y_title: indicator_column.name.clone(),
        x,
        y,
        markers: true,
    })
}
