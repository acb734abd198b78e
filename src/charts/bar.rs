use crate::charts::spec::{BarChart, ChartSpec, ColorScale};
use crate::charts::stats::{grouped_mean, top_n_desc};
use crate::models::{ColumnMap, Dataset, Indicator};

const TOP_N: usize = 10;

/// Top-10 bar chart: countries with the largest mean of the selected
/// indicator in the selected year. Years with fewer than ten countries
/// produce fewer than ten bars.
pub fn top10_bar(
    dataset: &Dataset,
    columns: &ColumnMap,
    indicator: Indicator,
    year: i64,
) -> ChartSpec {
    let indicator_column = columns.indicator(indicator);

    let pairs = dataset
        .rows_with_year(columns.year.index, year)
        .into_iter()
        .filter_map(|row| {
            let country = dataset.label(row, columns.country.index)?;
            let value = dataset.number(row, indicator_column.index)?;
            Some((country, value))
        });

    let top = top_n_desc(grouped_mean(pairs), TOP_N);
    let (categories, values) = top.into_iter().unzip();

    ChartSpec::Bar(BarChart {
        title: format!(
            "Top 10 Countries by {} in {}",
            indicator_column.name.to_uppercase(),
            year
        ),
        x_title: columns.country.name.clone(),
        y_title: indicator_column.name.clone(),
        categories,
        values,
        color_scale: ColorScale::Oranges,
    })
}
