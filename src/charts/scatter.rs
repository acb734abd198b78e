use crate::charts::spec::{ChartSpec, ScatterChart, ScatterGroup, TrendLine};
use crate::charts::stats::ols_fit;
use crate::models::{ColumnMap, Dataset};

const OPACITY: f64 = 0.6;

/// PM10 (x) vs PM2.5 (y) for every row of the selected year, grouped by
/// country, with a least-squares trend overlay. The axes are fixed and do
/// not follow the indicator radio selection.
pub fn pm_scatter(dataset: &Dataset, columns: &ColumnMap, year: i64) -> ChartSpec {
    let mut groups: Vec<ScatterGroup> = Vec::new();
    let mut points: Vec<(f64, f64)> = Vec::new();

    for row in dataset.rows_with_year(columns.year.index, year) {
        let (Some(country), Some(pm10), Some(pm25)) = (
            dataset.label(row, columns.country.index),
            dataset.number(row, columns.pm10.index),
            dataset.number(row, columns.pm25.index),
        ) else {
            continue;
        };

        points.push((pm10, pm25));
        match groups.iter_mut().find(|group| group.name == country) {
            Some(group) => {
                group.x.push(pm10);
                group.y.push(pm25);
            }
            None => groups.push(ScatterGroup {
                name: country,
                x: vec![pm10],
                y: vec![pm25],
            }),
        }
    }

    let trend = ols_fit(&points).map(|(slope, intercept)| {
        let (min_x, max_x) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (x, _)| {
                (lo.min(*x), hi.max(*x))
            });
        TrendLine {
            slope,
            intercept,
            x: [min_x, max_x],
            y: [slope * min_x + intercept, slope * max_x + intercept],
        }
    });

    ChartSpec::Scatter(ScatterChart {
        title: format!("PM10 vs PM2.5 ({})", year),
        x_title: columns.pm10.name.clone(),
        y_title: columns.pm25.name.clone(),
        groups,
        opacity: OPACITY,
        trend,
    })
}
