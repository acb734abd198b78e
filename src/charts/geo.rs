use crate::charts::spec::{ChartSpec, ChoroplethChart, ColorScale, GeoPointChart};
use crate::charts::stats::grouped_mean;
use crate::models::{ColumnMap, Dataset, GeoPoint, Indicator};

const PROJECTION: &str = "natural earth";
const LOCATION_MODE: &str = "country names";

/// Geographic view of the selected year. With resolved coordinate columns
/// this is a point map; otherwise a choropleth of country means. The
/// branch is decided by the column map and never changes at runtime.
pub fn geo_map(
    dataset: &Dataset,
    columns: &ColumnMap,
    indicator: Indicator,
    year: i64,
) -> ChartSpec {
    match (&columns.latitude, &columns.longitude) {
        (Some(lat), Some(lon)) => point_map(dataset, columns, indicator, year, lat.index, lon.index),
        _ => choropleth(dataset, columns, indicator, year),
    }
}

fn point_map(
    dataset: &Dataset,
    columns: &ColumnMap,
    indicator: Indicator,
    year: i64,
    lat_col: usize,
    lon_col: usize,
) -> ChartSpec {
    let indicator_column = columns.indicator(indicator);

    let mut lat = Vec::new();
    let mut lon = Vec::new();
    let mut values = Vec::new();
    let mut labels = Vec::new();

    for row in dataset.rows_with_year(columns.year.index, year) {
        let (Some(latitude), Some(longitude), Some(value)) = (
            dataset.number(row, lat_col),
            dataset.number(row, lon_col),
            dataset.number(row, indicator_column.index),
        ) else {
            continue;
        };

        let point = GeoPoint::new(latitude, longitude);
        if !point.is_valid() {
            tracing::debug!(row, latitude, longitude, "skipping out-of-range coordinate");
            continue;
        }

        lat.push(point.latitude);
        lon.push(point.longitude);
        values.push(value);
        labels.push(
            dataset
                .label(row, columns.country.index)
                .unwrap_or_default(),
        );
    }

    ChartSpec::ScatterGeo(GeoPointChart {
        title: format!(
            "Spatial Distribution of {} ({})",
            indicator_column.name.to_uppercase(),
            year
        ),
        lat,
        lon,
        values,
        labels,
        color_scale: ColorScale::Reds,
        projection: PROJECTION.to_string(),
    })
}

fn choropleth(
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

    let (locations, values) = grouped_mean(pairs).into_iter().unzip();

    ChartSpec::Choropleth(ChoroplethChart {
        title: format!(
            "{} by Country ({})",
            indicator_column.name.to_uppercase(),
            year
        ),
        locations,
        values,
        location_mode: LOCATION_MODE.to_string(),
        color_scale: ColorScale::Reds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cell;

    fn dataset_with_coords() -> (Dataset, ColumnMap) {
        let dataset = Dataset::new(
            vec![
                "country".into(),
                "year".into(),
                "pm25".into(),
                "pm10".into(),
                "lat".into(),
                "lon".into(),
            ],
            vec![
                vec![
                    Cell::Text("Indonesia".into()),
                    Cell::Number(2020.0),
                    Cell::Number(40.0),
                    Cell::Number(60.0),
                    Cell::Number(-6.2),
                    Cell::Number(106.8),
                ],
                vec![
                    Cell::Text("Japan".into()),
                    Cell::Number(2020.0),
                    Cell::Number(10.0),
                    Cell::Number(15.0),
                    Cell::Number(35.7),
                    Cell::Number(139.7),
                ],
                vec![
                    Cell::Text("Nowhere".into()),
                    Cell::Number(2020.0),
                    Cell::Number(99.0),
                    Cell::Number(99.0),
                    Cell::Number(95.0),
                    Cell::Number(10.0),
                ],
            ],
        )
        .unwrap();
        let columns = ColumnMap::resolve(dataset.columns()).unwrap();
        (dataset, columns)
    }

    fn dataset_without_coords() -> (Dataset, ColumnMap) {
        let dataset = Dataset::new(
            vec!["country".into(), "year".into(), "pm25".into(), "pm10".into()],
            vec![
                vec![
                    Cell::Text("Indonesia".into()),
                    Cell::Number(2020.0),
                    Cell::Number(40.0),
                    Cell::Number(60.0),
                ],
                vec![
                    Cell::Text("Indonesia".into()),
                    Cell::Number(2020.0),
                    Cell::Number(20.0),
                    Cell::Number(30.0),
                ],
                vec![
                    Cell::Text("Japan".into()),
                    Cell::Number(2020.0),
                    Cell::Number(10.0),
                    Cell::Number(15.0),
                ],
            ],
        )
        .unwrap();
        let columns = ColumnMap::resolve(dataset.columns()).unwrap();
        (dataset, columns)
    }

    #[test]
    fn test_point_map_when_coordinates_resolved() {
        let (dataset, columns) = dataset_with_coords();
        let ChartSpec::ScatterGeo(geo) = geo_map(&dataset, &columns, Indicator::Pm25, 2020) else {
            panic!("expected point map");
        };

        // The out-of-range latitude row is dropped.
        assert_eq!(geo.labels, vec!["Indonesia", "Japan"]);
        assert_eq!(geo.values, vec![40.0, 10.0]);
        assert_eq!(geo.projection, "natural earth");
        assert_eq!(geo.color_scale, ColorScale::Reds);
    }

    #[test]
    fn test_choropleth_when_coordinates_missing() {
        let (dataset, columns) = dataset_without_coords();
        let ChartSpec::Choropleth(geo) = geo_map(&dataset, &columns, Indicator::Pm25, 2020) else {
            panic!("expected choropleth");
        };

        assert_eq!(geo.locations, vec!["Indonesia", "Japan"]);
        assert_eq!(geo.values, vec![30.0, 10.0]);
        assert_eq!(geo.location_mode, "country names");
    }

    #[test]
    fn test_indicator_selects_value_column() {
        let (dataset, columns) = dataset_without_coords();
        let ChartSpec::Choropleth(geo) = geo_map(&dataset, &columns, Indicator::Pm10, 2020) else {
            panic!("expected choropleth");
        };
        assert_eq!(geo.values, vec![45.0, 15.0]);
        assert_eq!(geo.title, "PM10 by Country (2020)");
    }
}
