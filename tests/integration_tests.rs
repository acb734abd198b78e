use std::io::Write;

use pretty_assertions::assert_eq;

use airquality_dashboard::charts::{build_dashboard, ChartSpec};
use airquality_dashboard::models::{ColumnMap, Dataset, Indicator, Selection};
use airquality_dashboard::readers::SpreadsheetReader;
use airquality_dashboard::server::Layout;
use airquality_dashboard::DashboardError;

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file
}

fn load(contents: &str) -> (Dataset, ColumnMap) {
    let file = write_csv(contents);
    let dataset = SpreadsheetReader::new().read(file.path()).unwrap();
    let columns = ColumnMap::resolve(dataset.columns()).unwrap();
    (dataset, columns)
}

const SAMPLE: &str = "\
Country Name,Year,PM2.5,PM 10
Indonesia,2020,40,60
Japan,2020,10,15
Indonesia,2021,35,55
";

#[test]
fn test_column_resolution_under_case_and_spacing_variants() {
    let (_dataset, columns) = load(SAMPLE);

    assert_eq!(columns.country.name, "country_name");
    assert_eq!(columns.year.name, "year");
    assert_eq!(columns.pm25.name, "pm25");
    assert_eq!(columns.pm10.name, "pm_10");
    assert!(!columns.has_coordinates());
}

#[test]
fn test_missing_required_column_fails_before_serving() {
    let file = write_csv("Country,PM2.5,PM 10\nIndonesia,40,60\n");
    let dataset = SpreadsheetReader::new().read(file.path()).unwrap();

    let err = ColumnMap::resolve(dataset.columns()).unwrap_err();
    assert!(matches!(err, DashboardError::MissingColumn { .. }));
}

#[test]
fn test_concrete_scenario_bar_and_trend() {
    // pm25/2020 -> bar [Indonesia:40, Japan:10], trend [(2020,25),(2021,35)].
    let (dataset, columns) = load(SAMPLE);
    let selection = Selection {
        country: None,
        indicator: Indicator::Pm25,
        year: 2020,
    };

    let update = build_dashboard(&dataset, &columns, &selection);

    let ChartSpec::Bar(bar) = update.bar else {
        panic!("expected bar spec");
    };
    assert_eq!(bar.categories, vec!["Indonesia".to_string(), "Japan".to_string()]);
    assert_eq!(bar.values, vec![40.0, 10.0]);

    let ChartSpec::Line(line) = update.line else {
        panic!("expected line spec");
    };
    assert_eq!(line.x, vec![2020, 2021]);
    assert_eq!(line.y, vec![25.0, 35.0]);
}

#[test]
fn test_trend_ignores_year_selection() {
    let (dataset, columns) = load(SAMPLE);

    for year in [2020, 2021] {
        let selection = Selection {
            country: None,
            indicator: Indicator::Pm25,
            year,
        };
        let ChartSpec::Line(line) = build_dashboard(&dataset, &columns, &selection).line else {
            panic!("expected line spec");
        };
        assert_eq!(line.x, vec![2020, 2021]);
    }
}

#[test]
fn test_scatter_count_matches_year_rows_and_axes_are_fixed() {
    let (dataset, columns) = load(SAMPLE);

    for indicator in [Indicator::Pm25, Indicator::Pm10] {
        let selection = Selection {
            country: None,
            indicator,
            year: 2020,
        };
        let ChartSpec::Scatter(scatter) = build_dashboard(&dataset, &columns, &selection).scatter
        else {
            panic!("expected scatter spec");
        };

        let points: usize = scatter.groups.iter().map(|g| g.x.len()).sum();
        assert_eq!(points, 2);
        assert_eq!(scatter.x_title, "pm_10");
        assert_eq!(scatter.y_title, "pm25");
    }
}

#[test]
fn test_geo_branch_is_fixed_by_startup_schema() {
    // Without coordinates every selection gets a choropleth.
    let (dataset, columns) = load(SAMPLE);
    for year in [2020, 2021] {
        let selection = Selection {
            country: None,
            indicator: Indicator::Pm25,
            year,
        };
        let update = build_dashboard(&dataset, &columns, &selection);
        assert!(matches!(update.geo, ChartSpec::Choropleth(_)));
    }

    // With coordinates every selection gets a point map.
    let with_coords = "\
Country,Year,PM2.5,PM 10,Lat,Lon
Indonesia,2020,40,60,-6.2,106.8
Japan,2020,10,15,35.7,139.7
";
    let (dataset, columns) = load(with_coords);
    for year in [2019, 2020] {
        let selection = Selection {
            country: None,
            indicator: Indicator::Pm10,
            year,
        };
        let update = build_dashboard(&dataset, &columns, &selection);
        assert!(matches!(update.geo, ChartSpec::ScatterGeo(_)));
    }
}

#[test]
fn test_layout_options_match_table() {
    let (dataset, columns) = load(SAMPLE);
    let layout = Layout::build(&dataset, &columns).unwrap();

    assert_eq!(layout.countries.options, vec!["Indonesia".to_string(), "Japan".to_string()]);
    assert_eq!(layout.countries.default, "Indonesia");
    assert_eq!(layout.years.marks, vec![2020, 2021]);
    assert_eq!(layout.years.default, 2020);
    assert_eq!(layout.indicators.default, Indicator::Pm25);
}

#[test]
fn test_update_serializes_four_panels_in_order() {
    let (dataset, columns) = load(SAMPLE);
    let selection = Selection {
        country: Some("Japan".to_string()),
        indicator: Indicator::Pm10,
        year: 2020,
    };

    let json = serde_json::to_value(build_dashboard(&dataset, &columns, &selection)).unwrap();
    assert_eq!(json["bar"]["kind"], "bar");
    assert_eq!(json["line"]["kind"], "line");
    assert_eq!(json["scatter"]["kind"], "scatter");
    assert_eq!(json["geo"]["kind"], "choropleth");
    assert_eq!(json["bar"]["color_scale"], "Oranges");
    assert_eq!(json["geo"]["color_scale"], "Reds");
}

#[test]
fn test_year_with_fewer_than_ten_countries_returns_all() {
    let (dataset, columns) = load(SAMPLE);
    let selection = Selection {
        country: None,
        indicator: Indicator::Pm25,
        year: 2021,
    };

    let ChartSpec::Bar(bar) = build_dashboard(&dataset, &columns, &selection).bar else {
        panic!("expected bar spec");
    };
    assert_eq!(bar.categories, vec!["Indonesia".to_string()]);
    assert_eq!(bar.values, vec![35.0]);
}
