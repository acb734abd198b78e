//! Declarative chart specifications handed to the rendering layer.
//!
//! A spec carries the chart kind, the data vectors, and the encodings
//! (titles, color scale, projection). It is recomputed fresh on every
//! selection change and never cached.

use serde::Serialize;

/// Continuous color scales used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorScale {
    Oranges,
    Reds,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Bar(BarChart),
    Line(LineChart),
    Scatter(ScatterChart),
    ScatterGeo(GeoPointChart),
    Choropleth(ChoroplethChart),
}

/// Vertical bar chart, one bar per category, colored by value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub color_scale: ColorScale,
}

/// Line chart with optional point markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub x: Vec<i64>,
    pub y: Vec<f64>,
    pub markers: bool,
}

/// Scatter plot with one point group per category and an optional
/// least-squares trend overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub groups: Vec<ScatterGroup>,
    pub opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterGroup {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// A fitted line segment spanning the x-range of the fitted points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    pub x: [f64; 2],
    pub y: [f64; 2],
}

/// Geographic point map positioned by latitude/longitude.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPointChart {
    pub title: String,
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    pub values: Vec<f64>,
    pub labels: Vec<String>,
    pub color_scale: ColorScale,
    pub projection: String,
}

/// Choropleth keyed by country name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethChart {
    pub title: String,
    pub locations: Vec<String>,
    pub values: Vec<f64>,
    pub location_mode: String,
    pub color_scale: ColorScale,
}
