use serde::Serialize;

use crate::error::{DashboardError, Result};
use crate::models::{ColumnMap, Dataset, Indicator};

/// Panel ids in render order.
pub const PANELS: [&str; 4] = ["bar", "line", "scatter", "geo"];

/// Static widget tree sent to the client once at page load. Options are
/// derived from the table at startup and exactly match its distinct values.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: String,
    pub countries: CountrySelect,
    pub indicators: IndicatorSelect,
    pub years: YearSlider,
    pub panels: [&'static str; 4],
}

#[derive(Debug, Clone, Serialize)]
pub struct CountrySelect {
    pub options: Vec<String>,
    pub default: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndicatorOption {
    pub label: &'static str,
    pub value: Indicator,
    pub column: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndicatorSelect {
    pub options: Vec<IndicatorOption>,
    pub default: Indicator,
}

/// Discrete year slider: step 1, one mark per distinct year.
#[derive(Debug, Clone, Serialize)]
pub struct YearSlider {
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub marks: Vec<i64>,
    pub default: i64,
}

impl Layout {
    pub fn build(dataset: &Dataset, columns: &ColumnMap) -> Result<Self> {
        let options = dataset.distinct_labels(columns.country.index);
        let default_country = options
            .first()
            .cloned()
            .ok_or_else(|| DashboardError::EmptyDataset("no country values".to_string()))?;

        let mut marks = dataset.distinct_years(columns.year.index);
        marks.sort_unstable();
        let (&min, &max) = match (marks.first(), marks.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(DashboardError::EmptyDataset("no year values".to_string())),
        };

        Ok(Self {
            title: "Global Air Quality Dashboard".to_string(),
            countries: CountrySelect {
                options,
                default: default_country,
            },
            indicators: IndicatorSelect {
                options: vec![
                    IndicatorOption {
                        label: Indicator::Pm25.label(),
                        value: Indicator::Pm25,
                        column: columns.pm25.name.clone(),
                    },
                    IndicatorOption {
                        label: Indicator::Pm10.label(),
                        value: Indicator::Pm10,
                        column: columns.pm10.name.clone(),
                    },
                ],
                default: Indicator::Pm25,
            },
            years: YearSlider {
                min,
                max,
                step: 1,
                marks,
                default: min,
            },
            panels: PANELS,
        })
    }
}
