use serde::{Deserialize, Serialize};

/// The two selectable pollution indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Pm25,
    Pm10,
}

impl Indicator {
    pub fn label(&self) -> &'static str {
        match self {
            Indicator::Pm25 => "PM2.5",
            Indicator::Pm10 => "PM10",
        }
    }
}

/// Current state of the three dashboard controls. Transient; rebuilt from
/// the query string on every chart request, never persisted.
///
/// `country` is collected from the dropdown but not applied as a filter by
/// any chart builder, matching the dashboard's year-only filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub indicator: Indicator,
    pub year: i64,
}
