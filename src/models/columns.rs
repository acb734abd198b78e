use std::fmt;

use serde::Serialize;

use crate::error::{DashboardError, Result};
use crate::models::Indicator;

/// Abstract meaning a column must serve, independent of its source name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticRole {
    Country,
    Pm25,
    Pm10,
    Year,
    Latitude,
    Longitude,
}

impl SemanticRole {
    /// Roles that must resolve for the dashboard to be usable at all.
    pub const REQUIRED: [SemanticRole; 4] = [
        SemanticRole::Country,
        SemanticRole::Pm25,
        SemanticRole::Pm10,
        SemanticRole::Year,
    ];

    /// Substrings that mark a normalized column name as serving this role.
    pub fn candidates(&self) -> &'static [&'static str] {
        match self {
            SemanticRole::Country => &["country", "negara"],
            SemanticRole::Pm25 => &["pm25", "pm_25"],
            SemanticRole::Pm10 => &["pm10", "pm_10"],
            SemanticRole::Year => &["year", "tahun"],
            SemanticRole::Latitude => &["lat"],
            SemanticRole::Longitude => &["lon"],
        }
    }
}

impl fmt::Display for SemanticRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SemanticRole::Country => "country",
            SemanticRole::Pm25 => "pm2.5",
            SemanticRole::Pm10 => "pm10",
            SemanticRole::Year => "year",
            SemanticRole::Latitude => "latitude",
            SemanticRole::Longitude => "longitude",
        };
        write!(f, "{}", name)
    }
}

/// A role bound to an actual dataset column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedColumn {
    pub index: usize,
    pub name: String,
}

/// The startup-computed binding from semantic role to dataset column.
/// Computed once; never changes while the server runs.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnMap {
    pub country: ResolvedColumn,
    pub pm25: ResolvedColumn,
    pub pm10: ResolvedColumn,
    pub year: ResolvedColumn,
    pub latitude: Option<ResolvedColumn>,
    pub longitude: Option<ResolvedColumn>,
}

impl ColumnMap {
    /// Bind every semantic role against a normalized column-name list.
    /// Required roles with no match abort startup; latitude/longitude are
    /// optional and select the geo chart branch.
    pub fn resolve(columns: &[String]) -> Result<Self> {
        let required = |role: SemanticRole| {
            find_first(columns, role).ok_or(DashboardError::MissingColumn { role })
        };

        Ok(Self {
            country: required(SemanticRole::Country)?,
            pm25: required(SemanticRole::Pm25)?,
            pm10: required(SemanticRole::Pm10)?,
            year: required(SemanticRole::Year)?,
            latitude: find_first(columns, SemanticRole::Latitude),
            longitude: find_first(columns, SemanticRole::Longitude),
        })
    }

    /// The column backing the currently selected pollutant indicator.
    pub fn indicator(&self, indicator: Indicator) -> &ResolvedColumn {
        match indicator {
            Indicator::Pm25 => &self.pm25,
            Indicator::Pm10 => &self.pm10,
        }
    }

    /// Whether both coordinate columns resolved. Decides, once at startup,
    /// between the point map and the choropleth.
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// First column whose name contains one of the role's candidate substrings,
/// in column iteration order. No further disambiguation.
fn find_first(columns: &[String], role: SemanticRole) -> Option<ResolvedColumn> {
    columns.iter().enumerate().find_map(|(index, name)| {
        role.candidates()
            .iter()
            .any(|candidate| name.contains(candidate))
            .then(|| ResolvedColumn {
                index,
                name: name.clone(),
            })
    })
}
