//! ESG API data transfer types
//!
//! Shapes received from the ESG REST API. Nothing here is owned or
//! mutated locally; every fetch replaces these wholesale.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An emissions record
///
/// The backend decides the full shape; the commonly used fields are typed
/// and everything else is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Emission {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A published ESG report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Backend identifier, either a number or a string
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

impl Report {
    /// File type label, "PDF" when the backend does not say
    pub fn kind_label(&self) -> &str {
        self.kind.as_deref().filter(|k| !k.is_empty()).unwrap_or("PDF")
    }

    /// Whether this is the annual report for `year`
    pub fn is_annual_for(&self, year: i32) -> bool {
        self.year == Some(year)
            && (self.category == "Annual Report" || self.title.to_lowercase().contains("annual"))
    }
}

/// Headline company figures for one year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyStats {
    #[serde(default)]
    pub year: Option<i32>,
    /// Total GHG emissions in Kt CO2e
    #[serde(default)]
    pub total_emissions: Option<f64>,
    /// Share of women in leadership positions (%)
    #[serde(default)]
    pub women_leadership: Option<f64>,
    /// Share of decarbonized electricity (%)
    #[serde(default)]
    pub decarb_electricity: Option<f64>,
    /// Vehicles recalled, in thousands
    #[serde(default)]
    pub vehicles_recalled: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_preliminary: bool,
    /// Last month covered by preliminary data
    #[serde(default)]
    pub data_month: Option<String>,
}

/// `{ data: T[] }` envelope used by the list endpoints
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Option::default")]
    pub data: Option<Vec<T>>,
}

impl<T> ListResponse<T> {
    /// Items of the envelope; a missing or null `data` is an empty list
    pub fn into_items(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

/// `{ success, data?, error? }` envelope of the company stats endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default)]
    pub data: Option<CompanyStats>,
    #[serde(default)]
    pub error: Option<String>,
}

impl StatsResponse {
    /// The stats when the backend reported success with a payload
    pub fn into_stats(self) -> Option<CompanyStats> {
        if self.success {
            self.data
        } else {
            None
        }
    }
}
