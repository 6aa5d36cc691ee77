//! Dashboard State
//!
//! Everything the presentation layer renders from. Owned by the
//! [`Dashboard`](super::Dashboard) controller and replaced piecewise as
//! fetches complete.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use crate::esg::{CompanyStats, Emission, Report, ReportQuery};

/// Name shown as the data source once the initial load succeeds
pub const DATA_SOURCE: &str = "GreenAuto ESG Data API";

/// Connectivity of the ESG backend as seen by the last initial load
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ApiStatus {
    #[default]
    Connecting,
    Live {
        last_updated: DateTime<Utc>,
        source: String,
    },
    Offline {
        error: String,
    },
}

impl ApiStatus {
    pub fn is_live(&self) -> bool {
        matches!(self, ApiStatus::Live { .. })
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, ApiStatus::Offline { .. })
    }
}

/// Top-level dashboard tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Reports,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Overview, Tab::Reports];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Reports => "Reports",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overview" => Ok(Tab::Overview),
            "reports" => Ok(Tab::Reports),
            other => Err(format!("Unknown tab: {}", other)),
        }
    }
}

/// Inclusive range of years covered by the trend series and year selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub first: i32,
    pub last: i32,
}

impl YearRange {
    pub fn new(first: i32, last: i32) -> Self {
        Self { first, last }
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.first..=self.last).contains(&year)
    }

    /// Years in ascending order
    pub fn years(&self) -> impl DoubleEndedIterator<Item = i32> {
        self.first..=self.last
    }

    /// Number of years in the range
    pub fn len(&self) -> usize {
        (self.last - self.first + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::new(2020, 2025)
    }
}

/// Categories offered by the report category filter
pub const REPORT_CATEGORIES: [&str; 6] = [
    "Annual Report",
    "Environmental",
    "Social",
    "Governance",
    "Quarterly",
    "ESRS Compliance",
];

/// View state of the dashboard
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub emissions: Vec<Emission>,
    pub reports: Vec<Report>,
    /// Stats of the selected year; `None` when the year has no data
    pub company_stats: Option<CompanyStats>,
    /// Stats of every year in `years` that the backend could serve, ascending
    pub year_series: Vec<CompanyStats>,
    /// Result of the last report search
    pub filtered_reports: Vec<Report>,
    pub loading: bool,
    pub api_status: ApiStatus,
    pub active_tab: Tab,
    pub selected_year: i32,
    pub filters: ReportQuery,
    pub show_disclaimer: bool,
    pub years: YearRange,
}

impl DashboardState {
    pub fn new(years: YearRange, selected_year: i32) -> Self {
        Self {
            emissions: Vec::new(),
            reports: Vec::new(),
            company_stats: None,
            year_series: Vec::new(),
            filtered_reports: Vec::new(),
            loading: true,
            api_status: ApiStatus::Connecting,
            active_tab: Tab::Overview,
            selected_year,
            filters: ReportQuery::default(),
            show_disclaimer: true,
            years,
        }
    }

    /// Annual report of the selected year, if one was listed
    pub fn featured_report(&self) -> Option<&Report> {
        self.reports
            .iter()
            .find(|report| report.is_annual_for(self.selected_year))
    }

    /// Whether the trend chart has something to show
    pub fn show_trends(&self) -> bool {
        self.company_stats.is_some() && !self.year_series.is_empty()
    }

    /// Report shown at 1-based position `index` of the filtered list
    pub fn filtered_report(&self, index: usize) -> Option<&Report> {
        index
            .checked_sub(1)
            .and_then(|i| self.filtered_reports.get(i))
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        let years = YearRange::default();
        Self::new(years, years.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(title: &str, category: &str, year: i32) -> Report {
        Report {
            title: title.to_string(),
            category: category.to_string(),
            year: Some(year),
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let state = DashboardState::default();
        assert!(state.loading);
        assert_eq!(state.api_status, ApiStatus::Connecting);
        assert_eq!(state.active_tab, Tab::Overview);
        assert_eq!(state.selected_year, 2025);
        assert!(state.show_disclaimer);
        assert!(!state.show_trends());
    }

    #[test]
    fn test_year_range() {
        let range = YearRange::default();
        assert_eq!(range.years().collect::<Vec<_>>(), vec![2020, 2021, 2022, 2023, 2024, 2025]);
        assert_eq!(range.len(), 6);
        assert!(range.contains(2020));
        assert!(!range.contains(2026));
        assert!(YearRange::new(2025, 2020).is_empty());
    }

    #[test]
    fn test_tab_from_str() {
        assert_eq!("Reports".parse::<Tab>(), Ok(Tab::Reports));
        assert_eq!(" overview ".parse::<Tab>(), Ok(Tab::Overview));
        assert!("settings".parse::<Tab>().is_err());
    }

    #[test]
    fn test_featured_report_prefers_first_annual_match() {
        let mut state = DashboardState::default();
        state.selected_year = 2024;
        state.reports = vec![
            report("Q3 Update", "Quarterly", 2024),
            report("Annual Report 2023", "Annual Report", 2023),
            report("Integrated Annual Review", "Governance", 2024),
            report("Annual Report 2024", "Annual Report", 2024),
        ];

        let featured = state.featured_report().unwrap();
        assert_eq!(featured.title, "Integrated Annual Review");
    }

    #[test]
    fn test_featured_report_missing() {
        let mut state = DashboardState::default();
        state.selected_year = 2021;
        state.reports = vec![report("Annual Report 2024", "Annual Report", 2024)];
        assert!(state.featured_report().is_none());
    }

    #[test]
    fn test_filtered_report_is_one_based() {
        let mut state = DashboardState::default();
        state.filtered_reports = vec![report("First", "Social", 2022)];
        assert!(state.filtered_report(0).is_none());
        assert_eq!(state.filtered_report(1).unwrap().title, "First");
        assert!(state.filtered_report(2).is_none());
    }
}
