//! Dashboard Controller
//!
//! Applies UI events to [`DashboardState`] and issues the requests each
//! event depends on:
//!
//! | Event                        | Request                                  |
//! |------------------------------|------------------------------------------|
//! | start / refresh              | initial load, then selected-year stats   |
//! | select year                  | stats for the new year                   |
//! | switch to Reports            | report search with current filters       |
//! | search / year / category     | report search, when Reports is active    |

use chrono::Utc;
use std::sync::Arc;

use crate::esg::{EsgApi, Report};

use super::loader::{fetch_selected_stats, load_initial, StatsOutcome};
use super::state::{ApiStatus, DashboardState, Tab, YearRange, DATA_SOURCE};

/// Dashboard session bound to one ESG backend
pub struct Dashboard<A: EsgApi + ?Sized> {
    api: Arc<A>,
    state: DashboardState,
}

impl<A: EsgApi + ?Sized> Dashboard<A> {
    /// Create a dashboard showing `selected_year` out of `years`
    pub fn new(api: Arc<A>, years: YearRange, selected_year: i32) -> Self {
        Self {
            api,
            state: DashboardState::new(years, selected_year),
        }
    }

    /// Current view state
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Initial load followed by the stats of the selected year
    pub async fn start(&mut self) {
        self.load_all().await;
        self.load_selected_stats().await;
    }

    /// Re-run the initial load, then refresh whatever the active tab shows
    pub async fn refresh(&mut self) {
        self.start().await;
        if self.state.active_tab == Tab::Reports {
            self.refresh_reports().await;
        }
    }

    async fn load_all(&mut self) {
        self.state.loading = true;

        match load_initial(self.api.as_ref(), self.state.years).await {
            Ok(data) => {
                self.state.emissions = data.emissions;
                self.state.reports = data.reports;
                self.state.year_series = data.year_series;
                self.state.api_status = ApiStatus::Live {
                    last_updated: Utc::now(),
                    source: DATA_SOURCE.to_string(),
                };
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching ESG data");
                self.state.api_status = ApiStatus::Offline {
                    error: e.to_string(),
                };
            }
        }

        self.state.loading = false;
    }

    async fn load_selected_stats(&mut self) {
        let year = self.state.selected_year;

        match fetch_selected_stats(self.api.as_ref(), year).await {
            StatsOutcome::Available(stats) => {
                self.state.company_stats = Some(stats);
            }
            StatsOutcome::NotAvailable(reason) => {
                tracing::info!(year, reason = %reason, "No company stats available");
                self.state.company_stats = None;
            }
            StatsOutcome::Failed(e) => {
                tracing::error!(year, error = %e, "Error fetching company stats");
            }
        }
    }

    /// Select the year shown on the overview and fetch its stats
    pub async fn select_year(&mut self, year: i32) {
        self.state.selected_year = year;
        self.load_selected_stats().await;
    }

    /// Switch tabs; entering Reports runs the search
    pub async fn set_tab(&mut self, tab: Tab) {
        self.state.active_tab = tab;
        if tab == Tab::Reports {
            self.refresh_reports().await;
        }
    }

    /// Change the free-text report search
    pub async fn set_search(&mut self, search: impl Into<String>) {
        self.state.filters.search = search.into();
        self.filters_changed().await;
    }

    /// Change the report year filter; `None` means all years
    pub async fn set_report_year(&mut self, year: Option<i32>) {
        self.state.filters.year = year;
        self.filters_changed().await;
    }

    /// Change the report category filter; empty means all categories
    pub async fn set_category(&mut self, category: impl Into<String>) {
        self.state.filters.category = category.into();
        self.filters_changed().await;
    }

    async fn filters_changed(&mut self) {
        if self.state.active_tab == Tab::Reports {
            self.refresh_reports().await;
        }
    }

    /// Run the report search with the current filters
    pub async fn refresh_reports(&mut self) {
        match self.api.search_reports(&self.state.filters).await {
            Ok(reports) => {
                tracing::debug!(count = reports.len(), "Report search finished");
                self.state.filtered_reports = reports;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching filtered reports");
                self.state.filtered_reports.clear();
            }
        }
    }

    /// Hide the disclaimer
    pub fn dismiss_disclaimer(&mut self) {
        self.state.show_disclaimer = false;
    }

    /// Report at 1-based position `index` of the active tab's list
    ///
    /// On the overview tab only the featured report (index 1) is listed.
    pub fn report_at(&self, index: usize) -> Option<&Report> {
        match self.state.active_tab {
            Tab::Reports => self.state.filtered_report(index),
            Tab::Overview => (index == 1).then(|| self.state.featured_report()).flatten(),
        }
    }
}
