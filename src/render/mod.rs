//! Presentation
//!
//! Plain-text rendering of [`DashboardState`]. Every view is a `Display`
//! wrapper around borrowed state; nothing here fetches or mutates.

mod cards;
mod chart;
mod notices;
mod reports;

pub use cards::{figure, preliminary_badge, KpiCards, NotAvailable, PreliminaryNotice};
pub use chart::{Axis, Line, TrendChart, DEFAULT_HEIGHT, DEFAULT_WIDTH, LINES};
pub use notices::{download_notice, DISCLAIMER};
pub use reports::{api_indicator, FeaturedReport, FilterBar, ReportEntry, ReportList};

use std::fmt;

use crate::dashboard::{ApiStatus, DashboardState, Tab};

const RULE_WIDTH: usize = 72;

/// Live-data indicator shown on the overview tab
pub fn live_indicator(status: &ApiStatus) -> &'static str {
    match status {
        ApiStatus::Live { .. } => "(*) Live Data Connected",
        ApiStatus::Connecting => "( ) Live Data Syncing...",
        ApiStatus::Offline { .. } => "(!) Live Data Offline",
    }
}

/// Overview tab body
pub struct Overview<'a> {
    state: &'a DashboardState,
    chart_size: (usize, usize),
}

impl<'a> Overview<'a> {
    pub fn new(state: &'a DashboardState) -> Self {
        Self {
            state,
            chart_size: (DEFAULT_WIDTH, DEFAULT_HEIGHT),
        }
    }

    pub fn chart_size(mut self, width: usize, height: usize) -> Self {
        self.chart_size = (width, height);
        self
    }
}

impl fmt::Display for Overview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        let years = state.years;

        writeln!(
            f,
            "Report Year: [{}]  ({}-{})    {}",
            state.selected_year,
            years.first,
            years.last,
            live_indicator(&state.api_status)
        )?;
        writeln!(f)?;

        if state.loading {
            return writeln!(f, "  Loading ESG data...");
        }

        let badge = state
            .company_stats
            .as_ref()
            .and_then(preliminary_badge)
            .unwrap_or_default();
        writeln!(f, "ESG Performance {}    {}", state.selected_year, badge)?;

        match &state.company_stats {
            Some(stats) => {
                write!(f, "{}", KpiCards::new(stats))?;
                if stats.is_preliminary {
                    write!(f, "{}", PreliminaryNotice::new(stats))?;
                }
            }
            None => write!(
                f,
                "{}",
                NotAvailable {
                    year: state.selected_year
                }
            )?,
        }
        writeln!(f)?;

        if state.show_trends() {
            writeln!(f, "ESG Performance Trends ({}-{})", years.first, years.last)?;
            let (width, height) = self.chart_size;
            write!(
                f,
                "{}",
                TrendChart::new(&state.year_series, years).size(width, height)
            )?;
            writeln!(f)?;
        }

        write!(f, "{}", FeaturedReport::new(state))
    }
}

/// Whole dashboard screen
pub struct DashboardView<'a> {
    state: &'a DashboardState,
    chart_size: (usize, usize),
}

impl<'a> DashboardView<'a> {
    pub fn new(state: &'a DashboardState) -> Self {
        Self {
            state,
            chart_size: (DEFAULT_WIDTH, DEFAULT_HEIGHT),
        }
    }

    pub fn chart_size(mut self, width: usize, height: usize) -> Self {
        self.chart_size = (width, height);
        self
    }
}

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;

        if state.show_disclaimer {
            writeln!(f, "{}", DISCLAIMER)?;
        }

        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{}", rule)?;
        writeln!(f, " GreenAuto S.p.A. | ESG Sustainability Reports")?;
        writeln!(f, "{}", rule)?;

        let tabs: Vec<String> = Tab::ALL
            .iter()
            .map(|tab| {
                if *tab == state.active_tab {
                    format!("[{}]", tab.label())
                } else {
                    format!(" {} ", tab.label())
                }
            })
            .collect();
        writeln!(f, " {}", tabs.join("  "))?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(f)?;

        match state.active_tab {
            Tab::Overview => {
                let (width, height) = self.chart_size;
                write!(f, "{}", Overview::new(state).chart_size(width, height))?;
            }
            Tab::Reports => write!(f, "{}", ReportList::new(state))?,
        }

        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(f, " (c) 2024 GreenAuto S.p.A. (Fictional Company)")
    }
}

/// Render the whole dashboard with the default chart size
pub fn render_dashboard(state: &DashboardState) -> String {
    DashboardView::new(state).to_string()
}
