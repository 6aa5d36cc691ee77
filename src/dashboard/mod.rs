//! Dashboard
//!
//! View state, fetch orchestration and event handling for the ESG
//! dashboard.
//!
//! ## Data Flow
//!
//! 1. [`Dashboard::start`] loads emissions and reports in parallel, then the
//!    yearly stats series, then the stats of the selected year
//! 2. UI events ([`Command`]) mutate [`DashboardState`] and re-issue the
//!    requests they depend on
//! 3. The [`render`](crate::render) module turns the state into text

mod command;
mod controller;
mod loader;
mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use command::{Command, CommandError, HELP};
pub use controller::Dashboard;
pub use loader::{collect_year_series, fetch_selected_stats, load_initial, InitialData, StatsOutcome};
pub use state::{ApiStatus, DashboardState, Tab, YearRange, DATA_SOURCE, REPORT_CATEGORIES};
