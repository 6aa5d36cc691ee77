//! # GreenAuto
//!
//! ESG sustainability dashboard for the fictional GreenAuto S.p.A. A terminal
//! client for the GreenAuto ESG Data API: headline KPIs per year, a
//! multi-year trend chart and a searchable report library.
//!
//! ## Modules
//!
//! - [`esg`]: Typed client for the ESG REST API
//! - [`dashboard`]: View state, fetch orchestration and event handling
//! - [`render`]: Plain-text views of the dashboard state
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: `tracing` subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use greenauto::{render_dashboard, Dashboard, EsgClient, EsgClientConfig, YearRange};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(EsgClient::new(EsgClientConfig::default())?);
//!
//!     let mut dashboard = Dashboard::new(client, YearRange::default(), 2025);
//!     dashboard.start().await;
//!
//!     print!("{}", render_dashboard(dashboard.state()));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dashboard;
pub mod esg;
pub mod logging;
pub mod render;

// Re-export top-level types for convenience
pub use esg::{
    CompanyStats, Emission, EsgApi, EsgClient, EsgClientConfig, EsgError, Report, ReportQuery,
    StatsResponse,
};

pub use dashboard::{ApiStatus, Command, CommandError, Dashboard, DashboardState, Tab, YearRange};

pub use render::{render_dashboard, DashboardView, TrendChart};

pub use config::{Config, ConfigError, LoggingConfig};
