//! ESG API
//!
//! Everything the dashboard knows about the GreenAuto ESG backend.
//!
//! ## Endpoints
//!
//! - `GET /api/esg/emissions` → `{ data: Emission[] }`
//! - `GET /api/esg/reports` → `{ data: Report[] }`
//! - `GET /api/esg/company-stats/{year}` → `{ success, data?, error? }`
//! - `GET /api/esg/reports/search?q=&year=&category=` → `{ data: Report[] }`

mod client;
mod query;
mod types;

pub use client::{EsgApi, EsgClient, EsgClientConfig, EsgError, DEFAULT_API_BASE};
pub use query::ReportQuery;
pub use types::{CompanyStats, Emission, ListResponse, Report, StatsResponse};
