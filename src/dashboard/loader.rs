//! Data Loader
//!
//! Fetch orchestration for the dashboard: the initial load (emissions and
//! reports in parallel, then the yearly stats series one year at a time)
//! and the stats of a single selected year.

use crate::esg::{CompanyStats, EsgApi, EsgError, Emission, Report};

use super::state::YearRange;

/// Everything fetched by the initial load
#[derive(Debug, Clone, Default)]
pub struct InitialData {
    pub emissions: Vec<Emission>,
    pub reports: Vec<Report>,
    pub year_series: Vec<CompanyStats>,
}

/// Result of fetching the stats of one selected year
#[derive(Debug)]
pub enum StatsOutcome {
    /// The backend served stats for the year
    Available(CompanyStats),
    /// The backend answered but has no stats for the year
    NotAvailable(String),
    /// The request itself failed
    Failed(EsgError),
}

/// Run the initial load
///
/// Emissions and reports are requested concurrently and awaited jointly; if
/// either fails the whole load fails and no stats are requested.
pub async fn load_initial<A>(api: &A, years: YearRange) -> Result<InitialData, EsgError>
where
    A: EsgApi + ?Sized,
{
    let (emissions, reports) = tokio::try_join!(api.emissions(), api.reports())?;

    tracing::info!(
        emissions = emissions.len(),
        reports = reports.len(),
        "Loaded emissions and reports"
    );

    let year_series = collect_year_series(api, years).await;

    Ok(InitialData {
        emissions,
        reports,
        year_series,
    })
}

/// Fetch stats for every year of `years`, in ascending order, one request at
/// a time. Years whose request fails or reports no data are skipped.
pub async fn collect_year_series<A>(api: &A, years: YearRange) -> Vec<CompanyStats>
where
    A: EsgApi + ?Sized,
{
    let mut series = Vec::with_capacity(years.len());

    for year in years.years() {
        match api.company_stats(year).await {
            Ok(response) => {
                let reason = response.error.clone();
                match response.into_stats() {
                    Some(mut stats) => {
                        stats.year.get_or_insert(year);
                        series.push(stats);
                    }
                    None => {
                        tracing::warn!(
                            year,
                            reason = reason.as_deref().unwrap_or("no data"),
                            "No stats for year, skipping"
                        );
                    }
                }
            }
            Err(e) => {
                tracing::warn!(year, error = %e, "Could not fetch stats for year, skipping");
            }
        }
    }

    tracing::info!(
        years = years.len(),
        collected = series.len(),
        "Collected yearly stats series"
    );

    series
}

/// Fetch the stats shown on the KPI cards for `year`
pub async fn fetch_selected_stats<A>(api: &A, year: i32) -> StatsOutcome
where
    A: EsgApi + ?Sized,
{
    tracing::debug!(year, "Fetching company stats");

    match api.company_stats(year).await {
        Ok(response) => {
            let reason = response.error.clone();
            match response.into_stats() {
                Some(mut stats) => {
                    stats.year.get_or_insert(year);
                    StatsOutcome::Available(stats)
                }
                None => StatsOutcome::NotAvailable(
                    reason.unwrap_or_else(|| format!("No company stats available for {}", year)),
                ),
            }
        }
        Err(EsgError::ApiError { status, message }) => {
            StatsOutcome::NotAvailable(format!("HTTP {}: {}", status, message))
        }
        Err(e) => StatsOutcome::Failed(e),
    }
}
