//! In-memory ESG backend for orchestration tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

use crate::esg::{CompanyStats, Emission, EsgApi, EsgError, Report, ReportQuery, StatsResponse};

/// Canned answer for one endpoint
#[derive(Debug, Clone)]
pub enum Reply {
    Stats(CompanyStats),
    /// `{ success: false, error }`
    NoData,
    /// HTTP 500 without an envelope
    ServerError,
    /// Connection refused
    Unavailable,
}

impl Reply {
    fn error(&self) -> Option<EsgError> {
        match self {
            Reply::ServerError => Some(EsgError::ApiError {
                status: 500,
                message: "Internal Server Error".to_string(),
            }),
            Reply::Unavailable => Some(EsgError::Unavailable),
            _ => None,
        }
    }
}

pub fn stats(year: i32) -> CompanyStats {
    let offset = (year - 2020) as f64;
    CompanyStats {
        year: Some(year),
        total_emissions: Some(2000.0 - offset * 100.0),
        women_leadership: Some(20.0 + offset * 2.0),
        decarb_electricity: Some(40.0 + offset * 5.0),
        vehicles_recalled: Some(30.0 - offset),
        is_preliminary: year == 2025,
        data_month: (year == 2025).then(|| "June".to_string()),
    }
}

pub fn report(id: i64, title: &str, category: &str, year: i32) -> Report {
    Report {
        id: Some(id.into()),
        title: title.to_string(),
        description: Some(format!("{} for {}", category, year)),
        date: Some(format!("{}-03-31", year)),
        size: Some("2.4 MB".to_string()),
        category: category.to_string(),
        kind: Some("PDF".to_string()),
        year: Some(year),
    }
}

/// Fake backend: every year of 2020-2025 has stats unless overridden
pub struct FakeApi {
    emissions_failure: Mutex<Option<Reply>>,
    reports_failure: Option<Reply>,
    report_list: Vec<Report>,
    stats: HashMap<i32, Reply>,
    search: Option<Reply>,
    pair_barrier: Option<Arc<Barrier>>,
    stats_calls: Mutex<Vec<i32>>,
    search_calls: Mutex<Vec<ReportQuery>>,
}

impl FakeApi {
    pub fn healthy() -> Self {
        Self {
            emissions_failure: Mutex::new(None),
            reports_failure: None,
            report_list: vec![
                report(1, "Annual Report 2024", "Annual Report", 2024),
                report(2, "Diversity & Inclusion Review", "Social", 2023),
                report(3, "Annual Report 2025 (Preliminary)", "Annual Report", 2025),
            ],
            stats: (2020..=2025).map(|y| (y, Reply::Stats(stats(y)))).collect(),
            search: None,
            pair_barrier: None,
            stats_calls: Mutex::new(Vec::new()),
            search_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_emissions(self, reply: Reply) -> Self {
        self.fail_emissions(reply);
        self
    }

    /// Make later emissions requests fail, e.g. between two loads
    pub fn fail_emissions(&self, reply: Reply) {
        *self.emissions_failure.lock().unwrap() = Some(reply);
    }

    pub fn with_reports(mut self, reply: Reply) -> Self {
        self.reports_failure = Some(reply);
        self
    }

    pub fn with_stats(mut self, year: i32, reply: Reply) -> Self {
        self.stats.insert(year, reply);
        self
    }

    pub fn with_search(mut self, reply: Reply) -> Self {
        self.search = Some(reply);
        self
    }

    /// Make emissions and reports each wait for the other to start
    pub fn with_pair_rendezvous(mut self) -> Self {
        self.pair_barrier = Some(Arc::new(Barrier::new(2)));
        self
    }

    pub fn stats_calls(&self) -> Vec<i32> {
        self.stats_calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> Vec<ReportQuery> {
        self.search_calls.lock().unwrap().clone()
    }

    async fn rendezvous(&self) {
        if let Some(barrier) = &self.pair_barrier {
            barrier.wait().await;
        }
    }
}

#[async_trait]
impl EsgApi for FakeApi {
    async fn emissions(&self) -> Result<Vec<Emission>, EsgError> {
        self.rendezvous().await;
        let failure = self.emissions_failure.lock().unwrap().clone();
        if let Some(e) = failure.as_ref().and_then(Reply::error) {
            return Err(e);
        }
        Ok(vec![
            Emission {
                year: Some(2024),
                scope: Some("Scope 1".to_string()),
                value: Some(410.0),
                ..Default::default()
            },
            Emission {
                year: Some(2024),
                scope: Some("Scope 2".to_string()),
                value: Some(220.0),
                ..Default::default()
            },
        ])
    }

    async fn reports(&self) -> Result<Vec<Report>, EsgError> {
        self.rendezvous().await;
        if let Some(e) = self.reports_failure.as_ref().and_then(Reply::error) {
            return Err(e);
        }
        Ok(self.report_list.clone())
    }

    async fn company_stats(&self, year: i32) -> Result<StatsResponse, EsgError> {
        self.stats_calls.lock().unwrap().push(year);

        match self.stats.get(&year) {
            Some(Reply::Stats(stats)) => Ok(StatsResponse {
                success: true,
                data: Some(stats.clone()),
                error: None,
            }),
            Some(reply @ (Reply::ServerError | Reply::Unavailable)) => {
                Err(reply.error().unwrap())
            }
            Some(Reply::NoData) | None => Ok(StatsResponse {
                success: false,
                data: None,
                error: Some(format!("No company stats available for {}", year)),
            }),
        }
    }

    async fn search_reports(&self, query: &ReportQuery) -> Result<Vec<Report>, EsgError> {
        self.search_calls.lock().unwrap().push(query.clone());

        if let Some(e) = self.search.as_ref().and_then(Reply::error) {
            return Err(e);
        }

        let needle = query.search.trim().to_lowercase();
        let category = query.category.trim();
        Ok(self
            .report_list
            .iter()
            .filter(|r| needle.is_empty() || r.title.to_lowercase().contains(&needle))
            .filter(|r| query.effective_year().map_or(true, |y| r.year == Some(y)))
            .filter(|r| category.is_empty() || r.category == category)
            .cloned()
            .collect())
    }
}
