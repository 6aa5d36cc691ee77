//! ESG REST API Client
//!
//! HTTP client for the four read endpoints of the GreenAuto ESG API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::query::ReportQuery;
use super::types::{Emission, ListResponse, Report, StatsResponse};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:3001/api";

/// Read operations the dashboard needs from the ESG backend
#[async_trait]
pub trait EsgApi: Send + Sync {
    /// `GET /esg/emissions`
    async fn emissions(&self) -> Result<Vec<Emission>, EsgError>;

    /// `GET /esg/reports`
    async fn reports(&self) -> Result<Vec<Report>, EsgError>;

    /// `GET /esg/company-stats/{year}`
    async fn company_stats(&self, year: i32) -> Result<StatsResponse, EsgError>;

    /// `GET /esg/reports/search?q=&year=&category=`
    async fn search_reports(&self, query: &ReportQuery) -> Result<Vec<Report>, EsgError>;
}

/// Configuration for the ESG client
#[derive(Debug, Clone)]
pub struct EsgClientConfig {
    /// Base URL including the `/api` prefix (e.g., "http://localhost:3001/api")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for EsgClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

/// ESG REST API client
pub struct EsgClient {
    client: Client,
    config: EsgClientConfig,
}

impl EsgClient {
    /// Create a new client with the given configuration
    pub fn new(config: EsgClientConfig) -> Result<Self, EsgError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(EsgError::Request)?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &EsgClientConfig {
        &self.config
    }

    /// Absolute URL for an endpoint path
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get(&self, url: &str) -> Result<Response, EsgError> {
        tracing::debug!(url = %url, "GET");
        self.client.get(url).send().await.map_err(classify)
    }

    /// GET a `{ data: T[] }` endpoint
    async fn get_list<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, EsgError> {
        let response = self.get(url).await?;
        let status = response.status();
        let body = response.text().await.map_err(classify)?;

        if !status.is_success() {
            return Err(EsgError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let envelope: ListResponse<T> =
            serde_json::from_str(&body).map_err(|e| EsgError::Decode(e.to_string()))?;
        Ok(envelope.into_items())
    }
}

#[async_trait]
impl EsgApi for EsgClient {
    async fn emissions(&self) -> Result<Vec<Emission>, EsgError> {
        self.get_list(&self.url("esg/emissions")).await
    }

    async fn reports(&self) -> Result<Vec<Report>, EsgError> {
        self.get_list(&self.url("esg/reports")).await
    }

    async fn company_stats(&self, year: i32) -> Result<StatsResponse, EsgError> {
        let url = self.url(&format!("esg/company-stats/{}", year));
        let response = self.get(&url).await?;
        let status = response.status();
        let body = response.text().await.map_err(classify)?;

        let parsed = serde_json::from_str::<StatsResponse>(&body);

        if status.is_success() {
            return parsed.map_err(|e| EsgError::Decode(e.to_string()));
        }

        // An error status with a stats envelope still tells us why there is no data
        match parsed {
            Ok(envelope) => Ok(StatsResponse {
                success: false,
                data: None,
                error: envelope
                    .error
                    .or_else(|| Some(format!("HTTP {}", status.as_u16()))),
            }),
            Err(_) => Err(EsgError::ApiError {
                status: status.as_u16(),
                message: body,
            }),
        }
    }

    async fn search_reports(&self, query: &ReportQuery) -> Result<Vec<Report>, EsgError> {
        let url = format!("{}?{}", self.url("esg/reports/search"), query.to_query_string());
        self.get_list(&url).await
    }
}

fn classify(e: reqwest::Error) -> EsgError {
    if e.is_timeout() {
        EsgError::Timeout
    } else if e.is_connect() {
        EsgError::Unavailable
    } else {
        EsgError::Request(e)
    }
}

// ============================================
// Errors
// ============================================

/// Errors that can occur when talking to the ESG API
#[derive(Error, Debug)]
pub enum EsgError {
    #[error("ESG API unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse server response: {0}")]
    Decode(String),

    #[error("Request timeout")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EsgClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3001/api");
        assert_eq!(config.request_timeout_ms, 10_000);
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = EsgClient::new(EsgClientConfig {
            base_url: "http://esg.local/api/".to_string(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            client.url("esg/company-stats/2023"),
            "http://esg.local/api/esg/company-stats/2023"
        );
    }
}
