//! Report filter queries
//!
//! Turns the report list filters (free-text search, year, category) into the
//! query string of `GET /esg/reports/search`.

use serde::{Deserialize, Serialize};

/// Filters applied to the report search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Free-text search
    pub search: String,
    /// Report year; `None` and `Some(0)` both mean "All Years"
    pub year: Option<i32>,
    /// Report category; empty means "All Categories"
    pub category: String,
}

impl ReportQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Year filter with the 0 sentinel folded into `None`
    pub fn effective_year(&self) -> Option<i32> {
        self.year.filter(|y| *y != 0)
    }

    /// True when no filter would be sent
    pub fn is_empty(&self) -> bool {
        self.params().is_empty()
    }

    /// Query parameters in request order: q, year, category
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(3);

        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("q", search.to_string()));
        }
        if let Some(year) = self.effective_year() {
            params.push(("year", year.to_string()));
        }
        let category = self.category.trim();
        if !category.is_empty() {
            params.push(("category", category.to_string()));
        }

        params
    }

    /// Percent-encoded query string without the leading `?`
    pub fn to_query_string(&self) -> String {
        self.params()
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        let query = ReportQuery::new();
        assert!(query.is_empty());
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn test_all_filters_in_order() {
        let query = ReportQuery::new()
            .category("Environmental")
            .year(2024)
            .search("emissions");
        assert_eq!(
            query.to_query_string(),
            "q=emissions&year=2024&category=Environmental"
        );
    }

    #[test]
    fn test_values_are_trimmed_and_encoded() {
        let query = ReportQuery::new()
            .search("  emissions 2024 ")
            .category(" ESRS Compliance ");
        assert_eq!(
            query.to_query_string(),
            "q=emissions%202024&category=ESRS%20Compliance"
        );
    }

    #[test]
    fn test_whitespace_only_filters_are_dropped() {
        let query = ReportQuery::new().search("   ").category("\t");
        assert!(query.is_empty());
    }

    #[test]
    fn test_year_zero_means_all_years() {
        let query = ReportQuery::new().year(0);
        assert_eq!(query.effective_year(), None);
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn test_special_characters() {
        let query = ReportQuery::new().search("R&D / 50%");
        assert_eq!(query.to_query_string(), "q=R%26D%20%2F%2050%25");
    }
}
