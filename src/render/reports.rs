//! Report Views
//!
//! Filter bar, searchable report list and the featured annual report.

use std::fmt;

use crate::dashboard::{ApiStatus, DashboardState, YearRange, REPORT_CATEGORIES};
use crate::esg::{Report, ReportQuery};

const SEARCH_PLACEHOLDER: &str = "Search reports... (e.g., 'emissions 2024', 'diversity')";

/// One report entry, optionally numbered for `download <n>`
pub struct ReportEntry<'a> {
    report: &'a Report,
    index: Option<usize>,
    fallback_description: Option<String>,
}

impl<'a> ReportEntry<'a> {
    pub fn new(report: &'a Report) -> Self {
        Self {
            report,
            index: None,
            fallback_description: None,
        }
    }

    pub fn numbered(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Description used when the report has none
    pub fn fallback_description(mut self, description: String) -> Self {
        self.fallback_description = Some(description);
        self
    }
}

impl fmt::Display for ReportEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let number = self
            .index
            .map(|i| format!("{:>2}.", i))
            .unwrap_or_else(|| "   ".to_string());

        writeln!(f, "{} {}  [{}]", number, report.title, report.kind_label())?;

        let description = report
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .or_else(|| self.fallback_description.clone());
        if let Some(description) = description {
            writeln!(f, "    {}", description)?;
        }

        let mut details = Vec::with_capacity(4);
        if let Some(date) = &report.date {
            details.push(format!("Date: {}", date));
        }
        if let Some(size) = &report.size {
            details.push(format!("Size: {}", size));
        }
        if let Some(year) = report.year {
            details.push(format!("Year: {}", year));
        }
        details.push(format!("Category: {}", report.category));
        writeln!(f, "    {}", details.join(" | "))
    }
}

/// API indicator shown on the reports tab
pub fn api_indicator(status: &ApiStatus) -> &'static str {
    match status {
        ApiStatus::Live { .. } => "(*) API Connected",
        ApiStatus::Connecting => "( ) API Connecting...",
        ApiStatus::Offline { .. } => "(!) API Offline",
    }
}

/// Search box and year/category selectors with their options
pub struct FilterBar<'a> {
    filters: &'a ReportQuery,
    status: &'a ApiStatus,
    years: YearRange,
}

impl<'a> FilterBar<'a> {
    pub fn new(filters: &'a ReportQuery, status: &'a ApiStatus, years: YearRange) -> Self {
        Self {
            filters,
            status,
            years,
        }
    }
}

impl fmt::Display for FilterBar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.filters.search.is_empty() {
            writeln!(f, "Search: [{}]", SEARCH_PLACEHOLDER)?;
        } else {
            writeln!(f, "Search: [{}]", self.filters.search)?;
        }

        let year = self
            .filters
            .effective_year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "All Years".to_string());
        let category = match self.filters.category.trim() {
            "" => "All Categories",
            category => category,
        };

        writeln!(
            f,
            "Year: {:<10}  Category: {:<20}  {}",
            year,
            category,
            api_indicator(self.status)
        )?;

        let years: Vec<String> = self.years.years().rev().map(|y| y.to_string()).collect();
        writeln!(f, "  report-year: all | {}", years.join(" | "))?;
        writeln!(f, "  category:    all | {}", REPORT_CATEGORIES.join(" | "))
    }
}

/// Reports tab body
pub struct ReportList<'a> {
    state: &'a DashboardState,
}

impl<'a> ReportList<'a> {
    pub fn new(state: &'a DashboardState) -> Self {
        Self { state }
    }
}

impl fmt::Display for ReportList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;

        write!(
            f,
            "{}",
            FilterBar::new(&state.filters, &state.api_status, state.years)
        )?;
        writeln!(f)?;
        writeln!(f, "ESG Reports")?;
        writeln!(f, "-----------")?;

        if state.loading {
            return writeln!(f, "  Loading reports...");
        }

        if state.filtered_reports.is_empty() {
            writeln!(f, "  ! No Reports Found")?;
            return if state.filters.search.is_empty() {
                writeln!(f, "    No reports available for the selected criteria")
            } else {
                writeln!(f, "    No reports found matching \"{}\"", state.filters.search)
            };
        }

        for (i, report) in state.filtered_reports.iter().enumerate() {
            write!(f, "{}", ReportEntry::new(report).numbered(i + 1))?;
        }
        Ok(())
    }
}

/// Featured annual report of the selected year
pub struct FeaturedReport<'a> {
    state: &'a DashboardState,
}

impl<'a> FeaturedReport<'a> {
    pub fn new(state: &'a DashboardState) -> Self {
        Self { state }
    }
}

impl fmt::Display for FeaturedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.state.selected_year;
        writeln!(f, "Featured Report {}", year)?;

        match self.state.featured_report() {
            Some(report) => {
                let fallback = format!(
                    "Complete sustainability report including environmental impact, \
                     social responsibility, and governance metrics for {}",
                    year
                );
                write!(
                    f,
                    "{}",
                    ReportEntry::new(report)
                        .numbered(1)
                        .fallback_description(fallback)
                )
            }
            None => {
                writeln!(f, "  ! Report Not Found")?;
                writeln!(
                    f,
                    "    No annual report available for {}. The report may still be in \
                     preparation or not yet published.",
                    year
                )?;
                writeln!(
                    f,
                    "    Check back later or contact our ESG team for more information."
                )
            }
        }
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
            date: Some(format!("{}-03-31", year)),
            size: Some("3.1 MB".to_string()),
            ..Default::default()
        }
    }

    fn loaded_state() -> DashboardState {
        let mut state = DashboardState::default();
        state.loading = false;
        state
    }

    #[test]
    fn test_entry_details() {
        let report = report("Annual Report 2024", "Annual Report", 2024);
        let text = ReportEntry::new(&report).numbered(3).to_string();

        assert!(text.starts_with(" 3. Annual Report 2024  [PDF]"));
        assert!(text.contains("Date: 2024-03-31 | Size: 3.1 MB | Year: 2024 | Category: Annual Report"));
    }

    #[test]
    fn test_filter_bar_defaults() {
        let text = FilterBar::new(
            &ReportQuery::default(),
            &ApiStatus::Connecting,
            YearRange::default(),
        )
        .to_string();
        assert!(text.contains(SEARCH_PLACEHOLDER));
        assert!(text.contains("All Years"));
        assert!(text.contains("All Categories"));
        assert!(text.contains("API Connecting..."));
    }

    #[test]
    fn test_filter_bar_lists_options() {
        let filters = ReportQuery::new().category("Quarterly");
        let text = FilterBar::new(&filters, &ApiStatus::Connecting, YearRange::new(2022, 2024))
            .to_string();

        assert!(text.contains("Category: Quarterly"));
        assert!(text.contains("report-year: all | 2024 | 2023 | 2022\n"));
        for category in REPORT_CATEGORIES {
            assert!(text.contains(category), "missing category option {}", category);
        }
        assert!(text.contains("ESRS Compliance"));
    }

    #[test]
    fn test_list_empty_messages() {
        let mut state = loaded_state();
        let text = ReportList::new(&state).to_string();
        assert!(text.contains("No reports available for the selected criteria"));

        state.filters.search = "hydrogen".to_string();
        let text = ReportList::new(&state).to_string();
        assert!(text.contains("No reports found matching \"hydrogen\""));
    }

    #[test]
    fn test_list_numbers_reports() {
        let mut state = loaded_state();
        state.filtered_reports = vec![
            report("Climate Transition Plan", "Environmental", 2023),
            report("Board Diversity Policy", "Governance", 2022),
        ];

        let text = ReportList::new(&state).to_string();
        assert!(text.contains(" 1. Climate Transition Plan"));
        assert!(text.contains(" 2. Board Diversity Policy"));
    }

    #[test]
    fn test_list_while_loading() {
        let state = DashboardState::default();
        assert!(ReportList::new(&state).to_string().contains("Loading reports..."));
    }

    #[test]
    fn test_featured_report_uses_fallback_description() {
        let mut state = loaded_state();
        state.selected_year = 2024;
        state.reports = vec![report("Annual Report 2024", "Annual Report", 2024)];

        let text = FeaturedReport::new(&state).to_string();
        assert!(text.contains("Featured Report 2024"));
        assert!(text.contains("governance metrics for 2024"));
    }

    #[test]
    fn test_featured_report_not_found() {
        let mut state = loaded_state();
        state.selected_year = 2020;

        let text = FeaturedReport::new(&state).to_string();
        assert!(text.contains("Report Not Found"));
        assert!(text.contains("No annual report available for 2020."));
    }
}
