//! KPI Cards
//!
//! Headline figures of the selected year.

use std::fmt;

use crate::esg::CompanyStats;

const CARD_WIDTH: usize = 24;

/// One headline figure
struct Card {
    value: String,
    label: &'static str,
}

/// Render a figure the way the cards show it: missing or zero is "0"
pub fn figure(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => format!("{}", v),
        _ => "0".to_string(),
    }
}

/// The four KPI cards of one year
pub struct KpiCards<'a> {
    stats: &'a CompanyStats,
}

impl<'a> KpiCards<'a> {
    pub fn new(stats: &'a CompanyStats) -> Self {
        Self { stats }
    }

    fn cards(&self) -> [Card; 4] {
        [
            Card {
                value: format!("{} Kt CO2e", figure(self.stats.total_emissions)),
                label: "Total GHG Emissions",
            },
            Card {
                value: format!("{}%", figure(self.stats.women_leadership)),
                label: "Women in Leadership",
            },
            Card {
                value: format!("{}%", figure(self.stats.decarb_electricity)),
                label: "Renewable Energy",
            },
            Card {
                value: format!("{}K", figure(self.stats.vehicles_recalled)),
                label: "Vehicles Recalled",
            },
        ]
    }
}

impl fmt::Display for KpiCards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards = self.cards();
        let border = format!("+{}", format!("{}+", "-".repeat(CARD_WIDTH + 2)).repeat(cards.len()));

        writeln!(f, "{}", border)?;
        write!(f, "|")?;
        for card in &cards {
            write!(f, " {:^width$} |", card.value, width = CARD_WIDTH)?;
        }
        writeln!(f)?;
        write!(f, "|")?;
        for card in &cards {
            write!(f, " {:^width$} |", card.label, width = CARD_WIDTH)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", border)
    }
}

/// Badge next to the overview title for preliminary figures
pub fn preliminary_badge(stats: &CompanyStats) -> Option<String> {
    stats.is_preliminary.then(|| {
        let month = stats.data_month.as_deref().unwrap_or("Unknown");
        match stats.year {
            Some(year) => format!("[! Preliminary Data - {} {}]", month, year),
            None => format!("[! Preliminary Data - {}]", month),
        }
    })
}

/// Explanation shown under the cards for preliminary figures
pub struct PreliminaryNotice<'a> {
    stats: &'a CompanyStats,
}

impl<'a> PreliminaryNotice<'a> {
    pub fn new(stats: &'a CompanyStats) -> Self {
        Self { stats }
    }
}

impl fmt::Display for PreliminaryNotice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = self.stats.data_month.as_deref().unwrap_or("Unknown");

        match self.stats.year {
            Some(year) => {
                writeln!(f, "  ! Preliminary {} Data", year)?;
                writeln!(
                    f,
                    "    These figures are preliminary estimates based on data through {} {}.",
                    month, year
                )?;
                writeln!(
                    f,
                    "    Final audited results will be available in March {}.",
                    year + 1
                )
            }
            None => {
                writeln!(f, "  ! Preliminary Data")?;
                writeln!(
                    f,
                    "    These figures are preliminary estimates based on data through {}.",
                    month
                )
            }
        }
    }
}

/// Placeholder for a year without stats
pub struct NotAvailable {
    pub year: i32,
}

impl fmt::Display for NotAvailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  ! Data Not Yet Available")?;
        writeln!(
            f,
            "    ESG performance data for {} is not yet available.",
            self.year
        )?;
        writeln!(f, "    This year's data may still be in preparation.")
    }
}
