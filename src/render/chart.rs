//! Trend Chart
//!
//! Multi-series line chart of the yearly stats, drawn on a character grid.
//! Emissions use the left axis (Kt CO2e); the three percentage-like series
//! share the right axis.

use std::fmt;

use crate::dashboard::YearRange;
use crate::esg::CompanyStats;

use super::cards::figure;

pub const DEFAULT_WIDTH: usize = 60;
pub const DEFAULT_HEIGHT: usize = 12;
const MIN_WIDTH: usize = 12;
const MIN_HEIGHT: usize = 5;
const LABEL_WIDTH: usize = 8;

const EMPTY: char = ' ';
const TRACE: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Left,
    Right,
}

/// One plotted line
pub struct Line {
    pub name: &'static str,
    pub glyph: char,
    pub axis: Axis,
    value: fn(&CompanyStats) -> Option<f64>,
    /// Tooltip-style value format
    format: fn(&str) -> String,
}

impl Line {
    pub fn value(&self, stats: &CompanyStats) -> Option<f64> {
        (self.value)(stats)
    }

    pub fn format(&self, stats: &CompanyStats) -> String {
        match self.value(stats) {
            Some(v) => (self.format)(&figure(Some(v))),
            None => "-".to_string(),
        }
    }
}

fn total_emissions(s: &CompanyStats) -> Option<f64> {
    s.total_emissions
}

fn women_leadership(s: &CompanyStats) -> Option<f64> {
    s.women_leadership
}

fn decarb_electricity(s: &CompanyStats) -> Option<f64> {
    s.decarb_electricity
}

fn vehicles_recalled(s: &CompanyStats) -> Option<f64> {
    s.vehicles_recalled
}

fn kt_co2e(v: &str) -> String {
    format!("{} Kt CO2e", v)
}

fn k_units(v: &str) -> String {
    format!("{} K units", v)
}

fn percent(v: &str) -> String {
    format!("{}%", v)
}

/// Lines of the trend chart, in legend order
pub static LINES: [Line; 4] = [
    Line {
        name: "GHG Emissions",
        glyph: '*',
        axis: Axis::Left,
        value: total_emissions,
        format: kt_co2e,
    },
    Line {
        name: "Women in Leadership",
        glyph: 'o',
        axis: Axis::Right,
        value: women_leadership,
        format: percent,
    },
    Line {
        name: "Renewable Energy",
        glyph: '+',
        axis: Axis::Right,
        value: decarb_electricity,
        format: percent,
    },
    Line {
        name: "Vehicle Recalls",
        glyph: 'x',
        axis: Axis::Right,
        value: vehicles_recalled,
        format: k_units,
    },
];

/// Round up to 1, 2 or 5 times a power of ten
fn nice_ceiling(value: f64) -> f64 {
    if value <= 0.0 || !value.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powi(value.log10().floor() as i32);
    let fraction = value / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Line chart over a fixed year range
pub struct TrendChart<'a> {
    series: &'a [CompanyStats],
    years: YearRange,
    width: usize,
    height: usize,
}

impl<'a> TrendChart<'a> {
    pub fn new(series: &'a [CompanyStats], years: YearRange) -> Self {
        Self {
            series,
            years,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Plot area size in characters
    pub fn size(mut self, width: usize, height: usize) -> Self {
        self.width = width.max(MIN_WIDTH);
        self.height = height.max(MIN_HEIGHT);
        self
    }

    /// Axis domain: zero up to a rounded maximum
    fn domain(&self, axis: Axis) -> (f64, f64) {
        let max = LINES
            .iter()
            .filter(|line| line.axis == axis)
            .flat_map(|line| self.series.iter().filter_map(move |s| line.value(s)))
            .fold(f64::NEG_INFINITY, f64::max);

        (0.0, nice_ceiling(max))
    }

    fn column(&self, year: i32) -> usize {
        let span = (self.years.last - self.years.first) as f64;
        if span <= 0.0 {
            return self.width / 2;
        }
        let position = ((year - self.years.first) as f64 / span).clamp(0.0, 1.0);
        (position * (self.width - 1) as f64).round() as usize
    }

    fn row(&self, value: f64, (low, high): (f64, f64)) -> usize {
        let ratio = ((value - low) / (high - low)).clamp(0.0, 1.0);
        ((1.0 - ratio) * (self.height - 1) as f64).round() as usize
    }

    /// (column, row) of each plotted point of `line`
    fn points(&self, line: &Line) -> Vec<(usize, usize)> {
        let domain = self.domain(line.axis);
        self.series
            .iter()
            .filter_map(|s| {
                let year = s.year?;
                let value = line.value(s)?;
                Some((self.column(year), self.row(value, domain)))
            })
            .collect()
    }

    /// Plot area as a character grid, row 0 at the top
    fn plot(&self) -> Vec<Vec<char>> {
        let mut grid = vec![vec![EMPTY; self.width]; self.height];
        let plotted: Vec<_> = LINES.iter().map(|line| (line, self.points(line))).collect();

        // Traces first so points always win
        for (_, points) in &plotted {
            for pair in points.windows(2) {
                let ((c0, r0), (c1, r1)) = (pair[0], pair[1]);
                if c1 <= c0 {
                    continue;
                }
                for c in c0 + 1..c1 {
                    let t = (c - c0) as f64 / (c1 - c0) as f64;
                    let r = (r0 as f64 + (r1 as f64 - r0 as f64) * t).round() as usize;
                    if grid[r][c] == EMPTY {
                        grid[r][c] = TRACE;
                    }
                }
            }
        }

        for (line, points) in &plotted {
            for &(c, r) in points {
                grid[r][c] = line.glyph;
            }
        }

        grid
    }

    fn axis_label(&self, row: usize, (low, high): (f64, f64)) -> String {
        let last = self.height - 1;
        if row == 0 {
            format!("{:.0}", high)
        } else if row == last {
            format!("{:.0}", low)
        } else if row == last / 2 {
            let value = high - (row as f64 / last as f64) * (high - low);
            format!("{:.0}", value)
        } else {
            String::new()
        }
    }

    fn year_labels(&self) -> String {
        let mut labels = vec![EMPTY; self.width + 4];
        let mut next_free = 0;
        for year in self.years.years() {
            let text = year.to_string();
            let start = self.column(year).saturating_sub(text.len() / 2);
            // Crowded axes only label every other year or so
            if start < next_free {
                continue;
            }
            next_free = start + text.len() + 1;
            for (i, ch) in text.chars().enumerate() {
                if let Some(slot) = labels.get_mut(start + i) {
                    *slot = ch;
                }
            }
        }
        labels.into_iter().collect::<String>().trim_end().to_string()
    }
}

impl fmt::Display for TrendChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.series.is_empty() {
            return writeln!(f, "  No trend data");
        }

        let left = self.domain(Axis::Left);
        let right = self.domain(Axis::Right);

        writeln!(
            f,
            "{:>width$}  Emissions (Kt CO2e) | Percentage (%)",
            "",
            width = LABEL_WIDTH
        )?;

        for (i, row) in self.plot().iter().enumerate() {
            writeln!(
                f,
                "{:>width$} |{}| {}",
                self.axis_label(i, left),
                row.iter().collect::<String>(),
                self.axis_label(i, right),
                width = LABEL_WIDTH
            )?;
        }

        writeln!(
            f,
            "{:>width$} +{}+",
            "",
            "-".repeat(self.width),
            width = LABEL_WIDTH
        )?;
        writeln!(f, "{:>width$}  {}", "", self.year_labels(), width = LABEL_WIDTH)?;
        writeln!(f)?;

        for line in &LINES {
            let side = match line.axis {
                Axis::Left => "left",
                Axis::Right => "right",
            };
            writeln!(f, "  {} {} ({} axis)", line.glyph, line.name, side)?;
        }
        writeln!(f)?;

        write!(f, "  {:<6}", "Year")?;
        for line in &LINES {
            write!(f, " {:<20}", line.name)?;
        }
        writeln!(f)?;
        for stats in self.series {
            let year = stats.year.map(|y| y.to_string()).unwrap_or_default();
            write!(f, "  {:<6}", year)?;
            for line in &LINES {
                write!(f, " {:<20}", line.format(stats))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
