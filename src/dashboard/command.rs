//! Console Commands
//!
//! Parses the lines typed into the interactive dashboard.

use std::str::FromStr;
use thiserror::Error;

use super::state::{Tab, REPORT_CATEGORIES};

/// One user interaction with the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch to a tab
    Tab(Tab),
    /// Select the overview year
    Year(i32),
    /// Set the free-text report search (empty clears it)
    Search(String),
    /// Set the report year filter (`None` = all years)
    ReportYear(Option<i32>),
    /// Set the report category filter (empty = all categories)
    Category(String),
    /// Show the download notice of the report at a 1-based position
    Download(usize),
    /// Dismiss the disclaimer
    Accept,
    /// Reload everything from the API
    Refresh,
    Help,
    Quit,
}

/// Errors from parsing a console line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0} (type 'help' for a list)")]
    Unknown(String),

    #[error("Missing argument for '{0}'")]
    MissingArgument(&'static str),

    #[error("Invalid argument for '{command}': {value}")]
    InvalidArgument { command: &'static str, value: String },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_lowercase().as_str() {
            "overview" => Ok(Command::Tab(Tab::Overview)),
            "reports" => Ok(Command::Tab(Tab::Reports)),
            "tab" => {
                let tab = required("tab", rest)?;
                tab.parse::<Tab>()
                    .map(Command::Tab)
                    .map_err(|_| invalid("tab", tab))
            }
            "year" => {
                let year = required("year", rest)?;
                year.parse().map(Command::Year).map_err(|_| invalid("year", year))
            }
            "search" => Ok(Command::Search(rest.to_string())),
            "report-year" => {
                let year = required("report-year", rest)?;
                if is_all(year) {
                    Ok(Command::ReportYear(None))
                } else {
                    year.parse::<i32>()
                        .map(|y| Command::ReportYear(Some(y).filter(|y| *y != 0)))
                        .map_err(|_| invalid("report-year", year))
                }
            }
            "category" => {
                if is_all(rest) {
                    Ok(Command::Category(String::new()))
                } else {
                    Ok(Command::Category(canonical_category(rest)))
                }
            }
            "download" => {
                let index = required("download", rest)?;
                index
                    .parse::<usize>()
                    .ok()
                    .filter(|i| *i > 0)
                    .map(Command::Download)
                    .ok_or_else(|| invalid("download", index))
            }
            "accept" => Ok(Command::Accept),
            "refresh" => Ok(Command::Refresh),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn required<'a>(command: &'static str, value: &'a str) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(value)
    }
}

fn invalid(command: &'static str, value: &str) -> CommandError {
    CommandError::InvalidArgument {
        command,
        value: value.to_string(),
    }
}

/// Known categories match case-insensitively; anything else passes through
fn canonical_category(value: &str) -> String {
    REPORT_CATEGORIES
        .iter()
        .find(|known| known.eq_ignore_ascii_case(value))
        .map_or_else(|| value.to_string(), |known| known.to_string())
}

fn is_all(value: &str) -> bool {
    value.eq_ignore_ascii_case("all")
}

/// Help text for the interactive dashboard
pub const HELP: &str = "\
Commands:
  overview | reports        switch tab (also: tab <name>)
  year <yyyy>               select the overview year
  search [text]             search reports (empty clears)
  report-year <yyyy|all>    filter reports by year
  category [name|all]       filter reports by category (options listed on Reports)
  download <n>              download report n of the current list
  accept                    dismiss the disclaimer
  refresh                   reload data from the API
  help                      show this help
  quit                      leave the dashboard";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tabs() {
        assert_eq!("reports".parse(), Ok(Command::Tab(Tab::Reports)));
        assert_eq!("TAB overview".parse(), Ok(Command::Tab(Tab::Overview)));
        assert_eq!(
            "tab settings".parse::<Command>(),
            Err(CommandError::InvalidArgument {
                command: "tab",
                value: "settings".to_string()
            })
        );
    }

    #[test]
    fn test_parse_year() {
        assert_eq!("year 2023".parse(), Ok(Command::Year(2023)));
        assert_eq!("year".parse::<Command>(), Err(CommandError::MissingArgument("year")));
        assert!("year twenty".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_search_keeps_inner_spaces() {
        assert_eq!(
            "search  emissions 2024 ".parse(),
            Ok(Command::Search("emissions 2024".to_string()))
        );
        assert_eq!("search".parse(), Ok(Command::Search(String::new())));
    }

    #[test]
    fn test_parse_report_year() {
        assert_eq!("report-year 2022".parse(), Ok(Command::ReportYear(Some(2022))));
        assert_eq!("report-year all".parse(), Ok(Command::ReportYear(None)));
        assert_eq!("report-year 0".parse(), Ok(Command::ReportYear(None)));
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(
            "category ESRS Compliance".parse(),
            Ok(Command::Category("ESRS Compliance".to_string()))
        );
        assert_eq!(
            "category esrs compliance".parse(),
            Ok(Command::Category("ESRS Compliance".to_string()))
        );
        assert_eq!(
            "category Supply Chain".parse(),
            Ok(Command::Category("Supply Chain".to_string()))
        );
        assert_eq!("category All".parse(), Ok(Command::Category(String::new())));
        assert_eq!("category".parse(), Ok(Command::Category(String::new())));
    }

    #[test]
    fn test_help_points_to_filter_options() {
        assert!(HELP.contains("options listed on Reports"));
    }

    #[test]
    fn test_parse_download() {
        assert_eq!("download 3".parse(), Ok(Command::Download(3)));
        assert!("download 0".parse::<Command>().is_err());
        assert!("download x".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!("quit".parse(), Ok(Command::Quit));
        assert_eq!("exit".parse(), Ok(Command::Quit));
        assert_eq!("?".parse(), Ok(Command::Help));
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "settings".parse::<Command>(),
            Err(CommandError::Unknown("settings".to_string()))
        );
    }
}
