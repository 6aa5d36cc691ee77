//! GreenAuto CLI
//!
//! One-shot commands against the GreenAuto ESG Data API:
//! - Show the KPIs of a year
//! - Show the multi-year trend chart
//! - List and search reports
//! - Check API status
//! - Generate a default config file

use clap::{Parser, Subcommand};
use greenauto::config::Config;
use greenauto::dashboard::{collect_year_series, fetch_selected_stats, Dashboard, StatsOutcome};
use greenauto::esg::{EsgApi, EsgClient, Report, ReportQuery};
use greenauto::render::{KpiCards, NotAvailable, PreliminaryNotice, TrendChart};
use greenauto::ApiStatus;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "greenauto-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "GreenAuto S.p.A. ESG data from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// ESG API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the headline KPIs of a year
    Overview {
        /// Report year (default: dashboard.default_year)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Show ESG performance trends across the configured years
    Trends,

    /// List reports, optionally filtered
    Reports {
        /// Free-text search
        #[arg(short, long)]
        query: Option<String>,
        /// Report year
        #[arg(short, long)]
        year: Option<i32>,
        /// Report category (e.g. "Annual Report", "Environmental")
        #[arg(short = 'C', long)]
        category: Option<String>,
    },

    /// Show API status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    greenauto::logging::init(&config.logging);

    let client = Arc::new(EsgClient::new(config.client_config())?);
    let json = cli.format == "json";

    match cli.command {
        Commands::Overview { year } => {
            let year = year.unwrap_or(config.dashboard.default_year);

            match fetch_selected_stats(client.as_ref(), year).await {
                StatsOutcome::Available(stats) if json => {
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                }
                StatsOutcome::Available(stats) => {
                    println!("ESG Performance {}", year);
                    print!("{}", KpiCards::new(&stats));
                    if stats.is_preliminary {
                        print!("{}", PreliminaryNotice::new(&stats));
                    }
                }
                StatsOutcome::NotAvailable(reason) if json => {
                    let body = serde_json::json!({ "year": year, "error": reason });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                StatsOutcome::NotAvailable(_) => print!("{}", NotAvailable { year }),
                StatsOutcome::Failed(e) => {
                    eprintln!("Cannot fetch company stats from {}", config.api.base_url);
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Trends => {
            let years = config.year_range();
            let series = collect_year_series(client.as_ref(), years).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                println!("ESG Performance Trends ({}-{})", years.first, years.last);
                print!(
                    "{}",
                    TrendChart::new(&series, years)
                        .size(config.dashboard.chart_width, config.dashboard.chart_height)
                );
            }
        }

        Commands::Reports {
            query,
            year,
            category,
        } => {
            let mut filters = ReportQuery::new();
            if let Some(q) = query {
                filters = filters.search(q);
            }
            if let Some(y) = year {
                filters = filters.year(y);
            }
            if let Some(c) = category {
                filters = filters.category(c);
            }

            let result = if filters.is_empty() {
                client.reports().await
            } else {
                client.search_reports(&filters).await
            };

            let reports = match result {
                Ok(reports) => reports,
                Err(e) => {
                    eprintln!("Failed to fetch reports: {}", e);
                    std::process::exit(1);
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                print_reports(&reports, &filters);
            }
        }

        Commands::Status => {
            let mut dashboard =
                Dashboard::new(client, config.year_range(), config.dashboard.default_year);
            dashboard.start().await;
            let state = dashboard.state();

            if json {
                let status = match &state.api_status {
                    ApiStatus::Live { .. } => "live",
                    ApiStatus::Connecting => "connecting",
                    ApiStatus::Offline { .. } => "offline",
                };
                let years: Vec<i32> = state.year_series.iter().filter_map(|s| s.year).collect();
                let body = serde_json::json!({
                    "api_url": config.api.base_url,
                    "status": status,
                    "emissions": state.emissions.len(),
                    "reports": state.reports.len(),
                    "years_with_stats": years,
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
                return Ok(());
            }

            println!("GreenAuto v{}", env!("CARGO_PKG_VERSION"));
            println!();

            match &state.api_status {
                ApiStatus::Live {
                    last_updated,
                    source,
                } => {
                    println!("API Status: connected ({})", config.api.base_url);
                    println!("Source: {}", source);
                    println!(
                        "Last updated: {}",
                        last_updated.format("%Y-%m-%dT%H:%M:%SZ")
                    );
                    println!();
                    println!("Data:");
                    println!("  Emission records: {}", state.emissions.len());
                    println!("  Reports: {}", state.reports.len());
                    let years: Vec<String> = state
                        .year_series
                        .iter()
                        .filter_map(|s| s.year)
                        .map(|y| y.to_string())
                        .collect();
                    println!(
                        "  Years with stats: {}",
                        if years.is_empty() {
                            "none".to_string()
                        } else {
                            years.join(", ")
                        }
                    );
                }
                ApiStatus::Connecting => println!("API Status: connecting"),
                ApiStatus::Offline { error } => {
                    eprintln!("Cannot connect to ESG API at {}", config.api.base_url);
                    eprintln!("Error: {}", error);
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => write_default_config(output.as_ref())?,
    }

    Ok(())
}

fn write_default_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = greenauto::config::generate_default_config();

    match output {
        Some(path) => {
            // Create parent directory if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => {
            print!("{}", config);
        }
    }

    Ok(())
}

fn print_reports(reports: &[Report], filters: &ReportQuery) {
    if reports.is_empty() {
        if filters.search.trim().is_empty() {
            println!("No reports available for the selected criteria");
        } else {
            println!("No reports found matching \"{}\"", filters.search.trim());
        }
        return;
    }

    println!(
        "{:<44} {:<6} {:<16} {:<10} {}",
        "Title", "Year", "Category", "Size", "Type"
    );
    println!("{}", "-".repeat(86));

    for report in reports {
        println!(
            "{:<44} {:<6} {:<16} {:<10} {}",
            truncate(&report.title, 44),
            report
                .year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "-".to_string()),
            truncate(&report.category, 16),
            report.size.as_deref().unwrap_or("-"),
            report.kind_label()
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
