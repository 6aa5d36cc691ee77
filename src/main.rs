//! GreenAuto Dashboard
//!
//! Interactive terminal dashboard for the GreenAuto ESG Data API. Renders
//! the dashboard, then reads one command per line from stdin.

use anyhow::Context;
use clap::Parser;
use greenauto::config::Config;
use greenauto::dashboard::{Command, Dashboard, Tab, YearRange, HELP};
use greenauto::esg::{EsgApi, EsgClient};
use greenauto::render::{download_notice, DashboardView};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "greenauto")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "GreenAuto S.p.A. ESG sustainability dashboard")]
struct Args {
    /// Config file (default: first of ~/.config/greenauto, /etc/greenauto, ./config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// ESG API base URL, overrides the config file
    #[arg(long)]
    api_url: Option<String>,

    /// Year selected on startup
    #[arg(short, long)]
    year: Option<i32>,
}

/// Whether the command loop keeps going
enum Flow {
    Continue,
    Quit,
}

struct Session<A: EsgApi + ?Sized> {
    dashboard: Dashboard<A>,
    years: YearRange,
    chart_size: (usize, usize),
}

impl<A: EsgApi + ?Sized> Session<A> {
    fn render(&self) {
        let (width, height) = self.chart_size;
        print!(
            "{}",
            DashboardView::new(self.dashboard.state()).chart_size(width, height)
        );
    }

    async fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::Tab(tab) => self.dashboard.set_tab(tab).await,
            Command::Year(year) => {
                if !self.years.contains(year) {
                    println!(
                        "Year {} is outside {}-{}",
                        year, self.years.first, self.years.last
                    );
                    return Flow::Continue;
                }
                self.dashboard.select_year(year).await;
            }
            Command::Search(text) => self.dashboard.set_search(text).await,
            Command::ReportYear(year) => self.dashboard.set_report_year(year).await,
            Command::Category(category) => self.dashboard.set_category(category).await,
            Command::Download(index) => {
                match self.dashboard.report_at(index) {
                    Some(report) => println!("{}", download_notice(report)),
                    None if self.dashboard.state().active_tab == Tab::Overview => {
                        println!("Only the featured report (1) can be downloaded here")
                    }
                    None => println!("No report at position {}", index),
                }
                return Flow::Continue;
            }
            Command::Accept => self.dashboard.dismiss_disclaimer(),
            Command::Refresh => self.dashboard.refresh().await,
            Command::Help => {
                println!("{}", HELP);
                return Flow::Continue;
            }
            Command::Quit => return Flow::Quit,
        }

        self.render();
        Flow::Continue
    }
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(url) = args.api_url {
        config.api.base_url = url;
    }

    // Initialize logging
    greenauto::logging::init(&config.logging);

    tracing::info!("GreenAuto Dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(api = %config.api.base_url, "Using ESG API");

    let years = config.year_range();
    let selected_year = args.year.unwrap_or(config.dashboard.default_year);
    if !years.contains(selected_year) {
        anyhow::bail!(
            "Year {} is outside the dashboard range {}-{}",
            selected_year,
            years.first,
            years.last
        );
    }

    let client = EsgClient::new(config.client_config()).context("Failed to build ESG client")?;

    let mut session = Session {
        dashboard: Dashboard::new(Arc::new(client), years, selected_year),
        years,
        chart_size: (config.dashboard.chart_width, config.dashboard.chart_height),
    };

    session.dashboard.start().await;
    session.render();
    println!("Type 'help' for commands.");
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.parse::<Command>() {
            Ok(command) => {
                if let Flow::Quit = session.handle(command).await {
                    break;
                }
            }
            Err(greenauto::CommandError::Empty) => {}
            Err(e) => println!("{}", e),
        }
        prompt()?;
    }

    tracing::info!("GreenAuto Dashboard shutdown complete");
    Ok(())
}
