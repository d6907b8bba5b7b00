//! Eventcast CLI
//!
//! Scores how suitable tomorrow's predicted weather is for an event.

#![allow(clippy::print_stdout)]

mod interaction;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use application::{AdvisabilityReport, AdvisabilityService, ModelChoice, ModelKind};
use chrono::Timelike;
use clap::{Args, Parser, Subcommand};
use domain::Event;
use infrastructure::{AppConfig, CsvWeatherHistory, init_logging};
use tracing::{debug, info};

use crate::interaction::Console;

/// Eventcast CLI
#[derive(Parser)]
#[command(name = "eventcast")]
#[command(author, version, about = "Weather-based event advisability", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Weather history CSV (overrides data.history_path)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer questions about an event, then score it against chosen models
    ///
    /// This is the default when no command is given.
    Interactive,

    /// Score one event against one model
    ///
    /// Example: eventcast decide "Garden party" --outdoors --hour 15 --model simple --days 5
    Decide {
        #[command(flatten)]
        event: EventArgs,

        #[command(flatten)]
        model: ModelArgs,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show tomorrow's forecast from one model
    Forecast {
        #[command(flatten)]
        model: ModelArgs,

        /// Print the forecast as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score one event against every model
    Compare {
        #[command(flatten)]
        event: EventArgs,

        /// Days of history for the multi-day models
        #[arg(short, long)]
        days: Option<usize>,

        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args)]
struct EventArgs {
    /// Event name
    name: String,

    /// The event is held outdoors
    #[arg(long)]
    outdoors: bool,

    /// Covered shelter is available
    #[arg(long)]
    cover: bool,

    /// Hour of the event (0-23, defaults to the current hour)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=23))]
    hour: Option<u8>,
}

impl EventArgs {
    fn to_event(&self) -> anyhow::Result<Event> {
        let hour = self.hour.unwrap_or_else(current_hour);
        Ok(Event::new(&self.name, self.outdoors, self.cover, hour)?)
    }
}

#[derive(Args)]
struct ModelArgs {
    /// Prediction model: yesterday, simple or sophisticated (or 1-3)
    #[arg(short, long)]
    model: Option<ModelKind>,

    /// Days of history for the multi-day models
    #[arg(short, long)]
    days: Option<usize>,
}

impl ModelArgs {
    fn choice(&self, config: &AppConfig) -> ModelChoice {
        let kind = self.model.unwrap_or(config.prediction.default_model);
        kind.with_days(self.days.unwrap_or(config.prediction.default_days))
    }
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[allow(clippy::cast_possible_truncation)]
fn current_hour() -> u8 {
    chrono::Local::now().hour() as u8
}

fn load_service(config: &AppConfig) -> anyhow::Result<AdvisabilityService> {
    let store = CsvWeatherHistory::new(&config.data.history_path);
    AdvisabilityService::from_port(&store).with_context(|| {
        format!(
            "Failed to load weather history from {}",
            config.data.history_path.display()
        )
    })
}

fn print_report(report: &AdvisabilityReport) {
    println!("{report}");
    println!("  verdict:     {}", report.verdict());
    println!("  temperature: {:+.2}", report.temperature_factor);
    println!("  rain:        {:+.2}", report.rain_factor);
    println!("  forecast:    {}", report.forecast);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if cli.verbose > 0 {
        config.logging.filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    if let Some(path) = cli.data {
        config.data.history_path = path;
    }
    config.validate()?;

    init_logging(&config.logging)?;
    debug!(?config, "Effective configuration");

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let service = load_service(&config)?;
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout());
            console.run(&service)?;
        },

        Commands::Decide { event, model, json } => {
            let service = load_service(&config)?;
            let event = event.to_event()?;
            let report = service.assess(&event, model.choice(&config))?;
            info!(advisability = report.advisability, "Decision made");

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        },

        Commands::Forecast { model, json } => {
            let service = load_service(&config)?;
            let forecast = service.forecast(model.choice(&config))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&forecast)?);
            } else {
                println!("{forecast}");
            }
        },

        Commands::Compare { event, days, json } => {
            let service = load_service(&config)?;
            let event = event.to_event()?;
            let reports =
                service.compare(&event, days.unwrap_or(config.prediction.default_days))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    print_report(report);
                }
            }
        },

        Commands::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
        },
    }

    Ok(())
}
