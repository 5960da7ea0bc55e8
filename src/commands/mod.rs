mod activities;
mod login;
mod run;
mod sleep;
mod sleep_week;
mod status;
mod steps;
mod summary;
mod today;

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::config::Config;
use crate::output::{Envelope, OutputFormat};

pub use activities::ActivitiesCommand;
pub use login::LoginCommand;
pub use run::{resolve_run, RunCommand};
pub use sleep::SleepCommand;
pub use sleep_week::SleepWeekCommand;
pub use status::StatusCommand;
pub use steps::StepsCommand;
pub use summary::SummaryCommand;
pub use today::TodayCommand;

#[derive(Parser)]
#[command(name = "garmin")]
#[command(about = "Command-line wrapper around the Garmin Connect API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Authenticate and store credentials
    Login(LoginCommand),

    /// Check that a session can be established
    Status(StatusCommand),

    /// Raw daily summary for today
    #[command(alias = "daily")]
    Today(TodayCommand),

    /// Recent activities, newest first
    Activities(ActivitiesCommand),

    /// Daily step counts
    Steps(StepsCommand),

    /// Normalized sleep summary for one night
    Sleep(SleepCommand),

    /// Multi-day sleep aggregate
    SleepWeek(SleepWeekCommand),

    /// Run detail with laps and recent runs for comparison
    Run(RunCommand),

    /// Comprehensive daily summary
    #[command(alias = "stats")]
    Summary(SummaryCommand),
}

impl Cli {
    /// Run the selected command, folding every failure into an error
    /// envelope. Nothing below this level is allowed to escape.
    pub async fn execute(self) -> Envelope {
        self.dispatch().await.into()
    }

    async fn dispatch(self) -> Result<Value> {
        let config = Config::load()?;

        match self.command {
            Commands::Login(cmd) => cmd.execute(&config).await,
            Commands::Status(cmd) => cmd.execute(&config).await,
            Commands::Today(cmd) => cmd.execute(&config).await,
            Commands::Activities(cmd) => cmd.execute(&config).await,
            Commands::Steps(cmd) => cmd.execute(&config).await,
            Commands::Sleep(cmd) => cmd.execute(&config).await,
            Commands::SleepWeek(cmd) => cmd.execute(&config).await,
            Commands::Run(cmd) => cmd.execute(&config).await,
            Commands::Summary(cmd) => cmd.execute(&config).await,
        }
    }
}

/// Today's local calendar date
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub(crate) fn days_ago(days: i64) -> String {
    format_date(today() - Duration::days(days))
}
