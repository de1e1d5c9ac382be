use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// AudioSight clinic dashboard.
#[derive(Parser)]
#[command(
    name = "audiosight",
    version,
    about = "Clinic dashboard: patient records, appointments, calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Render the dashboard overview (metrics, appointments, calendar).
    Dashboard(DashboardArgs),
    /// Render the month calendar widget.
    Calendar(CalendarArgs),
    /// List, search, and page through patient records.
    Patients(PatientsArgs),
    /// Show the appointment schedule.
    Schedule(ScheduleArgs),
}

/// Arguments for the `dashboard` subcommand.
#[derive(clap::Args)]
pub struct DashboardArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "audiosight.toml")]
    pub config: PathBuf,

    /// Override today's date (YYYY-MM-DD); defaults to the system clock.
    #[arg(long)]
    pub today: Option<String>,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "audiosight.toml")]
    pub config: PathBuf,

    /// Month to display (YYYY-MM); defaults to the current month.
    #[arg(short, long)]
    pub month: Option<String>,

    /// Override today's date (YYYY-MM-DD); defaults to the system clock.
    #[arg(long)]
    pub today: Option<String>,
}

/// Arguments for the `patients` subcommand.
#[derive(clap::Args)]
pub struct PatientsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "audiosight.toml")]
    pub config: PathBuf,

    /// Case-insensitive search over patient names and emails.
    #[arg(short, long)]
    pub query: Option<String>,

    /// 1-based page number (out-of-range values clamp).
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Override records per page from config.
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Emit the page as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `schedule` subcommand.
#[derive(clap::Args)]
pub struct ScheduleArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "audiosight.toml")]
    pub config: PathBuf,

    /// Day to show (YYYY-MM-DD); defaults to today.
    #[arg(short, long)]
    pub day: Option<String>,

    /// Show upcoming appointments after today instead of a day view.
    #[arg(short, long)]
    pub upcoming: bool,

    /// Maximum upcoming appointments to show; defaults from config.
    #[arg(long, requires = "upcoming")]
    pub limit: Option<usize>,

    /// Override today's date (YYYY-MM-DD); defaults to the system clock.
    #[arg(long)]
    pub today: Option<String>,

    /// Emit the appointments as JSON instead of a list.
    #[arg(long)]
    pub json: bool,
}
