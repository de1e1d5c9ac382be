mod calendar_cmd;
mod cli;
mod config;
mod convert;
mod dashboard_cmd;
mod logging;
mod patients_cmd;
mod schedule_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Dashboard(args) => dashboard_cmd::run(args),
        Command::Calendar(args) => calendar_cmd::run(args),
        Command::Patients(args) => patients_cmd::run(args),
        Command::Schedule(args) => schedule_cmd::run(args),
    }
}
