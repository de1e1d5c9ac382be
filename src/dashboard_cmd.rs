//! Dashboard command: the composed overview the app opens on.

use anyhow::Result;
use tracing::{info, info_span};

use audiosight_calendar::{MonthView, build_month_grid};
use audiosight_patients::PatientDirectory;
use audiosight_schedule::Agenda;

use crate::calendar_cmd;
use crate::cli::DashboardArgs;
use crate::config::DashboardConfig;
use crate::convert;

/// Run the dashboard overview.
pub fn run(args: DashboardArgs) -> Result<()> {
    let _cmd = info_span!("dashboard").entered();
    let config = DashboardConfig::load(&args.config)?;
    let today = convert::resolve_today(args.today.as_deref())?;

    let directory = PatientDirectory::seed();
    let agenda = Agenda::seed();
    info!(
        patients = directory.len(),
        appointments = agenda.len(),
        "rendering dashboard"
    );

    println!("{}", config.clinic.name);
    println!();

    println!("Activity Overview");
    println!("  Appointments  {:>4}", agenda.len());
    println!("  Patients      {:>4}", directory.len());
    println!();

    println!("Latest Appointments");
    let todays = agenda.on_day(today);
    if todays.is_empty() {
        println!("  No appointments today.");
    }
    for appointment in &todays {
        println!(
            "  {:<21} {}",
            appointment.time_range(),
            appointment.title()
        );
    }
    println!();

    let view = MonthView::of(today);
    let grid = build_month_grid(view.year(), view.month(), today)?;
    print!("{}", calendar_cmd::render_month(view, &grid));
    println!();
    println!("{}  Today", today.format_long());

    let upcoming = agenda.upcoming(today, config.schedule.upcoming_limit);
    if !upcoming.is_empty() {
        println!();
        for appointment in upcoming {
            println!(
                "  {:<34} {:<21} {}",
                appointment.title(),
                appointment.time_range(),
                appointment.date().format_short()
            );
        }
    }
    Ok(())
}
