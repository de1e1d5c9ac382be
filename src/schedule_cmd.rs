//! Schedule command: day agenda and upcoming appointments.

use anyhow::Result;
use tracing::{info, info_span};

use audiosight_schedule::{Agenda, Appointment};

use crate::cli::ScheduleArgs;
use crate::config::DashboardConfig;
use crate::convert;

/// Run the schedule view.
pub fn run(args: ScheduleArgs) -> Result<()> {
    let _cmd = info_span!("schedule").entered();
    let config = DashboardConfig::load(&args.config)?;
    let today = convert::resolve_today(args.today.as_deref())?;
    let agenda = Agenda::seed();

    if args.upcoming {
        let limit = args.limit.unwrap_or(config.schedule.upcoming_limit);
        let upcoming = agenda.upcoming(today, limit);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&upcoming)?);
            return Ok(());
        }
        info!(count = upcoming.len(), "rendering upcoming appointments");
        println!("Upcoming appointments after {}", today.format_long());
        if upcoming.is_empty() {
            println!("  None scheduled.");
        }
        for appointment in upcoming {
            println!(
                "  {}  {:<21} {}",
                appointment.date().format_short(),
                appointment.time_range(),
                appointment.title()
            );
        }
        return Ok(());
    }

    let day = match &args.day {
        Some(s) => convert::parse_date(s)?,
        None => today,
    };
    let appointments = agenda.on_day(day);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&appointments)?);
        return Ok(());
    }

    info!(count = appointments.len(), "rendering day agenda");
    println!("{}", day.format_long());
    if appointments.is_empty() {
        println!("  No appointments.");
    }
    for appointment in &appointments {
        print_slot(appointment);
    }
    Ok(())
}

fn print_slot(appointment: &Appointment) {
    println!(
        "  {:<21} {:<13} {}",
        appointment.time_range(),
        appointment.kind().to_string(),
        appointment.title()
    );
    if let Some(notes) = appointment.notes() {
        println!("  {:<21} {:<13} {notes}", "", "");
    }
}
