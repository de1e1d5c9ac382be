//! Calendar command: render the month grid widget.

use anyhow::Result;
use tracing::{info, info_span};

use audiosight_calendar::{CellKind, MonthGrid, MonthView, Weekday, build_month_grid};
use audiosight_schedule::Agenda;

use crate::cli::CalendarArgs;
use crate::config::DashboardConfig;
use crate::convert;

/// Run the calendar view.
pub fn run(args: CalendarArgs) -> Result<()> {
    let _cmd = info_span!("calendar").entered();
    let config = DashboardConfig::load(&args.config)?;
    let today = convert::resolve_today(args.today.as_deref())?;
    let view = match &args.month {
        Some(s) => convert::parse_month(s)?,
        None => MonthView::of(today),
    };

    let grid = build_month_grid(view.year(), view.month(), today)?;
    info!(year = view.year(), month = view.month(), "rendering month grid");
    print!("{}", render_month(view, &grid));

    println!();
    println!("{}  Today", today.format_long());

    let agenda = Agenda::seed();
    let upcoming = agenda.upcoming(today, config.schedule.upcoming_limit);
    if !upcoming.is_empty() {
        println!();
        println!("Upcoming appointments");
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

/// Renders a month grid as fixed-width text, today bracketed.
///
/// Previous-month filler cells render blank; next-month filler cells keep
/// their running day numbers, as the on-screen widget does.
pub(crate) fn render_month(view: MonthView, grid: &MonthGrid) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:^28}\n", view.title()));
    let header: String = Weekday::ALL
        .iter()
        .map(|weekday| format!("{:>4}", weekday.label()))
        .collect();
    out.push_str(&header);
    out.push('\n');
    for row in grid.rows() {
        let line: String = row
            .iter()
            .map(|cell| match cell.kind() {
                CellKind::PreviousMonth => "    ".to_string(),
                _ if cell.is_today() => format!("[{:>2}]", cell.day()),
                _ => format!("{:>3} ", cell.day()),
            })
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
