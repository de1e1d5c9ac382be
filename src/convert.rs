//! Parsing of CLI date arguments into core calendar types.
//!
//! Dates cross this boundary in human form (1-based months); the core
//! crates use zero-based months throughout.

use anyhow::{Context, Result, bail};
use chrono::Datelike;

use audiosight_calendar::{CivilDate, MonthView};

/// Returns today's date from the system clock.
///
/// This is the only place the clock is read; every core call takes the
/// resulting date as an explicit argument.
pub fn system_today() -> Result<CivilDate> {
    let now = chrono::Local::now().date_naive();
    CivilDate::new(now.year(), now.month0() as u8, now.day() as u8)
        .context("system clock produced an unrepresentable date")
}

/// Resolves an optional `--today` override against the system clock.
pub fn resolve_today(arg: Option<&str>) -> Result<CivilDate> {
    match arg {
        Some(s) => parse_date(s),
        None => system_today(),
    }
}

/// Parses "YYYY-MM-DD" (1-based month) into a [`CivilDate`].
pub fn parse_date(s: &str) -> Result<CivilDate> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        bail!("invalid date {s:?}: expected YYYY-MM-DD");
    }
    let year: i32 = parts[0]
        .parse()
        .with_context(|| format!("invalid year in date {s:?}"))?;
    let month: u8 = parts[1]
        .parse()
        .with_context(|| format!("invalid month in date {s:?}"))?;
    let day: u8 = parts[2]
        .parse()
        .with_context(|| format!("invalid day in date {s:?}"))?;
    if month == 0 {
        bail!("invalid date {s:?}: months are 1..=12");
    }
    CivilDate::new(year, month - 1, day).with_context(|| format!("invalid date {s:?}"))
}

/// Parses "YYYY-MM" (1-based month) into a [`MonthView`].
pub fn parse_month(s: &str) -> Result<MonthView> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 2 {
        bail!("invalid month {s:?}: expected YYYY-MM");
    }
    let year: i32 = parts[0]
        .parse()
        .with_context(|| format!("invalid year in month {s:?}"))?;
    let month: u8 = parts[1]
        .parse()
        .with_context(|| format!("invalid month in {s:?}"))?;
    if month == 0 {
        bail!("invalid month {s:?}: months are 1..=12");
    }
    MonthView::new(year, month - 1).with_context(|| format!("invalid month {s:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_valid() {
        let date = parse_date("2025-07-15").unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn parse_date_rejects_bad_shapes() {
        assert!(parse_date("2025-07").is_err());
        assert!(parse_date("2025/07/15").is_err());
        assert!(parse_date("2025-00-15").is_err());
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("year-month-day").is_err());
    }

    #[test]
    fn parse_month_valid() {
        let view = parse_month("2025-01").unwrap();
        assert_eq!(view.year(), 2025);
        assert_eq!(view.month(), 0);
    }

    #[test]
    fn parse_month_rejects_bad_shapes() {
        assert!(parse_month("2025").is_err());
        assert!(parse_month("2025-00").is_err());
        assert!(parse_month("2025-13").is_err());
    }

    #[test]
    fn system_today_is_representable() {
        assert!(system_today().is_ok());
    }
}
