//! Fixed-shape month grid generation.

use crate::date::{CivilDate, days_in_month};
use crate::error::CalendarError;

/// Total number of cells in a month grid (6 rows of 7, Sunday-first).
pub const GRID_CELLS: usize = 42;

/// Number of columns (days per week) in the grid.
pub const GRID_COLUMNS: usize = 7;

/// Which month a grid cell belongs to relative to the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Leading filler before day 1; rendered blank.
    PreviousMonth,
    /// A day of the displayed month.
    InMonth,
    /// Trailing filler after the last day, numbered from 1.
    NextMonth,
}

/// One cell of the 42-cell month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    day: u8,
    kind: CellKind,
    is_today: bool,
}

impl DayCell {
    /// Returns the day-of-month label (0 for leading filler cells).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the cell's month membership.
    pub fn kind(self) -> CellKind {
        self.kind
    }

    /// Returns `true` if this cell is the caller-supplied "today".
    pub fn is_today(self) -> bool {
        self.is_today
    }
}

/// A month rendered as a fixed 6x7 Sunday-first grid.
///
/// The fixed shape means the display layer never needs variable-row layout
/// logic: short months are padded with leading and trailing filler cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u8,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the zero-based month (0 = January .. 11 = December).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns all 42 cells in row-major order.
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Returns the 6 grid rows, 7 cells each.
    pub fn rows(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }
}

/// Builds the 42-cell Sunday-first grid for `(year, month)`.
///
/// The grid starts with one blank filler cell per weekday preceding day 1,
/// continues with the month's days (marking the cell equal to `today`), and
/// is padded to exactly [`GRID_CELLS`] cells with trailing cells numbered
/// 1, 2, 3, ... for the following month.
///
/// Month overflow is not normalized here; callers navigate months with
/// [`MonthView`](crate::MonthView) and pass the already-valid pair in.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonthIndex`] if `month` is not in 0..=11.
pub fn build_month_grid(
    year: i32,
    month: u8,
    today: CivilDate,
) -> Result<MonthGrid, CalendarError> {
    let n_days = days_in_month(year, month)?;
    let first_weekday = CivilDate::new(year, month, 1)?.weekday().index() as usize;

    let mut cells = Vec::with_capacity(GRID_CELLS);
    for _ in 0..first_weekday {
        cells.push(DayCell {
            day: 0,
            kind: CellKind::PreviousMonth,
            is_today: false,
        });
    }
    for day in 1..=n_days {
        let is_today =
            today.year() == year && today.month() == month && today.day() == day;
        cells.push(DayCell {
            day,
            kind: CellKind::InMonth,
            is_today,
        });
    }
    // Cannot underflow for Gregorian months (offset <= 6, length <= 31),
    // but the saturation keeps the 42-cell invariant unconditional.
    let trailing = GRID_CELLS.saturating_sub(first_weekday + n_days as usize);
    for day in 1..=trailing {
        cells.push(DayCell {
            day: day as u8,
            kind: CellKind::NextMonth,
            is_today: false,
        });
    }

    Ok(MonthGrid { year, month, cells })
}
