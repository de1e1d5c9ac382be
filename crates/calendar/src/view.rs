//! Month navigation for the calendar view.

use crate::date::{CivilDate, MONTH_NAMES};
use crate::error::CalendarError;

/// A (year, month) pair identifying the month a calendar view displays.
///
/// Navigation with [`prev`](MonthView::prev) / [`next`](MonthView::next)
/// normalizes year overflow, so stepping past December lands on January of
/// the following year and vice versa. Callers hold a `MonthView` across
/// renders and pass its fields to
/// [`build_month_grid`](crate::build_month_grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthView {
    year: i32,
    month: u8,
}

impl MonthView {
    /// Creates a new `MonthView` from a year and zero-based month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonthIndex`] if `month` is not in 0..=11.
    pub fn new(year: i32, month: u8) -> Result<Self, CalendarError> {
        if month > 11 {
            return Err(CalendarError::InvalidMonthIndex { month });
        }
        Ok(Self { year, month })
    }

    /// Returns the view containing the given date.
    pub fn of(date: CivilDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the zero-based month (0 = January .. 11 = December).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the previous month's view, stepping the year at January.
    pub fn prev(self) -> Self {
        if self.month == 0 {
            Self {
                year: self.year - 1,
                month: 11,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Returns the next month's view, stepping the year at December.
    pub fn next(self) -> Self {
        if self.month == 11 {
            Self {
                year: self.year + 1,
                month: 0,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Returns `true` if the given date falls within this view's month.
    pub fn contains(self, date: CivilDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Returns the header title, e.g. "July 2025".
    pub fn title(self) -> String {
        format!("{} {}", MONTH_NAMES[self.month as usize], self.year)
    }
}
