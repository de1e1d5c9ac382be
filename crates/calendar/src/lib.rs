//! # audiosight-calendar
//!
//! Pure date arithmetic and month-grid generation for the proleptic
//! Gregorian calendar. Months are zero-based (0 = January) throughout;
//! days are 1-based.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CivilDate"] -->|".weekday()"| B["Weekday"]
//!     A -->|".succ()"| A
//!     A -->|"MonthView::of()"| C["MonthView"]
//!     C -->|".prev() / .next()"| C
//!     C -->|"build_month_grid()"| D["MonthGrid (42 cells)"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use audiosight_calendar::{CivilDate, MonthView, Weekday, build_month_grid};
//!
//! // Validated civil dates with weekday arithmetic
//! let today = CivilDate::new(2025, 6, 15).unwrap(); // Jul 15 2025
//! assert_eq!(today.weekday(), Weekday::Tuesday);
//!
//! // Month navigation with year normalization
//! let view = MonthView::of(today).next(); // Aug 2025
//!
//! // Fixed 6x7 Sunday-first grid
//! let grid = build_month_grid(view.year(), view.month(), today).unwrap();
//! assert_eq!(grid.cells().len(), 42);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Civil date value type, leap years, weekday computation |
//! | `view` | Month navigation with year overflow normalization |
//! | `grid` | 42-cell Sunday-first month grid builder |
//! | `error` | Error types |

mod date;
mod error;
mod grid;
mod view;

pub use date::{CivilDate, Weekday, days_in_month, is_leap_year};
pub use error::CalendarError;
pub use grid::{CellKind, DayCell, GRID_CELLS, GRID_COLUMNS, MonthGrid, build_month_grid};
pub use view::MonthView;
