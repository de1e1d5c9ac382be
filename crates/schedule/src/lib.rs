//! # audiosight-schedule
//!
//! Appointment book for the clinic dashboard: typed appointment slots and
//! the agenda queries the schedule views are rendered from.
//!
//! ## Quick Start
//!
//! ```ignore
//! use audiosight_calendar::CivilDate;
//! use audiosight_schedule::Agenda;
//!
//! let agenda = Agenda::seed();
//! let today = CivilDate::new(2025, 6, 15).unwrap();
//!
//! // The calendar widget's upcoming list.
//! for appointment in agenda.upcoming(today, 2) {
//!     println!("{} {}", appointment.title(), appointment.time_range());
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `event` | `Appointment`, `AppointmentKind`, `TimeOfDay` |
//! | `agenda` | Appointment book with day/month/upcoming queries |
//! | `error` | Error types |

mod agenda;
mod error;
mod event;

pub use agenda::Agenda;
pub use error::ScheduleError;
pub use event::{Appointment, AppointmentKind, TimeOfDay};
