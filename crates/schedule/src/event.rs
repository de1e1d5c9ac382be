//! Appointment types.

use std::fmt;
use std::str::FromStr;

use audiosight_calendar::CivilDate;
use serde::{Serialize, Serializer};

use crate::error::ScheduleError;

/// A clock time within a day, minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Creates a new `TimeOfDay`.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidTime`] if `hour` is not in 0..=23 or
    /// `minute` is not in 0..=59.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ScheduleError> {
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Formats as e.g. "9:30 AM" or "2:15 PM".
    pub fn format_12h(self) -> String {
        let (hour, suffix) = match self.hour {
            0 => (12, "AM"),
            1..=11 => (self.hour, "AM"),
            12 => (12, "PM"),
            _ => (self.hour - 12, "PM"),
        };
        format!("{}:{:02} {}", hour, self.minute, suffix)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// The kind of slot an appointment occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentKind {
    BppvCheck,
    HearingTest,
    Consultation,
    FollowUp,
    Break,
}

impl AppointmentKind {
    /// All kinds, in legend order.
    pub const ALL: [AppointmentKind; 5] = [
        AppointmentKind::BppvCheck,
        AppointmentKind::HearingTest,
        AppointmentKind::Consultation,
        AppointmentKind::FollowUp,
        AppointmentKind::Break,
    ];

    /// Returns the kebab-case label.
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentKind::BppvCheck => "bppv-check",
            AppointmentKind::HearingTest => "hearing-test",
            AppointmentKind::Consultation => "consultation",
            AppointmentKind::FollowUp => "follow-up",
            AppointmentKind::Break => "break",
        }
    }
}

impl fmt::Display for AppointmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentKind {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ScheduleError::UnknownKind {
                value: s.to_string(),
            })
    }
}

/// Serializes a date as "YYYY-MM-DD" with a human 1-based month.
fn serialize_date<S: Serializer>(date: &CivilDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u16::from(date.month()) + 1,
        date.day()
    ))
}

/// A scheduled appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    id: u64,
    title: String,
    #[serde(serialize_with = "serialize_date")]
    date: CivilDate,
    start: TimeOfDay,
    end: TimeOfDay,
    kind: AppointmentKind,
    patient_name: Option<String>,
    notes: Option<String>,
}

impl Appointment {
    /// Creates a new appointment.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::EndNotAfterStart`] if `end <= start`.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        date: CivilDate,
        start: TimeOfDay,
        end: TimeOfDay,
        kind: AppointmentKind,
    ) -> Result<Self, ScheduleError> {
        if end <= start {
            return Err(ScheduleError::EndNotAfterStart {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self {
            id,
            title: title.into(),
            date,
            start,
            end,
            kind,
            patient_name: None,
            notes: None,
        })
    }

    /// Sets the patient this appointment is for.
    pub fn with_patient(mut self, name: impl Into<String>) -> Self {
        self.patient_name = Some(name.into());
        self
    }

    /// Sets free-form clinician notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> CivilDate {
        self.date
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn kind(&self) -> AppointmentKind {
        self.kind
    }

    pub fn patient_name(&self) -> Option<&str> {
        self.patient_name.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Formats the slot as e.g. "9:30 AM - 10:00 AM".
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start.format_12h(), self.end.format_12h())
    }
}
