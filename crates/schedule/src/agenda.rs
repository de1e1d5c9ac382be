//! Agenda queries over the appointment book.

use audiosight_calendar::CivilDate;
use tracing::debug;

use crate::event::{Appointment, AppointmentKind, TimeOfDay};

/// The clinic's appointment book.
///
/// Appointments are held unordered; every query sorts its own view, so
/// insertion order never leaks into rendered output.
#[derive(Debug, Clone, Default)]
pub struct Agenda {
    appointments: Vec<Appointment>,
}

impl Agenda {
    /// Creates an empty agenda.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an agenda pre-loaded with the demo appointment book.
    pub fn seed() -> Self {
        let date = |month: u8, day: u8| {
            CivilDate::new(2025, month, day).expect("demo schedule dates are valid")
        };
        let time =
            |hour: u8, minute: u8| TimeOfDay::new(hour, minute).expect("demo times are valid");
        let event = |id, title: &str, d: CivilDate, s, e, kind| {
            Appointment::new(id, title, d, s, e, kind).expect("demo slots are well-formed")
        };

        let appointments = vec![
            event(
                1,
                "BPPV Assessment - Sarah Johnson",
                date(6, 1),
                time(9, 0),
                time(9, 45),
                AppointmentKind::BppvCheck,
            )
            .with_patient("Sarah Johnson")
            .with_notes("Initial BPPV evaluation, Dix-Hallpike test"),
            event(
                2,
                "Hearing Test - Michael Chen",
                date(6, 1),
                time(10, 0),
                time(11, 0),
                AppointmentKind::HearingTest,
            )
            .with_patient("Michael Chen")
            .with_notes("Pure tone audiometry, speech testing"),
            event(
                3,
                "BPPV Treatment - Emma Wilson",
                date(6, 2),
                time(14, 0),
                time(14, 30),
                AppointmentKind::BppvCheck,
            )
            .with_patient("Emma Wilson")
            .with_notes("Canalith repositioning procedure (Epley maneuver)"),
            event(
                4,
                "Consultation - David Rodriguez",
                date(6, 3),
                time(9, 30),
                time(10, 30),
                AppointmentKind::Consultation,
            )
            .with_patient("David Rodriguez")
            .with_notes("Discuss hearing aid options"),
            event(
                5,
                "BPPV Follow-up - Lisa Parker",
                date(6, 3),
                time(11, 0),
                time(11, 30),
                AppointmentKind::FollowUp,
            )
            .with_patient("Lisa Parker")
            .with_notes("Check progress after Epley maneuver treatment"),
            event(
                6,
                "Hearing Test - Robert Taylor",
                date(6, 4),
                time(15, 30),
                time(16, 30),
                AppointmentKind::HearingTest,
            )
            .with_patient("Robert Taylor")
            .with_notes("Comprehensive audiological evaluation"),
            event(
                7,
                "Follow-up - Sarah Johnson",
                date(6, 15),
                time(10, 30),
                time(11, 0),
                AppointmentKind::FollowUp,
            )
            .with_patient("Sarah Johnson")
            .with_notes("Two-week follow-up after BPPV treatment"),
            event(
                8,
                "BPPV Treatment - Nancy Martinez",
                date(6, 17),
                time(9, 30),
                time(10, 15),
                AppointmentKind::BppvCheck,
            )
            .with_patient("Nancy Martinez")
            .with_notes("Canalith repositioning, patient education"),
            event(
                9,
                "BPPV Assessment - Rachel Green",
                date(7, 1),
                time(9, 0),
                time(9, 45),
                AppointmentKind::BppvCheck,
            )
            .with_patient("Rachel Green"),
            event(
                10,
                "Hearing Test - Mark Stevens",
                date(7, 2),
                time(10, 30),
                time(11, 30),
                AppointmentKind::HearingTest,
            )
            .with_patient("Mark Stevens"),
            event(
                11,
                "BPPV Assessment - Frank Williams",
                date(7, 11),
                time(10, 0),
                time(10, 45),
                AppointmentKind::BppvCheck,
            )
            .with_patient("Frank Williams")
            .with_notes("Recurrent vertigo, detailed positional testing"),
            event(
                12,
                "Lunch Break",
                date(7, 12),
                time(12, 0),
                time(13, 0),
                AppointmentKind::Break,
            )
            .with_notes("Staff lunch break"),
        ];

        Self { appointments }
    }

    /// Adds an appointment to the book.
    pub fn add(&mut self, appointment: Appointment) {
        debug!(id = appointment.id(), "appointment added");
        self.appointments.push(appointment);
    }

    /// Returns all appointments, in insertion order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Returns the number of appointments in the book.
    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    /// Returns `true` if the book is empty.
    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Returns the day's appointments, ordered by start time.
    pub fn on_day(&self, date: CivilDate) -> Vec<&Appointment> {
        let mut day: Vec<&Appointment> = self
            .appointments
            .iter()
            .filter(|a| a.date() == date)
            .collect();
        day.sort_by_key(|a| (a.start(), a.id()));
        day
    }

    /// Returns the month's appointments, ordered chronologically.
    pub fn in_month(&self, year: i32, month: u8) -> Vec<&Appointment> {
        let mut monthly: Vec<&Appointment> = self
            .appointments
            .iter()
            .filter(|a| a.date().year() == year && a.date().month() == month)
            .collect();
        monthly.sort_by_key(|a| (a.date(), a.start(), a.id()));
        monthly
    }

    /// Returns up to `limit` appointments strictly after `after`,
    /// chronologically.
    ///
    /// The widget's upcoming list: called with today's date, it yields
    /// tomorrow's and later appointments.
    pub fn upcoming(&self, after: CivilDate, limit: usize) -> Vec<&Appointment> {
        let mut future: Vec<&Appointment> = self
            .appointments
            .iter()
            .filter(|a| a.date() > after)
            .collect();
        future.sort_by_key(|a| (a.date(), a.start(), a.id()));
        future.truncate(limit);
        future
    }
}
