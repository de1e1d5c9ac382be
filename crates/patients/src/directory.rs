//! In-memory patient directory.

use tracing::debug;

use crate::draft::PatientDraft;
use crate::error::DraftError;
use crate::patient::{BloodGroup, Gender, Patient, initials};

/// The clinic's patient roster.
///
/// Purely in-memory: the directory is the caller's single owner of record
/// state, and listing views are re-derived from
/// [`patients`](PatientDirectory::patients) on every render.
#[derive(Debug, Clone)]
pub struct PatientDirectory {
    patients: Vec<Patient>,
    next_id: u64,
}

impl Default for PatientDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            patients: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a directory pre-loaded with the demo roster.
    pub fn seed() -> Self {
        let mut directory = Self::new();
        let roster: [(&str, u8, Gender, BloodGroup, &str); 7] = [
            (
                "Elizabeth Polson",
                32,
                Gender::Female,
                BloodGroup::BPositive,
                "elizabethpolson@hotmail.com",
            ),
            (
                "John David",
                28,
                Gender::Male,
                BloodGroup::BPositive,
                "davidjohn22@email.com",
            ),
            (
                "Krishnav Rajan",
                24,
                Gender::Male,
                BloodGroup::AbNegative,
                "krishnavrajan3@email.com",
            ),
            (
                "Sumanth Tinson",
                28,
                Gender::Male,
                BloodGroup::OPositive,
                "tintintin@email.com",
            ),
            (
                "EG Subramani",
                77,
                Gender::Male,
                BloodGroup::AbPositive,
                "egsl322@email.com",
            ),
            (
                "Ranjan Moari",
                77,
                Gender::Male,
                BloodGroup::OPositive,
                "ranjanmaarij@yahoo.com",
            ),
            (
                "Phillipe Gopal",
                55,
                Gender::Male,
                BloodGroup::ONegative,
                "gopal22@email.com",
            ),
        ];
        for (name, age, gender, blood_group, email) in roster {
            let draft = PatientDraft {
                name: name.to_string(),
                age,
                gender,
                blood_group: Some(blood_group),
                phone: "+1 12345 67890".to_string(),
                email: email.to_string(),
            };
            directory
                .admit(draft)
                .expect("demo roster entries are valid");
        }
        directory
    }

    /// Validates a draft and registers it as a new patient.
    ///
    /// Assigns the next id and derives the avatar initials from the name.
    ///
    /// # Errors
    ///
    /// Returns the draft's field errors (see [`PatientDraft::validate`]);
    /// the directory is unchanged on failure.
    pub fn admit(&mut self, draft: PatientDraft) -> Result<&Patient, Vec<DraftError>> {
        draft.validate()?;
        let patient = Patient {
            id: self.next_id,
            avatar: initials(&draft.name),
            name: draft.name,
            age: draft.age,
            gender: draft.gender,
            blood_group: draft
                .blood_group
                .expect("blood group presence validated above"),
            phone: draft.phone,
            email: draft.email,
        };
        debug!(id = patient.id, name = %patient.name, "patient admitted");
        self.next_id += 1;
        self.patients.push(patient);
        Ok(self.patients.last().expect("pushed above"))
    }

    /// Removes the patient with the given id.
    ///
    /// Returns `false` if no such patient exists. After a removal the caller
    /// re-paginates with its stored page number; the clamped result page is
    /// the one to keep.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.patients.len();
        self.patients.retain(|patient| patient.id != id);
        let removed = self.patients.len() < before;
        if removed {
            debug!(id, "patient removed");
        }
        removed
    }

    /// Returns the patient with the given id, if present.
    pub fn get(&self, id: u64) -> Option<&Patient> {
        self.patients.iter().find(|patient| patient.id == id)
    }

    /// Returns all patients in registration order.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Returns the number of registered patients.
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    /// Returns `true` if the directory has no patients.
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}
