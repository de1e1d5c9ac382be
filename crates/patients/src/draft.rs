//! Intake-form draft and validation.

use lazy_regex::regex_is_match;

use crate::error::DraftError;
use crate::patient::{BloodGroup, Gender};

/// The new-patient intake form, prior to validation.
///
/// Field defaults match an empty form: blank strings, age 0, gender Male,
/// no blood group selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientDraft {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub blood_group: Option<BloodGroup>,
    pub phone: String,
    pub email: String,
}

impl Default for PatientDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 0,
            gender: Gender::Male,
            blood_group: None,
            phone: String::new(),
            email: String::new(),
        }
    }
}

impl PatientDraft {
    /// Validates every field and collects all failures.
    ///
    /// # Errors
    ///
    /// Returns one [`DraftError`] per failing field, in form order
    /// (name, age, blood group, phone, email), so a form can display its
    /// complete error state from a single call.
    pub fn validate(&self) -> Result<(), Vec<DraftError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(DraftError::EmptyName);
        }
        if !(1..=150).contains(&self.age) {
            errors.push(DraftError::InvalidAge { age: self.age });
        }
        if self.blood_group.is_none() {
            errors.push(DraftError::MissingBloodGroup);
        }
        if self.phone.trim().is_empty() {
            errors.push(DraftError::EmptyPhone);
        }
        if self.email.trim().is_empty() {
            errors.push(DraftError::EmptyEmail);
        } else if !regex_is_match!(r"\S+@\S+\.\S+", &self.email) {
            errors.push(DraftError::InvalidEmail {
                email: self.email.clone(),
            });
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
