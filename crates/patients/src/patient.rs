//! Patient record types.

use std::fmt;
use std::str::FromStr;

use audiosight_listing::Searchable;
use serde::{Serialize, Serializer};

use crate::error::PatientError;

/// Patient gender as captured by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// ABO blood group with Rh factor, displayed in clinical shorthand
/// ("B+ve", "AB-ve").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BloodGroup {
    APositive,
    ANegative,
    BPositive,
    BNegative,
    AbPositive,
    AbNegative,
    OPositive,
    ONegative,
}

impl BloodGroup {
    /// All groups in the intake form's dropdown order.
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    /// Returns the clinical shorthand label.
    pub fn as_str(self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+ve",
            BloodGroup::ANegative => "A-ve",
            BloodGroup::BPositive => "B+ve",
            BloodGroup::BNegative => "B-ve",
            BloodGroup::AbPositive => "AB+ve",
            BloodGroup::AbNegative => "AB-ve",
            BloodGroup::OPositive => "O+ve",
            BloodGroup::ONegative => "O-ve",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodGroup {
    type Err = PatientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| PatientError::UnknownBloodGroup {
                value: s.to_string(),
            })
    }
}

impl Serialize for BloodGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A registered patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    /// Directory-assigned id.
    pub id: u64,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub blood_group: BloodGroup,
    pub phone: String,
    pub email: String,
    /// Avatar initials derived from the name, e.g. "EP".
    pub avatar: String,
}

impl Searchable for Patient {
    /// The search box matches on name and email only.
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }
}

/// Derives avatar initials: first letter of each whitespace-separated word,
/// upper-cased, truncated to two.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
