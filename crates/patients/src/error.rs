//! Error types for the audiosight-patients crate.

/// Error type for patient record operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum PatientError {
    /// Returned when a blood group string has no known variant.
    #[error("unknown blood group: {value:?}")]
    UnknownBloodGroup {
        /// The unrecognised input.
        value: String,
    },

    /// Returned when no patient has the given id.
    #[error("no patient with id {id}")]
    UnknownPatient {
        /// The id that was looked up.
        id: u64,
    },
}

/// A single intake-form field failure.
///
/// Validation collects every failing field at once so a form can show all
/// of its errors in one pass.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    /// The name field is empty or whitespace.
    #[error("patient name is required")]
    EmptyName,

    /// The age is outside the accepted range.
    #[error("invalid age: {age} (must be 1..=150)")]
    InvalidAge {
        /// The rejected age.
        age: u8,
    },

    /// No blood group was selected.
    #[error("blood group is required")]
    MissingBloodGroup,

    /// The phone number field is empty or whitespace.
    #[error("phone number is required")]
    EmptyPhone,

    /// The email field is empty or whitespace.
    #[error("email is required")]
    EmptyEmail,

    /// The email does not look like an address.
    #[error("invalid email address: {email:?}")]
    InvalidEmail {
        /// The rejected input.
        email: String,
    },
}
