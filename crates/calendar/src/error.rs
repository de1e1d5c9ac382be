//! Error types for the audiosight-calendar crate.

/// Error type for all fallible operations in the audiosight-calendar crate.
///
/// This enum covers validation failures for month indices and
/// day-within-month values in the proleptic Gregorian calendar.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month index is outside the valid range 0..=11.
    #[error("invalid month index: {month} (must be 0..=11)")]
    InvalidMonthIndex {
        /// The invalid zero-based month index that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month index {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The zero-based month index for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month_index() {
        let err = CalendarError::InvalidMonthIndex { month: 12 };
        assert_eq!(err.to_string(), "invalid month index: 12 (must be 0..=11)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 29,
            month: 1,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 29 for month index 1 (max 28)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_clone_and_partial_eq() {
        let err = CalendarError::InvalidMonthIndex { month: 13 };
        let cloned = err.clone();
        assert_eq!(err, cloned);

        let other = CalendarError::InvalidMonthIndex { month: 14 };
        assert_ne!(err, other);
    }
}
