//! Error types for the audiosight-listing crate.

/// Error type for all fallible operations in the audiosight-listing crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListingError {
    /// Returned when a page size of zero is requested.
    ///
    /// Page *numbers* out of range are clamped, never rejected; a zero page
    /// size has no meaningful clamp and indicates a caller-side bug.
    #[error("invalid page size: {page_size} (must be >= 1)")]
    InvalidPageSize {
        /// The invalid page size that was provided.
        page_size: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_page_size() {
        let err = ListingError::InvalidPageSize { page_size: 0 };
        assert_eq!(err.to_string(), "invalid page size: 0 (must be >= 1)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ListingError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ListingError>();
    }
}
