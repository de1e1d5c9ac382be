//! Text matching over record search fields.

/// A record that exposes text fields for query matching.
///
/// Implementors return the fields a search box should look at, in no
/// particular order. Matching is case-insensitive Unicode substring
/// containment; no locale-aware collation is applied.
pub trait Searchable {
    /// Returns the text fields this record can be found by.
    fn search_fields(&self) -> Vec<&str>;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn search_fields(&self) -> Vec<&str> {
        T::search_fields(*self)
    }
}

impl Searchable for str {
    fn search_fields(&self) -> Vec<&str> {
        vec![self]
    }
}

impl Searchable for String {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

/// Returns `true` if any search field contains `query_lower`.
///
/// `query_lower` must already be lower-cased; fields are lower-cased here.
pub(crate) fn matches_query<T: Searchable>(record: &T, query_lower: &str) -> bool {
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(query_lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Record {
        name: String,
        email: String,
    }

    impl Searchable for Record {
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.name, &self.email]
        }
    }

    fn record(name: &str, email: &str) -> Record {
        Record {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn matches_any_field() {
        let r = record("Elizabeth Polson", "elizabethpolson@hotmail.com");
        assert!(matches_query(&r, "polson"));
        assert!(matches_query(&r, "hotmail"));
        assert!(!matches_query(&r, "gmail"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let r = record("John David", "davidjohn22@email.com");
        assert!(matches_query(&r, "john"));
        assert!(matches_query(&r, &"JOHN".to_lowercase()));
    }

    #[test]
    fn substring_not_prefix() {
        let r = record("Krishnav Rajan", "krishnavrajan3@email.com");
        assert!(matches_query(&r, "rajan"));
        assert!(matches_query(&r, "av raj"));
    }

    #[test]
    fn unicode_case_folding() {
        let r = record("Ägidius Müller", "agidius@example.com");
        assert!(matches_query(&r, &"Ägidius".to_lowercase()));
        assert!(matches_query(&r, "müller"));
    }

    #[test]
    fn str_and_string_impls() {
        assert!(matches_query(&"Alpha", "alph"));
        assert!(matches_query(&"Alpha".to_string(), "pha"));
        assert!(!matches_query(&"Alpha", "beta"));
    }
}
