//! Filtering and pagination over in-memory record slices.

use crate::error::ListingError;
use crate::request::PageRequest;
use crate::result::PageResult;
use crate::search::{Searchable, matches_query};

/// Filters `records` by the request's query and returns the requested page.
///
/// A record is retained iff the query is empty or at least one of its
/// [`search_fields`](Searchable::search_fields), lower-cased, contains the
/// lower-cased query as a substring. Filtering is stable: retained records
/// keep their source order.
///
/// The page number is clamped into `[1, max(total_pages, 1)]` rather than
/// rejected, so a caller whose collection shrank (e.g. after a deletion)
/// self-corrects by re-invoking with its stale page number and adopting
/// [`current_page`](PageResult::current_page) from the result.
///
/// # Errors
///
/// Returns [`ListingError::InvalidPageSize`] if the request's page size is
/// zero.
pub fn paginate<'a, T: Searchable>(
    records: &'a [T],
    request: &PageRequest,
) -> Result<PageResult<&'a T>, ListingError> {
    let page_size = request.page_size();
    if page_size == 0 {
        return Err(ListingError::InvalidPageSize { page_size });
    }

    let filtered: Vec<&T> = if request.query().is_empty() {
        records.iter().collect()
    } else {
        let needle = request.query().to_lowercase();
        records
            .iter()
            .filter(|record| matches_query(record, &needle))
            .collect()
    };

    let total_items = filtered.len();
    let total_pages = total_items.div_ceil(page_size);
    let current_page = request.page().clamp(1, total_pages.max(1));

    let start = (current_page - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let items = if start < end {
        filtered[start..end].to_vec()
    } else {
        Vec::new()
    };

    Ok(PageResult::new(items, total_items, total_pages, current_page))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<&'static str> {
        vec!["alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf"]
    }

    #[test]
    fn single_page_holds_everything() {
        let records = records();
        let result = paginate(&records, &PageRequest::new(7)).unwrap();
        assert_eq!(result.items().len(), 7);
        assert_eq!(result.total_items(), 7);
        assert_eq!(result.total_pages(), 1);
        assert_eq!(result.current_page(), 1);
    }

    #[test]
    fn second_page_is_the_remainder() {
        let records = records();
        let result = paginate(&records, &PageRequest::new(5).with_page(2)).unwrap();
        assert_eq!(result.items(), &[&"foxtrot", &"golf"]);
        assert_eq!(result.total_pages(), 2);
        assert_eq!(result.current_page(), 2);
    }

    #[test]
    fn page_zero_clamps_to_one() {
        let records = records();
        let result = paginate(&records, &PageRequest::new(3).with_page(0)).unwrap();
        assert_eq!(result.current_page(), 1);
        assert_eq!(result.items(), &[&"alpha", &"bravo", &"charlie"]);
    }

    #[test]
    fn overlarge_page_clamps_down() {
        let records = records();
        let result = paginate(&records, &PageRequest::new(7).with_page(5)).unwrap();
        assert_eq!(result.current_page(), 1);
        assert_eq!(result.items().len(), 7);
    }

    #[test]
    fn filter_preserves_order() {
        let records = records();
        let result =
            paginate(&records, &PageRequest::new(7).with_query("o")).unwrap();
        assert_eq!(
            result.items(),
            &[&"bravo", &"echo", &"foxtrot", &"golf"]
        );
    }

    #[test]
    fn filter_is_case_insensitive() {
        let records = records();
        let result =
            paginate(&records, &PageRequest::new(7).with_query("ALPHA")).unwrap();
        assert_eq!(result.items(), &[&"alpha"]);
    }

    #[test]
    fn no_match_yields_empty_page_one() {
        let records = records();
        let result = paginate(
            &records,
            &PageRequest::new(7).with_query("zulu").with_page(3),
        )
        .unwrap();
        assert!(result.items().is_empty());
        assert_eq!(result.total_items(), 0);
        assert_eq!(result.total_pages(), 0);
        assert_eq!(result.current_page(), 1);
    }

    #[test]
    fn zero_page_size_rejected() {
        let records = records();
        assert_eq!(
            paginate(&records, &PageRequest::new(0)).unwrap_err(),
            ListingError::InvalidPageSize { page_size: 0 }
        );
    }

    #[test]
    fn empty_records() {
        let records: Vec<&str> = Vec::new();
        let result = paginate(&records, &PageRequest::new(7)).unwrap();
        assert!(result.items().is_empty());
        assert_eq!(result.total_pages(), 0);
        assert_eq!(result.current_page(), 1);
    }

    #[test]
    fn page_length_invariant() {
        let records = records();
        for page_size in 1..=8 {
            let total_pages = records.len().div_ceil(page_size);
            for page in 1..=total_pages {
                let result = paginate(
                    &records,
                    &PageRequest::new(page_size).with_page(page),
                )
                .unwrap();
                let expected = page_size.min(records.len() - (page - 1) * page_size);
                assert_eq!(
                    result.items().len(),
                    expected,
                    "page_size={page_size} page={page}"
                );
            }
        }
    }
}
