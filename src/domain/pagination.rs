//! Page metadata for paginated listings.

use serde::Serialize;

/// Summary of a page within a result set.
///
/// An empty result set still has one (empty) page, so `total_pages` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_count: i64,
    pub current_page: i64,
    pub per_page: i64,
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PageMeta {
    /// Computes page metadata from the total number of items, the requested
    /// page (1-indexed) and the page size.
    ///
    /// `limit` below 1 is treated as 1.
    pub fn new(total_count: i64, page: i64, limit: i64) -> Self {
        let limit = limit.max(1);
        let total_count = total_count.max(0);
        let total_pages = ((total_count + limit - 1) / limit).max(1);

        Self {
            total_count,
            current_page: page,
            per_page: limit,
            total_pages,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        }
    }
}

/// One page of items with its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_of_three_pages() {
        let meta = PageMeta::new(9, 1, 3);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next_page);
        assert!(!meta.has_previous_page);
    }

    #[test]
    fn test_middle_page() {
        let meta = PageMeta::new(9, 2, 3);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next_page);
        assert!(meta.has_previous_page);
    }

    #[test]
    fn test_last_page() {
        let meta = PageMeta::new(9, 3, 3);
        assert_eq!(meta.total_pages, 3);
        assert!(!meta.has_next_page);
        assert!(meta.has_previous_page);
    }

    #[test]
    fn test_partial_last_page_rounds_up() {
        let meta = PageMeta::new(10, 1, 3);
        assert_eq!(meta.total_pages, 4);
    }

    #[test]
    fn test_empty_result_has_single_page() {
        let meta = PageMeta::new(0, 1, 10);
        assert_eq!(meta.total_count, 0);
        assert_eq!(meta.total_pages, 1);
        assert!(!meta.has_next_page);
        assert!(!meta.has_previous_page);
    }

    #[test]
    fn test_page_past_the_end() {
        let meta = PageMeta::new(5, 4, 5);
        assert_eq!(meta.total_pages, 1);
        assert!(!meta.has_next_page);
        assert!(meta.has_previous_page);
    }

    #[test]
    fn test_meta_fields_echo_request() {
        let meta = PageMeta::new(3, 2, 1);
        assert_eq!(
            meta,
            PageMeta {
                total_count: 3,
                current_page: 2,
                per_page: 1,
                total_pages: 3,
                has_next_page: true,
                has_previous_page: true,
            }
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(PageMeta::new(9, 1, 3)).unwrap();
        assert_eq!(json["totalCount"], 9);
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["perPage"], 3);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["hasNextPage"], true);
        assert_eq!(json["hasPreviousPage"], false);
    }
}
