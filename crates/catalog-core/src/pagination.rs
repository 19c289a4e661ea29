//! # Pagination Engine
//!
//! Computes a bounded window over an ordered collection.
//!
//! ## Window Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  N = 19 records, limit = 5                                              │
//! │                                                                         │
//! │  index:  0 ─────── 5 ─────── 10 ─────── 15 ──── 19                      │
//! │          │ page 1  │ page 2  │  page 3  │ page 4 │                      │
//! │          │ 5 items │ 5 items │  5 items │ 4 items│                      │
//! │                                                                         │
//! │  offset = (page - 1) × limit                                            │
//! │  offset > N             → PageOutOfRange (page 5: offset 20 > 19)       │
//! │  len    = min(limit, N - offset)                                        │
//! │  total_pages = ceil(N / limit)                                          │
//! │                                                                         │
//! │  N = 20, limit = 5, page 4: offset 15, len = min(5, 5) = 5              │
//! │  (a `N mod limit` length would return 0 here)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::{DEFAULT_PAGE, DEFAULT_PAGE_LIMIT};

// =============================================================================
// Page Request
// =============================================================================

/// A validated page request: both fields are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    limit: usize,
}

impl PageRequest {
    /// Creates a request, replacing zero values with the defaults.
    pub fn new(page: usize, limit: usize) -> Self {
        PageRequest {
            page: if page > 0 { page } else { DEFAULT_PAGE },
            limit: if limit > 0 { limit } else { DEFAULT_PAGE_LIMIT },
        }
    }

    /// Parses raw query-string values.
    ///
    /// Missing, non-numeric, zero and negative inputs are silently replaced
    /// by the defaults (`page = 1`, `limit = default_limit`). They are never
    /// rejected.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::pagination::PageRequest;
    ///
    /// let req = PageRequest::from_query(Some("2"), Some("abc"), 5);
    /// assert_eq!((req.page(), req.limit()), (2, 5));
    ///
    /// let req = PageRequest::from_query(Some("-1"), Some("0"), 5);
    /// assert_eq!((req.page(), req.limit()), (1, 5));
    /// ```
    pub fn from_query(page: Option<&str>, limit: Option<&str>, default_limit: usize) -> Self {
        let default_limit = if default_limit > 0 {
            default_limit
        } else {
            DEFAULT_PAGE_LIMIT
        };

        PageRequest {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(limit).unwrap_or(default_limit),
        }
    }

    /// 1-based page number.
    #[inline]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Maximum number of items on the page.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Index of the first item on the page. Saturates instead of
    /// overflowing, so absurd page numbers land out of range.
    #[inline]
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Computes the index range of this page over `total` items.
    ///
    /// ## Returns
    /// * `Ok(range)` - possibly empty when `offset == total`
    /// * `Err(CoreError::PageOutOfRange)` - offset is past the end
    pub fn window(&self, total: usize) -> CoreResult<Range<usize>> {
        let offset = self.offset();
        if offset > total {
            return Err(CoreError::PageOutOfRange {
                page: self.page,
                limit: self.limit,
                total,
            });
        }

        let len = self.limit.min(total - offset);
        Ok(offset..offset + len)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest::new(DEFAULT_PAGE, DEFAULT_PAGE_LIMIT)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .and_then(|n| usize::try_from(n).ok())
}

/// Number of pages needed for `total` items, `ceil(total / limit)`.
#[inline]
pub fn total_pages(total: usize, limit: usize) -> usize {
    total.div_ceil(limit.max(1))
}

// =============================================================================
// Page
// =============================================================================

/// One window of results plus summary metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The requested 1-based page number.
    pub page: usize,

    /// Number of items in `values`.
    pub total_returned_data: usize,

    /// Total number of items in the collection.
    pub total_length: usize,

    /// `ceil(total_length / limit)`.
    pub total_pages: usize,

    pub values: Vec<T>,
}

impl<T> Page<T> {
    /// Converts every item, keeping the metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            page: self.page,
            total_returned_data: self.total_returned_data,
            total_length: self.total_length,
            total_pages: self.total_pages,
            values: self.values.into_iter().map(f).collect(),
        }
    }
}

/// Slices `items` (in their existing order) according to `request`.
///
/// ## Example
/// ```rust
/// use catalog_core::pagination::{paginate, PageRequest};
///
/// let items: Vec<u32> = (1..=19).collect();
/// let page = paginate(&items, PageRequest::new(4, 5)).unwrap();
/// assert_eq!(page.values, vec![16, 17, 18, 19]);
/// assert_eq!(page.total_pages, 4);
///
/// assert!(paginate(&items, PageRequest::new(5, 5)).is_err());
/// ```
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> CoreResult<Page<T>> {
    let total = items.len();
    let window = request.window(total)?;
    let values = items[window].to_vec();

    Ok(Page {
        page: request.page(),
        total_returned_data: values.len(),
        total_length: total,
        total_pages: total_pages(total, request.limit()),
        values,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_nineteen_records_limit_five() {
        let data = items(19);

        for page in 1..=3 {
            let result = paginate(&data, PageRequest::new(page, 5)).unwrap();
            assert_eq!(result.total_returned_data, 5);
            assert_eq!(result.total_pages, 4);
            assert_eq!(result.total_length, 19);
        }

        let last = paginate(&data, PageRequest::new(4, 5)).unwrap();
        assert_eq!(last.total_returned_data, 4);
        assert_eq!(last.values, vec![16, 17, 18, 19]);
    }

    #[test]
    fn test_page_past_the_end_is_out_of_range() {
        let err = paginate(&items(19), PageRequest::new(5, 5)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::PageOutOfRange {
                page: 5,
                limit: 5,
                total: 19
            }
        ));
    }

    #[test]
    fn test_exact_multiple_last_page_is_full() {
        // Regression: a `total % limit` length would give 0 items here
        let result = paginate(&items(20), PageRequest::new(4, 5)).unwrap();
        assert_eq!(result.total_returned_data, 5);
        assert_eq!(result.values, vec![16, 17, 18, 19, 20]);
        assert_eq!(result.total_pages, 4);
    }

    #[test]
    fn test_offset_equal_to_total_is_empty_not_error() {
        let result = paginate(&items(20), PageRequest::new(5, 5)).unwrap();
        assert!(result.values.is_empty());
        assert_eq!(result.total_returned_data, 0);

        let empty: Vec<usize> = Vec::new();
        let result = paginate(&empty, PageRequest::default()).unwrap();
        assert_eq!(result.total_pages, 0);
        assert!(result.values.is_empty());
    }

    #[test]
    fn test_limit_larger_than_total() {
        let result = paginate(&items(3), PageRequest::new(1, 50)).unwrap();
        assert_eq!(result.values, vec![1, 2, 3]);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn test_huge_page_number_saturates_to_out_of_range() {
        let request = PageRequest::new(usize::MAX, usize::MAX);
        assert!(request.window(19).is_err());
    }

    #[test]
    fn test_from_query_defaults() {
        assert_eq!(PageRequest::from_query(None, None, 5), PageRequest::new(1, 5));
        assert_eq!(
            PageRequest::from_query(Some("0"), Some("-3"), 5),
            PageRequest::new(1, 5)
        );
        assert_eq!(
            PageRequest::from_query(Some("x"), Some("2.5"), 5),
            PageRequest::new(1, 5)
        );
        assert_eq!(
            PageRequest::from_query(Some("3"), Some("10"), 5),
            PageRequest::new(3, 10)
        );
        assert_eq!(PageRequest::from_query(None, None, 8).limit(), 8);
    }

    #[test]
    fn test_new_replaces_zero_with_defaults() {
        let request = PageRequest::new(0, 0);
        assert_eq!(request.page(), DEFAULT_PAGE);
        assert_eq!(request.limit(), DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn test_page_map_keeps_metadata() {
        let page = paginate(&items(7), PageRequest::new(2, 3)).unwrap();
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.values, vec!["4", "5", "6"]);
        assert_eq!(mapped.page, 2);
        assert_eq!(mapped.total_pages, 3);
        assert_eq!(mapped.total_length, 7);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = paginate(&items(2), PageRequest::new(1, 5)).unwrap();
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalReturnedData"], 2);
        assert_eq!(json["totalLength"], 2);
        assert_eq!(json["totalPages"], 1);
    }
}
