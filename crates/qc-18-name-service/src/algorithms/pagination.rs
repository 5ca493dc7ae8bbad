//! # Pagination
//!
//! Deterministic slicing of an ordered key sequence into 1-indexed pages.
//!
//! ```text
//! first = (page - 1) * per_page
//! last  = min(first + per_page - 1, total - 1)
//! page  = keys[first ..= last]
//! ```
//!
//! An empty sequence yields an empty page for any page number. A non-empty
//! sequence whose `first` index is at or past the end is `OutOfRange`.

use crate::domain::{NameServiceError, PageRequest};
use std::ops::RangeInclusive;

/// Inclusive index range of a page within a key sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageBounds {
    pub first: usize,
    pub last: usize,
}

impl PageBounds {
    /// Number of keys covered; always at least 1.
    pub fn count(&self) -> usize {
        self.last - self.first + 1
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }
}

/// Compute the bounds of `page` over `total` keys.
///
/// Returns `Ok(None)` when there are no keys at all. `page` and `per_page`
/// must be at least 1; zero values are rejected as `InvalidRequest`.
pub fn page_bounds(
    total: usize,
    page: usize,
    per_page: usize,
) -> Result<Option<PageBounds>, NameServiceError> {
    if page == 0 || per_page == 0 {
        return Err(NameServiceError::InvalidRequest(format!(
            "page {} and results per page {} must be positive",
            page, per_page
        )));
    }
    if total == 0 {
        return Ok(None);
    }

    let out_of_range = || NameServiceError::OutOfRange {
        page,
        per_page,
        total,
    };

    let first = (page - 1).checked_mul(per_page).ok_or_else(out_of_range)?;
    if total <= first {
        return Err(out_of_range());
    }

    // first < total, so first + per_page - 1 only saturates past usize::MAX
    let last = first.saturating_add(per_page - 1).min(total - 1);
    Ok(Some(PageBounds { first, last }))
}

/// Select the keys visible on the requested page.
pub fn paginate<'a, K>(keys: &'a [K], request: &PageRequest) -> Result<&'a [K], NameServiceError> {
    match page_bounds(keys.len(), request.page, request.results_per_page)? {
        Some(bounds) => Ok(&keys[bounds.range()]),
        None => Ok(&[]),
    }
}
