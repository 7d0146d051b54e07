//! Pagination defaults and validation for the employee collection.

use crate::error::CoreError;

/// Page size used when the client does not pass `limit`.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Largest page size a client may request.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Offset used when the client does not pass `offset`.
pub const DEFAULT_PAGE_OFFSET: i64 = 0;

/// A validated `limit`/`offset` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

/// Apply defaults and reject negative or oversized values.
pub fn resolve_page(limit: Option<i64>, offset: Option<i64>) -> Result<Page, CoreError> {
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);
    let offset = offset.unwrap_or(DEFAULT_PAGE_OFFSET);

    if !(0..=MAX_PAGE_LIMIT).contains(&limit) {
        return Err(CoreError::Validation(format!(
            "limit must be between 0 and {MAX_PAGE_LIMIT}, got {limit}"
        )));
    }
    if offset < 0 {
        return Err(CoreError::Validation(format!(
            "offset must be >= 0, got {offset}"
        )));
    }
    Ok(Page { limit, offset })
}
