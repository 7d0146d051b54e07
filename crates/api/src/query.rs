//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /employees/` (`?limit=&offset=&search=`).
///
/// Defaults and bounds are applied by `prozu_core::pagination::resolve_page`.
#[derive(Debug, Default, Deserialize)]
pub struct EmployeeListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// Case-insensitive substring of the employee name.
    pub search: Option<String>,
}
