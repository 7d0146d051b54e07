//! Route definitions for the `/employees` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::employee;
use crate::state::AppState;

/// Base path of the employee collection.
pub const EMPLOYEES_PATH: &str = "/employees";

/// Employee routes. Collection and sub-collection paths answer with and
/// without a trailing slash.
///
/// ```text
/// GET    /employees/                     -> list
/// POST   /employees/                     -> create
/// GET    /employees/{id}                 -> get_by_id
/// PUT    /employees/{id}                 -> update
/// DELETE /employees/{id}                 -> delete
/// GET    /employees/{id}/projectdays/    -> list_project_days
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/employees", get(employee::list).post(employee::create))
        .route("/employees/", get(employee::list).post(employee::create))
        .route(
            "/employees/{id}",
            get(employee::get_by_id)
                .put(employee::update)
                .delete(employee::delete),
        )
        .route(
            "/employees/{id}/projectdays",
            get(employee::list_project_days),
        )
        .route(
            "/employees/{id}/projectdays/",
            get(employee::list_project_days),
        )
}
