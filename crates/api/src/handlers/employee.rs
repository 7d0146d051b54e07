//! Handlers for the `/employees` resource.
//!
//! Update and delete answer 200 whether or not the id existed: a 200 means
//! the operation was attempted, not that a record was there.

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderName, StatusCode};
use axum::Json;
use prozu_core::employee::validate_employee_name;
use prozu_core::error::CoreError;
use prozu_core::pagination::resolve_page;
use prozu_db::models::employee::CreateEmployee;
use prozu_db::seed::seed_if_empty;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::mapper;
use crate::middleware::request_base::RequestBase;
use crate::middleware::validated::{ApiJson, ApiQuery};
use crate::query::EmployeeListParams;
use crate::response::{EmployeeResponse, EmployeesResponse, ProjectDaysResponse};
use crate::state::AppState;

/// Request body for create and update.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeData {
    pub name: String,
}

impl EmployeeData {
    fn validated_name(self) -> Result<String, CoreError> {
        validate_employee_name(&self.name)?;
        Ok(self.name)
    }
}

/// GET /employees/
///
/// Seeds sample data first when the store holds no employees at all.
pub async fn list(
    State(state): State<AppState>,
    base: RequestBase,
    ApiQuery(params): ApiQuery<EmployeeListParams>,
) -> AppResult<Json<EmployeesResponse>> {
    let page = resolve_page(params.limit, params.offset)?;

    seed_if_empty(state.store.as_ref()).await?;

    let search = params.search.as_deref();
    let employees = state
        .store
        .list_employees(page.limit, page.offset, search)
        .await?;
    let total_count = state.store.count_employees(search).await?;

    Ok(Json(mapper::to_employees_response(
        &employees,
        page,
        total_count,
        params.search,
        &base.base_url,
    )))
}

/// GET /employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    base: RequestBase,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.store.get_employee(&id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id: id.clone(),
        })
    })?;
    Ok(Json(mapper::to_employee_response(&employee, &base.base_url)))
}

/// GET /employees/{id}/projectdays/
///
/// An unknown employee id yields an empty list.
pub async fn list_project_days(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<ProjectDaysResponse>>> {
    let project_days = state.store.list_project_days(&id).await?;
    Ok(Json(mapper::to_project_days_response(&project_days)))
}

/// POST /employees/
///
/// Responds 201 with a `Location` header and no body.
pub async fn create(
    State(state): State<AppState>,
    base: RequestBase,
    ApiJson(input): ApiJson<EmployeeData>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1])> {
    let name = input.validated_name()?;
    let employee = state
        .store
        .create_employee(&CreateEmployee::named(name))
        .await?;

    let location = base.child_url(&employee.id);
    tracing::info!(employee_id = %employee.id, %location, "Employee created");
    Ok((StatusCode::CREATED, [(LOCATION, location)]))
}

/// PUT /employees/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<EmployeeData>,
) -> AppResult<StatusCode> {
    let name = input.validated_name()?;
    state.store.update_employee(&id, &name).await?;
    Ok(StatusCode::OK)
}

/// DELETE /employees/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    state.store.delete_employee(&id).await?;
    Ok(StatusCode::OK)
}
