//! Entity → response mapping.
//!
//! Pure functions: no store access, no request state. The caller supplies
//! the base address used for absolute links.

use prozu_core::employee::ProjectDays;
use prozu_core::pagination::Page;
use prozu_db::models::employee::Employee;

use crate::response::{EmployeeResponse, EmployeesResponse, Link, ProjectDaysResponse};
use crate::routes::employee::EMPLOYEES_PATH;

/// Absolute address of the employee collection, with trailing slash.
pub fn employees_url(base_url: &str) -> String {
    format!("{base_url}{EMPLOYEES_PATH}/")
}

/// Absolute address of a single employee.
pub fn employee_url(base_url: &str, id: &str) -> String {
    format!("{base_url}{EMPLOYEES_PATH}/{id}")
}

pub fn to_employee_response(employee: &Employee, base_url: &str) -> EmployeeResponse {
    EmployeeResponse {
        id: employee.id.clone(),
        name: employee.name.clone(),
        links: vec![Link::self_link(employee_url(base_url, &employee.id))],
    }
}

pub fn to_employees_response(
    employees: &[Employee],
    page: Page,
    total_count: i64,
    search: Option<String>,
    base_url: &str,
) -> EmployeesResponse {
    EmployeesResponse {
        limit: page.limit,
        offset: page.offset,
        total_count,
        search,
        items: employees
            .iter()
            .map(|employee| to_employee_response(employee, base_url))
            .collect(),
        links: vec![Link::self_link(employees_url(base_url))],
    }
}

pub fn to_project_days_response(project_days: &[ProjectDays]) -> Vec<ProjectDaysResponse> {
    project_days
        .iter()
        .map(|days| ProjectDaysResponse {
            month: days.month,
            days_count: days.days_count,
        })
        .collect()
}
