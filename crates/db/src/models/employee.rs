//! Employee entity model and DTOs.

use prozu_core::employee::ProjectDays;
use prozu_core::types::{EmployeeId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// An employee document with its embedded project days.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub project_days: Vec<ProjectDays>,
    pub created_at: Timestamp,
}

/// A row from the `employees` table.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRow {
    pub id: String,
    pub name: String,
    pub project_days: Json<Vec<ProjectDays>>,
    pub created_at: Timestamp,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            project_days: row.project_days.0,
            created_at: row.created_at,
        }
    }
}

/// DTO for inserting a new employee document.
///
/// The HTTP create path always passes an empty `project_days`; the seeding
/// routine inserts complete documents.
#[derive(Debug, Clone)]
pub struct CreateEmployee {
    pub name: String,
    pub project_days: Vec<ProjectDays>,
}

impl CreateEmployee {
    /// A new employee with no project days.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project_days: Vec::new(),
        }
    }
}
