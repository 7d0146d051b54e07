//! The employee store port.
//!
//! Handlers only see [`EmployeeStore`]. Absence is never an error here:
//! lookups return `None` or an empty list, and mutations on unknown ids are
//! silent no-ops.

use async_trait::async_trait;
use prozu_core::employee::ProjectDays;

use crate::models::employee::{CreateEmployee, Employee};

mod memory;
mod postgres;

pub use memory::MemoryEmployeeStore;
pub use postgres::PgEmployeeStore;

/// Name of the marker claimed by the sample-data seeder.
pub const EMPLOYEE_SEED_MARKER: &str = "employees";

/// Failures surfaced by a store adapter.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence operations over employee documents.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// One page of employees in insertion order. `search` keeps only names
    /// containing the term, ignoring case.
    async fn list_employees(
        &self,
        limit: i64,
        offset: i64,
        search: Option<&str>,
    ) -> Result<Vec<Employee>, StoreError>;

    /// Number of employees matching `search`, ignoring pagination.
    async fn count_employees(&self, search: Option<&str>) -> Result<i64, StoreError>;

    async fn get_employee(&self, id: &str) -> Result<Option<Employee>, StoreError>;

    /// Embedded project days; empty when the employee does not exist.
    async fn list_project_days(&self, employee_id: &str) -> Result<Vec<ProjectDays>, StoreError>;

    /// Persist a new document and return it with its assigned id.
    async fn create_employee(&self, input: &CreateEmployee) -> Result<Employee, StoreError>;

    async fn update_employee(&self, id: &str, name: &str) -> Result<(), StoreError>;

    async fn delete_employee(&self, id: &str) -> Result<(), StoreError>;

    /// Insert `employees` as the one-time sample data. The seed marker and
    /// every insert commit together or not at all; only the first successful
    /// caller over the lifetime of the store gets `true`. A failed call
    /// leaves neither the marker nor any of the documents behind.
    async fn seed_with(&self, employees: &[CreateEmployee]) -> Result<bool, StoreError>;

    /// Cheap reachability probe.
    async fn ping(&self) -> Result<(), StoreError>;
}
