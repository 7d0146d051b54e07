use async_trait::async_trait;
use chrono::Utc;
use prozu_core::employee::ProjectDays;
use prozu_core::search::name_matches;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{EmployeeStore, StoreError};
use crate::models::employee::{CreateEmployee, Employee};

#[derive(Default)]
struct MemoryState {
    /// Kept in insertion order.
    employees: Vec<Employee>,
    seed_claimed: bool,
}

/// Process-local [`EmployeeStore`] used for development and tests.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryEmployeeStore {
    state: RwLock<MemoryState>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matching<'a>(
    employees: &'a [Employee],
    search: Option<&'a str>,
) -> impl Iterator<Item = &'a Employee> + 'a {
    employees
        .iter()
        .filter(move |e| search.map_or(true, |term| name_matches(&e.name, term)))
}

fn new_employee(input: &CreateEmployee) -> Employee {
    Employee {
        id: Uuid::now_v7().to_string(),
        name: input.name.clone(),
        project_days: input.project_days.clone(),
        created_at: Utc::now(),
    }
}

fn to_index(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn list_employees(
        &self,
        limit: i64,
        offset: i64,
        search: Option<&str>,
    ) -> Result<Vec<Employee>, StoreError> {
        let state = self.state.read().await;
        Ok(matching(&state.employees, search)
            .skip(to_index(offset))
            .take(to_index(limit))
            .cloned()
            .collect())
    }

    async fn count_employees(&self, search: Option<&str>) -> Result<i64, StoreError> {
        let state = self.state.read().await;
        let count = matching(&state.employees, search).count();
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }

    async fn get_employee(&self, id: &str) -> Result<Option<Employee>, StoreError> {
        let state = self.state.read().await;
        Ok(state.employees.iter().find(|e| e.id == id).cloned())
    }

    async fn list_project_days(&self, employee_id: &str) -> Result<Vec<ProjectDays>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .employees
            .iter()
            .find(|e| e.id == employee_id)
            .map(|e| e.project_days.clone())
            .unwrap_or_default())
    }

    async fn create_employee(&self, input: &CreateEmployee) -> Result<Employee, StoreError> {
        let employee = new_employee(input);
        self.state.write().await.employees.push(employee.clone());
        Ok(employee)
    }

    async fn update_employee(&self, id: &str, name: &str) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        match state.employees.iter_mut().find(|e| e.id == id) {
            Some(employee) => employee.name = name.to_string(),
            None => tracing::debug!(employee_id = %id, "Rename of unknown employee ignored"),
        }
        Ok(())
    }

    async fn delete_employee(&self, id: &str) -> Result<(), StoreError> {
        self.state.write().await.employees.retain(|e| e.id != id);
        Ok(())
    }

    async fn seed_with(&self, employees: &[CreateEmployee]) -> Result<bool, StoreError> {
        // Marker and documents change under one write guard, so readers see
        // either none or all of the sample set.
        let mut state = self.state.write().await;
        if state.seed_claimed {
            return Ok(false);
        }
        state.seed_claimed = true;
        state.employees.extend(employees.iter().map(new_employee));
        Ok(true)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
