use async_trait::async_trait;
use prozu_core::employee::ProjectDays;

use super::{EmployeeStore, StoreError, EMPLOYEE_SEED_MARKER};
use crate::models::employee::{CreateEmployee, Employee};
use crate::repositories::EmployeeRepo;
use crate::DbPool;

/// [`EmployeeStore`] backed by the `employees` table in PostgreSQL.
#[derive(Clone)]
pub struct PgEmployeeStore {
    pool: DbPool,
}

impl PgEmployeeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn list_employees(
        &self,
        limit: i64,
        offset: i64,
        search: Option<&str>,
    ) -> Result<Vec<Employee>, StoreError> {
        Ok(EmployeeRepo::list(&self.pool, limit, offset, search).await?)
    }

    async fn count_employees(&self, search: Option<&str>) -> Result<i64, StoreError> {
        Ok(EmployeeRepo::count(&self.pool, search).await?)
    }

    async fn get_employee(&self, id: &str) -> Result<Option<Employee>, StoreError> {
        Ok(EmployeeRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_project_days(&self, employee_id: &str) -> Result<Vec<ProjectDays>, StoreError> {
        Ok(EmployeeRepo::list_project_days(&self.pool, employee_id).await?)
    }

    async fn create_employee(&self, input: &CreateEmployee) -> Result<Employee, StoreError> {
        Ok(EmployeeRepo::create(&self.pool, input).await?)
    }

    async fn update_employee(&self, id: &str, name: &str) -> Result<(), StoreError> {
        let updated = EmployeeRepo::update_name(&self.pool, id, name).await?;
        if !updated {
            tracing::debug!(employee_id = %id, "Rename of unknown employee ignored");
        }
        Ok(())
    }

    async fn delete_employee(&self, id: &str) -> Result<(), StoreError> {
        let deleted = EmployeeRepo::delete(&self.pool, id).await?;
        if !deleted {
            tracing::debug!(employee_id = %id, "Delete of unknown employee ignored");
        }
        Ok(())
    }

    async fn seed_with(&self, employees: &[CreateEmployee]) -> Result<bool, StoreError> {
        Ok(EmployeeRepo::seed(&self.pool, EMPLOYEE_SEED_MARKER, employees).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
