//! Sample employees inserted into an empty store.
//!
//! Seeding goes through [`EmployeeStore::seed_with`], which claims the seed
//! marker and inserts the documents atomically. Concurrent first requests
//! (or a startup seed racing a lazy one) insert the set once, and a failed
//! attempt leaves the store empty so the next list can retry.

use prozu_core::employee::{validate_project_days, ProjectDays};
use prozu_core::error::CoreError;
use prozu_core::year_month::YearMonth;

use crate::models::employee::CreateEmployee;
use crate::store::{EmployeeStore, StoreError};

/// Names of the sample employees, in insertion order.
pub const SAMPLE_EMPLOYEE_NAMES: [&str; 10] = [
    "Paul Persch",
    "Maria Schmidt",
    "Lukas Weber",
    "Anna Fischer",
    "Jean-Paul Marat",
    "Jonas Becker",
    "Sophie Wagner",
    "Felix Hoffmann",
    "Lena Schulz",
    "Erik Lange",
];

/// Number of consecutive months of project days each sample employee gets.
pub const SAMPLE_MONTHS_PER_EMPLOYEE: i32 = 5;

/// First month of the sample project-day history.
const SAMPLE_FIRST_MONTH: (i32, u32) = (2014, 1);

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Build the sample documents. Every document passes domain validation.
pub fn sample_employees() -> Result<Vec<CreateEmployee>, CoreError> {
    let (year, month) = SAMPLE_FIRST_MONTH;
    let first_month = YearMonth::new(year, month)?;

    let mut employees = Vec::with_capacity(SAMPLE_EMPLOYEE_NAMES.len());
    for (index, name) in (0i32..).zip(SAMPLE_EMPLOYEE_NAMES) {
        let mut project_days = Vec::new();
        for offset in 0..SAMPLE_MONTHS_PER_EMPLOYEE {
            let days_count = (3 + index * 5 + offset * 7) % 23;
            project_days.push(ProjectDays::new(
                first_month.plus_months(offset)?,
                days_count,
            )?);
        }
        validate_project_days(&project_days)?;
        employees.push(CreateEmployee {
            name: name.to_string(),
            project_days,
        });
    }
    Ok(employees)
}

/// Insert the sample employees if the store holds none and nobody has
/// seeded it before. Returns `true` when this call inserted the data.
pub async fn seed_if_empty(store: &dyn EmployeeStore) -> Result<bool, SeedError> {
    if store.count_employees(None).await? > 0 {
        return Ok(false);
    }

    let employees = sample_employees()?;
    if !store.seed_with(&employees).await? {
        tracing::debug!("Sample data already seeded by another caller, skipping");
        return Ok(false);
    }
    tracing::info!(count = employees.len(), "Seeded sample employees");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use prozu_core::search::name_matches;

    use super::*;
    use crate::models::employee::Employee;
    use crate::store::MemoryEmployeeStore;

    /// Memory store whose first `seed_with` calls fail the way an aborted
    /// transaction does: nothing is written.
    struct FailingSeedStore {
        inner: MemoryEmployeeStore,
        failures_left: AtomicUsize,
    }

    impl FailingSeedStore {
        fn failing(times: usize) -> Self {
            Self {
                inner: MemoryEmployeeStore::new(),
                failures_left: AtomicUsize::new(times),
            }
        }
    }

    #[async_trait]
    impl EmployeeStore for FailingSeedStore {
        async fn list_employees(
            &self,
            limit: i64,
            offset: i64,
            search: Option<&str>,
        ) -> Result<Vec<Employee>, StoreError> {
            self.inner.list_employees(limit, offset, search).await
        }

        async fn count_employees(&self, search: Option<&str>) -> Result<i64, StoreError> {
            self.inner.count_employees(search).await
        }

        async fn get_employee(&self, id: &str) -> Result<Option<Employee>, StoreError> {
            self.inner.get_employee(id).await
        }

        async fn list_project_days(&self, id: &str) -> Result<Vec<ProjectDays>, StoreError> {
            self.inner.list_project_days(id).await
        }

        async fn create_employee(&self, input: &CreateEmployee) -> Result<Employee, StoreError> {
            self.inner.create_employee(input).await
        }

        async fn update_employee(&self, id: &str, name: &str) -> Result<(), StoreError> {
            self.inner.update_employee(id, name).await
        }

        async fn delete_employee(&self, id: &str) -> Result<(), StoreError> {
            self.inner.delete_employee(id).await
        }

        async fn seed_with(&self, employees: &[CreateEmployee]) -> Result<bool, StoreError> {
            let remaining = self.failures_left.load(Ordering::SeqCst);
            if remaining > 0 {
                self.failures_left.store(remaining - 1, Ordering::SeqCst);
                return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
            }
            self.inner.seed_with(employees).await
        }

        async fn ping(&self) -> Result<(), StoreError> {
            self.inner.ping().await
        }
    }

    #[test]
    fn sample_set_has_ten_employees_with_five_months_each() {
        let employees = sample_employees().unwrap();
        assert_eq!(employees.len(), 10);
        assert_eq!(employees[0].name, "Paul Persch");
        for employee in &employees {
            assert_eq!(employee.project_days.len(), 5);
            assert!(validate_project_days(&employee.project_days).is_ok());
        }
    }

    #[test]
    fn exactly_two_sample_names_contain_paul() {
        let count = SAMPLE_EMPLOYEE_NAMES
            .iter()
            .filter(|name| name_matches(name, "paul"))
            .count();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn seeds_empty_store_once() {
        let store = MemoryEmployeeStore::new();

        assert!(seed_if_empty(&store).await.unwrap());
        assert_eq!(store.count_employees(None).await.unwrap(), 10);

        assert!(!seed_if_empty(&store).await.unwrap());
        assert_eq!(store.count_employees(None).await.unwrap(), 10);
    }

    #[tokio::test]
    async fn does_not_seed_non_empty_store() {
        let store = MemoryEmployeeStore::new();
        store
            .create_employee(&CreateEmployee::named("Existing"))
            .await
            .unwrap();

        assert!(!seed_if_empty(&store).await.unwrap());
        assert_eq!(store.count_employees(None).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn does_not_reseed_after_store_is_emptied() {
        let store = MemoryEmployeeStore::new();
        seed_if_empty(&store).await.unwrap();
        for employee in store.list_employees(100, 0, None).await.unwrap() {
            store.delete_employee(&employee.id).await.unwrap();
        }

        assert!(!seed_if_empty(&store).await.unwrap());
        assert_eq!(store.count_employees(None).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn concurrent_seeding_inserts_one_set() {
        let store = Arc::new(MemoryEmployeeStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    let seeded = seed_if_empty(&*store).await.unwrap();
                    // Winner or not, the caller never sees a partial set.
                    assert_eq!(store.count_employees(None).await.unwrap(), 10);
                    seeded
                })
            })
            .collect();

        let mut seeded = 0;
        for handle in handles {
            if handle.await.unwrap() {
                seeded += 1;
            }
        }
        assert_eq!(seeded, 1);
        assert_eq!(store.count_employees(None).await.unwrap(), 10);
    }

    #[tokio::test]
    async fn failed_seed_leaves_store_empty_and_retry_succeeds() {
        let store = FailingSeedStore::failing(1);

        assert_matches!(seed_if_empty(&store).await, Err(SeedError::Store(_)));
        assert_eq!(store.count_employees(None).await.unwrap(), 0);

        assert!(seed_if_empty(&store).await.unwrap());
        assert_eq!(store.count_employees(None).await.unwrap(), 10);
        assert_eq!(store.count_employees(Some("paul")).await.unwrap(), 2);
    }
}
