//! Repository for the `employees` and `seed_markers` tables.

use prozu_core::employee::ProjectDays;
use prozu_core::search::contains_pattern;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::employee::{CreateEmployee, Employee, EmployeeRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, project_days, created_at";

/// Optional case-insensitive substring filter on `name`. `$1` is a prepared
/// `ILIKE` pattern or NULL for no filter.
const NAME_FILTER: &str = "($1::text IS NULL OR name ILIKE $1)";

/// Provides CRUD operations for employee documents.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee with a freshly assigned id, returning the stored row.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (id, name, project_days)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(Uuid::now_v7().to_string())
            .bind(&input.name)
            .bind(Json(&input.project_days))
            .fetch_one(pool)
            .await
            .map(Employee::from)
    }

    /// Find an employee by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        let row = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Employee::from))
    }

    /// List one page of employees in insertion order, optionally filtered by
    /// a name substring.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
        search: Option<&str>,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM employees
             WHERE {NAME_FILTER}
             ORDER BY seq
             LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(search.map(contains_pattern))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    /// Count employees matching the same filter as [`EmployeeRepo::list`].
    pub async fn count(pool: &PgPool, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM employees WHERE {NAME_FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(search.map(contains_pattern))
            .fetch_one(pool)
            .await
    }

    /// The embedded project days of an employee; empty when the id is unknown.
    pub async fn list_project_days(
        pool: &PgPool,
        id: &str,
    ) -> Result<Vec<ProjectDays>, sqlx::Error> {
        let days = sqlx::query_scalar::<_, Json<Vec<ProjectDays>>>(
            "SELECT project_days FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(days.map(|json| json.0).unwrap_or_default())
    }

    /// Replace the name of an employee. Returns `true` if a row was updated.
    pub async fn update_name(pool: &PgPool, id: &str, name: &str) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE employees SET name = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(name)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an employee and its embedded project days. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Claim the named seed marker and insert `employees` in one
    /// transaction. Returns `false` without inserting anything when the
    /// marker already exists.
    ///
    /// A concurrent caller blocks on the marker's primary key until this
    /// transaction ends, so it sees either no sample data or all of it.
    pub async fn seed(
        pool: &PgPool,
        marker: &str,
        employees: &[CreateEmployee],
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let claim = sqlx::query(
            "INSERT INTO seed_markers (name) VALUES ($1) ON CONFLICT (name) DO NOTHING",
        )
        .bind(marker)
        .execute(&mut *tx)
        .await?;
        if claim.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        for employee in employees {
            sqlx::query("INSERT INTO employees (id, name, project_days) VALUES ($1, $2, $3)")
                .bind(Uuid::now_v7().to_string())
                .bind(&employee.name)
                .bind(Json(&employee.project_days))
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(true)
    }
}
