use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::model::employee::Employee;
use crate::store::ledger;

/// All employees, newest first. Capped at 1000 rows.
pub async fn list_employees(pool: &SqlitePool) -> Result<Vec<Employee>, ApiError> {
    let employees = sqlx::query_as::<_, Employee>(
        r#"
        SELECT employee_id, full_name, email, department, created_at
        FROM employees
        ORDER BY created_at DESC
        LIMIT 1000
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(employees)
}

pub async fn employee_exists(pool: &SqlitePool, employee_id: &str) -> Result<bool, ApiError> {
    let found: Option<i64> =
        sqlx::query_scalar("SELECT 1 FROM employees WHERE employee_id = ?")
            .bind(employee_id)
            .fetch_optional(pool)
            .await?;

    Ok(found.is_some())
}

/// Inserts a new employee, relying on the table's unique constraints for
/// atomicity under concurrent creates. On a unique violation the store
/// re-checks which field collided so the conflict names the right one;
/// `employee_id` is checked first.
pub async fn create_employee(
    pool: &SqlitePool,
    employee_id: &str,
    full_name: &str,
    email: &str,
    department: &str,
) -> Result<Employee, ApiError> {
    let created_at = Utc::now().naive_utc();

    let result = sqlx::query(
        r#"
        INSERT INTO employees (employee_id, full_name, email, department, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(employee_id)
    .bind(full_name)
    .bind(email)
    .bind(department)
    .bind(created_at)
    .execute(pool)
    .await;

    match result {
        Ok(_) => {
            info!(employee_id, "Employee created");
            Ok(Employee {
                employee_id: employee_id.to_string(),
                full_name: full_name.to_string(),
                email: email.to_string(),
                department: department.to_string(),
                created_at,
            })
        }
        Err(e) => {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return if employee_exists(pool, employee_id).await? {
                        Err(ApiError::DuplicateEmployeeId(employee_id.to_string()))
                    } else {
                        Err(ApiError::DuplicateEmail(email.to_string()))
                    };
                }
            }
            Err(e.into())
        }
    }
}

/// Removes the employee row, then cascades into the attendance table.
///
/// The two deletes are ordered but not one transaction; a crash in between
/// leaves orphan attendance rows. Known limitation, see DESIGN.md.
pub async fn delete_employee(pool: &SqlitePool, employee_id: &str) -> Result<(), ApiError> {
    let result = sqlx::query("DELETE FROM employees WHERE employee_id = ?")
        .bind(employee_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::EmployeeNotFound(employee_id.to_string()));
    }

    let removed = ledger::cascade_delete(pool, employee_id).await?;
    debug!(employee_id, removed, "Employee deleted with attendance cascade");

    Ok(())
}
