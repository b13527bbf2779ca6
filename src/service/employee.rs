use crate::error::{HrmsError, is_unique_violation};
use crate::model::employee::Employee;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::MySqlPool;
use tracing::info;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Display form of an employee number: EMP001, EMP002, ... EMP1000.
fn format_employee_id(n: u64) -> String {
    format!("EMP{:03}", n)
}

/// Register a new employee under the next sequential `EMPnnn` identifier.
///
/// Numbers come from the `employee_id_seq` counter row, bumped inside the
/// same transaction as the insert; concurrent registrations serialize on
/// its row lock, and deleted numbers are never reused. An email collision
/// surfaces as the unique-index violation on the insert itself.
pub async fn register(
    pool: &MySqlPool,
    full_name: &str,
    email: &str,
    department: &str,
) -> Result<Employee, HrmsError> {
    let full_name = full_name.trim();
    let email = email.trim();
    let department = department.trim();

    if full_name.is_empty() {
        return Err(HrmsError::Validation("full_name must not be empty".into()));
    }
    if department.is_empty() {
        return Err(HrmsError::Validation("department must not be empty".into()));
    }
    if !is_valid_email(email) {
        return Err(HrmsError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }

    let mut tx = pool.begin().await?;

    sqlx::query("UPDATE employee_id_seq SET next_val = next_val + 1")
        .execute(&mut *tx)
        .await?;
    let next: u64 = sqlx::query_scalar("SELECT next_val FROM employee_id_seq")
        .fetch_one(&mut *tx)
        .await?;

    let employee = Employee {
        employee_id: format_employee_id(next),
        full_name: full_name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        created_at: Utc::now().naive_utc(),
    };

    let inserted = sqlx::query(
        r#"
        INSERT INTO employees (employee_id, full_name, email, department, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&employee.employee_id)
    .bind(&employee.full_name)
    .bind(&employee.email)
    .bind(&employee.department)
    .bind(employee.created_at)
    .execute(&mut *tx)
    .await;

    if let Err(e) = inserted {
        // rolls back the sequence bump together with the failed insert
        if is_unique_violation(&e) {
            return Err(HrmsError::DuplicateEmail(employee.email));
        }
        return Err(e.into());
    }

    tx.commit().await?;

    info!(employee_id = %employee.employee_id, "employee registered");
    Ok(employee)
}

/// All employees, most recently created first.
pub async fn list_all(pool: &MySqlPool) -> Result<Vec<Employee>, HrmsError> {
    let employees = sqlx::query_as::<_, Employee>(
        r#"
        SELECT employee_id, full_name, email, department, created_at
        FROM employees
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

/// Exact-match lookup; absence is `None`, not an error.
pub async fn find_by_id(pool: &MySqlPool, employee_id: &str) -> Result<Option<Employee>, HrmsError> {
    let employee = sqlx::query_as::<_, Employee>(
        r#"
        SELECT employee_id, full_name, email, department, created_at
        FROM employees
        WHERE employee_id = ?
        "#,
    )
    .bind(employee_id)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

/// Delete an employee and every attendance row referencing them, as one
/// transaction. The store-level ON DELETE CASCADE would cover the
/// attendance rows on its own, but the delete stays explicit here.
pub async fn delete(pool: &MySqlPool, employee_id: &str) -> Result<(), HrmsError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM attendance WHERE employee_id = ?")
        .bind(employee_id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM employees WHERE employee_id = ?")
        .bind(employee_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        // dropping the transaction rolls back the attendance delete
        return Err(HrmsError::EmployeeNotFound(employee_id.to_string()));
    }

    tx.commit().await?;

    info!(employee_id, "employee deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_ids_are_zero_padded_to_three_digits() {
        assert_eq!(format_employee_id(1), "EMP001");
        assert_eq!(format_employee_id(12), "EMP012");
        assert_eq!(format_employee_id(123), "EMP123");
    }

    #[test]
    fn employee_ids_grow_past_three_digits() {
        assert_eq!(format_employee_id(1000), "EMP1000");
    }

    #[test]
    fn accepts_plausible_email_addresses() {
        assert!(is_valid_email("jane@co.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_email_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("spaces in@email.com"));
        assert!(!is_valid_email("missing@tld"));
    }
}
