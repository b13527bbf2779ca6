use crate::error::HrmsError;
use crate::model::attendance::{Attendance, AttendanceStatus};
use crate::service::employee;
use chrono::{NaiveDate, Utc};
use sqlx::MySqlPool;
use tracing::info;
use uuid::Uuid;

fn new_attendance_id() -> String {
    format!("att_{}", &Uuid::new_v4().to_simple().to_string()[..12])
}

/// Mark attendance for an employee on a date.
///
/// The `(employee_id, date)` pair is the natural key: the first mark for a
/// pair inserts a fresh row, any later mark only moves `status`. The write
/// is a single conditional insert against the pair's unique index, so
/// concurrent marks for the same pair cannot produce a second row; the
/// row's `id` and `created_at` survive updates untouched.
pub async fn mark(
    pool: &MySqlPool,
    employee_id: &str,
    date: NaiveDate,
    status: &str,
) -> Result<Attendance, HrmsError> {
    let status: AttendanceStatus = status
        .parse()
        .map_err(|_| HrmsError::InvalidStatus(status.to_string()))?;

    if employee::find_by_id(pool, employee_id).await?.is_none() {
        return Err(HrmsError::EmployeeNotFound(employee_id.to_string()));
    }

    sqlx::query(
        r#"
        INSERT INTO attendance (id, employee_id, date, status, created_at)
        VALUES (?, ?, ?, ?, ?)
        ON DUPLICATE KEY UPDATE status = VALUES(status)
        "#,
    )
    .bind(new_attendance_id())
    .bind(employee_id)
    .bind(date)
    .bind(status)
    .bind(Utc::now().naive_utc())
    .execute(pool)
    .await?;

    let record = sqlx::query_as::<_, Attendance>(
        r#"
        SELECT id, employee_id, date, status, created_at
        FROM attendance
        WHERE employee_id = ? AND date = ?
        "#,
    )
    .bind(employee_id)
    .bind(date)
    .fetch_one(pool)
    .await?;

    info!(employee_id, %date, status = %record.status, "attendance marked");
    Ok(record)
}

/// All attendance rows for one employee, newest date first. The employee
/// must exist even when they have no rows yet.
pub async fn list_for_employee(
    pool: &MySqlPool,
    employee_id: &str,
) -> Result<Vec<Attendance>, HrmsError> {
    if employee::find_by_id(pool, employee_id).await?.is_none() {
        return Err(HrmsError::EmployeeNotFound(employee_id.to_string()));
    }

    let records = sqlx::query_as::<_, Attendance>(
        r#"
        SELECT id, employee_id, date, status, created_at
        FROM attendance
        WHERE employee_id = ?
        ORDER BY date DESC
        "#,
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(records)
}

/// Every attendance row exactly matching the date, across all employees.
pub async fn list_by_date(pool: &MySqlPool, date: NaiveDate) -> Result<Vec<Attendance>, HrmsError> {
    let records = sqlx::query_as::<_, Attendance>(
        r#"
        SELECT id, employee_id, date, status, created_at
        FROM attendance
        WHERE date = ?
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await?;
    Ok(records)
}

/// Every attendance row, newest date first.
pub async fn list_all(pool: &MySqlPool) -> Result<Vec<Attendance>, HrmsError> {
    let records = sqlx::query_as::<_, Attendance>(
        r#"
        SELECT id, employee_id, date, status, created_at
        FROM attendance
        ORDER BY date DESC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendance_ids_carry_the_att_prefix_and_twelve_hex_chars() {
        let id = new_attendance_id();
        let hex = id.strip_prefix("att_").expect("missing att_ prefix");
        assert_eq!(hex.len(), 12);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn attendance_ids_are_unique_across_calls() {
        let a = new_attendance_id();
        let b = new_attendance_id();
        assert_ne!(a, b);
    }
}
