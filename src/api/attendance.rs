use crate::error::HrmsError;
use crate::model::attendance::Attendance;
use crate::service;
use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::MySqlPool;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = "EMP001", value_type = String)]
    pub employee_id: String,
    #[schema(example = "2024-01-21", format = "date", value_type = String)]
    pub date: NaiveDate,
    // validated against the status enum by the ledger, not by serde
    #[schema(example = "Present", value_type = String)]
    pub status: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AttendanceQuery {
    #[schema(example = "2024-01-21", format = "date", value_type = Option<String>)]
    pub attendance_date: Option<NaiveDate>,
}

/// Mark attendance
#[utoipa::path(
    post,
    path = "/api/v1/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance created or updated for the (employee, date) pair", body = Attendance),
        (status = 400, description = "Invalid status", body = Object, example = json!({
            "detail": "Invalid attendance status 'Late', must be 'Present' or 'Absent'"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee with ID 'EMP042' not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<MySqlPool>,
    payload: web::Json<MarkAttendance>,
) -> Result<impl Responder, HrmsError> {
    let record = service::attendance::mark(
        pool.get_ref(),
        &payload.employee_id,
        payload.date,
        &payload.status,
    )
    .await?;

    Ok(HttpResponse::Created().json(record))
}

/// List attendance, optionally for one date
#[utoipa::path(
    get,
    path = "/api/v1/attendance",
    params(
        ("attendance_date" = Option<String>, Query, description = "Exact date filter (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Attendance records", body = [Attendance]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    pool: web::Data<MySqlPool>,
    query: web::Query<AttendanceQuery>,
) -> Result<impl Responder, HrmsError> {
    let records = match query.attendance_date {
        Some(date) => service::attendance::list_by_date(pool.get_ref(), date).await?,
        None => service::attendance::list_all(pool.get_ref()).await?,
    };

    Ok(HttpResponse::Ok().json(records))
}

/// List attendance for an employee
#[utoipa::path(
    get,
    path = "/api/v1/attendance/employee/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID, e.g. EMP001")
    ),
    responses(
        (status = 200, description = "Attendance records, newest date first", body = [Attendance]),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee with ID 'EMP042' not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn employee_attendance(
    pool: web::Data<MySqlPool>,
    path: web::Path<String>,
) -> Result<impl Responder, HrmsError> {
    let employee_id = path.into_inner();
    let records = service::attendance::list_for_employee(pool.get_ref(), &employee_id).await?;
    Ok(HttpResponse::Ok().json(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_payload_deserializes_iso_dates() {
        let payload: MarkAttendance = serde_json::from_str(
            r#"{"employee_id":"EMP001","date":"2024-01-21","status":"Present"}"#,
        )
        .unwrap();
        assert_eq!(payload.employee_id, "EMP001");
        assert_eq!(payload.date, NaiveDate::from_ymd_opt(2024, 1, 21).unwrap());
        assert_eq!(payload.status, "Present");
    }

    #[test]
    fn mark_payload_keeps_unknown_statuses_as_strings() {
        let payload: MarkAttendance = serde_json::from_str(
            r#"{"employee_id":"EMP001","date":"2024-01-21","status":"Late"}"#,
        )
        .unwrap();
        assert_eq!(payload.status, "Late");
    }

    #[test]
    fn mark_payload_rejects_malformed_dates() {
        let result: Result<MarkAttendance, _> = serde_json::from_str(
            r#"{"employee_id":"EMP001","date":"21-01-2024","status":"Present"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn attendance_query_date_is_optional() {
        let query: AttendanceQuery = serde_json::from_str("{}").unwrap();
        assert!(query.attendance_date.is_none());

        let query: AttendanceQuery =
            serde_json::from_str(r#"{"attendance_date":"2024-01-21"}"#).unwrap();
        assert_eq!(
            query.attendance_date,
            Some(NaiveDate::from_ymd_opt(2024, 1, 21).unwrap())
        );
    }
}
