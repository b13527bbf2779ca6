use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use once_cell::sync::Lazy;
use serde_json::json;
use thiserror::Error;
use tracing::error;

// DEBUG=true opts into returning raw database error detail in 500 bodies.
static DEBUG: Lazy<bool> = Lazy::new(|| {
    std::env::var("DEBUG")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

#[derive(Debug, Error)]
pub enum HrmsError {
    #[error("Employee with ID '{0}' not found")]
    EmployeeNotFound(String),

    #[error("Employee with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Invalid attendance status '{0}', must be 'Present' or 'Absent'")]
    InvalidStatus(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// MySQL reports every integrity-constraint violation under SQLSTATE 23000.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23000"),
        _ => false,
    }
}

impl ResponseError for HrmsError {
    fn status_code(&self) -> StatusCode {
        match self {
            HrmsError::EmployeeNotFound(_) => StatusCode::NOT_FOUND,
            HrmsError::DuplicateEmail(_)
            | HrmsError::InvalidStatus(_)
            | HrmsError::Validation(_) => StatusCode::BAD_REQUEST,
            HrmsError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let HrmsError::Database(e) = self {
            error!(error = %e, "unexpected database failure");
            let detail = if *DEBUG {
                e.to_string()
            } else {
                "An unexpected error occurred. Please try again later.".to_string()
            };
            return HttpResponse::InternalServerError().json(json!({ "detail": detail }));
        }

        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_client_status_codes() {
        assert_eq!(
            HrmsError::EmployeeNotFound("EMP042".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            HrmsError::DuplicateEmail("jane@co.com".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HrmsError::InvalidStatus("Late".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HrmsError::Validation("full_name must not be empty".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn store_errors_map_to_internal_server_error() {
        let err = HrmsError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn messages_name_the_offending_value() {
        let msg = HrmsError::EmployeeNotFound("EMP042".into()).to_string();
        assert_eq!(msg, "Employee with ID 'EMP042' not found");

        let msg = HrmsError::DuplicateEmail("jane@co.com".into()).to_string();
        assert_eq!(msg, "Employee with email 'jane@co.com' already exists");
    }

    #[test]
    fn non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolClosed));
    }
}
