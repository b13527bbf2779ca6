use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Daily attendance state, stored as its variant name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, sqlx::Type, ToSchema,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": "att_3f9c2a1b7d04",
        "employee_id": "EMP001",
        "date": "2024-01-21",
        "status": "Present",
        "created_at": "2024-01-21T09:15:00"
    })
)]
pub struct Attendance {
    #[schema(example = "att_3f9c2a1b7d04")]
    pub id: String,

    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[schema(example = "2024-01-21", value_type = String, format = "date")]
    pub date: NaiveDate,

    pub status: AttendanceStatus,

    #[schema(example = "2024-01-21T09:15:00", value_type = String, format = "date-time")]
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_exact_variant_names() {
        assert_eq!("Present".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Present);
        assert_eq!("Absent".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Absent);
    }

    #[test]
    fn status_rejects_anything_else() {
        assert!("present".parse::<AttendanceStatus>().is_err());
        assert!("PRESENT".parse::<AttendanceStatus>().is_err());
        assert!("Late".parse::<AttendanceStatus>().is_err());
        assert!("".parse::<AttendanceStatus>().is_err());
    }

    #[test]
    fn status_displays_as_wire_value() {
        assert_eq!(AttendanceStatus::Present.to_string(), "Present");
        assert_eq!(AttendanceStatus::Absent.to_string(), "Absent");
    }

    #[test]
    fn status_serde_round_trip() {
        let json = serde_json::to_string(&AttendanceStatus::Absent).unwrap();
        assert_eq!(json, "\"Absent\"");
        let back: AttendanceStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AttendanceStatus::Absent);
    }
}
