use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "EMP001",
        "full_name": "Jane Doe",
        "email": "jane.doe@company.com",
        "department": "Engineering",
        "created_at": "2024-01-21T09:15:00"
    })
)]
pub struct Employee {
    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[schema(example = "Jane Doe")]
    pub full_name: String,

    #[schema(example = "jane.doe@company.com", format = "email")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(example = "2024-01-21T09:15:00", value_type = String, format = "date-time")]
    pub created_at: NaiveDateTime,
}
