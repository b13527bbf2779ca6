use crate::api::attendance::{AttendanceQuery, MarkAttendance};
use crate::api::employee::CreateEmployee;
use crate::model::attendance::{Attendance, AttendanceStatus};
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A lightweight Human Resource Management System for managing employees and
their daily attendance.

### 🔹 Key Features
- **Employee Management**
  - Register employees under sequential `EMPnnn` identifiers, list, view, and delete
- **Attendance Management**
  - Mark daily Present/Absent status, one record per employee per day
  - Query attendance by employee or by date

### 📦 Response Format
- JSON-based RESTful responses
- Errors carry a `detail` message

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::list_attendance,
        crate::api::attendance::employee_attendance
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            Attendance,
            AttendanceStatus,
            MarkAttendance,
            AttendanceQuery
        )
    ),
    tags(
        (name = "Employee", description = "Employee registry APIs"),
        (name = "Attendance", description = "Attendance ledger APIs"),
    )
)]
pub struct ApiDoc;
