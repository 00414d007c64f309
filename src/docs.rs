use crate::api::attendance::{AttendanceRange, MarkAttendance};
use crate::api::employee::CreateEmployee;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus, AttendanceSummary};
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## Lightweight Human Resource Management System

Tracks a roster of employees and their daily attendance.

### 🔹 Key Features
- **Employee Management**
  - Register, list, and remove employees (unique ID and email)
- **Attendance Management**
  - Mark Present/Absent per day (idempotent upsert), query by date range
- **Dashboard**
  - Today's present/absent counts at a glance

### 📦 Response Format
- JSON-based RESTful responses
- Errors are `{"message": "..."}` with 400/404/409 status codes

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::get_summary,
        crate::api::attendance::get_attendance,
        crate::api::attendance::mark_attendance
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            AttendanceRecord,
            AttendanceStatus,
            AttendanceSummary,
            MarkAttendance,
            AttendanceRange
        )
    ),
    tags(
        (name = "Employees", description = "Employee roster APIs"),
        (name = "Attendance", description = "Attendance tracking APIs"),
    )
)]
pub struct ApiDoc;
