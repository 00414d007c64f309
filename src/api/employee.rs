use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::model::employee::Employee;
use crate::store::directory;
use crate::validate::{require_email, require_non_empty};

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "EMP001", value_type = String)]
    pub employee_id: String,
    #[schema(example = "Aarav Sharma", value_type = String)]
    pub full_name: String,
    #[schema(example = "aarav.sharma@company.in", format = "email", value_type = String)]
    pub email: String,
    #[schema(example = "Engineering", value_type = String)]
    pub department: String,
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees, newest first", body = Vec<Employee>)
    ),
    tag = "Employees"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let employees = directory::list_employees(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created successfully", body = Employee),
        (status = 400, description = "Malformed field", body = Object, example = json!({
            "message": "full_name must not be empty"
        })),
        (status = 409, description = "Duplicate employee_id or email", body = Object, example = json!({
            "message": "Employee with ID 'EMP001' already exists"
        }))
    ),
    tag = "Employees"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    require_non_empty("employee_id", &payload.employee_id)?;
    require_non_empty("full_name", &payload.full_name)?;
    require_non_empty("department", &payload.department)?;
    require_email(&payload.email)?;

    let employee = directory::create_employee(
        pool.get_ref(),
        &payload.employee_id,
        &payload.full_name,
        &payload.email,
        &payload.department,
    )
    .await?;

    Ok(HttpResponse::Created().json(employee))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee and attendance removed", body = Object, example = json!({
            "message": "Employee 'EMP001' deleted successfully"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee with ID 'EMP001' not found"
        }))
    ),
    tag = "Employees"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    directory::delete_employee(pool.get_ref(), &employee_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": format!("Employee '{}' deleted successfully", employee_id)
    })))
}
