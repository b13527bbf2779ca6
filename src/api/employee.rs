use crate::error::HrmsError;
use crate::model::employee::Employee;
use crate::service;
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use sqlx::MySqlPool;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "Jane Doe", value_type = String)]
    pub full_name: String,
    #[schema(example = "jane.doe@company.com", format = "email", value_type = String)]
    pub email: String,
    #[schema(example = "Engineering", value_type = String)]
    pub department: String,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created with a generated ID", body = Employee),
        (status = 400, description = "Duplicate email or invalid field", body = Object, example = json!({
            "detail": "Employee with email 'jane.doe@company.com' already exists"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateEmployee>,
) -> Result<impl Responder, HrmsError> {
    let employee = service::employee::register(
        pool.get_ref(),
        &payload.full_name,
        &payload.email,
        &payload.department,
    )
    .await?;

    Ok(HttpResponse::Created().json(employee))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    responses(
        (status = 200, description = "All employees, most recently created first", body = [Employee]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<MySqlPool>) -> Result<impl Responder, HrmsError> {
    let employees = service::employee::list_all(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/v1/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID, e.g. EMP001")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee with ID 'EMP042' not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    pool: web::Data<MySqlPool>,
    path: web::Path<String>,
) -> Result<impl Responder, HrmsError> {
    let employee_id = path.into_inner();

    match service::employee::find_by_id(pool.get_ref(), &employee_id).await? {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Err(HrmsError::EmployeeNotFound(employee_id)),
    }
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/v1/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID, e.g. EMP001")
    ),
    responses(
        (status = 204, description = "Employee and their attendance records deleted"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee with ID 'EMP042' not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<MySqlPool>,
    path: web::Path<String>,
) -> Result<impl Responder, HrmsError> {
    let employee_id = path.into_inner();

    service::employee::delete(pool.get_ref(), &employee_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
