use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;
use tracing::error;

/// Typed failures surfaced by the store layer and the request validators.
///
/// Conflict variants carry the offending value so the response can name
/// exactly which field collided.
#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "Employee with ID '{}' already exists", _0)]
    DuplicateEmployeeId(String),

    #[display(fmt = "Employee with email '{}' already exists", _0)]
    DuplicateEmail(String),

    #[display(fmt = "Employee with ID '{}' not found", _0)]
    EmployeeNotFound(String),

    #[display(fmt = "{}", _0)]
    Validation(String),

    #[display(fmt = "database error: {}", _0)]
    Database(sqlx::Error),
}

impl std::error::Error for ApiError {}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Database(e)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::DuplicateEmployeeId(_) | ApiError::DuplicateEmail(_) => StatusCode::CONFLICT,
            ApiError::EmployeeNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            // Never leak driver errors to the client
            ApiError::Database(e) => {
                error!(error = %e, "Database error");
                "Something went wrong, Contact with system admin".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }
}
