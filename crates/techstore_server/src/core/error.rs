use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use techstore_error::error::{SqlError, ValidationError};

pub const USER_NOT_FOUND: &str = "Usuario no encontrado";
pub const USERNAME_TAKEN: &str = "El nombre de usuario ya existe";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

pub fn not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, USER_NOT_FOUND)
}

pub fn bad_request(err: ValidationError) -> ApiError {
    api_error(StatusCode::BAD_REQUEST, err.to_string())
}

/// Store failures surface as 500 with the store message, except unique
/// violations which are a conflict on the username.
pub fn sql_error(err: SqlError) -> ApiError {
    match err {
        SqlError::UniqueViolation(_) => api_error(StatusCode::CONFLICT, USERNAME_TAKEN),
        other => api_error(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}
