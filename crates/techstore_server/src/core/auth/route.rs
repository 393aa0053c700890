use crate::core::auth::schema::{LoginRequest, LoginResponse};
use crate::core::error::{api_error, sql_error, ApiError};
use crate::core::state::AppState;
use crate::core::users::schema::UserResponse;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{http::StatusCode, routing::post, Json, Router};
use std::sync::Arc;
use techstore_auth::auth::validate_user;
use techstore_error::error::AuthError;
use techstore_utils::utils::is_blank;
use tracing::{error, info, warn};

const INVALID_CREDENTIALS: &str = "Usuario o contraseña incorrectos";
const INACTIVE_USER: &str = "El usuario se encuentra inactivo";

/// Check a username/password pair against the stored hash and return the user with
/// their permissions. No session or token is issued.
pub async fn api_login_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = payload
        .map_err(|rejection| api_error(StatusCode::BAD_REQUEST, rejection.body_text()))?;

    let (username, password) = match (request.username, request.password) {
        (Some(username), Some(password)) if !is_blank(&username) && !password.is_empty() => {
            (username.trim().to_string(), password)
        }
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "Los campos 'usuario' y 'contrasenia' son obligatorios",
            ))
        }
    };

    let user = state
        .sql_client
        .get_user_by_username(&username)
        .await
        .map_err(|e| {
            error!("Failed to get user from database: {}", e);
            sql_error(e)
        })?
        .ok_or_else(|| {
            warn!("Login attempt for unknown user {}", username);
            api_error(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS)
        })?;

    validate_user(&user, &password).map_err(|e| {
        warn!("Failed to validate user {}: {}", username, e);
        match e {
            AuthError::InvalidCredentials => api_error(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS),
            AuthError::InactiveUser => api_error(StatusCode::FORBIDDEN, INACTIVE_USER),
        }
    })?;

    info!("User {} logged in", username);

    Ok(Json(LoginResponse {
        message: "Inicio de sesión exitoso".to_string(),
        user: UserResponse::from(user),
    }))
}

pub async fn get_auth_router(prefix: &str) -> Router<Arc<AppState>> {
    Router::new().route(&format!("{}/auth/login", prefix), post(api_login_handler))
}
