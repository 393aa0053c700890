use crate::core::error::{api_error, bad_request, not_found, sql_error, ApiError};
use crate::core::state::AppState;
use crate::core::users::schema::{
    MessageResponse, UserCreateRequest, UserResponse, UserUpdateRequest,
};
use anyhow::{Context, Result};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use techstore_sql::schemas::schema::UserRecord;
use tracing::{error, info};

fn user_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| api_error(StatusCode::BAD_REQUEST, rejection.body_text()))
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| api_error(StatusCode::BAD_REQUEST, rejection.body_text()))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.sql_client.get_users().await.map_err(|e| {
        error!("Failed to list users: {}", e);
        sql_error(e)
    })?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = user_id(path)?;

    let user = state.sql_client.get_user(id).await.map_err(|e| {
        error!("Failed to get user {}: {}", id, e);
        sql_error(e)
    })?;

    match user {
        Some(user) => Ok(Json(UserResponse::from(user))),
        None => Err(not_found()),
    }
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UserCreateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let record = json_body(payload)?.into_record().map_err(bad_request)?;

    let id = state.sql_client.insert_user(&record).await.map_err(|e| {
        error!("Failed to create user {}: {}", record.username, e);
        sql_error(e)
    })?;

    info!("Created user {} with id {}", record.username, id);

    let user = UserRecord {
        id: Some(id),
        ..record
    };

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UserUpdateRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = user_id(path)?;
    let args = json_body(payload)?.into_args().map_err(bad_request)?;

    let updated = state.sql_client.update_user(id, &args).await.map_err(|e| {
        error!("Failed to update user {}: {}", id, e);
        sql_error(e)
    })?;

    if !updated {
        return Err(not_found());
    }

    info!("Updated user {}", id);
    Ok(Json(MessageResponse::new("Usuario actualizado")))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = user_id(path)?;

    state.sql_client.delete_user(id).await.map_err(|e| {
        error!("Failed to delete user {}: {}", id, e);
        sql_error(e)
    })?;

    info!("Deleted user {}", id);
    Ok(Json(MessageResponse::new("Usuario eliminado")))
}

pub async fn get_user_router(prefix: &str) -> Result<Router<Arc<AppState>>> {
    let result = catch_unwind(AssertUnwindSafe(|| {
        Router::new()
            .route(
                &format!("{}/usuarios", prefix),
                get(list_users).post(create_user),
            )
            .route(
                &format!("{}/usuarios/:id", prefix),
                get(get_user)
                    .put(update_user)
                    .patch(update_user)
                    .delete(delete_user),
            )
    }));

    match result {
        Ok(router) => Ok(router),
        Err(_) => {
            error!("Failed to create user router");
            Err(anyhow::anyhow!("Failed to create user router"))
                .context("Panic occurred while creating the router")
        }
    }
}
