use crate::core::roles::schema::RoleResponse;
use crate::core::state::AppState;
use axum::{routing::get, Json, Router};
use std::sync::Arc;
use techstore_auth::permission::ROLE_PRESETS;

pub async fn list_roles() -> Json<Vec<RoleResponse>> {
    Json(ROLE_PRESETS.iter().map(RoleResponse::from).collect())
}

pub async fn get_roles_router(prefix: &str) -> Router<Arc<AppState>> {
    Router::new().route(&format!("{}/roles", prefix), get(list_roles))
}
