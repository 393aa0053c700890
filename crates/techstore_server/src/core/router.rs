use crate::core::auth::route::get_auth_router;
use crate::core::health::route::get_health_router;
use crate::core::roles::route::get_roles_router;
use crate::core::state::AppState;
use crate::core::users::route::get_user_router;
use anyhow::Result;
use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Method,
};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const ROUTE_PREFIX: &str = "/api";

pub async fn create_router(app_state: Arc<AppState>) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::DELETE,
            Method::POST,
            Method::PATCH,
        ])
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE]);

    let health_routes = get_health_router(ROUTE_PREFIX).await;
    let user_routes = get_user_router(ROUTE_PREFIX).await?;
    let auth_routes = get_auth_router(ROUTE_PREFIX).await;
    let role_routes = get_roles_router(ROUTE_PREFIX).await;

    Ok(Router::new()
        .merge(health_routes)
        .merge(user_routes)
        .merge(auth_routes)
        .merge(role_routes)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}
