use crate::core::users::schema::UserResponse;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "usuario")]
    pub username: Option<String>,
    #[serde(rename = "contrasenia")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserResponse,
}
