use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use techstore_utils::utils::get_utc_datetime;

/// Row of the `usuarios` table. Column names follow the legacy schema.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: Option<i64>,
    #[sqlx(rename = "nombres")]
    pub first_name: String,
    #[sqlx(rename = "apellidos")]
    pub last_name: String,
    #[sqlx(rename = "correo")]
    pub email: String,
    #[sqlx(rename = "usuario")]
    pub username: String,
    #[sqlx(rename = "contrasenia")]
    pub password_hash: String,
    #[sqlx(rename = "rol")]
    pub role: String,
    #[sqlx(rename = "permisos")]
    pub permissions: Json<Vec<String>>,
    #[sqlx(rename = "estado")]
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl UserRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        username: String,
        password_hash: String,
        role: String,
        permissions: Vec<String>,
        status: String,
    ) -> Self {
        let now = get_utc_datetime();

        UserRecord {
            id: None,
            first_name,
            last_name,
            email,
            username,
            password_hash,
            role,
            permissions: Json(permissions),
            status,
            created_at: now,
            updated_at: now,
        }
    }
}
