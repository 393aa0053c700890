/// this file contains helper logic for generating the sqlite queries used by the user store
use crate::base::SqlTableNames;

const USER_COLUMNS: &str = "id, nombres, apellidos, correo, usuario, contrasenia, rol, permisos, estado, created_at, updated_at";

pub struct SqliteQueryHelper;

impl SqliteQueryHelper {
    pub fn get_user_insert_query() -> String {
        format!(
            "INSERT INTO {} (
        nombres, 
        apellidos, 
        correo, 
        usuario, 
        contrasenia, 
        rol, 
        permisos, 
        estado, 
        created_at, 
        updated_at
        ) 
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            SqlTableNames::Users
        )
    }

    pub fn get_user_query() -> String {
        format!(
            "SELECT {} FROM {} WHERE id = ?",
            USER_COLUMNS,
            SqlTableNames::Users
        )
    }

    pub fn get_user_by_username_query() -> String {
        format!(
            "SELECT {} FROM {} WHERE usuario = ?",
            USER_COLUMNS,
            SqlTableNames::Users
        )
    }

    pub fn get_users_query() -> String {
        format!(
            "SELECT {} FROM {} ORDER BY id ASC",
            USER_COLUMNS,
            SqlTableNames::Users
        )
    }

    /// Every column is wrapped in COALESCE so a NULL bind keeps the stored value.
    pub fn get_user_update_query() -> String {
        format!(
            "UPDATE {} SET 
        nombres = COALESCE(?, nombres), 
        apellidos = COALESCE(?, apellidos), 
        correo = COALESCE(?, correo), 
        usuario = COALESCE(?, usuario), 
        contrasenia = COALESCE(?, contrasenia), 
        rol = COALESCE(?, rol), 
        permisos = COALESCE(?, permisos), 
        estado = COALESCE(?, estado), 
        updated_at = ? 
        WHERE id = ?",
            SqlTableNames::Users
        )
    }

    pub fn get_user_delete_query() -> String {
        format!("DELETE FROM {} WHERE id = ?", SqlTableNames::Users)
    }
}
