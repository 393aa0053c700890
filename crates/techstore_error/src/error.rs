use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings Error: {0}")]
    Error(String),
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Logging Error: {0}")]
    Error(String),
}

#[derive(Error, Debug)]
pub enum SqlError {
    #[error("Failed to connect to the database: {0}")]
    ConnectionError(String),

    #[error("Failed to run migrations: {0}")]
    MigrationError(String),

    #[error("Query failed: {0}")]
    QueryError(String),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Failed to serialize column value: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("User is not active")]
    InactiveUser,
}

/// Returned by the request validation layer. The message is safe to surface
/// to API callers.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("El campo '{0}' es obligatorio")]
    MissingField(&'static str),

    #[error("El correo '{0}' no es válido")]
    InvalidEmail(String),

    #[error("La contraseña debe tener al menos {0} caracteres")]
    PasswordTooShort(usize),

    #[error("El campo 'permisos' no es una lista válida: {0}")]
    InvalidPermissions(String),
}
