use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use techstore_auth::auth::hash_password;
use techstore_auth::permission::default_permissions;
use techstore_error::error::ValidationError;
use techstore_sql::schemas::arguments::UserUpdateArgs;
use techstore_sql::schemas::schema::UserRecord;
use techstore_utils::utils::{is_blank, is_valid_email};

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// `permisos` arrives either as a JSON array or as a string holding a JSON-encoded array
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PermissionsInput {
    List(Vec<String>),
    Encoded(String),
}

impl PermissionsInput {
    pub fn into_list(self) -> Result<Vec<String>, ValidationError> {
        match self {
            PermissionsInput::List(list) => Ok(list),
            PermissionsInput::Encoded(encoded) if is_blank(&encoded) => Ok(vec![]),
            PermissionsInput::Encoded(encoded) => serde_json::from_str(&encoded)
                .map_err(|e| ValidationError::InvalidPermissions(e.to_string())),
        }
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(value) if !is_blank(&value) => Ok(value.trim().to_string()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

// a field that is present must obey the same rule as on create
fn optional(value: Option<String>, field: &'static str) -> Result<Option<String>, ValidationError> {
    value.map(|value| required(Some(value), field)).transpose()
}

fn check_email(email: String) -> Result<String, ValidationError> {
    if is_valid_email(&email) {
        Ok(email)
    } else {
        Err(ValidationError::InvalidEmail(email))
    }
}

fn check_password(password: Option<String>) -> Result<String, ValidationError> {
    match password {
        Some(password) if !is_blank(&password) => {
            if password.chars().count() < MIN_PASSWORD_LENGTH {
                Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH))
            } else {
                Ok(password)
            }
        }
        _ => Err(ValidationError::MissingField("contrasenia")),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UserCreateRequest {
    #[serde(rename = "nombres")]
    pub first_name: Option<String>,
    #[serde(rename = "apellidos")]
    pub last_name: Option<String>,
    #[serde(rename = "correo")]
    pub email: Option<String>,
    #[serde(rename = "usuario")]
    pub username: Option<String>,
    #[serde(rename = "contrasenia")]
    pub password: Option<String>,
    #[serde(rename = "rol")]
    pub role: Option<String>,
    #[serde(rename = "permisos")]
    pub permissions: Option<PermissionsInput>,
    #[serde(rename = "estado")]
    pub status: Option<String>,
}

impl UserCreateRequest {
    /// Validate the request and build the record to persist. The password is hashed here
    /// and the role preset is used when no permissions were sent.
    pub fn into_record(self) -> Result<UserRecord, ValidationError> {
        let first_name = required(self.first_name, "nombres")?;
        let last_name = required(self.last_name, "apellidos")?;
        let email = check_email(required(self.email, "correo")?)?;
        let username = required(self.username, "usuario")?;
        let password = check_password(self.password)?;
        let role = required(self.role, "rol")?;
        let status = required(self.status, "estado")?;

        let permissions = match self.permissions {
            Some(permissions) => permissions.into_list()?,
            None => default_permissions(&role),
        };

        Ok(UserRecord::new(
            first_name,
            last_name,
            email,
            username,
            hash_password(&password),
            role,
            permissions,
            status,
        ))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UserUpdateRequest {
    #[serde(rename = "nombres")]
    pub first_name: Option<String>,
    #[serde(rename = "apellidos")]
    pub last_name: Option<String>,
    #[serde(rename = "correo")]
    pub email: Option<String>,
    #[serde(rename = "usuario")]
    pub username: Option<String>,
    #[serde(rename = "contrasenia")]
    pub password: Option<String>,
    #[serde(rename = "rol")]
    pub role: Option<String>,
    #[serde(rename = "permisos")]
    pub permissions: Option<PermissionsInput>,
    #[serde(rename = "estado")]
    pub status: Option<String>,
}

impl UserUpdateRequest {
    pub fn into_args(self) -> Result<UserUpdateArgs, ValidationError> {
        let email = optional(self.email, "correo")?.map(check_email).transpose()?;

        let password_hash = match self.password {
            Some(password) => Some(hash_password(&check_password(Some(password))?)),
            None => None,
        };

        Ok(UserUpdateArgs {
            first_name: optional(self.first_name, "nombres")?,
            last_name: optional(self.last_name, "apellidos")?,
            email,
            username: optional(self.username, "usuario")?,
            password_hash,
            role: optional(self.role, "rol")?,
            permissions: self.permissions.map(PermissionsInput::into_list).transpose()?,
            status: optional(self.status, "estado")?,
        })
    }
}

/// Public view of a user. The password hash is never part of it.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    #[serde(rename = "nombres")]
    pub first_name: String,
    #[serde(rename = "apellidos")]
    pub last_name: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "usuario")]
    pub username: String,
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(rename = "permisos")]
    pub permissions: Vec<String>,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "creado_en")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "actualizado_en")]
    pub updated_at: NaiveDateTime,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id.unwrap_or_default(),
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            username: record.username,
            role: record.role,
            permissions: record.permissions.0,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
