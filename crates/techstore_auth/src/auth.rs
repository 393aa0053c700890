use password_auth::{generate_hash, verify_password};
use techstore_error::error::AuthError;
use techstore_sql::schemas::schema::UserRecord;

const ACTIVE_STATUSES: [&str; 2] = ["activo", "active"];

/// Hash a plaintext password into a salted PHC string
pub fn hash_password(password: &str) -> String {
    generate_hash(password)
}

pub fn is_active_status(status: &str) -> bool {
    let status = status.trim();
    ACTIVE_STATUSES
        .iter()
        .any(|active| active.eq_ignore_ascii_case(status))
}

/// Check a login attempt against a stored user
///
/// # Arguments
///
/// * `user` - The user loaded from the store
/// * `password` - The plaintext password supplied by the caller
///
/// # Returns
///
/// * `Result<(), AuthError>` - InvalidCredentials on a wrong password, InactiveUser when
///   the password matches but the account is not active
pub fn validate_user(user: &UserRecord, password: &str) -> Result<(), AuthError> {
    verify_password(password, &user.password_hash).map_err(|_| AuthError::InvalidCredentials)?;

    if !is_active_status(&user.status) {
        return Err(AuthError::InactiveUser);
    }

    Ok(())
}
