/// Partial update of a user record. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserUpdateArgs {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<String>,
    pub permissions: Option<Vec<String>>,
    pub status: Option<String>,
}

impl UserUpdateArgs {
    pub fn is_empty(&self) -> bool {
        *self == UserUpdateArgs::default()
    }
}
