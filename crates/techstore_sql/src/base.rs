use crate::schemas::arguments::UserUpdateArgs;
use crate::schemas::schema::UserRecord;
use async_trait::async_trait;
use std::fmt;
use techstore_error::error::SqlError;

pub enum SqlTableNames {
    Users,
}

impl fmt::Display for SqlTableNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table_name = match self {
            SqlTableNames::Users => "usuarios",
        };
        write!(f, "{}", table_name)
    }
}

/// Store operations for user records.
///
/// Handlers only ever see this trait, so any implementation (the sqlite client or a
/// test double) can be injected into the server state.
#[async_trait]
pub trait SqlClient: Send + Sync {
    async fn run_migrations(&self) -> Result<(), SqlError>;

    /// Persist a new user and return the id assigned by the store
    async fn insert_user(&self, user: &UserRecord) -> Result<i64, SqlError>;

    async fn get_user(&self, id: i64) -> Result<Option<UserRecord>, SqlError>;

    async fn get_user_by_username(&self, username: &str) -> Result<Option<UserRecord>, SqlError>;

    async fn get_users(&self) -> Result<Vec<UserRecord>, SqlError>;

    /// Overwrite the provided fields. Returns false when no row has the given id
    async fn update_user(&self, id: i64, args: &UserUpdateArgs) -> Result<bool, SqlError>;

    /// Remove a user. Deleting an id that does not exist is not an error
    async fn delete_user(&self, id: i64) -> Result<(), SqlError>;
}
