use crate::base::SqlClient;
use crate::schemas::arguments::UserUpdateArgs;
use crate::schemas::schema::UserRecord;
use crate::sqlite::helper::SqliteQueryHelper;
use async_trait::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    types::Json,
    Pool, Sqlite,
};
use std::str::FromStr;
use techstore_error::error::SqlError;
use techstore_settings::config::TechstoreDatabaseSettings;
use techstore_utils::utils::get_utc_datetime;
use tracing::{debug, info};

pub struct SqliteClient {
    pub pool: Pool<Sqlite>,
}

// unique index violations are surfaced separately so callers can answer with a conflict
fn map_write_error(e: sqlx::Error) -> SqlError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            SqlError::UniqueViolation(db_err.message().to_string())
        }
        _ => SqlError::QueryError(format!("{}", e)),
    }
}

impl SqliteClient {
    /// Open the connection pool and bring the schema up to date
    ///
    /// # Arguments
    ///
    /// * `settings` - Connection uri and pool size
    ///
    /// # Returns
    ///
    /// * `SqliteClient` - A client with migrations applied
    pub async fn new(settings: &TechstoreDatabaseSettings) -> Result<Self, SqlError> {
        let options = SqliteConnectOptions::from_str(&settings.connection_uri)
            .map_err(|e| SqlError::ConnectionError(format!("{}", e)))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_with(options)
            .await
            .map_err(|e| SqlError::ConnectionError(format!("{}", e)))?;

        let client = Self { pool };

        // run migrations
        client.run_migrations().await?;

        Ok(client)
    }
}

#[async_trait]
impl SqlClient for SqliteClient {
    async fn run_migrations(&self) -> Result<(), SqlError> {
        info!("Running migrations");
        sqlx::migrate!("src/sqlite/migrations")
            .run(&self.pool)
            .await
            .map_err(|e| SqlError::MigrationError(format!("{}", e)))?;

        Ok(())
    }

    async fn insert_user(&self, user: &UserRecord) -> Result<i64, SqlError> {
        let query = SqliteQueryHelper::get_user_insert_query();

        let result = sqlx::query(&query)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(&user.role)
            .bind(&user.permissions)
            .bind(&user.status)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        let id = result.last_insert_rowid();
        debug!("Inserted user {} with id {}", user.username, id);

        Ok(id)
    }

    async fn get_user(&self, id: i64) -> Result<Option<UserRecord>, SqlError> {
        let query = SqliteQueryHelper::get_user_query();

        let user: Option<UserRecord> = sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| SqlError::QueryError(format!("{}", e)))?;

        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<UserRecord>, SqlError> {
        let query = SqliteQueryHelper::get_user_by_username_query();

        let user: Option<UserRecord> = sqlx::query_as(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| SqlError::QueryError(format!("{}", e)))?;

        Ok(user)
    }

    async fn get_users(&self) -> Result<Vec<UserRecord>, SqlError> {
        let query = SqliteQueryHelper::get_users_query();

        let users: Vec<UserRecord> = sqlx::query_as(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| SqlError::QueryError(format!("{}", e)))?;

        Ok(users)
    }

    async fn update_user(&self, id: i64, args: &UserUpdateArgs) -> Result<bool, SqlError> {
        let query = SqliteQueryHelper::get_user_update_query();

        let result = sqlx::query(&query)
            .bind(args.first_name.as_deref())
            .bind(args.last_name.as_deref())
            .bind(args.email.as_deref())
            .bind(args.username.as_deref())
            .bind(args.password_hash.as_deref())
            .bind(args.role.as_deref())
            .bind(args.permissions.as_ref().map(Json))
            .bind(args.status.as_deref())
            .bind(get_utc_datetime())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_user(&self, id: i64) -> Result<(), SqlError> {
        let query = SqliteQueryHelper::get_user_delete_query();

        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| SqlError::QueryError(format!("{}", e)))?;

        if result.rows_affected() == 0 {
            debug!("Delete of user {} matched no rows", id);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    async fn test_client() -> SqliteClient {
        let config = TechstoreDatabaseSettings {
            connection_uri: "sqlite::memory:".to_string(),
            max_connections: 1,
        };

        SqliteClient::new(&config).await.unwrap()
    }

    fn ana() -> UserRecord {
        UserRecord::new(
            "Ana".to_string(),
            "Lopez".to_string(),
            "ana.lopez@techstore.com".to_string(),
            "alopez".to_string(),
            "hashed-password".to_string(),
            "Vendedor".to_string(),
            vec!["ver_clientes".to_string(), "emitir_facturas".to_string()],
            "activo".to_string(),
        )
    }

    fn user_named(username: &str) -> UserRecord {
        let mut user = ana();
        user.username = username.to_string();
        user
    }

    #[tokio::test]
    async fn test_sqlite() {
        let client = test_client().await;

        // migrations are idempotent
        client.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn test_sqlite_insert_and_get_user() {
        let client = test_client().await;

        let id = client.insert_user(&ana()).await.unwrap();
        assert_eq!(id, 1);

        let user = client.get_user(id).await.unwrap().unwrap();
        assert_eq!(user.id, Some(1));
        assert_eq!(user.first_name, "Ana");
        assert_eq!(user.last_name, "Lopez");
        assert_eq!(user.email, "ana.lopez@techstore.com");
        assert_eq!(user.username, "alopez");
        assert_eq!(user.password_hash, "hashed-password");
        assert_eq!(user.role, "Vendedor");
        assert_eq!(
            user.permissions.0,
            vec!["ver_clientes".to_string(), "emitir_facturas".to_string()]
        );
        assert_eq!(user.status, "activo");

        let by_username = client.get_user_by_username("alopez").await.unwrap();
        assert_eq!(by_username.unwrap().id, Some(1));

        assert!(client.get_user(42).await.unwrap().is_none());
        assert!(client.get_user_by_username("nadie").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sqlite_get_users() {
        let client = test_client().await;
        assert!(client.get_users().await.unwrap().is_empty());

        for i in 0..5 {
            client
                .insert_user(&user_named(&format!("user{}", i)))
                .await
                .unwrap();
        }

        let users = client.get_users().await.unwrap();
        assert_eq!(users.len(), 5);

        let ids = users.iter().map(|u| u.id.unwrap()).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_sqlite_unique_username() {
        let client = test_client().await;
        client.insert_user(&ana()).await.unwrap();

        let err = client.insert_user(&ana()).await.unwrap_err();
        assert!(matches!(err, SqlError::UniqueViolation(_)));

        // renaming onto an existing username is rejected the same way
        let other = client.insert_user(&user_named("jefe")).await.unwrap();
        let args = UserUpdateArgs {
            username: Some("alopez".to_string()),
            ..Default::default()
        };
        let err = client.update_user(other, &args).await.unwrap_err();
        assert!(matches!(err, SqlError::UniqueViolation(_)));
    }

    #[tokio::test]
    async fn test_sqlite_update_user() {
        let client = test_client().await;
        let id = client.insert_user(&ana()).await.unwrap();
        let before = client.get_user(id).await.unwrap().unwrap();

        let args = UserUpdateArgs {
            last_name: Some("Lopez Rojas".to_string()),
            permissions: Some(vec!["ver_reportes".to_string()]),
            status: Some("inactivo".to_string()),
            ..Default::default()
        };
        assert!(client.update_user(id, &args).await.unwrap());

        let after = client.get_user(id).await.unwrap().unwrap();
        assert_eq!(after.last_name, "Lopez Rojas");
        assert_eq!(after.permissions.0, vec!["ver_reportes".to_string()]);
        assert_eq!(after.status, "inactivo");

        // untouched fields
        assert_eq!(after.first_name, before.first_name);
        assert_eq!(after.email, before.email);
        assert_eq!(after.username, before.username);
        assert_eq!(after.password_hash, before.password_hash);
        assert_eq!(after.role, before.role);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= before.updated_at);
    }

    #[tokio::test]
    async fn test_sqlite_update_missing_user() {
        let client = test_client().await;

        let args = UserUpdateArgs {
            first_name: Some("Nadie".to_string()),
            ..Default::default()
        };
        assert!(!client.update_user(99, &args).await.unwrap());
        assert!(client.get_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sqlite_delete_user() {
        let client = test_client().await;
        let id = client.insert_user(&ana()).await.unwrap();

        client.delete_user(id).await.unwrap();
        assert!(client.get_user(id).await.unwrap().is_none());

        // deleting again, or deleting an id that never existed, is a no-op
        client.delete_user(id).await.unwrap();
        client.delete_user(1234).await.unwrap();
    }
}
