use anyhow::{Context, Result as AnyhowResult};
use techstore_logging::logging::setup_logging;
use techstore_settings::config::TechstoreConfig;
use techstore_sql::sqlite::client::SqliteClient;
use techstore_utils::color::LogColors;
use tracing::info;

pub async fn setup_components() -> AnyhowResult<(TechstoreConfig, SqliteClient)> {
    // setup config
    let config = TechstoreConfig::default();

    // start logging
    setup_logging(&config.log_level)
        .await
        .context(LogColors::purple("Failed to setup logging"))?;

    info!(
        "Starting Techstore Server {} ({}) ....",
        config.app_version, config.app_env
    );

    // setup sql client
    let db_settings = config
        .database_settings()
        .context(LogColors::purple("Invalid database settings"))?;

    let sql_client = SqliteClient::new(&db_settings)
        .await
        .context(LogColors::purple("Failed to setup sql client"))?;

    info!("Sql client connected to {}", db_settings.connection_uri);

    Ok((config, sql_client))
}
