use std::sync::Arc;
use techstore_settings::config::TechstoreConfig;
use techstore_sql::base::SqlClient;

pub struct AppState {
    pub sql_client: Arc<dyn SqlClient>,
    pub config: Arc<TechstoreConfig>,
}
