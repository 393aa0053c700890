use axum::response::IntoResponse;
use axum::Json;
/// file containing schema for health module
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Alive {
    pub status: String,
    pub version: String,
}

impl Alive {
    pub fn new(version: &str) -> Self {
        Self {
            status: "Alive".to_string(),
            version: version.to_string(),
        }
    }
}

// Implement IntoResponse for Alive
impl IntoResponse for Alive {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}
