use serde::{Deserialize, Serialize};
use techstore_auth::schema::RolePreset;

#[derive(Debug, Serialize, Deserialize)]
pub struct RoleResponse {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "permisos")]
    pub permissions: Vec<String>,
}

impl From<&RolePreset> for RoleResponse {
    fn from(preset: &RolePreset) -> Self {
        Self {
            name: preset.name.to_string(),
            permissions: preset.permissions.iter().map(|p| p.to_string()).collect(),
        }
    }
}
