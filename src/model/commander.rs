use serde::{Deserialize, Serialize};

/// The authenticated operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Commander {
    pub id: String,
    pub name: String,
    pub rank: String,
    pub division: String,
    /// Push notification token registered by the client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fcm_token: Option<String>,
    pub last_active: String,
    pub permissions: Vec<String>,
}

impl Commander {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}
