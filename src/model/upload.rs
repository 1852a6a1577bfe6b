use serde::{Deserialize, Serialize};

pub const DEFAULT_CAMERA_ID: &str = "CAM-1";
pub const DEFAULT_LOCATION: &str = "HQ";
pub const DEFAULT_ZONE_ID: &str = "ZONE-1";

/// Form fields sent alongside an uploaded surveillance video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadMeta {
    pub camera_id: String,
    pub location: String,
    pub zone_id: String,
}

impl Default for UploadMeta {
    fn default() -> Self {
        Self {
            camera_id: DEFAULT_CAMERA_ID.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            zone_id: DEFAULT_ZONE_ID.to_string(),
        }
    }
}

/// Response of the analysis backend's upload endpoint.
///
/// Only the number of extracted frames is shown, so frames are kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub frames: Vec<serde_json::Value>,
}
