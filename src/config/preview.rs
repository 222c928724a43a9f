use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for fetching raw markup for the preview surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Request timeout in seconds (default: 15)
    pub timeout_secs: u64,

    /// User agent sent with preview requests
    pub user_agent: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

impl PreviewConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
