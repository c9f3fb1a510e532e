use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSourceConfig {
    /// Base URL of the profile service; `None` disables remote lookups.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Hard request timeout for a single profile fetch.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    2_000
}

impl Default for ProfileSourceConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}
