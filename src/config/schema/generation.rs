use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// "template" | "http"
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Model-serving endpoint used by the `http` backend.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Fixed platform hashtags appended after the topic tag.
    #[serde(default = "default_platform_tags")]
    pub platform_tags: Vec<String>,
}

fn default_backend() -> String {
    "template".into()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_platform_tags() -> Vec<String> {
    vec!["#Trending".into(), "#FYP".into(), "#LearnOnTikTok".into()]
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            endpoint: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
            platform_tags: default_platform_tags(),
        }
    }
}
