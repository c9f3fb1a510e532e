use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// "sqlite" (durable) | "memory" (process lifetime, unbounded). Auditing
    /// cannot be turned off.
    #[serde(default = "default_backend")]
    pub backend: String,
    /// SQLite database path, relative to the workspace unless absolute.
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_backend() -> String {
    "sqlite".into()
}

fn default_path() -> String {
    "audit/events.db".into()
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            path: default_path(),
        }
    }
}
