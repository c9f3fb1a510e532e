use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum IntentType {
    #[serde(rename = "decision_seeking")]
    #[strum(serialize = "decision_seeking")]
    Decision,
    #[serde(rename = "content_creation")]
    #[strum(serialize = "content_creation")]
    Creation,
    #[serde(rename = "strategic_planning")]
    #[strum(serialize = "strategic_planning")]
    Planning,
    #[serde(rename = "reflection_and_growth")]
    #[strum(serialize = "reflection_and_growth")]
    Reflection,
    #[serde(rename = "unknown")]
    #[strum(serialize = "unknown")]
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntentRequest {
    pub query: String,
    #[serde(default)]
    pub context: serde_json::Map<String, serde_json::Value>,
}

impl IntentRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            context: serde_json::Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentResponse {
    pub intent_type: IntentType,
    pub confidence: f64,
    pub ambiguity_flag: bool,
    #[serde(default)]
    pub reasoning: Option<String>,
}
