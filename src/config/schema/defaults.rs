use serde::{Deserialize, Serialize};

/// Field defaults applied when an idea or profile omits an advisory field.
///
/// The pipeline favours availability over strict validation: a missing topic
/// or tolerance resolves to these values instead of failing the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_risk_tolerance")]
    pub risk_tolerance: f64,
}

fn default_topic() -> String {
    "General".into()
}

fn default_tone() -> String {
    "Neutral".into()
}

fn default_format() -> String {
    "Short".into()
}

fn default_risk_tolerance() -> f64 {
    0.5
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            topic: default_topic(),
            tone: default_tone(),
            format: default_format(),
            risk_tolerance: default_risk_tolerance(),
        }
    }
}
