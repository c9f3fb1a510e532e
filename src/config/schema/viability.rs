use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViabilityConfig {
    #[serde(default = "default_base_score")]
    pub base_score: f64,
    #[serde(default = "default_strong_alignment")]
    pub strong_alignment: f64,
    #[serde(default = "default_mismatch_penalty")]
    pub mismatch_penalty: f64,
    /// Upper bound of the one-sided uniform noise added to every score.
    #[serde(default = "default_max_noise")]
    pub max_noise: f64,
}

fn default_base_score() -> f64 {
    0.5
}

fn default_strong_alignment() -> f64 {
    0.3
}

fn default_mismatch_penalty() -> f64 {
    -0.1
}

fn default_max_noise() -> f64 {
    0.05
}

impl Default for ViabilityConfig {
    fn default() -> Self {
        Self {
            base_score: default_base_score(),
            strong_alignment: default_strong_alignment(),
            mismatch_penalty: default_mismatch_penalty(),
            max_noise: default_max_noise(),
        }
    }
}
