use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentConfig {
    /// Queries shorter than this (after trimming) are treated as ambiguous.
    #[serde(default = "default_min_query_length")]
    pub min_query_length: usize,
}

fn default_min_query_length() -> usize {
    15
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            min_query_length: default_min_query_length(),
        }
    }
}
