use crate::config::IntentConfig;

const GENERIC_QUERIES: [&str; 4] = ["help", "help me", "grow", "start"];

/// Flags queries too short or too generic to act on.
#[derive(Debug, Clone)]
pub struct AmbiguityDetector {
    min_length: usize,
}

impl AmbiguityDetector {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn from_config(config: &IntentConfig) -> Self {
        Self::new(config.min_query_length)
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn is_ambiguous(&self, query: &str) -> bool {
        let trimmed = query.trim();
        if trimmed.chars().count() < self.min_length {
            return true;
        }
        let lowered = trimmed.to_lowercase();
        GENERIC_QUERIES.contains(&lowered.as_str())
    }
}

impl Default for AmbiguityDetector {
    fn default() -> Self {
        Self::from_config(&IntentConfig::default())
    }
}
