use serde::{Deserialize, Serialize};

/// Identity and preference snapshot of one creator.
///
/// Read-only input to the pipeline. Optional fields fall back to the
/// configured defaults table when a request is resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatorProfile {
    #[serde(default)]
    pub creator_id: Option<String>,
    #[serde(default)]
    pub primary_topics: Vec<String>,
    #[serde(default, alias = "tone_vector")]
    pub tone: Option<String>,
    #[serde(default)]
    pub risk_tolerance: Option<f64>,
}

impl CreatorProfile {
    pub fn new(creator_id: impl Into<String>) -> Self {
        Self {
            creator_id: Some(creator_id.into()),
            ..Self::default()
        }
    }

    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_topics = topics.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    pub fn with_risk_tolerance(mut self, tolerance: f64) -> Self {
        self.risk_tolerance = Some(tolerance);
        self
    }
}

/// A raw content idea. Transient, never persisted by the core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub format: Option<String>,
}

impl Idea {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: Some(topic.into()),
            ..Self::default()
        }
    }

    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}
