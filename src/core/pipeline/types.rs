use crate::config::DefaultsConfig;
use crate::core::cortex::RiskAssessment;
use crate::core::governance::{AuditEvent, AuditEventType};
use crate::core::profile::{CreatorProfile, Idea};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Terminal outcome of one pipeline run. A block is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    Success,
    Blocked,
}

impl Outcome {
    pub fn event_type(self) -> AuditEventType {
        match self {
            Outcome::Success => AuditEventType::ContentGenerationSuccess,
            Outcome::Blocked => AuditEventType::ContentGenerationBlocked,
        }
    }
}

/// Idea and profile fields after the defaults table has been applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRequest {
    pub topic: String,
    pub format: String,
    pub tone: String,
    pub risk_tolerance: f64,
    pub idea_topics: Vec<String>,
    pub creator_topics: Vec<String>,
}

impl ResolvedRequest {
    /// Missing or blank fields take the configured defaults. A tolerance
    /// outside `[0, 1]` is clamped; a non-finite one falls back to the
    /// default.
    pub fn resolve(idea: &Idea, profile: &CreatorProfile, defaults: &DefaultsConfig) -> Self {
        let risk_tolerance = profile
            .risk_tolerance
            .filter(|t| t.is_finite())
            .unwrap_or(defaults.risk_tolerance)
            .clamp(0.0, 1.0);

        Self {
            topic: non_blank(idea.topic.as_deref())
                .unwrap_or(defaults.topic.as_str())
                .to_string(),
            format: non_blank(idea.format.as_deref())
                .unwrap_or(defaults.format.as_str())
                .to_string(),
            tone: non_blank(profile.tone.as_deref())
                .unwrap_or(defaults.tone.as_str())
                .to_string(),
            risk_tolerance,
            idea_topics: idea.topics.clone(),
            creator_topics: profile.primary_topics.clone(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Final output of `create_content`.
///
/// When `risk_assessment.is_safe` is false, `script` and `caption` are
/// empty; `hashtags` are still populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentResult {
    pub script: String,
    pub caption: String,
    pub hashtags: Vec<String>,
    pub risk_assessment: RiskAssessment,
    pub outcome: Outcome,
    pub audit_event: AuditEvent,
}

impl ContentResult {
    pub fn is_blocked(&self) -> bool {
        self.outcome == Outcome::Blocked
    }

    pub fn event_id(&self) -> &str {
        self.audit_event.event_id()
    }
}
