use serde::{Deserialize, Serialize};

/// Maps a creator tone onto a generation constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneRule {
    /// Tone name, matched case-insensitively.
    pub tone: String,
    /// Short label recorded in the Setup trace rationale.
    pub label: String,
    /// Constraint text handed to the generator.
    pub constraint: String,
}

impl ToneRule {
    fn new(tone: &str, label: &str, constraint: &str) -> Self {
        Self {
            tone: tone.into(),
            label: label.into(),
            constraint: constraint.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintConfig {
    #[serde(default = "default_rules")]
    pub rules: Vec<ToneRule>,
}

fn default_rules() -> Vec<ToneRule> {
    vec![
        ToneRule::new("Professional", "formal language", "Use formal language"),
        ToneRule::new("Casual", "conversational", "Keep it conversational"),
        ToneRule::new("Excited", "high energy", "Use high-energy language"),
    ]
}

impl Default for ConstraintConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
        }
    }
}
