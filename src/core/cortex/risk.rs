use crate::config::{RiskConfig, RiskKeyword};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Decision flags attached to a risk verdict, in the order they were raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionFlag {
    RiskKeywordDetected,
    RiskPass,
    RiskFail,
}

/// Outcome of scoring one piece of content against a creator tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub is_safe: bool,
    /// Maximum matched keyword weight, `0.0` when nothing matched.
    pub score: f64,
    pub reasons: Vec<String>,
    pub decision_flags: Vec<DecisionFlag>,
}

impl RiskAssessment {
    pub fn has_flag(&self, flag: DecisionFlag) -> bool {
        self.decision_flags.contains(&flag)
    }
}

/// Keyword-weighted risk scorer. Pure: no state beyond its keyword table.
#[derive(Debug, Clone)]
pub struct RiskEngine {
    keywords: Vec<RiskKeyword>,
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new(&RiskConfig::default())
    }
}

impl RiskEngine {
    pub fn new(config: &RiskConfig) -> Self {
        let keywords = config
            .keywords
            .iter()
            .map(|entry| RiskKeyword {
                keyword: entry.keyword.to_lowercase(),
                weight: entry.weight.clamp(0.0, 1.0),
            })
            .collect();
        Self { keywords }
    }

    pub fn keywords(&self) -> &[RiskKeyword] {
        &self.keywords
    }

    /// Score `content` and compare the maximum matched weight with
    /// `tolerance`. Content is safe iff `score <= tolerance`.
    pub fn assess_risk(&self, content: &str, tolerance: f64) -> RiskAssessment {
        let content_lower = content.to_lowercase();
        let mut max_risk_score = 0.0_f64;
        let mut reasons = Vec::new();
        let mut flags = Vec::new();

        for entry in &self.keywords {
            if content_lower.contains(entry.keyword.as_str()) {
                max_risk_score = max_risk_score.max(entry.weight);
                reasons.push(format!("Contains risky keyword: '{}'", entry.keyword));
                flags.push(DecisionFlag::RiskKeywordDetected);
            }
        }

        if reasons.is_empty() {
            flags.push(DecisionFlag::RiskPass);
        }

        let is_safe = max_risk_score <= tolerance;

        if !is_safe {
            flags.push(DecisionFlag::RiskFail);
            reasons.push(format!(
                "Risk score {max_risk_score} exceeds tolerance {tolerance}"
            ));
        } else if !flags.contains(&DecisionFlag::RiskPass) {
            flags.push(DecisionFlag::RiskPass);
        }

        RiskAssessment {
            is_safe,
            score: max_risk_score,
            reasons,
            decision_flags: flags,
        }
    }
}
