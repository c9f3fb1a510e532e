use crate::error::PreferenceError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FeedbackKind {
    Accepted,
    Rejected,
    Edited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RejectionReason {
    TooRisky,
    OffBrand,
    Boring,
    Other,
}

/// One feedback record about a piece of generated content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceUpdate {
    pub creator_id: String,
    pub content_id: String,
    pub feedback: FeedbackKind,
    #[serde(default)]
    pub rejection_reason: Option<RejectionReason>,
    pub content_risk_score: f64,
}

impl PreferenceUpdate {
    pub fn validate(&self) -> Result<(), PreferenceError> {
        if !(0.0..=1.0).contains(&self.content_risk_score) {
            return Err(PreferenceError::RiskScoreOutOfRange(self.content_risk_score));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorState {
    pub creator_id: String,
    pub risk_tolerance: f64,
}

impl CreatorState {
    /// Rejects a tolerance outside `[0, 1]` instead of clamping it.
    pub fn new(
        creator_id: impl Into<String>,
        risk_tolerance: f64,
    ) -> Result<Self, PreferenceError> {
        if !(0.0..=1.0).contains(&risk_tolerance) {
            return Err(PreferenceError::ToleranceOutOfRange(risk_tolerance));
        }
        Ok(Self {
            creator_id: creator_id.into(),
            risk_tolerance,
        })
    }
}
