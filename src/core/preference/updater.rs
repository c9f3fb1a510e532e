use super::types::{CreatorState, FeedbackKind, PreferenceUpdate, RejectionReason};
use tracing::debug;

const TOO_RISKY_FACTOR: f64 = 0.8;
const BORING_FACTOR: f64 = 1.05;
const RISKY_ACCEPT_FACTOR: f64 = 1.1;
const RISKY_ACCEPT_THRESHOLD: f64 = 0.7;

/// Adjusts a creator's risk tolerance from accept/reject feedback.
///
/// Stateless; concurrent updates for the same creator must be serialized by
/// the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferenceUpdater;

impl PreferenceUpdater {
    pub fn new() -> Self {
        Self
    }

    /// At most one rule fires per call. The result is rounded to four
    /// decimals and clamped to `[0, 1]`.
    pub fn update(&self, state: &CreatorState, update: &PreferenceUpdate) -> CreatorState {
        let current = state.risk_tolerance;
        let adjusted = match (update.feedback, update.rejection_reason) {
            (FeedbackKind::Rejected, Some(RejectionReason::TooRisky)) => current * TOO_RISKY_FACTOR,
            (FeedbackKind::Rejected, Some(RejectionReason::Boring)) => {
                (current * BORING_FACTOR).min(1.0)
            }
            (FeedbackKind::Accepted, _) if update.content_risk_score > RISKY_ACCEPT_THRESHOLD => {
                (current * RISKY_ACCEPT_FACTOR).min(1.0)
            }
            _ => current,
        };
        let risk_tolerance = round4(adjusted).clamp(0.0, 1.0);

        debug!(
            creator_id = %state.creator_id,
            feedback = %update.feedback,
            before = current,
            after = risk_tolerance,
            "preference.update"
        );

        CreatorState {
            creator_id: state.creator_id.clone(),
            risk_tolerance,
        }
    }

    /// Fold a feedback history into a final state. Updates addressed to a
    /// different creator are skipped.
    pub fn replay(&self, initial: &CreatorState, updates: &[PreferenceUpdate]) -> CreatorState {
        updates
            .iter()
            .filter(|u| u.creator_id == initial.creator_id)
            .fold(initial.clone(), |state, u| self.update(&state, u))
    }
}

/// Round to four decimals from the exact binary value, so a product that
/// sits just below a half-way point rounds down.
fn round4(value: f64) -> f64 {
    format!("{value:.4}").parse().unwrap_or(value)
}
