// Cortex: policy risk scoring and advisory viability scoring.

pub mod risk;
pub mod viability;

pub use risk::{DecisionFlag, RiskAssessment, RiskEngine};
pub use viability::{Alignment, ViabilityAssessment, ViabilityScorer};
