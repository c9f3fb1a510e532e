use crate::config::{ConstraintConfig, ToneRule};

/// Constraints selected for a tone, with the rationale recorded in the
/// Setup trace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedConstraints {
    pub constraints: Vec<String>,
    pub reasons: Vec<String>,
}

/// Maps a creator tone onto generation constraints.
#[derive(Debug, Clone, Default)]
pub struct ConstraintDeriver {
    rules: Vec<ToneRule>,
}

impl ConstraintDeriver {
    pub fn new(config: &ConstraintConfig) -> Self {
        Self {
            rules: config.rules.clone(),
        }
    }

    pub fn derive(&self, tone: &str) -> DerivedConstraints {
        let mut derived = DerivedConstraints::default();
        for rule in self
            .rules
            .iter()
            .filter(|r| r.tone.trim().eq_ignore_ascii_case(tone.trim()))
        {
            derived.constraints.push(rule.constraint.clone());
            derived
                .reasons
                .push(format!("Applied '{}' constraint for {tone} tone", rule.label));
        }

        if derived.constraints.is_empty() {
            derived
                .reasons
                .push(format!("No tone-specific constraint for {tone} tone"));
        }
        derived
    }
}
