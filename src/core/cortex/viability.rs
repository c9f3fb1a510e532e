use crate::config::ViabilityConfig;
use crate::core::profile::{CreatorProfile, Idea};
use rand::Rng;
use std::collections::HashSet;
use strum::Display;

/// Topical alignment between an idea and a creator's stated interests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Alignment {
    /// The idea carries no topics.
    Neutral,
    /// At least one idea topic is a creator topic.
    Strong,
    /// Non-empty, disjoint topic sets.
    Mismatch,
}

impl Alignment {
    pub fn between(idea_topics: &[String], creator_topics: &[String]) -> Self {
        let idea: HashSet<String> = idea_topics.iter().map(|t| t.to_lowercase()).collect();
        if idea.is_empty() {
            return Self::Neutral;
        }
        let creator: HashSet<String> = creator_topics.iter().map(|t| t.to_lowercase()).collect();
        if idea.is_disjoint(&creator) {
            Self::Mismatch
        } else {
            Self::Strong
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViabilityAssessment {
    pub alignment: Alignment,
    pub noise: f64,
    /// Final advisory score in `[0, 100]`.
    pub score: f64,
}

/// Advisory viability scorer. The output never gates generation.
#[derive(Debug, Clone, Default)]
pub struct ViabilityScorer {
    config: ViabilityConfig,
}

impl ViabilityScorer {
    pub fn new(config: ViabilityConfig) -> Self {
        Self { config }
    }

    pub fn alignment_weight(&self, alignment: Alignment) -> f64 {
        match alignment {
            Alignment::Neutral => 0.0,
            Alignment::Strong => self.config.strong_alignment,
            Alignment::Mismatch => self.config.mismatch_penalty,
        }
    }

    /// Score an idea in `[0, 100]` with fresh one-sided noise.
    pub fn score_idea(&self, idea: &Idea, profile: &CreatorProfile) -> f64 {
        self.assess(idea, profile).score
    }

    pub fn assess(&self, idea: &Idea, profile: &CreatorProfile) -> ViabilityAssessment {
        let noise = rand::rng().random_range(0.0..=self.config.max_noise.max(0.0));
        self.assess_with_noise(idea, profile, noise)
    }

    /// Deterministic core of [`Self::assess`]; `noise` is clamped into
    /// `[0, max_noise]`.
    pub fn assess_with_noise(
        &self,
        idea: &Idea,
        profile: &CreatorProfile,
        noise: f64,
    ) -> ViabilityAssessment {
        let alignment = Alignment::between(&idea.topics, &profile.primary_topics);
        let noise = noise.clamp(0.0, self.config.max_noise.max(0.0));
        let raw = self.config.base_score + self.alignment_weight(alignment) + noise;

        ViabilityAssessment {
            alignment,
            noise,
            score: raw.clamp(0.0, 1.0) * 100.0,
        }
    }
}
