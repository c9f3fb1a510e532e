use super::ambiguity::AmbiguityDetector;
use super::types::{IntentRequest, IntentResponse, IntentType};
use tracing::debug;

struct IntentRule {
    intent: IntentType,
    confidence: f64,
    keywords: &'static [&'static str],
    reasoning: &'static str,
}

// Evaluated in order; the first rule with a matching keyword wins.
const RULES: [IntentRule; 4] = [
    IntentRule {
        intent: IntentType::Decision,
        confidence: 0.8,
        keywords: &["should", "analyze", "review", "audit"],
        reasoning: "Detected decision/analysis keywords.",
    },
    IntentRule {
        intent: IntentType::Planning,
        confidence: 0.85,
        keywords: &["plan", "strategy", "calendar", "schedule"],
        reasoning: "Detected planning keywords.",
    },
    IntentRule {
        intent: IntentType::Reflection,
        confidence: 0.8,
        keywords: &["reflect", "grow", "learning", "insight"],
        reasoning: "Detected reflection keywords.",
    },
    IntentRule {
        intent: IntentType::Creation,
        confidence: 0.9,
        keywords: &["create", "write", "post", "draft", "caption"],
        reasoning: "Detected creation keywords.",
    },
];

const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Keyword heuristic classifier, gated by an [`AmbiguityDetector`].
#[derive(Debug, Clone, Default)]
pub struct IntentClassifier {
    detector: AmbiguityDetector,
}

impl IntentClassifier {
    pub fn new(detector: AmbiguityDetector) -> Self {
        Self { detector }
    }

    pub fn predict(&self, request: &IntentRequest) -> IntentResponse {
        if self.detector.is_ambiguous(&request.query) {
            return IntentResponse {
                intent_type: IntentType::Unknown,
                confidence: 0.0,
                ambiguity_flag: true,
                reasoning: Some("Query is too short or vague.".into()),
            };
        }

        let lowered = request.query.to_lowercase();
        let matched = RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw)));

        let response = match matched {
            Some(rule) => IntentResponse {
                intent_type: rule.intent,
                confidence: rule.confidence,
                ambiguity_flag: false,
                reasoning: Some(rule.reasoning.into()),
            },
            None => IntentResponse {
                intent_type: IntentType::Unknown,
                confidence: FALLBACK_CONFIDENCE,
                ambiguity_flag: false,
                reasoning: Some("No specific keywords matching known intents.".into()),
            },
        };
        debug!(
            intent = %response.intent_type,
            confidence = response.confidence,
            "intent.classified"
        );
        response
    }
}
