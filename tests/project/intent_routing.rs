use creatorcortex::core::intent::{AmbiguityDetector, IntentClassifier, IntentRequest, IntentType};

#[test]
fn vague_requests_are_flagged() {
    let classifier = IntentClassifier::default();
    for query in ["help", "help me", "start", "grow"] {
        let response = classifier.predict(&IntentRequest::new(query));
        assert!(response.ambiguity_flag, "{query} should be ambiguous");
        assert_eq!(response.intent_type, IntentType::Unknown);
    }
}

#[test]
fn configured_threshold_is_honoured() {
    let classifier = IntentClassifier::new(AmbiguityDetector::new(4));
    let response = classifier.predict(&IntentRequest::new("draft"));
    assert!(!response.ambiguity_flag);
    assert_eq!(response.intent_type, IntentType::Creation);
}

#[test]
fn request_context_is_optional_in_json() {
    let request: IntentRequest =
        serde_json::from_str(r#"{"query":"Plan my posting schedule for the week"}"#).unwrap();
    let response = IntentClassifier::default().predict(&request);
    assert_eq!(response.intent_type, IntentType::Planning);
    assert!((response.confidence - 0.85).abs() < f64::EPSILON);
}
