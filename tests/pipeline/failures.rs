use std::sync::Arc;

use creatorcortex::Config;
use creatorcortex::core::broca::TemplateGenerator;
use creatorcortex::core::pipeline::Orchestrator;
use creatorcortex::core::profile::{CreatorProfile, Idea, InMemoryProfileProvider};
use creatorcortex::error::{AuditError, GenerationError, PipelineError, ProfileError};
use creatorcortex::runtime::observability::NoopObserver;

use super::pipeline_harness::{BrokenAuditSink, FixedGenerator, Harness, UnavailableGenerator};

#[tokio::test]
async fn generator_outage_is_an_error_not_a_block() {
    let harness = Harness::with_generator(Arc::new(UnavailableGenerator));
    let err = harness
        .orchestrator
        .create_content(&Idea::new("AI Agents"), &CreatorProfile::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Generation(GenerationError::Unavailable { .. })
    ));
    assert!(harness.stored_events().await.is_empty());
    assert!(harness.observer.labels().contains(&"error:generator".to_string()));
    assert!(!harness.observer.labels().iter().any(|l| l.starts_with("end:")));
}

#[tokio::test]
async fn unknown_creator_aborts_before_any_stage() {
    let harness = Harness::template();
    let provider = InMemoryProfileProvider::new();

    let err = harness
        .orchestrator
        .create_content_for_creator("ghost", &Idea::new("AI"), &provider)
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::Profile(ProfileError::NotFound(_))));
    assert!(harness.stored_events().await.is_empty());
    assert_eq!(harness.observer.labels(), ["error:profile"]);
}

#[tokio::test]
async fn fetched_profile_drives_the_run() {
    let harness = Harness::template();
    let provider = InMemoryProfileProvider::new();
    provider.insert(
        "c-42",
        CreatorProfile::new("c-42").with_tone("Professional").with_risk_tolerance(0.8),
    );

    let result = harness
        .orchestrator
        .create_content_for_creator("c-42", &Idea::new("AI Ethics"), &provider)
        .await
        .unwrap();

    assert!(result.script.contains("Use formal language"));
    assert_eq!(harness.stored_events().await.len(), 1);
}

#[tokio::test]
async fn audit_sink_failure_is_propagated() {
    let config = Config::default();
    let orchestrator = Orchestrator::new(
        &config,
        Arc::new(TemplateGenerator::new(Vec::new())),
        Arc::new(BrokenAuditSink),
        Arc::new(NoopObserver),
    );

    let err = orchestrator
        .create_content(&Idea::new("AI Agents"), &CreatorProfile::default())
        .await
        .unwrap_err();
    assert!(matches!(err, PipelineError::Audit(AuditError::Append(_))));
}

#[tokio::test]
async fn risk_is_scored_on_generated_script() {
    let harness = Harness::with_generator(Arc::new(FixedGenerator {
        script: "Guaranteed returns with this one crypto gem".into(),
    }));
    let result = harness
        .orchestrator
        .create_content(
            &Idea::new("Personal finance"),
            &CreatorProfile::default().with_risk_tolerance(0.7),
        )
        .await
        .unwrap();

    assert!(result.is_blocked());
    assert!((result.risk_assessment.score - 0.8).abs() < f64::EPSILON);
    assert_eq!(
        result.hashtags,
        vec!["#Personalfinance", "#Trending", "#FYP", "#LearnOnTikTok"]
    );
    assert_eq!(result.risk_assessment.reasons.len(), 3);
}
