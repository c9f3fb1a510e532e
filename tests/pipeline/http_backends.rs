use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use creatorcortex::Config;
use creatorcortex::core::broca::{GenerationRequest, Generator, HttpGenerator};
use creatorcortex::core::pipeline::Orchestrator;
use creatorcortex::core::profile::{HttpProfileProvider, Idea, ProfileProvider};
use creatorcortex::error::{GenerationError, PipelineError, ProfileError};

fn request() -> GenerationRequest {
    GenerationRequest {
        topic: "AI Agents".into(),
        format: "Short".into(),
        tone: "Casual".into(),
        constraints: vec!["Keep it conversational".into()],
    }
}

#[tokio::test]
async fn http_generator_posts_request_and_reads_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "script": "Host: agents are here",
            "caption": "Agents!",
            "hashtags": ["#Agents"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let generator = HttpGenerator::new(
        &format!("{}/generate", server.uri()),
        Some("test-key"),
        5,
        vec!["#FYP".into()],
    );
    let content = generator.generate(&request()).await.unwrap();

    assert_eq!(content.script, "Host: agents are here");
    assert_eq!(content.caption, "Agents!");
    assert_eq!(content.hashtags, vec!["#AIAgents", "#FYP"]);

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body["topic"], "AI Agents");
    assert_eq!(body["constraints"][0], "Keep it conversational");
}

#[tokio::test]
async fn http_generator_accepts_payload_without_hashtags() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "script": "s",
            "caption": "c"
        })))
        .mount(&server)
        .await;

    let generator = HttpGenerator::new(&server.uri(), None, 5, vec!["#FYP".into()]);
    let content = generator.generate(&request()).await.unwrap();
    assert_eq!(content.hashtags, vec!["#AIAgents", "#FYP"]);
}

#[tokio::test]
async fn http_generator_maps_server_error_to_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let generator = HttpGenerator::new(&server.uri(), None, 5, Vec::new());
    let err = generator.generate(&request()).await.unwrap_err();
    match err {
        GenerationError::Unavailable { backend, message } => {
            assert_eq!(backend, "http");
            assert!(message.contains("503"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn http_generator_rejects_malformed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "nope" })))
        .mount(&server)
        .await;

    let generator = HttpGenerator::new(&server.uri(), None, 5, Vec::new());
    assert!(matches!(
        generator.generate(&request()).await,
        Err(GenerationError::Malformed { .. })
    ));
}

#[tokio::test]
async fn profile_service_payload_accepts_tone_vector() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profiles/c-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "primary_topics": ["AI", "Society"],
            "tone_vector": "Professional",
            "risk_tolerance": 0.8
        })))
        .mount(&server)
        .await;

    let provider = HttpProfileProvider::new(&server.uri(), 2_000);
    let profile = provider.fetch_profile("c-7").await.unwrap();

    assert_eq!(profile.creator_id.as_deref(), Some("c-7"));
    assert_eq!(profile.tone.as_deref(), Some("Professional"));
    assert_eq!(profile.risk_tolerance, Some(0.8));
}

#[tokio::test]
async fn profile_service_receives_encoded_creator_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profiles/team%2Fc-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tone_vector": "Casual"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = HttpProfileProvider::new(&server.uri(), 2_000);
    let profile = provider.fetch_profile("team/c-7").await.unwrap();

    assert_eq!(profile.creator_id.as_deref(), Some("team/c-7"));
    assert_eq!(profile.tone.as_deref(), Some("Casual"));
}

#[tokio::test]
async fn profile_service_errors_are_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profiles/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/profiles/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/profiles/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = HttpProfileProvider::new(&server.uri(), 100);
    assert!(matches!(
        provider.fetch_profile("missing").await,
        Err(ProfileError::NotFound(_))
    ));
    assert!(matches!(
        provider.fetch_profile("slow").await,
        Err(ProfileError::Timeout(_))
    ));
    assert!(matches!(
        provider.fetch_profile("broken").await,
        Err(ProfileError::Unavailable(_))
    ));
}

#[tokio::test]
async fn configured_http_backend_runs_the_pipeline() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "script": "Free money for everyone who follows",
            "caption": "Follow!",
        })))
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.generation.backend = "http".into();
    config.generation.endpoint = Some(server.uri());
    config.audit.backend = "memory".into();
    config.observability.backend = "none".into();

    let orchestrator = Orchestrator::from_config(&config).await.unwrap();
    let result = orchestrator
        .create_content(
            &Idea::new("Side hustles"),
            &creatorcortex::core::profile::CreatorProfile::default().with_risk_tolerance(0.5),
        )
        .await
        .unwrap();

    assert!(result.is_blocked());
    assert_eq!(result.hashtags[0], "#Sidehustles");
    assert_eq!(result.audit_event.traces()[2].input("backend"), Some("http"));

    let stored = orchestrator
        .audit_sink()
        .query(&Default::default())
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn backend_hashtags_never_reach_a_blocked_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "script": "This is a scam",
            "caption": "Trust me",
            "hashtags": ["#scam", "#fraud"]
        })))
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.generation.backend = "http".into();
    config.generation.endpoint = Some(server.uri());
    config.generation.platform_tags = vec!["#FYP".into()];
    config.audit.backend = "memory".into();

    let orchestrator = Orchestrator::from_config(&config).await.unwrap();
    let result = orchestrator
        .create_content(
            &Idea::new("Cooking pasta"),
            &creatorcortex::core::profile::CreatorProfile::default().with_risk_tolerance(0.1),
        )
        .await
        .unwrap();

    assert!(result.is_blocked());
    assert_eq!(result.script, "");
    assert_eq!(result.hashtags, vec!["#Cookingpasta", "#FYP"]);
}

#[tokio::test]
async fn unreachable_generator_fails_the_run() {
    let mut config = Config::default();
    config.generation.backend = "http".into();
    config.generation.endpoint = Some("http://127.0.0.1:9/generate".into());
    config.generation.timeout_secs = 2;
    config.audit.backend = "memory".into();

    let orchestrator = Orchestrator::from_config(&config).await.unwrap();
    let err = orchestrator
        .create_content(&Idea::new("AI"), &Default::default())
        .await
        .unwrap_err();
    assert!(matches!(err, PipelineError::Generation(_)));
}
