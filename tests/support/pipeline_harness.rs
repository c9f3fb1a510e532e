#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use creatorcortex::Config;
use creatorcortex::core::broca::{GeneratedContent, GenerationRequest, Generator, TemplateGenerator};
use creatorcortex::core::governance::{AuditEvent, AuditQuery, AuditSink, InMemoryAuditSink};
use creatorcortex::core::pipeline::Orchestrator;
use creatorcortex::core::profile::CreatorProfile;
use creatorcortex::error::{AuditError, GenerationError};
use creatorcortex::runtime::observability::{Observer, ObserverEvent, ObserverMetric};

/// Observer that keeps a label for every event it sees.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn labels(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl Observer for RecordingObserver {
    fn record_event(&self, event: &ObserverEvent) {
        let label = match event {
            ObserverEvent::PipelineStart { .. } => "start".to_string(),
            ObserverEvent::StageCompleted { stage, .. } => format!("stage:{stage}"),
            ObserverEvent::PipelineEnd { outcome, .. } => format!("end:{outcome}"),
            ObserverEvent::PreferenceUpdated { .. } => "preference".to_string(),
            ObserverEvent::Error { component, .. } => format!("error:{component}"),
        };
        self.events.lock().unwrap().push(label);
    }

    fn record_metric(&self, _metric: &ObserverMetric) {}

    fn name(&self) -> &str {
        "recording"
    }
}

/// Generator whose backend is always down.
pub struct UnavailableGenerator;

#[async_trait]
impl Generator for UnavailableGenerator {
    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<GeneratedContent, GenerationError> {
        Err(GenerationError::Unavailable {
            backend: "offline".into(),
            message: "connection refused".into(),
        })
    }

    fn name(&self) -> &str {
        "offline"
    }
}

/// Generator that returns a fixed script regardless of the request.
pub struct FixedGenerator {
    pub script: String,
}

#[async_trait]
impl Generator for FixedGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedContent, GenerationError> {
        Ok(GeneratedContent {
            script: self.script.clone(),
            caption: format!("caption for {}", request.topic),
            hashtags: vec!["#Fixed".into()],
        })
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Sink that rejects every append.
pub struct BrokenAuditSink;

#[async_trait]
impl AuditSink for BrokenAuditSink {
    async fn append(&self, _event: &AuditEvent) -> Result<(), AuditError> {
        Err(AuditError::Append("disk full".into()))
    }

    async fn query(&self, _query: &AuditQuery) -> Result<Vec<AuditEvent>, AuditError> {
        Ok(Vec::new())
    }

    fn name(&self) -> &str {
        "broken"
    }
}

pub struct Harness {
    pub orchestrator: Orchestrator,
    pub sink: Arc<InMemoryAuditSink>,
    pub observer: Arc<RecordingObserver>,
}

impl Harness {
    pub fn with_generator(generator: Arc<dyn Generator>) -> Self {
        let config = Config::default();
        let sink = Arc::new(InMemoryAuditSink::new());
        let observer = Arc::new(RecordingObserver::default());
        let orchestrator = Orchestrator::new(&config, generator, sink.clone(), observer.clone());
        Self {
            orchestrator,
            sink,
            observer,
        }
    }

    pub fn template() -> Self {
        let tags = Config::default().generation.platform_tags;
        Self::with_generator(Arc::new(TemplateGenerator::new(tags)))
    }

    pub async fn stored_events(&self) -> Vec<AuditEvent> {
        self.sink.query(&AuditQuery::default()).await.unwrap()
    }
}

pub fn profile(topics: &[&str], tone: &str, tolerance: f64) -> CreatorProfile {
    CreatorProfile::default()
        .with_topics(topics.iter().copied())
        .with_tone(tone)
        .with_risk_tolerance(tolerance)
}
