use super::constraints::ConstraintDeriver;
use super::stage::{StageMachine, apply_safety_gate};
use super::types::{ContentResult, Outcome, ResolvedRequest};
use crate::config::{Config, DefaultsConfig};
use crate::core::broca::{GenerationRequest, Generator, create_generator, derive_hashtags};
use crate::core::cortex::{RiskEngine, ViabilityScorer};
use crate::core::governance::{AuditLogger, AuditSink, ReasoningTrace, create_audit_sink};
use crate::core::profile::{CreatorProfile, Idea, ProfileProvider};
use crate::error::PipelineError;
use crate::runtime::observability::{Observer, ObserverEvent, ObserverMetric, create_observer};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs Setup, Viability, Generation and Risk in order, applies the safety
/// gate and publishes one audit event per run.
///
/// Holds no per-run state, so one instance can serve concurrent calls. The
/// audit sink is the only shared mutable resource.
pub struct Orchestrator {
    defaults: DefaultsConfig,
    platform_tags: Vec<String>,
    constraints: ConstraintDeriver,
    viability: ViabilityScorer,
    risk: RiskEngine,
    generator: Arc<dyn Generator>,
    audit: AuditLogger,
    observer: Arc<dyn Observer>,
}

impl Orchestrator {
    pub fn new(
        config: &Config,
        generator: Arc<dyn Generator>,
        sink: Arc<dyn AuditSink>,
        observer: Arc<dyn Observer>,
    ) -> Self {
        Self {
            defaults: config.defaults.clone(),
            platform_tags: config.generation.platform_tags.clone(),
            constraints: ConstraintDeriver::new(&config.constraints),
            viability: ViabilityScorer::new(config.viability.clone()),
            risk: RiskEngine::new(&config.risk),
            generator,
            audit: AuditLogger::new(sink),
            observer,
        }
    }

    /// Wire generator, audit sink and observer from their config sections.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let generator = create_generator(&config.generation)?;
        let sink = create_audit_sink(&config.audit, &config.workspace_dir).await?;
        let observer = create_observer(&config.observability);
        Ok(Self::new(config, generator, sink, observer))
    }

    pub fn audit_sink(&self) -> &Arc<dyn AuditSink> {
        self.audit.sink()
    }

    /// Fetch the creator's profile, then run the pipeline. A failed fetch
    /// ends the call before any stage runs; nothing is audited.
    pub async fn create_content_for_creator(
        &self,
        creator_id: &str,
        idea: &Idea,
        provider: &dyn ProfileProvider,
    ) -> Result<ContentResult, PipelineError> {
        let profile = match provider.fetch_profile(creator_id).await {
            Ok(profile) => profile,
            Err(e) => {
                self.report_failure("profile", &e.to_string());
                return Err(e.into());
            }
        };
        self.create_content(idea, &profile).await
    }

    /// Run the full pipeline for one idea.
    ///
    /// Errors only on collaborator failure. An unsafe verdict is returned
    /// as [`Outcome::Blocked`] with script and caption emptied.
    pub async fn create_content(
        &self,
        idea: &Idea,
        profile: &CreatorProfile,
    ) -> Result<ContentResult, PipelineError> {
        let started = Instant::now();
        let request = ResolvedRequest::resolve(idea, profile, &self.defaults);
        self.observer.record_event(&ObserverEvent::PipelineStart {
            topic: request.topic.clone(),
            tone: request.tone.clone(),
        });

        let mut machine = StageMachine::new();

        // Setup
        let stage_started = Instant::now();
        let mut trace = machine.begin()?;
        let derived = self.constraints.derive(&request.tone);
        for reason in &derived.reasons {
            trace.add_reason(reason.clone());
        }
        trace.log_input("topic", &request.topic);
        trace.log_input("tone", &request.tone);
        trace.log_input("format", &request.format);
        trace.log_input("risk_tolerance", request.risk_tolerance);
        trace.log_output("constraints", derived.constraints.join("; "));
        self.complete_stage(&mut machine, trace, stage_started)?;

        // Viability (advisory only)
        let stage_started = Instant::now();
        let mut trace = machine.begin()?;
        let viability = self.viability.assess(idea, profile);
        trace.log_input("idea_topics", request.idea_topics.join(", "));
        trace.log_input("creator_topics", request.creator_topics.join(", "));
        trace.log_output("viability_score", format!("{:.2}", viability.score));
        trace.log_output("alignment", viability.alignment);
        trace.add_reason(format!(
            "Topic alignment {} ({:+})",
            viability.alignment,
            self.viability.alignment_weight(viability.alignment)
        ));
        trace.add_reason("Viability is advisory and does not gate generation");
        self.observer
            .record_metric(&ObserverMetric::ViabilityScore(viability.score));
        self.complete_stage(&mut machine, trace, stage_started)?;

        // Generation
        let stage_started = Instant::now();
        let mut trace = machine.begin()?;
        let generation_request = GenerationRequest {
            topic: request.topic.clone(),
            format: request.format.clone(),
            tone: request.tone.clone(),
            constraints: derived.constraints,
        };
        trace.log_input("backend", self.generator.name());
        trace.log_input("constraint_count", generation_request.constraints.len());
        let content = match self.generator.generate(&generation_request).await {
            Ok(content) => content,
            Err(e) => {
                self.report_failure("generator", &e.to_string());
                return Err(e.into());
            }
        };
        trace.log_output("script_length", content.script.chars().count());
        trace.log_output("caption_length", content.caption.chars().count());
        trace.log_output("hashtag_count", content.hashtags.len());
        trace.add_reason(format!(
            "Generated {} content with {} constraint(s)",
            request.format,
            generation_request.constraints.len()
        ));
        self.complete_stage(&mut machine, trace, stage_started)?;

        // Risk
        let stage_started = Instant::now();
        let mut trace = machine.begin()?;
        let assessment = self.risk.assess_risk(&content.script, request.risk_tolerance);
        trace.log_input("risk_tolerance", request.risk_tolerance);
        trace.log_output("risk_safe", assessment.is_safe);
        trace.log_output("risk_score", assessment.score);
        trace.log_output(
            "decision_flags",
            assessment
                .decision_flags
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
        );
        if assessment.reasons.is_empty() {
            trace.add_reason("No risky keywords found");
        }
        for reason in &assessment.reasons {
            trace.add_reason(reason.clone());
        }
        self.observer
            .record_metric(&ObserverMetric::RiskScore(assessment.score));
        self.complete_stage(&mut machine, trace, stage_started)?;

        // Finalize: hashtags come from the topic, never from the backend.
        let (content, outcome) = apply_safety_gate(content, &assessment);
        let hashtags = derive_hashtags(&request.topic, &self.platform_tags);
        if outcome == Outcome::Blocked {
            warn!(
                topic = %request.topic,
                risk_score = assessment.score,
                tolerance = request.risk_tolerance,
                "pipeline.blocked"
            );
            self.observer.record_metric(&ObserverMetric::ContentBlocked);
        }

        let traces = machine.finish()?;
        let audit_event = match self.audit.log_event(outcome.event_type(), traces).await {
            Ok(event) => event,
            Err(e) => {
                self.report_failure("audit", &e.to_string());
                return Err(e.into());
            }
        };

        let elapsed = started.elapsed();
        self.observer.record_event(&ObserverEvent::PipelineEnd {
            outcome: outcome.to_string(),
            event_id: audit_event.event_id().to_string(),
            duration: elapsed,
        });
        self.observer
            .record_metric(&ObserverMetric::PipelineLatency(elapsed));
        info!(
            event_id = audit_event.event_id(),
            outcome = %outcome,
            "pipeline.complete"
        );

        Ok(ContentResult {
            script: content.script,
            caption: content.caption,
            hashtags,
            risk_assessment: assessment,
            outcome,
            audit_event,
        })
    }

    fn complete_stage(
        &self,
        machine: &mut StageMachine,
        trace: ReasoningTrace,
        started: Instant,
    ) -> Result<(), PipelineError> {
        let stage = trace.step().to_string();
        machine.complete(trace)?;
        debug!(stage = %stage, "pipeline.stage_complete");
        self.observer.record_event(&ObserverEvent::StageCompleted {
            stage,
            duration: started.elapsed(),
        });
        Ok(())
    }

    fn report_failure(&self, component: &str, message: &str) {
        warn!(component, error = %message, "pipeline.failed");
        self.observer.record_event(&ObserverEvent::Error {
            component: component.to_string(),
            message: message.to_string(),
        });
    }
}
