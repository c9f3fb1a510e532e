use super::traits::{Observer, ObserverEvent, ObserverMetric};
use tracing::{info, warn};

/// Writes pipeline events and metrics as tracing records.
#[derive(Debug, Default)]
pub struct LogObserver;

impl LogObserver {
    pub fn new() -> Self {
        Self
    }
}

fn millis(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl Observer for LogObserver {
    fn record_event(&self, event: &ObserverEvent) {
        match event {
            ObserverEvent::PipelineStart { topic, tone } => {
                info!(topic = %topic, tone = %tone, "pipeline.start");
            }
            ObserverEvent::StageCompleted { stage, duration } => {
                info!(stage = %stage, duration_ms = millis(*duration), "pipeline.stage");
            }
            ObserverEvent::PipelineEnd {
                outcome,
                event_id,
                duration,
            } => {
                info!(
                    outcome = %outcome,
                    event_id = %event_id,
                    duration_ms = millis(*duration),
                    "pipeline.end"
                );
            }
            ObserverEvent::PreferenceUpdated {
                creator_id,
                before,
                after,
            } => {
                info!(creator_id = %creator_id, before, after, "preference.updated");
            }
            ObserverEvent::Error { component, message } => {
                warn!(component = %component, error = %message, "error");
            }
        }
    }

    fn record_metric(&self, metric: &ObserverMetric) {
        match metric {
            ObserverMetric::PipelineLatency(d) => {
                info!(latency_ms = millis(*d), "metric.pipeline_latency");
            }
            ObserverMetric::ViabilityScore(score) => {
                info!(score, "metric.viability_score");
            }
            ObserverMetric::RiskScore(score) => {
                info!(score, "metric.risk_score");
            }
            ObserverMetric::ContentBlocked => {
                info!("metric.content_blocked");
            }
        }
    }

    fn name(&self) -> &str {
        "log"
    }
}
