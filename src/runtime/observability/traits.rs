use std::time::Duration;

/// Events the observer can record
#[derive(Debug, Clone)]
pub enum ObserverEvent {
    PipelineStart {
        topic: String,
        tone: String,
    },
    StageCompleted {
        stage: String,
        duration: Duration,
    },
    PipelineEnd {
        outcome: String,
        event_id: String,
        duration: Duration,
    },
    PreferenceUpdated {
        creator_id: String,
        before: f64,
        after: f64,
    },
    Error {
        component: String,
        message: String,
    },
}

/// Numeric metrics
#[derive(Debug, Clone)]
pub enum ObserverMetric {
    PipelineLatency(Duration),
    ViabilityScore(f64),
    RiskScore(f64),
    ContentBlocked,
}

/// Sink for pipeline events and metrics.
pub trait Observer: Send + Sync {
    /// Record a discrete event
    fn record_event(&self, event: &ObserverEvent);

    /// Record a numeric metric
    fn record_metric(&self, metric: &ObserverMetric);

    /// Flush any buffered data (no-op for most backends)
    fn flush(&self) {}

    /// Human-readable name of this observer
    fn name(&self) -> &str;
}
