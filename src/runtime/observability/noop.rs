use super::traits::{Observer, ObserverEvent, ObserverMetric};

/// Observer that discards every pipeline event and metric.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    #[inline(always)]
    fn record_event(&self, _event: &ObserverEvent) {}

    #[inline(always)]
    fn record_metric(&self, _metric: &ObserverMetric) {}

    fn name(&self) -> &str {
        "noop"
    }
}
