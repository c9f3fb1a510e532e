use super::log::LogObserver;
use super::noop::NoopObserver;
use super::traits::Observer;
use crate::config::ObservabilityConfig;
use std::sync::Arc;
use tracing::warn;

/// Factory: pick the observer named by `observability.backend`.
/// Unknown names fall back to the no-op observer.
pub fn create_observer(config: &ObservabilityConfig) -> Arc<dyn Observer> {
    match config.backend.as_str() {
        "log" => Arc::new(LogObserver::new()),
        "none" | "noop" => Arc::new(NoopObserver),
        other => {
            warn!(backend = %other, "unknown observability backend; using noop");
            Arc::new(NoopObserver)
        }
    }
}
