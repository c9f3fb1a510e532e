use super::sink::AuditSink;
use super::trace::ReasoningTrace;
use crate::error::AuditError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AuditEventType {
    ContentGenerationSuccess,
    ContentGenerationBlocked,
}

/// Immutable bundle of every trace produced by one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    event_id: String,
    event_type: AuditEventType,
    timestamp: DateTime<Utc>,
    traces: Vec<ReasoningTrace>,
}

impl AuditEvent {
    pub fn new(event_type: AuditEventType, traces: Vec<ReasoningTrace>) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            event_type,
            timestamp: Utc::now(),
            traces,
        }
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn event_type(&self) -> AuditEventType {
        self.event_type
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn traces(&self) -> &[ReasoningTrace] {
        &self.traces
    }

    /// Structured document: `{event_id, event_type, timestamp, traces}`.
    pub fn to_document(&self) -> Result<serde_json::Value, AuditError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> Result<String, AuditError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, AuditError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Wraps a finished trace set into an [`AuditEvent`] and appends it to the
/// configured sink in one call.
#[derive(Clone)]
pub struct AuditLogger {
    sink: Arc<dyn AuditSink>,
}

impl AuditLogger {
    pub fn new(sink: Arc<dyn AuditSink>) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &Arc<dyn AuditSink> {
        &self.sink
    }

    pub async fn log_event(
        &self,
        event_type: AuditEventType,
        traces: Vec<ReasoningTrace>,
    ) -> Result<AuditEvent, AuditError> {
        let event = AuditEvent::new(event_type, traces);
        self.sink.append(&event).await?;
        info!(
            event_id = %event.event_id,
            event_type = %event.event_type,
            traces = event.traces.len(),
            sink = self.sink.name(),
            "audit.event_logged"
        );
        Ok(event)
    }
}
