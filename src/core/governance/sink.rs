use super::audit::{AuditEvent, AuditEventType};
use super::sqlite::SqliteAuditSink;
use crate::config::AuditConfig;
use crate::error::{AuditError, ConfigError};
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Filter for reading events back out of a sink.
///
/// `limit` keeps the most recent matching events; results are always
/// returned in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditQuery {
    pub event_type: Option<AuditEventType>,
    pub limit: Option<usize>,
}

impl AuditQuery {
    pub fn with_event_type(mut self, event_type: AuditEventType) -> Self {
        self.event_type = Some(event_type);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, event: &AuditEvent) -> bool {
        self.event_type.is_none_or(|t| t == event.event_type())
    }
}

/// Destination for finished audit events.
///
/// `append` must store one complete event atomically; concurrent appends may
/// land in either order but never interleave.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn append(&self, event: &AuditEvent) -> Result<(), AuditError>;
    async fn query(&self, query: &AuditQuery) -> Result<Vec<AuditEvent>, AuditError>;
    fn name(&self) -> &str;
}

#[derive(Default)]
pub struct InMemoryAuditSink {
    events: Mutex<Vec<AuditEvent>>,
}

impl InMemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.lock().map_or(0, |events| events.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AuditSink for InMemoryAuditSink {
    async fn append(&self, event: &AuditEvent) -> Result<(), AuditError> {
        let mut events = self
            .events
            .lock()
            .map_err(|e| AuditError::Append(e.to_string()))?;
        events.push(event.clone());
        Ok(())
    }

    async fn query(&self, query: &AuditQuery) -> Result<Vec<AuditEvent>, AuditError> {
        let events = self
            .events
            .lock()
            .map_err(|e| AuditError::Query(e.to_string()))?;
        let matched: Vec<&AuditEvent> = events.iter().filter(|e| query.matches(e)).collect();
        let skip = query
            .limit
            .map_or(0, |limit| matched.len().saturating_sub(limit));
        Ok(matched.into_iter().skip(skip).cloned().collect())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Build the sink named by `audit.backend`. Relative SQLite paths resolve
/// against the workspace directory. There is no way to disable auditing.
pub async fn create_audit_sink(
    config: &AuditConfig,
    workspace_dir: &Path,
) -> Result<Arc<dyn AuditSink>> {
    match config.backend.as_str() {
        "memory" => Ok(Arc::new(InMemoryAuditSink::new())),
        "sqlite" => {
            let path = if Path::new(&config.path).is_absolute() {
                config.path.clone().into()
            } else {
                workspace_dir.join(&config.path)
            };
            Ok(Arc::new(SqliteAuditSink::open(&path).await?))
        }
        other => Err(ConfigError::UnknownBackend {
            kind: "audit",
            name: other.to_string(),
        }
        .into()),
    }
}
