// Governance: reasoning traces, audit events and the sinks that persist them.

pub mod audit;
pub mod sink;
pub mod sqlite;
pub mod trace;

pub use audit::{AuditEvent, AuditEventType, AuditLogger};
pub use sink::{AuditQuery, AuditSink, InMemoryAuditSink, create_audit_sink};
pub use sqlite::SqliteAuditSink;
pub use trace::{ReasoningTrace, StepName};
