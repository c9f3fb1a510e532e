use super::audit::AuditEvent;
use super::sink::{AuditQuery, AuditSink};
use crate::error::AuditError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Durable audit log: one row per event, the full document stored as JSON.
pub struct SqliteAuditSink {
    pool: SqlitePool,
    path: PathBuf,
}

impl SqliteAuditSink {
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create audit directory: {}", parent.display())
            })?;
        }

        let url = format!("sqlite://{}?mode=rwc", path.display());
        let pool = SqlitePoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .with_context(|| format!("Failed to open audit DB: {}", path.display()))?;

        ensure_schema(&pool).await?;
        Ok(Self {
            pool,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS audit_events (
            seq         INTEGER PRIMARY KEY AUTOINCREMENT,
            event_id    TEXT NOT NULL UNIQUE,
            event_type  TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            document    TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .context("Failed to create audit_events table")?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_audit_events_type ON audit_events(event_type)")
        .execute(pool)
        .await
        .context("Failed to create audit_events index")?;
    Ok(())
}

#[async_trait]
impl AuditSink for SqliteAuditSink {
    async fn append(&self, event: &AuditEvent) -> Result<(), AuditError> {
        let document = event.to_json()?;
        let event_type = event.event_type().to_string();
        let created_at = event.timestamp().to_rfc3339();
        sqlx::query(
            "INSERT INTO audit_events (event_id, event_type, created_at, document)
             VALUES (?, ?, ?, ?)",
        )
        .bind(event.event_id())
        .bind(&event_type)
        .bind(&created_at)
        .bind(&document)
        .execute(&self.pool)
        .await
        .map_err(|e| AuditError::Append(e.to_string()))?;

        debug!(event_id = event.event_id(), "audit.sqlite.appended");
        Ok(())
    }

    async fn query(&self, query: &AuditQuery) -> Result<Vec<AuditEvent>, AuditError> {
        let mut sql = String::from("SELECT document FROM audit_events");
        if query.event_type.is_some() {
            sql.push_str(" WHERE event_type = ?");
        }
        sql.push_str(" ORDER BY seq DESC");
        if query.limit.is_some() {
            sql.push_str(" LIMIT ?");
        }

        let mut statement = sqlx::query(&sql);
        if let Some(event_type) = query.event_type {
            statement = statement.bind(event_type.to_string());
        }
        if let Some(limit) = query.limit {
            statement = statement.bind(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let rows = statement
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AuditError::Query(e.to_string()))?;

        let mut events = rows
            .iter()
            .map(|row| {
                let document: String = row.get("document");
                AuditEvent::from_json(&document)
            })
            .collect::<Result<Vec<_>, _>>()?;
        events.reverse();
        Ok(events)
    }

    fn name(&self) -> &str {
        "sqlite"
    }
}
