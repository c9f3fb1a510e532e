use thiserror::Error;

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("unknown {kind} backend: {name}")]
    UnknownBackend { kind: &'static str, name: String },
}

// ─── Pipeline errors ────────────────────────────────────────────────────────

/// Fatal failures of one `create_content` invocation.
///
/// A risk-policy block is not represented here: it is a normal terminal
/// outcome carried by the returned `ContentResult`.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("profile unavailable: {0}")]
    Profile(#[from] ProfileError),

    #[error("generation unavailable: {0}")]
    Generation(#[from] GenerationError),

    #[error("audit sink: {0}")]
    Audit(#[from] AuditError),

    #[error("stage order violated: expected {expected}, got {found}")]
    StageOrder { expected: String, found: String },
}

// ─── Profile provider errors ────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile {0} not found")]
    NotFound(String),

    #[error("timed out fetching profile {0}")]
    Timeout(String),

    #[error("profile service error: {0}")]
    Unavailable(String),
}

// ─── Generation backend errors ──────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("backend {backend} request failed: {message}")]
    Unavailable { backend: String, message: String },

    #[error("backend {backend} returned malformed content: {message}")]
    Malformed { backend: String, message: String },
}

// ─── Audit errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("append failed: {0}")]
    Append(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("codec: {0}")]
    Codec(#[from] serde_json::Error),
}

// ─── Preference errors ──────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("content risk score {0} outside [0, 1]")]
    RiskScoreOutOfRange(f64),

    #[error("risk tolerance {0} outside [0, 1]")]
    ToleranceOutOfRange(f64),
}
