use crate::error::GenerationError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Fully resolved input for one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub format: String,
    pub tone: String,
    pub constraints: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub script: String,
    pub caption: String,
    pub hashtags: Vec<String>,
}

/// Content generation capability.
///
/// A backend failure is fatal to the pipeline run that called it; there are
/// no retries at this layer.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest)
    -> Result<GeneratedContent, GenerationError>;

    /// Human-readable backend name, recorded in the Broca trace.
    fn name(&self) -> &str;
}
