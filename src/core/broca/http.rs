use super::hashtags::derive_hashtags;
use super::traits::{GeneratedContent, GenerationRequest, Generator};
use crate::error::GenerationError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const BACKEND: &str = "http";

/// Model-serving backend: POSTs the resolved request as JSON and expects
/// `{script, caption}` back. Hashtags are always derived from the topic;
/// any the backend sends are ignored.
pub struct HttpGenerator {
    endpoint: String,
    api_key: Option<String>,
    platform_tags: Vec<String>,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    script: String,
    caption: String,
}

impl HttpGenerator {
    pub fn new(
        endpoint: &str,
        api_key: Option<&str>,
        timeout_secs: u64,
        platform_tags: Vec<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.map(ToString::to_string),
            platform_tags,
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .connect_timeout(Duration::from_secs(10))
                .pool_max_idle_per_host(10)
                .pool_idle_timeout(Duration::from_secs(90))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn unavailable(message: impl Into<String>) -> GenerationError {
        GenerationError::Unavailable {
            backend: BACKEND.into(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl Generator for HttpGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedContent, GenerationError> {
        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::unavailable(format!("{} - {body}", status.as_u16())));
        }

        let payload: GenerateResponse =
            response
                .json()
                .await
                .map_err(|e| GenerationError::Malformed {
                    backend: BACKEND.into(),
                    message: e.to_string(),
                })?;

        Ok(GeneratedContent {
            script: payload.script,
            caption: payload.caption,
            hashtags: derive_hashtags(&request.topic, &self.platform_tags),
        })
    }

    fn name(&self) -> &str {
        BACKEND
    }
}
