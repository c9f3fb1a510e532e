use super::provider::ProfileProvider;
use super::types::CreatorProfile;
use crate::error::ProfileError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::debug;

/// Profile service client: `GET {base_url}/profiles/{creator_id}`.
pub struct HttpProfileProvider {
    base_url: String,
    client: Client,
}

impl HttpProfileProvider {
    pub fn new(base_url: &str, timeout_ms: u64) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(Duration::from_millis(timeout_ms))
                .connect_timeout(Duration::from_millis(timeout_ms))
                .pool_idle_timeout(Duration::from_secs(90))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// `creator_id` is pushed as a single percent-encoded path segment.
    fn profile_url(&self, creator_id: &str) -> Result<Url, ProfileError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ProfileError::Unavailable(format!("invalid profile service URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| {
                ProfileError::Unavailable(format!("cannot-be-a-base URL: {}", self.base_url))
            })?
            .pop_if_empty()
            .push("profiles")
            .push(creator_id);
        Ok(url)
    }
}

#[async_trait]
impl ProfileProvider for HttpProfileProvider {
    async fn fetch_profile(&self, creator_id: &str) -> Result<CreatorProfile, ProfileError> {
        let url = self.profile_url(creator_id)?;
        debug!(url = %url, "profile.fetch");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ProfileError::Timeout(creator_id.to_string())
            } else {
                ProfileError::Unavailable(format!("connection error for {creator_id}: {e}"))
            }
        })?;

        match response.status() {
            status if status.is_success() => {
                let mut profile: CreatorProfile = response.json().await.map_err(|e| {
                    if e.is_timeout() {
                        ProfileError::Timeout(creator_id.to_string())
                    } else {
                        ProfileError::Unavailable(format!("invalid profile payload: {e}"))
                    }
                })?;
                if profile.creator_id.is_none() {
                    profile.creator_id = Some(creator_id.to_string());
                }
                Ok(profile)
            }
            StatusCode::NOT_FOUND => Err(ProfileError::NotFound(creator_id.to_string())),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ProfileError::Unavailable(format!(
                    "{} - {body}",
                    status.as_u16()
                )))
            }
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}
