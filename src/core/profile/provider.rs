use super::http::HttpProfileProvider;
use super::types::CreatorProfile;
use crate::config::ProfileSourceConfig;
use crate::error::ProfileError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Source of creator profiles, keyed by creator id.
///
/// Any error is fatal to the pipeline call that requested the profile.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    async fn fetch_profile(&self, creator_id: &str) -> Result<CreatorProfile, ProfileError>;

    fn name(&self) -> &str;
}

/// Map-backed provider for tests and local runs.
#[derive(Default)]
pub struct InMemoryProfileProvider {
    profiles: RwLock<HashMap<String, CreatorProfile>>,
}

impl InMemoryProfileProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, creator_id: impl Into<String>, profile: CreatorProfile) {
        let mut profiles = self
            .profiles
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        profiles.insert(creator_id.into(), profile);
    }
}

#[async_trait]
impl ProfileProvider for InMemoryProfileProvider {
    async fn fetch_profile(&self, creator_id: &str) -> Result<CreatorProfile, ProfileError> {
        let profiles = self
            .profiles
            .read()
            .map_err(|e| ProfileError::Unavailable(format!("profile map poisoned: {e}")))?;
        profiles
            .get(creator_id)
            .cloned()
            .ok_or_else(|| ProfileError::NotFound(creator_id.to_string()))
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Build the configured provider. Without a service URL the caller gets an
/// empty in-memory provider.
pub fn create_profile_provider(config: &ProfileSourceConfig) -> Arc<dyn ProfileProvider> {
    match config.base_url.as_deref() {
        Some(url) if !url.trim().is_empty() => {
            Arc::new(HttpProfileProvider::new(url, config.timeout_ms))
        }
        _ => Arc::new(InMemoryProfileProvider::new()),
    }
}
