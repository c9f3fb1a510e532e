use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(backend) = std::env::var("CREATORCORTEX_GENERATION_BACKEND")
            && !backend.is_empty()
        {
            self.generation.backend = backend;
        }

        if let Ok(endpoint) = std::env::var("CREATORCORTEX_GENERATION_ENDPOINT")
            && !endpoint.is_empty()
        {
            self.generation.endpoint = Some(endpoint);
        }

        if let Ok(key) = std::env::var("CREATORCORTEX_GENERATION_API_KEY")
            && !key.is_empty()
        {
            self.generation.api_key = Some(key);
        }

        if let Ok(url) = std::env::var("CREATORCORTEX_PROFILE_URL")
            && !url.is_empty()
        {
            self.profiles.base_url = Some(url);
        }

        if let Ok(backend) = std::env::var("CREATORCORTEX_AUDIT_BACKEND")
            && !backend.is_empty()
        {
            self.audit.backend = backend;
        }

        if let Ok(level) = std::env::var("CREATORCORTEX_LOG_LEVEL")
            && !level.is_empty()
        {
            self.observability.log_level = level;
        }
    }
}
