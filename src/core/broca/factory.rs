use super::http::HttpGenerator;
use super::template::TemplateGenerator;
use super::traits::Generator;
use crate::config::GenerationConfig;
use crate::error::ConfigError;
use std::sync::Arc;

/// Select the generation backend named in config.
pub fn create_generator(config: &GenerationConfig) -> Result<Arc<dyn Generator>, ConfigError> {
    match config.backend.as_str() {
        "template" | "mock" => Ok(Arc::new(TemplateGenerator::new(
            config.platform_tags.clone(),
        ))),
        "http" => {
            let endpoint = config.endpoint.as_deref().ok_or_else(|| {
                ConfigError::Validation(
                    "generation.endpoint is required for the http backend".into(),
                )
            })?;
            Ok(Arc::new(HttpGenerator::new(
                endpoint,
                config.api_key.as_deref(),
                config.timeout_secs,
                config.platform_tags.clone(),
            )))
        }
        other => Err(ConfigError::UnknownBackend {
            kind: "generation",
            name: other.to_string(),
        }),
    }
}
