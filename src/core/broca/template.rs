use super::hashtags::derive_hashtags;
use super::traits::{GeneratedContent, GenerationRequest, Generator};
use crate::error::GenerationError;
use async_trait::async_trait;
use std::fmt::Write as _;

/// Deterministic template backend: identical requests yield identical
/// content. Used for tests and offline runs.
pub struct TemplateGenerator {
    platform_tags: Vec<String>,
}

impl TemplateGenerator {
    pub fn new(platform_tags: Vec<String>) -> Self {
        Self { platform_tags }
    }

    fn render_script(request: &GenerationRequest) -> String {
        let topic = &request.topic;
        let mut script = format!("Title: Why {topic} is the future\n\n");
        let _ = writeln!(
            script,
            "[Scene: Host talking to camera] ({} format)",
            request.format
        );
        script.push_str("Host: Have you ever wondered about this?\n");
        let _ = writeln!(script, "Host: Here is what you need to know about {topic}...");

        if !request.constraints.is_empty() {
            let _ = write!(
                script,
                "\n[Notes: Constraints applied: {}]",
                request.constraints.join(", ")
            );
        }
        script
    }

    fn render_caption(request: &GenerationRequest) -> String {
        format!("Check this out! 🚀 #{} #Viral", request.tone)
    }
}

#[async_trait]
impl Generator for TemplateGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedContent, GenerationError> {
        Ok(GeneratedContent {
            script: Self::render_script(request),
            caption: Self::render_caption(request),
            hashtags: derive_hashtags(&request.topic, &self.platform_tags),
        })
    }

    fn name(&self) -> &str {
        "template"
    }
}
