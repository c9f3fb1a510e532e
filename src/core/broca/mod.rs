// Broca: pluggable content generation backends.

pub mod factory;
pub mod hashtags;
pub mod http;
pub mod template;
pub mod traits;

pub use factory::create_generator;
pub use hashtags::derive_hashtags;
pub use http::HttpGenerator;
pub use template::TemplateGenerator;
pub use traits::{GeneratedContent, GenerationRequest, Generator};
