// Intent routing: classify free-text creator requests before dispatch.

pub mod ambiguity;
pub mod classifier;
pub mod types;

pub use ambiguity::AmbiguityDetector;
pub use classifier::IntentClassifier;
pub use types::{IntentRequest, IntentResponse, IntentType};
